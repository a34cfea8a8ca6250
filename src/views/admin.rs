use crate::i18n::t;
use crate::markup::{el, Node};
use crate::state::{self, AppState};

const INTEGRATION_CHECKLIST: &[&str] = &[
    "YouTube: search.list(eventType=live + channelId) → videos.list(liveStreamingDetails)",
    "Twitch: Helix API(Streams/Users/Videos) + EventSub",
    "SOOP: 개발자센터 SDK/API 확인, 토큰/레이트리밋 확인",
    "CHZZK: 공식 API(라이브/방송설정/채팅)",
    "임베드: 플랫폼 별 iframe, parent 도메인/TOS 준수",
];

pub fn admin_view(state: &AppState) -> Node {
    let l = state.locale;
    let data_files = [
        state::CREATORS_PATH,
        state::SCHEDULE_PATH,
        state::VODS_PATH,
        state::TEAMS_PATH,
        state::SUPPORT_PATH,
        state::NOTICES_PATH,
    ];

    el("section")
        .class("space-y-6")
        .child(el("h2").class("text-xl font-semibold").text(t(l, "admin.title")))
        .child(
            el("div")
                .class("card space-y-2 text-sm")
                .child(el("h3").class("font-semibold").text("멀티 플랫폼 연동 체크리스트"))
                .child(
                    el("ul")
                        .class("list-disc pl-6 space-y-1")
                        .children(INTEGRATION_CHECKLIST.iter().map(|item| Node::from(el("li").text(*item)))),
                )
                .child(el("p").class("text-gray-600").text(if state.demo {
                    "데모 모드: 정적 데이터 파일만 사용합니다. 실제 키는 config.json에 넣어 사용하세요."
                } else {
                    "실제 키는 config.json에 넣어 사용하세요."
                })),
        )
        .child(
            el("div")
                .class("card space-y-2 text-sm")
                .child(el("h3").class("font-semibold").text("알림/구독 (로컬)"))
                .child(el("p").text("푸시 서버 없이 로컬 알림만 제공합니다."))
                .child(
                    el("button")
                        .id("btn-test-noti")
                        .class("px-3 py-2 bg-indigo-600 text-white rounded-lg")
                        .attr("data-action", "test_notification")
                        .text(t(l, "admin.testNotification")),
                ),
        )
        .child(
            el("div")
                .class("card space-y-2 text-sm")
                .child(el("h3").class("font-semibold").text("데이터 파일"))
                .child(
                    el("ul")
                        .class("list-disc pl-6")
                        .children(data_files.iter().map(|path| Node::from(el("li").child(el("code").text(*path))))),
                ),
        )
        .into()
}

pub fn privacy_view(state: &AppState) -> Node {
    el("section")
        .class("space-y-4")
        .child(el("h2").class("text-xl font-semibold").text(t(state.locale, "privacy.title")))
        .child(el("p").class("text-sm text-gray-700").text(
            "본 사이트는 정적 데이터로 제공됩니다. 쿠키는 최소화되며, 구독/알림 설정은 로컬 저장소만 사용합니다.",
        ))
        .into()
}
