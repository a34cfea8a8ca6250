use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::Ko => Locale::En,
            Locale::En => Locale::Ko,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// Label of the toggle button: names the locale it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::Ko => "EN",
            Locale::En => "KO",
        }
    }
}

fn dictionary() -> &'static Value {
    static DICT: OnceLock<Value> = OnceLock::new();
    DICT.get_or_init(|| {
        json!({
            "ko": {
                "nav": { "home": "홈", "live": "라이브", "schedule": "일정", "vod": "VOD", "team": "팀", "support": "후원/굿즈", "notices": "공지" },
                "home": { "title": "홈", "upcoming": "추천 라이브/다음 방송", "newVods": "신규 VOD", "notices": "공지", "seeAll": "전체 보기", "creator": "크리에이터", "watch": "시청하기" },
                "live": { "title": "라이브 허브", "onAir": "지금 방송 중", "filter": "플랫폼 필터:", "all": "전체", "offline": "오프라인", "none": "현재 생방송 중인 채널이 없습니다.", "defaultTitle": "라이브", "viewers": "명", "banner": "지금 생방송: " },
                "schedule": { "title": "편성표/일정", "weekly": "주간 스케줄", "export": "iCal 구독 파일 받기", "static": "기본 .ics", "time": "시간", "name": "제목", "participants": "참여자", "platform": "플랫폼", "link": "바로가기", "watch": "시청" },
                "vod": { "title": "VOD/클립", "search": "제목/태그 검색", "watch": "시청하기" },
                "team": { "title": "팀/크루", "joint": "합동 방송 일정" },
                "support": { "title": "후원/굿즈", "support": "후원", "merch": "굿즈", "go": "이동", "stock": "재고: ", "drop": "드롭: ", "buy": "구매하기" },
                "notices": { "title": "공지/이벤트" },
                "creator": { "notFound": "크리에이터를 찾을 수 없습니다.", "contact": "협업 문의", "mail": "메일: " },
                "admin": { "title": "관리 & 통합 체크리스트", "testNotification": "테스트 알림" },
                "privacy": { "title": "개인정보/청소년 보호·광고 표기" },
                "notify": { "enabled": "알림이 활성화되었습니다", "enabledBody": "방송 시작 알림을 전송합니다(데모).", "unsupported": "이 환경은 알림을 지원하지 않습니다.", "permissionRequired": "상단에서 알림을 먼저 허용하세요.", "test": "테스트", "testBody": "테스트 알림입니다." },
                "embed": { "unavailable": "플레이어를 불러올 수 없습니다." }
            },
            "en": {
                "nav": { "home": "Home", "live": "Live", "schedule": "Schedule", "vod": "VOD", "team": "Teams", "support": "Support", "notices": "Notices" },
                "home": { "title": "Home", "upcoming": "Featured / Up Next", "newVods": "New VODs", "notices": "Notices", "seeAll": "See all", "creator": "Creator", "watch": "Watch" },
                "live": { "title": "Live Hub", "onAir": "On Air", "filter": "Platform:", "all": "All", "offline": "Offline", "none": "Nobody is live right now.", "defaultTitle": "Live", "viewers": " viewers", "banner": "Live now: " },
                "schedule": { "title": "Schedule", "weekly": "Weekly Schedule", "export": "Download iCal file", "static": "Default .ics", "time": "Time", "name": "Title", "participants": "Participants", "platform": "Platform", "link": "Link", "watch": "Watch" },
                "vod": { "title": "VODs/Clips", "search": "Search title/tags", "watch": "Watch" },
                "team": { "title": "Teams/Crews", "joint": "Joint streams" },
                "support": { "title": "Support/Merch", "support": "Support", "merch": "Merch", "go": "Open", "stock": "Stock: ", "drop": "Drop: ", "buy": "Buy" },
                "notices": { "title": "Notices/Events" },
                "creator": { "notFound": "Creator not found.", "contact": "Business inquiries", "mail": "Mail: " },
                "admin": { "title": "Admin & Integration Checklist", "testNotification": "Test notification" },
                "privacy": { "title": "Privacy / Youth Protection / Ad Disclosure" },
                "notify": { "enabled": "Notifications enabled", "enabledBody": "Stream start alerts will be delivered (demo).", "unsupported": "Notifications are not supported here.", "permissionRequired": "Allow notifications first using the toggle at the top.", "test": "Test", "testBody": "This is a test notification." },
                "embed": { "unavailable": "Player unavailable." }
            }
        })
    })
}

/// Translate a dotted key such as `home.title`. Unknown keys translate to themselves.
pub fn t(locale: Locale, key: &str) -> String {
    key.split('.')
        .try_fold(&dictionary()[locale.code()], |node, part| node.get(part))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}
