use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(default, deserialize_with = "crate::model::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub platform_links: Vec<PlatformLink>,
    #[serde(default)]
    pub live_status: Option<LiveStatus>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub representative_video: Option<String>,
}

impl Creator {
    pub fn is_live(&self) -> bool {
        self.live_status.as_ref().is_some_and(|ls| ls.on)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformLink {
    #[serde(rename = "type", default, deserialize_with = "crate::model::null_as_default")]
    pub type_field: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    #[serde(default)]
    pub on: bool,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "crate::model::opt_string_or_number")]
    pub viewers: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}
