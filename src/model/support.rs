use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportConfig {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub links: Vec<SupportLink>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub merch: Vec<MerchItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportLink {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub label: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchItem {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "crate::model::opt_string_or_number")]
    pub stock: Option<String>,
    #[serde(default)]
    pub drop_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
