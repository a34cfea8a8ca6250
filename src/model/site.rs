use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contents of `config.json` on the data origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default = "default_demo_mode")]
    pub demo_mode: bool,
    /// Keys this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_demo_mode() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { demo_mode: true, extra: Map::new() }
    }
}

/// Opaque feature flag mapping from `data/feature_flags.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(pub Map<String, Value>);

impl FeatureFlags {
    /// A flag is enabled when present and JSON-truthy (`true`, non-zero number, non-empty string).
    pub fn enabled(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            _ => false,
        }
    }
}
