use serde::{Deserialize, Serialize};

use crate::model::creator::Creator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub members: Vec<String>,
}

impl Team {
    /// Resolve member ids against the creator list, preserving member order.
    /// Ids with no matching creator are skipped.
    pub fn resolve_members<'a>(&self, creators: &'a [Creator]) -> Vec<&'a Creator> {
        self.members
            .iter()
            .filter_map(|id| creators.iter().find(|c| &c.id == id))
            .collect()
    }
}
