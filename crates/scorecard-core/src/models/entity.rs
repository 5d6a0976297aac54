use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Anything that can be traced back to a scored entity.
pub trait EntityRef {
    fn entity_id(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntityKind {
    Provider,
    Site,
    Payer,
}

/// A provider, site, or payer. Opaque to scoring beyond its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entity {
    pub entity_id: String,
    pub display_name: String,
    pub kind: EntityKind,
    /// Free-form descriptive fields (specialty, panel size, ...).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Entity {
    pub fn new(
        entity_id: impl Into<String>,
        display_name: impl Into<String>,
        kind: EntityKind,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            display_name: display_name.into(),
            kind,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl EntityRef for Entity {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }
}
