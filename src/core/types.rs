use serde::{Deserialize, Serialize};

/// A named node of the command network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    /// Optional role classification (e.g. "executive", "security apparatus")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A directed "source issues orders to target" relation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(alias = "Source")]
    pub source: String,
    #[serde(alias = "Target")]
    pub target: String,
    /// Relation classification carried by the dataset; never affects ranking
    #[serde(default, alias = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Relation {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The (source, target) pair used for deduplication
    pub fn key(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }
}
