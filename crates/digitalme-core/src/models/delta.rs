use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::attributes::StyleAttribute;

/// Value of a basic attribute before or after a refinement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Enum attributes, by their serialized name.
    Label(String),
    /// Term sets, in weight order.
    Terms(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AttributeChange {
    pub attribute: StyleAttribute,
    pub old_value: AttributeValue,
    pub new_value: AttributeValue,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceShift {
    pub attribute: StyleAttribute,
    pub old: f64,
    pub new: f64,
}

/// What one refinement batch did to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeltaReport {
    pub refinement_id: String,
    pub changes: Vec<AttributeChange>,
    pub confidence_shifts: Vec<ConfidenceShift>,
    pub words_analyzed: u64,
    /// New overall confidence minus old.
    pub confidence_change: f64,
    /// blake3 hex digest of the joined batch text.
    pub batch_hash: String,
    pub timestamp: DateTime<Utc>,
}

impl DeltaReport {
    /// Report for a batch that was accepted but had nothing to learn from.
    pub fn empty(batch_hash: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            refinement_id: uuid::Uuid::new_v4().to_string(),
            changes: Vec::new(),
            confidence_shifts: Vec::new(),
            words_analyzed: 0,
            confidence_change: 0.0,
            batch_hash,
            timestamp,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.confidence_shifts.is_empty()
    }

    pub fn change_for(&self, attribute: StyleAttribute) -> Option<&AttributeChange> {
        self.changes.iter().find(|c| c.attribute == attribute)
    }

    pub fn shift_for(&self, attribute: StyleAttribute) -> Option<&ConfidenceShift> {
        self.confidence_shifts.iter().find(|s| s.attribute == attribute)
    }
}
