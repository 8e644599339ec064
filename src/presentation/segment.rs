use crate::model::requests::RuleGroup;
use crate::presentation::serialization::{
    deserialize_null_as_default, deserialize_null_as_empty_vec,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Details of a segment, as returned by `GET segments/{id}.json`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SegmentDetail {
    /// Segment identifier
    #[serde(rename = "SegmentID", deserialize_with = "deserialize_null_as_default")]
    pub segment_id: String,
    /// List the segment filters
    #[serde(rename = "ListID", deserialize_with = "deserialize_null_as_default")]
    pub list_id: String,
    /// Segment title
    #[serde(rename = "Title", deserialize_with = "deserialize_null_as_default")]
    pub title: String,
    /// Number of active subscribers currently matching the rules
    #[serde(
        rename = "ActiveSubscribers",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub active_subscribers: i64,
    /// Rule groups; a subscriber must match every group
    #[serde(
        rename = "RuleGroups",
        deserialize_with = "deserialize_null_as_empty_vec"
    )]
    pub rule_groups: Vec<RuleGroup>,
}

impl SegmentDetail {
    /// Total number of rules across all groups
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rule_groups.iter().map(|group| group.rules.len()).sum()
    }
}
