use crate::error::AppError;
use crate::model::requests::{RuleGroup, SegmentCreate};
use crate::presentation::segment::SegmentDetail;
use async_trait::async_trait;

/// Interface for the segment service
#[async_trait]
pub trait SegmentService: Send + Sync {
    /// Creates a segment on a list
    ///
    /// # Returns
    /// * The identifier of the new segment
    async fn create_segment(&self, list_id: &str, segment: &SegmentCreate)
    -> Result<String, AppError>;

    /// Replaces the title of a segment, and its rules when any are given
    async fn update_segment(
        &self,
        segment_id: &str,
        segment: &SegmentCreate,
    ) -> Result<(), AppError>;

    /// Appends a rule group to an existing segment
    async fn add_segment_rule_group(
        &self,
        segment_id: &str,
        group: &RuleGroup,
    ) -> Result<(), AppError>;

    /// Gets the details of a segment
    async fn segment_detail(&self, segment_id: &str) -> Result<SegmentDetail, AppError>;
}
