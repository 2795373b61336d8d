mod code;
mod registry;
mod unimplemented;


pub use code::CodeSegment;
pub use registry::{DecodeFn, SegmentRegistry, decode_as};
pub use unimplemented::UnimplementedSegment;

use crate::environment::{deserialize_normalized, normalize_environments};
use crate::types::ListNode;
use serde::Deserialize;
use std::fmt::Debug;

/// Core trait that every segment kind implements
pub trait Segment: Debug {
    /// Render this segment into a content fragment
    ///
    /// The fragment is a list stamped with the segment's environments; see
    /// [`SegmentBase::fragment`].
    fn to_nodes(&self) -> ListNode;

    /// Normalized environments this segment was restricted to
    fn environments(&self) -> &[String];
}

/// Fields shared by every segment kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBase {
    #[serde(default, deserialize_with = "deserialize_normalized")]
    selected_environments: Vec<String>,
}

impl SegmentBase {
    pub fn new<I, S>(environments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            selected_environments: normalize_environments(environments),
        }
    }

    pub fn environments(&self) -> &[String] {
        &self.selected_environments
    }

    /// Empty list carrying this segment's environments
    pub fn fragment(&self) -> ListNode {
        ListNode::with_env(self.selected_environments.clone())
    }
}
