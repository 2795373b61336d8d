use super::{Segment, SegmentBase};
use crate::types::{ListNode, Node};
use serde_json::value::RawValue;

pub const UNIMPLEMENTED_HEADING: &str = "Unimplemented segment";

/// Fallback for segment kinds without a registered decoder
///
/// Renders a visible placeholder naming the original kind so unsupported
/// content never disappears silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnimplementedSegment {
    pub base: SegmentBase,
    pub original_kind: String,
}

impl UnimplementedSegment {
    /// Decode only the shared fields of `payload`; a `null` payload has none
    pub fn decode(kind: &str, payload: &RawValue) -> Result<Self, serde_json::Error> {
        let base = serde_json::from_str::<Option<SegmentBase>>(payload.get())?.unwrap_or_default();
        Ok(Self {
            base,
            original_kind: kind.to_string(),
        })
    }
}

impl Segment for UnimplementedSegment {
    fn to_nodes(&self) -> ListNode {
        let mut content = self.base.fragment();
        content.append(Node::header(2, Node::text(UNIMPLEMENTED_HEADING)));
        content.append(Node::text(&self.original_kind));
        content
    }

    fn environments(&self) -> &[String] {
        self.base.environments()
    }
}
