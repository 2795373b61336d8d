use super::{Segment, SegmentBase};
use crate::nullable::null_as_default;
use crate::types::{ListNode, Node};
use serde::Deserialize;

/// Code snippet with an optional caption
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSegment {
    #[serde(flatten)]
    pub base: SegmentBase,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code_snippet: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    /// Carried through from the editor, not used when rendering
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
}

impl Segment for CodeSegment {
    fn to_nodes(&self) -> ListNode {
        let mut content = self.base.fragment();

        // A link only shows up as part of a caption
        if !self.caption.is_empty() {
            let mut caption = Node::text(&self.caption);
            if !self.link.is_empty() {
                caption = Node::url(&self.link, caption);
            }
            content.append(Node::header(3, caption));
        }

        content.append(Node::code(&self.code_snippet, false));
        content
    }

    fn environments(&self) -> &[String] {
        self.base.environments()
    }
}
