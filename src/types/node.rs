use serde::Serialize;

/// A node of the assembled content tree handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Ordered children, optionally restricted to some environments
    List(ListNode),
    /// Plain text run
    Text { value: String },
    /// Header of the given level wrapping a single child
    Header { level: u8, content: Box<Node> },
    /// Hyperlink wrapping a single child
    Url { href: String, content: Box<Node> },
    /// Code block; `source` marks snippets pulled from an external repository
    Code { value: String, source: bool },
}

impl Node {
    pub fn list(nodes: Vec<Node>) -> Self {
        Node::List(ListNode::new(nodes))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn header(level: u8, content: Node) -> Self {
        Node::Header {
            level,
            content: Box::new(content),
        }
    }

    pub fn url(href: impl Into<String>, content: Node) -> Self {
        Node::Url {
            href: href.into(),
            content: Box::new(content),
        }
    }

    pub fn code(value: impl Into<String>, source: bool) -> Self {
        Node::Code {
            value: value.into(),
            source,
        }
    }
}

impl From<ListNode> for Node {
    fn from(list: ListNode) -> Self {
        Node::List(list)
    }
}

/// Ordered container node
///
/// `env` is empty when the content renders for every environment. Callers
/// hand it tags that are already normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListNode {
    nodes: Vec<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    env: Vec<String>,
}

impl ListNode {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            env: Vec::new(),
        }
    }

    /// Empty list stamped with environment tags
    pub fn with_env(env: Vec<String>) -> Self {
        Self {
            nodes: Vec::new(),
            env,
        }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn env(&self) -> &[String] {
        &self.env
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
