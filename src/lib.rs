// Public API exports
pub mod assemble;
pub mod environment;
pub mod error;
pub mod metadata;
mod nullable;
pub mod parser;
pub mod segment;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod test_logs;

// Re-export main types for convenience
pub use error::ParseError;

pub use parser::{EditorParser, EditorParserBuilder, Parser, ParserRegistry};

pub use segment::{CodeSegment, Segment, SegmentBase, SegmentRegistry, UnimplementedSegment};

pub use snapshot::{Snapshot, decode_snapshot};

pub use types::{Codelab, ListNode, Meta, Node, Step};

pub use environment::normalize_environments;
