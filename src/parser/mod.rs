mod editor;
mod registry;


pub use editor::{DEFAULT_MAX_INPUT_SIZE, EditorParser, EditorParserBuilder, FORMAT_NAME};
pub use registry::ParserRegistry;

use crate::error::ParseError;
use crate::types::{Codelab, Node};
use std::io::Read;

/// Core trait that all input format parsers implement
pub trait Parser: Send + Sync {
    /// Parse a complete document
    fn parse(&self, reader: &mut dyn Read) -> Result<Codelab, ParseError>;

    /// Parse a fragment of a document into bare nodes
    ///
    /// Formats that can't be re-entered below the document level return
    /// [`ParseError::Unsupported`].
    fn parse_fragment(&self, reader: &mut dyn Read) -> Result<Vec<Node>, ParseError>;
}
