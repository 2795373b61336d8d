use super::Parser;
use crate::assemble::assemble_codelab;
use crate::error::ParseError;
use crate::segment::SegmentRegistry;
use crate::snapshot::decode_snapshot;
use crate::types::{Codelab, Node};
use std::io::Read;

/// Name the codelabs-editor format is registered under
pub const FORMAT_NAME: &str = "codelabseditor";

/// Largest export accepted by default
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 50 * 1024 * 1024; // 50 MB

/// Parser for JSON exports of the codelabs editor
pub struct EditorParser {
    segments: SegmentRegistry,
    max_input_size: u64,
}

/// Builder for configuring an [`EditorParser`]
pub struct EditorParserBuilder {
    segments: SegmentRegistry,
    max_input_size: u64,
}

impl EditorParserBuilder {
    /// Create a new builder with default limits and segment kinds
    pub fn new() -> Self {
        Self {
            segments: SegmentRegistry::with_defaults(),
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }

    /// Set maximum export size in bytes
    pub fn max_input_size(mut self, size: u64) -> Self {
        self.max_input_size = size;
        self
    }

    /// Replace the segment registry
    pub fn segment_registry(mut self, segments: SegmentRegistry) -> Self {
        self.segments = segments;
        self
    }

    pub fn build(self) -> EditorParser {
        EditorParser {
            segments: self.segments,
            max_input_size: self.max_input_size,
        }
    }
}

impl Default for EditorParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorParser {
    pub fn builder() -> EditorParserBuilder {
        EditorParserBuilder::new()
    }

    pub fn segment_registry(&self) -> &SegmentRegistry {
        &self.segments
    }

    pub fn max_input_size(&self) -> u64 {
        self.max_input_size
    }

    /// Parse an export that is already in memory
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Codelab, ParseError> {
        self.check_size(bytes.len() as u64)?;
        let snapshot = decode_snapshot(bytes)?;
        assemble_codelab(snapshot, &self.segments)
    }

    fn check_size(&self, size: u64) -> Result<(), ParseError> {
        if size > self.max_input_size {
            return Err(ParseError::InputTooLarge {
                size,
                max: self.max_input_size,
            });
        }
        Ok(())
    }
}

impl Default for EditorParser {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Parser for EditorParser {
    fn parse(&self, reader: &mut dyn Read) -> Result<Codelab, ParseError> {
        // Read one byte past the limit so oversized input is detectable
        let mut bytes = Vec::new();
        reader
            .take(self.max_input_size.saturating_add(1))
            .read_to_end(&mut bytes)?;
        self.parse_bytes(&bytes)
    }

    fn parse_fragment(&self, _reader: &mut dyn Read) -> Result<Vec<Node>, ParseError> {
        Err(ParseError::Unsupported(
            "fragment parsing for codelabs-editor exports",
        ))
    }
}
