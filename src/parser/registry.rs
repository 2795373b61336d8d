use super::{EditorParser, FORMAT_NAME, Parser};
use crate::error::ParseError;
use std::collections::HashMap;

/// Dispatch table for input format parsers
///
/// Built explicitly by the host application and handed to whatever needs to
/// pick a parser.
pub struct ParserRegistry {
    /// Format name -> Parser mapping
    map: HashMap<String, Box<dyn Parser>>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry with every format this crate provides
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FORMAT_NAME, EditorParser::default());
        registry
    }

    /// Register a parser under a format name, replacing any previous one
    ///
    /// # Example
    /// ```ignore
    /// registry.register("codelabseditor", EditorParser::default());
    /// ```
    pub fn register(&mut self, format: impl Into<String>, parser: impl Parser + 'static) {
        self.map.insert(format.into(), Box::new(parser));
    }

    /// Select the parser for a format name
    pub fn select(&self, format: &str) -> Option<&dyn Parser> {
        self.map.get(format).map(|p| &**p)
    }

    /// Like [`select`](Self::select), but unknown formats are an error
    pub fn get_or_err(&self, format: &str) -> Result<&dyn Parser, ParseError> {
        self.select(format)
            .ok_or_else(|| ParseError::UnknownFormat(format.to_string()))
    }

    /// Get the number of registered parsers
    pub fn parser_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered format names
    pub fn registered_formats(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
