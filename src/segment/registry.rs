use super::{CodeSegment, Segment, UnimplementedSegment};
use crate::error::ParseError;
use crate::snapshot::SegmentContainer;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::collections::HashMap;
use tracing::{trace, warn};

/// Decodes one segment payload into a concrete segment
pub type DecodeFn =
    Box<dyn Fn(&RawValue) -> Result<Box<dyn Segment>, serde_json::Error> + Send + Sync>;

/// Decode `payload` straight into `T`, a `null` payload into `T::default()`
///
/// Suits any segment kind whose schema is its serde representation:
/// `registry.register("CodeSegment", decode_as::<CodeSegment>)`.
pub fn decode_as<T>(payload: &RawValue) -> Result<Box<dyn Segment>, serde_json::Error>
where
    T: Segment + DeserializeOwned + Default + 'static,
{
    let segment = serde_json::from_str::<Option<T>>(payload.get())?.unwrap_or_default();
    Ok(Box::new(segment))
}

/// Dispatch table from segment type tag to decoder
///
/// Tags without a decoder fall back to [`UnimplementedSegment`].
pub struct SegmentRegistry {
    /// Type tag -> decoder mapping
    map: HashMap<String, DecodeFn>,
}

impl SegmentRegistry {
    /// Create an empty registry where every tag falls back
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry with every segment kind this crate knows about
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("CodeSegment", decode_as::<CodeSegment>);
        registry
    }

    /// Register a decoder for a type tag, replacing any previous one
    ///
    /// # Example
    /// ```ignore
    /// registry.register("ImageSegment", decode_as::<ImageSegment>);
    /// ```
    pub fn register<F>(&mut self, kind: impl Into<String>, decode: F)
    where
        F: Fn(&RawValue) -> Result<Box<dyn Segment>, serde_json::Error> + Send + Sync + 'static,
    {
        self.map.insert(kind.into(), Box::new(decode));
    }

    /// Decode a container into its segment
    ///
    /// A payload that doesn't fit the registered schema is an error.
    pub fn decode(&self, container: &SegmentContainer) -> Result<Box<dyn Segment>, ParseError> {
        match self.map.get(&container.kind) {
            Some(decode) => {
                trace!(kind = %container.kind, fallback = false, "decoding segment");
                Ok(decode(&*container.payload)?)
            }
            None => {
                trace!(kind = %container.kind, fallback = true, "decoding segment");
                warn!(kind = %container.kind, "no decoder for segment type, using placeholder");
                let segment = UnimplementedSegment::decode(&container.kind, &container.payload)?;
                Ok(Box::new(segment))
            }
        }
    }

    /// Decode every container in order, stopping at the first failure
    pub fn decode_all(
        &self,
        containers: &[SegmentContainer],
    ) -> Result<Vec<Box<dyn Segment>>, ParseError> {
        containers.iter().map(|c| self.decode(c)).collect()
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.map.contains_key(kind)
    }

    /// Number of registered decoders (excluding fallback)
    pub fn decoder_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered type tags
    pub fn registered_kinds(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for SegmentRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
