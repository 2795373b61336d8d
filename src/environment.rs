//! Environment tag handling
//!
//! Tags name the audiences a step renders for ("web", "kiosk", ...). They are
//! kept lowercased, sorted and free of duplicates from the moment a segment is
//! decoded, so everything downstream can compare them directly.

use serde::{Deserialize, Deserializer};

/// Lowercase, sort and dedup a collection of environment names
pub fn normalize_environments<I, S>(environments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = environments
        .into_iter()
        .map(|env| env.as_ref().to_lowercase())
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized
}

/// Tags for a step built from its segments' tags
///
/// A segment without tags is visible everywhere, which makes the whole step
/// unrestricted. Otherwise the step renders wherever any segment does.
pub fn aggregate_environments<'a, I>(segment_environments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut union = Vec::new();
    for environments in segment_environments {
        if environments.is_empty() {
            return Vec::new();
        }
        union.extend_from_slice(environments);
    }
    normalize_environments(union)
}

/// Serde helper that normalizes tags while decoding; `null` means no tags
pub(crate) fn deserialize_normalized<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(d)?.unwrap_or_default();
    Ok(normalize_environments(raw))
}
