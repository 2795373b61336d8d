//! Codelab-level metadata as exported by the editor

use crate::environment::normalize_environments;
use crate::error::ParseError;
use crate::nullable::null_as_default;
use crate::snapshot::RawStep;
use crate::types::Meta;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default", rename = "relativeURL")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default", rename = "feedbackURL")]
    pub feedback_url: String,
    #[serde(deserialize_with = "null_as_default", rename = "analyticsAccountID")]
    pub analytics_account_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub environments: Vec<String>,
}

impl RawMetadata {
    /// Build the document `Meta`
    ///
    /// Title and author live on the snapshot rather than in the metadata
    /// block; the total duration is summed from the steps.
    pub fn parse(&self, steps: &[RawStep], title: &str, author: &str) -> Result<Meta, ParseError> {
        let mut duration = Duration::ZERO;
        for step in steps {
            duration = duration.saturating_add(step.duration()?);
        }

        let authors = if author.is_empty() {
            Vec::new()
        } else {
            vec![author.to_string()]
        };

        let categories = if self.category.is_empty() {
            Vec::new()
        } else {
            vec![self.category.clone()]
        };

        let status = Some(self.status.to_lowercase()).filter(|s| !s.is_empty());

        Ok(Meta {
            id: self.id.clone(),
            title: title.to_string(),
            summary: self.summary.clone(),
            authors,
            categories,
            tags: normalize_environments(&self.environments),
            status,
            feedback: self.feedback_url.clone(),
            ga: self.analytics_account_id.clone(),
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(title: &str, duration: i64) -> RawStep {
        RawStep {
            segments: Vec::new(),
            title: title.to_string(),
            duration,
        }
    }

    #[test]
    fn test_decode_full_metadata() {
        let raw: RawMetadata = serde_json::from_str(
            r#"{
                "summary": "A sample codelab",
                "relativeURL": "sample2",
                "feedbackURL": "feedback.com",
                "analyticsAccountID": "lkjhbv",
                "category": "Ads",
                "status": "Published",
                "environments": ["Web", "Kiosk"]
            }"#,
        )
        .unwrap();

        assert_eq!(raw.id, "sample2");
        assert_eq!(raw.feedback_url, "feedback.com");
        assert_eq!(raw.analytics_account_id, "lkjhbv");
        assert_eq!(raw.environments, vec!["Web", "Kiosk"]);
    }

    #[test]
    fn test_decode_missing_fields_default() {
        let raw: RawMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(raw, RawMetadata::default());
    }

    #[test]
    fn test_decode_wrong_shape_fails() {
        let result: Result<RawMetadata, _> = serde_json::from_str(r#"{"environments": "Web"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_meta() {
        let raw = RawMetadata {
            summary: "A sample codelab".to_string(),
            id: "sample2".to_string(),
            feedback_url: "feedback.com".to_string(),
            analytics_account_id: "lkjhbv".to_string(),
            category: "Ads".to_string(),
            status: "Published".to_string(),
            environments: vec!["Web".to_string(), "Kiosk".to_string()],
        };
        let steps = vec![step("one", 6), step("two", 1), step("three", 0)];

        let meta = raw.parse(&steps, "Untitled", "Joe Bloggs").unwrap();

        assert_eq!(meta.id, "sample2");
        assert_eq!(meta.title, "Untitled");
        assert_eq!(meta.authors, vec!["Joe Bloggs"]);
        assert_eq!(meta.categories, vec!["Ads"]);
        assert_eq!(meta.tags, vec!["kiosk", "web"]);
        assert_eq!(meta.status.as_deref(), Some("published"));
        assert_eq!(meta.feedback, "feedback.com");
        assert_eq!(meta.ga, "lkjhbv");
        assert_eq!(meta.duration, Duration::from_secs(7 * 60));
    }

    #[test]
    fn test_parse_empty_metadata() {
        let meta = RawMetadata::default().parse(&[], "", "").unwrap();
        assert!(meta.authors.is_empty());
        assert!(meta.categories.is_empty());
        assert!(meta.tags.is_empty());
        assert_eq!(meta.status, None);
        assert_eq!(meta.duration, Duration::ZERO);
    }

    #[test]
    fn test_parse_negative_duration_fails() {
        let steps = vec![step("fine", 3), step("broken", -2)];
        let err = RawMetadata::default().parse(&steps, "t", "a").unwrap_err();

        match err {
            ParseError::NegativeDuration { step, minutes } => {
                assert_eq!(step, "broken");
                assert_eq!(minutes, -2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
