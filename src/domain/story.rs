//! Story domain model.
//!
//! A [`Story`] is one search hit returned by the Hacker News search API. Its
//! identity is the [`StoryId`]; every other field is display data that never
//! changes once the story has been fetched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Opaque identifier of a story (the API's `objectID`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single search result.
///
/// # Fields
///
/// - `id`: Unique identifier, the only field used for equality of identity
/// - `title`: Story headline
/// - `url`: Link target, empty for text posts
/// - `author`: Submitter's username
/// - `comment_count`: Number of comments
/// - `points`: Score
/// - `created_at`: Unix timestamp of submission, if the API reported one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub comment_count: u32,
    pub points: u32,
    pub created_at: Option<i64>,
}

impl Story {
    /// Creates a story with the given id and title and empty display data.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::domain::Story;
    ///
    /// let story = Story::new("0", "React");
    /// assert_eq!(story.id.as_str(), "0");
    /// assert_eq!(story.points, 0);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: StoryId::new(id),
            title: title.into(),
            url: String::new(),
            author: String::new(),
            comment_count: 0,
            points: 0,
            created_at: None,
        }
    }

    /// Returns a short human-readable age relative to `now`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    ///
    /// Stories without a timestamp yield an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::domain::Story;
    ///
    /// let mut story = Story::new("1", "Redux");
    /// story.created_at = Some(1_000);
    /// assert_eq!(story.age(1_000 + 300), "5m ago");
    /// ```
    #[must_use]
    pub fn age(&self, now: i64) -> String {
        let Some(created_at) = self.created_at else {
            return String::new();
        };
        let diff = now.saturating_sub(created_at);

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_buckets() {
        let mut story = Story::new("1", "t");
        assert_eq!(story.age(100), "");

        story.created_at = Some(0);
        assert_eq!(story.age(30), "just now");
        assert_eq!(story.age(2 * SECONDS_PER_HOUR), "2h ago");
        assert_eq!(story.age(3 * SECONDS_PER_DAY + 5), "3d ago");
    }

    #[test]
    fn age_survives_extreme_timestamps() {
        let mut story = Story::new("1", "t");
        story.created_at = Some(i64::MIN);
        assert!(story.age(1_700_000_000).ends_with("d ago"));

        story.created_at = Some(i64::MAX);
        assert_eq!(story.age(-1_000), "just now");
    }

    #[test]
    fn story_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&StoryId::new("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
