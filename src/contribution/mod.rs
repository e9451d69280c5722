//! Contribution value types
//!
//! A [`Contribution`] is one attributable unit of work (a commit, a patch)
//! by one contributor at one point in time, carrying the full before/after
//! content of every file it touched. Values are immutable once constructed;
//! the ingestion side builds them, scorers only read them.
//!
//! Absent content is modeled as the empty string: an empty previous content
//! means the file was newly created, an empty new content means it was
//! deleted. A [`ContributionItem`] with both sides empty is rejected at
//! construction.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Opaque identity of a contributor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contributor(String);

impl Contributor {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One file touched within a contribution, with full previous and new content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionItem {
    path: String,
    previous_content: String,
    content: String,
}

impl ContributionItem {
    /// Builds an item, enforcing the construction invariants: the path must
    /// be non-empty and at least one of the two content sides must be
    /// non-empty (a file that neither existed before nor exists after is
    /// not a change).
    pub fn new(
        path: impl Into<String>,
        previous_content: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let path = path.into();
        let previous_content = previous_content.into();
        let content = content.into();

        if path.trim().is_empty() {
            return Err(ScanError::InvalidItem {
                path,
                reason: "path must not be empty".to_string(),
            });
        }
        if previous_content.is_empty() && content.is_empty() {
            return Err(ScanError::InvalidItem {
                path,
                reason: "previous and new content must not both be empty".to_string(),
            });
        }

        Ok(Self {
            path,
            previous_content,
            content,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full content before the change; empty for a newly created file.
    pub fn previous_content(&self) -> &str {
        &self.previous_content
    }

    /// Full content after the change; empty for a deleted file.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Case-insensitive suffix match on the trimmed path.
    pub fn path_matches_suffix(&self, suffix: &str) -> bool {
        self.path
            .trim()
            .to_lowercase()
            .ends_with(&suffix.to_lowercase())
    }
}

/// One unit of work by one contributor at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    contributor: Contributor,
    timestamp: DateTime<Utc>,
    items: Vec<ContributionItem>,
}

impl Contribution {
    pub fn new(
        contributor: Contributor,
        timestamp: DateTime<Utc>,
        items: Vec<ContributionItem>,
    ) -> Self {
        Self {
            contributor,
            timestamp,
            items,
        }
    }

    pub fn contributor(&self) -> &Contributor {
        &self.contributor
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Touched files, in the order the ingestion side supplied them.
    pub fn items(&self) -> &[ContributionItem] {
        &self.items
    }
}
