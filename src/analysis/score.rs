//! Score value types
//!
//! A [`ContributionScore`] is one (tag, value, originator, timestamp)
//! observation emitted by a scorer. Values are immutable; the aggregator
//! and the persistence side only ever read them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Well-known skill tag names. The tag space is open; these are the names
/// the default scorer set emits.
pub mod tags {
    pub const JAVA: &str = "java";
    pub const JAVA_8_STREAMS: &str = "java-8-streams";
}

/// Opaque identifier naming a measurable skill signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillTag(String);

impl SkillTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identity of the scorer that produced a score.
///
/// Assigned explicitly at scorer construction, never derived from runtime
/// type names, so it survives refactors and is identical across runs. Used
/// for traceability only, never for behavior branching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreOriginator(String);

impl ScoreOriginator {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScoreOriginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tagged, attributable score observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionScore {
    tag: SkillTag,
    value: f64,
    originator: ScoreOriginator,
    timestamp: Option<DateTime<Utc>>,
}

impl ContributionScore {
    /// Builds a score with no timestamp; the aggregator stamps it with the
    /// contribution's timestamp. The value must be finite and non-negative.
    pub fn new(tag: SkillTag, value: f64, originator: ScoreOriginator) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(ScanError::InvalidContribution(format!(
                "score value for tag '{tag}' must be finite and non-negative, got {value}"
            )));
        }
        Ok(Self {
            tag,
            value,
            originator,
            timestamp: None,
        })
    }

    pub fn tag(&self) -> &SkillTag {
        &self.tag
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn originator(&self) -> &ScoreOriginator {
        &self.originator
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the score with `timestamp` filled in if it was unset.
    #[must_use]
    pub fn stamped(mut self, timestamp: DateTime<Utc>) -> Self {
        if self.timestamp.is_none() {
            self.timestamp = Some(timestamp);
        }
        self
    }
}

/// Serializes a merged record set for the persistence collaborator.
pub fn scores_to_json(records: &[ContributionScore]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Metadata for scorers that must always be represented by exactly one
/// record per contribution: the tag they target and the baseline value the
/// aggregator substitutes when no signal was found. Distinguishes
/// "explicitly scored zero" from "no opinion".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerDefinition {
    originator: ScoreOriginator,
    tag: SkillTag,
    baseline: f64,
}

impl ScorerDefinition {
    /// The baseline must be finite and non-negative, same as any score value.
    pub fn new(originator: ScoreOriginator, tag: SkillTag, baseline: f64) -> Result<Self> {
        if !baseline.is_finite() || baseline < 0.0 {
            return Err(ScanError::InvalidContribution(format!(
                "baseline for tag '{tag}' must be finite and non-negative, got {baseline}"
            )));
        }
        Ok(Self {
            originator,
            tag,
            baseline,
        })
    }

    pub fn originator(&self) -> &ScoreOriginator {
        &self.originator
    }

    pub fn tag(&self) -> &SkillTag {
        &self.tag
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// The record substituted when the scorer found no signal.
    pub fn baseline_score(&self) -> ContributionScore {
        ContributionScore {
            tag: self.tag.clone(),
            value: self.baseline,
            originator: self.originator.clone(),
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_value() {
        let result = ContributionScore::new(
            SkillTag::new(tags::JAVA),
            -1.0,
            ScoreOriginator::new("test"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_nan_value() {
        let result = ContributionScore::new(
            SkillTag::new(tags::JAVA),
            f64::NAN,
            ScoreOriginator::new("test"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn stamped_fills_only_unset_timestamp() {
        let first = Utc::now();
        let later = first + chrono::Duration::seconds(60);
        let score =
            ContributionScore::new(SkillTag::new(tags::JAVA), 1.0, ScoreOriginator::new("test"))
                .unwrap();
        let stamped = score.stamped(first);
        assert_eq!(stamped.timestamp(), Some(first));
        let restamped = stamped.stamped(later);
        assert_eq!(restamped.timestamp(), Some(first));
    }

    #[test]
    fn scores_serialize_to_json() {
        let score =
            ContributionScore::new(SkillTag::new(tags::JAVA), 2.0, ScoreOriginator::new("test"))
                .unwrap()
                .stamped(Utc::now());
        let json = scores_to_json(&[score]).unwrap();
        assert!(json.contains("\"java\""));
        assert!(json.contains("2.0"));
    }

    #[test]
    fn baseline_score_carries_definition_identity() {
        let definition = ScorerDefinition::new(
            ScoreOriginator::new("volume"),
            SkillTag::new(tags::JAVA),
            0.0,
        )
        .unwrap();
        let score = definition.baseline_score();
        assert_eq!(score.value(), 0.0);
        assert_eq!(score.originator().as_str(), "volume");
        assert!(score.timestamp().is_none());
    }
}
