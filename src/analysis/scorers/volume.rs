//! Touched-volume scoring
//!
//! Sums the character length of all touched fragments across matching
//! items and square-roots the total. The concave transform is deliberate:
//! skill signal from additional changed volume diminishes rather than
//! scaling linearly, and sqrt pins that behavior exactly (a raw sum of 25
//! scores 5.0).

use crate::analysis::score::{
    ContributionScore, ScoreOriginator, ScorerDefinition, SkillTag, tags,
};
use crate::analysis::scorer::ContributionScorer;
use crate::contribution::Contribution;
use crate::diff;
use crate::error::{Result, ScanError};

/// Scores the volume of touched content, dampened by square root.
///
/// Emits exactly one record when at least one item matches the suffix
/// filter, none otherwise. Declares a [`ScorerDefinition`], so the
/// aggregator substitutes the baseline when nothing matched.
///
/// Error policy: all-or-nothing.
#[derive(Debug, Clone)]
pub struct TouchedVolumeScorer {
    originator: ScoreOriginator,
    tag: SkillTag,
    suffix: String,
    baseline: f64,
}

impl TouchedVolumeScorer {
    pub fn new(
        originator: impl Into<String>,
        tag: SkillTag,
        suffix: impl Into<String>,
        baseline: f64,
    ) -> Result<Self> {
        if !baseline.is_finite() || baseline < 0.0 {
            return Err(ScanError::Config(format!(
                "volume baseline for tag '{tag}' must be finite and non-negative, got {baseline}"
            )));
        }
        Ok(Self {
            originator: ScoreOriginator::new(originator),
            tag,
            suffix: suffix.into(),
            baseline,
        })
    }

    /// Volume of touched Java code, baseline 0.0.
    pub fn java() -> Self {
        Self {
            originator: ScoreOriginator::new("java-touched-volume"),
            tag: SkillTag::new(tags::JAVA),
            suffix: ".java".to_string(),
            baseline: 0.0,
        }
    }
}

impl ContributionScorer for TouchedVolumeScorer {
    fn originator(&self) -> ScoreOriginator {
        self.originator.clone()
    }

    fn definition(&self) -> Option<ScorerDefinition> {
        // baseline is validated at construction, so this cannot fail
        ScorerDefinition::new(self.originator.clone(), self.tag.clone(), self.baseline).ok()
    }

    fn score(&self, contribution: &Contribution) -> Result<Vec<ContributionScore>> {
        let mut matched = false;
        let mut total = 0usize;

        for item in contribution.items() {
            if !item.path_matches_suffix(&self.suffix) {
                continue;
            }
            matched = true;
            total += diff::diff(item.previous_content(), item.content()).total_len();
        }

        if !matched {
            return Ok(Vec::new());
        }

        #[allow(clippy::cast_precision_loss)]
        let value = (total as f64).sqrt();
        Ok(vec![ContributionScore::new(
            self.tag.clone(),
            value,
            self.originator.clone(),
        )?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contribution::{ContributionItem, Contributor};
    use chrono::Utc;

    fn contribution(items: Vec<ContributionItem>) -> Contribution {
        Contribution::new(Contributor::new("alice"), Utc::now(), items)
    }

    #[test]
    fn sums_across_items_then_square_roots() {
        // Touched totals of 9 and 16 characters; sqrt(25) = 5.0.
        let scorer = TouchedVolumeScorer::new("volume", SkillTag::new("text"), ".txt", 0.0).unwrap();
        let c = contribution(vec![
            ContributionItem::new("a.txt", "", "123456789\n").unwrap(),
            ContributionItem::new("b.txt", "", "12345678\n12345678\n").unwrap(),
        ]);
        let scores = scorer.score(&c).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].value(), 5.0);
    }

    #[test]
    fn unchanged_content_scores_zero() {
        let scorer = TouchedVolumeScorer::java();
        let c = contribution(vec![
            ContributionItem::new("A.java", "class A {}\n", "class A {}\n").unwrap(),
        ]);
        let scores = scorer.score(&c).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].value(), 0.0);
    }

    #[test]
    fn no_matching_items_emits_nothing() {
        let scorer = TouchedVolumeScorer::java();
        let c = contribution(vec![ContributionItem::new("notes.txt", "", "hi").unwrap()]);
        assert!(scorer.score(&c).unwrap().is_empty());
    }

    #[test]
    fn declares_a_baseline_definition() {
        let scorer = TouchedVolumeScorer::java();
        let definition = scorer.definition().unwrap();
        assert_eq!(definition.baseline(), 0.0);
        assert_eq!(definition.tag().as_str(), tags::JAVA);
    }

    #[test]
    fn rejects_negative_baseline() {
        let result = TouchedVolumeScorer::new("volume", SkillTag::new("text"), ".txt", -1.0);
        assert!(result.is_err());
    }
}
