//! Lexical-pattern scoring
//!
//! Diffs each matching item and counts literal substrings (language idioms)
//! in the touched fragments. Items whose path does not match the suffix
//! filter are skipped before diffing: diffing untouched file types wastes
//! work and risks false positives from unrelated content.

use crate::analysis::score::{ContributionScore, ScoreOriginator, SkillTag, tags};
use crate::analysis::scorer::ContributionScorer;
use crate::contribution::Contribution;
use crate::diff;
use crate::error::Result;

/// Scores occurrences of literal idiom markers in touched content.
///
/// Emits one record per matching item whose touched fragments contain at
/// least one needle; the value is the cumulative hit count across that
/// item's fragments. A needle hits at most once per fragment.
///
/// Error policy: item-isolated. A failure evaluating one item skips that
/// item; results already computed for other items are kept.
#[derive(Debug, Clone)]
pub struct LexicalPatternScorer {
    originator: ScoreOriginator,
    tag: SkillTag,
    suffix: String,
    needles: Vec<String>,
}

impl LexicalPatternScorer {
    pub fn new(
        originator: impl Into<String>,
        tag: SkillTag,
        suffix: impl Into<String>,
        needles: Vec<String>,
    ) -> Self {
        Self {
            originator: ScoreOriginator::new(originator),
            tag,
            suffix: suffix.into(),
            needles,
        }
    }

    /// Detects Java 8 stream pipeline usage in touched Java code.
    pub fn java_streams() -> Self {
        Self::new(
            "java-8-streams",
            SkillTag::new(tags::JAVA_8_STREAMS),
            ".java",
            vec![".stream()".to_string(), ".parallelStream()".to_string()],
        )
    }

    fn hits_in(&self, fragment: &str) -> usize {
        self.needles
            .iter()
            .filter(|needle| fragment.contains(needle.as_str()))
            .count()
    }
}

impl ContributionScorer for LexicalPatternScorer {
    fn originator(&self) -> ScoreOriginator {
        self.originator.clone()
    }

    fn score(&self, contribution: &Contribution) -> Result<Vec<ContributionScore>> {
        let mut scores = Vec::new();

        for item in contribution.items() {
            if !item.path_matches_suffix(&self.suffix) {
                continue;
            }

            let touched = diff::diff(item.previous_content(), item.content());
            let hits: usize = touched
                .touched_content()
                .iter()
                .map(|fragment| self.hits_in(fragment))
                .sum();

            if hits > 0 {
                #[allow(clippy::cast_precision_loss)]
                let value = hits as f64;
                scores.push(ContributionScore::new(
                    self.tag.clone(),
                    value,
                    self.originator.clone(),
                )?);
            }
        }

        Ok(scores)
    }
}
