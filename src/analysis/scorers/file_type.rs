//! Path-suffix scoring
//!
//! Matches contribution items by file-type suffix (trimmed,
//! case-insensitive) and emits one of three signal shapes. The shapes are
//! deliberately kept distinct rather than unified: downstream aggregation
//! treats "one record per occurrence" and "one record with a summed count"
//! differently, and both exist in the wild.

use crate::analysis::score::{ContributionScore, ScoreOriginator, SkillTag, tags};
use crate::analysis::scorer::ContributionScorer;
use crate::contribution::Contribution;
use crate::diff;
use crate::error::Result;

/// What a [`FileTypeScorer`] emits for matching items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileTypeSignal {
    /// One record per matching item, with a fixed value.
    PerFile(f64),
    /// One record whose value is the number of matching items.
    FileCount,
    /// One record whose value is the total number of touched fragments
    /// across all matching items (runs the diff engine per item).
    TouchedLineCount,
}

/// Scores contributions by the file types they touch.
///
/// Error policy: all-or-nothing. There is no per-item failure mode; either
/// the whole contribution scores or the call fails.
#[derive(Debug, Clone)]
pub struct FileTypeScorer {
    originator: ScoreOriginator,
    tag: SkillTag,
    suffix: String,
    signal: FileTypeSignal,
}

impl FileTypeScorer {
    pub fn new(
        originator: impl Into<String>,
        tag: SkillTag,
        suffix: impl Into<String>,
        signal: FileTypeSignal,
    ) -> Self {
        Self {
            originator: ScoreOriginator::new(originator),
            tag,
            suffix: suffix.into(),
            signal,
        }
    }

    /// The default `.java` file scorer: 1.0 per touched Java file.
    pub fn java() -> Self {
        Self::new(
            "java-file-name",
            SkillTag::new(tags::JAVA),
            ".java",
            FileTypeSignal::PerFile(1.0),
        )
    }
}

impl ContributionScorer for FileTypeScorer {
    fn originator(&self) -> ScoreOriginator {
        self.originator.clone()
    }

    fn score(&self, contribution: &Contribution) -> Result<Vec<ContributionScore>> {
        let matching: Vec<_> = contribution
            .items()
            .iter()
            .filter(|item| item.path_matches_suffix(&self.suffix))
            .collect();

        if matching.is_empty() {
            return Ok(Vec::new());
        }

        match self.signal {
            FileTypeSignal::PerFile(value) => matching
                .iter()
                .map(|_| ContributionScore::new(self.tag.clone(), value, self.originator.clone()))
                .collect(),
            FileTypeSignal::FileCount => {
                #[allow(clippy::cast_precision_loss)]
                let count = matching.len() as f64;
                Ok(vec![ContributionScore::new(
                    self.tag.clone(),
                    count,
                    self.originator.clone(),
                )?])
            }
            FileTypeSignal::TouchedLineCount => {
                let total: usize = matching
                    .iter()
                    .map(|item| diff::diff(item.previous_content(), item.content()).len())
                    .sum();
                #[allow(clippy::cast_precision_loss)]
                let total = total as f64;
                Ok(vec![ContributionScore::new(
                    self.tag.clone(),
                    total,
                    self.originator.clone(),
                )?])
            }
        }
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
    fn per_file_emits_one_record_per_match() {
        let scorer = FileTypeScorer::java();
        let c = contribution(vec![
            ContributionItem::new("Foo.java", "", "class Foo {}").unwrap(),
            ContributionItem::new("Bar.JAVA", "", "class Bar {}").unwrap(),
            ContributionItem::new("notes.txt", "", "hi").unwrap(),
        ]);
        let scores = scorer.score(&c).unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores.iter().all(|s| s.value() == 1.0));
        assert!(scores.iter().all(|s| s.tag().as_str() == tags::JAVA));
    }

    #[test]
    fn file_count_emits_single_summed_record() {
        let scorer = FileTypeScorer::new(
            "java-file-count",
            SkillTag::new(tags::JAVA),
            ".java",
            FileTypeSignal::FileCount,
        );
        let c = contribution(vec![
            ContributionItem::new("Foo.java", "", "x").unwrap(),
            ContributionItem::new("Bar.java", "", "y").unwrap(),
        ]);
        let scores = scorer.score(&c).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].value(), 2.0);
    }

    #[test]
    fn touched_line_count_counts_fragments_across_items() {
        let scorer = FileTypeScorer::new(
            "txt-touched-lines",
            SkillTag::new("text"),
            ".txt",
            FileTypeSignal::TouchedLineCount,
        );
        let c = contribution(vec![
            ContributionItem::new("Foo.txt", "", "a\nb\n").unwrap(),
        ]);
        let scores = scorer.score(&c).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].value(), 2.0);
    }

    #[test]
    fn no_matching_items_emits_nothing() {
        let scorer = FileTypeScorer::java();
        let c = contribution(vec![ContributionItem::new("notes.txt", "", "hi").unwrap()]);
        assert!(scorer.score(&c).unwrap().is_empty());
    }

    #[test]
    fn zero_item_contribution_emits_nothing() {
        let scorer = FileTypeScorer::java();
        let c = contribution(Vec::new());
        assert!(scorer.score(&c).unwrap().is_empty());
    }
}
