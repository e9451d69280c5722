//! The scorer capability
//!
//! One implementation per detection rule. Scorers are pure functions over a
//! contribution plus the diff engine: no I/O, no mutation, no shared state.
//! That purity is what lets the aggregator dispatch them in parallel, hence
//! the `Send + Sync` bound.

use crate::analysis::score::{ContributionScore, ScoreOriginator, ScorerDefinition};
use crate::contribution::Contribution;
use crate::error::Result;

/// A detection rule that turns a contribution into zero or more scores.
pub trait ContributionScorer: Send + Sync {
    /// Stable identity stamped onto every record this scorer emits.
    fn originator(&self) -> ScoreOriginator;

    /// Declared by scorers that must always be represented by exactly one
    /// record per contribution; the aggregator substitutes the baseline
    /// when [`score`](Self::score) emits none for the declared tag.
    fn definition(&self) -> Option<ScorerDefinition> {
        None
    }

    /// Scores one contribution. An empty `Vec` means "no signal applies";
    /// an `Err` means the scorer could not evaluate this contribution at
    /// all and contributes nothing to the merged result. Each scorer's
    /// error policy (item-isolated or all-or-nothing) is fixed and
    /// documented on the implementation.
    fn score(&self, contribution: &Contribution) -> Result<Vec<ContributionScore>>;
}
