//! Score aggregation
//!
//! Runs a configured set of scorers over a contribution and merges their
//! outputs. Scorers are independent and pure, so the set is dispatched in
//! parallel and joined before returning; the merged result is the
//! concatenation in registration order, which makes it deterministic and,
//! as a multiset, independent of registration order.
//!
//! The aggregator never collapses records: multiple scorers may target the
//! same tag, and summation-per-tag is the persistence side's policy. Raw
//! provenance (originator per record) is kept intact.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::analysis::score::ContributionScore;
use crate::analysis::scorer::ContributionScorer;
use crate::contribution::Contribution;
use crate::error::{Result, ScanError};

/// Runs scorers over contributions and merges their records.
pub struct ScoreAggregator {
    scorers: Vec<Box<dyn ContributionScorer>>,
}

impl ScoreAggregator {
    pub fn new(scorers: Vec<Box<dyn ContributionScorer>>) -> Self {
        Self { scorers }
    }

    pub fn len(&self) -> usize {
        self.scorers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty()
    }

    /// Scores one contribution with every registered scorer.
    ///
    /// Failure isolation: a scorer returning `Err` is logged and omitted
    /// entirely, including any baseline its definition would substitute (a
    /// failed scorer was not evaluated; a baseline record would masquerade
    /// as a measurement). Records from other scorers are unaffected.
    ///
    /// Records without a timestamp are stamped with the contribution's.
    pub fn score_contribution(&self, contribution: &Contribution) -> Vec<ContributionScore> {
        let merged: Vec<ContributionScore> = self
            .scorers
            .par_iter()
            .map(|scorer| run_scorer(scorer.as_ref(), contribution))
            .flatten()
            .collect();

        debug!(
            contributor = %contribution.contributor(),
            scorers = self.scorers.len(),
            records = merged.len(),
            "scored contribution"
        );

        merged
    }

    /// Scores a batch of contributions in parallel, bounded by
    /// `max_parallel` worker threads. Contributions are independent, so a
    /// slow or skipped one never corrupts the others; results come back in
    /// input order.
    pub fn score_batch(
        &self,
        contributions: &[Contribution],
        max_parallel: usize,
    ) -> Result<Vec<Vec<ContributionScore>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(max_parallel)
            .build()
            .map_err(|err| ScanError::ThreadPool(err.to_string()))?;

        Ok(pool.install(|| {
            contributions
                .par_iter()
                .map(|contribution| self.score_contribution(contribution))
                .collect()
        }))
    }
}

fn run_scorer(
    scorer: &dyn ContributionScorer,
    contribution: &Contribution,
) -> Vec<ContributionScore> {
    match scorer.score(contribution) {
        Ok(mut records) => {
            if let Some(definition) = scorer.definition() {
                let covered = records
                    .iter()
                    .any(|record| record.tag() == definition.tag());
                if !covered {
                    records.push(definition.baseline_score());
                }
            }
            records
                .into_iter()
                .map(|record| record.stamped(contribution.timestamp()))
                .collect()
        }
        Err(err) => {
            warn!(
                originator = %scorer.originator(),
                error = %err,
                "scorer failed, omitting its records"
            );
            Vec::new()
        }
    }
}
