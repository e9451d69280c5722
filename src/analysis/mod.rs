//! The scoring pipeline: score value types, the scorer capability, the
//! concrete scorer variants, and the aggregator that runs them.

pub mod aggregator;
pub mod score;
pub mod scorer;
pub mod scorers;

pub use aggregator::ScoreAggregator;
pub use score::{
    ContributionScore, ScoreOriginator, ScorerDefinition, SkillTag, scores_to_json, tags,
};
pub use scorer::ContributionScorer;
