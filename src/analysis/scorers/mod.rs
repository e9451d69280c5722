//! Scorer variants
//!
//! Each variant illustrates one detection strategy: path-suffix matching,
//! lexical idiom detection over touched fragments, and dampened volume
//! measurement. New rules slot in as further [`ContributionScorer`]
//! implementations; the aggregator holds them as a flat registry, no
//! hierarchy involved.

pub mod file_type;
pub mod lexical;
pub mod volume;

pub use file_type::{FileTypeScorer, FileTypeSignal};
pub use lexical::LexicalPatternScorer;
pub use volume::TouchedVolumeScorer;

use crate::analysis::scorer::ContributionScorer;

/// The default scorer set: Java file presence, Java 8 stream idioms, and
/// dampened touched-code volume.
pub fn default_scorers() -> Vec<Box<dyn ContributionScorer>> {
    vec![
        Box::new(FileTypeScorer::java()),
        Box::new(LexicalPatternScorer::java_streams()),
        Box::new(TouchedVolumeScorer::java()),
    ]
}
