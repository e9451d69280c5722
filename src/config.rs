//! Scorer-set configuration
//!
//! Declarative description of which scorers run and how they are tuned,
//! loadable from TOML. The default configuration reproduces the built-in
//! Java scorer set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::scorers::{
    FileTypeScorer, FileTypeSignal, LexicalPatternScorer, TouchedVolumeScorer,
};
use crate::analysis::{ContributionScorer, ScoreAggregator, SkillTag, tags};
use crate::error::{Result, ScanError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scorers: ScorersConfig,
    /// Upper bound on contributions scored in parallel by a batch run.
    #[serde(default = "default_max_parallel")]
    pub max_parallel_contributions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scorers: ScorersConfig::default(),
            max_parallel_contributions: default_max_parallel(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorersConfig {
    #[serde(default)]
    pub file_types: Vec<FileTypeRule>,
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
    #[serde(default)]
    pub volumes: Vec<VolumeRule>,
}

impl Default for ScorersConfig {
    fn default() -> Self {
        Self {
            file_types: vec![FileTypeRule {
                originator: "java-file-name".to_string(),
                tag: tags::JAVA.to_string(),
                suffix: ".java".to_string(),
                signal: SignalKind::PerFile,
                value: default_per_file_value(),
            }],
            patterns: vec![PatternRule {
                originator: "java-8-streams".to_string(),
                tag: tags::JAVA_8_STREAMS.to_string(),
                suffix: ".java".to_string(),
                needles: vec![".stream()".to_string(), ".parallelStream()".to_string()],
            }],
            volumes: vec![VolumeRule {
                originator: "java-touched-volume".to_string(),
                tag: tags::JAVA.to_string(),
                suffix: ".java".to_string(),
                baseline: 0.0,
            }],
        }
    }
}

/// One path-suffix scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeRule {
    pub originator: String,
    pub tag: String,
    pub suffix: String,
    #[serde(default)]
    pub signal: SignalKind,
    /// Fixed value per matching file; only read for `per-file` rules.
    #[serde(default = "default_per_file_value")]
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalKind {
    #[default]
    PerFile,
    FileCount,
    TouchedLineCount,
}

/// One lexical-pattern scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    pub originator: String,
    pub tag: String,
    pub suffix: String,
    pub needles: Vec<String>,
}

/// One touched-volume scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRule {
    pub originator: String,
    pub tag: String,
    pub suffix: String,
    #[serde(default)]
    pub baseline: f64,
}

fn default_max_parallel() -> usize {
    4
}

fn default_per_file_value() -> f64 {
    1.0
}

impl Config {
    /// Loads config from a TOML file; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ScanError::Config(format!("read config {}: {err}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| ScanError::Config(format!("parse config: {err}")))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|err| ScanError::Config(format!("serialize config: {err}")))
    }

    /// Builds the configured scorer registry, in declaration order.
    pub fn build_scorers(&self) -> Result<Vec<Box<dyn ContributionScorer>>> {
        let mut scorers: Vec<Box<dyn ContributionScorer>> = Vec::new();

        for rule in &self.scorers.file_types {
            let signal = match rule.signal {
                SignalKind::PerFile => FileTypeSignal::PerFile(rule.value),
                SignalKind::FileCount => FileTypeSignal::FileCount,
                SignalKind::TouchedLineCount => FileTypeSignal::TouchedLineCount,
            };
            scorers.push(Box::new(FileTypeScorer::new(
                rule.originator.clone(),
                SkillTag::new(rule.tag.as_str()),
                rule.suffix.clone(),
                signal,
            )));
        }

        for rule in &self.scorers.patterns {
            scorers.push(Box::new(LexicalPatternScorer::new(
                rule.originator.clone(),
                SkillTag::new(rule.tag.as_str()),
                rule.suffix.clone(),
                rule.needles.clone(),
            )));
        }

        for rule in &self.scorers.volumes {
            scorers.push(Box::new(TouchedVolumeScorer::new(
                rule.originator.clone(),
                SkillTag::new(rule.tag.as_str()),
                rule.suffix.clone(),
                rule.baseline,
            )?));
        }

        Ok(scorers)
    }

    pub fn build_aggregator(&self) -> Result<ScoreAggregator> {
        Ok(ScoreAggregator::new(self.build_scorers()?))
    }
}
