//! Payer name extraction from receipt OCR text.
//!
//! Extraction runs a fixed sequence of stages over the normalized lines and
//! returns the first candidate any stage produces:
//!
//! 1. `"pago por"` → `"nome"` → candidate
//! 2. `"origem"` → `"nome"` → candidate
//! 3. any payer keyword → one of the next lines
//! 4. fuzzy match of upper-case lines against common name tokens
//! 5. longest name-shaped line
//!
//! A winner equal to a banned phrase yields an empty result.

mod anchored;
mod fuzzy;
mod keyword;
mod last_resort;
pub mod patterns;
mod validator;

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::corpus::ReferenceData;
use crate::models::candidate::{Candidate, ExtractionResult, Line, Stage};
use crate::models::config::ExtractionConfig;
use crate::text::normalize_lines;

pub use anchored::AnchoredExtractor;
pub use fuzzy::FuzzyMatcher;
pub use keyword::KeywordExtractor;
pub use last_resort::LastResortSelector;
pub use validator::{strip_nome_label, CandidateValidator};

/// Read-only inputs shared by every stage of one extraction.
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    pub refs: &'a ReferenceData,
    pub config: &'a ExtractionConfig,
}

impl<'a> StageContext<'a> {
    pub fn new(refs: &'a ReferenceData, config: &'a ExtractionConfig) -> Self {
        Self { refs, config }
    }

    pub fn validator(&self) -> CandidateValidator<'a> {
        CandidateValidator::new(self.refs, self.config)
    }
}

/// A single step of the pipeline.
pub trait NameStage: Send + Sync {
    /// Stage reported on candidates from this step.
    fn stage(&self) -> Stage;

    /// Produce a candidate from the lines, or `None` to fall through.
    fn extract(&self, lines: &[Line], ctx: &StageContext<'_>) -> Option<Candidate>;
}

/// Payer name extractor.
///
/// Stateless between calls; one instance can serve any number of threads.
pub struct PayerNameExtractor {
    refs: Arc<ReferenceData>,
    config: ExtractionConfig,
    stages: Vec<Box<dyn NameStage>>,
}

impl PayerNameExtractor {
    /// Create an extractor with the built-in corpora and default settings.
    pub fn new() -> Self {
        Self {
            refs: ReferenceData::shared(),
            config: ExtractionConfig::default(),
            stages: default_stages(),
        }
    }

    /// Use custom reference corpora.
    pub fn with_reference_data(mut self, refs: impl Into<Arc<ReferenceData>>) -> Self {
        self.refs = refs.into();
        self
    }

    /// Set extraction tuning.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.refs
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract the payer name. An empty name means none was found.
    pub fn extract(&self, raw: Option<&str>) -> ExtractionResult {
        self.explain(raw).into()
    }

    /// Extract the payer name together with the stage that found it.
    pub fn explain(&self, raw: Option<&str>) -> Option<Candidate> {
        let lines = normalize_lines(raw);
        if lines.is_empty() {
            return None;
        }

        info!("Extracting payer name from {} lines", lines.len());
        let ctx = StageContext::new(&self.refs, &self.config);

        for stage in &self.stages {
            let Some(candidate) = stage.extract(&lines, &ctx) else {
                trace!("Stage {} found no candidate", stage.stage());
                continue;
            };

            if self.config.is_banned(&candidate.text) {
                debug!("Stage {} produced a banned phrase, discarding", stage.stage());
                return None;
            }

            debug!(
                "Stage {} selected {:?} (distance {:?})",
                candidate.source_stage, candidate.text, candidate.distance
            );
            return Some(candidate);
        }

        debug!("No payer name candidate found");
        None
    }
}

impl Default for PayerNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PayerNameExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayerNameExtractor")
            .field("config", &self.config)
            .field("stages", &self.stages.iter().map(|s| s.stage()).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

fn default_stages() -> Vec<Box<dyn NameStage>> {
    vec![
        Box::new(AnchoredExtractor::pago_por()),
        Box::new(AnchoredExtractor::origem()),
        Box::new(KeywordExtractor::new()),
        Box::new(FuzzyMatcher::new()),
        Box::new(LastResortSelector::new()),
    ]
}

/// Extract the payer name from OCR text with built-in corpora.
pub fn extract_payer_name(raw: Option<&str>) -> String {
    PayerNameExtractor::new().extract(raw).name
}
