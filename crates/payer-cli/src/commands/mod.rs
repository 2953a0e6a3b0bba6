//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use payer_core::{Candidate, PayerConfig, PayerNameExtractor, ReferenceData, Stage};

/// Output record for one receipt.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// Payer name, empty when none was found.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

impl ExtractionReport {
    pub fn new(candidate: Option<Candidate>, explain: bool) -> Self {
        match candidate {
            Some(c) if explain => Self {
                name: c.text,
                stage: Some(c.source_stage),
                distance: c.distance,
            },
            Some(c) => Self {
                name: c.text,
                stage: None,
                distance: None,
            },
            None => Self {
                name: String::new(),
                stage: None,
                distance: None,
            },
        }
    }

    pub fn is_found(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Shown in text output when nothing was found. Never a real name.
pub const NOT_FOUND_PLACEHOLDER: &str = "(no payer name found)";

/// Load the configuration from `--config`, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PayerConfig> {
    if let Some(path) = config_path {
        return Ok(PayerConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(PayerConfig::from_file(&default_path)?)
    } else {
        Ok(PayerConfig::default())
    }
}

/// Build an extractor from configuration, loading any corpus overrides.
pub fn build_extractor(config: &PayerConfig) -> anyhow::Result<PayerNameExtractor> {
    let refs = ReferenceData::load(&config.corpus)?;
    Ok(PayerNameExtractor::new()
        .with_reference_data(refs)
        .with_config(config.extraction.clone()))
}

/// Read OCR text, replacing invalid UTF-8 instead of failing.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
