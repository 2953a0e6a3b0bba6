//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Phrase the assembler never returns as a payer name.
pub const DEFAULT_BANNED_PHRASE: &str = "estamos aqui para ajudar se você tiver alguma";

/// Main configuration for the payer pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayerConfig {
    /// Extraction thresholds and windows.
    pub extraction: ExtractionConfig,

    /// Reference corpus overrides.
    pub corpus: CorpusConfig,
}

/// Extraction tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lines after an anchor searched for the "nome" marker.
    pub nome_lookahead: usize,

    /// Lines after a generic payer keyword inspected for a candidate.
    pub keyword_lookahead: usize,

    /// Largest word distance the fuzzy stage accepts.
    pub max_fuzzy_distance: usize,

    /// Minimum alphabetic characters for any candidate.
    pub min_alpha_chars: usize,

    /// Minimum length of an upper-case line considered by the fuzzy stage.
    pub fuzzy_min_len: usize,

    /// Lower-case phrases that force an empty result.
    pub banned_phrases: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            nome_lookahead: 2,
            keyword_lookahead: 2,
            max_fuzzy_distance: 2,
            min_alpha_chars: 3,
            fuzzy_min_len: 5,
            banned_phrases: vec![DEFAULT_BANNED_PHRASE.to_string()],
        }
    }
}

impl ExtractionConfig {
    /// Whether `text` (trimmed, lower-cased) is a banned phrase.
    pub fn is_banned(&self, text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        self.banned_phrases.iter().any(|p| p.trim().to_lowercase() == lower)
    }
}

/// Optional corpus files replacing the built-in lists.
///
/// Each file holds one phrase per line; `#` starts a comment line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_anchors: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_phrases: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_tokens: Option<PathBuf>,
}

impl PayerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
