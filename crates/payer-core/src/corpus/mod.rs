//! Reference corpora used by the extraction stages.
//!
//! Three read-only keyword sets drive the pipeline: payer anchors, ignore
//! phrases and common name tokens. The built-in sets are initialized once and
//! shared; custom sets can be loaded from plain-text files and injected into
//! an extractor.

mod builtin;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use tracing::info;

use crate::error::{PayerError, Result};
use crate::models::config::CorpusConfig;

lazy_static! {
    static ref BUILTIN: Arc<ReferenceData> = Arc::new(ReferenceData {
        payer_anchors: KeywordSet::from_phrases(KeywordKind::PayerAnchors, builtin::PAYER_ANCHORS),
        ignore_phrases: KeywordSet::from_phrases(KeywordKind::IgnorePhrases, builtin::IGNORE_PHRASES),
        name_tokens: KeywordSet::from_phrases(KeywordKind::ReferenceNameTokens, builtin::NAME_TOKENS),
    });
}

/// Which corpus a keyword set represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// Phrases that announce a payer block ("pago por", "origem", ...).
    PayerAnchors,
    /// Phrases that disqualify a line as a name ("comprovante", bank names, ...).
    IgnorePhrases,
    /// Common given and family names, compared by edit distance only.
    ReferenceNameTokens,
}

/// An immutable, ordered set of lower-case phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    kind: KeywordKind,
    phrases: Vec<String>,
}

impl KeywordSet {
    /// Build a set from phrases. Entries are trimmed and lower-cased; empty
    /// entries and duplicates are dropped, first occurrence wins.
    pub fn from_phrases<I, S>(kind: KeywordKind, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .filter(|p| seen.insert(p.clone()))
            .collect();

        Self { kind, phrases }
    }

    /// Parse a corpus file: one phrase per line, `#` lines are comments.
    pub fn parse(kind: KeywordKind, content: &str) -> Self {
        Self::from_phrases(
            kind,
            content.lines().filter(|l| !l.trim_start().starts_with('#')),
        )
    }

    /// Load a corpus file from disk.
    pub fn from_file(kind: KeywordKind, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PayerError::Corpus {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(kind, &content))
    }

    /// An empty set of the given kind.
    pub fn empty(kind: KeywordKind) -> Self {
        Self {
            kind,
            phrases: Vec::new(),
        }
    }

    pub fn kind(&self) -> KeywordKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Whether `lower` equals or contains one of the phrases.
    pub fn matched_by(&self, lower: &str) -> bool {
        self.iter().any(|p| lower.contains(p))
    }
}

/// The three corpora an extractor reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub payer_anchors: KeywordSet,
    pub ignore_phrases: KeywordSet,
    pub name_tokens: KeywordSet,
}

impl ReferenceData {
    /// Shared built-in corpora.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    /// Handle to the shared built-in corpora.
    pub fn shared() -> Arc<ReferenceData> {
        Arc::clone(&*BUILTIN)
    }

    /// Reference data with every corpus empty.
    pub fn empty() -> Self {
        Self {
            payer_anchors: KeywordSet::empty(KeywordKind::PayerAnchors),
            ignore_phrases: KeywordSet::empty(KeywordKind::IgnorePhrases),
            name_tokens: KeywordSet::empty(KeywordKind::ReferenceNameTokens),
        }
    }

    /// Built-in corpora with any configured files substituted.
    pub fn load(config: &CorpusConfig) -> Result<Self> {
        let builtin = Self::builtin();
        let load = |path: Option<&Path>, kind, fallback: &KeywordSet| -> Result<KeywordSet> {
            match path {
                Some(path) => {
                    let set = KeywordSet::from_file(kind, path)?;
                    info!("Loaded {} {:?} entries from {}", set.len(), set.kind(), path.display());
                    Ok(set)
                }
                None => Ok(fallback.clone()),
            }
        };

        Ok(Self {
            payer_anchors: load(
                config.payer_anchors.as_deref(),
                KeywordKind::PayerAnchors,
                &builtin.payer_anchors,
            )?,
            ignore_phrases: load(
                config.ignore_phrases.as_deref(),
                KeywordKind::IgnorePhrases,
                &builtin.ignore_phrases,
            )?,
            name_tokens: load(
                config.name_tokens.as_deref(),
                KeywordKind::ReferenceNameTokens,
                &builtin.name_tokens,
            )?,
        })
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
