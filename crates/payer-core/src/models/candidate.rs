//! Lines, candidates and the extraction result.

use serde::{Deserialize, Serialize};

/// A single non-empty line of OCR text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Position in the normalized line list; stages slice by it.
    pub index: usize,

    /// Trimmed text. Never empty.
    pub normalized: String,

    /// Lower-cased `normalized`, used for keyword matching.
    pub lower: String,
}

impl Line {
    /// Lower-cased text with one trailing colon removed.
    pub fn lower_label(&self) -> &str {
        self.lower.strip_suffix(':').unwrap_or(&self.lower)
    }

    /// Whether this line is a bare "nome" marker (with or without a colon).
    pub fn is_nome_marker(&self) -> bool {
        self.lower_label() == "nome"
    }
}

/// Pipeline stage that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// "pago por" anchor followed by a "nome" marker.
    AnchoredPagoPor,
    /// "origem" anchor followed by a "nome" marker.
    AnchoredOrigem,
    /// Any payer keyword followed by a valid line.
    KeywordGeneric,
    /// Nearest neighbor against the reference name tokens.
    Fuzzy,
    /// Longest purely alphabetic line.
    LastResort,
}

impl Stage {
    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::AnchoredPagoPor => "anchored_pago_por",
            Stage::AnchoredOrigem => "anchored_origem",
            Stage::KeywordGeneric => "keyword_generic",
            Stage::Fuzzy => "fuzzy",
            Stage::LastResort => "last_resort",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provisional payer name produced by exactly one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate text, label-stripped and trimmed.
    pub text: String,

    /// Stage that produced it.
    pub source_stage: Stage,

    /// Best edit distance, only set by the fuzzy stage when a word matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

impl Candidate {
    pub fn new(text: impl Into<String>, source_stage: Stage) -> Self {
        Self {
            text: text.into(),
            source_stage,
            distance: None,
        }
    }

    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = Some(distance);
        self
    }
}

/// Result of a payer name extraction.
///
/// An empty `name` means no candidate was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
}

impl ExtractionResult {
    /// Result for "no candidate found".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        !self.name.is_empty()
    }
}

impl From<Option<Candidate>> for ExtractionResult {
    fn from(candidate: Option<Candidate>) -> Self {
        Self {
            name: candidate.map(|c| c.text).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line {
        Line {
            index: 0,
            normalized: text.to_string(),
            lower: text.to_lowercase(),
        }
    }

    #[test]
    fn test_nome_marker() {
        assert!(line("NOME").is_nome_marker());
        assert!(line("Nome:").is_nome_marker());
        assert!(!line("NOME COMPLETO").is_nome_marker());
        assert!(!line("nome::").is_nome_marker());
    }

    #[test]
    fn test_stage_serializes_snake_case() {
        let json = serde_json::to_string(&Stage::AnchoredPagoPor).unwrap();
        assert_eq!(json, "\"anchored_pago_por\"");
        assert_eq!(Stage::LastResort.to_string(), "last_resort");
    }

    #[test]
    fn test_result_from_candidate() {
        let result = ExtractionResult::from(Some(Candidate::new("ANA LIMA", Stage::Fuzzy)));
        assert!(result.is_found());
        assert_eq!(result.name, "ANA LIMA");

        assert!(!ExtractionResult::from(None).is_found());
    }
}
