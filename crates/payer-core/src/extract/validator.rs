//! Candidate line validation.

use crate::corpus::ReferenceData;
use crate::models::config::ExtractionConfig;
use crate::text::alpha_count;

use super::patterns::{CNPJ, CPF, IDENTIFIER_MARKERS, LONG_DIGIT_RUN, NAME_LINE, NOME_LABEL};

/// Decides whether a line can be a payer name.
#[derive(Debug, Clone, Copy)]
pub struct CandidateValidator<'a> {
    refs: &'a ReferenceData,
    config: &'a ExtractionConfig,
}

impl<'a> CandidateValidator<'a> {
    pub fn new(refs: &'a ReferenceData, config: &'a ExtractionConfig) -> Self {
        Self { refs, config }
    }

    /// Whether `line` qualifies as a name candidate.
    pub fn is_valid(&self, line: &str) -> bool {
        if line.chars().count() <= 2 {
            return false;
        }
        if alpha_count(line) < self.config.min_alpha_chars {
            return false;
        }
        if !NAME_LINE.is_match(line) {
            return false;
        }

        let lower = line.to_lowercase();
        let label = lower.strip_suffix(':').unwrap_or(&lower);
        if label == "nome" || label == "nome:" {
            return false;
        }

        self.passes_identifier_checks(line)
    }

    /// Validate `line` and strip a leading "nome" label.
    ///
    /// Returns the cleaned text, or `None` if the line is rejected or the
    /// label was all it contained.
    pub fn validate(&self, line: &str) -> Option<String> {
        if !self.is_valid(line) {
            return None;
        }
        let cleaned = strip_nome_label(line);
        (cleaned.chars().count() >= 3).then(|| cleaned.to_string())
    }

    /// Ignore-phrase and identifier checks, without the character-class rules.
    pub fn passes_identifier_checks(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        if self.refs.ignore_phrases.matched_by(&lower) {
            return false;
        }
        if LONG_DIGIT_RUN.is_match(line) || IDENTIFIER_MARKERS.is_match(line) {
            return false;
        }

        let compact: String = line
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | '/' | ' '))
            .collect();
        !(CPF.is_match(&compact) || CNPJ.is_match(&compact))
    }
}

/// Remove a leading "nome" label and surrounding whitespace.
pub fn strip_nome_label(line: &str) -> &str {
    let trimmed = line.trim();
    match NOME_LABEL.find(trimmed) {
        Some(m) => trimmed[m.end()..].trim(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{KeywordKind, KeywordSet};

    fn check(line: &str) -> bool {
        let refs = ReferenceData::builtin();
        let config = ExtractionConfig::default();
        CandidateValidator::new(refs, &config).is_valid(line)
    }

    #[test]
    fn test_accepts_names() {
        assert!(check("JOAO DA SILVA"));
        assert!(check("Maria Conceição"));
        assert!(check("J*** SILVA"));
    }

    #[test]
    fn test_rejects_short_and_sparse_lines() {
        assert!(!check("AB"));
        assert!(!check("A* *"));
        assert!(!check("** B"));
    }

    #[test]
    fn test_rejects_identifiers() {
        assert!(!check("123.456.789-00"));
        assert!(!check("12.345.678/0001-90"));
        assert!(!check("CPF 123"));
        assert!(!check("R$ 150,00"));
        assert!(!check("12/03/2024"));
        assert!(!check("PIX ENVIADO"));
    }

    #[test]
    fn test_rejects_markers_and_ignore_phrases() {
        assert!(!check("NOME"));
        assert!(!check("nome:"));
        assert!(!check("BANCO INTER"));
        assert!(!check("Comprovante de transferência"));
    }

    #[test]
    fn test_identifier_checks_on_compacted_text() {
        let refs = ReferenceData::empty();
        let config = ExtractionConfig::default();
        let validator = CandidateValidator::new(&refs, &config);

        assert!(!validator.passes_identifier_checks("123 456 789 00"));
        assert!(!validator.passes_identifier_checks("12 345 678 0001 90"));
        assert!(validator.passes_identifier_checks("ANA 12"));
    }

    #[test]
    fn test_validate_strips_label() {
        let refs = ReferenceData::builtin();
        let config = ExtractionConfig::default();
        let validator = CandidateValidator::new(refs, &config);

        assert_eq!(validator.validate("NOME JULIA SOUZA").as_deref(), Some("JULIA SOUZA"));
        assert_eq!(validator.validate("Nome  Li"), None);
        assert_eq!(validator.validate("CARLOS PEREIRA").as_deref(), Some("CARLOS PEREIRA"));
    }

    #[test]
    fn test_custom_ignore_phrases() {
        let mut refs = ReferenceData::empty();
        refs.ignore_phrases = KeywordSet::from_phrases(KeywordKind::IgnorePhrases, ["silva"]);
        let config = ExtractionConfig::default();
        let validator = CandidateValidator::new(&refs, &config);

        assert!(!validator.is_valid("JOAO DA SILVA"));
        assert!(validator.is_valid("BANCO INTER"));
    }
}
