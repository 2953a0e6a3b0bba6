//! Common regex patterns for receipt line classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whole line made of letters (accented included), whitespace and asterisks
    pub static ref NAME_LINE: Regex = Regex::new(
        r"^[A-Za-zÀ-ú\s*]+$"
    ).unwrap();

    // Upper-case variant used by the fuzzy stage
    pub static ref UPPER_NAME_LINE: Regex = Regex::new(
        r"^[A-ZÀ-Ú\s*]+$"
    ).unwrap();

    pub static ref LONG_DIGIT_RUN: Regex = Regex::new(
        r"\d{5,}"
    ).unwrap();

    // Pix keys, tax ids, currency and dd/mm/yyyy dates
    pub static ref IDENTIFIER_MARKERS: Regex = Regex::new(
        r"(?i)pix|cpf|cnpj|r\$|\d{2}/\d{2}/\d{4}"
    ).unwrap();

    // CPF (Brazilian individual tax id), formatted or as a long digit run
    pub static ref CPF: Regex = Regex::new(
        r"\d{3}\.?\d{3}\.?\d{3}-?\d{2}|\d{11,}"
    ).unwrap();

    // CNPJ (Brazilian company tax id)
    pub static ref CNPJ: Regex = Regex::new(
        r"\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}"
    ).unwrap();

    // Leading "nome" label, e.g. "Nome: ", "NOME "
    pub static ref NOME_LABEL: Regex = Regex::new(
        r"(?i)^nome\b:?\s*"
    ).unwrap();
}
