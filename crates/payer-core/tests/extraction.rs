use pretty_assertions::assert_eq;

use payer_core::{
    extract_payer_name, KeywordKind, KeywordSet, PayerNameExtractor, ReferenceData, Stage,
};

fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

#[test]
fn test_empty_input() {
    assert_eq!(extract_payer_name(Some("")), "");
    assert_eq!(extract_payer_name(None), "");
    assert_eq!(extract_payer_name(Some("\n   \n\t")), "");
}

#[test]
fn test_pago_por_block() {
    let text = lines(&["RECIBO", "PAGO POR", "NOME", "JOAO DA SILVA", "CPF: 123.456.789-00"]);
    assert_eq!(extract_payer_name(Some(&text)), "JOAO DA SILVA");
}

#[test]
fn test_origem_block_with_colon_marker() {
    let text = lines(&["ORIGEM", "NOME:", "MARIA OLIVEIRA"]);
    assert_eq!(extract_payer_name(Some(&text)), "MARIA OLIVEIRA");
}

#[test]
fn test_ignore_phrase_is_skipped() {
    let text = lines(&["PAGO POR", "NOME", "BANCO INTER", "CARLOS PEREIRA"]);
    assert_eq!(extract_payer_name(Some(&text)), "CARLOS PEREIRA");
}

#[test]
fn test_payer_surname_is_not_ignored() {
    let text = lines(&["PAGO POR", "NOME", "JOSE CHAVES", "DESTINO", "NOME", "MERCADO SAO JORGE"]);
    let candidate = PayerNameExtractor::new().explain(Some(&text)).unwrap();
    assert_eq!(candidate.text, "JOSE CHAVES");
    assert_eq!(candidate.source_stage, Stage::AnchoredPagoPor);

    let candidate = PayerNameExtractor::new()
        .explain(Some("ORIGEM\nNOME\nANA CHAVES"))
        .unwrap();
    assert_eq!(candidate.text, "ANA CHAVES");
    assert_eq!(candidate.source_stage, Stage::AnchoredOrigem);
}

#[test]
fn test_cpf_is_never_returned() {
    let inputs = [
        lines(&["PAGO POR", "NOME", "123.456.789-00"]),
        lines(&["ORIGEM", "NOME", "123.456.789-00"]),
        lines(&["Pagador", "123.456.789-00"]),
        lines(&["123.456.789-00"]),
    ];

    for text in &inputs {
        let name = extract_payer_name(Some(text));
        assert!(!name.contains("123"), "input: {text:?}, got {name:?}");
    }
}

#[test]
fn test_fuzzy_prefers_reference_names() {
    let text = lines(&[
        "Transferência enviada",
        "XYZQWV KPTRBNMLKQ WQXZ",
        "JULIA SOUZA",
    ]);

    let candidate = PayerNameExtractor::new().explain(Some(&text)).unwrap();
    assert_eq!(candidate.text, "JULIA SOUZA");
    assert_eq!(candidate.source_stage, Stage::Fuzzy);
    assert_eq!(candidate.distance, Some(0));
}

#[test]
fn test_fuzzy_with_small_injected_corpus() {
    let mut refs = ReferenceData::builtin().clone();
    refs.name_tokens = KeywordSet::from_phrases(KeywordKind::ReferenceNameTokens, ["quiteria"]);
    let extractor = PayerNameExtractor::new().with_reference_data(refs);

    let text = lines(&["JULIA SOUZA", "QUITERIA BENTO"]);
    assert_eq!(extractor.extract(Some(&text)).name, "QUITERIA BENTO");
}

#[test]
fn test_idempotent() {
    let extractor = PayerNameExtractor::new();
    let text = lines(&["Comprovante Pix", "Quem pagou", "Renato Alves", "R$ 50,00"]);

    let first = extractor.extract(Some(&text));
    let second = extractor.extract(Some(&text));
    assert_eq!(first, second);
    assert_eq!(first.name, "Renato Alves");
}

#[test]
fn test_banned_phrase_forced_empty() {
    let text = lines(&["Estamos aqui para ajudar se você tiver alguma", "12:45"]);
    assert_eq!(extract_payer_name(Some(&text)), "");

    let text = lines(&["ESTAMOS AQUI PARA AJUDAR SE VOCÊ TIVER ALGUMA"]);
    assert_eq!(extract_payer_name(Some(&text)), "");
}

#[test]
fn test_masked_name() {
    let text = lines(&["Dados do pagador", "J*** SILVA", "CPF ***.456.789-**"]);
    assert_eq!(extract_payer_name(Some(&text)), "J*** SILVA");
}

#[test]
fn test_empty_corpora_degrade_gracefully() {
    let extractor = PayerNameExtractor::new().with_reference_data(ReferenceData::empty());

    assert_eq!(extractor.extract(Some("123.456.789-00\nR$ 10,00")).name, "");
    assert_eq!(
        extractor.extract(Some("PAGO POR\nNOME\nJOAO DA SILVA")).name,
        "JOAO DA SILVA"
    );
}

#[test]
fn test_realistic_receipt() {
    let text = r#"
        Comprovante de transferência
        12/03/2024 - 14:02:11
        Valor
        R$ 1.250,00
        Tipo de transferência
        Pix

        Destino
        Nome
        MERCADO DO BAIRRO LTDA
        CNPJ
        12.345.678/0001-90

        Origem
        Nome
        Fernanda Costa Ribeiro
        CPF
        ***.456.789-**
        Instituição
        NU PAGAMENTOS - IP
    "#;

    let candidate = PayerNameExtractor::new().explain(Some(text)).unwrap();
    assert_eq!(candidate.text, "Fernanda Costa Ribeiro");
    assert_eq!(candidate.source_stage, Stage::AnchoredOrigem);
}

#[test]
fn test_shared_across_threads() {
    let extractor = std::sync::Arc::new(PayerNameExtractor::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = extractor.clone();
            std::thread::spawn(move || extractor.extract(Some("ORIGEM\nNOME\nMARIA OLIVEIRA")).name)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "MARIA OLIVEIRA");
    }
}
