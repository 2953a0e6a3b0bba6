use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn payer(&self) -> Command {
        let mut cmd = Command::cargo_bin("payer").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("config"));
        cmd
    }

    fn write(&self, name: &str, content: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_extract_from_stdin() {
    let env = Env::new();
    env.payer()
        .arg("extract")
        .write_stdin("RECIBO\nPAGO POR\nNOME\nJOAO DA SILVA\nCPF: 123.456.789-00\n")
        .assert()
        .success()
        .stdout("JOAO DA SILVA\n");
}

#[test]
fn test_extract_json_explain() {
    let env = Env::new();
    let input = env.write("receipt.txt", "ORIGEM\nNOME:\nMARIA OLIVEIRA\n");

    env.payer()
        .args(["extract", "--format", "json", "--explain"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"MARIA OLIVEIRA""#))
        .stdout(predicate::str::contains(r#""stage":"anchored_origem""#));
}

#[test]
fn test_extract_not_found_is_labeled() {
    let env = Env::new();

    env.payer()
        .arg("extract")
        .write_stdin("123.456.789-00\nR$ 10,00\n")
        .assert()
        .success()
        .stdout("(no payer name found)\n");

    env.payer()
        .args(["extract", "--format", "json"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("{\"name\":\"\"}\n");
}

#[test]
fn test_extract_missing_file() {
    let env = Env::new();
    env.payer()
        .args(["extract", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_extract_with_corpus_override() {
    let env = Env::new();
    let names = env.write("names.txt", "# names\nquiteria\n");
    let config = env.write(
        "config.json",
        &format!(r#"{{"corpus": {{"name_tokens": {:?}}}}}"#, names.display().to_string()),
    );

    env.payer()
        .arg("--config")
        .arg(&config)
        .args(["extract", "--explain"])
        .write_stdin("JULIA SOUZA\nQUITERIA BENTO\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("QUITERIA BENTO\nStage: fuzzy\nDistance: 0"));
}

#[test]
fn test_batch_writes_outputs_and_summary() {
    let env = Env::new();
    let inputs = env.dir.path().join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("a.txt"), "PAGO POR\nNOME\nJOAO DA SILVA\n").unwrap();
    fs::write(inputs.join("b.txt"), "ORIGEM\nNOME\nMARIA OLIVEIRA\n").unwrap();
    fs::write(inputs.join("c.txt"), "R$ 10,00\n").unwrap();
    fs::write(inputs.join("ignored.png"), "not text").unwrap();

    let out = env.dir.path().join("out");
    let summary = env.dir.path().join("summary.csv");

    env.payer()
        .arg("batch")
        .arg(format!("{}/*", inputs.display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .arg(&summary)
        .args(["-j", "2"])
        .assert()
        .success();

    let a = fs::read_to_string(out.join("a.json")).unwrap();
    assert!(a.contains(r#""name":"JOAO DA SILVA""#));
    assert!(a.contains(r#""stage":"anchored_pago_por""#));
    assert!(!out.join("ignored.json").exists());

    let csv = fs::read_to_string(&summary).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].starts_with("file,name,stage,distance,error,processed_at"));
    assert!(rows[1].contains("a.txt,JOAO DA SILVA,anchored_pago_por,,,"));
    assert!(rows[2].contains("b.txt,MARIA OLIVEIRA,anchored_origem,,,"));
    assert!(rows[3].contains("c.txt,,,,,"));
}

#[test]
fn test_batch_no_matches() {
    let env = Env::new();
    env.payer()
        .arg("batch")
        .arg(format!("{}/*.txt", env.dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_config_init_get_set() {
    let env = Env::new();
    let config = env.dir.path().join("payer.json");

    env.payer()
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    env.payer()
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    env.payer()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "extraction.max_fuzzy_distance", "1"])
        .assert()
        .success();

    env.payer()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "extraction.max_fuzzy_distance"])
        .assert()
        .success()
        .stdout("1\n");

    env.payer()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "extraction.nope"])
        .assert()
        .failure();
}
