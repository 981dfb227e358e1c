//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run `quizbank` inside an empty directory so no stray config is picked up.
fn quizbank(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizbank").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("QUIZBANK_CURRENT_YEAR")
        .env_remove("RUST_LOG");
    cmd
}

const SCENARIO: &str = concat!(
    // multiple choice: statement, level, solution, option count, options, correct, year
    "1\n2+2=?\nRecordar\n4\n3\n3\n4\n5\n2\n\n",
    // true/false: statement, level, answer, year
    "2\nWater boils at 100C at sea level\nAplicar\nVerdadero\n\n",
    "3\n",
    // evaluation: subject, level, count
    "6\nMath\nRecordar\n5\n",
    "0\n",
);

#[test]
fn interactive_scenario() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .args(["--current-year", "2025", "interactive"])
        .write_stdin(SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 added (1 min)."))
        .stdout(predicate::str::contains("Question 2 added (3 min)."))
        .stdout(predicate::str::contains("ID: 1 (Multiple Choice)"))
        .stdout(predicate::str::contains("ID: 2 (True/False)"))
        .stdout(predicate::str::contains("Evaluation: Math"))
        .stdout(predicate::str::contains("Total time: 1 minutes"))
        .stdout(predicate::str::contains("Program finished."));
}

#[test]
fn default_command_is_interactive() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .write_stdin("3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Menu"))
        .stdout(predicate::str::contains("The bank is empty."));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .arg("interactive")
        .write_stdin("2\nHalf a question\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Program finished."));
}

#[test]
fn previous_year_is_excluded() {
    let dir = TempDir::new().unwrap();
    let input = concat!(
        "2\nFrom 2023\nAplicar\nVerdadero\n2023\n",
        "2\nFrom 2024\nAplicar\nVerdadero\n2024\n",
        "2\nFrom 2025\nAplicar\nVerdadero\n2025\n",
        "6\nPhysics\nAplicar\n2\n",
        "0\n",
    );

    let output = quizbank(&dir)
        .args(["--current-year", "2025", "interactive"])
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let (_, evaluation) = stdout.split_once("Evaluation: Physics").unwrap();
    assert!(evaluation.contains("From 2023"));
    assert!(evaluation.contains("From 2025"));
    assert!(!evaluation.contains("From 2024"));
    assert!(evaluation.contains("Total time: 6 minutes"));
}

#[test]
fn json_format() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .args(["--current-year", "2025", "interactive", "--format", "json"])
        .write_stdin("2\nQ\nCrear\nFalso\n\n6\nArt\nCrear\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"subject\": \"Art\""))
        .stdout(predicate::str::contains("\"type\": \"True/False\""))
        .stdout(predicate::str::contains("\"answer\": \"No\""))
        .stdout(predicate::str::contains("\"total_minutes\": 6"));
}

#[test]
fn unknown_format_fails() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .args(["interactive", "--format", "html"])
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn config_file_sets_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quizbank.toml"),
        "current_year = 2025\noutput_format = \"markdown\"\n",
    )
    .unwrap();

    quizbank(&dir)
        .write_stdin("2\nQ\nEvaluar\nVerdadero\n\n6\nLogic\nEvaluar\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Evaluation: Logic"))
        .stdout(predicate::str::contains("**Total time:** 5 min"));
}

#[test]
fn missing_config_path_fails() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .args(["--config", "no_such_config.toml", "interactive"])
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("config file not found"));
}

/// Add a 2023 and a 2024 question at "Aplicar", then build an evaluation of
/// both. Pressing Enter at the year prompt of a third question shows the
/// effective current year.
const YEAR_SCENARIO: &str = concat!(
    "2\nFrom 2023\nAplicar\nVerdadero\n2023\n",
    "2\nFrom 2024\nAplicar\nVerdadero\n2024\n",
    "2\nThis year\nAplicar\nFalso\n\n",
    "6\nHistory\nAplicar\n3\n",
    "0\n",
);

fn evaluation_section(stdout: &[u8]) -> String {
    let stdout = String::from_utf8(stdout.to_vec()).unwrap();
    let (_, evaluation) = stdout.split_once("Evaluation: History").unwrap();
    evaluation.to_string()
}

#[test]
fn env_current_year_excludes_previous_year() {
    let dir = TempDir::new().unwrap();

    let assert = quizbank(&dir)
        .env("QUIZBANK_CURRENT_YEAR", "2025")
        .write_stdin(YEAR_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year [2025]: "));

    let evaluation = evaluation_section(&assert.get_output().stdout);
    assert!(evaluation.contains("From 2023"));
    assert!(!evaluation.contains("From 2024"));
    assert!(evaluation.contains("This year"));
}

#[test]
fn current_year_flag_wins_over_env_and_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quizbank.toml"), "current_year = 2030\n").unwrap();

    let assert = quizbank(&dir)
        .env("QUIZBANK_CURRENT_YEAR", "2026")
        .args(["--current-year", "2025"])
        .write_stdin(YEAR_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year [2025]: "));

    let evaluation = evaluation_section(&assert.get_output().stdout);
    assert!(evaluation.contains("From 2023"));
    assert!(!evaluation.contains("From 2024"));
}

#[test]
fn env_current_year_wins_over_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quizbank.toml"), "current_year = 2024\n").unwrap();

    let assert = quizbank(&dir)
        .env("QUIZBANK_CURRENT_YEAR", "2025")
        .write_stdin(YEAR_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year [2025]: "));

    let evaluation = evaluation_section(&assert.get_output().stdout);
    assert!(!evaluation.contains("From 2024"));
}

#[test]
fn invalid_env_current_year_falls_back_to_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quizbank.toml"), "current_year = 2025\n").unwrap();

    let assert = quizbank(&dir)
        .env("QUIZBANK_CURRENT_YEAR", "not-a-year")
        .write_stdin(YEAR_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year [2025]: "))
        .stderr(predicate::str::contains(
            "ignoring invalid QUIZBANK_CURRENT_YEAR",
        ));

    let evaluation = evaluation_section(&assert.get_output().stdout);
    assert!(evaluation.contains("From 2023"));
    assert!(!evaluation.contains("From 2024"));
}

#[test]
fn home_config_is_used_without_local_config() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".config").join("quizbank");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "current_year = 2025\noutput_format = \"markdown\"\n",
    )
    .unwrap();

    let assert = quizbank(&dir)
        .write_stdin(YEAR_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year [2025]: "))
        .stdout(predicate::str::contains("# Evaluation: History"));

    let evaluation = evaluation_section(&assert.get_output().stdout);
    assert!(evaluation.contains("From 2023"));
    assert!(!evaluation.contains("From 2024"));
}

#[test]
fn local_config_shadows_home_config() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".config").join("quizbank");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "current_year = 2030\n").unwrap();
    std::fs::write(dir.path().join("quizbank.toml"), "current_year = 2025\n").unwrap();

    quizbank(&dir)
        .write_stdin(YEAR_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Year [2025]: "));
}

#[test]
fn levels_table() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remember"))
        .stdout(predicate::str::contains("Recordar"))
        .stdout(predicate::str::contains("Crear"))
        .stdout(predicate::str::contains("default of 2 minutes"));
}

#[test]
fn levels_single_by_spanish_name() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .args(["levels", "Aplicar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apply"))
        .stdout(predicate::str::contains("Aplicar"))
        .stdout(predicate::str::contains("Recordar").not());
}

#[test]
fn levels_unknown_name_fails() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .args(["levels", "aplicar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown taxonomy level: \"aplicar\""));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizbank.toml"));

    assert!(dir.path().join("quizbank.toml").exists());

    // The generated file must load.
    quizbank(&dir).write_stdin("0\n").assert().success();
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir).arg("init").assert().success();

    quizbank(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Exam question bank and timed evaluation builder",
        ));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    quizbank(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizbank"));
}
