use assert_cmd::Command;
use predicates::prelude::*;
use project_check::checks::files::EXPECTED_FILES;
use project_check::test_utils::ProjectFixture;

use crate::common::TestProject;

#[test]
fn test_valid_project_prints_nothing() {
    let project = TestProject::with_fixture(&ProjectFixture::valid()).unwrap();
    let output = project.run_check(&[]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout, "", "unexpected diagnostics:\n{}", output.stdout);
}

#[test]
fn test_empty_directory_reports_every_file() {
    let project = TestProject::new().unwrap();
    let output = project.run_check(&[]).unwrap();
    output.assert_success();

    let expected: Vec<String> =
        EXPECTED_FILES.iter().map(|f| format!("E0001: File not found: {f}")).collect();
    assert_eq!(output.stdout_lines(), expected);
}

#[test]
fn test_diagnostics_do_not_change_exit_status() {
    let fixture = ProjectFixture::valid()
        .without("README.md")
        .with_file(".vscode/settings.json", "{}")
        .with_file(".pylintrc", "[MASTER]\n");
    let project = TestProject::with_fixture(&fixture).unwrap();

    let output = project.run_check(&[]).unwrap();
    output.assert_success();
    assert_eq!(
        output.stdout_lines(),
        vec![
            "E0001: File not found: README.md",
            "E0006: .vscode/settings.json: Unexpected empty JSON file.",
            "E0014: Pylint settings detected. Migrate to Ruff.",
        ]
    );
}

#[test]
fn test_runs_are_idempotent() {
    let fixture = ProjectFixture::valid().with_file("mypy.ini", "").without("yarn.lock");
    let project = TestProject::with_fixture(&fixture).unwrap();

    let first = project.run_check(&[]).unwrap();
    let second = project.run_check(&[]).unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        first.stdout_lines(),
        vec![
            "E0001: File not found: yarn.lock",
            "E0002: File should not exist: mypy.ini. Move these settings to pyproject.toml",
        ]
    );
}

#[test]
fn test_json_with_comments() {
    let fixture = ProjectFixture::valid()
        .with_file("package.json", "{\n  // scripts live here\n  \"name\": \"my-project\"\n}\n");
    let project = TestProject::with_fixture(&fixture).unwrap();

    let output = project.run_check(&[]).unwrap();
    output.assert_success();
    assert_eq!(
        output.stdout_lines(),
        vec!["E0005: package.json: failed to parse JSON. Comments in JSON files are not allowed."]
    );
}

#[test]
fn test_broken_pyproject_reported_once() {
    let fixture =
        ProjectFixture::valid().with_file("pyproject.toml", "[tool.poetry\nname = \"x\"\n");
    let project = TestProject::with_fixture(&fixture).unwrap();

    let output = project.run_check(&[]).unwrap();
    assert_eq!(output.stdout_lines(), vec!["E0010: pyproject.toml: failed to parse TOML."]);
}

#[test]
fn test_version_mismatch() {
    let pyproject = project_check::test_utils::fixtures::PYPROJECT_TOML
        .replace("version = \"0.0.1\"", "version = \"0.1.0\"");
    let fixture = ProjectFixture::valid().with_file("pyproject.toml", pyproject);
    let project = TestProject::with_fixture(&fixture).unwrap();

    let output = project.run_check(&[]).unwrap();
    assert_eq!(
        output.stdout_lines(),
        vec!["E0012: package.json version and pyproject.toml version differ."]
    );
}

#[test]
fn test_no_pluggy_flag() {
    let project = TestProject::with_fixture(&ProjectFixture::valid_no_pluggy()).unwrap();

    project.run_check(&["-P"]).unwrap().assert_success();
    assert_eq!(project.run_check(&["--no-pluggy"]).unwrap().stdout, "");

    let output = project.run_check(&[]).unwrap();
    let lines = output.stdout_lines();
    assert_eq!(lines.len(), 2, "{}", output.stdout);
    let fix_pluggy = "E0013: package.json: \"scripts.fix-pluggy\" key is not present. Should be:";
    assert!(lines[0].starts_with(fix_pluggy), "{}", lines[0]);
    assert_eq!(
        lines[1],
        "E0009: package.json: Expected \"scripts.mypy\" to be `\"yarn fix-pluggy && poetry run mypy .\"`"
    );
}

#[test]
fn test_no_pluggy_from_environment() {
    let project = TestProject::with_fixture(&ProjectFixture::valid_no_pluggy()).unwrap();

    let mut cmd = Command::cargo_bin("check-project").unwrap();
    cmd.arg(project.project_path())
        .env("NO_COLOR", "1")
        .env("CHECK_PROJECT_NO_PLUGGY", "1")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_workdir_argument() {
    let project = TestProject::new().unwrap();
    project.write_file("mypy.ini", "").unwrap();

    let mut cmd = Command::cargo_bin("check-project").unwrap();
    cmd.arg(project.project_path())
        .current_dir(std::env::temp_dir())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("E0001: File not found: .gitignore"))
        .stdout(predicate::str::contains("E0002: File should not exist: mypy.ini"));
}

#[test]
fn test_missing_workdir_fails() {
    let project = TestProject::new().unwrap();
    let missing = project.project_path().join("does-not-exist");

    let mut cmd = Command::cargo_bin("check-project").unwrap();
    cmd.arg(&missing)
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Directory does not exist"));
}

#[test]
fn test_file_as_workdir_fails() {
    let project = TestProject::new().unwrap();
    project.write_file("README.md", "# Project\n").unwrap();

    let mut cmd = Command::cargo_bin("check-project").unwrap();
    cmd.arg(project.project_path().join("README.md"))
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_absent_config_files_only_reported_as_missing() {
    let fixture = ProjectFixture::valid()
        .without(".vscode/cspell.json")
        .without(".markdownlint.json")
        .without("docs/conf.py");
    let project = TestProject::with_fixture(&fixture).unwrap();

    let output = project.run_check(&[]).unwrap();
    assert_eq!(
        output.stdout_lines(),
        vec![
            "E0001: File not found: .markdownlint.json",
            "E0001: File not found: .vscode/cspell.json",
            "E0001: File not found: docs/conf.py",
        ]
    );
}

#[test]
fn test_unreadable_file_fails_after_printing_findings() {
    let project = TestProject::with_fixture(&ProjectFixture::valid().without("README.md")).unwrap();
    std::fs::write(project.project_path().join("package.json"), [0xff, 0xfe, b'{', b'}']).unwrap();

    let output = project.run_check(&[]).unwrap();
    output
        .assert_failure()
        .assert_stdout_contains("E0001: File not found: README.md")
        .assert_stderr_contains("Failed to read file")
        .assert_stderr_contains("package.json");
    assert_eq!(output.stdout_lines(), vec!["E0001: File not found: README.md"]);
}
