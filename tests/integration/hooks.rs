use assert_cmd::Command;
use predicates::prelude::*;
use project_check::test_utils::ProjectFixture;

use crate::common::{FileAssert, TestProject};

fn generated_project() -> TestProject {
    let fixture = ProjectFixture::valid()
        .with_file("mymodule/__init__.py", "")
        .with_file("mymodule/main.py", "");
    TestProject::with_fixture(&fixture).unwrap()
}

#[cfg(unix)]
fn install_tools(project: &TestProject) {
    for tool in ["poetry", "yarn", "git"] {
        project.fake_tool(tool, 0).unwrap();
    }
}

const POST_GEN_LOG: &[&str] = &[
    "poetry add loguru",
    "poetry add -G dev mypy pylint pylint-quotes rope toml yapf",
    "poetry add -G docs docutils esbonio sphinx toml",
    "poetry add -G tests coveralls mock pytest pytest-mock",
    "poetry install --with=dev --with=docs --with=tests",
    "yarn add -D cspell markdownlint-cli2 prettier-plugin-sort-json prettier-plugin-toml",
    "yarn format",
    "git init",
    "git add .",
    "git commit -m Start of project --signoff",
    "git remote add origin git@github.com:someone/my-project.git",
];

#[test]
fn test_pre_gen_accepts_valid_name() {
    let project = TestProject::new().unwrap();
    let output = project.run_hooks(&["pre-gen", "--module-name", "mymodule"]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout, "");
}

#[test]
fn test_pre_gen_rejects_invalid_name() {
    let project = TestProject::new().unwrap();
    project
        .run_hooks(&["pre-gen", "--module-name", "2bad"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("2bad is not a valid Python module name!");
}

#[cfg(unix)]
#[test]
fn test_post_gen_invalid_name_runs_nothing() {
    let project = generated_project();
    install_tools(&project);

    project
        .run_hooks(&["post-gen", "--module-name", "2bad", "--github-username", "someone"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("2bad is not a valid Python module name!");

    assert!(project.tool_log().is_empty());
    FileAssert::exists(project.project_path().join("mymodule/main.py"));
}

#[cfg(unix)]
#[test]
fn test_post_gen_bootstraps_project() {
    let project = generated_project();
    install_tools(&project);

    project
        .run_hooks(&["post-gen", "--module-name", "mymodule", "--github-username", "someone"])
        .unwrap()
        .assert_success();

    assert_eq!(project.tool_log(), POST_GEN_LOG);
    FileAssert::not_exists(project.project_path().join("mymodule/main.py"));
    FileAssert::exists(project.project_path().join("mymodule/__init__.py"));
    FileAssert::equals(
        project.project_path().join(".vscode/dictionary.txt"),
        "coveralls\ndocutils\nesbonio\nloguru\nmock\nmymodule\nmypy\npylint\npylint-quotes\npytest\n\
         pytest-mock\nrope\nsomeone\nsphinx\ntoml\nyapf\n",
    );
}

#[cfg(unix)]
#[test]
fn test_post_gen_with_main_and_requests() {
    let project = generated_project();
    install_tools(&project);

    project
        .run_hooks(&[
            "post-gen",
            "--module-name",
            "mymodule",
            "--github-username",
            "someone",
            "--directory-name",
            "other-repo",
            "--want-main",
            "--want-requests",
        ])
        .unwrap()
        .assert_success();

    let log = project.tool_log();
    assert_eq!(log[0], "poetry add loguru click>=8.1.3,!=8.1.4 requests");
    assert_eq!(log[1], "poetry add -G dev mypy pylint pylint-quotes rope toml yapf types-requests");
    assert_eq!(log[2], "poetry add -G docs docutils esbonio sphinx toml sphinx-click");
    assert_eq!(log[3], "poetry add -G tests coveralls mock pytest pytest-mock requests-mock");
    assert_eq!(
        log.last().map(String::as_str),
        Some("git remote add origin git@github.com:someone/other-repo.git")
    );
    FileAssert::exists(project.project_path().join("mymodule/main.py"));

    let dictionary = project.read_file(".vscode/dictionary.txt").unwrap();
    for word in ["click", "requests", "requests-mock", "sphinx-click", "types-requests"] {
        assert!(dictionary.lines().any(|line| line == word), "{word} missing from dictionary");
    }
}

#[cfg(unix)]
#[test]
fn test_post_gen_stops_at_failing_tool() {
    let project = generated_project();
    install_tools(&project);
    project.fake_tool("yarn", 3).unwrap();

    project
        .run_hooks(&["post-gen", "--module-name", "mymodule", "--github-username", "someone"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Command failed: yarn add -D cspell markdownlint-cli2");

    let log = project.tool_log();
    assert_eq!(log.len(), 6);
    assert!(log[5].starts_with("yarn add -D"));
    assert!(!log.iter().any(|line| line.starts_with("git")));
    FileAssert::equals(project.project_path().join(".vscode/dictionary.txt"), "loguru\nmymodule\n");
}

#[cfg(unix)]
#[test]
fn test_post_gen_missing_tool() {
    let project = generated_project();
    project.fake_tool("poetry", 0).unwrap();
    project.fake_tool("yarn", 0).unwrap();

    project
        .run_hooks(&["post-gen", "--module-name", "mymodule", "--github-username", "someone"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("git is not installed or not found in PATH");

    assert_eq!(project.tool_log().len(), 7);
}

#[cfg(unix)]
#[test]
fn test_post_gen_configured_from_environment() {
    let project = generated_project();
    install_tools(&project);

    let mut cmd = Command::cargo_bin("project-hooks").unwrap();
    cmd.arg("post-gen")
        .current_dir(std::env::temp_dir())
        .env("NO_COLOR", "1")
        .env("PATH", project.bin_path())
        .env_remove("RUST_LOG")
        .env_remove("PROJECT_DIRECTORY_NAME")
        .env("PROJECT_MODULE_NAME", "mymodule")
        .env("PROJECT_GITHUB_USERNAME", "someone")
        .env("PROJECT_WANT_MAIN", "true")
        .env("PROJECT_WANT_REQUESTS", "false")
        .env("PROJECT_DIR", project.project_path())
        .assert()
        .success();

    let log = project.tool_log();
    assert_eq!(log[0], "poetry add loguru click>=8.1.3,!=8.1.4");
    assert_eq!(
        log.last().map(String::as_str),
        Some("git remote add origin git@github.com:someone/my-project.git")
    );
    FileAssert::exists(project.project_path().join("mymodule/main.py"));
}

#[test]
fn test_post_gen_missing_project_dir() {
    let project = TestProject::new().unwrap();
    let missing = project.project_path().join("nowhere");

    let mut cmd = Command::cargo_bin("project-hooks").unwrap();
    cmd.args(["post-gen", "--module-name", "mymodule", "--github-username", "someone"])
        .arg("--project-dir")
        .arg(&missing)
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory does not exist"));
}
