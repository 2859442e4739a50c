use crate::common::repomesh;
use predicates::prelude::*;
use repomesh_cli::test_utils::TestRepo;

#[test]
fn test_commands_require_init() {
    let repo = TestRepo::bare().unwrap();

    for args in [
        vec!["task", "list"],
        vec!["logs"],
        vec!["context", "t-1"],
        vec!["mcp"],
        vec!["task", "claim", "t-1", "--agent", "a", "--resource", "r"],
    ] {
        repomesh(&repo)
            .args(&args)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "RepoMesh is not initialized. Run `repomesh init` first.",
            ));
    }

    // read-only commands never create state
    assert!(!repo.file_exists(".repomesh"));
}

#[test]
fn test_error_is_single_line() {
    let repo = TestRepo::bare().unwrap();
    let output = repomesh(&repo).args(["task", "list"]).output().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr was: {stderr}");
    assert!(stderr.starts_with("error: "));
}

#[test]
fn test_up_without_compose_file() {
    let repo = TestRepo::bare().unwrap();
    repomesh(&repo)
        .arg("up")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Compose file not found"))
        .stderr(predicate::str::contains("docker-compose.yml"));
}

#[test]
fn test_down_without_compose_file() {
    let repo = TestRepo::bare().unwrap();
    repomesh(&repo)
        .arg("down")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Compose file not found"));
}

#[test]
fn test_status_uninitialized_reports_json() {
    let repo = TestRepo::bare().unwrap();
    repomesh(&repo)
        .arg("status")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"readyz\": null"))
        .stdout(predicate::str::contains("\"ok\": false"));
}

#[test]
fn test_doctor_reports_checks() {
    let repo = TestRepo::bare().unwrap();
    // exit status depends on whether a Docker daemon is reachable here
    repomesh(&repo)
        .arg("doctor")
        .assert()
        .stdout(predicate::str::contains("\"docker_daemon\""))
        .stdout(predicate::str::contains("\"compose_file\": false"))
        .stdout(predicate::str::contains("\"initialized\": false"))
        .stdout(predicate::str::contains("\"api_health\": false"));
}

#[test]
fn test_update_requires_a_field() {
    let repo = TestRepo::bare().unwrap();
    crate::common::init(&repo);

    repomesh(&repo)
        .args(["task", "update", "t-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Nothing to update"));
}
