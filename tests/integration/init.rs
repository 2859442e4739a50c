use crate::common::repomesh;
use predicates::prelude::*;
use repomesh_cli::test_utils::TestRepo;

#[test]
fn test_init_creates_state() {
    let repo = TestRepo::bare().unwrap();

    repomesh(&repo)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\": \"RepoMesh initialized\""))
        .stdout(predicate::str::contains("\"api_url\": \"http://127.0.0.1:8787\""));

    let config = repo.read_file(".repomesh/config.yml").unwrap();
    assert!(config.contains("api_url: http://127.0.0.1:8787"));
    assert!(config.contains("repo_id: demo-repo"));

    let token = repo.read_file(".repomesh/token").unwrap();
    assert!(token.starts_with("rm_"));
    assert_eq!(token.len(), 35);
}

#[test]
fn test_init_is_idempotent() {
    let repo = TestRepo::bare().unwrap();

    repomesh(&repo).arg("init").assert().success();
    let token = repo.read_file(".repomesh/token").unwrap();
    let config = repo.read_file(".repomesh/config.yml").unwrap();

    repomesh(&repo)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
    assert_eq!(repo.read_file(".repomesh/token").unwrap(), token);
    assert_eq!(repo.read_file(".repomesh/config.yml").unwrap(), config);
}

#[test]
fn test_init_never_prints_full_token() {
    let repo = TestRepo::bare().unwrap();
    let output = repomesh(&repo).args(["--verbose", "init"]).output().unwrap();
    assert!(output.status.success());

    let token = repo.read_file(".repomesh/token").unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains(&token));
    assert!(!stderr.contains(&token));
    assert!(stdout.contains(&token[..8]));
}

#[test]
fn test_init_seeds_env_file_once() {
    let repo = TestRepo::with_compose().unwrap();
    repo.create_file("infra/docker/.env.example", "LOCAL_TOKEN=change-me\n").unwrap();

    repomesh(&repo).arg("init").assert().success();
    assert_eq!(repo.read_file("infra/docker/.env").unwrap(), "LOCAL_TOKEN=change-me\n");

    repo.create_file("infra/docker/.env", "LOCAL_TOKEN=mine\n").unwrap();
    repomesh(&repo).arg("init").assert().success();
    assert_eq!(repo.read_file("infra/docker/.env").unwrap(), "LOCAL_TOKEN=mine\n");
}

#[test]
fn test_repo_flag_targets_other_directory() {
    let cwd = TestRepo::bare().unwrap();
    let target = TestRepo::bare().unwrap();

    repomesh(&cwd)
        .arg("--repo")
        .arg(target.root())
        .arg("init")
        .assert()
        .success();

    assert!(target.file_exists(".repomesh/token"));
    assert!(!cwd.file_exists(".repomesh"));
}

#[test]
fn test_repo_dot_uses_directory_name() {
    let repo = TestRepo::bare().unwrap();

    repomesh(&repo)
        .args(["--repo", ".", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-repo"));

    let config = repo.read_file(".repomesh/config.yml").unwrap();
    assert!(config.contains("repo_id: demo-repo"), "config was: {config}");
}
