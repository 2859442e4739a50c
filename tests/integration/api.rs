use crate::common::{init, one_shot_server, repomesh, set_api_url};
use predicates::prelude::*;
use repomesh_cli::test_utils::TestRepo;

#[test]
fn test_task_list_sends_token_and_query() {
    let repo = TestRepo::bare().unwrap();
    init(&repo);
    let token = repo.read_file(".repomesh/token").unwrap();

    let (base, server) = one_shot_server("200 OK", r#"[{"id":"t-1","status":"in progress"}]"#);
    set_api_url(&repo, &base);

    repomesh(&repo)
        .args(["task", "list", "--status", "in progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"t-1\""));

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /v1/tasks?status=in%20progress HTTP/1.1"));
    assert!(request.to_lowercase().contains(&format!("x-repomesh-token: {token}")));
}

#[test]
fn test_task_create_body() {
    let repo = TestRepo::bare().unwrap();
    init(&repo);

    let (base, server) = one_shot_server("201 Created", r#"{"id":"t-9","goal":"Ship"}"#);
    set_api_url(&repo, &base);

    repomesh(&repo)
        .args(["task", "create", "--goal", "Ship", "--scope-file", "src/lib.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"t-9\""));

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /v1/tasks HTTP/1.1"));
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(body["goal"], "Ship");
    assert_eq!(body["description"], "");
    assert_eq!(body["scope"]["files"][0], "src/lib.rs");
    assert_eq!(body["priority"], 3);
    assert_eq!(body["repo_id"], "demo-repo");
}

#[test]
fn test_remote_error_message_surfaces() {
    let repo = TestRepo::bare().unwrap();
    init(&repo);

    let (base, server) = one_shot_server(
        "404 Not Found",
        r#"{"error":{"code":"not_found","message":"not found","details":{}}}"#,
    );
    set_api_url(&repo, &base);

    repomesh(&repo)
        .args(["context", "missing-task", "--mode", "full"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: not found"));

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /v1/context/bundle/missing-task?mode=full HTTP/1.1"));
}

#[test]
fn test_unparseable_error_body() {
    let repo = TestRepo::bare().unwrap();
    init(&repo);

    let (base, server) = one_shot_server("500 Internal Server Error", "oops");
    set_api_url(&repo, &base);

    repomesh(&repo)
        .args(["logs", "--task-id", "t-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API request failed (500)"));

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /v1/events?task_id=t-1 HTTP/1.1"));
}

#[test]
fn test_status_reports_readyz() {
    let repo = TestRepo::bare().unwrap();
    init(&repo);

    let (base, server) = one_shot_server("200 OK", r#"{"status":"ready"}"#);
    set_api_url(&repo, &base);

    repomesh(&repo)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"readyz\": 200"))
        .stdout(predicate::str::contains("\"ok\": true"));

    assert!(server.join().unwrap().starts_with("GET /readyz HTTP/1.1"));
}
