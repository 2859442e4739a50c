use crate::common::{init, repomesh};
use predicates::prelude::*;
use repomesh_cli::mcp::{self, McpServerEntry};
use repomesh_cli::test_utils::TestRepo;
use std::path::Path;

#[test]
fn test_mcp_details_show_preview_only() {
    let repo = TestRepo::bare().unwrap();
    init(&repo);
    let token = repo.read_file(".repomesh/token").unwrap();

    repomesh(&repo)
        .arg("mcp")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mcp_http_url\": \"http://127.0.0.1:8787/mcp/http\""))
        .stdout(predicate::str::contains("\"mcp_stdio_command\": \"python -m app.mcp.stdio\""))
        .stdout(predicate::str::contains(format!("{}...", &token[..8])))
        .stdout(predicate::str::contains(token.as_str()).not());

    assert!(!repo.file_exists(".repomesh/mcp-servers.json"));
}

#[test]
fn test_mcp_write_descriptor() {
    let repo = TestRepo::bare().unwrap();
    init(&repo);
    let token = repo.read_file(".repomesh/token").unwrap();

    repomesh(&repo)
        .args(["mcp", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mcp-servers.json"))
        .stdout(predicate::str::contains("qwen mcp add repomesh-stdio python"));

    let path = repo.root().join(".repomesh").join("mcp-servers.json");
    let document = mcp::load(&path).unwrap();
    assert_eq!(document.mcp_servers.len(), 2);

    match document.get("repomesh_http") {
        Some(McpServerEntry::Http { url, headers }) => {
            assert_eq!(url, "http://127.0.0.1:8787/mcp/http");
            assert_eq!(headers.get("x-repomesh-token"), Some(&token));
        }
        other => panic!("unexpected http entry: {other:?}"),
    }
    match document.get("repomesh_stdio") {
        Some(McpServerEntry::Stdio { command, args }) => {
            assert_eq!(command, "python");
            let launcher = Path::new(&args[0]);
            assert!(launcher.ends_with(Path::new("scripts").join("repomesh_mcp_stdio.py")));
        }
        other => panic!("unexpected stdio entry: {other:?}"),
    }

    // regenerating produces the same bytes
    let first = repo.read_file(".repomesh/mcp-servers.json").unwrap();
    repomesh(&repo).args(["mcp", "--write"]).assert().success();
    assert_eq!(repo.read_file(".repomesh/mcp-servers.json").unwrap(), first);
}

#[test]
fn test_relative_repo_writes_absolute_launcher() {
    let repo = TestRepo::bare().unwrap();
    let parent = repo.root().parent().unwrap().to_path_buf();

    repomesh(&repo)
        .current_dir(&parent)
        .args(["--repo", "demo-repo", "init"])
        .assert()
        .success();
    repomesh(&repo)
        .current_dir(&parent)
        .args(["--repo", "demo-repo", "mcp", "--write"])
        .assert()
        .success();

    let document = mcp::load(&repo.root().join(".repomesh").join("mcp-servers.json")).unwrap();
    match document.get("repomesh_stdio") {
        Some(McpServerEntry::Stdio { args, .. }) => {
            let launcher = Path::new(&args[0]);
            assert!(launcher.is_absolute(), "launcher path is relative: {}", args[0]);
            let expected = Path::new("demo-repo").join("scripts").join("repomesh_mcp_stdio.py");
            assert!(launcher.ends_with(expected));
        }
        other => panic!("unexpected stdio entry: {other:?}"),
    }
    assert!(repo.read_file(".repomesh/config.yml").unwrap().contains("repo_id: demo-repo"));
}
