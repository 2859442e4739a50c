//! Shared helpers for driving the binary.

use assert_cmd::Command;
use repomesh_cli::config::RepoConfig;
use repomesh_cli::test_utils::TestRepo;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// `repomesh` running inside `repo`, isolated from the caller's environment.
pub fn repomesh(repo: &TestRepo) -> Command {
    let mut cmd = Command::cargo_bin("repomesh").unwrap();
    cmd.current_dir(repo.root())
        .env_remove("REPOMESH_REPO")
        .env_remove("REPOMESH_API_TIMEOUT")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("HTTPS_PROXY")
        .env_remove("https_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_COLOR", "1");
    cmd
}

/// Initialize `repo` through the binary.
pub fn init(repo: &TestRepo) {
    repomesh(repo).arg("init").assert().success();
}

/// Point the repository's configuration at `api_url`.
pub fn set_api_url(repo: &TestRepo, api_url: &str) {
    let raw = repo.read_file(".repomesh/config.yml").unwrap();
    let mut config: RepoConfig = serde_yaml::from_str(&raw).unwrap();
    config.api_url = api_url.to_string();
    repo.create_file(".repomesh/config.yml", &serde_yaml::to_string(&config).unwrap()).unwrap();
}

/// Serve one HTTP response on loopback; the handle yields the raw request.
pub fn one_shot_server(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\n\
         content-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut raw = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request_complete(&raw) {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (base, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(split) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..split]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    raw.len() >= split + 4 + content_length
}
