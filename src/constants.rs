//! Global constants used throughout the RepoMesh CLI.
//!
//! This module collects the fixed names that make up the on-disk layout,
//! the default service endpoints written on first `init`, and the wire-level
//! names shared with the remote API. Keeping them together makes the layout
//! discoverable from one place.

/// Name of the hidden per-repository state directory.
pub const STATE_DIR_NAME: &str = ".repomesh";

/// Configuration document inside the state directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Credential file inside the state directory.
pub const TOKEN_FILE_NAME: &str = "token";

/// Generated MCP transport descriptor inside the state directory.
pub const MCP_SERVERS_FILE_NAME: &str = "mcp-servers.json";

/// Directory (relative to the repository root) holding the compose artifacts.
pub const COMPOSE_DIR: [&str; 2] = ["infra", "docker"];

/// Compose file name inside [`COMPOSE_DIR`].
pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";

/// Example environment file shipped with the repository.
pub const ENV_EXAMPLE_FILE_NAME: &str = ".env.example";

/// Active environment file handed to the compose tool.
pub const ENV_FILE_NAME: &str = ".env";

/// Default API base URL written on first `init`.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8787";

/// Default streamable-HTTP MCP endpoint written on first `init`.
pub const DEFAULT_MCP_HTTP_URL: &str = "http://127.0.0.1:8787/mcp/http";

/// Default command that serves MCP over stdio inside the API app.
pub const DEFAULT_MCP_STDIO_COMMAND: &str = "python -m app.mcp.stdio";

/// Repository identifier used when the root path has no final component.
pub const FALLBACK_REPO_ID: &str = "repo";

/// Header carrying the credential on every outbound request.
pub const AUTH_HEADER: &str = "x-repomesh-token";

/// Fixed prefix of every generated credential.
pub const TOKEN_PREFIX: &str = "rm_";

/// Number of characters of the credential that may be shown to users.
pub const TOKEN_PREVIEW_LEN: usize = 8;

/// Launcher script (relative to the repository root) for the stdio transport.
pub const STDIO_LAUNCHER: [&str; 2] = ["scripts", "repomesh_mcp_stdio.py"];

/// Interpreter used to run [`STDIO_LAUNCHER`].
pub const STDIO_INTERPRETER: &str = "python";

/// Well-known descriptor key for the HTTP transport.
pub const HTTP_SERVER_KEY: &str = "repomesh_http";

/// Well-known descriptor key for the stdio transport.
pub const STDIO_SERVER_KEY: &str = "repomesh_stdio";

/// Container orchestration executable.
pub const DOCKER_COMMAND: &str = "docker";

/// Exit code reported when the compose tool could not report its own.
pub const MISSING_EXIT_CODE: i32 = 1;

/// Command users run to bootstrap local state.
pub const INIT_COMMAND: &str = "repomesh init";
