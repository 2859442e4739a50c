//! Setup hints for specific MCP clients.

use crate::constants::MCP_SERVERS_FILE_NAME;
use crate::paths::launcher_path;
use serde::Serialize;
use std::path::Path;

/// Copy-pasteable instructions printed by `repomesh mcp --write`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientHints {
    pub qwen_remove_hivemind: String,
    pub qwen_add: String,
    pub qwen_test: String,
    pub codex_note: String,
    pub json_note: String,
}

pub fn client_hints(repo_root: &Path) -> ClientHints {
    let launcher = launcher_path(repo_root);
    let descriptor = format!(".repomesh/{MCP_SERVERS_FILE_NAME}");

    ClientHints {
        qwen_remove_hivemind: "qwen mcp remove hivemind".to_string(),
        qwen_add: format!("qwen mcp add repomesh-stdio python \"{}\"", launcher.display()),
        qwen_test: "qwen -p \"Call task.list from repomesh-stdio and return only JSON.\" \
                    --allowed-mcp-server-names repomesh-stdio --output-format json"
            .to_string(),
        codex_note: format!(
            "Use {descriptor} directly in Codex MCP config and remove any unrelated servers such as hivemind."
        ),
        json_note: format!(
            "Use {descriptor} in any client that accepts MCP mcpServers JSON directly (Codex/Gemini-compatible clients)."
        ),
    }
}
