//! Read-only views: event log and task context bundles.

use super::CliConfig;
use super::output::print_json;
use crate::api::ContextMode;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct LogsCommand {
    /// Filter events by task ID
    #[arg(long)]
    task_id: Option<String>,
}

impl LogsCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<i32> {
        let client = config.api_client(&config.paths())?;
        let events = client.list_events(self.task_id.as_deref()).await?;
        print_json(&events)?;
        Ok(0)
    }
}

#[derive(Args)]
pub struct ContextCommand {
    task_id: String,

    /// Bundle detail level (server default: compact)
    #[arg(long, value_enum)]
    mode: Option<ContextMode>,
}

impl ContextCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<i32> {
        let client = config.api_client(&config.paths())?;
        let bundle = client.context_bundle(&self.task_id, self.mode).await?;
        print_json(&bundle)?;
        Ok(0)
    }
}
