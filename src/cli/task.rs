//! Task operations against the RepoMesh API.
//!
//! ```bash
//! repomesh task create --goal "Add retries" --scope-file src/api.rs --priority 2
//! repomesh task list --status pending
//! repomesh task claim <TASK_ID> --agent codex-1 --resource src/api.rs --ttl 900
//! repomesh task update <TASK_ID> --progress 50 --notes "halfway"
//! ```
//!
//! Responses are printed exactly as the API returns them.

use super::CliConfig;
use super::output::print_json;
use crate::api::{ClaimRequest, NewTask, TaskScope, TaskUpdate};
use anyhow::{Result, bail};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    command: TaskSubcommand,
}

#[derive(Subcommand)]
enum TaskSubcommand {
    /// Create a task
    Create(CreateArgs),
    /// List tasks
    List(ListArgs),
    /// Claim a task for an agent
    Claim(ClaimArgs),
    /// Update status, progress, or notes of a task
    Update(UpdateArgs),
}

#[derive(Args)]
struct CreateArgs {
    /// Task goal
    #[arg(long)]
    goal: String,

    /// Task description
    #[arg(long, default_value = "")]
    description: String,

    /// Files in scope (repeatable)
    #[arg(long = "scope-file", value_name = "FILE", num_args = 1..)]
    scope_files: Vec<String>,

    /// Priority
    #[arg(long, default_value_t = 3)]
    priority: i64,

    /// IDs of tasks this one depends on (repeatable)
    #[arg(long = "dep", value_name = "TASK_ID")]
    deps: Vec<String>,

    /// Acceptance criteria
    #[arg(long)]
    acceptance: Option<String>,
}

#[derive(Args)]
struct ListArgs {
    /// Filter by status
    #[arg(long)]
    status: Option<String>,
}

#[derive(Args)]
struct ClaimArgs {
    task_id: String,

    /// Agent ID
    #[arg(long = "agent")]
    agent_id: String,

    /// Resource key to lease
    #[arg(long = "resource")]
    resource_key: String,

    /// Lease TTL in seconds
    #[arg(long, default_value_t = 1800)]
    ttl: u64,
}

#[derive(Args)]
struct UpdateArgs {
    task_id: String,

    #[arg(long)]
    status: Option<String>,

    #[arg(long)]
    notes: Option<String>,

    /// Percent complete
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    progress: Option<u8>,

    #[arg(long)]
    summary: Option<String>,

    #[arg(long)]
    blocked_reason: Option<String>,
}

impl CreateArgs {
    fn into_task(self, repo_id: &str) -> NewTask {
        NewTask {
            goal: self.goal,
            description: self.description,
            scope: TaskScope {
                files: self.scope_files,
            },
            priority: self.priority,
            deps: self.deps,
            acceptance_criteria: self.acceptance,
            repo_id: Some(repo_id.to_string()),
        }
    }
}

impl UpdateArgs {
    fn to_update(&self) -> TaskUpdate {
        TaskUpdate {
            status: self.status.clone(),
            notes: self.notes.clone(),
            progress: self.progress,
            summary: self.summary.clone(),
            blocked_reason: self.blocked_reason.clone(),
        }
    }
}

impl TaskCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<i32> {
        let paths = config.paths();
        let client = config.api_client(&paths)?;

        let response = match self.command {
            TaskSubcommand::Create(args) => {
                let task = args.into_task(&client.config().repo_id);
                client.create_task(&task).await?
            }
            TaskSubcommand::List(args) => client.list_tasks(args.status.as_deref()).await?,
            TaskSubcommand::Claim(args) => {
                let claim = ClaimRequest {
                    agent_id: args.agent_id,
                    resource_key: args.resource_key,
                    lease_ttl: args.ttl,
                };
                client.claim_task(&args.task_id, &claim).await?
            }
            TaskSubcommand::Update(args) => {
                let update = args.to_update();
                if update.is_empty() {
                    bail!(
                        "Nothing to update: pass at least one of --status, --notes, --progress, --summary, --blocked-reason"
                    );
                }
                client.update_task(&args.task_id, &update).await?
            }
        };

        print_json(&response)?;
        Ok(0)
    }
}
