use clap::Subcommand;
use dearself_core::models::Priority;
use dearself_core::TasksPanel;
use uuid::Uuid;

use super::{confirm, load_context, CommandResult};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Priority {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_enum, default_value = "medium")]
        priority: PriorityArg,
    },
    /// List all tasks, newest first
    List {
        /// Print tasks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task completed (or pending again with --undo)
    Done {
        id: Uuid,
        #[arg(long)]
        undo: bool,
    },
    /// Delete a task
    Rm {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(action: TaskAction) -> CommandResult {
    let ctx = load_context()?;
    let mut panel = TasksPanel::new(&ctx.store, &ctx.session);

    match action {
        TaskAction::Add {
            title,
            description,
            priority,
        } => {
            panel
                .add(&title, description.as_deref(), priority.into())
                .await?;
            println!("Task added: {title}");
        }
        TaskAction::List { json } => {
            panel.load().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(panel.tasks())?);
            } else if panel.tasks().is_empty() {
                println!("No tasks yet");
            } else {
                for task in panel.tasks() {
                    let mark = if task.completed { "x" } else { " " };
                    println!("[{mark}] {}  {}  ({:?})", task.id, task.title, task.priority);
                }
                println!(
                    "{} of {} completed",
                    panel.completed_count(),
                    panel.tasks().len()
                );
            }
        }
        TaskAction::Done { id, undo } => {
            panel.set_completed(id, !undo).await?;
            println!("Task {} marked {}", id, if undo { "pending" } else { "completed" });
        }
        TaskAction::Rm { id, yes } => {
            if !yes && !confirm(&format!("Delete task {id}?"))? {
                println!("Cancelled");
                return Ok(());
            }
            panel.remove(id).await?;
            println!("Task {id} deleted");
        }
    }

    Ok(())
}
