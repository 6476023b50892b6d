use clap::Subcommand;
use dearself_core::StepsPanel;
use serde_json::json;

use super::{load_context, CommandResult};

#[derive(Subcommand)]
pub enum StepsAction {
    /// Record today's step count (replaces any earlier count for today)
    Log { steps: i64 },
    /// Show today's count and the trailing week
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(action: StepsAction) -> CommandResult {
    let ctx = load_context()?;
    let mut panel = StepsPanel::new(&ctx.store, &ctx.session, ctx.config.goals.steps);

    match action {
        StepsAction::Log { steps } => {
            // Load first so an existing row for today is updated, not doubled.
            panel.load().await?;
            panel.log_steps(steps).await?;
            println!(
                "Logged {steps} steps; goal {} ({:.0}%)",
                panel.goal_steps(),
                panel.goal_progress_pct()
            );
        }
        StepsAction::Status { json } => {
            panel.load().await?;
            if json {
                let status = json!({
                    "today_steps": panel.today_steps(),
                    "goal_steps": panel.goal_steps(),
                    "goal_progress_pct": panel.goal_progress_pct(),
                    "weekly_average": panel.weekly_average(),
                    "goals_met_this_week": panel.goals_met_this_week(),
                    "weekly_logs": panel.weekly_logs(),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!(
                    "Today: {} / {} steps ({:.0}%)",
                    panel.today_steps(),
                    panel.goal_steps(),
                    panel.goal_progress_pct()
                );
                println!("Weekly average: {} steps", panel.weekly_average());
                println!("Goals met this week: {}", panel.goals_met_this_week());
                for log in panel.weekly_logs() {
                    println!("  {}  {} steps", log.date, log.steps);
                }
            }
        }
    }

    Ok(())
}
