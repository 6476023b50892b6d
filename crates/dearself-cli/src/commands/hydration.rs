use clap::Subcommand;
use dearself_core::HydrationPanel;
use serde_json::json;

use super::{load_context, CommandResult};

#[derive(Subcommand)]
pub enum HydrationAction {
    /// Log water intake in milliliters
    Log { amount_ml: i64 },
    /// Show today's total and the trailing week
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(action: HydrationAction) -> CommandResult {
    let ctx = load_context()?;
    let mut panel = HydrationPanel::new(&ctx.store, &ctx.session, ctx.config.goals.hydration_ml);

    match action {
        HydrationAction::Log { amount_ml } => {
            panel.log_amount(amount_ml).await?;
            println!(
                "Logged {amount_ml} ml; {} / {} ml today ({:.0}%)",
                panel.today_total_ml(),
                panel.goal_ml(),
                panel.goal_progress_pct()
            );
        }
        HydrationAction::Status { json } => {
            panel.load().await?;
            if json {
                let status = json!({
                    "today_total_ml": panel.today_total_ml(),
                    "goal_ml": panel.goal_ml(),
                    "goal_progress_pct": panel.goal_progress_pct(),
                    "weekly_totals": panel
                        .weekly_totals()
                        .into_iter()
                        .map(|(date, total)| json!({ "date": date, "total_ml": total }))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!(
                    "Today: {} / {} ml ({:.0}%)",
                    panel.today_total_ml(),
                    panel.goal_ml(),
                    panel.goal_progress_pct()
                );
                for (date, total) in panel.weekly_totals() {
                    println!("  {date}  {total} ml");
                }
            }
        }
    }

    Ok(())
}
