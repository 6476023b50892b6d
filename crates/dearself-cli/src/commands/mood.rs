use clap::Subcommand;
use dearself_core::MoodPanel;
use serde_json::json;

use super::{load_context, CommandResult, MoodArg};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Check in with today's mood (replaces any earlier check-in for today)
    Log {
        #[arg(value_enum)]
        mood: MoodArg,
        /// How strongly, 1..=10
        #[arg(long, default_value_t = 5)]
        intensity: i64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show today's check-in and the trailing week
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(action: MoodAction) -> CommandResult {
    let ctx = load_context()?;
    let mut panel = MoodPanel::new(&ctx.store, &ctx.session);

    match action {
        MoodAction::Log {
            mood,
            intensity,
            notes,
        } => {
            panel.load().await?;
            panel.log_mood(mood.into(), intensity, notes.as_deref()).await?;
            println!("Mood logged: {:?} (intensity {intensity})", mood);
        }
        MoodAction::Status { json } => {
            panel.load().await?;
            if json {
                let status = json!({
                    "today": panel.today_log(),
                    "weekly_average_intensity": panel.weekly_average_intensity(),
                    "weekly_logs": panel.weekly_logs(),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                match panel.today_log() {
                    Some(log) => {
                        print!("Today: {} (intensity {})", log.mood.label(), log.intensity);
                        match &log.notes {
                            Some(notes) => println!("  {notes}"),
                            None => println!(),
                        }
                    }
                    None => println!("No check-in yet today"),
                }
                println!(
                    "Weekly average intensity: {:.1}",
                    panel.weekly_average_intensity()
                );
                for log in panel.weekly_logs() {
                    println!("  {}  {} ({})", log.date, log.mood.label(), log.intensity);
                }
            }
        }
    }

    Ok(())
}
