use chrono::NaiveDate;
use clap::Subcommand;
use dearself_core::JournalPanel;
use uuid::Uuid;

use super::{confirm, load_context, CommandResult, MoodArg};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a new entry
    Add {
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, value_enum, default_value = "neutral")]
        mood: MoodArg,
        /// Entry date, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List entries, newest first
    List {
        /// Match against title and content, case-insensitive
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum)]
        mood: Option<MoodArg>,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rewrite an entry; omitted fields keep their current value
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_enum)]
        mood: Option<MoodArg>,
    },
    /// Delete an entry
    Rm {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(action: JournalAction) -> CommandResult {
    let ctx = load_context()?;
    let mut panel = JournalPanel::new(&ctx.store, &ctx.session);

    match action {
        JournalAction::Add {
            title,
            content,
            mood,
            date,
        } => {
            panel.add(&title, &content, mood.into(), date).await?;
            println!("Entry added: {title}");
        }
        JournalAction::List { search, mood, json } => {
            panel.load().await?;
            let entries = panel.filtered(&search, mood.map(Into::into));
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No entries");
            } else {
                for entry in entries {
                    println!(
                        "{}  {}  [{}]  {}",
                        entry.date,
                        entry.id,
                        entry.mood.label(),
                        entry.title
                    );
                }
            }
        }
        JournalAction::Edit {
            id,
            title,
            content,
            mood,
        } => {
            panel.load().await?;
            let existing = panel
                .entries()
                .iter()
                .find(|e| e.id == id)
                .ok_or_else(|| format!("no journal entry with id {id}"))?
                .clone();
            let title = title.unwrap_or(existing.title);
            let content = content.unwrap_or(existing.content);
            let mood = mood.map(Into::into).unwrap_or(existing.mood);
            panel.update_entry(id, &title, &content, mood).await?;
            println!("Entry {id} updated");
        }
        JournalAction::Rm { id, yes } => {
            if !yes && !confirm(&format!("Delete entry {id}?"))? {
                println!("Cancelled");
                return Ok(());
            }
            panel.remove(id).await?;
            println!("Entry {id} deleted");
        }
    }

    Ok(())
}
