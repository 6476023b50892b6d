use std::io::{self, Write};
use std::time::Duration;

use clap::Subcommand;
use dearself_core::{
    catalog, find_pattern, BreathePanel, BreathingEvent, BreathingSession, Config, ValidationError,
};

use super::{load_context, CommandResult};

#[derive(Subcommand)]
pub enum BreatheAction {
    /// List the built-in breathing patterns
    Patterns,
    /// Run a guided session in the terminal
    Run {
        /// Pattern name or unambiguous prefix; defaults to the configured one
        #[arg(long)]
        pattern: Option<String>,
        /// Full cycles to complete before stopping
        #[arg(long, default_value_t = 3)]
        cycles: u32,
        /// Do not record the session to the store
        #[arg(long)]
        offline: bool,
    },
    /// Show recently recorded sessions
    Recent {
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
}

pub async fn run(action: BreatheAction) -> CommandResult {
    match action {
        BreatheAction::Patterns => {
            for pattern in catalog() {
                println!("{}", pattern.name);
                println!("  {}", pattern.description);
                println!("  {}", pattern.benefit);
                println!(
                    "  inhale {}s / hold {}s / exhale {}s / rest {}s ({}s per cycle)",
                    pattern.inhale_secs,
                    pattern.hold_secs,
                    pattern.exhale_secs,
                    pattern.rest_secs,
                    pattern.cycle_secs()
                );
            }
            Ok(())
        }
        BreatheAction::Run {
            pattern,
            cycles,
            offline,
        } => run_session(pattern, cycles, offline).await,
        BreatheAction::Recent { limit } => {
            let ctx = load_context()?;
            let panel = BreathePanel::new(&ctx.store, &ctx.session);
            let records = panel.recent(limit).await?;
            if records.is_empty() {
                println!("No recorded sessions");
            } else {
                for record in records {
                    println!(
                        "{}  {}  {} cycles, {}s",
                        record.date,
                        record.pattern_name,
                        record.cycles_completed,
                        record.duration_seconds
                    );
                }
            }
            Ok(())
        }
    }
}

async fn run_session(pattern: Option<String>, cycles: u32, offline: bool) -> CommandResult {
    let config = Config::load()?;
    let name = pattern.unwrap_or_else(|| config.default_pattern.clone());
    let pattern = *find_pattern(&name).ok_or_else(|| ValidationError::UnknownPattern(name.clone()))?;
    if cycles == 0 {
        return Err("cycles must be at least 1".into());
    }

    let mut session = BreathingSession::new(pattern);
    session.toggle_running();
    println!("{} for {cycles} cycles (Ctrl-C to abandon)", pattern.name);

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await; // first tick fires immediately
    let mut elapsed: u32 = 0;

    render(&session)?;
    while session.cycles_completed() < cycles {
        ticker.tick().await;
        elapsed += 1;
        let event = session.tick();
        render(&session)?;
        if let Some(BreathingEvent::CycleCompleted { cycles_completed, .. }) = event {
            println!();
            println!("Cycle {cycles_completed} of {cycles} complete");
        }
        if !session.running() {
            // All-zero patterns cannot advance; nothing left to wait for.
            break;
        }
    }
    println!();
    println!(
        "Done: {} cycles in {elapsed} seconds",
        session.cycles_completed()
    );

    if offline {
        return Ok(());
    }
    match load_context() {
        Ok(ctx) => {
            let panel = BreathePanel::new(&ctx.store, &ctx.session);
            panel
                .record(&pattern, session.cycles_completed(), elapsed)
                .await?;
            println!("Session recorded");
        }
        Err(e) => {
            log::warn!("session not recorded: {e}");
            println!("Session not recorded ({e})");
        }
    }
    Ok(())
}

fn render(session: &BreathingSession) -> io::Result<()> {
    print!(
        "\r{:<12} {:>2}s  (cycle {})   ",
        session.phase().instruction(),
        session.seconds_remaining(),
        session.cycles_completed() + 1
    );
    io::stdout().flush()
}
