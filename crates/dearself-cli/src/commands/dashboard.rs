use dearself_core::DashboardPanel;

use super::{load_context, CommandResult};

pub async fn run(json: bool) -> CommandResult {
    let ctx = load_context()?;
    let mut panel = DashboardPanel::new(&ctx.store, &ctx.session);
    panel.load().await?;
    let summary = panel.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("DearSelf, {}", ctx.session.email);
    println!(
        "  Tasks:     {} / {} completed",
        summary.tasks_completed, summary.tasks_total
    );
    println!(
        "  Hydration: {} / {} ml today",
        summary.hydration_ml_today, ctx.config.goals.hydration_ml
    );
    println!(
        "  Steps:     {} / {} today",
        summary.steps_today, ctx.config.goals.steps
    );
    println!("  Journal:   {} entries", summary.journal_entries);
    match &summary.latest_mood {
        Some(log) => println!(
            "  Mood:      {} (intensity {}, {})",
            log.mood.label(),
            log.intensity,
            log.date
        ),
        None => println!("  Mood:      no check-ins yet"),
    }
    Ok(())
}
