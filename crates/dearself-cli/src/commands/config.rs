use clap::Subcommand;
use dearself_core::Config;

use super::CommandResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config path and current contents
    Show,
    /// Write the config file, pointing the CLI at a hosted backend
    Init {
        /// Project base URL, e.g. https://xyzcompany.supabase.co
        #[arg(long)]
        url: String,
        /// Public anon key for that project
        #[arg(long)]
        anon_key: String,
        #[arg(long)]
        hydration_goal_ml: Option<i64>,
        #[arg(long)]
        steps_goal: Option<i64>,
        /// Pattern preselected by `dearself breathe run`
        #[arg(long)]
        default_pattern: Option<String>,
    },
}

pub fn run(action: ConfigAction) -> CommandResult {
    match action {
        ConfigAction::Show => {
            let path = Config::path()?;
            let config = Config::load()?;
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Init {
            url,
            anon_key,
            hydration_goal_ml,
            steps_goal,
            default_pattern,
        } => {
            let mut config = Config::load().unwrap_or_default();
            config.store.url = url;
            config.store.anon_key = anon_key;
            if let Some(ml) = hydration_goal_ml {
                config.goals.hydration_ml = ml;
            }
            if let Some(steps) = steps_goal {
                config.goals.steps = steps;
            }
            if let Some(pattern) = default_pattern {
                config.default_pattern = pattern;
            }
            // Reject a malformed URL before it lands in the file.
            config.store.base_url()?;
            config.save()?;
            println!("Config written to {}", Config::path()?.display());
        }
    }
    Ok(())
}
