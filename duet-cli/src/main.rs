use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use duet_core::{
    Category, EnvironmentPref, Mood, PlanningContext, Weather, analyze_history,
    analyze_spot_on_history, parse_price,
};
use duet_store::{EventStore, GoalSettings, read_events_csv, write_events_csv};
use duet_venues::{PlacesProvider, PlanService};

mod render;

#[derive(Parser, Debug)]
#[command(name = "duet", version, about = "Duet date planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a monthly date plan
    Plan {
        /// Total monthly budget (default: goal settings, $200)
        #[arg(long)]
        budget: Option<f64>,

        /// Number of dates to plan (default: goal settings, 4)
        #[arg(long)]
        count: Option<usize>,

        /// Mood: energized, relaxed, romantic, adventurous, playful, cozy
        #[arg(long)]
        mood: Option<String>,

        /// Interest categories (repeatable): food, nature, art, active, music, nightlife
        #[arg(long = "interest")]
        interests: Vec<String>,

        /// Environment preference: indoor, outdoor, any
        #[arg(long, default_value = "any")]
        environment: String,

        /// Weather: sunny or rainy
        #[arg(long)]
        weather: Option<String>,

        /// City for venue search
        #[arg(long, default_value = "San Francisco")]
        city: String,

        /// CSV of past events (title,price,date,status,rating,match_result)
        #[arg(long)]
        events_csv: Option<PathBuf>,

        /// Seed the selection shuffle for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Skip venue enrichment
        #[arg(long)]
        no_venues: bool,

        /// Print plans as JSON
        #[arg(long)]
        json: bool,

        /// Accept the plans: append them as scheduled events to this CSV
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Analyze past events for a success pattern
    History {
        /// CSV of past events
        #[arg(long)]
        csv: PathBuf,

        /// Require the "Spot On" verdict (the venue-enrichment filter)
        #[arg(long)]
        spot_on: bool,
    },

    /// List the archetype catalog
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Plan {
            budget,
            count,
            mood,
            interests,
            environment,
            weather,
            city,
            events_csv,
            seed,
            no_venues,
            json,
            save,
        } => {
            let settings = GoalSettings::default();
            let budget = budget.unwrap_or_else(|| settings.budget());
            let count = count.unwrap_or_else(|| settings.count());

            let stored = match &events_csv {
                Some(path) => read_events_csv(path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => Vec::new(),
            };
            let mut store = EventStore::from_events(stored);

            let mut ctx = PlanningContext::new()
                .with_environment(parse_environment(&environment)?)
                .with_past_events(store.history());
            if let Some(m) = &mood {
                ctx = ctx.with_mood(parse_mood(m)?);
            }
            if let Some(w) = &weather {
                ctx = ctx.with_weather(parse_weather(w)?);
            }
            let interests = interests
                .iter()
                .map(|i| parse_category(i))
                .collect::<Result<Vec<Category>>>()?;
            ctx = ctx.with_interests(interests);

            let mut service = PlanService::new(PlacesProvider::new())
                .with_city(city)
                .with_venues(!no_venues);
            if let Some(seed) = seed {
                service = service.with_seed(seed);
            }

            if !json {
                println!("Planning {count} dates for ${budget:.2}/mo...");
            }
            let plans = service.generate_plan(budget, count, &ctx).await?;

            if plans.is_empty() {
                bail!("no viable date ideas for this context; relax the filters and try again");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&plans)?);
            } else {
                render::print_plans(&plans);
            }

            if let Some(path) = save {
                for plan in &plans {
                    let price = parse_price(&plan.cost).unwrap_or(0.0);
                    store.add_event(&plan.title, format!("{price:.2}"), None);
                }
                write_events_csv(&path, store.events())
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nSaved {} events to {}", store.events().len(), path.display());
            }
        }

        Command::History { csv, spot_on } => {
            let stored = read_events_csv(&csv)
                .with_context(|| format!("reading {}", csv.display()))?;
            let store = EventStore::from_events(stored);
            let history = store.history();
            let pattern = if spot_on {
                analyze_spot_on_history(&history)
            } else {
                analyze_history(&history)
            };
            match pattern {
                Some(p) => render::print_pattern(&p, history.len()),
                None => println!("No usable success signal in {} events", history.len()),
            }
        }

        Command::Catalog => {
            render::print_catalog(&duet_core::Catalog::standard());
        }
    }

    Ok(())
}

fn parse_mood(raw: &str) -> Result<Mood> {
    Ok(match raw.to_lowercase().as_str() {
        "energized" => Mood::Energized,
        "relaxed" => Mood::Relaxed,
        "romantic" => Mood::Romantic,
        "adventurous" => Mood::Adventurous,
        "playful" => Mood::Playful,
        "cozy" => Mood::Cozy,
        other => bail!("unknown mood: {other}"),
    })
}

fn parse_category(raw: &str) -> Result<Category> {
    Ok(match raw.to_lowercase().as_str() {
        "food" => Category::Food,
        "nature" => Category::Nature,
        "art" => Category::Art,
        "active" => Category::Active,
        "music" => Category::Music,
        "nightlife" => Category::Nightlife,
        other => bail!("unknown interest: {other}"),
    })
}

fn parse_environment(raw: &str) -> Result<EnvironmentPref> {
    Ok(match raw.to_lowercase().as_str() {
        "indoor" => EnvironmentPref::Indoor,
        "outdoor" => EnvironmentPref::Outdoor,
        "any" => EnvironmentPref::Any,
        other => bail!("unknown environment: {other}"),
    })
}

fn parse_weather(raw: &str) -> Result<Weather> {
    Ok(match raw.to_lowercase().as_str() {
        "sunny" => Weather::Sunny,
        "rainy" => Weather::Rainy,
        other => bail!("unknown weather: {other}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mood() {
        assert_eq!(parse_mood("Romantic").unwrap(), Mood::Romantic);
        assert!(parse_mood("hangry").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("food").unwrap(), Category::Food);
        assert_eq!(parse_category("NIGHTLIFE").unwrap(), Category::Nightlife);
        assert!(parse_category("sports").is_err());
    }

    #[test]
    fn test_parse_environment() {
        assert_eq!(parse_environment("any").unwrap(), EnvironmentPref::Any);
        assert_eq!(parse_environment("Indoor").unwrap(), EnvironmentPref::Indoor);
        assert!(parse_environment("space").is_err());
    }

    #[test]
    fn test_parse_weather() {
        assert_eq!(parse_weather("sunny").unwrap(), Weather::Sunny);
        assert!(parse_weather("snowy").is_err());
    }
}
