mod config;
mod data;
mod error;
mod game;
mod model;
mod scoreboard;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::FeedConfig;
use data::DataClient;
use game::Game;
use scoreboard::{League, Scoreboard};

#[derive(Parser, Debug)]
#[command(author, version, about = "Prints MLB scores", long_about = None)]
#[command(group(ArgGroup::new("filter").args(["team", "league", "in_progress"]).multiple(false)))]
struct Args {
    /// Prints out the given teams, by abbreviation. Repeatable
    #[arg(short, long, value_name = "ABBREV")]
    team: Vec<String>,

    /// Prints games from either the AL or NL. A for American, N for National
    #[arg(short, long)]
    league: Option<League>,

    /// Only prints games currently in progress
    #[arg(short, long)]
    in_progress: bool,

    /// Date to show (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Overrides the feed base URL
    #[arg(long, value_name = "URL")]
    feed_url: Option<String>,

    /// Log fetch and filter details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "mlb_scores=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn select<'a>(args: &Args, scoreboard: &'a Scoreboard) -> Vec<&'a Game> {
    if let Some(league) = args.league {
        scoreboard.games_by_league(league)
    } else if !args.team.is_empty() {
        scoreboard.games_by_team(args.team.as_slice())
    } else if args.in_progress {
        scoreboard.games_in_progress()
    } else {
        scoreboard.games()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = FeedConfig::from_env()?;
    if let Some(url) = &args.feed_url {
        config = config.with_base_url(url);
    }

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let client = DataClient::new(&config).context("Failed to create HTTP client")?;
    let scoreboard = Scoreboard::fetch(&client, date)
        .await
        .with_context(|| format!("Failed to load scoreboard for {}", date))?;

    let games = select(&args, &scoreboard);
    info!(
        "Printing {} of {} games for {}",
        games.len(),
        scoreboard.games().len(),
        scoreboard.date()
    );

    for game in games {
        debug!("Rendering {} at {}", game.away().abbrev, game.home().abbrev);
        println!("{}\n", game);
    }

    Ok(())
}
