use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use showseeker::{DirectoryConfig, Page, TVMAZE_BASE_URL, TvMazeDirectory};
use std::process;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Search the TVMaze directory for tv shows and list their episodes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the TVMaze API
    #[arg(long, default_value = TVMAZE_BASE_URL)]
    base_url: String,

    /// Print debug logging to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for shows matching a term and print them
    Search {
        /// Free-text search term
        term: String,
    },
    /// Print the episode list of a show
    Episodes {
        /// TVMaze identifier of the show
        show_id: u64,
    },
    /// Interactively search shows and pick one to list its episodes
    Browse {
        /// Search term to start with
        term: Option<String>,
    },
}

/// What to do after the show cards have been printed
enum Choice {
    Episodes(usize),
    NewSearch,
    Quit,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Asks for a search term, like the search form on a web page
fn prompt_term() -> Result<String, dialoguer::Error> {
    Input::<String>::new()
        .with_prompt("Search shows")
        .allow_empty(true)
        .interact_text()
}

/// Lets the user pick one of the displayed cards' episode triggers
fn prompt_choice(page: &Page<TvMazeDirectory>) -> Result<Choice, dialoguer::Error> {
    let cards = page.shows_list().cards();
    let mut items: Vec<String> = cards
        .iter()
        .map(|card| format!("{}: {}", card.trigger, card.name))
        .collect();
    items.push("New search".to_string());
    items.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("Choose a show")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        index if index < cards.len() => Choice::Episodes(index),
        index if index == cards.len() => Choice::NewSearch,
        _ => Choice::Quit,
    })
}

/// Runs the interactive search and episodes loop
fn browse(page: &mut Page<TvMazeDirectory>, term: Option<String>) -> Result<(), dialoguer::Error> {
    let mut term = match term {
        Some(term) => term,
        None => prompt_term()?,
    };

    loop {
        // Failures are kept as the page notice and printed with the page
        if let Err(e) = page.submit_search(&term) {
            debug!(error = %e, "search failed");
        }
        println!("\n{}", page);

        loop {
            match prompt_choice(page)? {
                Choice::Episodes(index) => {
                    if let Err(e) = page.request_episodes(index) {
                        debug!(error = %e, "episodes request failed");
                    }
                    println!("\n{}", page);
                }
                Choice::NewSearch => break,
                Choice::Quit => return Ok(()),
            }
        }

        term = prompt_term()?;
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let directory = TvMazeDirectory::with_config(DirectoryConfig {
        base_url: cli.base_url,
    });
    let mut page = Page::new(directory);

    let result = match cli.command {
        Command::Search { term } => page.submit_search(&term).map(|_| {
            print!("{}", page.shows_list());
        }),
        Command::Episodes { show_id } => page.episodes_for_show(show_id).map(|_| {
            print!("{}", page.episodes_area());
        }),
        Command::Browse { term } => {
            if let Err(e) = browse(&mut page, term) {
                eprintln!("\nError: {}", e);
                process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
