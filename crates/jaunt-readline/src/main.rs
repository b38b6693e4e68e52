use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use jaunt_core::city::{City, PointOfInterest, builtin_cities};
use jaunt_core::game::GameManager;
use jaunt_core::leaderboard::{LeaderboardEntry, LeaderboardStore};
use jaunt_infrastructure::JsonLeaderboardRepository;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "board".to_string(),
                "abandon".to_string(),
                "quit".to_string(),
                "exit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first_word = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|cmd| cmd == first_word) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// The main entry point for the Jaunt REPL application.
///
/// This function sets up a rustyline-based REPL that:
/// 1. Loads the persisted leaderboard (or starts empty if it cannot)
/// 2. Offers the built-in cities as numbered menu choices
/// 3. Drives a hunt through the selected city, one leg at a time
/// 4. Records finished hunts to the leaderboard and renders the standings
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let repository = Arc::new(JsonLeaderboardRepository::new()?);
    let mut store = LeaderboardStore::new(repository);
    if let Err(e) = store.load() {
        eprintln!(
            "{}",
            format!("Could not load the saved leaderboard: {}", e).yellow()
        );
        println!("{}", "Starting with an empty leaderboard.".bright_black());
    }

    let cities = builtin_cities();
    let mut game = GameManager::new();

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Jaunt ===".bright_magenta().bold());
    println!(
        "{}",
        "Pick a city by number, 'board <number>' to browse its leaderboard, or 'quit' to exit."
            .bright_black()
    );
    println!();
    print_city_menu(&cities);

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if trimmed == "board" || trimmed.starts_with("board ") {
                    match parse_city_number(&trimmed["board".len()..], &cities) {
                        Some(city) => print_leaderboard(&store, &city.name, &city.points_of_interest),
                        None => println!("{}", "Usage: board <city number>".yellow()),
                    }
                    continue;
                }

                match parse_city_number(trimmed, &cities) {
                    Some(city) => {
                        let city = city.clone();
                        run_hunt(&mut rl, &mut game, &mut store, city);
                        println!();
                        print_city_menu(&cities);
                    }
                    None => println!("{}", "Unknown command".bright_black()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Resolves a 1-based menu number to its city.
fn parse_city_number<'a>(input: &str, cities: &'a [City]) -> Option<&'a City> {
    let number: usize = input.trim().parse().ok()?;
    number.checked_sub(1).and_then(|i| cities.get(i))
}

fn print_city_menu(cities: &[City]) {
    println!("{}", "Cities:".bright_cyan());
    for (i, city) in cities.iter().enumerate() {
        println!("  {}. {}", i + 1, city.name);
    }
}

/// Drives one hunt from the first point to the last, then records the
/// player's times. Abandoning (or CTRL-C/CTRL-D) discards the session and
/// returns to the menu without recording anything.
fn run_hunt(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    game: &mut GameManager,
    store: &mut LeaderboardStore,
    city: City,
) {
    let city_name = city.name.clone();
    let total = city.points_of_interest.len();

    println!();
    println!(
        "{}",
        format!("Starting a hunt through {}. The clock is running!", city_name).bright_yellow()
    );
    game.start(city);

    loop {
        let (point_name, task, index) = match (game.current_point(), game.session()) {
            (Some(point), Some(session)) => (
                point.name.clone(),
                point.task.description.clone(),
                session.current_index(),
            ),
            _ => break,
        };

        println!();
        println!(
            "{}",
            format!("[{}/{}] {}", index + 1, total, point_name)
                .bright_cyan()
                .bold()
        );
        println!("  {} {}", "Task:".bright_black(), task);

        match rl.readline("(press Enter when the task is done, or type 'abandon') ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "abandon" {
                    game.discard();
                    println!("{}", "Hunt abandoned.".yellow());
                    return;
                }
                if !trimmed.is_empty() {
                    println!("{}", "Unknown command".bright_black());
                    continue;
                }

                match game.complete_current_leg() {
                    Ok(leg) => println!(
                        "{}",
                        format!("Completed {} in {:.2} seconds", leg.point.name, leg.seconds)
                            .green()
                    ),
                    Err(e) => eprintln!("{}", format!("Could not complete the leg: {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                game.discard();
                println!("{}", "Hunt abandoned.".yellow());
                return;
            }
            Err(err) => {
                game.discard();
                eprintln!("{}", format!("Error: {:?}", err).red());
                return;
            }
        }
    }

    let Some(session) = game.session() else { return };

    println!();
    println!("{}", "Hunt complete!".bright_magenta().bold());
    println!(
        "{}",
        format!("Total time: {:.2} seconds", session.total_seconds()).bright_yellow()
    );

    let player_name = match rl.readline("Enter your name for the leaderboard (leave empty to skip): ")
    {
        Ok(line) => line.trim().to_string(),
        Err(_) => String::new(),
    };

    if player_name.is_empty() {
        println!("{}", "Times not recorded.".bright_black());
    } else {
        let entries: Vec<LeaderboardEntry> = session
            .completed_legs()
            .map(|(point, seconds)| {
                LeaderboardEntry::new(
                    city_name.clone(),
                    point.name.clone(),
                    player_name.clone(),
                    seconds,
                )
            })
            .collect();

        let mut reported = false;
        for entry in entries {
            if let Err(e) = store.add(entry) {
                // The entries stay on the in-memory board either way
                if !reported {
                    eprintln!(
                        "{}",
                        format!("Could not save the leaderboard: {}", e).red()
                    );
                    reported = true;
                }
            }
        }
        if !reported {
            println!("{}", format!("Times recorded for {}.", player_name).green());
        }
    }

    let tour: Vec<PointOfInterest> = session.tour().to_vec();
    print_leaderboard(store, &city_name, &tour);
}

/// Renders one section per point, fastest entries first.
fn print_leaderboard(store: &LeaderboardStore, city_name: &str, points: &[PointOfInterest]) {
    println!();
    println!(
        "{}",
        format!("=== Leaderboard: {} ===", city_name)
            .bright_magenta()
            .bold()
    );
    for point in points {
        println!("{}", point.name.bright_cyan());
        let ranked = store.query(city_name, &point.name);
        if ranked.is_empty() {
            println!("  {}", "No entries yet".bright_black());
        } else {
            for (rank, entry) in ranked.iter().enumerate() {
                println!(
                    "  {}. {}: {:.2} seconds",
                    rank + 1,
                    entry.player_name,
                    entry.time_taken
                );
            }
        }
    }
}
