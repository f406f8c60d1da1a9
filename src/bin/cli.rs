//! This is the command line front-end for the game. The player types 0 or 1
//! each round (or a simulated player is used), and the log of the session can
//! be saved as a CSV file.

extern crate clap;
extern crate env_logger;
extern crate log;

use bitduel::{Bit, Engine, ErrorKind, LogRow, Summary, LOG_COLUMNS};
use clap::{value_parser, Arg, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution};

use std::io::{self, BufRead, Write};
use std::{fs::File, time::Instant};

/// Render the log rows as comma separated text with a header line.
fn to_csv(rows: &[LogRow]) -> String {
    let mut out = LOG_COLUMNS.join(",");
    out.push('\n');
    for (round, prediction, bit, correct, player, ai) in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            round, prediction, bit, correct, player, ai
        ));
    }
    out
}

fn save_file(data: &str, path: &str) {
    let mut f = File::create(path).expect("Can't create file");
    f.write_all(data.as_bytes()).expect("Unable to write data");
    log::info!("Wrote {}.", &path);
}

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Session completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

fn print_summary(s: &Summary) {
    println!(
        "Played {} of {} rounds. Player {} - AI {}.",
        s.played, s.rounds, s.player_score, s.ai_score
    );
    if s.played == s.rounds {
        if s.player_score > s.ai_score {
            println!("You win!");
        } else if s.player_score < s.ai_score {
            println!("The AI wins!");
        } else {
            println!("It's a draw.");
        }
    }
}

/// Parse a line of user input into a bit. Anything other than a single
/// number is returned as an invalid value so that the engine can reject it.
fn parse_bit(line: &str) -> Option<Bit> {
    line.trim().parse::<u8>().ok()
}

/// Play the session by reading bits from stdin, one per line.
fn play_interactive(engine: &mut Engine) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !engine.is_finished() {
        print!(
            "Round {} ({} left). Pick 0 or 1: ",
            engine.played() + 1,
            engine.remaining()
        );
        io::stdout().flush().expect("Unable to flush stdout");

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => {
                log::info!("End of input");
                return;
            }
        };

        let Some(bit) = parse_bit(&line) else {
            println!("Please type 0 or 1.");
            continue;
        };

        match engine.play_round(bit) {
            Ok(r) => {
                let verdict = if r.correct { "guessed it" } else { "missed" };
                println!(
                    "AI predicted {}, you played {}: the AI {}. ({}:{})",
                    r.prediction, r.bit, verdict, r.player_score, r.ai_score
                );
            }
            Err(err) if err.kind() == ErrorKind::InvalidInput => {
                println!("{}. Please type 0 or 1.", err);
            }
            Err(err) => {
                log::error!("{}", err);
                return;
            }
        }
    }
}

/// Play the session against a player that picks 1 with probability 'p'.
fn play_simulated(engine: &mut Engine, p: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let player = match Bernoulli::new(p) {
        Ok(dist) => dist,
        Err(err) => {
            log::error!("Invalid probability {}: {}", p, err);
            return;
        }
    };

    while !engine.is_finished() {
        let bit = player.sample(&mut rng) as Bit;
        if let Err(err) = engine.play_round(bit) {
            log::error!("{}", err);
            return;
        }
    }
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("rounds")
                .short('r')
                .long("rounds")
                .value_name("N")
                .help("The number of rounds to play")
                .value_parser(value_parser!(usize))
                .default_value("50"),
        )
        .arg(
            Arg::new("context")
                .short('n')
                .long("context")
                .value_name("N")
                .help("The number of previous bits the AI looks at")
                .value_parser(value_parser!(usize))
                .default_value("2"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Save the log of the session as CSV")
                .num_args(1),
        )
        .arg(
            Arg::new("simulate")
                .long("simulate")
                .value_name("P")
                .help("Play against a bot that picks 1 with probability P")
                .value_parser(value_parser!(f64))
                .num_args(1),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("The seed of the simulated player")
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let rounds = *matches.get_one::<usize>("rounds").unwrap();
    let context_len = *matches.get_one::<usize>("context").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();
    let simulate = matches.get_one::<f64>("simulate").copied();
    let output = matches.get_one::<String>("output").cloned();

    let mut engine = match Engine::new(rounds, context_len) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let x = Timer::new();
    match simulate {
        Some(p) => play_simulated(&mut engine, p, seed),
        None => play_interactive(&mut engine),
    }
    drop(x);

    print_summary(&engine.summary());

    if let Some(path) = output {
        save_file(&to_csv(&engine.export_log()), &path);
    }
}
