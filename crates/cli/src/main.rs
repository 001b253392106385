use autonoma_core::{autonoma_manifest, Card, CardText, Event, EventBus, Game, RngState};
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, Write};

const USAGE: &str = "\
autonoma [options]
  --seed N          seed the shuffle (default: entropy)
  --difficulty N    start a session immediately (1-3)
  --draws N         draw N cards and exit (implies --difficulty, default 1)
  --json            print draws as JSON records
  --cui             launch the terminal UI
  --help            show this message";

const HELP: &str = "\
commands:
  start <n> | new <n>   start a session at difficulty n (replaces the current one)
  draw | d              draw the next autonoma card
  status                show cards remaining before the next reshuffle
  seed                  show the shuffle seed in use
  help | ?              show this message
  quit | exit           leave";

#[derive(Debug, Clone, Copy, Default)]
struct CliOptions {
    cui: bool,
    json: bool,
    help: bool,
    seed: Option<u64>,
    difficulty: Option<u8>,
    draws: Option<usize>,
}

#[derive(Debug, Serialize)]
struct DrawRecord {
    index: usize,
    card: CardText,
    remaining: usize,
    reshuffled: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_options(&args);

    if options.help {
        println!("{USAGE}");
        return;
    }
    if options.cui {
        let launch = autonoma_cui::LaunchOptions { seed: options.seed };
        if let Err(err) = autonoma_cui::run(launch) {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
        return;
    }
    if let Err(err) = run(options) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--cui" => options.cui = true,
            "--json" => options.json = true,
            "--help" | "-h" => options.help = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--difficulty" | "-d" => {
                if let Some(value) = args.get(idx + 1) {
                    options.difficulty = value.parse::<u8>().ok();
                    idx += 1;
                }
            }
            "--draws" | "-n" => {
                if let Some(value) = args.get(idx + 1) {
                    options.draws = value.parse::<usize>().ok();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    options
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    let mut game = Game::new(&autonoma_manifest(), rng)?;
    let mut events = EventBus::default();
    let mut printer = Printer::new(options.json);

    if let Some(draws) = options.draws {
        let difficulty = options.difficulty.unwrap_or(1);
        let card = game.start(difficulty, &mut events)?;
        printer.draw(&card, &mut events);
        for _ in 1..draws {
            let card = game.draw(&mut events)?;
            printer.draw(&card, &mut events);
        }
        return Ok(());
    }

    println!("autonoma deck (seed {}) - type ? for help", game.seed());
    if let Some(difficulty) = options.difficulty {
        match game.start(difficulty, &mut events) {
            Ok(card) => printer.draw(&card, &mut events),
            Err(err) => println!("error: {err}"),
        }
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => continue,
        };
        match command {
            "help" | "?" => println!("{HELP}"),
            "start" | "new" => {
                let difficulty = parts.next().and_then(|value| value.parse::<u8>().ok());
                match difficulty {
                    Some(difficulty) => match game.start(difficulty, &mut events) {
                        Ok(card) => printer.draw(&card, &mut events),
                        Err(err) => println!("error: {err}"),
                    },
                    None => println!("usage: start <difficulty>"),
                }
            }
            "draw" | "d" => match game.draw(&mut events) {
                Ok(card) => printer.draw(&card, &mut events),
                Err(err) => println!("error: {err}"),
            },
            "status" => match game.session() {
                Some(session) => println!(
                    "difficulty {}, cards remaining: {}",
                    session.difficulty(),
                    session.remaining()
                ),
                None => println!("no active session"),
            },
            "seed" => println!("seed {}", game.seed()),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (? for help)"),
        }
    }
    Ok(())
}

struct Printer {
    json: bool,
    index: usize,
}

impl Printer {
    fn new(json: bool) -> Self {
        Self { json, index: 0 }
    }

    fn draw(&mut self, card: &Card, events: &mut EventBus) {
        self.index += 1;
        let mut remaining = 0usize;
        let mut reshuffled = false;
        let mut lines = Vec::new();
        for event in events.drain() {
            match &event {
                Event::CardDrawn { remaining: left, .. } => remaining = *left,
                Event::DeckReshuffled { .. } => reshuffled = true,
                Event::SessionStarted { .. } => {}
            }
            lines.push(event.status_text());
        }
        if self.json {
            let record = DrawRecord {
                index: self.index,
                card: card.describe(),
                remaining,
                reshuffled,
            };
            match serde_json::to_string(&record) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("error: {err}"),
            }
        } else {
            for line in lines {
                println!("# {line}");
            }
            println!("{}", card.describe());
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_flags() {
        let options = parse_options(&args(&["--seed", "42", "--difficulty", "2", "--json"]));
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.difficulty, Some(2));
        assert!(options.json);
        assert!(!options.cui);
    }

    #[test]
    fn ignores_unknown_flags() {
        let options = parse_options(&args(&["--wat", "--draws", "5"]));
        assert_eq!(options.draws, Some(5));
    }

    #[test]
    fn missing_flag_values_stay_unset() {
        let options = parse_options(&args(&["--seed"]));
        assert_eq!(options.seed, None);
    }
}
