use std::io::{BufRead, Write};

use mazerun::{
    SolveResult,
    game::{Game, GameSettings, GameStatus, format_time},
    maze::{Direction, RingDirection},
};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "mazerun.log";

enum Command {
    Move(char),
    Hint,
    Path,
    Map,
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "hint" | "h" => Some(Command::Hint),
        "path" | "p" => Some(Command::Path),
        "map" | "m" => Some(Command::Map),
        "restart" | "r" => Some(Command::Restart),
        key @ ("w" | "a" | "s" | "d") => key.chars().next().map(Command::Move),
        _ => None,
    }
}

fn grid_direction(key: char) -> Option<Direction> {
    match key {
        'w' => Some(Direction::North),
        'a' => Some(Direction::West),
        's' => Some(Direction::South),
        'd' => Some(Direction::East),
        _ => None,
    }
}

fn ring_direction(key: char) -> Option<RingDirection> {
    match key {
        'w' => Some(RingDirection::Inner),
        'a' => Some(RingDirection::CounterClockwise),
        's' => Some(RingDirection::Outer),
        'd' => Some(RingDirection::Clockwise),
        _ => None,
    }
}

fn main() -> std::io::Result<()> {
    // Log to a file so the game output on stdout stays readable
    let file_appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let settings = match GameSettings::from_args(std::env::args().skip(1)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: mazerun [1-4] [seed]");
            return Ok(());
        }
    };

    let mut game = match settings.start() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "{} started at {:?}.", settings.preset, game.position())?;
    writeln!(
        stdout,
        "Commands: w/a/s/d to move, hint, path, map, restart, q to quit."
    )?;
    stdout.flush()?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            writeln!(stdout, "Unknown command: {}", line.trim())?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Move(key) => {
                let moved = match &mut game {
                    Game::Grid(state) => grid_direction(key).map(|d| state.move_player(d)),
                    Game::Circular(state) => ring_direction(key).map(|d| state.move_player(d)),
                };
                match moved {
                    Some(Ok(Some(pos))) => writeln!(
                        stdout,
                        "[{}] At {:?}",
                        format_time(game.elapsed()),
                        pos
                    )?,
                    Some(Ok(None)) => writeln!(stdout, "Blocked.")?,
                    Some(Err(e)) => writeln!(stdout, "{e}")?,
                    None => {}
                }
            }
            Command::Hint => match &game {
                Game::Grid(state) => match state.hint() {
                    SolveResult::Found(path) => writeln!(
                        stdout,
                        "Next step {:?}, {} cells to go.",
                        path.get(1),
                        path.len() - 1
                    )?,
                    SolveResult::StartIsGoal(_) => writeln!(stdout, "You are on the goal.")?,
                    SolveResult::NotFound { .. } => writeln!(stdout, "No route from here.")?,
                },
                Game::Circular(_) => writeln!(stdout, "No hints on circular mazes.")?,
            },
            Command::Path => match &game {
                Game::Grid(state) => {
                    writeln!(stdout, "Shortest route: {:?}", state.shortest_path())?
                }
                Game::Circular(_) => writeln!(stdout, "No route overlay on circular mazes.")?,
            },
            Command::Map => match &game {
                Game::Grid(state) => {
                    // One `NESW` token per cell, the player's cell in brackets
                    for (r, row) in state.maze().rows().enumerate() {
                        let line = row
                            .iter()
                            .enumerate()
                            .map(|(c, cell)| {
                                if (r as u8, c as u8) == state.position() {
                                    format!("[{cell}]")
                                } else {
                                    format!(" {cell} ")
                                }
                            })
                            .collect::<String>();
                        writeln!(stdout, "{line}")?;
                    }
                }
                Game::Circular(_) => writeln!(stdout, "No map for circular mazes.")?,
            },
            Command::Restart => {
                if let Game::Grid(state) = &mut game {
                    state.restart();
                    writeln!(stdout, "Back at {:?}.", state.position())?;
                } else {
                    // Circular games draw a new maze and start sector
                    match settings.start() {
                        Ok(new_game) => {
                            game = new_game;
                            writeln!(stdout, "New maze, starting at {:?}.", game.position())?;
                        }
                        Err(e) => writeln!(stdout, "{e}")?,
                    }
                }
            }
        }

        if let GameStatus::Won { elapsed, score } = game.status() {
            writeln!(
                stdout,
                "Goal reached in {}! Score: {}",
                format_time(elapsed),
                score
            )?;
        }
        stdout.flush()?;
    }

    tracing::info!("[game] Exiting");
    Ok(())
}
