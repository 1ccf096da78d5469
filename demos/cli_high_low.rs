//! CLI High and Low example.
//!
//! Run with `cargo run --example cli_high_low [seed]`. Set `RUST_LOG=debug`
//! to see engine logs on stderr.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;
use hilo::{Card, Controls, Game, GameOptions, InputAdapter, View};

/// Keeps the terminal in raw mode while alive.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

enum Key {
    Char(char),
    Enter,
    Quit,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);

    let mut game = Game::new(GameOptions::default(), seed);
    let mut input = InputAdapter::new(game.options().keymap);
    let keymap = input.keymap();

    let _raw = RawMode::enable()?;
    line(&format!(
        "High and Low (seed {seed}). [{}] high, [{}] low, [enter] next, [r] restart, [q] quit",
        keymap.higher, keymap.lower
    ))?;

    loop {
        let view = game.view();
        print_view(&view)?;

        match view.controls {
            Controls::Guess => {
                let keys = input.bind_guess_keys();
                loop {
                    match read_key()? {
                        Key::Quit => return Ok(()),
                        Key::Char('r') => {
                            game.reset(clock_seed());
                            break;
                        }
                        Key::Char(c) => match keys.handle(&mut game, c) {
                            Some(Ok(_)) => break,
                            Some(Err(err)) => line(&format!("Guess error: {err}"))?,
                            None => {}
                        },
                        Key::Enter => {}
                    }
                }
            }
            Controls::Progress { .. } => loop {
                match read_key()? {
                    Key::Quit => return Ok(()),
                    Key::Enter | Key::Char('n' | ' ') => {
                        if let Err(err) = game.advance() {
                            line(&format!("Advance error: {err}"))?;
                        }
                        break;
                    }
                    Key::Char(c) => {
                        if input.direction_for(c).is_some() {
                            log::debug!("ignoring guess key '{c}' outside the guess phase");
                        }
                    }
                }
            },
            Controls::Hidden => {
                line("[r] play again, [q] quit")?;
                loop {
                    match read_key()? {
                        Key::Quit => return Ok(()),
                        Key::Char('r') => {
                            game.reset(clock_seed());
                            break;
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn read_key() -> io::Result<Key> {
    loop {
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Key::Quit),
                KeyCode::Char(c) => return Ok(Key::Char(c.to_ascii_lowercase())),
                KeyCode::Enter => return Ok(Key::Enter),
                _ => {}
            }
        }
    }
}

/// Prints a line in raw mode, where `\n` does not return the cursor.
fn line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    for part in text.split('\n') {
        write!(stdout, "{part}\r\n")?;
    }
    stdout.flush()
}

fn print_view(view: &View) -> io::Result<()> {
    let pending = view
        .pending
        .as_ref()
        .map_or_else(|| colorize("??", "90"), format_card);

    line("")?;
    line(&format!(
        "  {}   {}    deck: {} | win {} lose {}",
        format_card(&view.current),
        pending,
        view.cards_remaining,
        view.wins,
        view.losses
    ))?;
    line(&view.message.to_string())?;

    let labels = view.controls.labels();
    if !labels.is_empty() {
        let buttons = labels
            .iter()
            .map(|label| colorize(&format!("[{label}]"), "32"))
            .collect::<Vec<_>>()
            .join(" ");
        line(&buttons)?;
    }
    Ok(())
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
