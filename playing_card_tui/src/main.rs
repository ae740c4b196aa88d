mod config;
mod terminal;

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use config::CardConfig;
use playing_card::{
    display_if_needed, layout_if_needed, set_bounds, set_trait_collection, CardView,
    RecordingCanvas, TraitCollection, View,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};
use terminal::{bounds_in_points, card_area, CardWidget, TerminalMeasurer};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const SUITS: [&str; 4] = ["♠", "♥️", "♦️", "♣"];

const HELP: &str =
    "space flip · ←/→ rank · s suit · r random · +/- text size · 0 unknown rank · q quit";

#[derive(Parser)]
struct Args {
    /// Path to a JSON file describing the card shown at startup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for random cards
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Write logs to this file. The terminal is taken by the card, so without
    /// a file nothing is logged.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        initialize_logging(args.log_level, log_file)?;
    }

    let config = match &args.config {
        Some(path) => CardConfig::load(path)?,
        None => CardConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, ?config, "Starting");

    let mut app = App::new(&config, StdRng::seed_from_u64(seed));

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<impl Backend>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.ui(frame))?;
        match read_action()? {
            Some(Action::Quit) => break Ok(()),
            Some(action) => app.handle(action),
            None => {}
        }
    }
}

fn initialize_logging(level: LevelFilter, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create log file '{}'", path.display()))?;

    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .with_ansi(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Quit,
    Flip,
    NextRank,
    PreviousRank,
    NextSuit,
    RandomCard,
    UnknownRank,
    LargerText,
    SmallerText,
}

fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Char('f') => Some(Action::Flip),
        KeyCode::Right | KeyCode::Char('n') => Some(Action::NextRank),
        KeyCode::Left | KeyCode::Char('p') => Some(Action::PreviousRank),
        KeyCode::Char('s') => Some(Action::NextSuit),
        KeyCode::Char('r') => Some(Action::RandomCard),
        KeyCode::Char('0') => Some(Action::UnknownRank),
        KeyCode::Char('+') => Some(Action::LargerText),
        KeyCode::Char('-') => Some(Action::SmallerText),
        _ => None,
    }
}

fn read_action() -> io::Result<Option<Action>> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                return Ok(action_for_key(key.code));
            }
        }
    }
    Ok(None)
}

/// The next rank in `1..=13`, wrapping around. Unknown ranks continue at the ace.
fn next_rank(rank: i32) -> i32 {
    if (1..13).contains(&rank) {
        rank + 1
    } else {
        1
    }
}

/// The previous rank in `1..=13`, wrapping around. Unknown ranks continue at the king.
fn previous_rank(rank: i32) -> i32 {
    if (2..=13).contains(&rank) {
        rank - 1
    } else {
        13
    }
}

fn next_suit(suit: &str) -> &'static str {
    let idx = SUITS.iter().position(|&s| s == suit).map_or(0, |i| i + 1);
    SUITS[idx % SUITS.len()]
}

/// The host of the card view.
struct App {
    card: CardView<TerminalMeasurer>,
    /// What the card drew in its last display pass.
    backing: RecordingCanvas,
    rng: StdRng,
}

impl App {
    fn new(config: &CardConfig, rng: StdRng) -> Self {
        let mut card = CardView::with_measurer(playing_card::Rect::ZERO, TerminalMeasurer);
        config.apply(&mut card);
        Self {
            card,
            backing: RecordingCanvas::new(),
            rng,
        }
    }

    fn handle(&mut self, action: Action) {
        debug!(?action);
        match action {
            Action::Quit => {}
            Action::Flip => self.card.set_face_up(!self.card.is_face_up()),
            Action::NextRank => self.card.set_rank(next_rank(self.card.rank())),
            Action::PreviousRank => self.card.set_rank(previous_rank(self.card.rank())),
            Action::NextSuit => self.card.set_suit(next_suit(self.card.suit())),
            Action::RandomCard => {
                let rank = self.rng.gen_range(1..=13);
                let suit = SUITS.choose(&mut self.rng).copied().unwrap_or(SUITS[0]);
                self.card.set_rank(rank);
                self.card.set_suit(suit);
            }
            Action::UnknownRank => self.card.set_rank(0),
            Action::LargerText | Action::SmallerText => {
                let current = self.card.view_state().trait_collection();
                let content_size = if action == Action::LargerText {
                    current.preferred_content_size.larger()
                } else {
                    current.preferred_content_size.smaller()
                };
                set_trait_collection(
                    &mut self.card,
                    TraitCollection {
                        preferred_content_size: content_size,
                    },
                );
            }
        }
    }

    fn ui(&mut self, frame: &mut Frame) {
        let main_layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(frame.size());

        let area = card_area(main_layout[0]);
        set_bounds(&mut self.card, bounds_in_points(area));
        layout_if_needed(&mut self.card);
        if display_if_needed(&mut self.card, &mut self.backing) {
            debug!(commands = self.backing.commands().len(), "Card redrawn");
        }

        frame.render_widget(
            CardWidget {
                card: &self.card,
                backing: &self.backing,
            },
            area,
        );
        frame.render_widget(
            Paragraph::new(HELP).alignment(Alignment::Center),
            main_layout[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&CardConfig::default(), StdRng::seed_from_u64(0))
    }

    #[test]
    fn ranks_wrap_around() {
        assert_eq!(next_rank(1), 2);
        assert_eq!(next_rank(13), 1);
        assert_eq!(next_rank(0), 1);
        assert_eq!(previous_rank(1), 13);
        assert_eq!(previous_rank(13), 12);
        assert_eq!(previous_rank(42), 13);
    }

    #[test]
    fn suits_cycle() {
        assert_eq!(next_suit("♠"), "♥️");
        assert_eq!(next_suit("♣"), "♠");
        assert_eq!(next_suit("★"), "♠");
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(action_for_key(KeyCode::Char(' ')), Some(Action::Flip));
        assert_eq!(action_for_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Right), Some(Action::NextRank));
        assert_eq!(action_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn actions_update_the_card() {
        let mut app = app();
        app.handle(Action::Flip);
        assert!(!app.card.is_face_up());
        app.handle(Action::NextRank);
        assert_eq!(app.card.rank(), 6);
        app.handle(Action::UnknownRank);
        assert_eq!(app.card.rank(), 0);
        app.handle(Action::RandomCard);
        assert!((1..=13).contains(&app.card.rank()));
        assert!(SUITS.contains(&app.card.suit()));
    }

    #[test]
    fn text_size_keys_change_traits() {
        let mut app = app();
        app.handle(Action::LargerText);
        assert_eq!(
            app.card.view_state().trait_collection().preferred_content_size,
            playing_card::ContentSize::ExtraLarge
        );
        assert_eq!(app.card.view_state().trait_changes(), 1);
        app.handle(Action::SmallerText);
        app.handle(Action::SmallerText);
        assert_eq!(
            app.card.view_state().trait_collection().preferred_content_size,
            playing_card::ContentSize::Medium
        );
    }
}
