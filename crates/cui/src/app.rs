use crate::input::{map_key, InputAction};
use anyhow::{Context, Result};
use autonoma_core::{autonoma_manifest, CardText, EventBus, Game, RngState};
use crossterm::event::KeyEvent;
use std::collections::VecDeque;

const MAX_EVENT_LOG: usize = 100;
const SETUP_HINT: &str = "Pick a difficulty and press Enter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Play,
}

pub struct App {
    pub seed: u64,
    pub game: Game,
    pub events: EventBus,
    pub screen: Screen,
    pub difficulty_choice: u8,
    pub card: Option<CardText>,
    pub status_line: String,
    pub event_log: VecDeque<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let seed = rng.seed();
        let game = Game::new(&autonoma_manifest(), rng).context("validate card catalog")?;
        Ok(Self {
            seed,
            game,
            events: EventBus::default(),
            screen: Screen::Setup,
            difficulty_choice: 1,
            card: None,
            status_line: SETUP_HINT.to_string(),
            event_log: VecDeque::new(),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.apply(map_key(key));
    }

    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::None => {}
            InputAction::Quit => self.should_quit = true,
            InputAction::ToggleHelp => self.show_help = !self.show_help,
            InputAction::MoveUp => self.adjust_difficulty(1),
            InputAction::MoveDown => self.adjust_difficulty(-1),
            InputAction::Activate => self.start_session(),
            InputAction::Draw => self.draw(),
            InputAction::NewSession => self.to_setup(),
        }
    }

    pub fn difficulty_count(&self, difficulty: u8) -> usize {
        self.game
            .catalog()
            .iter()
            .filter(|card| card.difficulty <= difficulty)
            .count()
    }

    fn adjust_difficulty(&mut self, delta: i8) {
        if self.screen != Screen::Setup {
            return;
        }
        let max = self.game.max_difficulty();
        let next = self.difficulty_choice.saturating_add_signed(delta);
        self.difficulty_choice = next.clamp(1, max);
    }

    fn start_session(&mut self) {
        if self.screen != Screen::Setup {
            return;
        }
        match self.game.start(self.difficulty_choice, &mut self.events) {
            Ok(card) => {
                self.card = Some(card.describe());
                self.screen = Screen::Play;
            }
            Err(err) => self.status_line = format!("error: {err}"),
        }
        self.drain_events();
    }

    fn draw(&mut self) {
        if self.screen != Screen::Play {
            return;
        }
        match self.game.draw(&mut self.events) {
            Ok(card) => self.card = Some(card.describe()),
            Err(err) => self.status_line = format!("error: {err}"),
        }
        self.drain_events();
    }

    fn to_setup(&mut self) {
        self.screen = Screen::Setup;
        self.card = None;
        self.status_line = SETUP_HINT.to_string();
    }

    fn drain_events(&mut self) {
        for event in self.events.drain() {
            let line = event.status_text();
            self.status_line = line.clone();
            self.event_log.push_front(line);
        }
        self.event_log.truncate(MAX_EVENT_LOG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::bootstrap(Some(9)).unwrap()
    }

    #[test]
    fn bootstrap_starts_on_setup_screen() {
        let app = app();
        assert_eq!(app.screen, Screen::Setup);
        assert_eq!(app.seed, 9);
        assert_eq!(app.difficulty_choice, 1);
        assert!(app.card.is_none());
    }

    #[test]
    fn difficulty_choice_clamps_to_catalog_range() {
        let mut app = app();
        app.apply(InputAction::MoveDown);
        assert_eq!(app.difficulty_choice, 1);
        for _ in 0..5 {
            app.apply(InputAction::MoveUp);
        }
        assert_eq!(app.difficulty_choice, 3);
    }

    #[test]
    fn activate_starts_play_with_a_card_showing() {
        let mut app = app();
        app.apply(InputAction::MoveUp);
        app.apply(InputAction::Activate);
        assert_eq!(app.screen, Screen::Play);
        assert!(app.card.is_some());
        assert_eq!(app.status_line, "Cards remaining: 14");
        assert!(app
            .event_log
            .iter()
            .any(|line| line == "Game started at difficulty 2 (15 cards)."));
    }

    #[test]
    fn draw_updates_card_and_status() {
        let mut app = app();
        app.apply(InputAction::Activate);
        app.apply(InputAction::Draw);
        assert_eq!(app.status_line, "Cards remaining: 8");
    }

    #[test]
    fn new_session_returns_to_setup() {
        let mut app = app();
        app.apply(InputAction::Activate);
        app.apply(InputAction::NewSession);
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.card.is_none());
    }

    #[test]
    fn draw_on_setup_screen_is_ignored() {
        let mut app = app();
        app.apply(InputAction::Draw);
        assert_eq!(app.status_line, SETUP_HINT);
        assert!(app.card.is_none());
    }

    #[test]
    fn difficulty_counts_match_manifest() {
        let app = app();
        assert_eq!(app.difficulty_count(1), 10);
        assert_eq!(app.difficulty_count(2), 15);
        assert_eq!(app.difficulty_count(3), 20);
    }
}
