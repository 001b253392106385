use crate::{catalog, Card, CardDefinition, CatalogError, Deck, Event, EventBus, RngState};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no cards at difficulty {0}")]
    NoCardsAtDifficulty(u8),
    #[error("no active session")]
    NotStarted,
}

#[derive(Debug, Clone)]
pub struct Session {
    difficulty: u8,
    deck: Deck,
}

impl Session {
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn draw(&mut self, rng: &mut RngState, events: &mut EventBus) -> Card {
        let draw = self.deck.draw(rng);
        if let Some(cards) = draw.reshuffled {
            events.push(Event::DeckReshuffled { cards });
        }
        events.push(Event::CardDrawn {
            card: draw.card.clone(),
            remaining: self.deck.remaining(),
        });
        draw.card
    }
}

#[derive(Debug)]
pub struct Game {
    catalog: Vec<Card>,
    rng: RngState,
    session: Option<Session>,
}

impl Game {
    pub fn new(defs: &[CardDefinition], rng: RngState) -> Result<Self, CatalogError> {
        let catalog = catalog::validate(defs)?;
        Ok(Self {
            catalog,
            rng,
            session: None,
        })
    }

    pub fn catalog(&self) -> &[Card] {
        &self.catalog
    }

    pub fn max_difficulty(&self) -> u8 {
        self.catalog
            .iter()
            .map(|card| card.difficulty)
            .max()
            .unwrap_or(1)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    // Starting a session replaces any previous one; a failed start leaves
    // the previous session untouched.
    pub fn start(
        &mut self,
        difficulty: u8,
        events: &mut EventBus,
    ) -> Result<Card, SessionError> {
        let picked: Vec<Card> = self
            .catalog
            .iter()
            .filter(|card| card.difficulty <= difficulty)
            .cloned()
            .collect();
        let mut deck =
            Deck::new(picked).map_err(|_| SessionError::NoCardsAtDifficulty(difficulty))?;
        let cards = deck.reset(&mut self.rng);
        events.push(Event::DeckReshuffled { cards });
        events.push(Event::SessionStarted { difficulty, cards });
        self.session = Some(Session { difficulty, deck });
        self.draw(events)
    }

    pub fn draw(&mut self, events: &mut EventBus) -> Result<Card, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        Ok(session.draw(&mut self.rng, events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autonoma_manifest;

    fn game(seed: u64) -> Game {
        Game::new(&autonoma_manifest(), RngState::from_seed(seed)).unwrap()
    }

    #[test]
    fn draw_without_session_is_reported() {
        let mut game = game(1);
        let mut events = EventBus::default();
        assert_eq!(game.draw(&mut events), Err(SessionError::NotStarted));
        assert_eq!(events.drain().count(), 0);
    }

    #[test]
    fn start_rejects_unreachable_difficulty() {
        let mut game = game(1);
        let mut events = EventBus::default();
        assert_eq!(
            game.start(0, &mut events),
            Err(SessionError::NoCardsAtDifficulty(0))
        );
        assert!(game.session().is_none());
    }

    #[test]
    fn failed_start_keeps_previous_session() {
        let mut game = game(1);
        let mut events = EventBus::default();
        game.start(2, &mut events).unwrap();
        assert_eq!(game.start(0, &mut events), Err(SessionError::NoCardsAtDifficulty(0)));
        let session = game.session().unwrap();
        assert_eq!(session.difficulty(), 2);
        assert_eq!(session.remaining(), 14);
    }

    #[test]
    fn start_emits_reshuffle_start_and_draw() {
        let mut game = game(2);
        let mut events = EventBus::default();
        let card = game.start(1, &mut events).unwrap();

        let emitted: Vec<Event> = events.drain().collect();
        assert_eq!(emitted.len(), 3);
        assert_eq!(emitted[0], Event::DeckReshuffled { cards: 10 });
        assert_eq!(
            emitted[1],
            Event::SessionStarted {
                difficulty: 1,
                cards: 10
            }
        );
        assert_eq!(
            emitted[2],
            Event::CardDrawn {
                card,
                remaining: 9
            }
        );
    }

    #[test]
    fn start_filters_by_difficulty_ceiling() {
        for (difficulty, expected) in [(1u8, 10usize), (2, 15), (3, 20)] {
            let mut game = game(3);
            let mut events = EventBus::default();
            game.start(difficulty, &mut events).unwrap();
            // One card is already drawn at start.
            assert_eq!(game.session().unwrap().remaining(), expected - 1);
        }
    }

    #[test]
    fn restart_replaces_session() {
        let mut game = game(4);
        let mut events = EventBus::default();
        game.start(3, &mut events).unwrap();
        game.draw(&mut events).unwrap();
        game.start(1, &mut events).unwrap();
        let session = game.session().unwrap();
        assert_eq!(session.difficulty(), 1);
        assert_eq!(session.remaining(), 9);
    }

    #[test]
    fn exhausting_the_pile_reshuffles_inside_draw() {
        let mut game = game(5);
        let mut events = EventBus::default();
        game.start(1, &mut events).unwrap();
        events.drain().count();

        for _ in 0..9 {
            game.draw(&mut events).unwrap();
        }
        let reshuffles = events
            .drain()
            .filter(|e| matches!(e, Event::DeckReshuffled { .. }))
            .count();
        assert_eq!(reshuffles, 0);

        // Pile is now empty; the next draw refills from the full filtered set.
        game.draw(&mut events).unwrap();
        let emitted: Vec<Event> = events.drain().collect();
        assert_eq!(emitted[0], Event::DeckReshuffled { cards: 10 });
        assert!(matches!(emitted[1], Event::CardDrawn { remaining: 9, .. }));
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let mut game_a = game(6);
        let mut game_b = game(6);
        let mut events = EventBus::default();
        let first_a = game_a.start(3, &mut events).unwrap();
        let first_b = game_b.start(3, &mut events).unwrap();
        assert_eq!(first_a, first_b);
        for _ in 0..40 {
            assert_eq!(
                game_a.draw(&mut events).unwrap(),
                game_b.draw(&mut events).unwrap()
            );
        }
    }
}
