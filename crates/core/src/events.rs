use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    SessionStarted { difficulty: u8, cards: usize },
    DeckReshuffled { cards: usize },
    CardDrawn { card: Card, remaining: usize },
}

impl Event {
    pub fn status_text(&self) -> String {
        match self {
            Self::SessionStarted { difficulty, cards } => {
                format!("Game started at difficulty {difficulty} ({cards} cards).")
            }
            Self::DeckReshuffled { cards } => format!("Deck reshuffled ({cards} cards)"),
            Self::CardDrawn { remaining, .. } => format!("Cards remaining: {remaining}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
