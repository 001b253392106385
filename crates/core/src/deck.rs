use crate::{Card, RngState};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck source is empty")]
    EmptySource,
}

#[derive(Debug, Clone)]
pub struct Deck {
    source: Vec<Card>,
    pile: Vec<Card>,
}

#[derive(Debug, Clone)]
pub struct Draw {
    pub card: Card,
    pub reshuffled: Option<usize>,
}

impl Deck {
    pub fn new(source: Vec<Card>) -> Result<Self, DeckError> {
        if source.is_empty() {
            return Err(DeckError::EmptySource);
        }
        Ok(Self {
            source,
            pile: Vec::new(),
        })
    }

    pub fn reset(&mut self, rng: &mut RngState) -> usize {
        self.pile = self.source.clone();
        self.shuffle(rng);
        self.pile.len()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.pile);
    }

    pub fn draw(&mut self, rng: &mut RngState) -> Draw {
        let reshuffled = if self.pile.is_empty() {
            Some(self.reset(rng))
        } else {
            None
        };
        let card = self.pile.pop().expect("pile refilled from non-empty source");
        Draw { card, reshuffled }
    }

    pub fn remaining(&self) -> usize {
        self.pile.len()
    }
}
