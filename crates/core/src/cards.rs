use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FilterTag {
    Borough,
    Prestige,
    Poverty,
    LastCard,
    FirstCard,
    CityDeck,
    DevelopmentBoard,
    Coins,
    CrucialCards,
}

impl FilterTag {
    pub fn label(self) -> &'static str {
        match self {
            Self::Borough => "Borough",
            Self::Prestige => "Prestige",
            Self::Poverty => "Poverty",
            Self::LastCard => "Last Card",
            Self::FirstCard => "First Card",
            Self::CityDeck => "City Deck",
            Self::DevelopmentBoard => "Development Board",
            Self::Coins => "Coins",
            Self::CrucialCards => "Crucial Cards",
        }
    }
}

pub const CRUCIAL_CARDS: [&str; 6] = [
    "Underground",
    "Train Station North/South",
    "Omnibus",
    "Milton/Brixton Prison",
    "Whitehall",
    "Hospital",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutonomaAction {
    SkipNext,
    DrawNext,
    DiscardCityCard,
}

impl AutonomaAction {
    pub fn text(self) -> &'static str {
        match self {
            Self::SkipNext => "Skip the next autonoma card.",
            Self::DrawNext => "Draw another autonoma card.",
            Self::DiscardCityCard => "Discard a card from the city deck.",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Resource {
    Poverty(u8),
    Money(u8),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub difficulty: u8,
    pub resource: Resource,
    pub draw_filter: Vec<FilterTag>,
    pub action: Option<AutonomaAction>,
}
