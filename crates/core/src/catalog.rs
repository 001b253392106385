use crate::{AutonomaAction, Card, FilterTag, Resource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDefinition {
    pub difficulty: u8,
    #[serde(default)]
    pub poverty: Option<u8>,
    #[serde(default)]
    pub money: Option<u8>,
    pub draw_filter: Vec<FilterTag>,
    #[serde(default)]
    pub action: Option<AutonomaAction>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    #[error("card {0}: poverty and money are mutually exclusive")]
    ConflictingResources(usize),
    #[error("card {0}: missing resource cost")]
    MissingResource(usize),
    #[error("card {0}: difficulty must be at least 1")]
    BadDifficulty(usize),
}

pub fn validate(defs: &[CardDefinition]) -> Result<Vec<Card>, CatalogError> {
    defs.iter()
        .enumerate()
        .map(|(index, def)| {
            if def.difficulty < 1 {
                return Err(CatalogError::BadDifficulty(index));
            }
            let resource = match (def.poverty, def.money) {
                (Some(_), Some(_)) => return Err(CatalogError::ConflictingResources(index)),
                (Some(value), None) => Resource::Poverty(value),
                (None, Some(value)) => Resource::Money(value),
                (None, None) => return Err(CatalogError::MissingResource(index)),
            };
            Ok(Card {
                difficulty: def.difficulty,
                resource,
                draw_filter: def.draw_filter.clone(),
                action: def.action,
            })
        })
        .collect()
}

pub fn autonoma_manifest() -> Vec<CardDefinition> {
    use AutonomaAction::{DiscardCityCard, DrawNext, SkipNext};
    use FilterTag::*;

    let card = |difficulty: u8,
                poverty: Option<u8>,
                money: Option<u8>,
                draw_filter: Vec<FilterTag>,
                action: Option<AutonomaAction>| CardDefinition {
        difficulty,
        poverty,
        money,
        draw_filter,
        action,
    };

    vec![
        card(1, Some(1), None, vec![Borough, Prestige, Poverty, LastCard], None),
        card(1, None, Some(2), vec![Borough, Poverty, Prestige, FirstCard], None),
        card(1, Some(2), None, vec![CityDeck], Some(SkipNext)),
        card(1, None, Some(3), vec![CrucialCards, CityDeck], Some(DiscardCityCard)),
        card(1, None, Some(2), vec![CityDeck], Some(DrawNext)),
        card(
            1,
            Some(2),
            None,
            vec![DevelopmentBoard, Prestige, Coins, FirstCard],
            Some(DiscardCityCard),
        ),
        card(
            1,
            None,
            Some(3),
            vec![DevelopmentBoard, Poverty, Prestige, LastCard],
            Some(DrawNext),
        ),
        card(
            1,
            Some(2),
            None,
            vec![DevelopmentBoard, Prestige, Poverty, CityDeck],
            Some(SkipNext),
        ),
        card(
            1,
            Some(3),
            None,
            vec![DevelopmentBoard, Coins, Prestige, CityDeck],
            Some(DrawNext),
        ),
        card(
            1,
            None,
            Some(2),
            vec![DevelopmentBoard, Prestige, Poverty, CityDeck],
            Some(DiscardCityCard),
        ),
        card(2, None, Some(3), vec![Borough, Prestige, Poverty, LastCard], None),
        card(2, Some(3), None, vec![Borough, Prestige, Poverty, FirstCard], None),
        card(
            2,
            Some(2),
            None,
            vec![CrucialCards, DevelopmentBoard, Prestige, Coins, CityDeck],
            Some(DrawNext),
        ),
        card(
            2,
            None,
            Some(3),
            vec![CrucialCards, DevelopmentBoard, Poverty, Prestige, CityDeck],
            Some(DrawNext),
        ),
        card(
            2,
            None,
            Some(3),
            vec![CrucialCards, DevelopmentBoard, Prestige, Coins, LastCard],
            Some(SkipNext),
        ),
        card(3, None, Some(5), vec![Borough, Prestige, Poverty, FirstCard], None),
        card(3, None, Some(5), vec![Borough, Poverty, Prestige, LastCard], None),
        card(
            3,
            None,
            Some(5),
            vec![CrucialCards, DevelopmentBoard, Coins, Prestige, CityDeck],
            Some(DrawNext),
        ),
        card(3, Some(2), None, vec![CrucialCards, CityDeck], Some(DrawNext)),
        card(3, Some(3), None, vec![CrucialCards, CityDeck], Some(DiscardCityCard)),
    ]
}
