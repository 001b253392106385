use crate::{AutonomaAction, Card, FilterTag, Resource, CRUCIAL_CARDS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardText {
    pub difficulty: u8,
    pub resources: String,
    pub draw_filter: String,
    pub action: String,
}

impl fmt::Display for CardText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Difficulty: {}", self.difficulty)?;
        writeln!(f, "Resources: {}", self.resources)?;
        writeln!(f, "Draw Filter: {}", self.draw_filter)?;
        write!(f, "Action: {}", self.action)
    }
}

impl Card {
    pub fn describe(&self) -> CardText {
        CardText {
            difficulty: self.difficulty,
            resources: resource_text(self.resource),
            draw_filter: filter_text(&self.draw_filter),
            action: action_text(self.action),
        }
    }
}

pub fn resource_text(resource: Resource) -> String {
    match resource {
        Resource::Poverty(value) => format!("Poverty {value}"),
        Resource::Money(value) => format!("Money £{value}"),
    }
}

pub fn action_text(action: Option<AutonomaAction>) -> String {
    match action {
        Some(action) => action.text().to_string(),
        None => "(none)".to_string(),
    }
}

// The crucial-cards expansion is positional: only a leading tag becomes the
// six-name list, the same tag anywhere else keeps its plain label.
pub fn filter_text(filter: &[FilterTag]) -> String {
    match filter.split_first() {
        Some((FilterTag::CrucialCards, rest)) => {
            let mut text = format!("Crucial Cards: {}", CRUCIAL_CARDS.join(", "));
            if !rest.is_empty() {
                text.push_str("; ");
                text.push_str(&join_labels(rest));
            }
            text
        }
        _ => join_labels(filter),
    }
}

fn join_labels(tags: &[FilterTag]) -> String {
    tags.iter()
        .map(|tag| tag.label())
        .collect::<Vec<_>>()
        .join(", ")
}
