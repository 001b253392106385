//! Core autonoma deck logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod catalog;
pub mod deck;
pub mod describe;
pub mod events;
pub mod rng;
pub mod session;

pub use cards::*;
pub use catalog::*;
pub use deck::*;
pub use describe::*;
pub use events::*;
pub use rng::*;
pub use session::*;
