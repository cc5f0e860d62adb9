//! Cards, themes and dealing.
//!
//! - `Card`: a single card with its face value and flags
//! - `Theme`: where face values come from
//! - `deal`: pairs symbols up and shuffles them into a board

mod card;
mod deck;
mod theme;

pub use card::{Card, CardId};
pub use deck::deal;
pub use theme::Theme;
