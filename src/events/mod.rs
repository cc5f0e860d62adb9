//! Event notifications for presentation code.
//!
//! The engine never renders anything. Instead it emits a [`GameEvent`] for
//! every state transition, and front ends subscribe to the kinds they care
//! about.
//!
//! ## Key Components
//!
//! - [`EventKind`]: The five kinds of event
//! - [`GameEvent`]: Tagged union of event payloads
//! - [`EventBus`]: Per-kind handler lists with synchronous fan-out
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use memory_match::cards::Theme;
//! use memory_match::core::GameConfig;
//! use memory_match::events::{EventKind, GameEvent};
//! use memory_match::games::memory::MemoryGame;
//!
//! let mut game = MemoryGame::new(GameConfig::new(2, 1, Theme::Numbers)).unwrap();
//!
//! let flips = Rc::new(RefCell::new(Vec::new()));
//! let log = Rc::clone(&flips);
//! game.add_event_listener(EventKind::CardFlipped, move |event, _state| {
//!     if let GameEvent::CardFlipped(flip) = event {
//!         log.borrow_mut().push(flip.card_id);
//!     }
//! });
//!
//! let first = game.state_ref().cards()[0].id();
//! game.flip_card(first);
//! assert_eq!(*flips.borrow(), vec![first]);
//! ```

mod bus;
mod event;

pub use bus::{EventBus, Handler, ListenerId};
pub use event::{CardFlipped, EventKind, GameEvent, MatchFound, NoMatch, PlayerSwitch};
