//! Relic value types.
//!
//! This module contains the immutable building blocks of the model:
//!
//! - [`Rarity`]: the closed five-tier set with fixed point weights
//! - [`Relic`]: a named, rarity-tagged entity with a validated name
//! - [`OwnerId`]: the opaque identity attached to a claimed relic

mod item;
mod owner;
mod rarity;

pub use item::{is_valid_name, Relic};
pub use owner::OwnerId;
pub use rarity::Rarity;
