//! Per-photo emoji reactions.
//!
//! - [`ReactionSymbol`]: the six accepted emoji
//! - [`ReactionCache`]: last-known counts per photo
//! - [`ReactionCoordinator`]: submit, then update cache and notify
//! - [`TransientVisualState`]: the click highlight and its expiry timer

mod aggregate;
mod animation;
mod cache;
mod coordinator;
mod error;
mod symbol;

pub use aggregate::ReactionAggregate;
pub use animation::{TransientVisualState, DEFAULT_LINGER};
pub use cache::{CacheEntry, ReactionCache};
pub use coordinator::ReactionCoordinator;
pub use error::ReactionError;
pub use symbol::{ReactionSymbol, UnknownSymbol};
