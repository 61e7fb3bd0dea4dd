//! Combat resolution system.
//!
//! This module turns the frame's attack boxes into hit outcomes and feeds
//! them back into character state. Resolution is deterministic and side-effect
//! free; only [`apply_outcome`] mutates.
//!
//! # Core Functions
//!
//! - `guards_against`: Guard stance vs attack height matching
//! - `CollisionResolver::resolve`: Overlap tests and outcome computation
//! - `apply_outcome`: Health, energy, velocity and hit-registry updates

pub mod apply;
pub mod guard;
pub mod outcome;
pub mod resolver;

pub use apply::apply_outcome;
pub use guard::guards_against;
pub use outcome::{Impulse, ResolvedHitOutcome};
pub use resolver::{CollisionResolver, HitOutcomes};
