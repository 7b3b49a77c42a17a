//! # headsup-ai: The Bot
//!
//! Hand-strength estimation by enumeration and the baseline betting policy
//! built on it. The bot plugs into the engine through
//! [`headsup_engine::opponent::Opponent`].
//!
//! ## Core Components
//!
//! - [`strength`] - Win probability of a known hand against every candidate hand
//! - [`baseline`] - Threshold policy with seeded randomness
//! - [`create_ai`] - Factory for opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_ai::create_ai;
//! use headsup_ai::strength::CandidatePool;
//! use headsup_engine::engine::{Engine, TableConfig};
//!
//! let ai = create_ai("baseline", Some(42), CandidatePool::ExcludeBoard).expect("known opponent");
//! let mut engine = Engine::new(TableConfig::default(), Some(42), ai);
//! let step = engine.start_match().expect("deal");
//! assert_eq!(step.state.total_chips(), 200);
//! ```

use headsup_engine::opponent::Opponent;

pub mod baseline;
pub mod strength;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["baseline"];

/// Builds an opponent by type name; `None` for an unknown name.
///
/// ```rust
/// use headsup_ai::create_ai;
/// use headsup_ai::strength::CandidatePool;
///
/// let pool = CandidatePool::default();
/// assert_eq!(create_ai("baseline", None, pool).unwrap().name(), "BaselineAI");
/// assert!(create_ai("shark", None, pool).is_none());
/// ```
pub fn create_ai(
    ai_type: &str,
    seed: Option<u64>,
    pool: strength::CandidatePool,
) -> Option<Box<dyn Opponent>> {
    match ai_type {
        "baseline" => {
            let seed = seed.unwrap_or_else(rand::random);
            Some(Box::new(baseline::BaselineAI::seeded(seed).with_pool(pool)))
        }
        _ => None,
    }
}
