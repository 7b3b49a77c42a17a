//! Baseline bot policy.
//!
//! Strength thresholds pick an [`Intent`]; the intent is then resolved into a
//! concrete action for the current bets. Every random branch draws from the
//! injected RNG, so a seeded bot replays exactly.

use headsup_engine::game::GameState;
use headsup_engine::opponent::Opponent;
use headsup_engine::player::Action;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::strength::{estimate_strength, CandidatePool};

/// At or above this the bot always raises unless it is covered
pub const RAISE_THRESHOLD: f64 = 0.9;
/// Mixes check/call and raise
pub const STRONG_THRESHOLD: f64 = 0.7;
/// Mixes check/call and check/fold; below it the bot bluffs one time in five
pub const MEDIUM_THRESHOLD: f64 = 0.4;

/// What the bot wants to do before the bets are taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Call a bet, otherwise check
    CheckCall,
    Raise,
    /// Fold to a bet, otherwise check
    CheckFold,
}

/// The human is all-in, or their bet already covers the bot's whole stack;
/// raising is pointless then.
pub fn covered(state: &GameState) -> bool {
    state.chips == 0 || state.bet >= state.opp_chips + state.opp_bet
}

/// Maps a strength estimate to an intent.
pub fn choose_intent<R: Rng>(strength: f64, state: &GameState, rng: &mut R) -> Intent {
    if strength >= RAISE_THRESHOLD {
        if covered(state) {
            Intent::CheckCall
        } else {
            Intent::Raise
        }
    } else if strength >= STRONG_THRESHOLD {
        let coin = rng.random_range(0..2);
        if coin == 0 || covered(state) {
            Intent::CheckCall
        } else {
            Intent::Raise
        }
    } else if strength >= MEDIUM_THRESHOLD {
        if rng.random_range(0..2) == 0 {
            Intent::CheckCall
        } else {
            Intent::CheckFold
        }
    } else {
        let bluff = rng.random_range(0..5) == 0;
        if bluff && !covered(state) {
            Intent::Raise
        } else {
            Intent::CheckFold
        }
    }
}

/// Raise total for the bot: double the human's bet, or half the pot when
/// opening. Never more than the human can call, nor more than the bot has.
pub fn raise_size(state: &GameState) -> u32 {
    let size = if state.bet > 0 {
        state.bet * 2
    } else {
        // half-pot rounds ties to even
        (f64::from(state.pot) * 0.5).round_ties_even() as u32
    };
    size.min(state.chips + state.bet)
        .min(state.opp_chips + state.opp_bet)
}

pub fn resolve(intent: Intent, state: &GameState) -> Action {
    let facing = state.bet > state.opp_bet;
    match intent {
        Intent::Raise => Action::RaiseTo(raise_size(state)),
        Intent::CheckCall if facing => Action::Call,
        Intent::CheckFold if facing => Action::Fold,
        Intent::CheckCall | Intent::CheckFold => Action::Check,
    }
}

/// The default bot: enumerated hand strength plus the threshold policy.
///
/// # Example
///
/// ```rust
/// use headsup_ai::baseline::BaselineAI;
/// use headsup_engine::opponent::Opponent;
///
/// let ai = BaselineAI::seeded(42);
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI<R: Rng = ChaCha20Rng> {
    rng: R,
    pool: CandidatePool,
}

impl BaselineAI<ChaCha20Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BaselineAI<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            pool: CandidatePool::default(),
        }
    }

    pub fn with_pool(mut self, pool: CandidatePool) -> Self {
        self.pool = pool;
        self
    }

    pub fn pool(&self) -> CandidatePool {
        self.pool
    }
}

impl<R: Rng + Send> Opponent for BaselineAI<R> {
    fn decide(&mut self, state: &GameState) -> Action {
        let strength = estimate_strength(&state.opp_hand, &state.board, self.pool);
        let intent = choose_intent(strength, state, &mut self.rng);
        let action = resolve(intent, state);
        debug!(strength, ?intent, ?action, street = ?state.street, "bot decision");
        action
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
