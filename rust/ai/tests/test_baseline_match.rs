use headsup_ai::baseline::BaselineAI;
use headsup_ai::strength::CandidatePool;
use headsup_engine::engine::{Engine, StepOutcome, TableConfig};
use headsup_engine::game::GameState;
use headsup_engine::player::Action;

fn passive(state: &GameState) -> Action {
    if state.opp_bet > state.bet {
        Action::Call
    } else {
        Action::Check
    }
}

/// Plays a match in which the human only checks and calls. Every bot action
/// must pass validation, so any error here is a policy bug.
fn play(seed: u64, pool: CandidatePool) -> Option<StepOutcome> {
    let bot = BaselineAI::seeded(seed).with_pool(pool);
    let mut engine = Engine::new(TableConfig::default(), Some(seed), bot);
    let mut step = engine.start_match().expect("first hand");
    for _ in 0..200 {
        assert_eq!(step.state.total_chips(), 200);
        step = match step.outcome {
            StepOutcome::MatchOver(_) => return Some(step.outcome),
            StepOutcome::Showdown(_) => engine.next_hand(&step.state).expect("next hand"),
            StepOutcome::AwaitingAction => engine
                .act(&step.state, passive(&step.state))
                .expect("bot actions are always legal"),
        };
    }
    None
}

#[test]
fn baseline_bot_only_makes_legal_moves() {
    for seed in [1, 2] {
        play(seed, CandidatePool::ExcludeBoard);
    }
    play(3, CandidatePool::Baseline);
}

#[test]
fn seeded_matches_replay_identically() {
    let run = |seed| {
        let bot = BaselineAI::seeded(seed);
        let mut engine = Engine::new(TableConfig::default(), Some(seed), bot);
        let mut step = engine.start_match().unwrap();
        let mut log = step.log.clone();
        for _ in 0..30 {
            step = match step.outcome {
                StepOutcome::MatchOver(_) => break,
                StepOutcome::Showdown(_) => engine.next_hand(&step.state).unwrap(),
                StepOutcome::AwaitingAction => engine.act(&step.state, passive(&step.state)).unwrap(),
            };
            log.extend(step.log.iter().cloned());
        }
        log
    };
    assert_eq!(run(8), run(8));
}
