use headsup_cli::exit_code;
use std::io::Cursor;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(Vec::new());
    let code = headsup_cli::run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_lists_every_command() {
    let (code, out, _) = run(&["headsup", "--help"]);
    assert_eq!(code, exit_code::SUCCESS);
    for cmd in ["play", "eval", "strength", "deal", "cfg"] {
        assert!(out.contains(cmd), "help should mention {}", cmd);
    }
}

#[test]
fn unknown_command_prints_usage_to_stderr() {
    let (code, out, err) = run(&["headsup", "bluff"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(out.is_empty());
    assert!(err.contains("Usage: headsup <command> [options]"));
    assert!(err.contains("  strength"));
}

#[test]
fn eval_reports_the_winner() {
    let (code, out, _) = run(&[
        "headsup", "eval", "KhKd", "Ah7c", "--board", "Kc Ad 7s 2h 3c",
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("three of a kind, Ks"), "{}", out);
    assert!(out.contains("two pair, A and 7 (kicker K)"), "{}", out);
    assert!(out.contains("Result: Hand A wins"));
}

#[test]
fn eval_rejects_malformed_cards() {
    let (code, _, err) = run(&["headsup", "eval", "Kx9d", "Ah7c", "--board", "Kc Ad 7s 2h 3c"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("Malformed card 'Kx'"), "{}", err);
}

#[test]
fn strength_of_a_board_straight() {
    let (code, out, _) = run(&[
        "headsup", "strength", "2c3d", "--board", "AhKhQsJcTd", "--pool", "exclude-board",
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Strength: 0.5000 against 990 candidate hands"), "{}", out);
    assert!(out.contains("Bot: calls or folds on a coin flip"));
}

#[test]
fn strength_pool_flag_changes_the_candidates() {
    let (_, out, _) = run(&[
        "headsup", "strength", "2c3d", "--board", "AhKhQsJcTd", "--pool", "baseline",
    ]);
    assert!(out.contains("against 1225 candidate hands"), "{}", out);
}

#[test]
fn deal_is_deterministic_per_seed() {
    let (code, first, _) = run(&["headsup", "deal", "--seed", "99"]);
    let (_, second, _) = run(&["headsup", "deal", "--seed", "99"]);
    let (_, other, _) = run(&["headsup", "deal", "--seed", "100"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(first.lines().count(), 4);
}
