use std::io::Cursor;

use headsup_cli::logging::init_test_logging;
use tracing::Level;

#[test]
fn play_emits_engine_events() {
    let logs = init_test_logging();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(b"fold\nq\n".to_vec());
    let code = headsup_cli::run_with_input(
        ["headsup", "play", "--seed", "3"],
        &mut input,
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);

    let entries = logs.entries();
    let start = entries
        .iter()
        .find(|e| e.message == "starting match")
        .expect("match start is logged");
    assert_eq!(start.level, Level::INFO);
    assert_eq!(start.field("stack"), Some("100"));
    assert!(start.target.starts_with("headsup_engine"));

    assert!(entries.iter().any(|e| e.message == "hand won uncontested"));
    assert!(entries.iter().any(|e| e.target.starts_with("headsup_ai")));
}
