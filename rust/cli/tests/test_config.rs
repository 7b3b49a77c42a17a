use std::io::Write;

use headsup_cli::config::{self, ConfigError, ValueSource};
use serial_test::serial;

const VARS: &[&str] = &[
    config::CONFIG_ENV,
    config::SEED_ENV,
    config::STACK_ENV,
    config::NAME_ENV,
    config::EXCLUDE_BOARD_ENV,
];

fn clear_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

fn set(var: &str, value: &str) {
    unsafe { std::env::set_var(var, value) };
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn defaults_without_env() {
    clear_env();
    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config, config::Config::default());
    assert_eq!(resolved.sources.starting_stack, ValueSource::Default);
    assert_eq!(resolved.sources.exclude_board, ValueSource::Default);
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = config_file("starting_stack = 300\nseed = 5\nplayer_name = \"Ann\"\n");
    set(config::CONFIG_ENV, file.path().to_str().unwrap());
    set(config::SEED_ENV, "77");

    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.starting_stack, 300);
    assert_eq!(resolved.sources.starting_stack, ValueSource::File);
    assert_eq!(resolved.config.seed, Some(77));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    assert_eq!(resolved.config.player_name, "Ann");
    assert_eq!(resolved.sources.player_name, ValueSource::File);
    clear_env();
}

#[test]
#[serial]
fn invalid_env_values_are_reported() {
    clear_env();
    set(config::EXCLUDE_BOARD_ENV, "sometimes");
    assert!(matches!(
        config::load_with_sources(),
        Err(ConfigError::Invalid(_))
    ));
    clear_env();
    set(config::STACK_ENV, "1");
    assert!(matches!(config::load(), Err(ConfigError::Invalid(_))));
    clear_env();
}

#[test]
#[serial]
fn broken_file_is_a_parse_error() {
    clear_env();
    let file = config_file("starting_stack = \"lots\"\n");
    set(config::CONFIG_ENV, file.path().to_str().unwrap());
    assert!(matches!(config::load(), Err(ConfigError::Parse(_))));
    clear_env();
}

#[test]
#[serial]
fn cfg_command_prints_sources_as_json() {
    clear_env();
    set(config::NAME_ENV, "Bea");
    set(config::EXCLUDE_BOARD_ENV, "off");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = headsup_cli::run(["headsup", "cfg"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["player_name"]["value"], "Bea");
    assert_eq!(json["player_name"]["source"], "env");
    assert_eq!(json["exclude_board"]["value"], false);
    assert_eq!(json["starting_stack"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn cfg_command_fails_on_bad_config() {
    clear_env();
    set(config::SEED_ENV, "abc");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = headsup_cli::run(["headsup", "cfg"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("Invalid seed 'abc'"));
}

#[test]
#[serial]
fn strength_falls_back_to_the_configured_pool() {
    clear_env();
    set(config::EXCLUDE_BOARD_ENV, "false");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = headsup_cli::run(
        ["headsup", "strength", "2c3d", "--board", "AhKhQsJcTd"],
        &mut out,
        &mut err,
    );
    clear_env();

    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("against 1225 candidate hands"));
}
