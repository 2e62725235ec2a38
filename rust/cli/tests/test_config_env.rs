use std::io::{Cursor, Write};

use holdem_cli::run_with_input;
use serde_json::Value;
use serial_test::serial;

const VARS: &[&str] = &[
    "HOLDEM_CONFIG",
    "HOLDEM_SEED",
    "HOLDEM_STACK",
    "HOLDEM_PLAYERS",
    "HOLDEM_AI",
];

/// Sets the given variables (clearing the rest) for the life of the guard.
struct EnvGuard;

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        for key in VARS {
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in VARS {
            unsafe { std::env::remove_var(key) };
        }
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(Vec::new());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(argv, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let _env = EnvGuard::apply(&[]);
    let (code, out, _) = run(&["cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["players"]["value"], 2);
    assert_eq!(json["players"]["source"], "default");
    assert_eq!(json["big_blind"]["value"], 20);
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_beats_file_and_flags_beat_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_stack = 400\nplayers = 3\nseed = 1\nai = \"simple\"").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let _env = EnvGuard::apply(&[("HOLDEM_CONFIG", path.as_str()), ("HOLDEM_SEED", "77")]);

    let (code, out, _) = run(&["cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_stack"]["value"], 400);
    assert_eq!(json["starting_stack"]["source"], "file");
    assert_eq!(json["seed"]["value"], 77);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["ai"]["value"], "simple");

    let (code, out, _) = run(&["sim", "--hands", "2"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("sim: hands=2 players=3 ai=simple seed=77\n"));

    let (code, out, _) = run(&["sim", "--hands", "2", "--players", "2", "--seed", "5"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("sim: hands=2 players=2 ai=simple seed=5\n"));
}

#[test]
#[serial]
fn invalid_env_fails_commands_that_need_config() {
    let _env = EnvGuard::apply(&[("HOLDEM_STACK", "lots")]);
    let (code, _, err) = run(&["deal"]);
    assert_eq!(code, 2);
    assert!(err.contains("HOLDEM_STACK has an invalid value 'lots'"));

    // eval does not read the configuration
    let (code, _, _) = run(&["eval", "2c", "3d", "4h", "5s", "7c"]);
    assert_eq!(code, 0);
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    let _env = EnvGuard::apply(&[("HOLDEM_CONFIG", "/nonexistent/holdem.toml")]);
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
}
