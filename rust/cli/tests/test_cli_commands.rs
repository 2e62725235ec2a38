use std::io::Cursor;

use holdem_cli::run_with_input;

struct Output {
    code: i32,
    stdout: String,
    stderr: String,
}

fn run(args: &[&str], input: &str) -> Output {
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(argv, &mut stdin, &mut out, &mut err);
    Output {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

fn stacks(stdout: &str) -> Vec<u32> {
    let line = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Final stacks: "))
        .expect("final stacks line");
    line.split_whitespace()
        .map(|kv| kv.rsplit('=').next().unwrap().parse().unwrap())
        .collect()
}

#[test]
fn eval_reports_category_and_tie_break() {
    let res = run(&["eval", "Kh", "Kd", "Ks", "Qc", "Qd", "Qh", "2s"], "");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Hand: Full House"));
    assert!(res.stdout.contains("Tie-break: 13 12"));
}

#[test]
fn eval_rejects_duplicates() {
    let res = run(&["eval", "Ah", "Ah", "Kd", "Qc", "Js"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("duplicate card Ah"));
}

#[test]
fn deal_is_reproducible() {
    let a = run(&["deal", "--seed", "99"], "");
    let b = run(&["deal", "--seed", "99"], "");
    assert_eq!(a.code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.contains("Board: ["));
}

#[test]
fn sim_conserves_chips_at_a_full_table() {
    let res = run(
        &["sim", "--hands", "30", "--players", "6", "--seed", "3", "--ai", "simple"],
        "",
    );
    assert_eq!(res.code, 0, "{}", res.stderr);
    let stacks = stacks(&res.stdout);
    assert_eq!(stacks.len(), 6);
    assert_eq!(stacks.iter().sum::<u32>(), 6000);
}

#[test]
fn sim_rejects_unknown_policy() {
    let res = run(&["sim", "--hands", "1", "--ai", "shark"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Unknown AI type: shark"));
}

#[test]
fn human_session_survives_bad_input() {
    // Seat 0 is the dealer and small blind on the first heads-up hand
    let res = run(&["play", "--seed", "5"], "raise\ncheck\nfold\n");
    assert_eq!(res.code, 0);
    assert!(res.stderr.contains("Raise requires an amount"));
    assert!(res.stderr.contains("Cannot check"));
    assert!(res.stdout.contains("You folds"));
    assert_eq!(stacks(&res.stdout), vec![990, 1010]);
}

#[test]
fn human_call_hands_action_to_the_big_blind() {
    let res = run(&["play", "--seed", "5"], "call\n");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("You calls 10"));
    // Whatever the AI does next, the pot holds at least both blinds
    assert!(res.stdout.contains("Pot: 40"));
}

#[test]
fn watch_mode_plays_every_seat() {
    let res = run(&["play", "--vs", "ai", "--hands", "4", "--players", "3", "--seed", "12"], "");
    assert_eq!(res.code, 0);
    assert!(!res.stdout.contains("Enter action"));
    assert_eq!(stacks(&res.stdout).iter().sum::<u32>(), 3000);
}
