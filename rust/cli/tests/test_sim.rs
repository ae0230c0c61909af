use serial_test::serial;
use tongits_cli::run;
use tongits_engine::logger::GameRecord;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn sim_writes_one_record_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("sim.jsonl");
    let p = path.to_str().unwrap();

    let (code, stdout, _) = run_cli(&["tongits", "sim", "--games", "4", "--seed", "10", "--output", p]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Simulated: 4 games"));

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<GameRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.seed, Some(10 + i as u64));
        assert!(rec.winner.is_some());
        assert!(rec.ts.is_some());
        assert!(!rec.actions.is_empty());
        assert!(rec.game_id.ends_with(&format!("-{:06}", i + 1)));
    }
}

#[test]
#[serial]
fn sim_output_feeds_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    let p = path.to_str().unwrap();
    let (code, _, _) = run_cli(&["tongits", "sim", "--games", "6", "--seed", "3", "--output", p]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(&["tongits", "stats", "--input", p]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["games"], 6);
    let endings = &v["endings"];
    let ended = endings["tongits"].as_u64().unwrap()
        + endings["call_draw"].as_u64().unwrap()
        + endings["deck_exhausted"].as_u64().unwrap();
    assert_eq!(ended, 6);

    // directories are searched too
    let (code, stdout, _) = run_cli(&["tongits", "stats", "--input", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"games\": 6"));
}

#[test]
#[serial]
fn sim_break_after_reports_interruption() {
    unsafe { std::env::set_var("TONGITS_SIM_BREAK_AFTER", "2") };
    let (code, stdout, _) = run_cli(&["tongits", "sim", "--games", "5", "--seed", "1"]);
    unsafe { std::env::remove_var("TONGITS_SIM_BREAK_AFTER") };
    assert_eq!(code, 130);
    assert!(stdout.contains("Interrupted: saved 2/5"));
}

#[test]
#[serial]
fn sim_rejects_zero_games() {
    let (code, _, _) = run_cli(&["tongits", "sim", "--games", "0"]);
    assert_eq!(code, 2);
}

#[test]
#[serial]
fn stats_missing_input_fails() {
    let (code, _, stderr) = run_cli(&["tongits", "stats", "--input", "no/such/file.jsonl"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read"));
}
