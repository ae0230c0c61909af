use serial_test::serial;
use tongits_cli::run;

fn play_with_script(script: &str, extra: &[&str]) -> (i32, String, String) {
    unsafe {
        std::env::remove_var("TONGITS_CONFIG");
        std::env::set_var("TONGITS_TEST_INPUT", script);
    }
    let mut args = vec!["tongits", "play", "--delay-ms", "0"];
    args.extend_from_slice(extra);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    unsafe { std::env::remove_var("TONGITS_TEST_INPUT") };
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn human_quick_quit_via_test_input() {
    let (code, stdout, _) = play_with_script("q\n", &["--seed", "42"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("play: seed=42"));
    assert!(stdout.contains("Seat 1 Bot 1"));
    assert!(stdout.contains("Session abandoned."));
}

#[test]
#[serial]
fn help_command_prints_command_list() {
    let (code, stdout, _) = play_with_script("help\nquit\n", &["--seed", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("sapaw SEAT M N..."));
}

#[test]
#[serial]
fn custom_name_appears_in_transcript() {
    let (code, stdout, _) = play_with_script("draw\ndiscard 1\nq\n", &["--seed", "9", "--name", "Ana"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[Ana] Drew "));
    assert!(stdout.contains("[Ana] Discarded "));
}

#[test]
#[serial]
fn same_seed_same_transcript() {
    let script = "d\nx 1\nd\nx 1\nq\n";
    let (_, a, _) = play_with_script(script, &["--seed", "123"]);
    let (_, b, _) = play_with_script(script, &["--seed", "123"]);
    assert_eq!(a, b);
}

#[test]
#[serial]
fn scripted_session_plays_to_the_end() {
    // draw and throw the first card every turn until the deck runs out
    let script = "d\nx 1\n".repeat(20);
    let (code, stdout, _) = play_with_script(&script, &["--seed", "2024"]);
    assert_eq!(code, 0);
    assert!(
        stdout.contains("Game over (") || stdout.contains("Session abandoned."),
        "{}",
        stdout
    );
}

#[test]
#[serial]
fn unknown_ai_flag_fails() {
    let (code, _, stderr) = play_with_script("q\n", &["--ai", "oracle"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("oracle"));
}
