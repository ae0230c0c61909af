use std::fs;

use tongits_engine::engine::Engine;
use tongits_engine::logger::{EndReason, GameLogger, GameRecord};
use tongits_engine::player::DrawSource;

fn finished_engine() -> Engine {
    let mut eng = Engine::new(Some(99));
    while !eng.is_over() {
        eng.draw(DrawSource::Deck);
        if eng.is_over() {
            break;
        }
        eng.discard(0);
    }
    eng
}

#[test]
fn deck_only_play_ends_by_exhaustion() {
    let eng = finished_engine();
    let state = eng.state();
    assert!(state.deck.is_empty());
    assert_eq!(state.end_reason, Some(EndReason::DeckExhausted));
    assert!(state.winner.is_some());
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("games").join("log.jsonl");
    let mut logger = GameLogger::create(&path).expect("create logger");
    let eng = finished_engine();
    let rec = eng.record(logger.next_id());
    logger.write(&rec).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));

    let text = String::from_utf8(bytes).unwrap();
    let back: GameRecord = serde_json::from_str(text.trim_end()).expect("parse record");
    assert_eq!(back.winner, eng.state().winner);
    assert_eq!(back.actions.len(), eng.actions().len());
    assert_eq!(back.seed, Some(99));
    assert!(back.ts.is_some(), "timestamp injected when missing");
}

#[test]
fn ts_is_preserved_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ts.jsonl");
    let mut logger = GameLogger::create(&path).expect("create logger");
    let mut rec = finished_engine().record("20260101-000001".to_string());
    rec.ts = Some("2026-01-01T00:00:00Z".to_string());
    logger.write(&rec).expect("write");

    let text = fs::read_to_string(&path).unwrap();
    let back: GameRecord = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(back.ts.as_deref(), Some("2026-01-01T00:00:00Z"));
    assert_eq!(back.game_id, "20260101-000001");
}
