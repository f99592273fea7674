//! Tests for clue encoding and decoding.

use strum::IntoEnumIterator;
use wordlebot::{ClueCode, ClueError, ClueString, GuessRecord, LetterMark, decode, encode, is_solved};

use LetterMark::{Correct, Misplaced, Unknown};

#[test]
fn test_encode_maps_each_position() {
    let clue = encode(&[Correct, Unknown, Misplaced, Unknown, Unknown]);
    assert_eq!(clue.to_string(), "gxyxx");
    assert_eq!(clue.len(), 5);
}

#[test]
fn test_correct_count_matches_g_count() {
    let marks: Vec<LetterMark> = LetterMark::iter().collect();
    for a in &marks {
        for b in &marks {
            for c in &marks {
                for d in &marks {
                    for e in &marks {
                        let seq = [*a, *b, *c, *d, *e];
                        let clue = encode(&seq);
                        let g_count = clue.to_string().chars().filter(|ch| *ch == 'g').count();
                        let correct = seq.iter().filter(|m| **m == Correct).count();
                        assert_eq!(g_count, correct, "sequence {:?}", seq);
                        assert_eq!(decode(&clue), seq.to_vec());
                    }
                }
            }
        }
    }
}

#[test]
fn test_toggle_cycle_wraps_after_three() {
    assert_eq!(Unknown.next(), Misplaced);
    assert_eq!(Misplaced.next(), Correct);
    assert_eq!(Correct.next(), Unknown);
    for mark in LetterMark::iter() {
        assert_eq!(mark.next().next().next(), mark);
    }
}

#[test]
fn test_is_solved_only_for_all_correct() {
    assert!(is_solved(&"ggggg".parse().unwrap()));
    assert!(!is_solved(&"ggggy".parse().unwrap()));
    assert!(!is_solved(&"xxxxx".parse().unwrap()));
    assert!(!is_solved(&ClueString::default()));
    assert!(encode(&[Correct; 3]).is_solved());
}

#[test]
fn test_parse_ignores_case() {
    let clue: ClueString = "GxYxX".parse().expect("valid clue");
    assert_eq!(
        clue.codes(),
        &[ClueCode::G, ClueCode::X, ClueCode::Y, ClueCode::X, ClueCode::X]
    );
}

#[test]
fn test_parse_rejects_unknown_character() {
    let err = "gxbxx".parse::<ClueString>().unwrap_err();
    assert_eq!(err, ClueError::InvalidCode { position: 2, found: 'b' });
    assert!(err.to_string().contains("'b' at position 2"));
}

#[test]
fn test_clue_serializes_as_string() {
    let record = GuessRecord::new("serai", "gxyxx".parse().unwrap());
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"word":"serai","clue":"gxyxx"}"#);

    let back: GuessRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert!(!back.is_solved());
}

#[test]
fn test_deserialize_rejects_bad_clue() {
    let result = serde_json::from_str::<GuessRecord>(r#"{"word":"serai","clue":"gxqxx"}"#);
    assert!(result.is_err());
}
