//! Property tests: every record survives a trip through its JSON form.

use proptest::prelude::*;
use trivia_board::{Board, Difficulty, Field, FieldContent, Letter, Player, Question, Record};

fn player() -> impl Strategy<Value = Player> {
    ("[a-zA-Z ]{0,12}", any::<u32>(), any::<u32>())
        .prop_map(|(name, jug, star)| Player::with_counters(name, jug, star))
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn question() -> impl Strategy<Value = Question> {
    (difficulty(), ".{0,40}", prop::collection::vec(".{0,12}", 0..5))
        .prop_map(|(difficulty, text, answers)| Question::new(difficulty, text, answers))
}

fn letter() -> impl Strategy<Value = Letter> {
    any::<i32>().prop_map(Letter::new)
}

fn field() -> impl Strategy<Value = Field> {
    let content = prop_oneof![
        Just(None),
        question().prop_map(|q| Some(FieldContent::Question(q))),
        letter().prop_map(|l| Some(FieldContent::Letter(l))),
    ];
    (content, prop::collection::vec(player(), 0..3))
        .prop_map(|(content, players)| Field::with_players(content, players))
}

proptest! {
    #[test]
    fn player_round_trip(player in player()) {
        let json = player.to_json().unwrap();
        prop_assert_eq!(Player::from_json(&json).unwrap(), player);
    }

    #[test]
    fn question_round_trip(question in question()) {
        let json = question.to_json().unwrap();
        prop_assert_eq!(Question::from_json(&json).unwrap(), question);
    }

    #[test]
    fn letter_round_trip(letter in letter()) {
        let json = letter.to_json().unwrap();
        prop_assert_eq!(Letter::from_json(&json).unwrap(), letter);
    }

    #[test]
    fn board_round_trip(fields in prop::collection::vec(field(), 0..24)) {
        let board = Board::from_fields(fields);
        let restored = Board::from_json(&board.to_json().unwrap()).unwrap();

        prop_assert_eq!(restored.len(), board.len());
        for (a, b) in restored.fields().iter().zip(board.fields()) {
            prop_assert_eq!(a.content_type(), b.content_type());
            prop_assert_eq!(a.content(), b.content());
            prop_assert_eq!(a.players(), b.players());
        }
    }
}
