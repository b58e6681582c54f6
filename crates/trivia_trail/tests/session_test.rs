//! Tests for game session start, dice rolls and pawn movement.

use rand::SeedableRng;
use rand::rngs::StdRng;
use trivia_board::{
    Board, BoardSettings, ContentPools, ContentType, Difficulty, Letter, Question, Record,
};
use trivia_trail::{COMPUTER_NAME, GameSession, JsonContentFiles, PawnColor, SessionError};

fn pools() -> ContentPools {
    ContentPools::new(
        vec![Question::new(Difficulty::Easy, "1+1?", vec!["2".to_string()])],
        vec![Letter::new(2)],
    )
}

fn start(name: &str, pawn: Option<PawnColor>) -> Result<GameSession, SessionError> {
    let mut rng = StdRng::seed_from_u64(42);
    GameSession::start(name, pawn, &pools(), &BoardSettings::default(), &mut rng)
}

#[test]
fn test_start_places_both_players_on_start() {
    let session = start("Ala", Some(PawnColor::Red)).expect("Start failed");

    assert_eq!(session.board().len(), Board::LENGTH);
    assert_eq!(session.player().name(), "Ala");
    assert_eq!(session.computer().name(), COMPUTER_NAME);
    assert_eq!(session.player_position(), Some(Board::START));
    assert_eq!(session.computer_position(), Some(Board::START));
    assert_eq!(*session.last_roll(), None);
}

#[test]
fn test_computer_gets_other_pawn() {
    let session = start("Ala", Some(PawnColor::Purple)).expect("Start failed");
    assert_eq!(*session.human_pawn(), PawnColor::Purple);
    assert_eq!(session.computer_pawn(), PawnColor::Red);
}

#[test]
fn test_start_requires_pawn() {
    let result = start("Ala", None);
    assert!(matches!(result, Err(SessionError::MissingPawn)));
}

#[test]
fn test_start_requires_name() {
    assert!(matches!(
        start("", Some(PawnColor::Red)),
        Err(SessionError::EmptyName)
    ));
    assert!(matches!(
        start("   ", Some(PawnColor::Red)),
        Err(SessionError::EmptyName)
    ));
}

#[test]
fn test_start_rejects_computer_name() {
    for name in ["computer", "Computer", "COMPUTER"] {
        let result = start(name, Some(PawnColor::Red));
        assert!(
            matches!(result, Err(SessionError::ReservedName { .. })),
            "{name} should be rejected"
        );
    }
}

#[test]
fn test_start_fails_without_pool_files() {
    let mut rng = StdRng::seed_from_u64(1);
    let source = JsonContentFiles::new("/no/such/questions.json".into(), "/no/such/letters.json".into());
    let result = GameSession::start(
        "Ala",
        Some(PawnColor::Red),
        &source,
        &BoardSettings::default(),
        &mut rng,
    );
    assert!(matches!(result, Err(SessionError::Board(_))));
}

#[test]
fn test_roll_moves_both_pawns() {
    let mut session = start("Ala", Some(PawnColor::Red)).expect("Start failed");
    let mut rng = StdRng::seed_from_u64(7);

    let roll = session.roll_dice(&mut rng);
    let value = usize::from(*roll.value());
    assert!((1..=6).contains(&value));
    assert_eq!(*session.last_roll(), Some(*roll.value()));
    assert_eq!(*roll.player_position(), Some(value));
    assert_eq!(*roll.computer_position(), Some(value));
    assert_eq!(session.player_position(), Some(value));

    let start_field = &session.board().fields()[Board::START];
    assert!(start_field.players().is_empty());
    let landed = &session.board().fields()[value];
    assert!(landed.has_player("Ala"));
    assert!(landed.has_player(COMPUTER_NAME));
}

#[test]
fn test_pawns_stop_at_end() {
    let mut session = start("Ala", Some(PawnColor::Red)).expect("Start failed");
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..40 {
        session.roll_dice(&mut rng);
    }

    assert_eq!(session.player_position(), Some(Board::END));
    assert_eq!(session.computer_position(), Some(Board::END));
    let occupied: usize = session.board().fields().iter().map(|f| f.players().len()).sum();
    assert_eq!(occupied, 2);
}

#[test]
fn test_session_round_trip() {
    let mut session = start("Ala", Some(PawnColor::Red)).expect("Start failed");
    session.roll_dice(&mut StdRng::seed_from_u64(5));

    let stored = session.to_json().expect("Serialize failed");
    let restored = GameSession::from_json(&stored).expect("Deserialize failed");
    assert_eq!(restored, session);

    let value = session.to_value().expect("Serialize failed");
    assert_eq!(value["human_pawn"], "red");
    assert_eq!(value["player"]["name"], "Ala");
    assert!(value["board"]["fields"].is_array());
}

#[test]
fn test_bundled_pool_files_load() {
    let source = JsonContentFiles::new("data/questions.json".into(), "data/letters.json".into());
    let mut rng = StdRng::seed_from_u64(8);
    let session = GameSession::start(
        "Ala",
        Some(PawnColor::Red),
        &source,
        &BoardSettings::new(0.0, 0.7),
        &mut rng,
    )
    .expect("Bundled pools should load");

    assert_eq!(session.board().count(ContentType::Normal), 2);
}
