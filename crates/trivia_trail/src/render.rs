//! Plain-text rendering of a session for the terminal.

use trivia_board::{Board, Field, FieldContent};

use crate::GameSession;

/// Formats the whole session: players, last roll, then one line per field.
pub fn render_session(session: &GameSession) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}): jugs {}, stars {}\n",
        session.player().name(),
        session.human_pawn(),
        session.player().jug(),
        session.player().star(),
    ));
    out.push_str(&format!(
        "{} ({}): jugs {}, stars {}\n",
        session.computer().name(),
        session.computer_pawn(),
        session.computer().jug(),
        session.computer().star(),
    ));
    match session.last_roll() {
        Some(roll) => out.push_str(&format!("Last roll: {}\n", roll)),
        None => out.push_str("Last roll: -\n"),
    }
    out.push('\n');
    out.push_str(&render_board(session.board()));
    out
}

/// Formats a board, one field per line.
pub fn render_board(board: &Board) -> String {
    let last = board.len().saturating_sub(1);
    let mut out = String::new();
    for (index, field) in board.fields().iter().enumerate() {
        let label = match index {
            Board::START => "START".to_string(),
            i if i == last => "END".to_string(),
            i => format!("{:>2}", i),
        };
        out.push_str(&format!(
            "{:>5} | {:<8} | {}{}\n",
            label,
            field.content_type().as_ref(),
            describe(field),
            occupants(field),
        ));
    }
    out
}

fn describe(field: &Field) -> String {
    match field.content() {
        Some(FieldContent::Question(q)) => format!("[{}] {}", q.difficulty(), q.question()),
        Some(FieldContent::Letter(l)) => format!("move {:+}", l.movement()),
        None => String::new(),
    }
}

fn occupants(field: &Field) -> String {
    if field.players().is_empty() {
        return String::new();
    }
    let names: Vec<&str> = field.players().iter().map(|p| p.name().as_str()).collect();
    format!("  <- {}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_board::{Difficulty, Letter, Player, Question};

    #[test]
    fn test_render_board_lines() {
        let mut start = Field::new();
        start.add_player(Player::new("Ala"));
        let board = Board::from_fields(vec![
            start,
            Field::with_content(Letter::new(-2).into()),
            Field::with_content(
                Question::new(Difficulty::Easy, "2+2?", vec!["4".to_string()]).into(),
            ),
            Field::new(),
        ]);

        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("START | normal"));
        assert!(lines[0].ends_with("<- Ala"));
        assert!(lines[1].contains("letter"));
        assert!(lines[1].contains("move -2"));
        assert!(lines[2].contains("[easy] 2+2?"));
        assert!(lines[3].starts_with("  END"));
    }
}
