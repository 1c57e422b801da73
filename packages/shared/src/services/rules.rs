use rand::Rng;

use crate::models::board::{Board, Cell};
use crate::models::game::{GameResult, PlayerSymbol};

/// All possible winning lines on a 3x3 board: rows, columns, diagonals.
const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // middle column
    [2, 5, 8], // right column
    [0, 4, 8], // diagonal top-left to bottom-right
    [2, 4, 6], // diagonal top-right to bottom-left
];

const JOIN_CODE_LEN: usize = 6;
const JOIN_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A move is legal iff the target cell is on the board and empty, and the
/// mover's symbol holds the turn. Which of the two failed is not reported;
/// the handler layer surfaces a single invalid-move condition.
pub fn can_make_move(
    board: &Board,
    position: usize,
    current_turn: PlayerSymbol,
    player_symbol: PlayerSymbol,
) -> bool {
    board.is_valid_position(position) && current_turn == player_symbol
}

/// Winner or draw detection, a pure function of the board. Checks the 8
/// lines in fixed order; a line wins when all three cells hold the same
/// non-empty symbol. A full board with no winning line is a draw; `None`
/// means the game continues.
pub fn check_game_result(board: &Board) -> Option<GameResult> {
    let cells = board.cells();
    for [a, b, c] in WIN_PATTERNS {
        let owner = match cells[a] {
            Cell::X => GameResult::X,
            Cell::O => GameResult::O,
            Cell::Empty => continue,
        };
        if cells[a] == cells[b] && cells[a] == cells[c] {
            return Some(owner);
        }
    }

    if board.is_full() {
        return Some(GameResult::Draw);
    }

    None
}

pub fn is_game_over(board: &Board) -> bool {
    check_game_result(board).is_some()
}

/// 6 characters drawn independently and uniformly from A-Z0-9. Not globally
/// unique; the game service checks the store and retries on collision.
pub fn generate_join_code() -> String {
    let mut rng = rand::thread_rng();
    (0..JOIN_CODE_LEN)
        .map(|_| JOIN_CODE_ALPHABET[rng.gen_range(0..JOIN_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Exactly 6 characters, uppercase letters and digits only.
pub fn is_valid_join_code(code: &str) -> bool {
    code.len() == JOIN_CODE_LEN
        && code
            .bytes()
            .all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit())
}

/// Human-readable summary of a game result, shown under the board.
pub fn result_message(result: Option<GameResult>) -> String {
    match result {
        Some(GameResult::Draw) => "It's a draw!".to_string(),
        Some(GameResult::X) => "Player X wins!".to_string(),
        Some(GameResult::O) => "Player O wins!".to_string(),
        None => "Game in progress".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::empty();

        assert_eq!(check_game_result(&board), None);
        assert!(!is_game_over(&board));
        assert_eq!(result_message(check_game_result(&board)), "Game in progress");
    }

    #[test_case([0, 1, 2]; "top row")]
    #[test_case([3, 4, 5]; "middle row")]
    #[test_case([6, 7, 8]; "bottom row")]
    #[test_case([0, 3, 6]; "left column")]
    #[test_case([1, 4, 7]; "middle column")]
    #[test_case([2, 5, 8]; "right column")]
    #[test_case([0, 4, 8]; "main diagonal")]
    #[test_case([2, 4, 6]; "anti diagonal")]
    fn test_filled_line_wins(line: [usize; 3]) {
        let mut x_board = Board::empty();
        let mut o_board = Board::empty();
        for position in line {
            x_board = x_board.with_move(position, PlayerSymbol::X);
            o_board = o_board.with_move(position, PlayerSymbol::O);
        }

        assert_eq!(check_game_result(&x_board), Some(GameResult::X));
        assert_eq!(check_game_result(&o_board), Some(GameResult::O));
        assert!(is_game_over(&x_board));
    }

    #[test]
    fn test_top_row_win_and_message() {
        let board = Board::from_strs(["X", "X", "X", "", "", "", "", "", ""]);

        let result = check_game_result(&board);
        assert_eq!(result, Some(GameResult::X));
        assert_eq!(result_message(result), "Player X wins!");
    }

    #[test]
    fn test_diagonal_win_for_o() {
        let board = Board::from_strs(["O", "", "", "", "O", "", "", "", "O"]);

        let result = check_game_result(&board);
        assert_eq!(result, Some(GameResult::O));
        assert_eq!(result_message(result), "Player O wins!");
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_strs(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);

        let result = check_game_result(&board);
        assert_eq!(result, Some(GameResult::Draw));
        assert!(is_game_over(&board));
        assert_eq!(result_message(result), "It's a draw!");
    }

    #[test]
    fn test_partial_board_without_line_continues() {
        let board = Board::from_strs(["X", "O", "", "", "X", "", "", "", "O"]);

        assert_eq!(check_game_result(&board), None);
    }

    #[test]
    fn test_can_make_move_requires_empty_cell_and_turn() {
        let board = Board::from_strs(["X", "", "", "", "O", "", "", "", ""]);

        assert!(can_make_move(&board, 1, PlayerSymbol::X, PlayerSymbol::X));
        // occupied cell
        assert!(!can_make_move(&board, 0, PlayerSymbol::X, PlayerSymbol::X));
        // not O's turn
        assert!(!can_make_move(&board, 1, PlayerSymbol::X, PlayerSymbol::O));
        // off the board
        assert!(!can_make_move(&board, 9, PlayerSymbol::X, PlayerSymbol::X));
    }

    #[test]
    fn test_switch_turn_is_involution() {
        assert_eq!(PlayerSymbol::X.other(), PlayerSymbol::O);
        assert_eq!(PlayerSymbol::O.other(), PlayerSymbol::X);
        assert_eq!(PlayerSymbol::X.other().other(), PlayerSymbol::X);
        assert_eq!(PlayerSymbol::O.other().other(), PlayerSymbol::O);
    }

    #[test]
    fn test_join_code_format_validation() {
        assert!(is_valid_join_code("ABC123"));
        assert!(is_valid_join_code("000000"));
        assert!(is_valid_join_code("ZZZZZZ"));

        assert!(!is_valid_join_code("abc123"), "lowercase rejected");
        assert!(!is_valid_join_code("ABC12"), "too short");
        assert!(!is_valid_join_code("ABC1234"), "too long");
        assert!(!is_valid_join_code("ABC 12"));
        assert!(!is_valid_join_code("ABC12!"));
        assert!(!is_valid_join_code(""));
    }

    proptest! {
        #[test]
        fn prop_generated_join_codes_validate(_seed in 0u32..64) {
            let code = generate_join_code();
            prop_assert!(is_valid_join_code(&code));
        }

        /// Every board maps to exactly one of win/draw/in-progress, and a
        /// draw is only declared on a full board.
        #[test]
        fn prop_check_game_result_total(moves in proptest::collection::vec(0usize..9, 0..9)) {
            let mut board = Board::empty();
            let mut turn = PlayerSymbol::X;
            for position in moves {
                if board.is_valid_position(position) && !is_game_over(&board) {
                    board = board.with_move(position, turn);
                    turn = turn.other();
                }
            }

            match check_game_result(&board) {
                Some(GameResult::Draw) => prop_assert!(board.is_full()),
                Some(_) => prop_assert!(is_game_over(&board)),
                None => prop_assert!(!board.is_full()),
            }
        }
    }
}
