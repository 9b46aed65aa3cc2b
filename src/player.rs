use std::io::{self, BufRead};

use anyhow::{bail, Result};
use rand::seq::IteratorRandom;

use crate::board::{Board, Mark};

pub(crate) trait Player {
    fn mark(&self) -> Mark;

    fn choose_move(&mut self, board: &Board) -> Result<(usize, usize)>;
}

/// A rejected move, one variant per user-facing diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("please enter 2 numbers separated by space")]
    NotTwoNumbers,

    #[error("Invalid row or column. Must be 0, 1, or 2")]
    OutOfRange,

    #[error("Position is already taken. Try again.")]
    Occupied,
}

/// Checks one line of input against the current board.
pub fn validate_move(input: &str, board: &Board) -> Result<(usize, usize), MoveError> {
    let coords: Vec<&str> = input.split_whitespace().collect();
    if coords.len() != 2 {
        return Err(MoveError::NotTwoNumbers);
    }
    let row = parse_coord(coords[0])?;
    let col = parse_coord(coords[1])?;
    if board.get(row, col) != Mark::Empty {
        return Err(MoveError::Occupied);
    }
    Ok((row, col))
}

fn parse_coord(token: &str) -> Result<usize, MoveError> {
    token
        .parse::<usize>()
        .ok()
        .filter(|&coord| coord < 3)
        .ok_or(MoveError::OutOfRange)
}

pub struct HumanPlayer {
    mark: Mark,
}

impl HumanPlayer {
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    fn read_move(&self, input: &mut impl BufRead, board: &Board) -> Result<(usize, usize)> {
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input closed before player {} moved", self.mark);
            }
            match validate_move(&line, board) {
                Ok(coords) => return Ok(coords),
                Err(err) => println!("{}", err),
            }
        }
    }
}

impl Player for HumanPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &Board) -> Result<(usize, usize)> {
        println!(
            "Player {} turn. Enter row and column in [0-2], separated by space:",
            self.mark
        );
        self.read_move(&mut io::stdin().lock(), board)
    }
}

/// Plays a uniformly random empty cell. Not part of the console game;
/// exists so the turn loop can be exercised without stdin.
pub struct RandomPlayer {
    mark: Mark,
}

impl RandomPlayer {
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &Board) -> Result<(usize, usize)> {
        match board.available_moves().into_iter().choose(&mut rand::thread_rng()) {
            Some(coords) => Ok(coords),
            None => bail!("no empty cells left for player {}", self.mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_validate_move() {
        let board = Board::new();
        assert_eq!(validate_move("1 2", &board), Ok((1, 2)));
        assert_eq!(validate_move("  0  2 \n", &board), Ok((0, 2)));
    }

    #[test]
    fn test_validate_move_wrong_token_count() {
        let board = Board::new();
        assert_eq!(validate_move("1", &board), Err(MoveError::NotTwoNumbers));
        assert_eq!(validate_move("", &board), Err(MoveError::NotTwoNumbers));
        assert_eq!(
            validate_move("0 1 2", &board),
            Err(MoveError::NotTwoNumbers)
        );
    }

    #[test]
    fn test_validate_move_out_of_range() {
        let board = Board::new();
        assert_eq!(validate_move("3 1", &board), Err(MoveError::OutOfRange));
        assert_eq!(validate_move("a b", &board), Err(MoveError::OutOfRange));
        assert_eq!(validate_move("-1 0", &board), Err(MoveError::OutOfRange));
    }

    #[test]
    fn test_validate_move_occupied() {
        let mut board = Board::new();
        board.set(1, 1, Mark::X);
        assert_eq!(validate_move("1 1", &board), Err(MoveError::Occupied));
        assert_eq!(validate_move("1 0", &board), Ok((1, 0)));
    }

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(
            MoveError::NotTwoNumbers.to_string(),
            "please enter 2 numbers separated by space"
        );
        assert_eq!(
            MoveError::OutOfRange.to_string(),
            "Invalid row or column. Must be 0, 1, or 2"
        );
        assert_eq!(
            MoveError::Occupied.to_string(),
            "Position is already taken. Try again."
        );
    }

    #[test]
    fn test_read_move_retries_until_valid() {
        let board = Board::new();
        let player = HumanPlayer::new(Mark::X);
        let mut input = Cursor::new("nope\n5 5\n1\n2 0\n");
        assert_eq!(player.read_move(&mut input, &board).unwrap(), (2, 0));
    }

    #[test]
    fn test_read_move_end_of_input() {
        let board = Board::new();
        let player = HumanPlayer::new(Mark::O);
        let mut input = Cursor::new("");
        assert!(player.read_move(&mut input, &board).is_err());
    }

    #[test]
    fn test_random_player_picks_empty_cell() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X);
        board.set(1, 1, Mark::O);
        let mut player = RandomPlayer::new(Mark::X);
        for _ in 0..20 {
            let (row, col) = player.choose_move(&board).unwrap();
            assert_eq!(board.get(row, col), Mark::Empty);
        }
    }

    #[test]
    fn test_random_player_full_board() {
        let mut board = Board::new();
        for (row, col) in board.available_moves() {
            board.set(row, col, Mark::X);
        }
        let mut player = RandomPlayer::new(Mark::O);
        assert!(player.choose_move(&board).is_err());
    }
}
