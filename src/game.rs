use anyhow::{bail, Result};
use log::debug;

use crate::board::{Board, Outcome};
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Finished(Outcome),
}

pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    active: usize,
    status: Status,
}

impl Game {
    // X moves first.
    pub fn new(x: Box<dyn Player>, o: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(),
            players: [x, o],
            active: 0,
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Plays one turn: acquire a move from the active player, apply it,
    /// render the board, evaluate.
    pub fn tick(&mut self) -> Result<()> {
        if let Status::Finished(_) = self.status {
            bail!("game is already finished");
        }

        let mark = self.players[self.active].mark();
        let (row, col) = self.players[self.active].choose_move(&self.board)?;
        self.board.set(row, col, mark);
        debug!("player {} marked ({}, {})", mark, row, col);
        println!("{}", self.board);

        match self.board.evaluate() {
            Some(outcome) => self.status = Status::Finished(outcome),
            None => self.active = 1 - self.active,
        }
        Ok(())
    }

    /// Runs the game to completion and reports the outcome.
    pub fn run(&mut self) -> Result<Outcome> {
        println!("{}", self.board);
        loop {
            self.tick()?;
            if let Status::Finished(outcome) = self.status {
                println!("{}", outcome);
                return Ok(outcome);
            }
        }
    }
}
