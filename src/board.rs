use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Mark; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; 3]; 3],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    // Caller guarantees the cell is empty; see the move validation in `player`.
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    pub fn available_moves(&self) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    pub fn evaluate(&self) -> Option<Outcome> {
        // Check rows
        for row in &self.cells {
            if row.iter().all(|&cell| cell == Mark::X) {
                return Some(Outcome::XWins);
            }
            if row.iter().all(|&cell| cell == Mark::O) {
                return Some(Outcome::OWins);
            }
        }

        // Check columns
        for col in 0..3 {
            if self.cells.iter().all(|row| row[col] == Mark::X) {
                return Some(Outcome::XWins);
            }
            if self.cells.iter().all(|row| row[col] == Mark::O) {
                return Some(Outcome::OWins);
            }
        }

        // Check diagonals
        let diagonals = [
            [self.cells[0][0], self.cells[1][1], self.cells[2][2]],
            [self.cells[0][2], self.cells[1][1], self.cells[2][0]],
        ];
        for diagonal in &diagonals {
            if diagonal.iter().all(|&cell| cell == Mark::X) {
                return Some(Outcome::XWins);
            }
            if diagonal.iter().all(|&cell| cell == Mark::O) {
                return Some(Outcome::OWins);
            }
        }

        if self
            .cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
        {
            return Some(Outcome::Draw);
        }

        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_idx, row) in self.cells.iter().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (col_idx, cell) in row.iter().enumerate() {
                if col_idx > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
