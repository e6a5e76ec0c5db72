use crate::options::{GROW_CHUNK, TapeMode};

/// The cell array and the cell pointer.
///
/// Moving left of cell 0 is always a no-op. Moving right past the last cell
/// either grows the tape or stays put, depending on the [`TapeMode`].
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
    mode: TapeMode,
}

impl Tape {
    pub fn new(size: usize, mode: TapeMode) -> Self {
        Self {
            cells: vec![0; size.max(1)],
            pointer: 0,
            mode,
        }
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Value of the cell at `index`, or `None` past the end of the tape.
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    pub fn current(&self) -> u8 {
        self.cells[self.pointer]
    }

    pub fn set_current(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    /// Increment the current cell, wrapping 255 to 0. Returns the new value.
    pub fn increment(&mut self) -> u8 {
        let after = self.current().wrapping_add(1);
        self.set_current(after);
        after
    }

    /// Decrement the current cell, wrapping 0 to 255. Returns the new value.
    pub fn decrement(&mut self) -> u8 {
        let after = self.current().wrapping_sub(1);
        self.set_current(after);
        after
    }

    pub fn shift_left(&mut self) {
        self.pointer = self.pointer.saturating_sub(1);
    }

    pub fn shift_right(&mut self) {
        if self.pointer + 1 >= self.cells.len() {
            match self.mode {
                TapeMode::Fixed => return,
                TapeMode::Growable => self.grow(),
            }
        }
        self.pointer += 1;
    }

    fn grow(&mut self) {
        let new_len = self.cells.len() + GROW_CHUNK;
        self.cells.resize(new_len, 0);
    }
}
