//! The tape machine: byte cells and the read/write head.


use std::fmt::Write;


pub const TAPE_SIZE: usize = 30_000;

/// A fixed-length tape of byte cells with a movable head.
///
/// All cells start at zero and the head starts at position 0. Cell
/// arithmetic wraps modulo 256 in both directions. Head movement is
/// clamped on both ends: moving left at cell 0 or right at the last cell
/// leaves the head where it is, without error.
#[derive(Debug)]
pub struct Tape {
    cells: Vec<u8>,
    head: usize,
}

impl Tape {
    pub fn new() -> Self {
        Self {
            cells: vec![0; TAPE_SIZE],
            head: 0,
        }
    }

    /// Add 1 to the cell at the head, wrapping 255 back to 0.
    pub fn inc(&mut self) {
        self.cells[self.head] = self.cells[self.head].wrapping_add(1);
    }

    /// Subtract 1 from the cell at the head, wrapping 0 back to 255.
    pub fn dec(&mut self) {
        self.cells[self.head] = self.cells[self.head].wrapping_sub(1);
    }

    /// Move the head one cell to the right, staying put at the last cell.
    pub fn move_right(&mut self) {
        if self.head + 1 < self.cells.len() {
            self.head += 1;
        }
    }

    /// Move the head one cell to the left, staying put at cell 0.
    pub fn move_left(&mut self) {
        self.head = self.head.saturating_sub(1);
    }

    /// Store one input byte in the cell at the head.
    pub fn read(&mut self, byte: u8) {
        self.cells[self.head] = byte;
    }

    /// The byte at the head, to be emitted as output.
    pub fn write(&self) -> u8 {
        self.cells[self.head]
    }

    /// The byte at the head, used for loop conditions.
    pub fn current(&self) -> u8 {
        self.cells[self.head]
    }

    pub fn head(&self) -> usize {
        self.head
    }

    /// Head position and the first `window` cells, for the `#` diagnostic.
    pub fn snapshot(&self, window: usize) -> String {
        let mut line = format!("{} [", self.head);
        for (i, cell) in self.cells.iter().take(window).enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            write!(&mut line, "{}", cell).unwrap();
        }
        line.push(']');
        line
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
