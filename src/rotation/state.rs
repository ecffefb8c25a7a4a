use crate::error::RotationError;

/// Index into a fixed-length sequence that wraps in both directions.
///
/// `current` is always in `0..len` and `len` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    current: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Result<Self, RotationError> {
        if len == 0 {
            return Err(RotationError::EmptySequence);
        }
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        self.advance(1);
    }

    /// Move forward `steps` positions in one go.
    pub fn advance(&mut self, steps: usize) {
        self.current = (self.current + steps % self.len) % self.len;
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump to `index`. Out-of-range indices leave the state untouched.
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }
}
