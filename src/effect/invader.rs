use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{Column, Matrix, MatrixSink};

/// Left half of the two animation frames; the right half is the mirror image
const INVADER_FRAMES: [[u8; 5]; 2] = [
    [0x0E, 0x98, 0x7D, 0x36, 0x3C],
    [0x70, 0x18, 0x7D, 0xB6, 0x3C],
];

/// Full sprite width
const INVADER_WIDTH: Column = 10;

/// Space invader walking across the display, legs moving
#[derive(Debug, Clone, Copy)]
pub struct Invader {
    position: Column,
    frame: usize,
}

impl Default for Invader {
    fn default() -> Self {
        Self {
            position: -INVADER_WIDTH,
            frame: 0,
        }
    }
}

impl Invader {
    /// Lowest column covered by the sprite
    pub const fn position(&self) -> Column {
        self.position
    }
}

impl MatrixEffect for Invader {
    const DELAY: Duration = Duration::from_millis(6 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        *self = Self::default();
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let mut matrix = matrix.suspend();
        matrix.clear();
        for (i, data) in (0..).zip(&INVADER_FRAMES[self.frame]) {
            matrix.set_column(self.position + i, *data);
            matrix.set_column(self.position + INVADER_WIDTH - 1 - i, *data);
        }

        self.position += 1;
        self.frame = (self.frame + 1) % INVADER_FRAMES.len();
        self.position > matrix.columns()
    }
}
