use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{Column, Matrix, MatrixSink};

const PACMAN_WIDTH: usize = 18;

/// A ghost chased by a pacman, leading edge last
#[rustfmt::skip]
const PACMAN_FRAMES: [[u8; PACMAN_WIDTH]; 4] = [
    [0xFE, 0x73, 0xFB, 0x7F, 0xF3, 0x7B, 0xFE, 0x00, 0x00, 0x00, 0x3C, 0x7E, 0x7E, 0xFF, 0xE7, 0xC3, 0x81, 0x00],
    [0xFE, 0x7B, 0xF3, 0x7F, 0xFB, 0x73, 0xFE, 0x00, 0x00, 0x00, 0x3C, 0x7E, 0xFF, 0xFF, 0xE7, 0xE7, 0x42, 0x00],
    [0xFE, 0x73, 0xFB, 0x7F, 0xF3, 0x7B, 0xFE, 0x00, 0x00, 0x00, 0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xE7, 0x66, 0x24],
    [0xFE, 0x7B, 0xF3, 0x7F, 0xF3, 0x7B, 0xFE, 0x00, 0x00, 0x00, 0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C],
];

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const SPRITE_WIDTH: Column = PACMAN_WIDTH as Column;

/// Pacman chasing a ghost across the display, mouth opening and closing
#[derive(Debug, Clone, Copy)]
pub struct Pacman {
    position: Column,
    frame: usize,
    opening: bool,
}

impl Default for Pacman {
    fn default() -> Self {
        Self {
            position: -1,
            frame: 0,
            opening: true,
        }
    }
}

impl Pacman {
    /// Column of the pacman's leading edge
    pub const fn position(&self) -> Column {
        self.position
    }
}

impl MatrixEffect for Pacman {
    const DELAY: Duration = Duration::from_millis(4 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        *self = Self::default();
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        self.position += 1;

        let mut matrix = matrix.suspend();
        matrix.clear();
        for (i, data) in (0..).zip(&PACMAN_FRAMES[self.frame]) {
            matrix.set_column(self.position - SPRITE_WIDTH + i, *data);
        }

        let last = PACMAN_FRAMES.len() - 1;
        if self.opening {
            self.frame += 1;
            self.opening = self.frame < last;
        } else {
            self.frame -= 1;
            self.opening = self.frame == 0;
        }

        self.position >= matrix.columns() + SPRITE_WIDTH
    }
}
