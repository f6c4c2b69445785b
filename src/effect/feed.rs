//! Endless scrollers: shift the display left and feed a new column in on
//! the right from a repeating pattern.

use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{COL_SIZE, Matrix, MatrixSink, Transform};

const ARROW: [u8; 4] = [0x3C, 0x66, 0xC3, 0x99];
const SINEWAVE: [u8; 10] = [0x09, 0x08, 0x06, 0x01, 0x06, 0x18, 0x60, 0x80, 0x60, 0x10];

const SCROLLER_BAR_WIDTH: usize = 3;

fn feed<S: MatrixSink, const D: usize>(matrix: &mut Matrix<S, D>, value: u8) {
    let mut matrix = matrix.suspend();
    matrix.transform(Transform::ShiftLeft);
    matrix.set_column(0, value);
}

/// Chevrons marching across the display
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowScroll {
    index: usize,
}

impl MatrixEffect for ArrowScroll {
    const DELAY: Duration = Duration::from_millis(3 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.index = 0;
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        feed(matrix, ARROW[self.index]);
        self.index = (self.index + 1) % ARROW.len();
        false
    }
}

/// Evenly spaced full-height bars
#[derive(Debug, Clone, Copy, Default)]
pub struct Scroller {
    index: usize,
}

impl MatrixEffect for Scroller {
    const DELAY: Duration = Duration::from_millis(2 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.index = 0;
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let period = (D * COL_SIZE / 3).max(2 * SCROLLER_BAR_WIDTH);
        let value = if self.index < SCROLLER_BAR_WIDTH { 0xFF } else { 0 };
        feed(matrix, value);
        self.index = (self.index + 1) % period;
        false
    }
}

/// One-pixel sine trace
#[derive(Debug, Clone, Copy, Default)]
pub struct Sinewave {
    index: usize,
}

impl MatrixEffect for Sinewave {
    const DELAY: Duration = Duration::from_millis(2 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.index = 0;
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        feed(matrix, SINEWAVE[self.index]);
        self.index = (self.index + 1) % SINEWAVE.len();
        false
    }
}
