use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{Bounce, MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{Matrix, MatrixSink, ROW_SIZE};

/// Lowest row of the middle pair
const MIDDLE_ROW: u8 = ROW_SIZE / 2 - 1;

/// Two full rows across the vertical middle
#[derive(Debug, Clone, Copy, Default)]
pub struct Midline;

impl MatrixEffect for Midline {
    const DELAY: Duration = Duration::from_millis(6 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, matrix: &mut Matrix<S, D>) {
        let mut matrix = matrix.suspend();
        matrix.set_row(MIDDLE_ROW, 0xFF);
        matrix.set_row(MIDDLE_ROW + 1, 0xFF);
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        _matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        false
    }
}

/// Two full rows moving apart and back together, mirrored about the middle
#[derive(Debug, Clone, Copy)]
pub struct MidlineBounce {
    row: Bounce,
}

impl Default for MidlineBounce {
    fn default() -> Self {
        Self {
            row: Bounce::new(MIDDLE_ROW.into(), false),
        }
    }
}

impl MidlineBounce {
    pub const fn row(&self) -> &Bounce {
        &self.row
    }
}

impl MatrixEffect for MidlineBounce {
    const DELAY: Duration = Duration::from_millis(6 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        *self = Self::default();
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let row = u8::try_from(self.row.position()).unwrap_or(MIDDLE_ROW);

        let mut matrix = matrix.suspend();
        matrix.clear();
        matrix.set_row(row, 0xFF);
        matrix.set_row(ROW_SIZE - 1 - row, 0xFF);

        self.row.advance(MIDDLE_ROW.into());
        false
    }
}
