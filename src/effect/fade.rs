use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{Bounce, MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{MAX_INTENSITY, Matrix, MatrixSink};

/// Fully lit display breathing through every intensity level
#[derive(Debug, Clone, Copy, Default)]
pub struct Fade {
    level: Bounce,
}

impl MatrixEffect for Fade {
    const DELAY: Duration = Duration::from_millis(8 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, matrix: &mut Matrix<S, D>) {
        self.level = Bounce::default();
        matrix.set_intensity(0);

        let mut matrix = matrix.suspend();
        for col in 0..matrix.columns() {
            matrix.set_column(col, 0xFF);
        }
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let level = self.level.advance(MAX_INTENSITY.into());
        matrix.set_intensity(u8::try_from(level).unwrap_or(MAX_INTENSITY));
        false
    }
}
