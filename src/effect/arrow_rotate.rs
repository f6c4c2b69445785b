//! Arrow spinning in place while sliding out and back

use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{DeviceColumns, Matrix, MatrixSink, Transform};

const ARROW: DeviceColumns = [0x00, 0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x00];

/// Transformations applied in order, one per step, with wraparound
pub const ARROW_ROTATE_SEQUENCE: [Transform; 21] = {
    use Transform::{RotateClockwise as RC, ShiftLeft as SL, ShiftRight as SR};
    [
        RC, RC, SR, SR, SR, SR, SR, SR, SR, SR, RC, RC, SL, SL, SL, SL, SL, SL, SL, SL, RC,
    ]
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowRotate {
    index: usize,
}

impl ArrowRotate {
    /// Steps taken in the current sequence
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl MatrixEffect for ArrowRotate {
    const DELAY: Duration = Duration::from_millis(8 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, matrix: &mut Matrix<S, D>) {
        self.index = 0;

        let mut matrix = matrix.suspend();
        for device in 0..D {
            matrix.set_device_buffer(device, &ARROW);
        }
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let Some(step) = ARROW_ROTATE_SEQUENCE.get(self.index) else {
            return true;
        };
        matrix.transform_wrapping(*step);
        self.index += 1;
        self.index >= ARROW_ROTATE_SEQUENCE.len()
    }
}
