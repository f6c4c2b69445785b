//! Random fills, redrawn from scratch on every step

use embassy_time::Duration;
use rand::{Rng, rngs::SmallRng};

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{Matrix, MatrixSink};

/// Every column gets a random byte
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomColumns;

impl MatrixEffect for RandomColumns {
    const DELAY: Duration = Duration::from_millis(6 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {}

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        rng: &mut SmallRng,
    ) -> bool {
        let mut matrix = matrix.suspend();
        for col in 0..matrix.columns() {
            matrix.set_column(col, rng.r#gen());
        }
        false
    }
}

/// Bar of `height` points standing on the bottom row
#[allow(clippy::cast_possible_truncation)]
const fn bottom_bar(height: u8) -> u8 {
    ((0xFF00_u16 >> height) & 0xFF) as u8
}

/// Bar of `2 * half` points centered on the middle rows
#[allow(clippy::cast_possible_truncation)]
const fn centered_bar(half: u8) -> u8 {
    ((((1_u16 << (2 * half)) - 1) << (4 - half)) & 0xFF) as u8
}

/// Spectrum analyzer look: random bar heights growing from the bottom
#[derive(Debug, Clone, Copy, Default)]
pub struct Spectrum;

impl MatrixEffect for Spectrum {
    const DELAY: Duration = Duration::from_millis(4 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {}

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        rng: &mut SmallRng,
    ) -> bool {
        let mut matrix = matrix.suspend();
        for col in 0..matrix.columns() {
            matrix.set_column(col, bottom_bar(rng.gen_range(0..=8)));
        }
        false
    }
}

/// Random bar heights mirrored about the middle rows
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumMirrored;

impl MatrixEffect for SpectrumMirrored {
    const DELAY: Duration = Duration::from_millis(4 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {}

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        rng: &mut SmallRng,
    ) -> bool {
        let mut matrix = matrix.suspend();
        for col in 0..matrix.columns() {
            matrix.set_column(col, centered_bar(rng.gen_range(0..=4)));
        }
        false
    }
}
