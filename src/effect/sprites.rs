//! Static sprites drawn mirrored about evenly spaced centers

use embassy_time::Duration;
use rand::{Rng, rngs::SmallRng};

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{Column, Matrix, MatrixSink};

/// Half sprite, outermost column first
type HalfSprite = [u8; 4];

const HEART_FULL: HalfSprite = [0x1C, 0x3E, 0x7E, 0xFC];
const HEART_EMPTY: HalfSprite = [0x1C, 0x22, 0x42, 0x84];

const EYE_OPEN: HalfSprite = [0x18, 0x3C, 0x66, 0x66];
const EYE_CLOSED: HalfSprite = [0x18, 0x3C, 0x3C, 0x3C];

const EYE_COUNT: usize = 2;

/// Out of 1000 draws, how many keep the eyes open
const EYES_OPEN_ABOVE: u16 = 100;

/// Draw `count` copies of `half` and its mirror image, evenly spaced
fn draw_mirrored<S: MatrixSink, const D: usize>(
    matrix: &mut Matrix<S, D>,
    half: &HalfSprite,
    count: usize,
) {
    let count = Column::try_from(count).unwrap_or(1);
    let spacing = matrix.columns() / (count + 1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let width = half.len() as Column;

    let mut matrix = matrix.suspend();
    matrix.clear();
    for n in 1..=count {
        let center = n * spacing;
        for (i, data) in (0..).zip(half) {
            matrix.set_column(center - width + i, *data);
            matrix.set_column(center + width - 1 - i, *data);
        }
    }
}

/// Row of hearts beating between outline and filled
#[derive(Debug, Clone, Copy, Default)]
pub struct Hearts {
    full: bool,
}

impl MatrixEffect for Hearts {
    const DELAY: Duration = Duration::from_millis(12 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.full = false;
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let sprite = if self.full { &HEART_FULL } else { &HEART_EMPTY };
        draw_mirrored(matrix, sprite, D / 2 + 1);
        self.full = !self.full;
        false
    }
}

/// A pair of eyes blinking at random
#[derive(Debug, Clone, Copy, Default)]
pub struct Eyes;

impl MatrixEffect for Eyes {
    const DELAY: Duration = Duration::from_millis(12 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {}

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        rng: &mut SmallRng,
    ) -> bool {
        let open = rng.gen_range(0..1000_u16) > EYES_OPEN_ABOVE;
        let sprite = if open { &EYE_OPEN } else { &EYE_CLOSED };
        draw_mirrored(matrix, sprite, EYE_COUNT);
        false
    }
}
