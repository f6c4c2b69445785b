//! Bouncing effects
//!
//! All of them move a position back and forth with [`Bounce`], which flips
//! direction exactly when the position reaches 0 or the far end.

use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{Column, Matrix, MatrixSink};

/// Position oscillating between 0 and a far end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    position: Column,
    forward: bool,
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new(0, true)
    }
}

impl Bounce {
    pub const fn new(position: Column, forward: bool) -> Self {
        Self { position, forward }
    }

    /// Move one step towards the current direction, clamped to `[0, max]`
    ///
    /// The direction reverses on the step that lands on either end.
    pub fn advance(&mut self, max: Column) -> Column {
        let max = max.max(0);
        let next = if self.forward {
            self.position.saturating_add(1)
        } else {
            self.position.saturating_sub(1)
        };
        self.position = next.clamp(0, max);

        if self.position <= 0 {
            self.forward = true;
        } else if self.position >= max {
            self.forward = false;
        }
        self.position
    }

    pub const fn position(&self) -> Column {
        self.position
    }

    pub const fn is_forward(&self) -> bool {
        self.forward
    }
}

fn fill_columns<S: MatrixSink, const D: usize>(
    matrix: &mut Matrix<S, D>,
    start: Column,
    width: Column,
    value: u8,
) {
    for col in start..start + width {
        matrix.set_column(col, value);
    }
}

const SCANNER_WIDTH: Column = 3;

/// Full-height bar sweeping across the display
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    bar: Bounce,
}

impl Scanner {
    pub const fn bar(&self) -> &Bounce {
        &self.bar
    }
}

impl MatrixEffect for Scanner {
    const DELAY: Duration = Duration::from_millis(2 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.bar = Bounce::default();
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let mut matrix = matrix.suspend();
        matrix.clear();
        fill_columns(&mut *matrix, self.bar.position(), SCANNER_WIDTH, 0xFF);
        self.bar.advance(matrix.columns() - SCANNER_WIDTH);
        false
    }
}

const BALL_WIDTH: Column = 2;
const BALL_ROWS: u8 = 0x18;

/// Small ball bouncing between the display edges
#[derive(Debug, Clone, Copy, Default)]
pub struct BounceBall {
    ball: Bounce,
}

impl BounceBall {
    pub const fn ball(&self) -> &Bounce {
        &self.ball
    }
}

impl MatrixEffect for BounceBall {
    const DELAY: Duration = Duration::from_millis(2 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.ball = Bounce::default();
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let mut matrix = matrix.suspend();
        matrix.clear();
        fill_columns(&mut *matrix, self.ball.position(), BALL_WIDTH, BALL_ROWS);
        self.ball.advance(matrix.columns() - BALL_WIDTH);
        false
    }
}

/// Column wipe: fills the display on the way out, clears it on the way back
#[derive(Debug, Clone, Copy, Default)]
pub struct Wiper {
    edge: Bounce,
}

impl MatrixEffect for Wiper {
    const DELAY: Duration = Duration::from_millis(UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.edge = Bounce::default();
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let columns = matrix.columns();
        if self.edge.is_forward() {
            matrix.set_column(self.edge.position(), 0xFF);
            self.edge.advance(columns);
        } else {
            let col = self.edge.advance(columns);
            matrix.set_column(col, 0);
        }
        false
    }
}
