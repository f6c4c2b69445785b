//! ECG trace drawn point by point from right to left
//!
//! Each traversal draws a flat lead-in, a spike up to the top row, a drop to
//! the bottom row, a return to the baseline and a flat lead-out. The next
//! traversal follows the same path erasing it.

use embassy_time::Duration;
use rand::rngs::SmallRng;

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::{COL_SIZE, Column, Matrix, MatrixSink, ROW_SIZE};

/// Row of the flat parts of the trace
pub const BASELINE_ROW: u8 = 4;

/// The spike starts one device width left of the display's middle
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const LEAD_IN_OFFSET: Column = COL_SIZE as Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeartbeatPhase {
    #[default]
    LeadIn,
    UpStroke,
    DownStroke,
    ReturnStroke,
    LeadOut,
}

#[derive(Debug, Clone, Copy)]
pub struct Heartbeat {
    phase: HeartbeatPhase,
    row: u8,
    col: Column,
    drawing: bool,
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self {
            phase: HeartbeatPhase::LeadIn,
            row: BASELINE_ROW,
            col: 0,
            drawing: true,
        }
    }
}

impl Heartbeat {
    pub const fn phase(&self) -> HeartbeatPhase {
        self.phase
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> Column {
        self.col
    }

    /// Whether the current traversal lights points or erases them
    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn last_column(devices: usize) -> Column {
    (devices * COL_SIZE) as Column - 1
}

impl MatrixEffect for Heartbeat {
    const DELAY: Duration = Duration::from_millis(UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        *self = Self {
            col: last_column(D),
            ..Self::default()
        };
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        matrix.set_point(self.row, self.col, self.drawing);

        let last = last_column(D);
        match self.phase {
            HeartbeatPhase::LeadIn => {
                if self.col <= ((last + 1) / 2 + LEAD_IN_OFFSET).min(last) {
                    self.phase = HeartbeatPhase::UpStroke;
                }
                self.col -= 1;
            }
            HeartbeatPhase::UpStroke => {
                if self.row > 0 {
                    self.row -= 1;
                    self.col -= 1;
                } else {
                    self.phase = HeartbeatPhase::DownStroke;
                }
            }
            HeartbeatPhase::DownStroke => {
                if self.row < ROW_SIZE - 1 {
                    self.row += 1;
                    self.col -= 1;
                } else {
                    self.phase = HeartbeatPhase::ReturnStroke;
                }
            }
            HeartbeatPhase::ReturnStroke => {
                if self.row > BASELINE_ROW {
                    self.row -= 1;
                    self.col -= 1;
                } else {
                    self.phase = HeartbeatPhase::LeadOut;
                }
            }
            HeartbeatPhase::LeadOut => {
                // Column 0 is the last one drawn; the next traversal starts
                // on the following step.
                self.col -= 1;
                if self.col < 0 {
                    self.col = last;
                    self.drawing = !self.drawing;
                    self.phase = HeartbeatPhase::LeadIn;
                }
            }
        }
        false
    }
}
