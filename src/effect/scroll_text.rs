//! Text scroller
//!
//! A message is fed in from the right one column per step. Loading the next
//! glyph and emitting its first column happen in the same step.

use embassy_time::Duration;
use heapless::String;
use rand::rngs::SmallRng;

use super::{MatrixEffect, UNIT_DELAY_MS};
use crate::matrix::font::{Glyph, REPLACEMENT_CHAR, glyph};
use crate::matrix::{COL_SIZE, Matrix, MatrixSink, Transform};

/// Longest message the scroller keeps, in bytes
pub const MESSAGE_CAPACITY: usize = 75;

/// Blank columns between two glyphs
const CHAR_SPACING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPhase {
    #[default]
    LoadGlyph,
    EmitGlyph,
    EmitSpacing,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollText {
    message: String<MESSAGE_CAPACITY>,
    cursor: usize,
    phase: TextPhase,
    glyph: Glyph,
    column: usize,
    spacing: usize,
}

impl ScrollText {
    /// Replace the message shown on the next run
    ///
    /// Characters outside ASCII are stored as `?`. Text past
    /// [`MESSAGE_CAPACITY`] is dropped.
    pub fn load(&mut self, message: &str) {
        self.message.clear();
        for ch in message.chars() {
            let ch = if ch.is_ascii() {
                ch
            } else {
                char::from(REPLACEMENT_CHAR)
            };
            if self.message.push(ch).is_err() {
                break;
            }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn phase(&self) -> TextPhase {
        self.phase
    }

    fn has_more(&self) -> bool {
        self.cursor < self.message.len()
    }
}

impl MatrixEffect for ScrollText {
    const DELAY: Duration = Duration::from_millis(4 * UNIT_DELAY_MS);

    fn reset<S: MatrixSink, const D: usize>(&mut self, _matrix: &mut Matrix<S, D>) {
        self.cursor = 0;
        self.phase = TextPhase::LoadGlyph;
        self.column = 0;
        self.spacing = 0;
    }

    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        _rng: &mut SmallRng,
    ) -> bool {
        let width = D * COL_SIZE;
        let mut matrix = matrix.suspend();

        if self.phase == TextPhase::LoadGlyph {
            let Some(&ch) = self.message.as_bytes().get(self.cursor) else {
                return true;
            };
            self.cursor += 1;
            self.glyph = glyph(ch);
            self.column = 0;
            self.phase = TextPhase::EmitGlyph;
        }

        matrix.transform(Transform::ShiftLeft);
        if self.phase == TextPhase::EmitGlyph {
            let data = self.glyph.columns().get(self.column).copied().unwrap_or(0);
            matrix.set_column(0, data);
            self.column += 1;
            if self.column >= self.glyph.width() {
                self.column = 0;
                self.spacing = if self.has_more() {
                    CHAR_SPACING
                } else {
                    width.saturating_sub(1)
                };
                self.phase = TextPhase::EmitSpacing;
            }
            return false;
        }

        matrix.set_column(0, 0);
        self.column += 1;
        if self.column < self.spacing {
            return false;
        }
        self.phase = TextPhase::LoadGlyph;
        !self.has_more()
    }
}
