//! Dot-matrix framebuffer for chained 8x8 MAX7219 devices.
//!
//! The buffer is stored per device as eight column bytes, bit `r` of a
//! column byte being row `r` (row 0 at the top). Effects address the
//! display as one long strip of columns: column 0 is the rightmost physical
//! column and column numbers grow to the left, so "shift left" moves data
//! towards higher column numbers.
//!
//! While auto-update is on, every mutation is transmitted to the sink right
//! away. Multi-step mutations go through [`Matrix::suspend`], which returns
//! a [`RedrawGuard`] that transmits once when dropped.

pub mod font;

use core::ops::{Deref, DerefMut};

/// Number of rows of one device
pub const ROW_SIZE: u8 = 8;

/// Number of columns of one device
pub const COL_SIZE: usize = 8;

/// Highest intensity supported by the MAX7219
pub const MAX_INTENSITY: u8 = 15;

/// Column coordinate; may be negative or past the end for off-screen drawing
pub type Column = i16;

/// Column bytes of one device
pub type DeviceColumns = [u8; COL_SIZE];

/// Hardware side of the matrix
pub trait MatrixSink {
    /// Transmit the whole framebuffer, one entry per device
    fn write(&mut self, frame: &[DeviceColumns]);

    /// Set the display intensity (0-15)
    fn set_intensity(&mut self, _intensity: u8) {}
}

/// Whole-display transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Move every column one step to the left
    ShiftLeft,
    /// Move every column one step to the right
    ShiftRight,
    /// Move every row one step up
    ShiftUp,
    /// Move every row one step down
    ShiftDown,
    /// Mirror each device left to right
    FlipLeftRight,
    /// Mirror each device top to bottom
    FlipUpDown,
    /// Rotate each device 90 degrees clockwise
    RotateClockwise,
    /// Invert every point
    Invert,
}

pub struct Matrix<S: MatrixSink, const DEVICES: usize> {
    sink: S,
    buffer: [DeviceColumns; DEVICES],
    auto_update: bool,
    dirty: bool,
    intensity: u8,
}

impl<S: MatrixSink, const DEVICES: usize> Matrix<S, DEVICES> {
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            buffer: [[0; COL_SIZE]; DEVICES],
            auto_update: true,
            dirty: false,
            intensity: MAX_INTENSITY / 2,
        }
    }

    /// Total number of columns across all devices
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn columns(&self) -> Column {
        (DEVICES * COL_SIZE) as Column
    }

    pub const fn device_count(&self) -> usize {
        DEVICES
    }

    /// Raw framebuffer, one entry per device
    pub const fn buffer(&self) -> &[DeviceColumns; DEVICES] {
        &self.buffer
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub const fn intensity(&self) -> u8 {
        self.intensity
    }

    pub const fn is_auto_update(&self) -> bool {
        self.auto_update
    }

    /// Bring the display back to its initial state
    ///
    /// Half intensity, auto-update on and an empty framebuffer.
    pub fn reset(&mut self) {
        self.set_intensity(MAX_INTENSITY / 2);
        self.auto_update = true;
        self.clear();
    }

    /// Stop transmitting until the returned guard is dropped
    pub fn suspend(&mut self) -> RedrawGuard<'_, S, DEVICES> {
        self.auto_update = false;
        RedrawGuard { matrix: self }
    }

    /// Turn auto-update back on and transmit pending changes
    fn resume(&mut self) {
        self.auto_update = true;
        if self.dirty {
            self.flush();
        }
    }

    /// Transmit the framebuffer now, whatever the update mode
    pub fn flush(&mut self) {
        self.sink.write(&self.buffer);
        self.dirty = false;
    }

    fn changed(&mut self) {
        self.dirty = true;
        if self.auto_update {
            self.flush();
        }
    }

    /// Set the display intensity, clamped to [`MAX_INTENSITY`]
    pub fn set_intensity(&mut self, intensity: u8) {
        self.intensity = intensity.min(MAX_INTENSITY);
        self.sink.set_intensity(self.intensity);
    }

    /// Switch every point off
    pub fn clear(&mut self) {
        self.buffer = [[0; COL_SIZE]; DEVICES];
        self.changed();
    }

    fn locate(col: Column) -> Option<(usize, usize)> {
        let col = usize::try_from(col).ok()?;
        let device = col / COL_SIZE;
        (device < DEVICES).then_some((device, col % COL_SIZE))
    }

    /// Column byte at `col`, or `None` when off-screen
    pub fn column(&self, col: Column) -> Option<u8> {
        let (device, local) = Self::locate(col)?;
        Some(self.buffer[device][local])
    }

    /// Set all eight points of a column
    ///
    /// Off-screen columns are ignored and reported by returning `false`.
    pub fn set_column(&mut self, col: Column, value: u8) -> bool {
        let Some((device, local)) = Self::locate(col) else {
            return false;
        };
        self.buffer[device][local] = value;
        self.changed();
        true
    }

    /// Set row `row` of every device to the same eight-point pattern
    ///
    /// Bit `c` of `value` lands in local column `c` of each device.
    pub fn set_row(&mut self, row: u8, value: u8) -> bool {
        if row >= ROW_SIZE {
            return false;
        }
        let mask = 1 << row;
        for device in &mut self.buffer {
            for (local, column) in device.iter_mut().enumerate() {
                if value & (1 << local) == 0 {
                    *column &= !mask;
                } else {
                    *column |= mask;
                }
            }
        }
        self.changed();
        true
    }

    /// Switch a single point on or off
    pub fn set_point(&mut self, row: u8, col: Column, on: bool) -> bool {
        if row >= ROW_SIZE {
            return false;
        }
        let Some((device, local)) = Self::locate(col) else {
            return false;
        };
        let mask = 1 << row;
        if on {
            self.buffer[device][local] |= mask;
        } else {
            self.buffer[device][local] &= !mask;
        }
        self.changed();
        true
    }

    /// Whether the point at (`row`, `col`) is lit
    pub fn point(&self, row: u8, col: Column) -> bool {
        row < ROW_SIZE && self.column(col).is_some_and(|c| c & (1 << row) != 0)
    }

    /// Load eight column bytes into one device
    ///
    /// `columns[0]` lands in the device's highest (leftmost) column.
    pub fn set_device_buffer(&mut self, device: usize, columns: &DeviceColumns) -> bool {
        let Some(target) = self.buffer.get_mut(device) else {
            return false;
        };
        for (i, value) in columns.iter().enumerate() {
            target[COL_SIZE - 1 - i] = *value;
        }
        self.changed();
        true
    }

    /// Apply a transformation, filling vacated points with zeros
    pub fn transform(&mut self, transform: Transform) {
        self.apply_transform(transform, false);
    }

    /// Apply a transformation, feeding points that fall off one edge back in
    /// at the opposite edge
    pub fn transform_wrapping(&mut self, transform: Transform) {
        self.apply_transform(transform, true);
    }

    fn apply_transform(&mut self, transform: Transform, wrap: bool) {
        if DEVICES == 0 {
            return;
        }
        match transform {
            Transform::ShiftLeft => {
                let last = self.buffer[DEVICES - 1][COL_SIZE - 1];
                let mut carry = if wrap { last } else { 0 };
                for device in &mut self.buffer {
                    for column in device.iter_mut() {
                        carry = core::mem::replace(column, carry);
                    }
                }
            }
            Transform::ShiftRight => {
                let first = self.buffer[0][0];
                let mut carry = if wrap { first } else { 0 };
                for device in self.buffer.iter_mut().rev() {
                    for column in device.iter_mut().rev() {
                        carry = core::mem::replace(column, carry);
                    }
                }
            }
            Transform::ShiftUp => {
                for column in self.buffer.iter_mut().flatten() {
                    let top = *column & 1;
                    *column >>= 1;
                    if wrap {
                        *column |= top << 7;
                    }
                }
            }
            Transform::ShiftDown => {
                for column in self.buffer.iter_mut().flatten() {
                    let bottom = *column >> 7;
                    *column <<= 1;
                    if wrap {
                        *column |= bottom;
                    }
                }
            }
            Transform::FlipLeftRight => {
                for device in &mut self.buffer {
                    device.reverse();
                }
            }
            Transform::FlipUpDown => {
                for column in self.buffer.iter_mut().flatten() {
                    *column = column.reverse_bits();
                }
            }
            Transform::RotateClockwise => {
                for device in &mut self.buffer {
                    *device = rotate_clockwise(device);
                }
            }
            Transform::Invert => {
                for column in self.buffer.iter_mut().flatten() {
                    *column = !*column;
                }
            }
        }
        self.changed();
    }
}

/// Rotate one device 90 degrees clockwise as seen on the display
///
/// Local column `j` sits at physical x = 7 - j, so a point at (row r, column
/// j) moves to (row 7 - j, column r).
fn rotate_clockwise(device: &DeviceColumns) -> DeviceColumns {
    let mut rotated = [0; COL_SIZE];
    for (j, column) in device.iter().enumerate() {
        for (r, target) in rotated.iter_mut().enumerate() {
            if column & (1 << r) != 0 {
                *target |= 1 << (COL_SIZE - 1 - j);
            }
        }
    }
    rotated
}

/// Scoped redraw suspension
///
/// Dereferences to the matrix. Dropping the guard turns auto-update back on
/// and transmits the accumulated changes in one go, on every exit path.
pub struct RedrawGuard<'a, S: MatrixSink, const DEVICES: usize> {
    matrix: &'a mut Matrix<S, DEVICES>,
}

impl<S: MatrixSink, const DEVICES: usize> Deref for RedrawGuard<'_, S, DEVICES> {
    type Target = Matrix<S, DEVICES>;

    fn deref(&self) -> &Self::Target {
        self.matrix
    }
}

impl<S: MatrixSink, const DEVICES: usize> DerefMut for RedrawGuard<'_, S, DEVICES> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.matrix
    }
}

impl<S: MatrixSink, const DEVICES: usize> Drop for RedrawGuard<'_, S, DEVICES> {
    fn drop(&mut self) {
        self.matrix.resume();
    }
}
