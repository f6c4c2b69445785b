#![no_std]

pub mod clock;
pub mod color;
pub mod control;
pub mod demo;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod math8;
pub mod matrix;
pub mod strip;

pub use control::{ControlIntent, DeviceContext, FrameCommand};
pub use demo::{DemoConfig, DemoScheduler, MessageError};
pub use effect::{MatrixEffect, MatrixEffectId, MatrixEffects};
pub use filter::FilterProcessorConfig;
pub use frame_scheduler::{FrameResult, FrameScheduler, SchedulerConfig};
pub use matrix::{Matrix, MatrixSink, Transform};
pub use strip::{StripConfig, StripEngine, StripPatternId};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
