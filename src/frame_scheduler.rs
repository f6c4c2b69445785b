//! Main loop orchestration and frame pacing.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller services its network work, calls [`FrameScheduler::tick`], then
//! sleeps for the returned duration. That sleep is the only blocking point of
//! the loop and never exceeds [`MAX_FRAME_BUDGET`].

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::clock::{ticks_until, wrapping_add};
use crate::color::{BLACK, Rgb};
use crate::control::{DeviceContext, FrameCommand};
use crate::demo::{DemoConfig, DemoScheduler};
use crate::effect::MatrixEffects;
use crate::filter::FilterProcessor;
use crate::matrix::{Matrix, MatrixSink};
use crate::strip::{StripConfig, StripEngine};

/// Default target frame rate (120 FPS).
pub const DEFAULT_FPS: u64 = 120;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Longest frame budget accepted, so network work is never starved
pub const MAX_FRAME_BUDGET: Duration = Duration::from_millis(10);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Configuration for everything the scheduler owns
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulerConfig {
    pub strip: StripConfig,
    pub demo: DemoConfig,
    /// Seed for the matrix effects' random source
    pub matrix_seed: u64,
}

/// Cooperative main loop for the strip and the matrix.
///
/// Each tick:
/// - Applies pending brightness and one-shot frames from the [`DeviceContext`]
/// - While animating, steps the strip engine, writes the filtered strip
///   frame and steps the demo scheduler
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(strip_driver, matrix_sink, &config, now());
///
/// loop {
///     network.poll();
///     let result = scheduler.tick(now(), &mut ctx);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<SD: StripDriver, MS: MatrixSink, const LEDS: usize, const DEVICES: usize>
{
    strip_driver: SD,
    strip: StripEngine<LEDS>,
    filters: FilterProcessor,
    output: [Rgb; LEDS],

    matrix: Matrix<MS, DEVICES>,
    effects: MatrixEffects,
    demo: DemoScheduler,

    next_frame: Instant,
    frame_duration: Duration,
}

impl<SD: StripDriver, MS: MatrixSink, const LEDS: usize, const DEVICES: usize>
    FrameScheduler<SD, MS, LEDS, DEVICES>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (120 FPS) for frame timing; all timers
    /// start counting at `start`.
    pub fn new(strip_driver: SD, matrix_sink: MS, config: &SchedulerConfig, start: Instant) -> Self {
        Self {
            strip_driver,
            strip: StripEngine::new(&config.strip, start),
            filters: FilterProcessor::new(&config.strip.filters()),
            output: [BLACK; LEDS],
            matrix: Matrix::new(matrix_sink),
            effects: MatrixEffects::new(config.matrix_seed),
            demo: DemoScheduler::new(&config.demo, start),
            next_frame: start,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }

    /// Use a custom frame duration, clamped to [`MAX_FRAME_BUDGET`].
    #[must_use]
    pub fn with_frame_duration(mut self, frame_duration: Duration) -> Self {
        self.frame_duration = frame_duration.min(MAX_FRAME_BUDGET);
        self
    }

    /// Run one main loop iteration and return timing information.
    ///
    /// When the animation is stopped nothing is stepped and the returned
    /// sleep is zero, so the caller goes straight back to its network work.
    pub fn tick(&mut self, now: Instant, ctx: &mut DeviceContext) -> FrameResult {
        if let Some(brightness) = ctx.take_brightness() {
            self.filters.brightness.set(brightness);
        }
        if let Some(command) = ctx.take_command() {
            self.apply_command(command);
        }

        if !ctx.is_animating() {
            self.next_frame = now;
            return FrameResult {
                next_deadline: now,
                sleep_duration: Duration::from_millis(0),
            };
        }

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let frame_ticks = i64::try_from(self.frame_duration.as_ticks()).unwrap_or(i64::MAX);
        let max_drift = frame_ticks.saturating_mul(2);
        if ticks_until(self.next_frame, now) < -max_drift {
            self.next_frame = now;
        }

        self.strip.tick(now);
        self.flush_strip();
        self.demo.tick(now, &mut self.matrix, &mut self.effects);

        self.next_frame = wrapping_add(self.next_frame, self.frame_duration);

        // Sleep until the deadline (zero if we're behind)
        let ahead = ticks_until(self.next_frame, now).clamp(0, frame_ticks);

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: Duration::from_ticks(ahead.unsigned_abs()),
        }
    }

    fn apply_command(&mut self, command: FrameCommand) {
        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler.apply_command] {command:?}");

        match command {
            FrameCommand::Blank => {
                self.output = [BLACK; LEDS];
                self.strip_driver.write(&self.output);
                self.matrix.clear();
            }
            FrameCommand::Solid(color) => {
                self.strip.fill_solid(color);
                self.flush_strip();
            }
            FrameCommand::Refresh => self.flush_strip(),
        }
    }

    /// Filter the strip buffer into the output frame and transmit it
    fn flush_strip(&mut self) {
        self.filters.process(self.strip.leds(), &mut self.output);
        self.strip_driver.write(&self.output);
    }

    pub const fn strip(&self) -> &StripEngine<LEDS> {
        &self.strip
    }

    pub const fn strip_mut(&mut self) -> &mut StripEngine<LEDS> {
        &mut self.strip
    }

    pub const fn strip_driver(&self) -> &SD {
        &self.strip_driver
    }

    pub const fn matrix(&self) -> &Matrix<MS, DEVICES> {
        &self.matrix
    }

    pub const fn demo(&self) -> &DemoScheduler {
        &self.demo
    }

    pub const fn demo_mut(&mut self) -> &mut DemoScheduler {
        &mut self.demo
    }

    pub const fn effects(&self) -> &MatrixEffects {
        &self.effects
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}
