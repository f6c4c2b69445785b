//! Demo scheduler
//!
//! Cycles the matrix through every effect, spending a fixed number of
//! seconds on each. Effect 0 is the text scroller, which first walks through
//! the whole message list (one message per period) before handing over to
//! effect 1.

use embassy_time::Instant;
use heapless::{String, Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::elapsed_ms;
use crate::effect::{MESSAGE_CAPACITY, MatrixEffectId, MatrixEffects};
use crate::matrix::{Matrix, MatrixSink};

/// Default time spent on each effect
pub const DEFAULT_EFFECT_DURATION_SECS: u8 = 10;

/// Most messages the scroller rotates through
pub const MAX_MESSAGES: usize = 8;

const SECOND_MS: u64 = 1000;

pub type Message = String<MESSAGE_CAPACITY>;

#[derive(Debug, Clone, Copy)]
pub struct DemoConfig {
    /// Seconds each effect (and each message) stays on
    pub effect_duration_secs: u8,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            effect_duration_secs: DEFAULT_EFFECT_DURATION_SECS,
        }
    }
}

/// Reasons a message is not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    /// Longer than the scroller's buffer
    TooLong,
    /// The list already holds [`MAX_MESSAGES`] messages
    ListFull,
}

pub struct DemoScheduler {
    duration_secs: u8,
    current: MatrixEffectId,
    countdown: u8,
    last_second: Instant,
    in_messages: bool,
    message_index: usize,
    restart: bool,
    messages: Vec<Message, MAX_MESSAGES>,
}

impl DemoScheduler {
    /// Create a scheduler starting at effect 0, its first second counted
    /// from `start`
    pub fn new(config: &DemoConfig, start: Instant) -> Self {
        let duration_secs = config.effect_duration_secs.max(1);
        Self {
            duration_secs,
            current: MatrixEffectId::ScrollText,
            countdown: duration_secs,
            last_second: start,
            in_messages: false,
            message_index: 0,
            restart: true,
            messages: Vec::new(),
        }
    }

    /// Append a message to the scroller's rotation
    pub fn push_message(&mut self, text: &str) -> Result<(), MessageError> {
        let message = Message::try_from(text).map_err(|()| MessageError::TooLong)?;
        self.messages
            .push(message)
            .map_err(|_| MessageError::ListFull)
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.message_index = 0;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Run one scheduler step
    ///
    /// Counts down once per elapsed second, switches state when the
    /// countdown runs out, then steps exactly one effect. That effect is
    /// re-initialized right after a switch or after it reported a finished
    /// cycle.
    pub fn tick<S: MatrixSink, const D: usize>(
        &mut self,
        now: Instant,
        matrix: &mut Matrix<S, D>,
        effects: &mut MatrixEffects,
    ) {
        if elapsed_ms(now, self.last_second) >= SECOND_MS {
            self.last_second = now;
            self.countdown = self.countdown.saturating_sub(1);
            if self.countdown == 0 {
                self.countdown = self.duration_secs;
                self.change();
            }
        }

        if self.current == MatrixEffectId::ScrollText {
            if self.messages.is_empty() {
                self.in_messages = false;
                self.current = self.current.next();
                self.restart = true;
            } else {
                self.in_messages = true;
            }
        }

        let message = self
            .messages
            .get(self.message_index)
            .map_or("", Message::as_str);
        self.restart = effects.step(self.current, matrix, now, message, self.restart);
    }

    /// Move to the next message or effect
    fn change(&mut self) {
        if self.in_messages {
            self.message_index += 1;
            if self.message_index >= self.messages.len() {
                self.message_index = 0;
                self.in_messages = false;
                self.current = self.current.next();
            }
        } else {
            self.current = self.current.next();
        }
        self.restart = true;

        #[cfg(feature = "esp32-log")]
        println!(
            "[DemoScheduler.change] effect={} message={}",
            self.current.as_str(),
            self.message_index
        );
    }

    /// Switch to `effect` right away and give it a full period from `now`
    pub fn jump_to(&mut self, effect: MatrixEffectId, now: Instant) {
        self.current = effect;
        self.in_messages = false;
        self.message_index = 0;
        self.countdown = self.duration_secs;
        self.last_second = now;
        self.restart = true;

        #[cfg(feature = "esp32-log")]
        println!("[DemoScheduler.jump_to] effect={}", effect.as_str());
    }

    pub const fn current(&self) -> MatrixEffectId {
        self.current
    }

    /// Seconds left before the next switch
    pub const fn countdown(&self) -> u8 {
        self.countdown
    }

    pub const fn in_messages(&self) -> bool {
        self.in_messages
    }

    pub const fn message_index(&self) -> usize {
        self.message_index
    }
}
