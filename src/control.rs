//! Light control surface
//!
//! Outer handlers (HTTP, buttons, the preview window) never touch the
//! animation state directly. They flip flags and queue a one-shot frame
//! command here; the frame scheduler picks both up on its next tick.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, WHITE};
use crate::strip::DEFAULT_BRIGHTNESS;

/// Frame written once, outside of the animation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCommand {
    /// Blank both displays
    Blank,
    /// Fill the strip with one colour
    Solid(Rgb),
    /// Retransmit the current strip buffer
    Refresh,
}

const INTENT_PAUSE: &str = "pause";
const INTENT_RESUME: &str = "resume";
const INTENT_ON: &str = "on";
const INTENT_OFF: &str = "off";

/// Request coming from outside the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    Pause,
    Resume,
    LightsOn,
    LightsOff,
    SetColour(Rgb),
    SetBrightness(u8),
}

impl ControlIntent {
    /// Parse the argument-less intents by name
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            INTENT_PAUSE => Some(Self::Pause),
            INTENT_RESUME => Some(Self::Resume),
            INTENT_ON => Some(Self::LightsOn),
            INTENT_OFF => Some(Self::LightsOff),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeviceContext {
    animation_enabled: bool,
    powered: bool,
    brightness: u8,
    colour: Rgb,
    pending: Option<FrameCommand>,
    pending_brightness: Option<u8>,
}

impl Default for DeviceContext {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}

impl DeviceContext {
    /// Powered and animating at `brightness`, solid colour white
    pub const fn new(brightness: u8) -> Self {
        Self {
            animation_enabled: true,
            powered: true,
            brightness,
            colour: WHITE,
            pending: None,
            pending_brightness: None,
        }
    }

    pub fn pause(&mut self) {
        self.animation_enabled = false;
    }

    /// Let the animation run again
    ///
    /// Has no visible effect while the lights are off.
    pub fn resume(&mut self) {
        self.animation_enabled = true;
    }

    /// Stop animating and blank both displays
    pub fn lights_off(&mut self) {
        self.animation_enabled = false;
        self.powered = false;
        self.pending = Some(FrameCommand::Blank);
    }

    /// Power back on showing the stored colour, animation stopped
    pub fn lights_on(&mut self) {
        self.powered = true;
        self.animation_enabled = false;
        self.pending = Some(FrameCommand::Solid(self.colour));
    }

    /// Stop animating and show `colour` on the strip
    pub fn set_colour(&mut self, colour: Rgb) {
        self.colour = colour;
        self.powered = true;
        self.animation_enabled = false;
        self.pending = Some(FrameCommand::Solid(colour));
    }

    /// Forward a global brightness to the strip output
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.pending_brightness = Some(brightness);
        if self.powered && !self.animation_enabled && self.pending.is_none() {
            self.pending = Some(FrameCommand::Refresh);
        }
    }

    pub fn apply(&mut self, intent: ControlIntent) {
        #[cfg(feature = "esp32-log")]
        println!("[DeviceContext.apply] {intent:?}");

        match intent {
            ControlIntent::Pause => self.pause(),
            ControlIntent::Resume => self.resume(),
            ControlIntent::LightsOn => self.lights_on(),
            ControlIntent::LightsOff => self.lights_off(),
            ControlIntent::SetColour(colour) => self.set_colour(colour),
            ControlIntent::SetBrightness(brightness) => self.set_brightness(brightness),
        }
    }

    /// Whether the main loop should advance the animations
    pub const fn is_animating(&self) -> bool {
        self.animation_enabled && self.powered
    }

    pub const fn is_animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub const fn is_powered(&self) -> bool {
        self.powered
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn colour(&self) -> Rgb {
        self.colour
    }

    /// Take the pending one-shot frame, if any
    pub fn take_command(&mut self) -> Option<FrameCommand> {
        self.pending.take()
    }

    /// Take the pending brightness change, if any
    pub fn take_brightness(&mut self) -> Option<u8> {
        self.pending_brightness.take()
    }
}
