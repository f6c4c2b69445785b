//! Matrix effect library
//!
//! Every effect is a resumable state machine: its state lives in a struct
//! that survives between calls, and the caller only supplies a `reinit`
//! flag. [`Paced`] wraps an effect with the shared calling contract (reset
//! on reinit, wait for the effect's delay without blocking, one discrete
//! step, report completion). [`MatrixEffects`] keeps one paced state per
//! effect and dispatches by [`MatrixEffectId`].

mod arrow_rotate;
mod bounce;
mod fade;
mod feed;
mod heartbeat;
mod invader;
mod midline;
mod noise;
mod pacman;
mod scroll_text;
mod sprites;

use embassy_time::{Duration, Instant};
use rand::{SeedableRng, rngs::SmallRng};

pub use arrow_rotate::{ARROW_ROTATE_SEQUENCE, ArrowRotate};
pub use bounce::{Bounce, BounceBall, Scanner, Wiper};
pub use fade::Fade;
pub use feed::{ArrowScroll, Scroller, Sinewave};
pub use heartbeat::{BASELINE_ROW, Heartbeat, HeartbeatPhase};
pub use invader::Invader;
pub use midline::{Midline, MidlineBounce};
pub use noise::{RandomColumns, Spectrum, SpectrumMirrored};
pub use pacman::Pacman;
pub use scroll_text::{MESSAGE_CAPACITY, ScrollText, TextPhase};
pub use sprites::{Eyes, Hearts};

use crate::clock::elapsed_ms;
use crate::matrix::{Matrix, MatrixSink};

/// Base unit for effect step delays
pub const UNIT_DELAY_MS: u64 = 25;

const EFFECT_NAME_SCROLL_TEXT: &str = "scroll_text";
const EFFECT_NAME_MIDLINE: &str = "midline";
const EFFECT_NAME_MIDLINE_BOUNCE: &str = "midline_bounce";
const EFFECT_NAME_SCANNER: &str = "scanner";
const EFFECT_NAME_RANDOM: &str = "random";
const EFFECT_NAME_FADE: &str = "fade";
const EFFECT_NAME_SPECTRUM: &str = "spectrum";
const EFFECT_NAME_HEARTBEAT: &str = "heartbeat";
const EFFECT_NAME_HEARTS: &str = "hearts";
const EFFECT_NAME_EYES: &str = "eyes";
const EFFECT_NAME_BOUNCE_BALL: &str = "bounce_ball";
const EFFECT_NAME_ARROW_SCROLL: &str = "arrow_scroll";
const EFFECT_NAME_SCROLLER: &str = "scroller";
const EFFECT_NAME_WIPER: &str = "wiper";
const EFFECT_NAME_INVADER: &str = "invader";
const EFFECT_NAME_PACMAN: &str = "pacman";
const EFFECT_NAME_ARROW_ROTATE: &str = "arrow_rotate";
const EFFECT_NAME_SPECTRUM_MIRRORED: &str = "spectrum_mirrored";
const EFFECT_NAME_SINEWAVE: &str = "sinewave";

const EFFECT_ID_SCROLL_TEXT: u8 = 0;
const EFFECT_ID_MIDLINE: u8 = 1;
const EFFECT_ID_MIDLINE_BOUNCE: u8 = 2;
const EFFECT_ID_SCANNER: u8 = 3;
const EFFECT_ID_RANDOM: u8 = 4;
const EFFECT_ID_FADE: u8 = 5;
const EFFECT_ID_SPECTRUM: u8 = 6;
const EFFECT_ID_HEARTBEAT: u8 = 7;
const EFFECT_ID_HEARTS: u8 = 8;
const EFFECT_ID_EYES: u8 = 9;
const EFFECT_ID_BOUNCE_BALL: u8 = 10;
const EFFECT_ID_ARROW_SCROLL: u8 = 11;
const EFFECT_ID_SCROLLER: u8 = 12;
const EFFECT_ID_WIPER: u8 = 13;
const EFFECT_ID_INVADER: u8 = 14;
const EFFECT_ID_PACMAN: u8 = 15;
const EFFECT_ID_ARROW_ROTATE: u8 = 16;
const EFFECT_ID_SPECTRUM_MIRRORED: u8 = 17;
const EFFECT_ID_SINEWAVE: u8 = 18;

pub trait MatrixEffect {
    /// Minimum time between two steps
    const DELAY: Duration;

    /// Restore the initial state
    ///
    /// Called with a freshly reset (cleared, auto-updating) matrix.
    fn reset<S: MatrixSink, const D: usize>(&mut self, matrix: &mut Matrix<S, D>);

    /// Perform one discrete animation step
    ///
    /// Returns `true` once a full cycle is complete and the effect wants to
    /// be restarted on its next activation.
    fn advance<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        rng: &mut SmallRng,
    ) -> bool;
}

/// An effect together with the time of its last step
#[derive(Debug, Clone, Default)]
pub struct Paced<E> {
    effect: E,
    last_step: Option<Instant>,
}

impl<E: MatrixEffect> Paced<E> {
    pub const fn new(effect: E) -> Self {
        Self {
            effect,
            last_step: None,
        }
    }

    /// Invoke the effect once
    ///
    /// With `reinit` set the matrix and the effect start over and the step
    /// happens right away. Otherwise the call returns `false` immediately
    /// until the effect's delay has elapsed since its previous step.
    pub fn step<S: MatrixSink, const D: usize>(
        &mut self,
        matrix: &mut Matrix<S, D>,
        now: Instant,
        rng: &mut SmallRng,
        reinit: bool,
    ) -> bool {
        if reinit {
            matrix.reset();
            self.effect.reset(matrix);
            self.last_step = None;
        }

        if let Some(last) = self.last_step
            && elapsed_ms(now, last) < E::DELAY.as_millis()
        {
            return false;
        }
        self.last_step = Some(now);

        self.effect.advance(matrix, rng)
    }

    pub const fn effect(&self) -> &E {
        &self.effect
    }

    pub const fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}

/// Matrix effects in demo order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MatrixEffectId {
    #[default]
    ScrollText = EFFECT_ID_SCROLL_TEXT,
    Midline = EFFECT_ID_MIDLINE,
    MidlineBounce = EFFECT_ID_MIDLINE_BOUNCE,
    Scanner = EFFECT_ID_SCANNER,
    Random = EFFECT_ID_RANDOM,
    Fade = EFFECT_ID_FADE,
    Spectrum = EFFECT_ID_SPECTRUM,
    Heartbeat = EFFECT_ID_HEARTBEAT,
    Hearts = EFFECT_ID_HEARTS,
    Eyes = EFFECT_ID_EYES,
    BounceBall = EFFECT_ID_BOUNCE_BALL,
    ArrowScroll = EFFECT_ID_ARROW_SCROLL,
    Scroller = EFFECT_ID_SCROLLER,
    Wiper = EFFECT_ID_WIPER,
    Invader = EFFECT_ID_INVADER,
    Pacman = EFFECT_ID_PACMAN,
    ArrowRotate = EFFECT_ID_ARROW_ROTATE,
    SpectrumMirrored = EFFECT_ID_SPECTRUM_MIRRORED,
    Sinewave = EFFECT_ID_SINEWAVE,
}

impl MatrixEffectId {
    /// Number of effects in the demo rotation
    pub const COUNT: u8 = 19;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SCROLL_TEXT => Self::ScrollText,
            EFFECT_ID_MIDLINE => Self::Midline,
            EFFECT_ID_MIDLINE_BOUNCE => Self::MidlineBounce,
            EFFECT_ID_SCANNER => Self::Scanner,
            EFFECT_ID_RANDOM => Self::Random,
            EFFECT_ID_FADE => Self::Fade,
            EFFECT_ID_SPECTRUM => Self::Spectrum,
            EFFECT_ID_HEARTBEAT => Self::Heartbeat,
            EFFECT_ID_HEARTS => Self::Hearts,
            EFFECT_ID_EYES => Self::Eyes,
            EFFECT_ID_BOUNCE_BALL => Self::BounceBall,
            EFFECT_ID_ARROW_SCROLL => Self::ArrowScroll,
            EFFECT_ID_SCROLLER => Self::Scroller,
            EFFECT_ID_WIPER => Self::Wiper,
            EFFECT_ID_INVADER => Self::Invader,
            EFFECT_ID_PACMAN => Self::Pacman,
            EFFECT_ID_ARROW_ROTATE => Self::ArrowRotate,
            EFFECT_ID_SPECTRUM_MIRRORED => Self::SpectrumMirrored,
            EFFECT_ID_SINEWAVE => Self::Sinewave,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScrollText => EFFECT_NAME_SCROLL_TEXT,
            Self::Midline => EFFECT_NAME_MIDLINE,
            Self::MidlineBounce => EFFECT_NAME_MIDLINE_BOUNCE,
            Self::Scanner => EFFECT_NAME_SCANNER,
            Self::Random => EFFECT_NAME_RANDOM,
            Self::Fade => EFFECT_NAME_FADE,
            Self::Spectrum => EFFECT_NAME_SPECTRUM,
            Self::Heartbeat => EFFECT_NAME_HEARTBEAT,
            Self::Hearts => EFFECT_NAME_HEARTS,
            Self::Eyes => EFFECT_NAME_EYES,
            Self::BounceBall => EFFECT_NAME_BOUNCE_BALL,
            Self::ArrowScroll => EFFECT_NAME_ARROW_SCROLL,
            Self::Scroller => EFFECT_NAME_SCROLLER,
            Self::Wiper => EFFECT_NAME_WIPER,
            Self::Invader => EFFECT_NAME_INVADER,
            Self::Pacman => EFFECT_NAME_PACMAN,
            Self::ArrowRotate => EFFECT_NAME_ARROW_ROTATE,
            Self::SpectrumMirrored => EFFECT_NAME_SPECTRUM_MIRRORED,
            Self::Sinewave => EFFECT_NAME_SINEWAVE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SCROLL_TEXT => Some(Self::ScrollText),
            EFFECT_NAME_MIDLINE => Some(Self::Midline),
            EFFECT_NAME_MIDLINE_BOUNCE => Some(Self::MidlineBounce),
            EFFECT_NAME_SCANNER => Some(Self::Scanner),
            EFFECT_NAME_RANDOM => Some(Self::Random),
            EFFECT_NAME_FADE => Some(Self::Fade),
            EFFECT_NAME_SPECTRUM => Some(Self::Spectrum),
            EFFECT_NAME_HEARTBEAT => Some(Self::Heartbeat),
            EFFECT_NAME_HEARTS => Some(Self::Hearts),
            EFFECT_NAME_EYES => Some(Self::Eyes),
            EFFECT_NAME_BOUNCE_BALL => Some(Self::BounceBall),
            EFFECT_NAME_ARROW_SCROLL => Some(Self::ArrowScroll),
            EFFECT_NAME_SCROLLER => Some(Self::Scroller),
            EFFECT_NAME_WIPER => Some(Self::Wiper),
            EFFECT_NAME_INVADER => Some(Self::Invader),
            EFFECT_NAME_PACMAN => Some(Self::Pacman),
            EFFECT_NAME_ARROW_ROTATE => Some(Self::ArrowRotate),
            EFFECT_NAME_SPECTRUM_MIRRORED => Some(Self::SpectrumMirrored),
            EFFECT_NAME_SINEWAVE => Some(Self::Sinewave),
            _ => None,
        }
    }

    /// The next effect in demo order, wrapping back to the first
    pub fn next(self) -> Self {
        Self::from_raw((self as u8 + 1) % Self::COUNT).unwrap_or_default()
    }
}

/// State of every matrix effect, indexed by [`MatrixEffectId`]
///
/// Only the effect being stepped touches the shared matrix, so one arena can
/// hold all of them side by side without any of them being re-created.
pub struct MatrixEffects {
    rng: SmallRng,
    scroll_text: Paced<ScrollText>,
    midline: Paced<Midline>,
    midline_bounce: Paced<MidlineBounce>,
    scanner: Paced<Scanner>,
    random: Paced<RandomColumns>,
    fade: Paced<Fade>,
    spectrum: Paced<Spectrum>,
    heartbeat: Paced<Heartbeat>,
    hearts: Paced<Hearts>,
    eyes: Paced<Eyes>,
    bounce_ball: Paced<BounceBall>,
    arrow_scroll: Paced<ArrowScroll>,
    scroller: Paced<Scroller>,
    wiper: Paced<Wiper>,
    invader: Paced<Invader>,
    pacman: Paced<Pacman>,
    arrow_rotate: Paced<ArrowRotate>,
    spectrum_mirrored: Paced<SpectrumMirrored>,
    sinewave: Paced<Sinewave>,
}

impl MatrixEffects {
    /// Create the arena; `seed` drives every random draw of the effects
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            scroll_text: Paced::default(),
            midline: Paced::default(),
            midline_bounce: Paced::default(),
            scanner: Paced::default(),
            random: Paced::default(),
            fade: Paced::default(),
            spectrum: Paced::default(),
            heartbeat: Paced::default(),
            hearts: Paced::default(),
            eyes: Paced::default(),
            bounce_ball: Paced::default(),
            arrow_scroll: Paced::default(),
            scroller: Paced::default(),
            wiper: Paced::default(),
            invader: Paced::default(),
            pacman: Paced::default(),
            arrow_rotate: Paced::default(),
            spectrum_mirrored: Paced::default(),
            sinewave: Paced::default(),
        }
    }

    /// Invoke effect `id` once
    ///
    /// `message` is only read by the text scroller, and only when `reinit`
    /// is set: the scroller keeps its own copy while it runs.
    pub fn step<S: MatrixSink, const D: usize>(
        &mut self,
        id: MatrixEffectId,
        matrix: &mut Matrix<S, D>,
        now: Instant,
        message: &str,
        reinit: bool,
    ) -> bool {
        let rng = &mut self.rng;
        match id {
            MatrixEffectId::ScrollText => {
                if reinit {
                    self.scroll_text.effect_mut().load(message);
                }
                self.scroll_text.step(matrix, now, rng, reinit)
            }
            MatrixEffectId::Midline => self.midline.step(matrix, now, rng, reinit),
            MatrixEffectId::MidlineBounce => self.midline_bounce.step(matrix, now, rng, reinit),
            MatrixEffectId::Scanner => self.scanner.step(matrix, now, rng, reinit),
            MatrixEffectId::Random => self.random.step(matrix, now, rng, reinit),
            MatrixEffectId::Fade => self.fade.step(matrix, now, rng, reinit),
            MatrixEffectId::Spectrum => self.spectrum.step(matrix, now, rng, reinit),
            MatrixEffectId::Heartbeat => self.heartbeat.step(matrix, now, rng, reinit),
            MatrixEffectId::Hearts => self.hearts.step(matrix, now, rng, reinit),
            MatrixEffectId::Eyes => self.eyes.step(matrix, now, rng, reinit),
            MatrixEffectId::BounceBall => self.bounce_ball.step(matrix, now, rng, reinit),
            MatrixEffectId::ArrowScroll => self.arrow_scroll.step(matrix, now, rng, reinit),
            MatrixEffectId::Scroller => self.scroller.step(matrix, now, rng, reinit),
            MatrixEffectId::Wiper => self.wiper.step(matrix, now, rng, reinit),
            MatrixEffectId::Invader => self.invader.step(matrix, now, rng, reinit),
            MatrixEffectId::Pacman => self.pacman.step(matrix, now, rng, reinit),
            MatrixEffectId::ArrowRotate => self.arrow_rotate.step(matrix, now, rng, reinit),
            MatrixEffectId::SpectrumMirrored => {
                self.spectrum_mirrored.step(matrix, now, rng, reinit)
            }
            MatrixEffectId::Sinewave => self.sinewave.step(matrix, now, rng, reinit),
        }
    }

    pub const fn scroll_text(&self) -> &ScrollText {
        self.scroll_text.effect()
    }

    pub const fn heartbeat(&self) -> &Heartbeat {
        self.heartbeat.effect()
    }

    pub const fn bounce_ball(&self) -> &BounceBall {
        self.bounce_ball.effect()
    }
}
