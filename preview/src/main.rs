//! Desktop preview app for marquee-composer
//!
//! Shows the LED strip and the dot-matrix display side by side and drives the
//! frame scheduler once per UI frame with synthetic time. The buttons go
//! through the same control surface as the device's HTTP handlers.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use marquee_composer::{
    DeviceContext, FrameScheduler, Instant, MatrixEffectId, MatrixSink, Rgb, SchedulerConfig,
    StripDriver, matrix::DeviceColumns,
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 60;

/// Number of chained 8x8 devices in the simulated matrix
const DEVICES: usize = 4;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

const DEFAULT_MESSAGES: [&str; 3] = ["Hello!", "marquee-composer", "12:34"];

const MATRIX_ON: egui::Color32 = egui::Color32::from_rgb(255, 40, 20);
const MATRIX_OFF: egui::Color32 = egui::Color32::from_rgb(40, 10, 8);

/// Keeps the last frame written to the strip
#[derive(Default)]
struct PreviewStrip {
    frame: Vec<Rgb>,
}

impl StripDriver for PreviewStrip {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

/// Keeps the last frame and intensity sent to the matrix
#[derive(Default)]
struct PreviewMatrix {
    frame: Vec<DeviceColumns>,
    intensity: u8,
}

impl MatrixSink for PreviewMatrix {
    fn write(&mut self, frame: &[DeviceColumns]) {
        self.frame.clear();
        self.frame.extend_from_slice(frame);
    }

    fn set_intensity(&mut self, intensity: u8) {
        self.intensity = intensity;
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("Marquee Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "marquee-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: FrameScheduler<PreviewStrip, PreviewMatrix, LED_COUNT, DEVICES>,
    /// Control surface shared with the "handlers" below
    device: DeviceContext,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    brightness: u8,
    color: [u8; 3],
}

impl PreviewApp {
    fn new() -> Self {
        let config = SchedulerConfig {
            matrix_seed: 0x5EED,
            ..SchedulerConfig::default()
        };
        let mut scheduler = FrameScheduler::new(
            PreviewStrip::default(),
            PreviewMatrix::default(),
            &config,
            Instant::from_millis(0),
        );
        for message in DEFAULT_MESSAGES {
            if let Err(err) = scheduler.demo_mut().push_message(message) {
                eprintln!("message {message:?} rejected: {err:?}");
            }
        }

        let brightness = config.strip.brightness;
        Self {
            scheduler,
            device: DeviceContext::new(brightness),
            t_ms: 0,
            last_frame: StdInstant::now(),
            time_scale: 1.0,
            brightness,
            color: [255, 255, 255],
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        let delta_ms_f64 = if delta_ms_f64.is_finite() {
            #[allow(clippy::cast_precision_loss)]
            delta_ms_f64.clamp(0.0, u64::MAX as f64)
        } else {
            0.0
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = delta_ms_f64 as u64;
        self.t_ms = self.t_ms.wrapping_add(delta_ms);
    }

    fn draw_strip(&self, ui: &mut egui::Ui) {
        let frame = &self.scheduler.strip_driver().frame;
        let available_width = ui.available_width();
        let led_pitch = LED_SIZE + LED_GAP;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
        let rows = LED_COUNT.div_ceil(leds_per_row);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * led_pitch;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in frame.iter().enumerate() {
            let x = origin.x + (i % leds_per_row) as f32 * led_pitch;
            let y = origin.y + (i / leds_per_row) as f32 * led_pitch;
            let rect =
                egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(LED_SIZE, LED_SIZE));
            painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b));
        }
    }

    fn draw_matrix(&self, ui: &mut egui::Ui) {
        let sink = self.scheduler.matrix().sink();
        let columns = sink.frame.len() * 8;
        let dot_pitch = LED_SIZE + LED_GAP;

        #[allow(clippy::cast_precision_loss)]
        let size = egui::vec2(columns as f32 * dot_pitch, 8.0 * dot_pitch);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;

        // Column 0 is the rightmost physical column
        #[allow(clippy::cast_precision_loss)]
        for (col, value) in sink.frame.iter().flatten().enumerate() {
            let x = origin.x + (columns - 1 - col) as f32 * dot_pitch;
            for row in 0..8 {
                let y = origin.y + row as f32 * dot_pitch;
                let color = if value & (1 << row) == 0 {
                    MATRIX_OFF
                } else {
                    MATRIX_ON.gamma_multiply(f32::from(sink.intensity + 1) / 16.0)
                };
                painter.circle_filled(
                    egui::pos2(x + LED_SIZE / 2.0, y + LED_SIZE / 2.0),
                    LED_SIZE / 2.0,
                    color,
                );
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.scheduler
            .tick(Instant::from_millis(self.t_ms), &mut self.device);

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏸ Pause").clicked() {
                    self.device.pause();
                }
                if ui.button("▶ Resume").clicked() {
                    self.device.resume();
                }
                if ui.button("On").clicked() {
                    self.device.lights_on();
                }
                if ui.button("Off").clicked() {
                    self.device.lights_off();
                }

                ui.add_space(16.0);
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));

                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Colour:");
                if ui.color_edit_button_srgb(&mut self.color).changed() {
                    self.device.set_colour(Rgb {
                        r: self.color[0],
                        g: self.color[1],
                        b: self.color[2],
                    });
                }

                ui.add_space(8.0);
                ui.label("Brightness:");
                let old_brightness = self.brightness;
                ui.add(egui::DragValue::new(&mut self.brightness).range(0u8..=255u8));
                if self.brightness != old_brightness {
                    self.device.set_brightness(self.brightness);
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let demo = self.scheduler.demo();
                let current = demo.current();
                let countdown = demo.countdown();

                ui.label("Matrix effect:");
                let mut selected = current;
                egui::ComboBox::from_id_salt("effect_selector")
                    .selected_text(current.as_str())
                    .show_ui(ui, |ui| {
                        for raw in 0..MatrixEffectId::COUNT {
                            if let Some(id) = MatrixEffectId::from_raw(raw) {
                                ui.selectable_value(&mut selected, id, id.as_str());
                            }
                        }
                    });
                if selected != current {
                    self.scheduler
                        .demo_mut()
                        .jump_to(selected, Instant::from_millis(self.t_ms));
                }

                ui.add_space(8.0);
                ui.label(format!("next in {countdown}s"));
                ui.add_space(8.0);
                ui.label(format!("Strip: {}", self.scheduler.strip().pattern().as_str()));
            });

            ui.add_space(16.0);
            self.draw_matrix(ui);
            ui.add_space(16.0);
            self.draw_strip(ui);
        });
    }
}
