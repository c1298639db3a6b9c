//! The animation engine: owns the configuration, paces frames and renders
//! the snake window onto the strip.

use embassy_time::{Duration, Instant};

use crate::StripSink;
use crate::color::{Rgb, blend, luminosity_to_brightness, rgb_from_u32};
use crate::fields::ConfigSnapshot;
use crate::frame_timer::{FrameTimer, speed_to_interval};
use crate::mode::AnimationMode;
use crate::position::resolve;

/// Startup configuration for the animation engine.
///
/// Construction-time only: once handed to [`AnimationEngine::new`] the
/// state is owned by the engine and mutated exclusively through its
/// setters.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    pub mode: AnimationMode,
    /// When false, the strip is blanked and no frames are generated.
    pub enabled: bool,
    /// Snake mode: length of the lit window (with gradient).
    /// Fir mode: number of gaps between two lit pixels.
    /// Must stay below 32768: window offsets run in `i16` strip
    /// coordinates, and larger sizes flip sign.
    pub window_size: u16,
    /// Snake mode only. When true the snake wraps past the strip end;
    /// when false it bounces back in the opposite direction.
    pub looped: bool,
    pub base_color: Rgb,
    /// When true the base color is ignored in favor of a generated hue.
    pub rainbow: bool,
    /// Refreshes per second. 1.0 = one frame per second, 0.5 = one frame
    /// every two seconds. Must be positive.
    pub speed: f32,
    /// Percent, 0-100.
    pub luminosity: u8,
    /// -1, 0 or 1. Zero means the snake holds its position.
    pub direction: i8,
    /// Logical start position of the snake, in strip coordinates.
    pub position: i16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            mode: AnimationMode::Snake,
            enabled: true,
            window_size: 4,
            looped: true,
            base_color: rgb_from_u32(0x00FF_0000),
            rainbow: false,
            speed: 1.0,
            luminosity: 50,
            direction: 1,
            position: 0,
        }
    }
}

/// Animation engine, generic over the strip output device.
///
/// Single-threaded and cooperative: one scheduler calls [`tick`] and the
/// same logical thread applies configuration updates, so setters and
/// renders execute in program order, never interleaved.
///
/// [`tick`]: Self::tick
pub struct AnimationEngine<S: StripSink> {
    sink: S,
    timer: FrameTimer,
    config: AnimationConfig,
}

impl<S: StripSink> AnimationEngine<S> {
    /// Create an engine around a strip device.
    ///
    /// Out-of-range direction and luminosity values in the config are
    /// clamped the same way the setters clamp them.
    pub fn new(sink: S, config: AnimationConfig) -> Self {
        let mut config = config;
        config.direction = config.direction.clamp(-1, 1);
        config.luminosity = config.luminosity.min(100);
        let timer = FrameTimer::new(speed_to_interval(config.speed));
        Self {
            sink,
            timer,
            config,
        }
    }

    /// Bring the device up: initialize, force all-off, apply the
    /// configured luminosity. Call once at startup.
    pub fn init(&mut self) {
        self.sink.initialize();
        self.sink.flush();
        self.sink
            .set_global_brightness(luminosity_to_brightness(self.config.luminosity));
    }

    /// Per-tick entry point for the scheduler.
    ///
    /// If the engine is enabled and a frame interval has elapsed, resets
    /// the timer, renders one frame for the current mode and advances the
    /// animation. Returns whether a frame interval was consumed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.config.enabled || !self.timer.is_due(now) {
            return false;
        }
        self.timer.reset(now);

        match self.config.mode {
            AnimationMode::Snake => self.render_snake(),
            AnimationMode::Fir => {
                // No rendering algorithm is defined for fir mode yet.
            }
        }
        true
    }

    /// Access the strip device.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the strip device.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Current state of every configuration field, for startup
    /// re-transmission by the messaging collaborator.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            mode: self.config.mode,
            enabled: self.config.enabled,
            window_size: self.config.window_size,
            looped: self.config.looped,
            base_color: self.config.base_color,
            rainbow: self.config.rainbow,
            speed: self.config.speed,
            luminosity: self.config.luminosity,
            direction: self.config.direction,
            position: self.config.position,
        }
    }

    pub fn set_mode(&mut self, mode: AnimationMode) {
        self.config.mode = mode;
    }

    pub fn mode(&self) -> AnimationMode {
        self.config.mode
    }

    /// Enable or disable the animation.
    ///
    /// Disabling pushes one blanking frame immediately, not gated by the
    /// frame timer; no further flushes happen until re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled {
            self.blank(true);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_window_size(&mut self, size: u16) {
        self.config.window_size = size;
    }

    pub fn window_size(&self) -> u16 {
        self.config.window_size
    }

    pub fn set_looped(&mut self, looped: bool) {
        self.config.looped = looped;
    }

    pub fn is_looped(&self) -> bool {
        self.config.looped
    }

    pub fn set_base_color(&mut self, color: Rgb) {
        self.config.base_color = color;
    }

    pub fn base_color(&self) -> Rgb {
        self.config.base_color
    }

    pub fn set_rainbow(&mut self, rainbow: bool) {
        self.config.rainbow = rainbow;
    }

    pub fn is_rainbow(&self) -> bool {
        self.config.rainbow
    }

    /// Set the refresh rate in refreshes per second.
    ///
    /// Non-positive values are rejected in place: the stored speed and the
    /// timer interval stay unchanged.
    pub fn set_speed(&mut self, speed: f32) {
        if speed > 0.0 {
            self.config.speed = speed;
            self.timer.set_interval(speed_to_interval(speed));
        }
    }

    pub fn speed(&self) -> f32 {
        self.config.speed
    }

    /// The frame interval derived from the current speed.
    pub fn frame_interval(&self) -> Duration {
        self.timer.interval()
    }

    /// Set the luminosity percent, clamped into `0..=100`.
    ///
    /// Every accepted write is propagated to the device's global
    /// brightness.
    pub fn set_luminosity(&mut self, percent: i16) {
        self.config.luminosity = percent.clamp(0, 100) as u8;
        self.sink
            .set_global_brightness(luminosity_to_brightness(self.config.luminosity));
    }

    pub fn luminosity(&self) -> u8 {
        self.config.luminosity
    }

    /// Set the movement direction, clamped into `-1..=1`.
    pub fn set_direction(&mut self, direction: i8) {
        self.config.direction = direction.clamp(-1, 1);
    }

    pub fn direction(&self) -> i8 {
        self.config.direction
    }

    /// Set the snake position. The value is re-derived through the
    /// wraparound/clip rule, so a remote write behaves exactly like the
    /// renderer's own position bookkeeping. With looping disabled an
    /// off-strip value stores the off-strip sentinel.
    pub fn set_position(&mut self, position: i16) {
        self.config.position =
            resolve(position, self.sink.pixel_count(), self.config.looped);
    }

    pub fn position(&self) -> i16 {
        self.config.position
    }

    /// Render one snake frame and advance the position.
    fn render_snake(&mut self) {
        let count = self.sink.pixel_count();
        self.blank(false);

        let luminosity = f32::from(self.config.luminosity);
        let direction = self.config.direction;
        // Directions 0 and -1 both use the shrinking-toward-the-tail
        // gradient; only a forward-moving snake fades up toward the
        // leading pixel. Visible behavior, kept as-is.
        let fake_direction: f32 = if direction > 0 { 1.0 } else { -1.0 };

        // size + 1 keeps the last gradient step above zero luminosity
        let lum_delta =
            luminosity / (u32::from(self.config.window_size) + 1) as f32;
        let mut lum = if direction > 0 { lum_delta } else { luminosity };

        let size = self.config.window_size as i16;
        let pos_start =
            self.config.position - if direction > 0 { size } else { 0 };
        for i in pos_start..pos_start + size {
            let pos = resolve(i, count, self.config.looped);
            if pos >= 0 {
                if let Some(color) = self.next_color(lum as u8) {
                    self.sink.set_pixel(pos as u16, color);
                }
            }
            // The accumulator advances even across skipped pixels.
            lum += lum_delta * fake_direction;
        }
        self.sink.flush();

        self.advance();
    }

    /// Pick the color for one gradient step.
    fn next_color(&self, luminosity: u8) -> Option<Rgb> {
        if self.config.rainbow {
            // TODO: derive the hue from the strip position once rainbow
            // generation is defined
            None
        } else {
            Some(blend(self.config.base_color, luminosity))
        }
    }

    /// Clear every pixel, optionally pushing the blank frame out.
    fn blank(&mut self, flush: bool) {
        for index in 0..self.sink.pixel_count() {
            self.sink.set_pixel(index, Rgb::default());
        }
        if flush {
            self.sink.flush();
        }
    }

    /// Advance the position for the next frame, honoring direction and
    /// the loop/bounce policy.
    fn advance(&mut self) {
        let count = self.sink.pixel_count();
        if !self.config.looped
            && (self.config.position == count as i16 - 1
                || self.config.position == 0)
        {
            self.config.direction = -self.config.direction;
        }

        // The window's leading edge, not a single tracked point, is what
        // wraps or bounces; dropping the add_size offset shifts bounce
        // timing by a whole window.
        let add_size = if self.config.direction > 0 {
            self.config.window_size as i16
        } else {
            0
        };
        self.config.position = resolve(
            self.config.position + i16::from(self.config.direction) - add_size,
            count,
            self.config.looped,
        ) + add_size;
    }
}
