//! Inbound configuration updates.
//!
//! The field-bus layer parses messages, filters echoes and pushes one
//! [`ConfigUpdate`] per received field into the queue; the animation
//! loop drains the queue and routes each value to the matching engine
//! setter. Validation of untyped wire scalars (the raw mode id) happens
//! here, at the boundary.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripSink;
use crate::color::rgb_from_u32;
use crate::engine::AnimationEngine;
use crate::mode::AnimationMode;

/// One remote write to a single configuration field.
///
/// Each variant carries the typed scalar the wire delivers for that field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigUpdate {
    /// Raw mode id; unknown ids are rejected, keeping the previous mode.
    Mode(u8),
    Enable(bool),
    WindowSize(u16),
    Looped(bool),
    /// Packed `0xRRGGBB`.
    Color(u32),
    Rainbow(bool),
    /// Refreshes per second; non-positive values are rejected.
    Speed(f32),
    /// Percent; clamped into `0..=100`.
    Luminosity(i16),
    /// Clamped into `-1..=1`.
    Direction(i8),
    Position(i16),
}

/// Fixed-capacity, interrupt-safe queue of pending updates.
///
/// The field-bus receive callback pushes from interrupt context while the
/// animation loop drains on the main thread; a critical section guards the
/// underlying deque. Declared `static` in practice, so the constructor is
/// `const`. A full queue hands the update back to the caller instead of
/// overwriting older ones.
pub struct UpdateQueue<const SIZE: usize> {
    pending: Mutex<RefCell<Deque<ConfigUpdate, SIZE>>>,
}

impl<const SIZE: usize> UpdateQueue<SIZE> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue one update. Returns the update itself when the queue is full;
    /// the caller decides whether to retry or drop.
    pub fn push(&self, update: ConfigUpdate) -> Result<(), ConfigUpdate> {
        critical_section::with(|cs| {
            self.pending.borrow(cs).borrow_mut().push_back(update)
        })
    }

    /// Take the oldest pending update, if any.
    pub fn pop(&self) -> Option<ConfigUpdate> {
        critical_section::with(|cs| self.pending.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for UpdateQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains pending updates and applies them to the engine.
pub struct UpdateProcessor<'a, const SIZE: usize> {
    updates: &'a UpdateQueue<SIZE>,
}

impl<'a, const SIZE: usize> UpdateProcessor<'a, SIZE> {
    pub const fn new(updates: &'a UpdateQueue<SIZE>) -> Self {
        Self { updates }
    }

    /// Apply all queued updates to the engine (non-blocking).
    ///
    /// Runs on the same logical thread as the render tick, so a setter is
    /// never interleaved with a frame. Invalid values are silently
    /// rejected by the setters; callers that need confirmation re-read
    /// the matching getter.
    pub fn process_pending<S: StripSink>(&mut self, engine: &mut AnimationEngine<S>) {
        while let Some(update) = self.updates.pop() {
            Self::apply(engine, update);
        }
    }

    fn apply<S: StripSink>(engine: &mut AnimationEngine<S>, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Mode(raw) => {
                if let Some(mode) = AnimationMode::from_raw(raw) {
                    engine.set_mode(mode);
                }
                #[cfg(feature = "esp32-log")]
                println!("R: mode {} -> {}", raw, engine.mode().as_raw());
            }
            ConfigUpdate::Enable(enabled) => {
                engine.set_enabled(enabled);
                #[cfg(feature = "esp32-log")]
                println!("R: enable {}", u8::from(enabled));
            }
            ConfigUpdate::WindowSize(size) => {
                engine.set_window_size(size);
                #[cfg(feature = "esp32-log")]
                println!("R: size {}", size);
            }
            ConfigUpdate::Looped(looped) => {
                engine.set_looped(looped);
                #[cfg(feature = "esp32-log")]
                println!("R: loop {}", u8::from(looped));
            }
            ConfigUpdate::Color(packed) => {
                engine.set_base_color(rgb_from_u32(packed));
                #[cfg(feature = "esp32-log")]
                println!("R: color {:06x}", packed);
            }
            ConfigUpdate::Rainbow(rainbow) => {
                engine.set_rainbow(rainbow);
                #[cfg(feature = "esp32-log")]
                println!("R: rainbow {}", u8::from(rainbow));
            }
            ConfigUpdate::Speed(speed) => {
                engine.set_speed(speed);
                #[cfg(feature = "esp32-log")]
                println!("R: speed {} -> {}", speed, engine.speed());
            }
            ConfigUpdate::Luminosity(percent) => {
                engine.set_luminosity(percent);
                #[cfg(feature = "esp32-log")]
                println!("R: luminosity {} -> {}", percent, engine.luminosity());
            }
            ConfigUpdate::Direction(direction) => {
                engine.set_direction(direction);
                #[cfg(feature = "esp32-log")]
                println!("R: direction {} -> {}", direction, engine.direction());
            }
            ConfigUpdate::Position(position) => {
                engine.set_position(position);
                #[cfg(feature = "esp32-log")]
                println!("R: position {} -> {}", position, engine.position());
            }
        }
    }
}
