#![no_std]

pub mod color;
pub mod engine;
pub mod fields;
pub mod frame_timer;
pub mod mode;
pub mod position;
pub mod update;

pub use engine::{AnimationConfig, AnimationEngine};
pub use fields::{ConfigSnapshot, FieldId};
pub use frame_timer::{FrameTimer, speed_to_interval};
pub use mode::AnimationMode;
pub use position::{OFF_STRIP, resolve};
pub use update::{ConfigUpdate, UpdateProcessor, UpdateQueue};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip output device
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait and is the only
/// writer of the device's pixel buffer.
pub trait StripSink {
    /// Prepare the device for output. Called once at startup.
    fn initialize(&mut self);

    /// Stage a color for one pixel. Takes effect on the next `flush`.
    fn set_pixel(&mut self, index: u16, color: Rgb);

    /// Push the staged pixel buffer to the device.
    fn flush(&mut self);

    /// Set the device-wide brightness scalar (0-255).
    fn set_global_brightness(&mut self, brightness: u8);

    /// Number of physical pixels on the strip.
    ///
    /// Must be non-zero and below 32768: position math runs in `i16`
    /// strip coordinates, and larger counts flip sign.
    fn pixel_count(&self) -> u16;
}
