//! The ten logical configuration channels the engine exposes to the
//! messaging collaborator, plus the outbound state snapshot.

use crate::color::Rgb;
use crate::mode::AnimationMode;

const FIELD_ID_MODE: u8 = 0;
const FIELD_ID_ENABLE: u8 = 1;
const FIELD_ID_SIZE: u8 = 2;
const FIELD_ID_LOOP: u8 = 3;
const FIELD_ID_COLOR: u8 = 4;
const FIELD_ID_RAINBOW: u8 = 5;
const FIELD_ID_SPEED: u8 = 6;
const FIELD_ID_LUMINOSITY: u8 = 7;
const FIELD_ID_DIRECTION: u8 = 8;
const FIELD_ID_POSITION: u8 = 9;

/// One independently addressable configuration field.
///
/// The messaging collaborator declares one channel per field at startup;
/// declaration content and wire format are owned by that collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FieldId {
    Mode = FIELD_ID_MODE,
    Enable = FIELD_ID_ENABLE,
    Size = FIELD_ID_SIZE,
    Loop = FIELD_ID_LOOP,
    Color = FIELD_ID_COLOR,
    Rainbow = FIELD_ID_RAINBOW,
    Speed = FIELD_ID_SPEED,
    /// Luminosity travels as a percentage, not a raw brightness scalar.
    Luminosity = FIELD_ID_LUMINOSITY,
    Direction = FIELD_ID_DIRECTION,
    Position = FIELD_ID_POSITION,
}

impl FieldId {
    /// Every field, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Mode,
        Self::Enable,
        Self::Size,
        Self::Loop,
        Self::Color,
        Self::Rainbow,
        Self::Speed,
        Self::Luminosity,
        Self::Direction,
        Self::Position,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            FIELD_ID_MODE => Self::Mode,
            FIELD_ID_ENABLE => Self::Enable,
            FIELD_ID_SIZE => Self::Size,
            FIELD_ID_LOOP => Self::Loop,
            FIELD_ID_COLOR => Self::Color,
            FIELD_ID_RAINBOW => Self::Rainbow,
            FIELD_ID_SPEED => Self::Speed,
            FIELD_ID_LUMINOSITY => Self::Luminosity,
            FIELD_ID_DIRECTION => Self::Direction,
            FIELD_ID_POSITION => Self::Position,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Human-readable label used in the channel declaration.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mode => "Mode",
            Self::Enable => "Enable",
            Self::Size => "Size",
            Self::Loop => "Loop",
            Self::Color => "Color",
            Self::Rainbow => "Rainbow",
            Self::Speed => "Speed",
            Self::Luminosity => "Luminosity",
            Self::Direction => "Direction",
            Self::Position => "Position",
        }
    }
}

/// A copy of every configuration field, taken with
/// [`AnimationEngine::snapshot`](crate::AnimationEngine::snapshot).
///
/// The messaging collaborator reads this once at startup to re-transmit
/// the node's state.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    pub mode: AnimationMode,
    pub enabled: bool,
    pub window_size: u16,
    pub looped: bool,
    pub base_color: Rgb,
    pub rainbow: bool,
    pub speed: f32,
    pub luminosity: u8,
    pub direction: i8,
    pub position: i16,
}
