//! Animation mode identifiers.

const MODE_NAME_SNAKE: &str = "snake";
const MODE_NAME_FIR: &str = "fir";

const MODE_ID_SNAKE: u8 = 0;
const MODE_ID_FIR: u8 = 1;

/// Known animation modes.
///
/// Only `Snake` has a defined rendering algorithm. `Fir` (all lights on,
/// gaps controlled by the size field) is declared on the wire but renders
/// nothing yet; it is kept as an explicit variant so the engine matches
/// exhaustively instead of falling through silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationMode {
    /// A luminosity-graded trail of pixels moving along the strip.
    Snake = MODE_ID_SNAKE,
    /// All-lit mode. Not implemented: selecting it is a valid
    /// configuration, rendering it is a no-op.
    Fir = MODE_ID_FIR,
}

impl AnimationMode {
    /// Decode a raw wire value. Unknown values yield `None` and must leave
    /// the previously configured mode untouched.
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            MODE_ID_SNAKE => Some(Self::Snake),
            MODE_ID_FIR => Some(Self::Fir),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snake => MODE_NAME_SNAKE,
            Self::Fir => MODE_NAME_FIR,
        }
    }
}
