//! Logical-to-physical position mapping.
//!
//! The single place where wraparound-vs-clip semantics are decided. Both
//! the snake renderer and the position-advance step route through
//! [`resolve`] so the two stay consistent.

/// Sentinel returned for offsets that fall outside a non-looping strip.
pub const OFF_STRIP: i16 = -1;

/// Map a signed logical offset onto a physical pixel index.
///
/// With `looped` the offset is reduced into `[0, pixel_count)` with a floor
/// modulo, so negative offsets wrap to the high end. Without `looped`, any
/// offset outside the strip yields [`OFF_STRIP`] and the caller must skip
/// that pixel.
///
/// The result stays numeric rather than an `Option` because the advance
/// step does arithmetic on it, sentinel included.
///
/// `pixel_count` must be non-zero and below 32768; a zero count is a
/// configuration error of the strip collaborator, not handled here, and a
/// larger count flips sign in the `i16` strip coordinates.
pub fn resolve(offset: i16, pixel_count: u16, looped: bool) -> i16 {
    let count = pixel_count as i16;
    if !looped && (offset < 0 || offset >= count) {
        return OFF_STRIP;
    }

    let mut pos = offset % count;
    if pos < 0 {
        pos += count;
    }
    pos
}
