//! Interval remapping and colour quantization.

use crate::error::{ArtError, Result};

/// Remap `val` from `[in_start, in_end]` to `[out_start, out_end]`.
///
/// The value is centred on the input midpoint, scaled by the ratio of the
/// ranges, then shifted onto the output midpoint. Values outside the input
/// interval extrapolate linearly.
///
/// Fails with [`ArtError::DivisionByZero`] when either interval is
/// degenerate.
///
/// ```
/// use artgen::art::remap;
///
/// assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 10.0).unwrap(), 5.0);
/// assert_eq!(remap(5.0, 4.0, 6.0, 1.0, 2.0).unwrap(), 1.5);
/// ```
pub fn remap(val: f64, in_start: f64, in_end: f64, out_start: f64, out_end: f64) -> Result<f64> {
    if in_end == in_start {
        return Err(ArtError::DivisionByZero {
            interval: format!("[{}, {}]", in_start, in_end),
        });
    }
    if out_end == out_start {
        return Err(ArtError::DivisionByZero {
            interval: format!("[{}, {}]", out_start, out_end),
        });
    }

    Ok(remap_unchecked(val, in_start, in_end, out_start, out_end))
}

/// Midpoint form of the affine map. Both ranges must be non-zero.
pub(crate) fn remap_unchecked(
    val: f64,
    in_start: f64,
    in_end: f64,
    out_start: f64,
    out_end: f64,
) -> f64 {
    let in_range = in_end - in_start;
    let in_mid = in_range / 2.0 + in_start;
    let out_range = out_end - out_start;
    let out_mid = out_range / 2.0 + out_start;
    let scalar = in_range / out_range;

    (val - in_mid) / scalar + out_mid
}

/// Map a value in [-1, 1] to a colour channel in [0, 255].
///
/// The result is truncated toward zero, not rounded. Inputs outside [-1, 1]
/// are not clamped and extrapolate past the channel range.
pub fn quantize(val: f64) -> i64 {
    remap_unchecked(val, -1.0, 1.0, 0.0, 255.0) as i64
}
