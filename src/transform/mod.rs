//! Fixed-point transforms between real-world units and GAD wire fields.
//!
//! Whole-PDU encoding goes through [`crate::pdu::encode`] and
//! [`crate::pdu::decode`], but these functions are exposed on their own to
//! clamp a value to the precision the wire format can carry:
//!
//! ```
//! use gad_codec::transform::{decode_latitude, encode_latitude};
//!
//! let requested = 23_000_000;
//! let stored = decode_latitude(encode_latitude(requested));
//! // `stored` is the canonical representative of the bucket `requested` falls into
//! assert_eq!(decode_latitude(encode_latitude(stored)), stored);
//! ```
//!
//! # Units
//!
//! | Quantity | Unit | Wire field |
//! |----------|------|------------|
//! | Latitude | degrees * 1e6 | 24 bit sign-magnitude |
//! | Longitude | degrees * 1e6 | 24 bit two's complement |
//! | Uncertainty | millimetres | 7 bit codebook index |
//! | High-accuracy uncertainty | millimetres | 8 bit codebook index |

pub mod table;

use table::{HA_UNCERTAINTY_MM, UNCERTAINTY_MM};

/// Smallest valid latitude in micro-degrees (south pole).
pub const LATITUDE_MIN: i32 = -90_000_000;
/// Largest valid latitude in micro-degrees (north pole).
pub const LATITUDE_MAX: i32 = 90_000_000;
/// Smallest valid longitude in micro-degrees.
pub const LONGITUDE_MIN: i32 = -180_000_000;
/// Largest valid longitude in micro-degrees.
pub const LONGITUDE_MAX: i32 = 180_000_000;

/// Mask covering a 24 bit wire field.
pub const FIELD_24_MASK: u32 = 0x00ff_ffff;

const LAT_SIGN_BIT: u32 = 1 << 23;
const LAT_MAGNITUDE_MASK: u32 = LAT_SIGN_BIT - 1;
const LAT_SPAN: i64 = 90_000_000;
const LON_SPAN: i64 = 360_000_000;

/// Mask covering the 7 bit uncertainty code.
pub const UNCERTAINTY_CODE_MASK: u8 = 0x7f;

/// Encodes a latitude into its 24 bit sign-magnitude wire form.
///
/// Implements `N <= (2^23 / 90) * X < N + 1` with `X` in degrees: the
/// magnitude is scaled by 2^23, biased by `2^23 - 1` and truncated, so every
/// value decoded from a code re-encodes to that same code.
///
/// A zero magnitude always encodes as `0x000000`, including small negative
/// values that fall into the first bucket; the negative-zero code `0x800000`
/// is never produced. The magnitude saturates at `0x7fffff`, so the poles (and
/// anything beyond them) encode to the last code before 90 degrees instead of
/// wrapping to the equator.
///
/// # Arguments
///
/// * `lat_deg_1e6` - Latitude in micro-degrees, -90 000 000 (S) to 90 000 000 (N)
///
/// # Examples
///
/// ```
/// use gad_codec::transform::encode_latitude;
///
/// assert_eq!(encode_latitude(0), 0x000000);
/// assert_eq!(encode_latitude(90_000_000), 0x7fffff);
/// assert_eq!(encode_latitude(-90_000_000), 0xffffff);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn encode_latitude(lat_deg_1e6: i32) -> u32 {
    let sign = if lat_deg_1e6 < 0 { LAT_SIGN_BIT } else { 0 };
    let mut x = lat_deg_1e6.unsigned_abs() as i64;
    x <<= 23;
    x += (1 << 23) - 1;
    x /= LAT_SPAN;
    if x > LAT_MAGNITUDE_MASK as i64 {
        x = LAT_MAGNITUDE_MASK as i64;
    }
    if x == 0 {
        return 0;
    }
    sign | x as u32
}

/// Decodes a 24 bit sign-magnitude latitude into micro-degrees.
///
/// Bits above the 24 bit field are ignored. `0x800000` (negative zero)
/// decodes to `0`.
///
/// # Examples
///
/// ```
/// use gad_codec::transform::decode_latitude;
///
/// assert_eq!(decode_latitude(0x000000), 0);
/// assert_eq!(decode_latitude(0x800000), 0);
/// assert!(decode_latitude(0x800001) < 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn decode_latitude(lat: u32) -> i32 {
    let magnitude = (lat & LAT_MAGNITUDE_MASK) as i64;
    let x = (magnitude * LAT_SPAN) >> 23;
    if lat & LAT_SIGN_BIT != 0 {
        -(x as i32)
    } else {
        x as i32
    }
}

/// Encodes a longitude into its 24 bit two's complement wire form.
///
/// Implements `N <= (2^24 / 360) * X < N + 1` with `X` in degrees. The bias
/// of `2^24 - 1` is applied away from zero before the truncating division.
///
/// # Arguments
///
/// * `lon_deg_1e6` - Longitude in micro-degrees, -180 000 000 (W) to 180 000 000 (E)
///
/// # Examples
///
/// ```
/// use gad_codec::transform::encode_longitude;
///
/// assert_eq!(encode_longitude(0), 0);
/// // Negative longitudes wrap into the upper half of the 24 bit range
/// assert_eq!(encode_longitude(-22), 0xffffff);
/// // Both sides of the antimeridian share one code
/// assert_eq!(encode_longitude(180_000_000), 0x800000);
/// assert_eq!(encode_longitude(-180_000_000), 0x800000);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn encode_longitude(lon_deg_1e6: i32) -> u32 {
    let mut x = lon_deg_1e6 as i64;
    x *= 1 << 24;
    if lon_deg_1e6 >= 0 {
        x += (1 << 24) - 1;
    } else {
        x -= (1 << 24) - 1;
    }
    x /= LON_SPAN;
    (x & FIELD_24_MASK as i64) as u32
}

/// Decodes a 24 bit two's complement longitude into micro-degrees.
///
/// The code is sign-extended from bit 23; bits above the field are ignored.
///
/// # Examples
///
/// ```
/// use gad_codec::transform::{decode_longitude, encode_longitude};
///
/// assert_eq!(decode_longitude(0), 0);
/// assert!(decode_longitude(0xffffff) < 0);
/// assert_eq!(encode_longitude(decode_longitude(0xabcdef)), 0xabcdef);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn decode_longitude(lon: u32) -> i32 {
    // Shift the field into the top of an i32 and back to sign-extend bit 23
    let signed = ((lon << 8) as i32 >> 8) as i64;
    ((signed * LON_SPAN) >> 24) as i32
}

/// Encodes an uncertainty radius into its 7 bit codebook index.
///
/// Returns the code of the largest table entry not exceeding `mm`, which is
/// the smallest index whose entry is greater than `mm`, minus one. Values at
/// or beyond the last entry saturate to 127.
///
/// # Examples
///
/// ```
/// use gad_codec::transform::encode_uncertainty;
///
/// assert_eq!(encode_uncertainty(0), 0);
/// assert_eq!(encode_uncertainty(999), 0);
/// assert_eq!(encode_uncertainty(1_000), 1);
/// assert_eq!(encode_uncertainty(u32::MAX), 127);
/// ```
#[must_use]
pub fn encode_uncertainty(mm: u32) -> u8 {
    inverse_lookup(&UNCERTAINTY_MM, mm)
}

/// Decodes a 7 bit uncertainty code into millimetres.
///
/// The input is masked to 7 bits; rejecting a set 8th bit is the caller's job.
///
/// # Examples
///
/// ```
/// use gad_codec::transform::decode_uncertainty;
///
/// assert_eq!(decode_uncertainty(0), 0);
/// assert_eq!(decode_uncertainty(40), 442_592);
/// assert_eq!(decode_uncertainty(0x80 | 40), 442_592);
/// ```
#[must_use]
pub fn decode_uncertainty(unc: u8) -> u32 {
    UNCERTAINTY_MM[usize::from(unc & UNCERTAINTY_CODE_MASK)]
}

/// Encodes a high-accuracy uncertainty radius into its 8 bit codebook index.
///
/// Same inverse lookup as [`encode_uncertainty`] over the 256-entry
/// high-accuracy table, saturating to 255.
///
/// # Examples
///
/// ```
/// use gad_codec::transform::encode_ha_uncertainty;
///
/// assert_eq!(encode_ha_uncertainty(5), 0);
/// assert_eq!(encode_ha_uncertainty(6), 1);
/// assert_eq!(encode_ha_uncertainty(1_000_000), 255);
/// ```
#[must_use]
pub fn encode_ha_uncertainty(mm: u32) -> u8 {
    inverse_lookup(&HA_UNCERTAINTY_MM, mm)
}

/// Decodes an 8 bit high-accuracy uncertainty code into millimetres.
#[must_use]
pub fn decode_ha_uncertainty(unc: u8) -> u32 {
    HA_UNCERTAINTY_MM[usize::from(unc)]
}

/// Index of the last entry `<= mm` in a strictly increasing table starting at 0.
fn inverse_lookup(table: &[u32], mm: u32) -> u8 {
    // table[0] == 0, so at least one entry is <= mm
    let above = table.partition_point(|&entry| entry <= mm);
    u8::try_from(above - 1).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::table::{HA_UNCERTAINTY_CODES, UNCERTAINTY_CODES};
    use super::*;

    #[test]
    fn latitude_zero_encodes_to_zero() {
        assert_eq!(encode_latitude(0), 0);
    }

    #[test]
    fn latitude_negative_zero_decodes_to_zero() {
        assert_eq!(decode_latitude(0x80_0000), 0);
        assert_eq!(encode_latitude(decode_latitude(0x80_0000)), 0);
    }

    #[test]
    fn latitude_small_negative_encodes_as_positive_zero() {
        assert_eq!(encode_latitude(-1), 0);
        assert_eq!(encode_latitude(-9), 0);
        assert_eq!(encode_latitude(-10), LAT_SIGN_BIT | 1);
    }

    #[test]
    fn latitude_sign_bit_marks_south() {
        assert_eq!(encode_latitude(-23_000_006) & LAT_SIGN_BIT, LAT_SIGN_BIT);
        assert_eq!(encode_latitude(23_000_006) & LAT_SIGN_BIT, 0);
        assert_eq!(
            encode_latitude(-23_000_006) & LAT_MAGNITUDE_MASK,
            encode_latitude(23_000_006)
        );
    }

    #[test]
    fn latitude_poles_saturate() {
        // 90 degrees needs 2^23, which does not fit the magnitude field
        assert_eq!(encode_latitude(LATITUDE_MAX), LAT_MAGNITUDE_MASK);
        assert_eq!(encode_latitude(LATITUDE_MIN), FIELD_24_MASK);
        assert_eq!(decode_latitude(LAT_MAGNITUDE_MASK), 89_999_989);
        assert_eq!(decode_latitude(FIELD_24_MASK), -89_999_989);
    }

    #[test]
    fn latitude_bias_then_truncate() {
        // One code step is 90e6 / 2^23 ~= 10.73 micro-degrees
        assert_eq!(encode_latitude(1), 0);
        assert_eq!(encode_latitude(9), 0);
        assert_eq!(encode_latitude(10), 1);
        assert_eq!(encode_latitude(20), 1);
        assert_eq!(encode_latitude(21), 2);
        assert_eq!(decode_latitude(1), 10);
        assert_eq!(decode_latitude(2), 21);
    }

    #[test]
    fn latitude_ignores_bits_above_field() {
        assert_eq!(decode_latitude(0xff00_0001), decode_latitude(0x00_0001));
    }

    #[test]
    fn latitude_handles_extreme_inputs() {
        // Out of domain, but must not overflow
        assert_eq!(encode_latitude(i32::MIN), FIELD_24_MASK);
        assert_eq!(encode_latitude(i32::MAX), LAT_MAGNITUDE_MASK);
    }

    #[test]
    fn longitude_zero_encodes_to_zero() {
        assert_eq!(encode_longitude(0), 0);
        assert_eq!(decode_longitude(0), 0);
    }

    #[test]
    fn longitude_negative_is_twos_complement() {
        // One code step is 360e6 / 2^24 ~= 21.46 micro-degrees
        assert_eq!(encode_longitude(-20), 0);
        assert_eq!(encode_longitude(-21), FIELD_24_MASK);
        assert_eq!(decode_longitude(FIELD_24_MASK), -22);
        assert_eq!(decode_longitude(0x80_0000), LONGITUDE_MIN);
    }

    #[test]
    fn longitude_decode_encode_edges() {
        for code in [0, 1, 0x7f_ffff, 0x80_0000, 0x80_0001, 0xff_fffe, 0xff_ffff] {
            assert_eq!(encode_longitude(decode_longitude(code)), code, "code {code:#x}");
        }
    }

    #[test]
    fn longitude_ignores_bits_above_field() {
        assert_eq!(decode_longitude(0xff12_3456), decode_longitude(0x12_3456));
    }

    #[test]
    fn longitude_handles_extreme_inputs() {
        assert!(encode_longitude(i32::MIN) <= FIELD_24_MASK);
        assert!(encode_longitude(i32::MAX) <= FIELD_24_MASK);
    }

    #[test]
    fn uncertainty_decode_encode_is_identity() {
        for code in 0..=UNCERTAINTY_CODE_MASK {
            assert_eq!(encode_uncertainty(decode_uncertainty(code)), code);
        }
    }

    #[test]
    fn uncertainty_rounds_down_to_table_entry() {
        assert_eq!(encode_uncertainty(442_591), 39);
        assert_eq!(encode_uncertainty(442_592), 40);
        assert_eq!(encode_uncertainty(487_850), 40);
    }

    #[test]
    fn uncertainty_saturates_at_table_end() {
        let last = UNCERTAINTY_MM[UNCERTAINTY_CODES - 1];
        assert_eq!(encode_uncertainty(last), 127);
        assert_eq!(encode_uncertainty(last + 1), 127);
        assert_eq!(encode_uncertainty(u32::MAX), 127);
    }

    #[test]
    fn uncertainty_decode_masks_top_bit() {
        assert_eq!(decode_uncertainty(0xff), decode_uncertainty(0x7f));
    }

    #[test]
    fn ha_uncertainty_decode_encode_is_identity() {
        for code in 0..=u8::MAX {
            assert_eq!(encode_ha_uncertainty(decode_ha_uncertainty(code)), code);
        }
    }

    #[test]
    fn ha_uncertainty_saturates_at_table_end() {
        let last = HA_UNCERTAINTY_MM[HA_UNCERTAINTY_CODES - 1];
        assert_eq!(encode_ha_uncertainty(last - 1), 254);
        assert_eq!(encode_ha_uncertainty(last), 255);
        assert_eq!(encode_ha_uncertainty(u32::MAX), 255);
    }

    #[test]
    fn ha_uncertainty_uses_its_own_table() {
        assert_eq!(decode_ha_uncertainty(1), 6);
        assert_ne!(decode_ha_uncertainty(1), decode_uncertainty(1));
    }
}
