//! Ellipsoid point with uncertainty circle.
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 1 | type (high nibble), spare (low nibble) |
//! | 1 | 3 | latitude, sign-magnitude, big endian |
//! | 4 | 3 | longitude, two's complement, big endian |
//! | 7 | 1 | uncertainty code, bit 8 spare |

use bytes::{Buf, BufMut};

use super::types::{EllPointUncCircle, GadType};
use crate::error::{ErrorKind, GadError, Result};
use crate::transform::{
    decode_latitude, decode_longitude, decode_uncertainty, encode_latitude, encode_longitude,
    encode_uncertainty, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN,
    UNCERTAINTY_CODE_MASK,
};

/// Encoded length of an ellipsoid point with uncertainty circle, in bytes.
pub const ELL_POINT_UNC_CIRCLE_LEN: usize = 8;

const TYPE: GadType = GadType::EllPointUncCircle;

/// Appends the 8-byte encoding of `v` to `buf`.
///
/// Nothing is written when this returns an error.
pub(super) fn encode<B: BufMut>(buf: &mut B, v: &EllPointUncCircle) -> Result<usize> {
    if !(LATITUDE_MIN..=LATITUDE_MAX).contains(&v.lat) {
        return Err(GadError::encoding(
            ErrorKind::InvalidArgument,
            TYPE,
            format_args!("latitude {} out of range", v.lat),
        ));
    }
    if !(LONGITUDE_MIN..=LONGITUDE_MAX).contains(&v.lon) {
        return Err(GadError::encoding(
            ErrorKind::InvalidArgument,
            TYPE,
            format_args!("longitude {} out of range", v.lon),
        ));
    }
    if buf.remaining_mut() < ELL_POINT_UNC_CIRCLE_LEN {
        return Err(GadError::encoding(
            ErrorKind::InvalidArgument,
            TYPE,
            format_args!(
                "Need {ELL_POINT_UNC_CIRCLE_LEN} bytes of buffer space, have {}",
                buf.remaining_mut()
            ),
        ));
    }

    buf.put_u8(TYPE.code() << 4);
    buf.put_uint(u64::from(encode_latitude(v.lat)), 3);
    buf.put_uint(u64::from(encode_longitude(v.lon)), 3);
    buf.put_u8(encode_uncertainty(v.unc));
    Ok(ELL_POINT_UNC_CIRCLE_LEN)
}

/// Decodes a complete 8-byte PDU, header included.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn decode(data: &[u8]) -> Result<EllPointUncCircle> {
    if data.len() != ELL_POINT_UNC_CIRCLE_LEN {
        return Err(GadError::decoding(
            ErrorKind::InvalidArgument,
            Some(TYPE.code()),
            format_args!(
                "Expecting length of {ELL_POINT_UNC_CIRCLE_LEN} bytes, got {}",
                data.len()
            ),
        ));
    }

    let mut body = &data[1..];
    // get_uint(3) yields at most 24 bits
    let lat = decode_latitude(body.get_uint(3) as u32);
    let lon = decode_longitude(body.get_uint(3) as u32);

    let unc = body.get_u8();
    if unc & !UNCERTAINTY_CODE_MASK != 0 {
        return Err(GadError::decoding(
            ErrorKind::InvalidArgument,
            Some(TYPE.code()),
            format_args!("Bit 8 of Uncertainty code should be zero (unc = {unc:#x})"),
        ));
    }

    Ok(EllPointUncCircle {
        lat,
        lon,
        unc: decode_uncertainty(unc),
    })
}
