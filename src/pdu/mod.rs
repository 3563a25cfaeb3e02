//! GAD PDU encoding and decoding.
//!
//! [`encode`] and [`decode`] are the entry points for whole PDUs. The type
//! tag in the high nibble of the first byte selects the shape codec; only
//! [`GadType::EllPointUncCircle`] has a wire codec so far, every other shape
//! fails with [`ErrorKind::NotSupported`].
//!
//! # Example Usage
//!
//! ```
//! use gad_codec::pdu::{decode, encode, GadPdu};
//!
//! let pdu = GadPdu::ell_point_unc_circle(23_000_006, 42_000_002, 442_592);
//!
//! let mut buf: Vec<u8> = Vec::new();
//! let written = encode(&mut buf, &pdu).unwrap();
//! assert_eq!(written, 8);
//!
//! let decoded = decode(&buf).unwrap();
//! assert_eq!(decoded, pdu);
//! println!("{decoded}");
//! ```

mod circle;
pub mod format;
pub mod types;

use bytes::BufMut;
use tracing::{debug, trace};

use crate::error::{ErrorKind, GadError, Result};

pub use circle::ELL_POINT_UNC_CIRCLE_LEN;
pub use format::to_str;
pub use types::{
    type_name, EllArc, EllPoint, EllPointAlt, EllPointAltUncEll, EllPointUncCircle,
    EllPointUncEllipse, GadPdu, GadType, HaEllPointAltUncEll, Polygon, PolygonError,
    POLYGON_MAX_POINTS,
};

/// Encodes a PDU and appends it to `buf`.
///
/// Returns the number of bytes appended.
///
/// # Errors
///
/// Returns [`ErrorKind::NotSupported`] for shapes without a wire codec.
///
/// The circle codec extends this with [`ErrorKind::InvalidArgument`] when
/// `buf` has no room for the PDU, or when a latitude lies outside
/// [`LATITUDE_MIN`]`..=`[`LATITUDE_MAX`] or a longitude outside
/// [`LONGITUDE_MIN`]`..=`[`LONGITUDE_MAX`]. The standalone transforms accept
/// the same inputs without complaint: [`encode_latitude`] saturates the
/// magnitude and [`encode_longitude`] wraps modulo 360 degrees. Call them
/// directly to quantize a coordinate that is not known to be in range.
///
/// No bytes are appended on error.
///
/// [`LATITUDE_MIN`]: crate::transform::LATITUDE_MIN
/// [`LATITUDE_MAX`]: crate::transform::LATITUDE_MAX
/// [`LONGITUDE_MIN`]: crate::transform::LONGITUDE_MIN
/// [`LONGITUDE_MAX`]: crate::transform::LONGITUDE_MAX
/// [`encode_latitude`]: crate::transform::encode_latitude
/// [`encode_longitude`]: crate::transform::encode_longitude
pub fn encode<B: BufMut>(buf: &mut B, pdu: &GadPdu) -> Result<usize> {
    let result = match pdu {
        GadPdu::EllPointUncCircle(v) => circle::encode(buf, v),
        other => Err(GadError::encoding(
            ErrorKind::NotSupported,
            other.gad_type(),
            "unsupported GAD type",
        )),
    };

    match &result {
        Ok(len) => trace!(gad_type = %pdu.gad_type(), len, "encoded GAD PDU"),
        Err(e) => debug!(gad_type = %pdu.gad_type(), kind = %e.kind(), "{e}"),
    }
    result
}

/// Decodes a PDU from a complete encoded buffer.
///
/// A fresh PDU is built for every call, so a failed decode never exposes
/// partially written fields.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`] for empty or malformed input and
/// [`ErrorKind::NotSupported`] for type tags without a wire codec. The error
/// carries the type tag from the header, or no tag for empty input.
pub fn decode(data: &[u8]) -> Result<GadPdu> {
    let result = decode_inner(data);

    match &result {
        Ok(pdu) => trace!(gad_type = %pdu.gad_type(), "decoded GAD PDU"),
        Err(e) => debug!(
            type_code = ?e.type_code(),
            kind = %e.kind(),
            data = %hex::encode(data),
            "{e}"
        ),
    }
    result
}

fn decode_inner(data: &[u8]) -> Result<GadPdu> {
    let Some(&header) = data.first() else {
        return Err(GadError::decoding(
            ErrorKind::InvalidArgument,
            None,
            "zero length",
        ));
    };

    let code = header >> 4;
    match GadType::from_code(code) {
        Some(GadType::EllPointUncCircle) => circle::decode(data).map(GadPdu::EllPointUncCircle),
        _ => Err(GadError::decoding(
            ErrorKind::NotSupported,
            Some(code),
            "unsupported GAD type",
        )),
    }
}
