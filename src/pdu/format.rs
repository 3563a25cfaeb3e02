//! Human readable rendering of GAD PDUs for logs.
//!
//! Output is `<type name>{<fields>}`, e.g.
//! `Ellipsoid-point-with-uncertainty-circle{lat=23.000006,lon=42.000002,unc=442592mm}`.
//! Shapes without a formatter render as `<type name>{to-str-not-implemented}`.

use std::fmt;

use super::types::GadPdu;

/// Returns the string rendering of `pdu`, or `"null"` when there is none.
///
/// # Examples
///
/// ```
/// use gad_codec::pdu::{to_str, GadPdu};
///
/// assert_eq!(to_str(None), "null");
///
/// let pdu = GadPdu::ell_point_unc_circle(-1_500_000, 42_000_000, 1_000);
/// assert_eq!(
///     to_str(Some(&pdu)),
///     "Ellipsoid-point-with-uncertainty-circle{lat=-1.5,lon=42,unc=1000mm}"
/// );
/// ```
#[must_use]
pub fn to_str(pdu: Option<&GadPdu>) -> String {
    pdu.map_or_else(|| "null".to_string(), ToString::to_string)
}

impl fmt::Display for GadPdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.gad_type())?;
        match self {
            Self::EllPointUncCircle(v) => write!(
                f,
                "lat={},lon={},unc={}mm",
                Micros(v.lat),
                Micros(v.lon),
                v.unc
            )?,
            _ => f.write_str("to-str-not-implemented")?,
        }
        f.write_str("}")
    }
}

/// Renders an integer in millionths as a decimal without trailing zeros.
struct Micros(i32);

impl fmt::Display for Micros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, frac) = (abs / 1_000_000, abs % 1_000_000);
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{frac:06}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}
