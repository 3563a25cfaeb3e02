//! GAD PDU data types.
//!
//! Field units are fixed across every shape:
//!
//! | Field | Type | Unit |
//! |-------|------|------|
//! | `lat` | `i32` | degrees * 1e6, -90 000 000 (S) to 90 000 000 (N) |
//! | `lon` | `i32` | degrees * 1e6, -180 000 000 (W) to 180 000 000 (E) |
//! | `unc*`, `inner_r` | `u32` | millimetres, from the uncertainty codebook |
//! | `alt` | `i32` | millimetres |
//! | angles | `i16` | degrees |
//! | confidence | `u8` | percent |

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of corner points in a [`Polygon`].
pub const POLYGON_MAX_POINTS: usize = 15;

/// GAD shape discriminant, carried in the high nibble of the first PDU byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GadType {
    /// Ellipsoid point.
    EllPoint = 0,
    /// Ellipsoid point with uncertainty circle.
    EllPointUncCircle = 1,
    /// Ellipsoid point with uncertainty ellipse.
    EllPointUncEllipse = 3,
    /// Polygon.
    Polygon = 5,
    /// Ellipsoid point with altitude.
    EllPointAlt = 8,
    /// Ellipsoid point with altitude and uncertainty ellipsoid.
    EllPointAltUncEll = 9,
    /// Ellipsoid arc.
    EllArc = 10,
    /// High accuracy ellipsoid point with uncertainty ellipse.
    HaEllPointUncEllipse = 11,
    /// High accuracy ellipsoid point with altitude and uncertainty ellipsoid.
    HaEllPointAltUncEll = 12,
}

impl GadType {
    /// All defined types in ascending code order.
    pub const ALL: [Self; 9] = [
        Self::EllPoint,
        Self::EllPointUncCircle,
        Self::EllPointUncEllipse,
        Self::Polygon,
        Self::EllPointAlt,
        Self::EllPointAltUncEll,
        Self::EllArc,
        Self::HaEllPointUncEllipse,
        Self::HaEllPointAltUncEll,
    ];

    /// Returns the 4-bit wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a type by its wire code.
    ///
    /// # Examples
    ///
    /// ```
    /// use gad_codec::pdu::GadType;
    ///
    /// assert_eq!(GadType::from_code(1), Some(GadType::EllPointUncCircle));
    /// assert_eq!(GadType::from_code(2), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::EllPoint),
            1 => Some(Self::EllPointUncCircle),
            3 => Some(Self::EllPointUncEllipse),
            5 => Some(Self::Polygon),
            8 => Some(Self::EllPointAlt),
            9 => Some(Self::EllPointAltUncEll),
            10 => Some(Self::EllArc),
            11 => Some(Self::HaEllPointUncEllipse),
            12 => Some(Self::HaEllPointAltUncEll),
            _ => None,
        }
    }

    /// Returns the display name used in logs and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EllPoint => "Ellipsoid-point",
            Self::EllPointUncCircle => "Ellipsoid-point-with-uncertainty-circle",
            Self::EllPointUncEllipse => "Ellipsoid-point-with-uncertainty-ellipse",
            Self::Polygon => "Polygon",
            Self::EllPointAlt => "Ellipsoid-point-with-altitude",
            Self::EllPointAltUncEll => "Ellipsoid-point-with-altitude-and-uncertainty-ellipsoid",
            Self::EllArc => "Ellipsoid-arc",
            Self::HaEllPointUncEllipse => "High-accuracy-ellipsoid-point-with-uncertainty-ellipse",
            Self::HaEllPointAltUncEll => {
                "High-accuracy-ellipsoid-point-with-altitude-and-uncertainty-ellipsoid"
            }
        }
    }
}

impl fmt::Display for GadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<GadType> for u8 {
    fn from(gad_type: GadType) -> Self {
        gad_type.code()
    }
}

/// Returns the display name for a raw type code, or `"unknown"`.
///
/// # Examples
///
/// ```
/// use gad_codec::pdu::type_name;
///
/// assert_eq!(type_name(5), "Polygon");
/// assert_eq!(type_name(15), "unknown");
/// ```
#[must_use]
pub const fn type_name(code: u8) -> &'static str {
    match GadType::from_code(code) {
        Some(gad_type) => gad_type.name(),
        None => "unknown",
    }
}

/// Ellipsoid point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllPoint {
    /// Latitude in micro-degrees.
    pub lat: i32,
    /// Longitude in micro-degrees.
    pub lon: i32,
}

/// Ellipsoid point with uncertainty circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllPointUncCircle {
    /// Latitude in micro-degrees.
    pub lat: i32,
    /// Longitude in micro-degrees.
    pub lon: i32,
    /// Uncertainty circle radius in millimetres.
    pub unc: u32,
}

/// Ellipsoid point with uncertainty ellipse, also used by the high accuracy variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllPointUncEllipse {
    /// Latitude in micro-degrees.
    pub lat: i32,
    /// Longitude in micro-degrees.
    pub lon: i32,
    /// Semi-major axis in millimetres.
    pub unc_semi_major: u32,
    /// Semi-minor axis in millimetres.
    pub unc_semi_minor: u32,
    /// Orientation of the major axis in degrees.
    pub major_ori: i16,
    /// Confidence in percent.
    pub confidence: u8,
}

/// Error returned when building a [`Polygon`] with too many points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonError {
    /// More corner points than a polygon can hold.
    #[error("Polygon holds at most {POLYGON_MAX_POINTS} points, got {0}")]
    TooManyPoints(usize),
}

/// Polygon of up to [`POLYGON_MAX_POINTS`] ellipsoid points.
///
/// The point limit is checked on construction and on deserialization, so
/// every `Polygon` value fits the wire layout.
///
/// # Examples
///
/// ```
/// use gad_codec::pdu::{EllPoint, Polygon, POLYGON_MAX_POINTS};
///
/// let polygon = Polygon::new(vec![EllPoint::default(); 3]).unwrap();
/// assert_eq!(polygon.points().len(), 3);
///
/// assert!(Polygon::new(vec![EllPoint::default(); POLYGON_MAX_POINTS + 1]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EllPoint>", into = "Vec<EllPoint>")]
pub struct Polygon {
    points: Vec<EllPoint>,
}

impl Polygon {
    /// Creates a polygon from its corner points in order.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::TooManyPoints`] when `points` holds more than
    /// [`POLYGON_MAX_POINTS`] entries.
    pub fn new(points: Vec<EllPoint>) -> Result<Self, PolygonError> {
        if points.len() > POLYGON_MAX_POINTS {
            return Err(PolygonError::TooManyPoints(points.len()));
        }
        Ok(Self { points })
    }

    /// Returns the corner points in order.
    #[must_use]
    pub fn points(&self) -> &[EllPoint] {
        &self.points
    }
}

impl TryFrom<Vec<EllPoint>> for Polygon {
    type Error = PolygonError;

    fn try_from(points: Vec<EllPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Polygon> for Vec<EllPoint> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

/// Ellipsoid point with altitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllPointAlt {
    /// Latitude in micro-degrees.
    pub lat: i32,
    /// Longitude in micro-degrees.
    pub lon: i32,
    /// Altitude in millimetres.
    pub alt: i32,
}

/// Ellipsoid point with altitude and uncertainty ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllPointAltUncEll {
    /// Latitude in micro-degrees.
    pub lat: i32,
    /// Longitude in micro-degrees.
    pub lon: i32,
    /// Altitude in millimetres.
    pub alt: i32,
    /// Semi-major axis in millimetres.
    pub unc_semi_major: u32,
    /// Semi-minor axis in millimetres.
    pub unc_semi_minor: u32,
    /// Orientation of the major axis in degrees.
    pub major_ori: i16,
    /// Altitude uncertainty in millimetres.
    pub unc_alt: i32,
    /// Confidence in percent.
    pub confidence: u8,
}

/// Ellipsoid arc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllArc {
    /// Latitude in micro-degrees.
    pub lat: i32,
    /// Longitude in micro-degrees.
    pub lon: i32,
    /// Inner circle radius in millimetres.
    pub inner_r: u32,
    /// Uncertainty radius in millimetres.
    pub unc_r: u32,
    /// Offset angle in degrees.
    pub ofs_angle: i16,
    /// Included angle in degrees.
    pub incl_angle: i16,
    /// Confidence in percent.
    pub confidence: u8,
}

/// High accuracy ellipsoid point with altitude and uncertainty ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaEllPointAltUncEll {
    /// Latitude in micro-degrees.
    pub lat: i32,
    /// Longitude in micro-degrees.
    pub lon: i32,
    /// Altitude in millimetres.
    pub alt: i32,
    /// Semi-major axis in millimetres.
    pub unc_semi_major: u32,
    /// Semi-minor axis in millimetres.
    pub unc_semi_minor: u32,
    /// Orientation of the major axis in degrees.
    pub major_ori: i16,
    /// Horizontal confidence in percent.
    pub h_confidence: u8,
    /// Altitude uncertainty in millimetres.
    pub unc_alt: i32,
    /// Vertical confidence in percent.
    pub v_confidence: u8,
}

/// A GAD location estimate: exactly one shape payload, selected by its variant.
///
/// # Example
///
/// ```
/// use gad_codec::pdu::{GadPdu, GadType};
///
/// let pdu = GadPdu::ell_point_unc_circle(23_000_006, 42_000_002, 442_592);
/// assert_eq!(pdu.gad_type(), GadType::EllPointUncCircle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GadPdu {
    /// Ellipsoid point.
    EllPoint(EllPoint),
    /// Ellipsoid point with uncertainty circle.
    EllPointUncCircle(EllPointUncCircle),
    /// Ellipsoid point with uncertainty ellipse.
    EllPointUncEllipse(EllPointUncEllipse),
    /// Polygon.
    Polygon(Polygon),
    /// Ellipsoid point with altitude.
    EllPointAlt(EllPointAlt),
    /// Ellipsoid point with altitude and uncertainty ellipsoid.
    EllPointAltUncEll(EllPointAltUncEll),
    /// Ellipsoid arc.
    EllArc(EllArc),
    /// High accuracy ellipsoid point with uncertainty ellipse.
    HaEllPointUncEllipse(EllPointUncEllipse),
    /// High accuracy ellipsoid point with altitude and uncertainty ellipsoid.
    HaEllPointAltUncEll(HaEllPointAltUncEll),
}

impl GadPdu {
    /// Creates an ellipsoid point with uncertainty circle.
    #[must_use]
    pub const fn ell_point_unc_circle(lat: i32, lon: i32, unc: u32) -> Self {
        Self::EllPointUncCircle(EllPointUncCircle { lat, lon, unc })
    }

    /// Returns the discriminant of the active payload.
    #[must_use]
    pub const fn gad_type(&self) -> GadType {
        match self {
            Self::EllPoint(_) => GadType::EllPoint,
            Self::EllPointUncCircle(_) => GadType::EllPointUncCircle,
            Self::EllPointUncEllipse(_) => GadType::EllPointUncEllipse,
            Self::Polygon(_) => GadType::Polygon,
            Self::EllPointAlt(_) => GadType::EllPointAlt,
            Self::EllPointAltUncEll(_) => GadType::EllPointAltUncEll,
            Self::EllArc(_) => GadType::EllArc,
            Self::HaEllPointUncEllipse(_) => GadType::HaEllPointUncEllipse,
            Self::HaEllPointAltUncEll(_) => GadType::HaEllPointAltUncEll,
        }
    }

    /// Returns a zero-valued payload for the given type.
    #[must_use]
    pub fn zeroed(gad_type: GadType) -> Self {
        match gad_type {
            GadType::EllPoint => Self::EllPoint(EllPoint::default()),
            GadType::EllPointUncCircle => Self::EllPointUncCircle(EllPointUncCircle::default()),
            GadType::EllPointUncEllipse => Self::EllPointUncEllipse(EllPointUncEllipse::default()),
            GadType::Polygon => Self::Polygon(Polygon::default()),
            GadType::EllPointAlt => Self::EllPointAlt(EllPointAlt::default()),
            GadType::EllPointAltUncEll => Self::EllPointAltUncEll(EllPointAltUncEll::default()),
            GadType::EllArc => Self::EllArc(EllArc::default()),
            GadType::HaEllPointUncEllipse => {
                Self::HaEllPointUncEllipse(EllPointUncEllipse::default())
            }
            GadType::HaEllPointAltUncEll => {
                Self::HaEllPointAltUncEll(HaEllPointAltUncEll::default())
            }
        }
    }

    /// Creates a `GadPdu` from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not describe a PDU.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts this `GadPdu` to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_match_wire_values() {
        let codes: Vec<u8> = GadType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec![0, 1, 3, 5, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn from_code_roundtrip() {
        for gad_type in GadType::ALL {
            assert_eq!(GadType::from_code(gad_type.code()), Some(gad_type));
        }
    }

    #[test]
    fn from_code_rejects_undefined() {
        for code in [2, 4, 6, 7, 13, 14, 15, 16, 0xff] {
            assert_eq!(GadType::from_code(code), None, "code {code}");
        }
    }

    #[test]
    fn type_name_defined_and_unknown() {
        assert_eq!(type_name(0), "Ellipsoid-point");
        assert_eq!(type_name(1), "Ellipsoid-point-with-uncertainty-circle");
        assert_eq!(
            type_name(12),
            "High-accuracy-ellipsoid-point-with-altitude-and-uncertainty-ellipsoid"
        );
        assert_eq!(type_name(2), "unknown");
    }

    #[test]
    fn gad_type_display_uses_name() {
        assert_eq!(GadType::EllArc.to_string(), "Ellipsoid-arc");
    }

    #[test]
    fn zeroed_matches_requested_type() {
        for gad_type in GadType::ALL {
            assert_eq!(GadPdu::zeroed(gad_type).gad_type(), gad_type);
        }
    }

    #[test]
    fn ha_ellipse_shares_payload_but_not_type() {
        let payload = EllPointUncEllipse::default();
        assert_ne!(
            GadPdu::EllPointUncEllipse(payload).gad_type(),
            GadPdu::HaEllPointUncEllipse(payload).gad_type()
        );
    }

    #[test]
    fn pdu_roundtrip_json() {
        let original = GadPdu::ell_point_unc_circle(23_000_006, -42_000_002, 442_592);
        let json = original.to_json().unwrap();
        assert!(json.contains("ell_point_unc_circle"));
        let deserialized = GadPdu::from_json(&json).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn polygon_roundtrip_json() {
        let original = GadPdu::Polygon(
            Polygon::new(vec![
                EllPoint { lat: 1, lon: 2 },
                EllPoint { lat: -3, lon: -4 },
                EllPoint { lat: 5, lon: 6 },
            ])
            .unwrap(),
        );
        let json = original.to_json().unwrap();
        assert_eq!(GadPdu::from_json(&json).unwrap(), original);
    }

    #[test]
    fn polygon_accepts_max_points() {
        let points = vec![EllPoint { lat: 1, lon: 2 }; POLYGON_MAX_POINTS];
        let polygon = Polygon::new(points.clone()).unwrap();
        assert_eq!(polygon.points(), points.as_slice());
        assert!(Polygon::new(Vec::new()).unwrap().points().is_empty());
    }

    #[test]
    fn polygon_rejects_one_point_too_many() {
        let err = Polygon::new(vec![EllPoint::default(); POLYGON_MAX_POINTS + 1]).unwrap_err();
        assert_eq!(err, PolygonError::TooManyPoints(16));
        assert_eq!(err.to_string(), "Polygon holds at most 15 points, got 16");
    }

    #[test]
    fn polygon_try_from_vec_checks_limit() {
        assert!(Polygon::try_from(vec![EllPoint::default(); POLYGON_MAX_POINTS]).is_ok());
        assert!(Polygon::try_from(vec![EllPoint::default(); 20]).is_err());
    }

    #[test]
    fn from_json_rejects_oversized_polygon() {
        let corners: Vec<String> = (0..=POLYGON_MAX_POINTS)
            .map(|i| format!("{{\"lat\":{i},\"lon\":{i}}}"))
            .collect();
        let json = format!("{{\"polygon\":[{}]}}", corners.join(","));

        let err = GadPdu::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("at most 15 points, got 16"), "{err}");

        let accepted = format!("{{\"polygon\":[{}]}}", corners[1..].join(","));
        let pdu = GadPdu::from_json(&accepted).unwrap();
        assert_eq!(pdu.gad_type(), GadType::Polygon);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(GadPdu::from_json("{\"not_a_shape\":{}}").is_err());
    }
}
