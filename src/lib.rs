//! GAD Codec Library
//!
//! Encoding and decoding of 3GPP TS 23.032 Universal Geographical Area
//! Description (GAD) location estimates, as carried in location services
//! signalling.
//!
//! - [`transform`] converts latitude, longitude and uncertainty between
//!   real-world units and their fixed-point wire fields.
//! - [`pdu`] encodes and decodes whole PDUs and renders them for logs.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod error;
pub mod pdu;
pub mod transform;

pub use error::{ErrorKind, GadError, Result};
pub use pdu::{decode, encode, to_str, type_name, GadPdu, GadType};
