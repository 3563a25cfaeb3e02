//! Error types for GAD encoding and decoding.
//!
//! Every failure is reported as a single owned [`GadError`] carrying the
//! result kind, the type tag being processed (if one was known) and a
//! formatted log message.

use std::fmt;

use thiserror::Error;

use crate::pdu::{type_name, GadType};

/// Classification of a codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: wrong length, reserved bit set, unencodable value.
    InvalidArgument,
    /// Structurally valid type tag without an implemented codec.
    NotSupported,
}

impl ErrorKind {
    /// Returns the negative errno this kind maps to (`-EINVAL` or `-ENOTSUP`).
    #[must_use]
    pub const fn errno(self) -> i32 {
        match self {
            Self::InvalidArgument => -22,
            Self::NotSupported => -95,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::NotSupported => f.write_str("not supported"),
        }
    }
}

/// Direction of the operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encoding,
    Decoding,
}

impl Direction {
    const fn verb(self) -> &'static str {
        match self {
            Self::Encoding => "encoding",
            Self::Decoding => "decoding",
        }
    }
}

/// Error returned by [`crate::pdu::encode`] and [`crate::pdu::decode`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GadError {
    kind: ErrorKind,
    type_code: Option<u8>,
    message: String,
}

impl GadError {
    /// Creates a decoding error.
    ///
    /// `type_code` is `None` when the failure happened before a type tag could
    /// be read; the message then omits the type name.
    pub(crate) fn decoding(
        kind: ErrorKind,
        type_code: Option<u8>,
        detail: impl fmt::Display,
    ) -> Self {
        Self::new(Direction::Decoding, kind, type_code, detail)
    }

    /// Creates an encoding error for the given PDU type.
    pub(crate) fn encoding(kind: ErrorKind, gad_type: GadType, detail: impl fmt::Display) -> Self {
        Self::new(Direction::Encoding, kind, Some(gad_type.code()), detail)
    }

    fn new(
        direction: Direction,
        kind: ErrorKind,
        type_code: Option<u8>,
        detail: impl fmt::Display,
    ) -> Self {
        let message = type_code.map_or_else(
            || format!("Error {} GAD: {detail}", direction.verb()),
            |code| format!("Error {} GAD {}: {detail}", direction.verb(), type_name(code)),
        );
        Self {
            kind,
            type_code,
            message,
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the result code as a negative errno.
    #[must_use]
    pub const fn errno(&self) -> i32 {
        self.kind.errno()
    }

    /// Returns the raw 4-bit type tag, or `None` for the unknown-type sentinel.
    #[must_use]
    pub const fn type_code(&self) -> Option<u8> {
        self.type_code
    }

    /// Returns the PDU type, if the tag is one of the defined types.
    #[must_use]
    pub fn gad_type(&self) -> Option<GadType> {
        self.type_code.and_then(GadType::from_code)
    }

    /// Returns the human readable log message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for GAD codec operations.
pub type Result<T> = std::result::Result<T, GadError>;
