//! Varsig codec errors.

use crate::{header::Discriminator, varint::ReadError, Varsig};
use thiserror::Error;

/// What was wrong with a field that failed to decode.
#[derive(Debug, Error)]
pub enum Unexpected {
    /// The field was read, but its value is outside the known set.
    #[error("unexpected value {0:#x}")]
    Value(u64),

    /// The field could not be read at all.
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Errors produced while encoding, decoding, or constructing a [`Varsig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The leading varint is missing or is not the varsig prefix (`0x34`).
    #[error("varsig prefix not found: {0}")]
    BadPrefix(#[source] Unexpected),

    /// The version field is in the reserved range `2..64`.
    #[error("unsupported version: {0}")]
    UnsupportedVersion(#[source] Unexpected),

    /// No decoder is registered for the signing algorithm.
    #[error("unknown signing algorithm: {0}")]
    UnknownDiscriminator(#[source] Unexpected),

    /// The hash algorithm is not a supported multihash code.
    #[error("unknown hash algorithm: {0}")]
    UnknownHash(#[source] Unexpected),

    /// The payload encoding is not supported.
    #[error("unsupported payload encoding: {0}")]
    UnsupportedPayloadEncoding(#[source] Unexpected),

    /// The curve is neither Ed25519 nor Ed448.
    #[error("unknown Edwards curve: {0}")]
    UnknownEdDsaCurve(#[source] Unexpected),

    /// The curve is not one of the supported ECDSA curves.
    #[error("unknown ECDSA curve: {0}")]
    UnknownEcDsaCurve(#[source] Unexpected),

    /// A legacy (v0) varsig carried no signature bytes.
    ///
    /// Some transitional encodings (UCAN v1 headers among them) rely on this,
    /// so the header-only value is returned inside the error. It describes
    /// the signature scheme but cannot be used to parse a signature.
    #[error("missing signature expected in varsig v0")]
    MissingSignature(Box<Varsig>),

    /// The signature length does not match the algorithm.
    #[error("unexpected signature size in varsig v0: expected {expected} bytes, got {actual}")]
    UnexpectedSignatureSize {
        /// Length required by the algorithm (or RSA key length).
        expected: u64,

        /// Length that was actually present.
        actual: u64,
    },

    /// A canonical (v1) varsig had trailing signature bytes.
    #[error("unexpected signature present in varsig >= v1")]
    UnexpectedSignaturePresent,

    /// The algorithm is known, but decoding it is not implemented.
    #[error("not yet implemented: signing algorithm {0}")]
    NotYetImplemented(Discriminator),

    /// A field that is not covered by a more specific kind could not be read.
    #[error("failed to read varsig: {0}")]
    Read(#[from] ReadError),
}

/// The kind of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// See [`Error::BadPrefix`].
    BadPrefix,

    /// See [`Error::UnsupportedVersion`].
    UnsupportedVersion,

    /// See [`Error::UnknownDiscriminator`].
    UnknownDiscriminator,

    /// See [`Error::UnknownHash`].
    UnknownHash,

    /// See [`Error::UnsupportedPayloadEncoding`].
    UnsupportedPayloadEncoding,

    /// See [`Error::UnknownEdDsaCurve`].
    UnknownEdDsaCurve,

    /// See [`Error::UnknownEcDsaCurve`].
    UnknownEcDsaCurve,

    /// See [`Error::MissingSignature`].
    MissingSignature,

    /// See [`Error::UnexpectedSignatureSize`].
    UnexpectedSignatureSize,

    /// See [`Error::UnexpectedSignaturePresent`].
    UnexpectedSignaturePresent,

    /// See [`Error::NotYetImplemented`].
    NotYetImplemented,

    /// See [`Error::Read`].
    Read,
}

impl Error {
    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BadPrefix(_) => ErrorKind::BadPrefix,
            Error::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
            Error::UnknownDiscriminator(_) => ErrorKind::UnknownDiscriminator,
            Error::UnknownHash(_) => ErrorKind::UnknownHash,
            Error::UnsupportedPayloadEncoding(_) => ErrorKind::UnsupportedPayloadEncoding,
            Error::UnknownEdDsaCurve(_) => ErrorKind::UnknownEdDsaCurve,
            Error::UnknownEcDsaCurve(_) => ErrorKind::UnknownEcDsaCurve,
            Error::MissingSignature(_) => ErrorKind::MissingSignature,
            Error::UnexpectedSignatureSize { .. } => ErrorKind::UnexpectedSignatureSize,
            Error::UnexpectedSignaturePresent => ErrorKind::UnexpectedSignaturePresent,
            Error::NotYetImplemented(_) => ErrorKind::NotYetImplemented,
            Error::Read(_) => ErrorKind::Read,
        }
    }

    /// Whether the input ran out while reading a field.
    ///
    /// This holds regardless of which field was being read, so callers can
    /// distinguish truncated input from structurally invalid input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        let read = match self {
            Error::Read(err) => Some(err),
            _ => match self.unexpected() {
                Some(Unexpected::Read(err)) => Some(err),
                _ => None,
            },
        };

        matches!(read, Some(ReadError::UnexpectedEof))
    }

    /// The header-only value carried by [`Error::MissingSignature`].
    #[must_use]
    pub fn descriptor(&self) -> Option<&Varsig> {
        match self {
            Error::MissingSignature(varsig) => Some(&**varsig),
            _ => None,
        }
    }

    /// Take the header-only value out of [`Error::MissingSignature`].
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged for every other kind.
    pub fn into_descriptor(self) -> Result<Varsig, Error> {
        match self {
            Error::MissingSignature(varsig) => Ok(*varsig),
            other => Err(other),
        }
    }

    fn unexpected(&self) -> Option<&Unexpected> {
        match self {
            Error::BadPrefix(u)
            | Error::UnsupportedVersion(u)
            | Error::UnknownDiscriminator(u)
            | Error::UnknownHash(u)
            | Error::UnsupportedPayloadEncoding(u)
            | Error::UnknownEdDsaCurve(u)
            | Error::UnknownEcDsaCurve(u) => Some(u),
            _ => None,
        }
    }
}
