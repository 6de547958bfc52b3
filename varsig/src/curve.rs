//! This module defines the elliptic curves a varsig can describe.

use crate::{
    error::{Error, Unexpected},
    header::Discriminator,
    varint,
};
use std::{fmt, io::Read};

/// The Edwards curves used with `EdDSA`.
///
/// Discriminants are the curve codes written on the wire. In the legacy
/// layout the curve code doubles as the varsig discriminator.
#[repr(u64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdDsaCurve {
    /// The Twisted Edwards 25519 curve
    Ed25519 = 0xed,

    /// The Edwards 448 curve
    Ed448 = 0x1203,
}

impl EdDsaCurve {
    /// Every supported Edwards curve.
    pub const ALL: [EdDsaCurve; 2] = [EdDsaCurve::Ed25519, EdDsaCurve::Ed448];

    /// The curve code.
    #[must_use]
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// The discriminator for a legacy (v0) varsig on this curve.
    #[must_use]
    pub const fn legacy_discriminator(self) -> Discriminator {
        Discriminator::new(self.code())
    }

    /// Signature length in bytes.
    #[must_use]
    pub const fn signature_len(self) -> u64 {
        match self {
            EdDsaCurve::Ed25519 => 64,
            EdDsaCurve::Ed448 => 114,
        }
    }

    /// Read and validate an explicit curve field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEdDsaCurve`] if the code is unknown or the
    /// input ends early.
    pub fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, Error> {
        let code = varint::read_u64(reader).map_err(|e| Error::UnknownEdDsaCurve(e.into()))?;
        Self::try_from(code)
    }
}

impl TryFrom<u64> for EdDsaCurve {
    type Error = Error;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        match code {
            0xed => Ok(EdDsaCurve::Ed25519),
            0x1203 => Ok(EdDsaCurve::Ed448),
            other => Err(Error::UnknownEdDsaCurve(Unexpected::Value(other))),
        }
    }
}

impl fmt::Display for EdDsaCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EdDsaCurve::Ed25519 => "Ed25519",
            EdDsaCurve::Ed448 => "Ed448",
        })
    }
}

/// The elliptic curves used for ECDSA.
#[repr(u64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EcDsaCurve {
    /// `secp256k1` curve
    Secp256k1 = 0xe7,

    /// NIST P-256 (`secp256r1`) curve
    P256 = 0x1200,

    /// NIST P-384 (`secp384r1`) curve
    P384 = 0x1201,

    /// NIST P-521 (`secp521r1`) curve
    P521 = 0x1202,
}

impl EcDsaCurve {
    /// Every supported ECDSA curve.
    pub const ALL: [EcDsaCurve; 4] = [
        EcDsaCurve::Secp256k1,
        EcDsaCurve::P256,
        EcDsaCurve::P384,
        EcDsaCurve::P521,
    ];

    /// The curve code.
    #[must_use]
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// The discriminator for a legacy (v0) varsig on this curve.
    #[must_use]
    pub const fn legacy_discriminator(self) -> Discriminator {
        Discriminator::new(self.code())
    }

    /// Signature length in bytes (`r || s`).
    #[must_use]
    pub const fn signature_len(self) -> u64 {
        match self {
            EcDsaCurve::Secp256k1 | EcDsaCurve::P256 => 64,
            EcDsaCurve::P384 => 96,
            EcDsaCurve::P521 => 132,
        }
    }

    /// Read and validate an explicit curve field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEcDsaCurve`] if the code is unknown or the
    /// input ends early.
    pub fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, Error> {
        let code = varint::read_u64(reader).map_err(|e| Error::UnknownEcDsaCurve(e.into()))?;
        Self::try_from(code)
    }
}

impl TryFrom<u64> for EcDsaCurve {
    type Error = Error;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        match code {
            0xe7 => Ok(EcDsaCurve::Secp256k1),
            0x1200 => Ok(EcDsaCurve::P256),
            0x1201 => Ok(EcDsaCurve::P384),
            0x1202 => Ok(EcDsaCurve::P521),
            other => Err(Error::UnknownEcDsaCurve(Unexpected::Value(other))),
        }
    }
}

impl fmt::Display for EcDsaCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EcDsaCurve::Secp256k1 => "secp256k1",
            EcDsaCurve::P256 => "P-256",
            EcDsaCurve::P384 => "P-384",
            EcDsaCurve::P521 => "P-521",
        })
    }
}
