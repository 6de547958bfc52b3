//! Varsig header
//!
//! The fields and wire logic shared by every signing algorithm:
//!
//! ```text
//! varsig       := prefix version-disc algorithm-fields payload-encoding [signature]
//! prefix       := varint(0x34)
//! version-disc := discriminator          ; >= 64, legacy (v0) implied
//!               | varint(0) discriminator
//!               | varint(1) discriminator
//! ```
//!
//! The legacy layout never wrote a version field. Version values `2..64`
//! are reserved so that a legacy discriminator (always `>= 64`) can be told
//! apart from an explicit version by a single forward-scanning reader.

use crate::{
    encoding::PayloadEncoding,
    error::{Error, Unexpected},
    varint,
};
use std::{fmt, io::Read};

/// The multicodec for varsig, written first as a varint.
pub const PREFIX: u64 = 0x34;

/// First header value that is read as a legacy discriminator.
const LEGACY_DISCRIMINATOR_FLOOR: u64 = 64;

/// Varsig format version.
#[repr(u64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    /// Legacy layout: no version field on the wire, may carry the signature.
    V0 = 0,

    /// Canonical layout: explicit version field, never carries the signature.
    V1 = 1,
}

impl Version {
    /// The version number.
    #[must_use]
    pub const fn code(self) -> u64 {
        self as u64
    }
}

impl TryFrom<u64> for Version {
    type Error = Error;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Version::V0),
            1 => Ok(Version::V1),
            other => Err(Error::UnsupportedVersion(Unexpected::Value(other))),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.code())
    }
}

/// A numeric signing algorithm code.
///
/// This is (usually) the multicodec of the public key type. There is no
/// closed set: a [`Registry`](crate::Registry) decides which codes it
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Discriminator(u64);

impl Discriminator {
    /// `EdDSA`, generic. Also the legacy code for Ed25519.
    pub const EDDSA: Self = Self(0xed);

    /// Legacy Ed25519.
    pub const ED25519: Self = Self(0xed);

    /// Legacy Ed448.
    pub const ED448: Self = Self(0x1203);

    /// ECDSA, generic.
    pub const ECDSA: Self = Self(0xec);

    /// Legacy ECDSA over `secp256k1`.
    pub const SECP256K1: Self = Self(0xe7);

    /// Legacy ECDSA over P-256.
    pub const P256: Self = Self(0x1200);

    /// Legacy ECDSA over P-384.
    pub const P384: Self = Self(0x1201);

    /// Legacy ECDSA over P-521.
    pub const P521: Self = Self(0x1202);

    /// RSA (PKCS #1 v1.5).
    pub const RSA: Self = Self(0x1205);

    /// BLS12-381, minimal public key size.
    pub const BLS12_381_G1: Self = Self(0xea);

    /// BLS12-381, minimal signature size.
    pub const BLS12_381_G2: Self = Self(0xeb);

    /// Wrap a raw code.
    #[must_use]
    pub const fn new(code: u64) -> Self {
        Self(code)
    }

    /// The raw code.
    #[must_use]
    pub const fn code(self) -> u64 {
        self.0
    }

    /// Whether this code can be written in the legacy (v0) layout.
    #[must_use]
    pub const fn is_legacy_compatible(self) -> bool {
        self.0 >= LEGACY_DISCRIMINATOR_FLOOR
    }
}

impl From<u64> for Discriminator {
    fn from(code: u64) -> Self {
        Self(code)
    }
}

impl From<Discriminator> for u64 {
    fn from(discriminator: Discriminator) -> Self {
        discriminator.0
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Fields common to every varsig.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    version: Version,
    discriminator: Discriminator,
    payload_encoding: PayloadEncoding,
    signature: Vec<u8>,
}

impl Header {
    pub(crate) const fn new(
        version: Version,
        discriminator: Discriminator,
        payload_encoding: PayloadEncoding,
        signature: Vec<u8>,
    ) -> Self {
        Header {
            version,
            discriminator,
            payload_encoding,
            signature,
        }
    }

    /// The varsig version.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// The signing algorithm code.
    #[must_use]
    pub const fn discriminator(&self) -> Discriminator {
        self.discriminator
    }

    /// The canonical encoding of the signed payload.
    #[must_use]
    pub const fn payload_encoding(&self) -> PayloadEncoding {
        self.payload_encoding
    }

    /// The raw signature. Always empty for v1.
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Write the prefix, version (v1 only) and discriminator.
    pub(crate) fn encode_lead(&self, buf: &mut Vec<u8>) {
        encode_header(self.version, self.discriminator, buf);
    }

    /// Write the payload encoding and any signature.
    pub(crate) fn encode_tail(&self, buf: &mut Vec<u8>) {
        self.payload_encoding.encode_to(buf);
        buf.extend_from_slice(&self.signature);
    }

    /// Read the payload encoding and the signature tail.
    ///
    /// A v1 varsig must end right after the payload encoding. A v0 varsig
    /// takes every remaining byte as its signature.
    pub(crate) fn decode_tail<R: Read + ?Sized>(
        reader: &mut R,
        version: Version,
        discriminator: Discriminator,
    ) -> Result<Self, Error> {
        let payload_encoding = PayloadEncoding::decode(reader)?;

        let signature = match version {
            Version::V1 => {
                if varint::has_remaining(reader)? {
                    return Err(Error::UnexpectedSignaturePresent);
                }
                Vec::new()
            }
            Version::V0 => varint::read_remaining(reader)?,
        };

        Ok(Header::new(
            version,
            discriminator,
            payload_encoding,
            signature,
        ))
    }
}

/// Write the varsig prefix, the version (v1 only) and the discriminator.
pub fn encode_header(version: Version, discriminator: Discriminator, buf: &mut Vec<u8>) {
    varint::write_u64(buf, PREFIX);
    if version == Version::V1 {
        varint::write_u64(buf, version.code());
    }
    varint::write_u64(buf, discriminator.code());
}

/// Read the varsig prefix, version and discriminator.
///
/// # Errors
///
/// - [`Error::BadPrefix`] if the prefix is missing or is not `0x34`.
/// - [`Error::UnsupportedVersion`] if the version is in `2..64` or missing.
/// - [`Error::UnknownDiscriminator`] if an explicit version is not followed
///   by a discriminator.
pub fn decode_header<R: Read + ?Sized>(reader: &mut R) -> Result<(Version, Discriminator), Error> {
    let prefix = varint::read_u64(reader).map_err(|e| Error::BadPrefix(e.into()))?;
    if prefix != PREFIX {
        return Err(Error::BadPrefix(Unexpected::Value(prefix)));
    }

    let lead = varint::read_u64(reader).map_err(|e| Error::UnsupportedVersion(e.into()))?;
    if lead >= LEGACY_DISCRIMINATOR_FLOOR {
        return Ok((Version::V0, Discriminator(lead)));
    }

    let version = Version::try_from(lead)?;
    let discriminator =
        varint::read_u64(reader).map_err(|e| Error::UnknownDiscriminator(e.into()))?;

    Ok((version, Discriminator(discriminator)))
}
