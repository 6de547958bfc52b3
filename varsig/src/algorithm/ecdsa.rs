//! ECDSA signature algorithms.
//!
//! ```text
//! v1 := 0x34 0x01 0xec curve hash payload-encoding
//! v0 := 0x34 curve hash payload-encoding signature
//! ```

use super::{validate, SignatureAlgorithm, Varsig};
use crate::{
    curve::EcDsaCurve,
    encoding::PayloadEncoding,
    error::Error,
    hash::HashAlgorithm,
    header::{Discriminator, Header, Version},
    options::Options,
    varint,
};
use std::io::Read;

/// The ECDSA signature algorithm.
///
/// Signatures are the fixed-width `r || s` concatenation for the curve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EcDsa {
    header: Header,
    curve: EcDsaCurve,
    hash: HashAlgorithm,
}

impl EcDsa {
    /// Create and validate an ECDSA varsig.
    ///
    /// # Errors
    ///
    /// Same signature rules as [`EdDsa::new`](super::EdDsa::new).
    pub fn new(
        curve: EcDsaCurve,
        hash: HashAlgorithm,
        payload_encoding: PayloadEncoding,
        options: Options,
    ) -> Result<Self, Error> {
        let (version, signature) = options.into_parts();
        let discriminator = match version {
            Version::V0 => curve.legacy_discriminator(),
            Version::V1 => Discriminator::ECDSA,
        };

        validate(EcDsa {
            header: Header::new(version, discriminator, payload_encoding, signature),
            curve,
            hash,
        })
    }

    /// The curve used to generate the signature.
    #[must_use]
    pub const fn curve(&self) -> EcDsaCurve {
        self.curve
    }

    /// The hash algorithm applied to the payload before signing.
    #[must_use]
    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Registry decoder for ECDSA discriminators.
    ///
    /// In the legacy layout the discriminator must be one of the curve codes;
    /// the generic `0xec` is rejected as [`Error::UnknownEcDsaCurve`].
    ///
    /// # Errors
    ///
    /// Propagates field errors, and the signature rules of [`EcDsa::new`].
    pub fn decode(
        reader: &mut dyn Read,
        version: Version,
        discriminator: Discriminator,
    ) -> Result<Varsig, Error> {
        let candidate = match version {
            Version::V0 => Self::decode_v0(reader, discriminator)?,
            Version::V1 => Self::decode_v1(reader, discriminator)?,
        };
        validate(candidate).map(Varsig::EcDsa)
    }

    fn decode_v0(reader: &mut dyn Read, discriminator: Discriminator) -> Result<Self, Error> {
        let curve = EcDsaCurve::try_from(discriminator.code())?;
        let hash = HashAlgorithm::decode(reader)?;
        let header = Header::decode_tail(reader, Version::V0, discriminator)?;

        Ok(EcDsa {
            header,
            curve,
            hash,
        })
    }

    fn decode_v1(reader: &mut dyn Read, discriminator: Discriminator) -> Result<Self, Error> {
        let curve = EcDsaCurve::decode(reader)?;
        let hash = HashAlgorithm::decode(reader)?;
        let header = Header::decode_tail(reader, Version::V1, discriminator)?;

        Ok(EcDsa {
            header,
            curve,
            hash,
        })
    }
}

impl SignatureAlgorithm for EcDsa {
    fn header(&self) -> &Header {
        &self.header
    }

    fn expected_signature_len(&self) -> Option<u64> {
        Some(self.curve.signature_len())
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        if self.header.version() == Version::V1 {
            varint::write_u64(buf, self.curve.code());
        }
        self.hash.encode_to(buf);
    }
}
