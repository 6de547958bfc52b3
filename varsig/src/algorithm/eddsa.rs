//! `EdDSA` signature algorithms.
//!
//! ```text
//! v1 := 0x34 0x01 0xed curve hash payload-encoding
//! v0 := 0x34 curve hash payload-encoding signature
//! ```
//!
//! The legacy layout has no curve field: the discriminator is the curve code.

use super::{validate, SignatureAlgorithm, Varsig};
use crate::{
    curve::EdDsaCurve,
    encoding::PayloadEncoding,
    error::Error,
    hash::HashAlgorithm,
    header::{Discriminator, Header, Version},
    options::Options,
};
use std::io::Read;

/// The `EdDSA` signature algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdDsa {
    header: Header,
    curve: EdDsaCurve,
    hash: HashAlgorithm,
}

impl EdDsa {
    /// Create and validate an `EdDSA` varsig.
    ///
    /// The hash is stored as given; it is not checked against the curve.
    ///
    /// # Errors
    ///
    /// With [`Options::legacy`], returns [`Error::UnexpectedSignatureSize`]
    /// if the signature does not match the curve, or
    /// [`Error::MissingSignature`] (carrying the value) if it is empty.
    pub fn new(
        curve: EdDsaCurve,
        hash: HashAlgorithm,
        payload_encoding: PayloadEncoding,
        options: Options,
    ) -> Result<Self, Error> {
        let (version, signature) = options.into_parts();
        let discriminator = match version {
            Version::V0 => curve.legacy_discriminator(),
            Version::V1 => Discriminator::EDDSA,
        };

        validate(EdDsa {
            header: Header::new(version, discriminator, payload_encoding, signature),
            curve,
            hash,
        })
    }

    /// The Edwards curve used to generate the signature.
    #[must_use]
    pub const fn curve(&self) -> EdDsaCurve {
        self.curve
    }

    /// The hash algorithm applied to the payload before signing.
    #[must_use]
    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Registry decoder for `EdDSA` discriminators.
    ///
    /// # Errors
    ///
    /// Propagates field errors, and the signature rules of [`EdDsa::new`].
    pub fn decode(
        reader: &mut dyn Read,
        version: Version,
        discriminator: Discriminator,
    ) -> Result<Varsig, Error> {
        let candidate = match version {
            Version::V0 => Self::decode_v0(reader, discriminator)?,
            Version::V1 => Self::decode_v1(reader, discriminator)?,
        };
        validate(candidate).map(Varsig::EdDsa)
    }

    fn decode_v0(reader: &mut dyn Read, discriminator: Discriminator) -> Result<Self, Error> {
        let curve = EdDsaCurve::try_from(discriminator.code())?;
        let hash = HashAlgorithm::decode(reader)?;
        let header = Header::decode_tail(reader, Version::V0, discriminator)?;

        Ok(EdDsa {
            header,
            curve,
            hash,
        })
    }

    fn decode_v1(reader: &mut dyn Read, discriminator: Discriminator) -> Result<Self, Error> {
        let curve = EdDsaCurve::decode(reader)?;
        let hash = HashAlgorithm::decode(reader)?;
        let header = Header::decode_tail(reader, Version::V1, discriminator)?;

        Ok(EdDsa {
            header,
            curve,
            hash,
        })
    }
}

impl SignatureAlgorithm for EdDsa {
    fn header(&self) -> &Header {
        &self.header
    }

    fn expected_signature_len(&self) -> Option<u64> {
        Some(self.curve.signature_len())
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        if self.header.version() == Version::V1 {
            crate::varint::write_u64(buf, self.curve.code());
        }
        self.hash.encode_to(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use testresult::TestResult;

    const SIG: [u8; 64] = [0xae; 64];

    #[test_log::test]
    fn v1_ed25519_vector() -> TestResult {
        let v = EdDsa::new(
            EdDsaCurve::Ed25519,
            HashAlgorithm::Sha2_512,
            PayloadEncoding::DagCbor,
            Options::default(),
        )?;
        assert_eq!(v.encode(), [0x34, 0x01, 0xed, 0x01, 0xed, 0x01, 0x13, 0x71]);
        Ok(())
    }

    #[test_log::test]
    fn v0_uses_the_curve_as_discriminator() -> TestResult {
        let v = EdDsa::new(
            EdDsaCurve::Ed448,
            HashAlgorithm::Shake256,
            PayloadEncoding::DagCbor,
            Options::legacy([0x11u8; 114]),
        )?;
        assert_eq!(v.header().discriminator(), Discriminator::ED448);

        let bytes = v.encode();
        assert_eq!(bytes[..5], [0x34, 0x83, 0x24, 0x19, 0x71]);
        assert_eq!(bytes.len(), 5 + 114);
        Ok(())
    }

    #[test_log::test]
    fn v0_decode_recovers_the_curve() -> TestResult {
        let mut bytes = vec![0x13, 0x71];
        bytes.extend_from_slice(&SIG);

        let v = EdDsa::decode(&mut bytes.as_slice(), Version::V0, Discriminator::ED25519)?;
        let eddsa = v.as_eddsa().expect("expected EdDSA");
        assert_eq!(eddsa.curve(), EdDsaCurve::Ed25519);
        assert_eq!(eddsa.hash(), HashAlgorithm::Sha2_512);
        assert_eq!(v.signature(), SIG);
        Ok(())
    }

    #[test_log::test]
    fn wrong_signature_size_is_rejected() {
        let err = EdDsa::new(
            EdDsaCurve::Ed448,
            HashAlgorithm::Shake256,
            PayloadEncoding::DagCbor,
            Options::legacy(SIG),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedSignatureSize {
                expected: 114,
                actual: 64
            }
        ));
    }

    #[test_log::test]
    fn empty_legacy_signature_still_yields_a_descriptor() -> TestResult {
        let err = EdDsa::new(
            EdDsaCurve::Ed25519,
            HashAlgorithm::Sha2_512,
            PayloadEncoding::DagCbor,
            Options::legacy(Vec::new()),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingSignature);

        let descriptor = err.into_descriptor()?;
        assert_eq!(descriptor.encode(), [0x34, 0xed, 0x01, 0x13, 0x71]);
        Ok(())
    }

    #[test_log::test]
    fn unknown_explicit_curve_is_rejected() {
        let mut cursor: &[u8] = &[0xe7, 0x01, 0x13, 0x71];
        let err = EdDsa::decode(&mut cursor, Version::V1, Discriminator::EDDSA).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownEdDsaCurve);
    }
}
