//! Signature algorithm configuration.

pub mod custom;
pub mod ecdsa;
pub mod eddsa;
pub mod rsa;

use crate::{
    encoding::PayloadEncoding,
    error::Error,
    hash::HashAlgorithm,
    header::{Discriminator, Header, Version},
};
pub use self::{custom::Custom, ecdsa::EcDsa, eddsa::EdDsa, rsa::Rsa};

/// Describes a signature algorithm's varsig fields.
///
/// This trait captures what is needed to encode a varsig and check its
/// signature length. It does NOT know about signers or verifiers.
pub trait SignatureAlgorithm: Into<Varsig> {
    /// The shared header fields.
    fn header(&self) -> &Header;

    /// Signature length the algorithm requires, if it is fixed.
    fn expected_signature_len(&self) -> Option<u64>;

    /// Write the algorithm-specific fields between the discriminator and the
    /// payload encoding.
    fn encode_fields(&self, buf: &mut Vec<u8>);

    /// Append the complete varsig to `buf`.
    fn encode_to(&self, buf: &mut Vec<u8>) {
        let header = self.header();
        header.encode_lead(buf);
        self.encode_fields(buf);
        header.encode_tail(buf);
    }

    /// The complete varsig as bytes.
    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(16 + self.header().signature().len());
        self.encode_to(&mut buf);
        buf
    }
}

/// Check the signature presence and length rules for a candidate value.
///
/// A legacy varsig with no signature is still handed back, boxed inside
/// [`Error::MissingSignature`].
pub(crate) fn validate<A: SignatureAlgorithm>(candidate: A) -> Result<A, Error> {
    let header = candidate.header();
    let actual = header.signature().len() as u64;

    match header.version() {
        Version::V1 if actual > 0 => Err(Error::UnexpectedSignaturePresent),
        Version::V1 => Ok(candidate),
        Version::V0 if actual == 0 => Err(Error::MissingSignature(Box::new(candidate.into()))),
        Version::V0 => match candidate.expected_signature_len() {
            Some(expected) if expected != actual => {
                Err(Error::UnexpectedSignatureSize { expected, actual })
            }
            _ => Ok(candidate),
        },
    }
}

/// A decoded (or to-be-encoded) varsig.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Varsig {
    /// `EdDSA` signature configuration.
    EdDsa(EdDsa),

    /// ECDSA signature configuration.
    EcDsa(EcDsa),

    /// RSA signature configuration.
    Rsa(Rsa),

    /// Any other algorithm, decoded by a registered decoder.
    Custom(Custom),
}

impl Varsig {
    /// The shared header fields.
    #[must_use]
    pub fn header(&self) -> &Header {
        match self {
            Varsig::EdDsa(v) => v.header(),
            Varsig::EcDsa(v) => v.header(),
            Varsig::Rsa(v) => v.header(),
            Varsig::Custom(v) => v.header(),
        }
    }

    /// The varsig version.
    #[must_use]
    pub fn version(&self) -> Version {
        self.header().version()
    }

    /// The signing algorithm code.
    #[must_use]
    pub fn discriminator(&self) -> Discriminator {
        self.header().discriminator()
    }

    /// The canonical encoding of the signed payload.
    #[must_use]
    pub fn payload_encoding(&self) -> PayloadEncoding {
        self.header().payload_encoding()
    }

    /// The raw signature. Always empty for v1.
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        self.header().signature()
    }

    /// The hash algorithm, for algorithms that record one.
    #[must_use]
    pub fn hash(&self) -> Option<HashAlgorithm> {
        match self {
            Varsig::EdDsa(v) => Some(v.hash()),
            Varsig::EcDsa(v) => Some(v.hash()),
            Varsig::Rsa(v) => Some(v.hash()),
            Varsig::Custom(_) => None,
        }
    }

    /// Signature length the algorithm requires, if it is fixed.
    #[must_use]
    pub fn expected_signature_len(&self) -> Option<u64> {
        match self {
            Varsig::EdDsa(v) => v.expected_signature_len(),
            Varsig::EcDsa(v) => v.expected_signature_len(),
            Varsig::Rsa(v) => v.expected_signature_len(),
            Varsig::Custom(v) => v.expected_signature_len(),
        }
    }

    /// Append the complete varsig to `buf`.
    pub fn encode_to(&self, buf: &mut Vec<u8>) {
        match self {
            Varsig::EdDsa(v) => v.encode_to(buf),
            Varsig::EcDsa(v) => v.encode_to(buf),
            Varsig::Rsa(v) => v.encode_to(buf),
            Varsig::Custom(v) => v.encode_to(buf),
        }
    }

    /// The complete varsig as bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(16 + self.signature().len());
        self.encode_to(&mut buf);
        buf
    }

    /// The `EdDSA` configuration, if this is one.
    #[must_use]
    pub const fn as_eddsa(&self) -> Option<&EdDsa> {
        match self {
            Varsig::EdDsa(v) => Some(v),
            _ => None,
        }
    }

    /// The ECDSA configuration, if this is one.
    #[must_use]
    pub const fn as_ecdsa(&self) -> Option<&EcDsa> {
        match self {
            Varsig::EcDsa(v) => Some(v),
            _ => None,
        }
    }

    /// The RSA configuration, if this is one.
    #[must_use]
    pub const fn as_rsa(&self) -> Option<&Rsa> {
        match self {
            Varsig::Rsa(v) => Some(v),
            _ => None,
        }
    }

    /// The custom configuration, if this is one.
    #[must_use]
    pub const fn as_custom(&self) -> Option<&Custom> {
        match self {
            Varsig::Custom(v) => Some(v),
            _ => None,
        }
    }
}

impl From<EdDsa> for Varsig {
    fn from(v: EdDsa) -> Self {
        Varsig::EdDsa(v)
    }
}

impl From<EcDsa> for Varsig {
    fn from(v: EcDsa) -> Self {
        Varsig::EcDsa(v)
    }
}

impl From<Rsa> for Varsig {
    fn from(v: Rsa) -> Self {
        Varsig::Rsa(v)
    }
}

impl From<Custom> for Varsig {
    fn from(v: Custom) -> Self {
        Varsig::Custom(v)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Varsig {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.encode())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Varsig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <serde_bytes::ByteBuf as serde::Deserialize>::deserialize(deserializer)?;
        crate::decode(&bytes).map_err(serde::de::Error::custom)
    }
}
