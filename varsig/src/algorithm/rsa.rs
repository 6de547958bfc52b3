//! RSA (PKCS #1 v1.5) signature algorithm.
//!
//! ```text
//! v1 := 0x34 0x01 0x1205 hash key-length payload-encoding
//! v0 := 0x34 0x1205 hash key-length payload-encoding signature
//! ```

use super::{validate, SignatureAlgorithm, Varsig};
use crate::{
    encoding::PayloadEncoding,
    error::Error,
    hash::HashAlgorithm,
    header::{Discriminator, Header, Version},
    options::Options,
    varint,
};
use std::io::Read;

/// The RSA signature algorithm.
///
/// The key length is in bytes, and is also the signature length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rsa {
    header: Header,
    hash: HashAlgorithm,
    key_length: u64,
}

impl Rsa {
    /// Create and validate an RSA varsig.
    ///
    /// # Errors
    ///
    /// With [`Options::legacy`], returns [`Error::UnexpectedSignatureSize`]
    /// if the signature is not `key_length` bytes, or
    /// [`Error::MissingSignature`] if it is empty.
    pub fn new(
        hash: HashAlgorithm,
        key_length: u64,
        payload_encoding: PayloadEncoding,
        options: Options,
    ) -> Result<Self, Error> {
        let (version, signature) = options.into_parts();

        validate(Rsa {
            header: Header::new(version, Discriminator::RSA, payload_encoding, signature),
            hash,
            key_length,
        })
    }

    /// The hash algorithm applied to the payload before signing.
    #[must_use]
    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// The key (and signature) length in bytes.
    #[must_use]
    pub const fn key_length(&self) -> u64 {
        self.key_length
    }

    /// Registry decoder for [`Discriminator::RSA`].
    ///
    /// # Errors
    ///
    /// Propagates field errors. A missing key length is [`Error::Read`].
    pub fn decode(
        reader: &mut dyn Read,
        version: Version,
        discriminator: Discriminator,
    ) -> Result<Varsig, Error> {
        let hash = HashAlgorithm::decode(reader)?;
        let key_length = varint::read_u64(reader)?;
        let header = Header::decode_tail(reader, version, discriminator)?;

        validate(Rsa {
            header,
            hash,
            key_length,
        })
        .map(Varsig::Rsa)
    }
}

impl SignatureAlgorithm for Rsa {
    fn header(&self) -> &Header {
        &self.header
    }

    fn expected_signature_len(&self) -> Option<u64> {
        Some(self.key_length)
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        self.hash.encode_to(buf);
        varint::write_u64(buf, self.key_length);
    }
}
