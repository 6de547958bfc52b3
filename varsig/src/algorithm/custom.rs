//! Algorithms outside the built-in set.
//!
//! A [`Custom`] varsig is a discriminator followed by a fixed number of
//! varint configuration tags. Register [`Custom::decode_with`] on a
//! [`Registry`](crate::Registry) to decode one.

use super::{validate, SignatureAlgorithm, Varsig};
use crate::{
    encoding::PayloadEncoding,
    error::{Error, Unexpected},
    header::{Discriminator, Header, Version},
    options::Options,
    varint,
};
use std::io::Read;

/// An algorithm described only by its discriminator and raw config tags.
///
/// No signature length is known, so a legacy signature only has to be
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Custom {
    header: Header,
    config: Vec<u64>,
}

impl Custom {
    /// Create and validate a custom varsig.
    ///
    /// # Errors
    ///
    /// With [`Options::legacy`], returns [`Error::UnknownDiscriminator`] if
    /// the discriminator is below `64` (it would read back as a version),
    /// and [`Error::MissingSignature`] if the signature is empty.
    pub fn new(
        discriminator: Discriminator,
        config: Vec<u64>,
        payload_encoding: PayloadEncoding,
        options: Options,
    ) -> Result<Self, Error> {
        let (version, signature) = options.into_parts();
        check_legacy_discriminator(version, discriminator)?;

        validate(Custom {
            header: Header::new(version, discriminator, payload_encoding, signature),
            config,
        })
    }

    /// The configuration tags, in wire order.
    #[must_use]
    pub fn config(&self) -> &[u64] {
        &self.config
    }

    /// A registry decoder that reads `arity` config tags.
    ///
    /// The decoder applies the same discriminator rule as [`Custom::new`],
    /// so every value it returns encodes back to bytes it accepts.
    pub fn decode_with(
        arity: usize,
    ) -> impl Fn(&mut dyn Read, Version, Discriminator) -> Result<Varsig, Error> + Send + Sync + Clone
    {
        move |reader: &mut dyn Read, version: Version, discriminator: Discriminator| {
            Self::decode(reader, arity, version, discriminator)
        }
    }

    fn decode(
        reader: &mut dyn Read,
        arity: usize,
        version: Version,
        discriminator: Discriminator,
    ) -> Result<Varsig, Error> {
        check_legacy_discriminator(version, discriminator)?;

        let config = (0..arity)
            .map(|_| varint::read_u64(reader))
            .collect::<Result<Vec<_>, _>>()?;
        let header = Header::decode_tail(reader, version, discriminator)?;

        validate(Custom { header, config }).map(Varsig::Custom)
    }
}

/// A legacy discriminator below `64` would read back as a version.
fn check_legacy_discriminator(version: Version, discriminator: Discriminator) -> Result<(), Error> {
    if version == Version::V0 && !discriminator.is_legacy_compatible() {
        return Err(Error::UnknownDiscriminator(Unexpected::Value(
            discriminator.code(),
        )));
    }
    Ok(())
}

impl SignatureAlgorithm for Custom {
    fn header(&self) -> &Header {
        &self.header
    }

    fn expected_signature_len(&self) -> Option<u64> {
        None
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        for tag in &self.config {
            varint::write_u64(buf, *tag);
        }
    }
}
