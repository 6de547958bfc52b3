//! Discriminator dispatch.
//!
//! A [`Registry`] maps each [`Discriminator`] to the function that decodes
//! the rest of the varsig. New algorithms are supported by registering a
//! decoder, without touching the built-in variants.

use crate::{
    algorithm::{EcDsa, EdDsa, Rsa, Varsig},
    error::{Error, Unexpected},
    header::{decode_header, Discriminator, Version},
};
use std::{collections::BTreeMap, fmt, io::Read, sync::Arc};

/// Decodes the fields after the discriminator.
///
/// The reader is positioned just past the discriminator. The decoder must
/// consume the payload encoding and the signature tail as well.
pub type DecodeFn =
    Arc<dyn Fn(&mut dyn Read, Version, Discriminator) -> Result<Varsig, Error> + Send + Sync>;

/// The set of signing algorithms a decoder understands.
#[derive(Clone)]
pub struct Registry {
    decoders: BTreeMap<Discriminator, DecodeFn>,
}

impl Registry {
    /// An empty registry. Every varsig is an unknown discriminator.
    #[must_use]
    pub fn new() -> Self {
        Registry {
            decoders: BTreeMap::new(),
        }
    }

    /// Register `decode` for `discriminator`, replacing any earlier decoder.
    pub fn register<F>(&mut self, discriminator: Discriminator, decode: F) -> &mut Self
    where
        F: Fn(&mut dyn Read, Version, Discriminator) -> Result<Varsig, Error>
            + Send
            + Sync
            + 'static,
    {
        self.decoders.insert(discriminator, Arc::new(decode));
        self
    }

    /// Whether a decoder is registered for `discriminator`.
    #[must_use]
    pub fn contains(&self, discriminator: Discriminator) -> bool {
        self.decoders.contains_key(&discriminator)
    }

    /// Registered discriminators, in ascending order.
    pub fn discriminators(&self) -> impl Iterator<Item = Discriminator> + '_ {
        self.decoders.keys().copied()
    }

    /// Decode a complete varsig from a byte slice.
    ///
    /// # Errors
    ///
    /// See [`Registry::decode_stream`].
    pub fn decode(&self, bytes: &[u8]) -> Result<Varsig, Error> {
        self.decode_stream(bytes)
    }

    /// Decode a varsig, reading `reader` to its end.
    ///
    /// A legacy (v0) varsig takes every remaining byte as its signature,
    /// and a v1 varsig must not be followed by anything.
    ///
    /// # Errors
    ///
    /// Header errors, [`Error::UnknownDiscriminator`] when nothing is
    /// registered for the discriminator, and whatever the decoder returns.
    #[tracing::instrument(skip_all)]
    pub fn decode_stream<R: Read>(&self, mut reader: R) -> Result<Varsig, Error> {
        let (version, discriminator) = decode_header(&mut reader)?;

        let Some(decode) = self.decoders.get(&discriminator) else {
            tracing::debug!(%discriminator, "no decoder registered");
            return Err(Error::UnknownDiscriminator(Unexpected::Value(
                discriminator.code(),
            )));
        };

        tracing::debug!(%version, %discriminator, "decoding varsig");
        let reader: &mut dyn Read = &mut reader;
        decode(reader, version, discriminator)
    }
}

impl Default for Registry {
    /// The built-in algorithms.
    fn default() -> Self {
        let mut registry = Registry::new();
        registry
            .register(Discriminator::RSA, Rsa::decode)
            .register(Discriminator::EDDSA, EdDsa::decode)
            .register(Discriminator::ED448, EdDsa::decode)
            .register(Discriminator::ECDSA, EcDsa::decode)
            .register(Discriminator::SECP256K1, EcDsa::decode)
            .register(Discriminator::P256, EcDsa::decode)
            .register(Discriminator::P384, EcDsa::decode)
            .register(Discriminator::P521, EcDsa::decode)
            .register(Discriminator::BLS12_381_G1, not_yet_implemented)
            .register(Discriminator::BLS12_381_G2, not_yet_implemented);
        registry
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.decoders.keys()).finish()
    }
}

/// A fresh registry with every built-in algorithm.
#[must_use]
pub fn default_registry() -> Registry {
    Registry::default()
}

/// Placeholder for algorithms with a discriminator but no decoder yet.
///
/// # Errors
///
/// Always [`Error::NotYetImplemented`].
pub fn not_yet_implemented(
    _reader: &mut dyn Read,
    _version: Version,
    discriminator: Discriminator,
) -> Result<Varsig, Error> {
    Err(Error::NotYetImplemented(discriminator))
}
