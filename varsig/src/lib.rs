//! [Varsig] codec.
//!
//! A varsig is a short, self-describing byte string that says how a
//! signature was produced: the signing algorithm, its curve or key size, the
//! hash applied to the payload, and the canonical encoding of the payload.
//! Legacy (v0) varsigs also carry the signature bytes.
//!
//! This crate only encodes and decodes that description. It does not sign,
//! verify, or hash anything.
//!
//! [Varsig]: https://github.com/ChainAgnostic/varsig
//!
//! # Example
//!
//! ```rust
//! use varsig::{presets, Options, PayloadEncoding, SignatureAlgorithm};
//!
//! # fn main() -> Result<(), varsig::Error> {
//! // ✨ Ed25519 over DAG-CBOR ✨
//! let ed25519 = presets::ed25519(PayloadEncoding::DagCbor, Options::default())?;
//! let bytes = ed25519.encode();
//! assert_eq!(bytes, [0x34, 0x01, 0xed, 0x01, 0xed, 0x01, 0x13, 0x71]);
//!
//! let decoded = varsig::decode(&bytes)?;
//! assert_eq!(decoded.payload_encoding(), PayloadEncoding::DagCbor);
//! assert_eq!(decoded.expected_signature_len(), Some(64));
//! # Ok(())
//! # }
//! ```
//!
//! Algorithms outside the built-in set are decoded by registering them:
//!
//! ```rust
//! use varsig::{Custom, Discriminator, Registry};
//!
//! # fn main() -> Result<(), varsig::Error> {
//! let mut registry = Registry::default();
//! registry.register(Discriminator::new(0x1000), Custom::decode_with(1));
//!
//! let custom = registry.decode(&[0x34, 0x01, 0x80, 0x20, 0x07, 0x5f])?;
//! assert_eq!(custom.as_custom().map(Custom::config), Some(&[0x07][..]));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod algorithm;
pub mod curve;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod header;
pub mod options;
pub mod presets;
pub mod registry;
pub mod varint;

pub use algorithm::{Custom, EcDsa, EdDsa, Rsa, SignatureAlgorithm, Varsig};
pub use curve::{EcDsaCurve, EdDsaCurve};
pub use encoding::PayloadEncoding;
pub use error::{Error, ErrorKind, Unexpected};
pub use hash::HashAlgorithm;
pub use header::{Discriminator, Header, Version};
pub use options::Options;
pub use registry::{default_registry, DecodeFn, Registry};
pub use varint::ReadError;

use std::io::Read;

/// Decode a varsig with the built-in algorithms.
///
/// # Errors
///
/// See [`Registry::decode_stream`].
pub fn decode(bytes: &[u8]) -> Result<Varsig, Error> {
    default_registry().decode(bytes)
}

/// Decode a varsig from a reader with the built-in algorithms.
///
/// The reader is consumed to its end.
///
/// # Errors
///
/// See [`Registry::decode_stream`].
pub fn decode_stream<R: Read>(reader: R) -> Result<Varsig, Error> {
    default_registry().decode_stream(reader)
}
