//! Constructors for the common JOSE signature algorithms.
//!
//! Names follow the [IANA JOSE registry]. Each preset fixes the curve and
//! hash; the payload encoding and [`Options`] are left to the caller.
//!
//! [IANA JOSE registry]: https://www.iana.org/assignments/jose/jose.xhtml#web-signature-encryption-algorithms

use crate::{
    algorithm::{EcDsa, EdDsa, Rsa},
    curve::{EcDsaCurve, EdDsaCurve},
    encoding::PayloadEncoding,
    error::{Error, Unexpected},
    hash::HashAlgorithm,
    options::Options,
};

/// `EdDSA` over Ed25519 with SHA-512.
///
/// # Errors
///
/// See [`EdDsa::new`].
pub fn ed25519(payload_encoding: PayloadEncoding, options: Options) -> Result<EdDsa, Error> {
    EdDsa::new(
        EdDsaCurve::Ed25519,
        HashAlgorithm::Sha2_512,
        payload_encoding,
        options,
    )
}

/// `EdDSA` over Ed448 with SHAKE-256.
///
/// # Errors
///
/// See [`EdDsa::new`].
pub fn ed448(payload_encoding: PayloadEncoding, options: Options) -> Result<EdDsa, Error> {
    EdDsa::new(
        EdDsaCurve::Ed448,
        HashAlgorithm::Shake256,
        payload_encoding,
        options,
    )
}

/// RSA PKCS #1 v1.5 with SHA-256.
///
/// # Errors
///
/// See [`Rsa::new`].
pub fn rs256(
    key_length: u64,
    payload_encoding: PayloadEncoding,
    options: Options,
) -> Result<Rsa, Error> {
    Rsa::new(HashAlgorithm::Sha2_256, key_length, payload_encoding, options)
}

/// RSA PKCS #1 v1.5 with SHA-384.
///
/// # Errors
///
/// See [`Rsa::new`].
pub fn rs384(
    key_length: u64,
    payload_encoding: PayloadEncoding,
    options: Options,
) -> Result<Rsa, Error> {
    Rsa::new(HashAlgorithm::Sha2_384, key_length, payload_encoding, options)
}

/// RSA PKCS #1 v1.5 with SHA-512.
///
/// # Errors
///
/// See [`Rsa::new`].
pub fn rs512(
    key_length: u64,
    payload_encoding: PayloadEncoding,
    options: Options,
) -> Result<Rsa, Error> {
    Rsa::new(HashAlgorithm::Sha2_512, key_length, payload_encoding, options)
}

/// ECDSA over P-256 with SHA-256.
///
/// # Errors
///
/// See [`EcDsa::new`].
pub fn es256(payload_encoding: PayloadEncoding, options: Options) -> Result<EcDsa, Error> {
    EcDsa::new(
        EcDsaCurve::P256,
        HashAlgorithm::Sha2_256,
        payload_encoding,
        options,
    )
}

/// ECDSA over `secp256k1` with SHA-256.
///
/// # Errors
///
/// See [`EcDsa::new`].
pub fn es256k(payload_encoding: PayloadEncoding, options: Options) -> Result<EcDsa, Error> {
    EcDsa::new(
        EcDsaCurve::Secp256k1,
        HashAlgorithm::Sha2_256,
        payload_encoding,
        options,
    )
}

/// ECDSA over P-384 with SHA-384.
///
/// # Errors
///
/// See [`EcDsa::new`].
pub fn es384(payload_encoding: PayloadEncoding, options: Options) -> Result<EcDsa, Error> {
    EcDsa::new(
        EcDsaCurve::P384,
        HashAlgorithm::Sha2_384,
        payload_encoding,
        options,
    )
}

/// ECDSA over P-521 with SHA-512.
///
/// # Errors
///
/// See [`EcDsa::new`].
pub fn es512(payload_encoding: PayloadEncoding, options: Options) -> Result<EcDsa, Error> {
    EcDsa::new(
        EcDsaCurve::P521,
        HashAlgorithm::Sha2_512,
        payload_encoding,
        options,
    )
}

/// Ethereum `personal_sign`: `secp256k1` with Keccak-256 over an EIP-191
/// message.
///
/// `inner` is the encoding of the wrapped message, either
/// [`PayloadEncoding::Verbatim`] or [`PayloadEncoding::DagCbor`] (or an
/// already wrapped EIP-191 form).
///
/// # Errors
///
/// Returns [`Error::UnsupportedPayloadEncoding`] if `inner` cannot be
/// wrapped, otherwise see [`EcDsa::new`].
pub fn eip191(inner: PayloadEncoding, options: Options) -> Result<EcDsa, Error> {
    let payload_encoding = inner.eip191_wrapped().ok_or_else(|| {
        Error::UnsupportedPayloadEncoding(Unexpected::Value(inner.multicodec_code()))
    })?;

    EcDsa::new(
        EcDsaCurve::Secp256k1,
        HashAlgorithm::Keccak256,
        payload_encoding,
        options,
    )
}
