//! Multihash algorithms.
//!
//! This is separate from the `multihash-codetable` crate
//! because we don't need any of the actual hashing functionality,
//! only the multicodec tags.

use crate::{
    error::{Error, Unexpected},
    varint,
};
use std::{fmt, io::Read};

/// Hash algorithm applied to the encoded payload before signing.
///
/// Discriminants are the multicodec codes written on the wire.
#[repr(u64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashAlgorithm {
    /// SHA2-224
    Sha2_224 = 0x1013,

    /// SHA2-256
    Sha2_256 = 0x12,

    /// SHA2-384
    Sha2_384 = 0x20,

    /// SHA2-512
    Sha2_512 = 0x13,

    /// SHA2-512/224
    Sha2_512_224 = 0x1014,

    /// SHA2-512/256
    Sha2_512_256 = 0x1015,

    /// SHA3-224
    Sha3_224 = 0x17,

    /// SHA3-256
    Sha3_256 = 0x16,

    /// SHA3-384
    Sha3_384 = 0x15,

    /// SHA3-512
    Sha3_512 = 0x14,

    /// BLAKE2s-256
    Blake2s256 = 0xb260,

    /// BLAKE2b-256
    Blake2b256 = 0xb220,

    /// BLAKE2b-384
    Blake2b384 = 0xb230,

    /// BLAKE2b-512
    Blake2b512 = 0xb240,

    /// SHAKE-256
    Shake256 = 0x19,

    /// Keccak-256
    Keccak256 = 0x1b,

    /// Keccak-512
    Keccak512 = 0x1d,

    /// RIPEMD-160. Weak; kept to read old varsigs.
    Ripemd160 = 0x1053,

    /// MD4. Weak; kept to read old varsigs.
    Md4 = 0xd4,

    /// MD5. Weak; kept to read old varsigs.
    Md5 = 0xd5,

    /// SHA-1. Weak; kept to read old varsigs.
    Sha1 = 0x11,
}

impl HashAlgorithm {
    /// Every supported hash algorithm.
    pub const ALL: [HashAlgorithm; 21] = [
        HashAlgorithm::Sha2_224,
        HashAlgorithm::Sha2_256,
        HashAlgorithm::Sha2_384,
        HashAlgorithm::Sha2_512,
        HashAlgorithm::Sha2_512_224,
        HashAlgorithm::Sha2_512_256,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2s256,
        HashAlgorithm::Blake2b256,
        HashAlgorithm::Blake2b384,
        HashAlgorithm::Blake2b512,
        HashAlgorithm::Shake256,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Keccak512,
        HashAlgorithm::Ripemd160,
        HashAlgorithm::Md4,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
    ];

    /// Multihash tag for this hasher.
    #[must_use]
    pub const fn multihash_tag(self) -> u64 {
        self as u64
    }

    /// Whether this algorithm is only supported for backward compatibility.
    #[must_use]
    pub const fn is_weak(self) -> bool {
        matches!(
            self,
            HashAlgorithm::Ripemd160 | HashAlgorithm::Md4 | HashAlgorithm::Md5 | HashAlgorithm::Sha1
        )
    }

    /// The multicodec table name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha2_224 => "sha2-224",
            HashAlgorithm::Sha2_256 => "sha2-256",
            HashAlgorithm::Sha2_384 => "sha2-384",
            HashAlgorithm::Sha2_512 => "sha2-512",
            HashAlgorithm::Sha2_512_224 => "sha2-512-224",
            HashAlgorithm::Sha2_512_256 => "sha2-512-256",
            HashAlgorithm::Sha3_224 => "sha3-224",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_384 => "sha3-384",
            HashAlgorithm::Sha3_512 => "sha3-512",
            HashAlgorithm::Blake2s256 => "blake2s-256",
            HashAlgorithm::Blake2b256 => "blake2b-256",
            HashAlgorithm::Blake2b384 => "blake2b-384",
            HashAlgorithm::Blake2b512 => "blake2b-512",
            HashAlgorithm::Shake256 => "shake-256",
            HashAlgorithm::Keccak256 => "keccak-256",
            HashAlgorithm::Keccak512 => "keccak-512",
            HashAlgorithm::Ripemd160 => "ripemd-160",
            HashAlgorithm::Md4 => "md4",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
        }
    }

    /// Read and validate a hash algorithm field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHash`] if the tag is not a supported hash, or
    /// if the input ends before the tag is complete.
    pub fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, Error> {
        let tag = varint::read_u64(reader).map_err(|e| Error::UnknownHash(e.into()))?;
        let hash = Self::try_from(tag)?;

        if hash.is_weak() {
            tracing::warn!(%hash, "varsig uses a weak legacy hash algorithm");
        }

        Ok(hash)
    }

    /// Append the hash algorithm tag to `buf`.
    pub fn encode_to(self, buf: &mut Vec<u8>) {
        varint::write_u64(buf, self.multihash_tag());
    }
}

impl TryFrom<u64> for HashAlgorithm {
    type Error = Error;

    fn try_from(tag: u64) -> Result<Self, Self::Error> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|hash| hash.multihash_tag() == tag)
            .ok_or(Error::UnknownHash(Unexpected::Value(tag)))
    }
}

impl From<HashAlgorithm> for u64 {
    fn from(hash: HashAlgorithm) -> Self {
        hash.multihash_tag()
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
