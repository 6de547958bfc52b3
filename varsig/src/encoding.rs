//! Payload encodings.
//!
//! The payload encoding names the canonical form the data was serialized to
//! before it was hashed and signed. Varsig only records it; turning a payload
//! into those bytes is left to the caller.

use crate::{
    error::{Error, Unexpected},
    varint::{self, ReadError},
};
use std::{fmt, io::Read};

/// Identity (raw bytes) multicodec tag.
pub const VERBATIM_TAG: u64 = 0x5f;

/// `DAG-PB` multicodec tag.
pub const DAG_PB_TAG: u64 = 0x70;

/// `DAG-CBOR` multicodec tag.
pub const DAG_CBOR_TAG: u64 = 0x71;

/// `DAG-JSON` multicodec tag.
pub const DAG_JSON_TAG: u64 = 0x0129;

/// Canonicalized JWT tag.
pub const JWT_TAG: u64 = 0x6a77;

/// EIP-191 tag; always followed by the tag of the wrapped encoding.
pub const EIP191_TAG: u64 = 0xe191;

/// Canonical payload encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PayloadEncoding {
    /// Identity encoding (raw bytes).
    Verbatim,

    /// `DAG-PB` encoding.
    DagPb,

    /// `DAG-CBOR` encoding.
    DagCbor,

    /// `DAG-JSON` encoding.
    DagJson,

    /// Canonicalized JWT encoding.
    Jwt,

    /// EIP-191 `personal_sign` over raw bytes.
    Eip191Raw,

    /// EIP-191 `personal_sign` over `DAG-CBOR` bytes.
    Eip191Cbor,
}

impl PayloadEncoding {
    /// Every supported payload encoding.
    pub const ALL: [PayloadEncoding; 7] = [
        PayloadEncoding::Verbatim,
        PayloadEncoding::DagPb,
        PayloadEncoding::DagCbor,
        PayloadEncoding::DagJson,
        PayloadEncoding::Jwt,
        PayloadEncoding::Eip191Raw,
        PayloadEncoding::Eip191Cbor,
    ];

    /// The multicodec tags for this encoding, in wire order.
    ///
    /// NOTE: each tag is written as its own LEB128 varint.
    #[must_use]
    pub const fn tags(self) -> &'static [u64] {
        match self {
            PayloadEncoding::Verbatim => &[VERBATIM_TAG],
            PayloadEncoding::DagPb => &[DAG_PB_TAG],
            PayloadEncoding::DagCbor => &[DAG_CBOR_TAG],
            PayloadEncoding::DagJson => &[DAG_JSON_TAG],
            PayloadEncoding::Jwt => &[JWT_TAG],
            PayloadEncoding::Eip191Raw => &[EIP191_TAG, VERBATIM_TAG],
            PayloadEncoding::Eip191Cbor => &[EIP191_TAG, DAG_CBOR_TAG],
        }
    }

    /// The outermost multicodec tag.
    #[must_use]
    pub fn multicodec_code(self) -> u64 {
        self.tags()[0]
    }

    /// The EIP-191 wrapping of this encoding, if it can be wrapped.
    #[must_use]
    pub const fn eip191_wrapped(self) -> Option<Self> {
        match self {
            PayloadEncoding::Verbatim | PayloadEncoding::Eip191Raw => {
                Some(PayloadEncoding::Eip191Raw)
            }
            PayloadEncoding::DagCbor | PayloadEncoding::Eip191Cbor => {
                Some(PayloadEncoding::Eip191Cbor)
            }
            _ => None,
        }
    }

    /// Read and validate a payload encoding field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPayloadEncoding`] for unknown tags,
    /// an EIP-191 tag wrapping anything but verbatim or `DAG-CBOR`,
    /// or input that ends before the field is complete.
    pub fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, Error> {
        match read_tag(reader)? {
            VERBATIM_TAG => Ok(PayloadEncoding::Verbatim),
            DAG_PB_TAG => Ok(PayloadEncoding::DagPb),
            DAG_CBOR_TAG => Ok(PayloadEncoding::DagCbor),
            DAG_JSON_TAG => Ok(PayloadEncoding::DagJson),
            JWT_TAG => Ok(PayloadEncoding::Jwt),
            EIP191_TAG => match read_tag(reader)? {
                VERBATIM_TAG => Ok(PayloadEncoding::Eip191Raw),
                DAG_CBOR_TAG => Ok(PayloadEncoding::Eip191Cbor),
                inner => Err(unsupported(Unexpected::Value(inner))),
            },
            other => Err(unsupported(Unexpected::Value(other))),
        }
    }

    /// Append the payload encoding tags to `buf`.
    pub fn encode_to(self, buf: &mut Vec<u8>) {
        for tag in self.tags() {
            varint::write_u64(buf, *tag);
        }
    }

    /// The payload encoding tags as bytes.
    #[must_use]
    pub fn encode(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(4);
        self.encode_to(&mut buf);
        buf
    }
}

impl fmt::Display for PayloadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PayloadEncoding::Verbatim => "verbatim",
            PayloadEncoding::DagPb => "dag-pb",
            PayloadEncoding::DagCbor => "dag-cbor",
            PayloadEncoding::DagJson => "dag-json",
            PayloadEncoding::Jwt => "jwt",
            PayloadEncoding::Eip191Raw => "eip191+verbatim",
            PayloadEncoding::Eip191Cbor => "eip191+dag-cbor",
        })
    }
}

fn read_tag<R: Read + ?Sized>(reader: &mut R) -> Result<u64, Error> {
    varint::read_u64(reader).map_err(|e: ReadError| unsupported(e.into()))
}

fn unsupported(why: Unexpected) -> Error {
    Error::UnsupportedPayloadEncoding(why)
}
