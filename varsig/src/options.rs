//! Constructor options.

use crate::header::Version;

/// Customization when creating a new varsig.
///
/// The default produces a canonical (v1) varsig. [`Options::legacy`] forces
/// the legacy (v0) layout, which has no version field and carries the
/// signature bytes after the payload encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Options {
    legacy_signature: Option<Vec<u8>>,
}

impl Options {
    /// Force a legacy (v0) varsig carrying `signature`.
    ///
    /// The signature must be exactly as long as the algorithm requires.
    /// An empty signature still produces a value, but only as the payload of
    /// [`Error::MissingSignature`](crate::Error::MissingSignature).
    #[must_use]
    pub fn legacy(signature: impl Into<Vec<u8>>) -> Self {
        Options {
            legacy_signature: Some(signature.into()),
        }
    }

    /// Whether a legacy (v0) varsig was requested.
    #[must_use]
    pub const fn force_version0(&self) -> bool {
        self.legacy_signature.is_some()
    }

    /// The signature to embed in a legacy varsig, if any.
    #[must_use]
    pub fn signature(&self) -> Option<&[u8]> {
        self.legacy_signature.as_deref()
    }

    /// The version these options produce.
    #[must_use]
    pub const fn version(&self) -> Version {
        if self.force_version0() {
            Version::V0
        } else {
            Version::V1
        }
    }

    pub(crate) fn into_parts(self) -> (Version, Vec<u8>) {
        match self.legacy_signature {
            Some(signature) => (Version::V0, signature),
            None => (Version::V1, Vec::new()),
        }
    }
}
