//! Binary payload carried as base64 on the wire.

use bytes::Bytes;

/// Opaque binary data, encoded as a base64 string in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Bytes);

impl Blob {
    /// Wrap the given bytes.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap into the underlying buffer.
    #[must_use]
    pub fn into_inner(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for Blob {
    fn from(value: Bytes) -> Self {
        Self(value)
    }
}

impl From<Vec<u8>> for Blob {
    fn from(value: Vec<u8>) -> Self {
        Self(Bytes::from(value))
    }
}

impl From<&'static [u8]> for Blob {
    fn from(value: &'static [u8]) -> Self {
        Self(Bytes::from_static(value))
    }
}
