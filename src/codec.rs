//! Codec contract shared by every erasure-coding backend.
//!
//! A share set of length `2k` is laid out as `k` original shares followed by
//! `k` parity shares. Codecs are stateless and may be shared across threads.

use bytes::{Bytes, BytesMut};
use std::fmt;

use crate::util::Result;

/// Registry name of the FFT-based Leopard codec.
pub const LEOPARD: &str = "Leopard";
/// Registry name of the classic GF(2^8) Reed-Solomon codec.
pub const RS_GF8:  &str = "RSGF8";

/* ---------- share ---------- */

/// One position of a share set.
///
/// `Missing` carries the buffer reconstruction should write into. An empty
/// buffer with enough capacity is reused in place; anything smaller is
/// replaced by a fresh allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Share {
    Present(Bytes),
    Missing(BytesMut),
}

impl Share {
    pub fn missing() -> Self { Share::Missing(BytesMut::new()) }

    pub fn with_capacity(cap: usize) -> Self { Share::Missing(BytesMut::with_capacity(cap)) }

    /// Zero-length content counts as absent.
    pub fn is_present(&self) -> bool {
        matches!(self, Share::Present(b) if !b.is_empty())
    }

    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Share::Present(b) if !b.is_empty() => Some(&b[..]),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Share::Present(b) if !b.is_empty() => Some(b),
            _ => None,
        }
    }
}

impl From<Bytes> for Share {
    fn from(b: Bytes) -> Self { Share::Present(b) }
}

impl From<Vec<u8>> for Share {
    fn from(v: Vec<u8>) -> Self { Share::Present(Bytes::from(v)) }
}

impl From<Option<Bytes>> for Share {
    fn from(o: Option<Bytes>) -> Self { o.map_or_else(Share::missing, Share::Present) }
}

/* ---------- contract ---------- */

pub trait Codec: Send + Sync + fmt::Debug {
    /// Computes parity for a complete set of original shares. The share size
    /// is taken from the first share; only the parity shares are returned.
    fn encode(&self, data: &[Bytes]) -> Result<Vec<Bytes>>;

    /// Rebuilds every position of a sparse original + parity set. `None` and
    /// empty shares are missing.
    fn decode(&self, data: &[Option<Bytes>]) -> Result<Vec<Bytes>>;

    /// Fills the positions flagged in `required`, leaving present shares
    /// untouched.
    ///
    /// `required` covers either the original half only (parity is then never
    /// rebuilt) or the whole set. Returns [`CodecError::TooFewShares`] when
    /// the present shares cannot satisfy the request.
    ///
    /// [`CodecError::TooFewShares`]: crate::CodecError::TooFewShares
    fn reconstruct_some(&self, data: &mut [Share], required: &[bool]) -> Result<()>;

    /// Largest original + parity share count this codec addresses.
    fn max_chunks(&self) -> usize;

    fn name(&self) -> &'static str;

    fn validate_chunk_size(&self, chunk_size: usize) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_present_share_is_absent() {
        assert!(!Share::Present(Bytes::new()).is_present());
        assert!(Share::from(vec![1u8, 2]).is_present());
        assert!(!Share::with_capacity(16).is_present());
        assert_eq!(Share::from(None::<Bytes>), Share::missing());
    }

    #[test]
    fn data_exposes_present_content_only() {
        let s = Share::from(Bytes::from_static(b"abcd"));
        assert_eq!(s.data(), Some(&b"abcd"[..]));
        assert_eq!(Share::with_capacity(4).data(), None);
        assert_eq!(s.into_bytes(), Some(Bytes::from_static(b"abcd")));
    }
}
