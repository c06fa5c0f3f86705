//! Square geometry settings and their validation against a codec.

use crate::{
    codec::LEOPARD,
    registry::{self, CodecRef, Registry},
    util::{CodecError, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Registry name of the codec.
    pub codec:      String,
    /// Bytes per share.
    pub chunk_size: usize,
    /// Original shares per row; each row carries as many parity shares.
    pub width:      usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            codec:      LEOPARD.to_string(),
            chunk_size: 512,
            width:      128,
        }
    }
}

impl CodecConfig {
    pub fn resolve(&self) -> Result<CodecRef> { self.resolve_in(registry::global()) }

    /// Looks the codec up and checks that rows of `2 * width` shares of
    /// `chunk_size` bytes fit it.
    pub fn resolve_in(&self, reg: &Registry) -> Result<CodecRef> {
        let codec = reg.get(&self.codec).ok_or_else(|| CodecError::UnknownCodec(self.codec.clone()))?;
        if self.width == 0 { return Err(CodecError::NoShares); }
        let total = self.width * 2;
        if total > codec.max_chunks() {
            return Err(CodecError::TooManyShares { count: total, max: codec.max_chunks() });
        }
        codec.validate_chunk_size(self.chunk_size)?;
        Ok(codec)
    }
}
