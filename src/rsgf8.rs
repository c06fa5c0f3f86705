//! Classic systematic Reed-Solomon over GF(2^8) via `reed-solomon-erasure`.

use bytes::Bytes;
use reed_solomon_erasure::galois_8::ReedSolomon;
use tracing::debug;

use crate::{
    codec::{Codec, Share, RS_GF8},
    util::{
        shares::{self, Plan},
        CodecError, Result,
    },
};

/// Field width caps the whole share set at 256 positions.
pub const MAX_SHARDS: usize = 256;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReedSolomonGf8;

fn backend(e: reed_solomon_erasure::Error) -> CodecError {
    match e {
        reed_solomon_erasure::Error::TooFewShardsPresent => CodecError::TooFewShares,
        other => CodecError::Backend { codec: RS_GF8, msg: format!("{other:?}") },
    }
}

/// Matrix for `k` original and `k` parity shares; built per call.
fn matrix(k: usize) -> Result<ReedSolomon> {
    ReedSolomon::new(k, k).map_err(backend)
}

impl Codec for ReedSolomonGf8 {
    fn encode(&self, data: &[Bytes]) -> Result<Vec<Bytes>> {
        let chunk = shares::original_chunk_size(data, MAX_SHARDS)?;
        self.validate_chunk_size(chunk)?;
        let k = data.len();

        let mut shards: Vec<Vec<u8>> = data.iter().map(|b| b.to_vec()).collect();
        shards.extend((0..k).map(|_| vec![0u8; chunk]));
        matrix(k)?.encode(&mut shards).map_err(backend)?;
        debug!(codec = RS_GF8, k, chunk, "encoded parity");
        Ok(shards.split_off(k).into_iter().map(Bytes::from).collect())
    }

    fn decode(&self, data: &[Option<Bytes>]) -> Result<Vec<Bytes>> {
        let mut full = shares::to_targets(data);
        self.reconstruct_some(&mut full, &vec![true; data.len()])?;
        shares::into_full(full)
    }

    fn reconstruct_some(&self, data: &mut [Share], required: &[bool]) -> Result<()> {
        let Some(plan) = Plan::new(data, required, MAX_SHARDS)? else { return Ok(()) };
        self.validate_chunk_size(plan.chunk)?;
        let k = plan.layout.original;

        let mut tmp: Vec<Option<Vec<u8>>> = data.iter().map(|s| s.data().map(<[u8]>::to_vec)).collect();
        let rs = matrix(k)?;
        if plan.wants_parity() {
            rs.reconstruct(&mut tmp).map_err(backend)?;
        } else {
            rs.reconstruct_data(&mut tmp).map_err(backend)?;
        }

        for &i in &plan.wanted {
            let content = tmp[i].as_deref().ok_or_else(|| CodecError::Backend {
                codec: RS_GF8,
                msg:   format!("share {i} missing after reconstruct"),
            })?;
            shares::fill(&mut data[i], content);
        }
        debug!(codec = RS_GF8, k, chunk = plan.chunk, rebuilt = plan.wanted.len(), "reconstructed shares");
        Ok(())
    }

    fn max_chunks(&self) -> usize { MAX_SHARDS }

    fn name(&self) -> &'static str { RS_GF8 }

    fn validate_chunk_size(&self, chunk_size: usize) -> Result<()> {
        if chunk_size == 0 {
            return Err(CodecError::InvalidChunkSize {
                codec:  RS_GF8,
                size:   0,
                reason: "must be non-zero",
            });
        }
        Ok(())
    }
}
