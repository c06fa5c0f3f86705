//! Leopard: FFT-based Reed-Solomon over GF(2^16) via `reed-solomon-simd`.

use bytes::Bytes;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    codec::{Codec, Share, LEOPARD},
    util::{
        shares::{self, Plan},
        CodecError, Result,
    },
};

/// 32 768 original + 32 768 parity shares.
pub const MAX_SHARDS:      usize = 65_536;
pub const CHUNK_ALIGNMENT: usize = 64;

#[derive(Debug, Clone, Copy, Default)]
pub struct Leopard;

fn backend(e: reed_solomon_simd::Error) -> CodecError {
    match e {
        reed_solomon_simd::Error::NotEnoughShards { .. } => CodecError::TooFewShares,
        other => CodecError::Backend { codec: LEOPARD, msg: other.to_string() },
    }
}

impl Codec for Leopard {
    fn encode(&self, data: &[Bytes]) -> Result<Vec<Bytes>> {
        let chunk = shares::original_chunk_size(data, MAX_SHARDS)?;
        self.validate_chunk_size(chunk)?;
        let k = data.len();
        let parity = reed_solomon_simd::encode(k, k, data).map_err(backend)?;
        debug!(codec = LEOPARD, k, chunk, "encoded parity");
        Ok(parity.into_iter().map(Bytes::from).collect())
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

        let restored: BTreeMap<usize, Vec<u8>> = if plan.original_missing(data) {
            let originals = data[..k].iter().enumerate().filter_map(|(i, s)| s.data().map(|d| (i, d)));
            let recovery  = data[k..].iter().enumerate().filter_map(|(i, s)| s.data().map(|d| (i, d)));
            reed_solomon_simd::decode(k, k, originals, recovery).map_err(backend)?
        } else {
            BTreeMap::new()
        };

        let parity = if plan.wants_parity() {
            let mut originals = Vec::with_capacity(k);
            for (i, s) in data[..k].iter().enumerate() {
                let d = s.data().or_else(|| restored.get(&i).map(Vec::as_slice));
                originals.push(d.ok_or_else(|| lost(i))?);
            }
            reed_solomon_simd::encode(k, k, originals).map_err(backend)?
        } else {
            Vec::new()
        };

        for &i in &plan.wanted {
            let content = if i < k { restored.get(&i) } else { parity.get(i - k) };
            shares::fill(&mut data[i], content.ok_or_else(|| lost(i))?);
        }
        debug!(codec = LEOPARD, k, chunk = plan.chunk, rebuilt = plan.wanted.len(), "reconstructed shares");
        Ok(())
    }

    fn max_chunks(&self) -> usize { MAX_SHARDS }

    fn name(&self) -> &'static str { LEOPARD }

    fn validate_chunk_size(&self, chunk_size: usize) -> Result<()> {
        if chunk_size == 0 || chunk_size % CHUNK_ALIGNMENT != 0 {
            return Err(CodecError::InvalidChunkSize {
                codec:  LEOPARD,
                size:   chunk_size,
                reason: "must be a non-zero multiple of 64 bytes",
            });
        }
        Ok(())
    }
}

fn lost(index: usize) -> CodecError {
    CodecError::Backend { codec: LEOPARD, msg: format!("share {index} missing after decode") }
}
