//! Share-set bookkeeping shared by the codec backends: geometry checks,
//! chunk-size inference and in-place write-back of rebuilt shares.

use bytes::{Bytes, BytesMut};

use crate::{
    codec::Share,
    util::{CodecError, Result},
};

/* ---------- geometry ---------- */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub original: usize,
    pub total:    usize,
}

impl Layout {
    pub fn of(total: usize, max: usize) -> Result<Self> {
        if total == 0      { return Err(CodecError::NoShares); }
        if total % 2 != 0  { return Err(CodecError::OddShareCount(total)); }
        if total > max     { return Err(CodecError::TooManyShares { count: total, max }); }
        Ok(Self { original: total / 2, total })
    }

    /// `required` must cover the original half or the whole set.
    pub fn check_required(&self, required: &[bool]) -> Result<()> {
        match required.len() {
            n if n == self.original || n == self.total => Ok(()),
            got => Err(CodecError::RequiredLength { got, original: self.original, total: self.total }),
        }
    }
}

/// Chunk size of a complete original set, checked against the parity it
/// would produce.
pub(crate) fn original_chunk_size(data: &[Bytes], max: usize) -> Result<usize> {
    let first = data.first().ok_or(CodecError::NoShares)?;
    let total = data.len() * 2;
    if total > max { return Err(CodecError::TooManyShares { count: total, max }); }
    let expected = first.len();
    match data.iter().position(|b| b.len() != expected) {
        Some(index) => Err(CodecError::ShareSizeMismatch { index, expected, got: data[index].len() }),
        None        => Ok(expected),
    }
}

/// Common size of the present shares; `None` when nothing is present.
pub(crate) fn present_chunk_size(data: &[Share]) -> Result<Option<usize>> {
    let mut size = None;
    for (index, got) in data.iter().enumerate().filter_map(|(i, s)| s.data().map(|d| (i, d.len()))) {
        match size {
            None => size = Some(got),
            Some(expected) if expected != got => {
                return Err(CodecError::ShareSizeMismatch { index, expected, got });
            }
            _ => {}
        }
    }
    Ok(size)
}

/* ---------- reconstruction plan ---------- */
#[derive(Debug)]
pub(crate) struct Plan {
    pub layout: Layout,
    pub chunk:  usize,
    /// Required positions that are currently missing, ascending.
    pub wanted: Vec<usize>,
}

impl Plan {
    /// Returns `Ok(None)` when every required position is already present.
    pub fn new(data: &[Share], required: &[bool], max: usize) -> Result<Option<Self>> {
        let layout = Layout::of(data.len(), max)?;
        layout.check_required(required)?;
        let chunk = present_chunk_size(data)?;

        let wanted: Vec<usize> = required
            .iter()
            .enumerate()
            .filter(|&(i, &req)| req && !data[i].is_present())
            .map(|(i, _)| i)
            .collect();
        if wanted.is_empty() { return Ok(None); }

        let present = data.iter().filter(|s| s.is_present()).count();
        let chunk = chunk.ok_or(CodecError::TooFewShares)?;
        if present < layout.original { return Err(CodecError::TooFewShares); }
        Ok(Some(Self { layout, chunk, wanted }))
    }

    pub fn wants_parity(&self) -> bool {
        self.wanted.last().is_some_and(|&i| i >= self.layout.original)
    }

    pub fn original_missing(&self, data: &[Share]) -> bool {
        data[..self.layout.original].iter().any(|s| !s.is_present())
    }
}

/* ---------- write-back ---------- */

/// Stores `content` in `slot`, reusing the slot's buffer if it can hold it.
pub(crate) fn fill(slot: &mut Share, content: &[u8]) {
    let buf = match std::mem::replace(slot, Share::missing()) {
        Share::Missing(mut buf) if buf.capacity() >= content.len() => {
            buf.clear();
            buf.extend_from_slice(content);
            buf
        }
        _ => BytesMut::from(content),
    };
    *slot = Share::Present(buf.freeze());
}

pub(crate) fn to_targets(data: &[Option<Bytes>]) -> Vec<Share> {
    data.iter().cloned().map(Share::from).collect()
}

pub(crate) fn into_full(data: Vec<Share>) -> Result<Vec<Bytes>> {
    data.into_iter().map(|s| s.into_bytes().ok_or(CodecError::TooFewShares)).collect()
}
