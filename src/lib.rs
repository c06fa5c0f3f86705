//! Pluggable erasure codecs for two-dimensional Reed-Solomon data squares.
//!
//! Every codec implements [`Codec`]: parity encoding of a row or column of
//! original shares, full decoding, and partial reconstruction that rebuilds
//! only the positions a caller asks for. Codecs are looked up by name through
//! the [`registry`] so a square can record which one produced it.
//!
//! Two codecs ship with the crate:
//! - [`Leopard`] — FFT-based Reed-Solomon over GF(2^16), up to 65 536 shares.
//! - [`ReedSolomonGf8`] — classic matrix Reed-Solomon over GF(2^8), up to 256.

mod codec;
mod config;
mod leopard;
pub mod registry;
mod rsgf8;
mod util;

pub use codec::{Codec, Share, LEOPARD, RS_GF8};
pub use config::CodecConfig;
pub use leopard::Leopard;
pub use registry::{lookup, CodecRef, Registry};
pub use rsgf8::ReedSolomonGf8;
pub use util::{CodecError, Result};
