//! Name → codec lookup, used to resolve a codec recorded as a string.
//!
//! The process-wide registry is built exactly once: either explicitly via
//! [`init`], which layers extra codecs over the built-ins, or implicitly by
//! the first [`lookup`]. After that it is frozen, so every registration is
//! visible before any read.

use once_cell::sync::OnceCell;
use std::{collections::BTreeMap, sync::Arc};
use tracing::debug;

use crate::{
    codec::{Codec, LEOPARD, RS_GF8},
    leopard::Leopard,
    rsgf8::ReedSolomonGf8,
    util::{CodecError, Result},
};

pub type CodecRef = Arc<dyn Codec>;

#[derive(Debug, Default)]
pub struct Registry {
    codecs: BTreeMap<String, CodecRef>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    /// Registry holding the Leopard and GF(2^8) Reed-Solomon codecs.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        reg.register(LEOPARD, Arc::new(Leopard));
        reg.register(RS_GF8,  Arc::new(ReedSolomonGf8));
        reg
    }

    /// # Panics
    ///
    /// If `name` is already taken. Two codecs under one name would make data
    /// encoded by either one undecodable, so this is a wiring bug.
    pub fn register(&mut self, name: impl Into<String>, codec: CodecRef) {
        let name = name.into();
        if self.codecs.contains_key(&name) {
            panic!("codec {name} already registered");
        }
        debug!(codec = %name, max_chunks = codec.max_chunks(), "registered codec");
        self.codecs.insert(name, codec);
    }

    pub fn get(&self, name: &str) -> Option<CodecRef> { self.codecs.get(name).cloned() }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ { self.codecs.keys().map(String::as_str) }

    pub fn len(&self) -> usize { self.codecs.len() }

    pub fn is_empty(&self) -> bool { self.codecs.is_empty() }
}

/* ---------- process-wide registry ---------- */
static GLOBAL: OnceCell<Registry> = OnceCell::new();

/// Builds the global registry from the built-ins plus whatever `extra`
/// registers. Fails once the registry has been built, including by a prior
/// [`lookup`].
pub fn init(extra: impl FnOnce(&mut Registry)) -> Result<()> {
    let mut built = false;
    GLOBAL.get_or_init(|| {
        built = true;
        let mut reg = Registry::with_builtin();
        extra(&mut reg);
        reg
    });
    if built { Ok(()) } else { Err(CodecError::RegistryInitialized) }
}

pub fn global() -> &'static Registry { GLOBAL.get_or_init(Registry::with_builtin) }

pub fn lookup(name: &str) -> Option<CodecRef> { global().get(name) }
