//! Symbol image sources
//!
//! The compositor looks up every body, cap, connector and diacritic image by
//! name through `SymbolSource`. Images are immutable once loaded and shared
//! behind `Arc`, so a source can serve concurrent renders.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use image::RgbaImage;
use crate::errors::AssetError;

/// Lookup of symbol images by name
pub trait SymbolSource {
    fn load_symbol(&self, name: &str) -> Result<Arc<RgbaImage>, AssetError>;
}

/// Decode PNG (or any enabled format) bytes into an RGBA image
pub fn decode_symbol(name: &str, bytes: &[u8]) -> Result<RgbaImage, AssetError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })
}

/// Symbols registered up front, e.g. handed over from JavaScript
#[derive(Clone, Debug, Default)]
pub struct MemorySymbols {
    symbols: HashMap<String, Arc<RgbaImage>>,
}

impl MemorySymbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, image: RgbaImage) {
        self.symbols.insert(name.into(), Arc::new(image));
    }

    /// Decode and register an encoded image
    pub fn insert_encoded(&mut self, name: &str, bytes: &[u8]) -> Result<(), AssetError> {
        let image = decode_symbol(name, bytes)?;
        self.insert(name, image);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolSource for MemorySymbols {
    fn load_symbol(&self, name: &str) -> Result<Arc<RgbaImage>, AssetError> {
        self.symbols
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound { name: name.to_string() })
    }
}

/// Symbols read lazily from `<root>/<name>.png`
///
/// Each image is decoded once and cached; cached entries are never replaced.
#[derive(Debug)]
pub struct DirectorySymbols {
    root: PathBuf,
    cache: RwLock<HashMap<String, Arc<RgbaImage>>>,
}

impl DirectorySymbols {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of symbols decoded so far
    pub fn cached(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        let plain = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        plain.then(|| self.root.join(format!("{name}.png")))
    }
}

impl SymbolSource for DirectorySymbols {
    fn load_symbol(&self, name: &str) -> Result<Arc<RgbaImage>, AssetError> {
        if let Some(hit) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(name) {
            return Ok(Arc::clone(hit));
        }

        let not_found = || AssetError::NotFound { name: name.to_string() };
        let path = self.path_for(name).ok_or_else(not_found)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
            Err(source) => {
                return Err(AssetError::Io {
                    name: name.to_string(),
                    source,
                })
            }
        };

        let image = Arc::new(decode_symbol(name, &bytes)?);
        log::debug!("loaded symbol '{}' from {}", name, path.display());

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(name.to_string()).or_insert(image)))
    }
}
