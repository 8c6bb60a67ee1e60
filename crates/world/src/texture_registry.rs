//! Textures by name.
//!
//! Walls are textured by name at map-build time.  The registry holds the built-in textures plus anything loaded from a
//! texture directory, and asking for a name it does not have is an error: a wall type without its texture cannot be
//! drawn.
use std::collections::HashMap;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use log::*;

use crate::*;

/// Extension of raw texture files in a texture directory.
pub const TEXTURE_EXTENSION: &str = "rgb";

/// The symbol of open space in a map grid.
pub const OPEN_SYMBOL: char = ' ';

/// Which texture each wall symbol of a map grid uses.
pub const WALL_SYMBOLS: &[(char, &str)] = &[('b', BRICK_WALL), ('w', PLAIN)];

/// Get the texture name for a wall symbol, or `None` if the symbol isn't a wall.
pub fn texture_for_symbol(symbol: char) -> Option<&'static str> {
    WALL_SYMBOLS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| *name)
}

#[derive(Debug)]
pub struct TextureRegistry {
    resolution: usize,
    textures: HashMap<String, Arc<Texture>>,
}

impl TextureRegistry {
    /// An empty registry for textures of side `resolution`, which must be at least 1.
    pub fn new(resolution: usize) -> TextureRegistry {
        assert!(resolution > 0, "Textures must have at least one texel");
        TextureRegistry {
            resolution,
            textures: Default::default(),
        }
    }

    /// A registry holding the textures every grid symbol needs.
    pub fn with_builtins(resolution: usize) -> TextureRegistry {
        let mut reg = TextureRegistry::new(resolution);
        reg.register(Texture::brick(resolution));
        reg.register(Texture::solid(PLAIN, resolution, Rgb::WHITE));
        reg
    }

    pub fn get_resolution(&self) -> usize {
        self.resolution
    }

    /// Add a texture, replacing any previous texture of the same name.
    pub fn register(&mut self, texture: Texture) {
        debug!("Registering texture {}", texture.get_name());
        self.textures
            .insert(texture.get_name().to_string(), Arc::new(texture));
    }

    /// Load every `*.rgb` file under `root`.  Each file is named for its stem and must be exactly
    /// `resolution * resolution * 3` bytes.
    ///
    /// Returns how many textures were loaded.
    pub fn load_dir(&mut self, root: &Utf8Path) -> Result<usize> {
        if !root.is_dir() {
            return Err(MapError::Io {
                path: root.to_path_buf(),
                source: std::io::ErrorKind::NotFound.into(),
            });
        }

        let mut loaded = 0;
        for entry in walkdir::WalkDir::new(root) {
            let entry = entry.map_err(|e| MapError::Io {
                path: root.to_path_buf(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
                Ok(p) => p,
                Err(p) => {
                    warn!("Skipping texture with a non-UTF8 path: {}", p.display());
                    continue;
                }
            };
            if path.extension() != Some(TEXTURE_EXTENSION) {
                continue;
            }
            let name = match path.file_stem() {
                Some(s) => s.to_string(),
                None => continue,
            };

            let bytes = std::fs::read(&path).map_err(|source| MapError::Io {
                path: path.clone(),
                source,
            })?;
            self.register(Texture::from_rgb_bytes(&name, self.resolution, &bytes)?);
            loaded += 1;
        }

        info!("Loaded {} textures from {}", loaded, root);
        Ok(loaded)
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<Texture>> {
        self.textures
            .get(name)
            .cloned()
            .ok_or_else(|| MapError::UnknownTexture(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }
}
