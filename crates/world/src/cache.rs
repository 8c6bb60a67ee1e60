//! The on-disk cache of generated walls.
//!
//! The cache is keyed by nothing but the presence of its file: if the grid changes, the file must be deleted by hand.
//! A cache which cannot be read or decoded is ignored and the map is regenerated from its grid.
use std::io::{BufReader, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use log::*;
use wallcaster_geometry::Segment;

use crate::*;

/// Default location of the cache, relative to the working directory.
pub const DEFAULT_CACHE_PATH: &str = "map.bin";

/// Bumped whenever the layout of [CacheFile] changes, so that old caches are regenerated instead of misread.
const CACHE_VERSION: u32 = 1;

#[derive(serde::Serialize, serde::Deserialize)]
struct CachedWall {
    segment: Segment,
    texture: String,
    color: Rgb,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CacheFile {
    version: u32,
    walls: Vec<CachedWall>,
}

#[derive(Debug, Clone)]
pub struct MapCache {
    path: Utf8PathBuf,
}

impl MapCache {
    pub fn new(path: impl Into<Utf8PathBuf>) -> MapCache {
        MapCache { path: path.into() }
    }

    pub fn get_path(&self) -> &Utf8Path {
        &self.path
    }

    /// Load the cached walls, resolving their textures against `registry`.
    ///
    /// Returns `None` if there is no cache, or if it can't be used for any reason.
    pub fn load(&self, registry: &TextureRegistry) -> Option<WallSet> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No map cache at {}", self.path);
                return None;
            }
            Err(e) => {
                warn!("Could not open map cache {}: {}", self.path, e);
                return None;
            }
        };

        let decoded: CacheFile = match bincode::deserialize_from(BufReader::new(file)) {
            Ok(d) => d,
            Err(e) => {
                warn!("Ignoring corrupt map cache {}: {}", self.path, e);
                return None;
            }
        };

        if decoded.version != CACHE_VERSION {
            warn!(
                "Ignoring map cache {} with version {}, expected {}",
                self.path, decoded.version, CACHE_VERSION
            );
            return None;
        }

        let mut walls = Vec::with_capacity(decoded.walls.len());
        for w in decoded.walls {
            match registry.resolve(&w.texture) {
                Ok(t) => walls.push(Wall::with_color(w.segment, t, w.color)),
                Err(e) => {
                    warn!("Ignoring map cache {}: {}", self.path, e);
                    return None;
                }
            }
        }

        debug!("Loaded {} walls from map cache {}", walls.len(), self.path);
        Some(WallSet::new(walls))
    }

    pub fn store(&self, walls: &WallSet) -> Result<()> {
        let contents = CacheFile {
            version: CACHE_VERSION,
            walls: walls
                .iter()
                .map(|w| CachedWall {
                    segment: *w.get_segment(),
                    texture: w.texture_name().to_string(),
                    color: w.get_color(),
                })
                .collect(),
        };

        let file = std::fs::File::create(&self.path).map_err(|source| MapError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, &contents)?;
        writer.flush().map_err(|source| MapError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Wrote {} walls to map cache {}", walls.len(), self.path);
        Ok(())
    }
}

/// Build the walls for a grid, going through `cache` when one is given.
///
/// The grid is always validated first, so a malformed grid fails even when a cache exists.  Failing to write the cache
/// is logged and otherwise ignored.
pub fn build_world<S: AsRef<str>>(
    rows: &[S],
    screen_width: f64,
    screen_height: f64,
    registry: &TextureRegistry,
    cache: Option<&MapCache>,
) -> Result<WallSet> {
    let grid = Grid::parse(rows)?;

    if let Some(walls) = cache.and_then(|c| c.load(registry)) {
        info!("Using {} cached walls", walls.len());
        return Ok(walls);
    }

    let walls = generate_map(&grid, screen_width, screen_height, registry)?;
    if let Some(c) = cache {
        if let Err(e) = c.store(&walls) {
            warn!("Could not write map cache {}: {}", c.get_path(), e);
        }
    }

    Ok(walls)
}
