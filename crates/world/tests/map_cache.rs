use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;

use wallcaster_world::*;

const GRID: [&str; 4] = ["bbbbb", "b  wb", "b   b", "bbbbb"];

fn cache_in(dir: &tempfile::TempDir) -> MapCache {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("map.bin")).expect("Temp paths are UTF8");
    MapCache::new(path)
}

fn segments(walls: &WallSet) -> Vec<(wallcaster_geometry::Segment, String)> {
    walls
        .iter()
        .map(|w| (*w.get_segment(), w.texture_name().to_string()))
        .collect()
}

#[test]
fn round_trips_through_the_cache() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);
    let registry = TextureRegistry::with_builtins(16);

    let generated = build_world(&GRID, 500.0, 400.0, &registry, Some(&cache))?;
    assert!(cache.get_path().exists());

    let loaded = cache.load(&registry).expect("The cache was just written");
    assert_eq!(segments(&generated), segments(&loaded));
    Ok(())
}

#[test]
fn cache_wins_over_a_changed_grid() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);
    let registry = TextureRegistry::with_builtins(16);

    let first = build_world(&GRID, 500.0, 400.0, &registry, Some(&cache))?;
    // Stale caches are used as-is; only presence of the file is checked.
    let second = build_world(&["bbb", "b b", "bbb"], 90.0, 90.0, &registry, Some(&cache))?;
    assert_eq!(segments(&first), segments(&second));
    Ok(())
}

#[test]
fn corrupt_cache_regenerates() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);
    std::fs::write(cache.get_path(), b"definitely not bincode").unwrap();
    let registry = TextureRegistry::with_builtins(16);

    assert!(cache.load(&registry).is_none());
    let walls = build_world(&["bbb", "b b", "bbb"], 90.0, 90.0, &registry, Some(&cache))?;
    assert_eq!(walls.len(), 4);

    // And the regenerated walls replaced the corrupt file.
    assert_eq!(cache.load(&registry).map(|w| w.len()), Some(4));
    Ok(())
}

#[test]
fn malformed_grid_fails_even_with_a_cache() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);
    let registry = TextureRegistry::with_builtins(16);
    build_world(&GRID, 500.0, 400.0, &registry, Some(&cache))?;

    let res = build_world(&["bbb", "b"], 90.0, 90.0, &registry, Some(&cache));
    assert!(matches!(res, Err(MapError::RaggedGrid { .. })));
    Ok(())
}

#[test]
fn cache_with_unknown_texture_regenerates() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);

    let mut with_marble = TextureRegistry::with_builtins(2);
    with_marble.register(Texture::solid("marble", 2, Rgb::new(1, 2, 3)));
    let marble = with_marble.resolve("marble")?;
    let walls = WallSet::new(vec![Wall::new(
        wallcaster_geometry::Segment::new(
            wallcaster_geometry::V2::new(0.0, 0.0),
            wallcaster_geometry::V2::new(1.0, 0.0),
        ),
        marble,
    )]);
    cache.store(&walls)?;

    let plain = TextureRegistry::with_builtins(2);
    assert!(cache.load(&plain).is_none());
    assert!(cache.load(&with_marble).is_some());
    Ok(())
}
