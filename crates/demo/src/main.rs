//! Walk a viewpoint through the default map without a window, logging what each frame would have drawn.
mod script;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use log::*;
use structopt::StructOpt;

use wallcaster_engine::{Engine, EngineConfig, InputState};
use wallcaster_world::{MapCache, TextureRegistry, DEFAULT_CACHE_PATH};

const FRAME_TIME: Duration = Duration::from_micros(16_667);

const DEFAULT_GRID: [&str; 9] = [
    "bbbbbbbbbbbbb",
    "b           b",
    "b      ww w b",
    "b ww w      b",
    "b           b",
    "b    b      b",
    "bbbbbbb  bbbb",
    "b           b",
    "bbbbbbbbbbbbb",
];

#[derive(StructOpt)]
struct Params {
    /// JSON engine configuration.  Every field is optional.
    #[structopt(long = "--config")]
    config: Option<Utf8PathBuf>,
    /// Frames to run before quitting.
    #[structopt(long = "--frames", default_value = "300")]
    frames: u64,
    /// Ray casting threads, overriding the config.
    #[structopt(long = "--workers")]
    workers: Option<usize>,
    /// Where the generated map is cached.  Defaults to `map.bin` in the working directory.
    #[structopt(long = "--cache")]
    cache: Option<Utf8PathBuf>,
    /// Don't read or write the map cache.
    #[structopt(long = "--no-cache")]
    no_cache: bool,
    /// A directory of `<name>.rgb` textures, overriding the built-in ones.
    #[structopt(long = "--textures")]
    textures: Option<Utf8PathBuf>,
}

fn map_cache(params: &Params) -> Option<MapCache> {
    if params.no_cache {
        return None;
    }
    let path = params
        .cache
        .clone()
        .unwrap_or_else(|| DEFAULT_CACHE_PATH.into());
    Some(MapCache::new(path))
}

fn main() -> Result<()> {
    wallcaster_logging::log_to_stderr();
    let params = Params::from_args();

    let mut config = match &params.config {
        Some(p) => EngineConfig::from_json_file(p)?,
        None => EngineConfig::default(),
    };
    if let Some(w) = params.workers {
        config.caster.workers = w;
    }

    let mut registry = TextureRegistry::with_builtins(config.texture_resolution);
    if let Some(dir) = &params.textures {
        let loaded = registry
            .load_dir(dir)
            .with_context(|| format!("Loading textures from {}", dir))?;
        info!("Loaded {} textures from {}", loaded, dir);
    }

    let cache = map_cache(&params);
    let mut engine = Engine::from_grid(config, &DEFAULT_GRID, &registry, cache.as_ref())?;
    info!("Engine is up: {:?}", engine.caster());

    let (events, input_thread) = script::spawn_script(params.frames)?;
    let mut input = InputState::new();
    let mut collisions = 0;
    let mut busiest = 0;
    let mut last = Instant::now();

    loop {
        let batch = match events.recv() {
            Ok(b) => b,
            Err(_) => break,
        };
        for e in batch {
            input.handle(e);
        }
        if input.quit_requested() {
            break;
        }

        let now = Instant::now();
        let dt = now - last;
        last = now;

        let frame = engine.tick(&mut input, dt);
        collisions += frame.collisions;
        busiest = busiest.max(frame.columns.len());
        trace!(
            "Frame {}: {} column rects, {} minimap commands, {:?}",
            engine.fps().frames(),
            frame.columns.len(),
            frame.minimap.len(),
            frame.elapsed
        );

        if let Some(rest) = FRAME_TIME.checked_sub(now.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    drop(events);
    if input_thread.join().is_err() {
        warn!("The input thread panicked");
    }

    let fps = engine.fps();
    info!(
        "Ran {} frames: {:.1} fps average, slowest {:?}, {} wall pushes, at most {} rects in a frame, ended at {} facing {:.1}",
        fps.frames(),
        fps.average(),
        fps.slowest(),
        collisions,
        busiest,
        engine.position(),
        engine.viewpoint().angle()
    );
    Ok(())
}
