//! The per-frame pipeline: input, then casting and collisions, then projection.
use std::time::{Duration, Instant};

use log::*;
use wallcaster_geometry::V2;
use wallcaster_world::{build_world, cell_size, Grid, MapCache, TextureRegistry, WallSet};

use crate::*;

/// Everything produced by one frame, ready to be drawn.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The first-person view, drawn first.
    pub columns: Vec<ColumnRect>,
    /// Drawn over the columns.
    pub minimap: Vec<DrawCommand>,
    /// The FPS counter, drawn last.
    pub overlay: DrawCommand,
    /// How many walls pushed the viewpoint this frame.
    pub collisions: usize,
    /// Time spent casting, colliding and projecting.
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    caster: RayCaster,
    viewpoint: Viewpoint,
    projector: ColumnProjector,
    minimap: Minimap,
    fps: FpsCounter,
}

impl Engine {
    /// Build an engine over `walls`.  `map_cell_size` is the size of one map cell, used to size the wall index.
    pub fn new(config: EngineConfig, walls: WallSet, map_cell_size: (f64, f64)) -> Result<Engine> {
        config.validate()?;

        let caster = RayCaster::new(walls, &config.caster, map_cell_size)?;
        let viewpoint = Viewpoint::new(
            config.start_position(),
            config.start_angle,
            config.viewpoint_params(),
        )?;
        let projector = ColumnProjector::from_config(&config);
        let minimap = Minimap::new(
            config.screen_width,
            config.screen_height,
            config.minimap_scale,
        );

        Ok(Engine {
            config,
            caster,
            viewpoint,
            projector,
            minimap,
            fps: FpsCounter::new(),
        })
    }

    /// Build the map from grid rows, through `cache` if given, and an engine over it.
    pub fn from_grid<S: AsRef<str>>(
        config: EngineConfig,
        rows: &[S],
        registry: &TextureRegistry,
        cache: Option<&MapCache>,
    ) -> Result<Engine> {
        config.validate()?;
        let grid = Grid::parse(rows)?;
        let walls = build_world(
            rows,
            config.screen_width,
            config.screen_height,
            registry,
            cache,
        )?;
        let cells = cell_size(&grid, config.screen_width, config.screen_height);
        Engine::new(config, walls, cells)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn walls(&self) -> &WallSet {
        self.caster.walls()
    }

    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn viewpoint_mut(&mut self) -> &mut Viewpoint {
        &mut self.viewpoint
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    /// Run one frame which took `dt` of wall-clock time.
    pub fn tick(&mut self, input: &mut InputState, dt: Duration) -> Frame {
        self.fps.record(dt);
        input.apply(
            &mut self.viewpoint,
            dt.as_secs_f64(),
            self.config.mouse_sensitivity,
        );

        let start = Instant::now();
        let collisions = self.viewpoint.update(&self.caster);
        let columns = self.projector.project(&self.viewpoint, self.caster.walls());
        let minimap = self.minimap.commands(self.caster.walls(), &self.viewpoint);
        let overlay = self.fps.overlay(
            self.config.screen_width,
            self.config.screen_height,
            self.config.fps_offset_factor,
        );
        let elapsed = start.elapsed();

        if elapsed > Duration::from_millis(self.config.slow_frame_budget_ms) {
            debug!(
                "Slow frame {}: {:?} for {} rays against {} walls",
                self.fps.frames(),
                elapsed,
                self.viewpoint.rays().len(),
                self.caster.walls().len()
            );
        }

        Frame {
            columns,
            minimap,
            overlay,
            collisions,
            elapsed,
        }
    }

    pub fn position(&self) -> V2 {
        self.viewpoint.position()
    }
}
