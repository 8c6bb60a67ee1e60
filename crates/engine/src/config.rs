//! Engine configuration.
//!
//! Every field has a default, so a config file only needs the fields it changes.
use camino::Utf8Path;
use wallcaster_geometry::V2;

use crate::*;

/// How the caster finds the nearest wall for each ray.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastStrategy {
    /// Test every ray against every wall.
    BruteForce,
    /// Walk a spatial hash of the walls outward from the ray origin and stop at the first cell which settles the
    /// nearest hit.
    Indexed,
}

impl Default for CastStrategy {
    fn default() -> Self {
        CastStrategy::Indexed
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CasterConfig {
    pub strategy: CastStrategy,
    /// Threads in the casting pool.  0 casts on the calling thread.
    pub workers: usize,
    /// The fewest rays a worker is handed at once.
    pub chunk_size: usize,
    /// Cell size of the wall index.  Defaults to the size of a map cell.
    pub cell_size: Option<f64>,
}

impl Default for CasterConfig {
    fn default() -> Self {
        CasterConfig {
            strategy: CastStrategy::default(),
            workers: 0,
            chunk_size: 32,
            cell_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    pub fov_degrees: f64,
    /// Rays in the fan.  Defaults to one per 10 horizontal pixels, plus one.
    pub ray_count: Option<usize>,
    pub viewpoint_radius: f64,
    /// Degrees per second at a rotation input of 1.
    pub rotation_speed: f64,
    /// Units per second.
    pub move_speed: f64,
    pub mouse_sensitivity: f64,
    pub minimap_scale: f64,
    pub texture_resolution: usize,
    /// Where the FPS counter goes, as fractions of the screen size.
    pub fps_offset_factor: (f64, f64),
    /// `K` in `column_height = screen_height * K / distance`.
    pub column_scale: f64,
    pub min_corrected_distance: f64,
    /// Frames taking longer than this are logged.
    pub slow_frame_budget_ms: u64,
    /// Defaults to the middle of the screen.
    pub start_position: Option<V2>,
    pub start_angle: f64,
    pub caster: CasterConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            screen_width: 1280.0,
            screen_height: 720.0,
            fov_degrees: 90.0,
            ray_count: None,
            viewpoint_radius: 50.0,
            rotation_speed: 200.0,
            move_speed: 500.0,
            mouse_sensitivity: 0.03,
            minimap_scale: 0.15,
            texture_resolution: 32,
            fps_offset_factor: (0.015, 0.025),
            column_scale: 100.0,
            min_corrected_distance: 0.1,
            slow_frame_budget_ms: 50,
            start_position: None,
            start_angle: 0.0,
            caster: Default::default(),
        }
    }
}

fn check(cond: bool, msg: impl FnOnce() -> String) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(msg()))
    }
}

impl EngineConfig {
    /// Read a JSON config file and validate it.
    pub fn from_json_file(path: &Utf8Path) -> Result<EngineConfig> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig =
            serde_json::from_str(&text).map_err(|source| EngineError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn ray_count(&self) -> usize {
        self.ray_count
            .unwrap_or(self.screen_width as usize / 10 + 1)
    }

    pub fn start_position(&self) -> V2 {
        self.start_position
            .unwrap_or_else(|| V2::new(self.screen_width / 2.0, self.screen_height / 2.0))
    }

    pub fn viewpoint_params(&self) -> ViewpointParams {
        ViewpointParams {
            fov_degrees: self.fov_degrees,
            ray_count: self.ray_count(),
            radius: self.viewpoint_radius,
            rotation_speed: self.rotation_speed,
            move_speed: self.move_speed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check(
            self.screen_width > 0.0 && self.screen_height > 0.0,
            || {
                format!(
                    "screen must have a positive size, got {}x{}",
                    self.screen_width, self.screen_height
                )
            },
        )?;
        check(
            self.fov_degrees > 0.0 && self.fov_degrees <= 360.0,
            || format!("fov_degrees must be in (0, 360], got {}", self.fov_degrees),
        )?;
        check(self.ray_count() >= 1, || "ray_count must be at least 1".into())?;
        check(self.viewpoint_radius > 0.0, || {
            format!(
                "viewpoint_radius must be positive, got {}",
                self.viewpoint_radius
            )
        })?;
        check(self.texture_resolution >= 1, || {
            "texture_resolution must be at least 1".into()
        })?;
        check(
            self.minimap_scale > 0.0 && self.minimap_scale <= 1.0,
            || format!("minimap_scale must be in (0, 1], got {}", self.minimap_scale),
        )?;
        check(self.column_scale > 0.0, || {
            format!("column_scale must be positive, got {}", self.column_scale)
        })?;
        check(self.min_corrected_distance > 0.0, || {
            format!(
                "min_corrected_distance must be positive, got {}",
                self.min_corrected_distance
            )
        })?;
        check(self.caster.chunk_size >= 1, || {
            "caster.chunk_size must be at least 1".into()
        })?;
        if let Some(c) = self.caster.cell_size {
            check(c > 0.0, || format!("caster.cell_size must be positive, got {}", c))?;
        }
        Ok(())
    }
}
