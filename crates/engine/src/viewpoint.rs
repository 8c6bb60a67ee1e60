//! The viewpoint: a circle moving through the map, carrying a fan of rays.
use log::*;
use wallcaster_geometry::intersections::circle_segment;
use wallcaster_geometry::{Circle, Ray, V2};
use wallcaster_world::WallSet;

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewpointParams {
    pub fov_degrees: f64,
    pub ray_count: usize,
    pub radius: f64,
    /// Degrees per second at a rotation input of 1.
    pub rotation_speed: f64,
    /// Units per second.
    pub move_speed: f64,
}

impl Default for ViewpointParams {
    fn default() -> Self {
        ViewpointParams {
            fov_degrees: 90.0,
            ray_count: 100,
            radius: 20.0,
            rotation_speed: 200.0,
            move_speed: 500.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Viewpoint {
    body: Circle,
    /// Facing angle in degrees.  Not folded into `0..360`.
    angle: f64,
    params: ViewpointParams,
    /// One ray per fan slot, from `angle - fov / 2` to `angle + fov / 2`.  Origins always equal the body's center.
    rays: Vec<Ray>,
    /// The hits from the last update, one per ray.
    last_hits: Vec<Option<Hit>>,
}

/// Angles of an evenly spaced fan of `count` rays spanning `fov` degrees about `facing`.
fn fan_angles(facing: f64, fov: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        fov / (count - 1) as f64
    } else {
        0.0
    };
    let first = if count > 1 { facing - fov / 2.0 } else { facing };
    (0..count).map(move |i| first + step * i as f64)
}

impl Viewpoint {
    pub fn new(position: V2, angle: f64, params: ViewpointParams) -> Result<Viewpoint> {
        if params.ray_count == 0 {
            return Err(EngineError::InvalidConfig(
                "a viewpoint needs at least one ray".into(),
            ));
        }

        let body = Circle::new(position, params.radius)?;
        let rays = fan_angles(angle, params.fov_degrees, params.ray_count)
            .map(|a| Ray::new(position, a))
            .collect::<Vec<_>>();
        let last_hits = vec![None; rays.len()];

        Ok(Viewpoint {
            body,
            angle,
            params,
            rays,
            last_hits,
        })
    }

    pub fn position(&self) -> V2 {
        *self.body.get_center()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.body.get_radius()
    }

    pub fn fov(&self) -> f64 {
        self.params.fov_degrees
    }

    pub fn params(&self) -> &ViewpointParams {
        &self.params
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn last_hits(&self) -> &[Option<Hit>] {
        &self.last_hits
    }

    /// The unit vector the viewpoint is facing.
    pub fn facing(&self) -> V2 {
        V2::from_angle_degrees(self.angle)
    }

    /// Turn by `delta` degrees, turning the whole fan with it.
    pub fn rotate(&mut self, delta: f64) {
        self.angle += delta;
        for r in self.rays.iter_mut() {
            r.rotate(delta);
        }
    }

    pub fn rotate_right(&mut self, amount: f64, dt: f64) {
        self.rotate(self.params.rotation_speed * amount * dt);
    }

    pub fn rotate_left(&mut self, amount: f64, dt: f64) {
        self.rotate(-self.params.rotation_speed * amount * dt);
    }

    pub fn set_position(&mut self, position: V2) {
        self.body = self.body.move_circle(&position);
        self.sync_rays();
    }

    fn sync_rays(&mut self) {
        let pos = self.position();
        for r in self.rays.iter_mut() {
            r.set_origin(pos);
        }
    }

    fn offset_by(&mut self, offset: V2) {
        self.set_position(self.position() + offset);
    }

    fn step(&self, angle: f64, dt: f64) -> V2 {
        V2::from_angle_degrees(angle) * (self.params.move_speed * dt)
    }

    pub fn move_forward(&mut self, dt: f64) {
        self.offset_by(self.step(self.angle, dt));
    }

    pub fn move_backward(&mut self, dt: f64) {
        self.offset_by(-self.step(self.angle, dt));
    }

    pub fn move_left(&mut self, dt: f64) {
        self.offset_by(-self.step(self.angle + 90.0, dt));
    }

    pub fn move_right(&mut self, dt: f64) {
        self.offset_by(-self.step(self.angle - 90.0, dt));
    }

    /// Cast the fan, then push the viewpoint out of any wall it overlaps.
    ///
    /// The hits are computed from the position before collisions are resolved.  Returns how many walls pushed.
    pub fn update(&mut self, caster: &RayCaster) -> usize {
        self.last_hits = caster.cast(&self.rays);
        debug_assert_eq!(self.last_hits.len(), self.rays.len());
        self.resolve_collisions(caster.walls())
    }

    /// Push the viewpoint out of every wall it overlaps.
    ///
    /// Walls are handled one at a time in order and each push moves the circle before the next wall is tested.  When
    /// several walls overlap at once the result therefore depends on their order.  If the circle center coincides with
    /// a contact midpoint there is no direction to push in, and that wall is skipped.
    pub fn resolve_collisions(&mut self, walls: &WallSet) -> usize {
        let mut pushes = 0;
        for wall in walls.iter() {
            let radius = self.radius();
            let segment = wall.get_segment();
            if segment.get_bounding_box().distance_to_point(&self.position()) > radius {
                continue;
            }

            let (p1, p2) = match circle_segment(&self.body, segment) {
                Some(x) => x,
                None => continue,
            };

            let pos = self.position();
            let mid = (p1 + p2) / 2.0;
            let amount = radius - pos.distance(&mid);
            let direction = match (pos - mid).try_normalize() {
                Some(d) => d,
                None => {
                    trace!("Viewpoint at {} sits on a contact midpoint; not pushing", pos);
                    continue;
                }
            };

            self.body = self.body.move_circle(&(pos + direction * amount));
            pushes += 1;
        }

        if pushes > 0 {
            self.sync_rays();
        }
        pushes
    }
}
