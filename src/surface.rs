use crate::geometry::Viewport;
use kurbo::{Size, Vec2};

/// The scrollable widget the carousel drives.
///
/// The controller writes the offset during the snapping phase and the axis
/// flags during the gesture phase; everything else belongs to the host.
pub trait ScrollSurface {
    fn offset(&self) -> Vec2;
    fn set_offset(&mut self, offset: Vec2);
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_axes(&mut self, horizontal: bool, vertical: bool);
    fn set_inertia(&mut self, inertia: bool);
    fn viewport(&self) -> Viewport;
    fn set_content_size(&mut self, _size: Size) {}
}

/// Fraction of velocity left after one second of free movement.
pub const DECELERATION_RATE: f64 = 0.135;
/// Speeds below this are treated as rest.
pub const REST_SPEED: f64 = 1.0;
/// How quickly the drag velocity follows the pointer, per second.
const DRAG_VELOCITY_RESPONSE: f64 = 10.0;

/// In-memory scroll surface with drag tracking and inertia.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    viewport: Viewport,
    offset: Vec2,
    velocity: Vec2,
    horizontal: bool,
    vertical: bool,
    inertia: bool,
    content_size: Size,
    deceleration_rate: f64,
    dragging: bool,
    // movement applied by drags since the last integration step
    pending: Vec2,
}

impl Surface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            horizontal: true,
            vertical: true,
            inertia: true,
            content_size: Size::ZERO,
            deceleration_rate: DECELERATION_RATE,
            dragging: false,
            pending: Vec2::ZERO,
        }
    }

    pub fn with_deceleration_rate(mut self, rate: f64) -> Self {
        self.set_deceleration_rate(rate);
        self
    }

    pub fn set_deceleration_rate(&mut self, rate: f64) {
        self.deceleration_rate = rate.clamp(0.0, 1.0);
    }

    pub fn deceleration_rate(&self) -> f64 {
        self.deceleration_rate
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn axes(&self) -> (bool, bool) {
        (self.horizontal, self.vertical)
    }

    pub fn inertia(&self) -> bool {
        self.inertia
    }

    /// Size of the track last reported by the carousel.
    ///
    /// Informational only: movement is never clamped to it, since an infinite
    /// carousel scrolls past both ends.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.velocity = Vec2::ZERO;
        self.pending = Vec2::ZERO;
    }

    /// Moves the content by a pointer delta, restricted to the enabled axes.
    pub fn drag_by(&mut self, delta: Vec2) {
        if !self.dragging {
            return;
        }
        let delta = self.restrict(delta);
        self.offset += delta;
        self.pending += delta;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Advances the surface by `dt` seconds.
    ///
    /// While dragging the velocity tracks the pointer; afterwards it decays
    /// exponentially and carries the offset along, unless inertia is off.
    pub fn integrate(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        if self.dragging {
            if self.inertia {
                let observed = self.pending / dt;
                let t = (dt * DRAG_VELOCITY_RESPONSE).min(1.0);
                self.velocity = self.velocity.lerp(observed, t);
            }
            self.pending = Vec2::ZERO;
            return;
        }

        if !self.inertia {
            self.velocity = Vec2::ZERO;
            return;
        }

        self.velocity = self.restrict(self.velocity) * self.deceleration_rate.powf(dt);
        if self.velocity.hypot() < REST_SPEED {
            self.velocity = Vec2::ZERO;
        }
        self.offset += self.velocity * dt;
    }

    fn restrict(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.horizontal { v.x } else { 0.0 },
            if self.vertical { v.y } else { 0.0 },
        )
    }
}

impl ScrollSurface for Surface {
    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn set_axes(&mut self, horizontal: bool, vertical: bool) {
        self.horizontal = horizontal;
        self.vertical = vertical;
    }

    fn set_inertia(&mut self, inertia: bool) {
        self.inertia = inertia;
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }
}
