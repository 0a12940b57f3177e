use crate::settings::{MovementAxis, Settings};
use kurbo::Vec2;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Direction of `velocity` along `axis`. Zero counts as backward.
    pub fn of_release(velocity: Vec2, axis: MovementAxis) -> Self {
        let forward = axis.project(velocity) > 0.0;
        match (axis, forward) {
            (MovementAxis::Horizontal, true) => Self::Right,
            (MovementAxis::Horizontal, false) => Self::Left,
            (MovementAxis::Vertical, true) => Self::Up,
            (MovementAxis::Vertical, false) => Self::Down,
        }
    }

    pub fn axis(self) -> MovementAxis {
        match self {
            Self::Left | Self::Right => MovementAxis::Horizontal,
            Self::Up | Self::Down => MovementAxis::Vertical,
        }
    }

    /// Right and Up point towards higher panel positions.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Right | Self::Up)
    }
}

/// Selection state shared by the tick phases.
///
/// `selected` means the viewport is homing towards (or parked on) `target`;
/// otherwise the surface runs free until the release is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub selected: bool,
    pub dragging: bool,
    pub pressing: bool,
    pub current: usize,
    pub target: usize,
    pub nearest: usize,
    pub release_speed: f64,
    pub release_direction: Direction,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selected: true,
            dragging: false,
            pressing: false,
            current: 0,
            target: 0,
            nearest: 0,
            release_speed: 0.0,
            release_direction: Direction::default(),
        }
    }
}

impl Session {
    pub fn park(&mut self, panel: usize) {
        self.current = panel;
        self.target = panel;
        self.nearest = panel;
    }

    pub fn release(&mut self, velocity: Vec2, axis: MovementAxis) {
        self.dragging = false;
        self.release_direction = Direction::of_release(velocity, axis);
        self.release_speed = velocity.hypot();
    }

    /// Homing is held back while the user has hold of a swipeable surface.
    pub fn is_held(&self, settings: &Settings) -> bool {
        (self.dragging || self.pressing) && settings.swipe_gestures
    }

    pub fn should_resolve(&self, surface_speed: f64, threshold: Option<f64>) -> bool {
        !self.selected && !self.dragging && threshold.is_none_or(|t| surface_speed <= t)
    }
}

/// Per-axis scroll permission for the gesture phase.
///
/// With swipe gestures the movement axes stay enabled; without them the
/// surface is frozen for the duration of a drag.
pub fn axis_locks(settings: &Settings, session: &Session) -> (bool, bool) {
    if settings.swipe_gestures {
        settings.scroll_axes()
    } else {
        (!session.dragging, !session.dragging)
    }
}
