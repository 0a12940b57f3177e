//! Homing the viewport onto the target panel.

use crate::events::SnapEvent;
use crate::geometry::Frame;
use crate::layout::centered_offset;
use crate::panel::Panel;
use crate::session::Session;
use crate::settings::Settings;
use kurbo::Vec2;

/// One interpolation step. The factor is deliberately left unclamped.
pub fn step_toward(offset: Vec2, goal: Vec2, factor: f64) -> Vec2 {
    offset.lerp(goal, factor)
}

/// Moves `frame.offset` towards the target panel and reports progress.
///
/// The target becomes current once it is within `arrival_fraction` of the
/// viewport width of the center; before that every step reports
/// [`SnapEvent::Changing`].
pub fn home(
    session: &mut Session,
    settings: &Settings,
    panels: &[Panel],
    frame: &mut Frame,
    dt: f64,
) -> Option<SnapEvent> {
    let target = panels.get(session.target)?;
    let goal = centered_offset(settings, &frame.viewport, target.position);
    frame.offset = step_toward(frame.offset, goal, dt * settings.snapping_speed);

    if session.current == session.target {
        return None;
    }

    let threshold = frame.viewport.view_width() * settings.arrival_fraction;
    if frame.distance(target.position) < threshold {
        session.current = session.target;
        log::debug!("arrived at panel {}", session.current);
        Some(SnapEvent::Changed {
            current: session.current,
        })
    } else {
        Some(SnapEvent::Changing {
            current: session.current,
            target: session.target,
        })
    }
}
