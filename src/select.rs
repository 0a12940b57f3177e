//! Nearest-panel search and release resolution.

use crate::geometry::Frame;
use crate::panel::Panel;
use crate::session::Session;
use crate::settings::{Settings, SnapTarget};
use kurbo::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Index of the panel closest to the viewport center. Ties go to the lowest
/// index.
pub fn nearest_panel(panels: &[Panel], frame: &Frame) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, panel) in panels.iter().enumerate() {
        let distance = frame.distance(panel.position);
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

/// One step from `from`, wrapping around the ends when `wrap` is set and
/// staying put otherwise.
pub fn neighbor(from: usize, count: usize, wrap: bool, step: Step) -> usize {
    let last = count.saturating_sub(1);
    match step {
        Step::Previous if from > 0 => from - 1,
        Step::Previous if wrap => last,
        Step::Next if from < last => from + 1,
        Step::Next if wrap => 0,
        _ => from,
    }
}

/// Which step, if any, the snap policy takes away from the nearest panel.
///
/// `proj` is the nearest panel's displacement along the release axis. With
/// [`SnapTarget::Previous`] a release commits to the panel it was heading
/// away from once the nearest one has crossed the center; [`SnapTarget::Next`]
/// mirrors that.
pub fn policy_step(policy: SnapTarget, forward: bool, proj: f64) -> Option<Step> {
    match policy {
        SnapTarget::Nearest => None,
        SnapTarget::Previous if forward && proj < 0.0 => Some(Step::Next),
        SnapTarget::Previous if !forward && proj > 0.0 => Some(Step::Previous),
        SnapTarget::Next if forward && proj > 0.0 => Some(Step::Previous),
        SnapTarget::Next if !forward && proj < 0.0 => Some(Step::Next),
        _ => None,
    }
}

/// Target panel for a resolved release.
pub fn release_target(
    settings: &Settings,
    session: &Session,
    nearest: usize,
    displacement: Vec2,
    count: usize,
) -> usize {
    if session.release_speed <= settings.minimum_swipe_speed {
        return nearest;
    }

    let direction = session.release_direction;
    let proj = direction.axis().project(displacement);

    policy_step(settings.snap_target, direction.is_forward(), proj)
        .map_or(nearest, |step| neighbor(nearest, count, settings.infinite, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;
    use crate::session::Direction;
    use kurbo::{Point, Size};

    fn row(xs: &[f64]) -> Vec<Panel> {
        xs.iter()
            .map(|&x| Panel::new(format!("{x}")).at(Point::new(x, 0.0)))
            .collect()
    }

    fn frame() -> Frame {
        // viewport center sits at x = 200 in track coordinates
        Frame::new(
            Viewport::new(Size::new(400.0, 250.0)),
            Vec2::new(0.0, 125.0),
            Vec2::ZERO,
        )
    }

    #[test]
    fn test_nearest_is_unique_minimizer() {
        let panels = row(&[200.0, 700.0, 1200.0, 1700.0]);
        for (offset, expected) in [(0.0, 0), (-480.0, 1), (-1030.0, 2), (-5000.0, 3)] {
            let frame = Frame {
                offset: Vec2::new(offset, 0.0),
                ..frame()
            };
            assert_eq!(nearest_panel(&panels, &frame), Some(expected), "offset {offset}");
        }
        assert_eq!(nearest_panel(&[], &frame()), None);
    }

    #[test]
    fn test_nearest_tie_goes_to_lowest_index() {
        let panels = row(&[200.0, 700.0, 1200.0]);
        let frame = Frame {
            offset: Vec2::new(-250.0, 0.0),
            ..frame()
        };
        assert_eq!(nearest_panel(&panels, &frame), Some(0));

        let panels = row(&[700.0, 200.0]);
        assert_eq!(nearest_panel(&panels, &frame), Some(0));
    }

    #[test]
    fn test_neighbor() {
        assert_eq!(neighbor(2, 5, false, Step::Next), 3);
        assert_eq!(neighbor(4, 5, false, Step::Next), 4);
        assert_eq!(neighbor(4, 5, true, Step::Next), 0);
        assert_eq!(neighbor(0, 5, false, Step::Previous), 0);
        assert_eq!(neighbor(0, 5, true, Step::Previous), 4);
        assert_eq!(neighbor(0, 1, true, Step::Next), 0);
    }

    #[test]
    fn test_policy_steps() {
        use SnapTarget::*;
        assert_eq!(policy_step(Nearest, true, -5.0), None);
        assert_eq!(policy_step(Previous, true, -5.0), Some(Step::Next));
        assert_eq!(policy_step(Previous, false, 5.0), Some(Step::Previous));
        assert_eq!(policy_step(Previous, true, 5.0), None);
        assert_eq!(policy_step(Next, true, 5.0), Some(Step::Previous));
        assert_eq!(policy_step(Next, false, -5.0), Some(Step::Next));
        assert_eq!(policy_step(Next, false, 5.0), None);
        assert_eq!(policy_step(Next, false, 0.0), None);
    }

    #[test]
    fn test_slow_release_settles_on_nearest() {
        for policy in [SnapTarget::Nearest, SnapTarget::Previous, SnapTarget::Next] {
            let settings = Settings {
                snap_target: policy,
                minimum_swipe_speed: 100.0,
                ..Settings::default()
            };
            for direction in [Direction::Left, Direction::Right] {
                let session = Session {
                    release_speed: 99.0,
                    release_direction: direction,
                    ..Session::default()
                };
                for proj in [-50.0, 50.0] {
                    let target =
                        release_target(&settings, &session, 2, Vec2::new(proj, 0.0), 5);
                    assert_eq!(target, 2, "{policy} {direction} {proj}");
                }
            }
        }
    }

    #[test]
    fn test_vertical_release_uses_vertical_projection() {
        let settings = Settings {
            snap_target: SnapTarget::Next,
            ..Settings::default()
        };
        let session = Session {
            release_speed: 500.0,
            release_direction: Direction::Down,
            ..Session::default()
        };
        assert_eq!(release_target(&settings, &session, 1, Vec2::new(80.0, -10.0), 3), 2);
        assert_eq!(release_target(&settings, &session, 1, Vec2::new(-80.0, 10.0), 3), 1);
    }
}
