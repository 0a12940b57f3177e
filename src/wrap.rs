//! Infinite scrolling by recycling panels across the loop boundary.

use crate::geometry::Frame;
use crate::panel::Panel;
use crate::settings::MovementAxis;

/// Moves a panel along the axis by `amount` layout units.
pub fn shift(panel: &mut Panel, axis: MovementAxis, amount: f64) {
    panel.position += axis.unit() * amount;
}

/// Moves every panel that drifted more than half a loop away from the
/// viewport center to the other side. The scroll offset is left alone.
///
/// `span` is the loop length in layout units; displacements are compared in
/// view units.
pub fn wrap_panels(panels: &mut [Panel], frame: &Frame, axis: MovementAxis, span: f64) {
    let scale = axis.project(frame.viewport.scale);
    let half = span * scale / 2.0;

    for (i, panel) in panels.iter_mut().enumerate() {
        let proj = axis.project(frame.displacement(panel.position));
        if proj > half {
            shift(panel, axis, -span);
            log::trace!("panel {i} wrapped back");
        } else if proj < -half {
            shift(panel, axis, span);
            log::trace!("panel {i} wrapped forward");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;
    use kurbo::{Point, Size, Vec2};

    fn frame(offset: f64) -> Frame {
        Frame::new(
            Viewport::new(Size::new(400.0, 250.0)),
            Vec2::new(0.0, 125.0),
            Vec2::new(offset, 0.0),
        )
    }

    fn row() -> Vec<Panel> {
        (0..5)
            .map(|i| Panel::new(format!("{i}")).at(Point::new(200.0 + 500.0 * i as f64, 0.0)))
            .collect()
    }

    fn xs(panels: &[Panel]) -> Vec<f64> {
        panels.iter().map(|p| p.position.x).collect()
    }

    #[test]
    fn test_far_panels_move_behind() {
        let mut panels = row();
        wrap_panels(&mut panels, &frame(0.0), MovementAxis::Horizontal, 2500.0);
        // displacements 0, 500, 1000, 1500, 2000 against a half loop of 1250
        assert_eq!(xs(&panels), vec![200.0, 700.0, 1200.0, -800.0, -300.0]);
    }

    #[test]
    fn test_panels_behind_move_ahead() {
        let mut panels = row();
        wrap_panels(&mut panels, &frame(-2000.0), MovementAxis::Horizontal, 2500.0);
        assert_eq!(xs(&panels), vec![2700.0, 3200.0, 1200.0, 1700.0, 2200.0]);
    }

    #[test]
    fn test_wrapping_is_stable_inside_the_loop() {
        let mut panels = row();
        let frame = frame(0.0);
        wrap_panels(&mut panels, &frame, MovementAxis::Horizontal, 2500.0);
        let once = xs(&panels);
        wrap_panels(&mut panels, &frame, MovementAxis::Horizontal, 2500.0);
        assert_eq!(xs(&panels), once);
    }

    #[test]
    fn test_shift_is_reversible() {
        let mut panels = row();
        let original = panels[3].position;
        shift(&mut panels[3], MovementAxis::Horizontal, -2437.5);
        shift(&mut panels[3], MovementAxis::Horizontal, 2437.5);
        assert!((panels[3].position - original).hypot() < 1e-9);

        let mut panel = Panel::new("v").at(Point::new(0.0, 125.0));
        shift(&mut panel, MovementAxis::Vertical, 0.1);
        shift(&mut panel, MovementAxis::Vertical, -0.1);
        assert!((panel.position.y - 125.0).abs() < 1e-9);
        assert_eq!(panel.position.x, 0.0);
    }

    #[test]
    fn test_scaled_view_widens_the_boundary() {
        let mut panels = row();
        let scaled = Frame {
            viewport: Viewport::new(Size::new(400.0, 250.0)).with_scale(Vec2::new(2.0, 1.0)),
            ..frame(0.0)
        };
        // view displacements double, and so does the boundary
        wrap_panels(&mut panels, &scaled, MovementAxis::Horizontal, 2500.0);
        assert_eq!(xs(&panels), vec![200.0, 700.0, 1200.0, -800.0, -300.0]);
    }

    #[test]
    fn test_vertical_column_wraps_along_y() {
        let mut panels: Vec<Panel> = (0..5)
            .map(|i| Panel::new(format!("{i}")).at(Point::new(0.0, 125.0 + 312.5 * i as f64)))
            .collect();
        let frame = Frame::new(
            Viewport::new(Size::new(400.0, 250.0)),
            Vec2::new(200.0, 0.0),
            Vec2::ZERO,
        );
        wrap_panels(&mut panels, &frame, MovementAxis::Vertical, 1500.0);

        let ys: Vec<f64> = panels.iter().map(|p| p.position.y).collect();
        assert_eq!(ys, vec![125.0, 437.5, 750.0, -437.5, -125.0]);
        assert!(panels.iter().all(|p| p.position.x == 0.0));
    }
}
