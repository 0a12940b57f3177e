use crate::geometry::Viewport;
use crate::panel::Panel;
use crate::settings::{MovementAxis, Settings};
use kurbo::{Point, Rect, Size, Vec2};

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    /// Track anchor relative to the viewport's start corner.
    pub origin: Vec2,
    pub size: Size,
    /// Slot size before margins are trimmed.
    pub panel_size: Size,
    /// Loop length along the movement axis, in layout units. Only set when
    /// wraparound is active.
    pub span: Option<f64>,
}

/// Positions every panel and measures the track.
///
/// Panels are only moved in fixed mode with automatic layout; otherwise the
/// caller-set positions are kept and the track is their bounding box.
pub fn arrange(settings: &Settings, viewport: &Viewport, panels: &mut [Panel]) -> Track {
    let panel_size = settings.panel_size(viewport.size);
    let axis = settings.movement_axis;
    let automatic = settings.is_fixed() && settings.automatic_layout;

    if automatic {
        for (i, panel) in panels.iter_mut().enumerate() {
            place(panel, i, settings, panel_size);
        }
    }

    let origin = if settings.is_fixed() {
        match axis {
            MovementAxis::Horizontal => Vec2::new(0.0, viewport.size.height / 2.0),
            MovementAxis::Vertical => Vec2::new(viewport.size.width / 2.0, 0.0),
        }
    } else {
        Vec2::ZERO
    };

    let size = if automatic {
        let n = panels.len() as f64;
        let along = |extent: f64| n * (settings.spacing + 1.0) * extent - extent * settings.spacing;
        match axis {
            MovementAxis::Horizontal => Size::new(along(panel_size.width), panel_size.height),
            MovementAxis::Vertical => Size::new(panel_size.width, along(panel_size.height)),
        }
    } else {
        bounds(panels).size()
    };

    let span = settings
        .wraps()
        .then(|| loop_span(settings, panels, panel_size))
        .flatten();

    Track {
        origin,
        size,
        panel_size,
        span,
    }
}

fn place(panel: &mut Panel, index: usize, settings: &Settings, slot: Size) {
    let margins = &settings.margins;
    let step = index as f64 * (settings.spacing + 1.0);

    panel.position = match settings.movement_axis {
        MovementAxis::Horizontal => Point::new(step * slot.width + slot.width / 2.0, 0.0),
        MovementAxis::Vertical => Point::new(0.0, step * slot.height + slot.height / 2.0),
    };
    panel.size = Size::new(
        slot.width - margins.horizontal(),
        slot.height - margins.vertical(),
    );

    // asymmetric margins shift the pivot so the trimmed rect stays in its slot
    let shift = |near: f64, far: f64, extent: f64| {
        if extent == 0.0 {
            0.0
        } else {
            ((near + far) / 2.0 - near) / extent
        }
    };
    panel.pivot = Vec2::new(
        0.5 + shift(margins.left, margins.right, slot.width),
        0.5 + shift(margins.bottom, margins.top, slot.height),
    );
}

fn bounds(panels: &[Panel]) -> Rect {
    panels
        .iter()
        .map(Panel::rect)
        .reduce(|acc, rect| acc.union(rect))
        .unwrap_or(Rect::ZERO)
}

/// Distance travelled along the movement axis before the sequence repeats:
/// first to last anchor, half of each endpoint panel, the end gap and the
/// axis margins.
fn loop_span(settings: &Settings, panels: &[Panel], slot: Size) -> Option<f64> {
    let axis = settings.movement_axis;
    let (first, last) = (panels.first()?, panels.last()?);

    let anchors = axis.project(last.position - first.position);
    let halves = (axis.extent(last.size) + axis.extent(first.size)) / 2.0;
    let end_gap = settings.infinite_end_spacing * axis.extent(slot);

    Some(anchors + halves + end_gap + settings.margins.along(axis))
}

/// Scroll offset that puts `position` at the viewport center along the
/// movement axis (both axes in free mode).
pub fn centered_offset(settings: &Settings, viewport: &Viewport, position: Point) -> Vec2 {
    let horizontal = !settings.is_fixed() || settings.movement_axis == MovementAxis::Horizontal;
    let vertical = !settings.is_fixed() || settings.movement_axis == MovementAxis::Vertical;
    let center = Vec2::new(
        if horizontal { viewport.size.width / 2.0 } else { 0.0 },
        if vertical { viewport.size.height / 2.0 } else { 0.0 },
    );
    center - position.to_vec2()
}
