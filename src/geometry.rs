use kurbo::{Point, Size, Vec2};

/// The visible window of the carousel.
///
/// `scale` maps layout units to view units (screen size over reference
/// resolution). Displacements are measured in view units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub scale: Vec2,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Center of the viewport in layout units.
    pub fn center(&self) -> Vec2 {
        self.size.to_vec2() / 2.0
    }

    pub fn to_view(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.scale.x, v.y * self.scale.y)
    }

    pub fn view_width(&self) -> f64 {
        self.size.width * self.scale.x
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

/// Snapshot of where the track currently sits inside the viewport.
///
/// A panel's view position is `origin + offset + position`, where `origin` is
/// the track anchor and `offset` the scroll offset read from the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub viewport: Viewport,
    pub origin: Vec2,
    pub offset: Vec2,
}

impl Frame {
    pub fn new(viewport: Viewport, origin: Vec2, offset: Vec2) -> Self {
        Self {
            viewport,
            origin,
            offset,
        }
    }

    /// Signed displacement of a track-local position from the viewport center,
    /// in view units.
    pub fn displacement(&self, position: Point) -> Vec2 {
        self.viewport
            .to_view(self.origin + self.offset + position.to_vec2() - self.viewport.center())
    }

    pub fn distance(&self, position: Point) -> f64 {
        self.displacement(position).hypot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_is_relative_to_center() {
        let viewport = Viewport::new(Size::new(400.0, 250.0));
        let frame = Frame::new(viewport, Vec2::new(0.0, 125.0), Vec2::ZERO);

        assert_eq!(frame.displacement(Point::new(200.0, 0.0)), Vec2::ZERO);
        assert_eq!(
            frame.displacement(Point::new(700.0, 0.0)),
            Vec2::new(500.0, 0.0)
        );

        let frame = Frame {
            offset: Vec2::new(-500.0, 0.0),
            ..frame
        };
        assert_eq!(frame.distance(Point::new(700.0, 0.0)), 0.0);
    }

    #[test]
    fn test_scale_applies_to_displacement() {
        let viewport = Viewport::new(Size::new(400.0, 250.0)).with_scale(Vec2::new(2.0, 0.5));
        let frame = Frame::new(viewport, Vec2::ZERO, Vec2::ZERO);

        assert_eq!(
            frame.displacement(Point::new(300.0, 225.0)),
            Vec2::new(200.0, 50.0)
        );
        assert_eq!(viewport.view_width(), 800.0);
    }
}
