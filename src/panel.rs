use derive_more::{AsRef, Deref, Display, From, Into};
use kurbo::{Point, Rect, Size, Vec2};
use palette::Srgba;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct PanelKey(String);

crate::impl_string_newtype!(PanelKey);

/// Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Properties written by transition effects. Nothing in the engine reads them
/// back; they exist for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelVisual {
    pub depth: f64,
    pub scale: Vec2,
    pub rotation: Euler,
    pub color: Srgba<f64>,
}

impl Default for PanelVisual {
    fn default() -> Self {
        Self {
            depth: 0.0,
            scale: Vec2::new(1.0, 1.0),
            rotation: Euler::default(),
            color: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub key: PanelKey,
    /// Pivot position relative to the track origin.
    pub position: Point,
    pub size: Size,
    /// Pivot as a fraction of `size`, `(0.5, 0.5)` being the center.
    pub pivot: Vec2,
    pub visual: PanelVisual,
}

impl Panel {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: PanelKey::new(key),
            position: Point::ORIGIN,
            size: Size::ZERO,
            pivot: Vec2::new(0.5, 0.5),
            visual: PanelVisual::default(),
        }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Srgba<f64>) -> Self {
        self.visual.color = color;
        self
    }

    /// Track-local rectangle covered by the panel.
    pub fn rect(&self) -> Rect {
        let corner = self.position
            - Vec2::new(
                self.pivot.x * self.size.width,
                self.pivot.y * self.size.height,
            );
        Rect::from_origin_size(corner, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_honors_pivot() {
        let panel = Panel::new("a")
            .at(Point::new(200.0, 0.0))
            .with_size(Size::new(400.0, 250.0));
        assert_eq!(panel.rect(), Rect::new(0.0, -125.0, 400.0, 125.0));

        let panel = Panel {
            pivot: Vec2::new(0.0, 1.0),
            ..panel
        };
        assert_eq!(panel.rect(), Rect::new(200.0, -250.0, 600.0, 0.0));
    }

    #[test]
    fn test_key_round_trips_as_plain_string() {
        let key: PanelKey = serde_json::from_str("\"intro\"").unwrap();
        assert_eq!(key, PanelKey::new("intro"));
        assert_eq!(key.as_str(), "intro");
    }
}
