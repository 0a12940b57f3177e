//! Curve-driven panel visuals keyed on distance from the viewport center.

use crate::geometry::Frame;
use crate::panel::{Panel, PanelVisual};
use crate::settings::{MovementAxis, MovementType};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::fmt;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// A scalar function of displacement.
pub trait Curve {
    fn evaluate(&self, t: f64) -> f64;
}

impl<F> Curve for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, t: f64) -> f64 {
        self(t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
}

/// Piecewise-linear curve through a set of keys, flat beyond the first and
/// last key. An empty curve evaluates to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    pub fn new(keys: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut keys: Vec<Keyframe> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }
}

impl From<Vec<(f64, f64)>> for KeyframeCurve {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(time, value)| Keyframe { time, value }),
        )
    }
}

impl From<KeyframeCurve> for Vec<(f64, f64)> {
    fn from(curve: KeyframeCurve) -> Self {
        curve.keys.iter().map(|k| (k.time, k.value)).collect()
    }
}

impl Curve for KeyframeCurve {
    fn evaluate(&self, t: f64) -> f64 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if t.is_nan() {
            return t;
        }
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // first key strictly after t; a predecessor exists since t > first.time
        let i = self.keys.partition_point(|k| k.time <= t);
        let (a, b) = (self.keys[i - 1], self.keys[i]);
        let span = b.time - a.time;
        if span == 0.0 {
            return b.value;
        }
        a.value + (b.value - a.value) * (t - a.time) / span
    }
}

/// The visual channel a transition effect writes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum PanelProperty {
    #[strum(to_string = "position.z", serialize = "depth")]
    #[serde(rename = "position.z")]
    Depth,
    #[strum(to_string = "scale.x")]
    #[serde(rename = "scale.x")]
    ScaleX,
    #[strum(to_string = "scale.y")]
    #[serde(rename = "scale.y")]
    ScaleY,
    #[strum(to_string = "rotation.x")]
    #[serde(rename = "rotation.x")]
    RotationX,
    #[strum(to_string = "rotation.y")]
    #[serde(rename = "rotation.y")]
    RotationY,
    #[strum(to_string = "rotation.z")]
    #[serde(rename = "rotation.z")]
    RotationZ,
    #[strum(to_string = "color.r", serialize = "red")]
    #[serde(rename = "color.r")]
    ColorR,
    #[strum(to_string = "color.g", serialize = "green")]
    #[serde(rename = "color.g")]
    ColorG,
    #[strum(to_string = "color.b", serialize = "blue")]
    #[serde(rename = "color.b")]
    ColorB,
    #[strum(to_string = "color.a", serialize = "alpha", serialize = "opacity")]
    #[serde(rename = "color.a")]
    ColorA,
}

pub type Setter = fn(&mut PanelVisual, f64);

impl PanelProperty {
    /// Writes one channel, leaving the rest of the visual untouched.
    pub fn setter(self) -> Setter {
        match self {
            Self::Depth => |v: &mut PanelVisual, x: f64| v.depth = x,
            Self::ScaleX => |v: &mut PanelVisual, x: f64| v.scale.x = x,
            Self::ScaleY => |v: &mut PanelVisual, x: f64| v.scale.y = x,
            Self::RotationX => |v: &mut PanelVisual, x: f64| v.rotation.x = x,
            Self::RotationY => |v: &mut PanelVisual, x: f64| v.rotation.y = x,
            Self::RotationZ => |v: &mut PanelVisual, x: f64| v.rotation.z = x,
            Self::ColorR => |v: &mut PanelVisual, x: f64| v.color.red = x,
            Self::ColorG => |v: &mut PanelVisual, x: f64| v.color.green = x,
            Self::ColorB => |v: &mut PanelVisual, x: f64| v.color.blue = x,
            Self::ColorA => |v: &mut PanelVisual, x: f64| v.color.alpha = x,
        }
    }

    pub fn apply(self, visual: &mut PanelVisual, value: f64) {
        (self.setter())(visual, value);
    }
}

pub struct TransitionEffect {
    pub property: PanelProperty,
    pub curve: Box<dyn Curve>,
}

impl TransitionEffect {
    pub fn new(property: PanelProperty, curve: impl Curve + 'static) -> Self {
        Self {
            property,
            curve: Box::new(curve),
        }
    }
}

impl fmt::Debug for TransitionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionEffect")
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}

/// The displacement a curve is evaluated at: signed along the movement axis
/// for fixed carousels, radial distance for free ones.
pub fn displacement_of(panel: &Panel, frame: &Frame, kind: MovementType, axis: MovementAxis) -> f64 {
    match kind {
        MovementType::Fixed => axis.project(frame.displacement(panel.position)),
        MovementType::Free => frame.distance(panel.position),
    }
}

/// Evaluates every effect for every panel. Effects run in order, so a later
/// effect on the same property wins.
pub fn apply_effects(
    effects: &[TransitionEffect],
    panels: &mut [Panel],
    frame: &Frame,
    kind: MovementType,
    axis: MovementAxis,
) {
    if effects.is_empty() {
        return;
    }
    for panel in panels.iter_mut() {
        let displacement = displacement_of(panel, frame, kind, axis);
        for effect in effects {
            effect
                .property
                .apply(&mut panel.visual, effect.curve.evaluate(displacement));
        }
    }
}
