use crate::error::ConfigurationError;
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Panels are arranged and snapped along a single axis.
    #[default]
    #[strum(to_string = "fixed", serialize = "f")]
    Fixed,
    /// Panels keep caller-set positions and the viewport settles on a point.
    #[strum(to_string = "free")]
    Free,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MovementAxis {
    #[default]
    #[strum(to_string = "horizontal", serialize = "h", serialize = "x")]
    Horizontal,
    #[strum(to_string = "vertical", serialize = "v", serialize = "y")]
    Vertical,
}

impl MovementAxis {
    /// Unit vector pointing in the forward direction of the axis.
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(1.0, 0.0),
            Self::Vertical => Vec2::new(0.0, 1.0),
        }
    }

    pub fn project(self, v: Vec2) -> f64 {
        v.dot(self.unit())
    }

    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SnapTarget {
    #[strum(to_string = "nearest", serialize = "n")]
    Nearest,
    #[strum(to_string = "previous", serialize = "prev", serialize = "p")]
    Previous,
    #[default]
    #[strum(to_string = "next")]
    Next,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SizeControl {
    /// Use [`Settings::size`].
    #[strum(to_string = "manual")]
    Manual,
    /// Panels take the size of the viewport.
    #[default]
    #[strum(to_string = "fit")]
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn along(&self, axis: MovementAxis) -> f64 {
        match axis {
            MovementAxis::Horizontal => self.horizontal(),
            MovementAxis::Vertical => self.vertical(),
        }
    }
}

/// Carousel configuration.
///
/// Read once per layout pass; changes take effect through
/// [`ScrollSnap::set_settings`](crate::ScrollSnap::set_settings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub movement_type: MovementType,
    pub movement_axis: MovementAxis,
    pub automatic_layout: bool,
    pub size_control: SizeControl,
    /// Panel size used with [`SizeControl::Manual`].
    pub size: Size,
    pub margins: Margins,
    /// Gap between neighbouring panels as a fraction of the panel size.
    pub spacing: f64,
    pub infinite: bool,
    /// Extra gap between the last and the first panel when looping, as a
    /// fraction of the panel size.
    pub infinite_end_spacing: f64,
    pub starting_panel: usize,
    pub swipe_gestures: bool,
    /// Releases at or below this speed settle on the nearest panel.
    pub minimum_swipe_speed: f64,
    pub snap_target: SnapTarget,
    pub snapping_speed: f64,
    /// Surface speed below which a released carousel picks its target.
    /// `None` resolves on the first tick after release.
    pub snap_velocity_threshold: Option<f64>,
    pub hard_snap: bool,
    /// Fraction of the viewport width the target must come within before it
    /// becomes the current panel.
    pub arrival_fraction: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            movement_type: MovementType::Fixed,
            movement_axis: MovementAxis::Horizontal,
            automatic_layout: true,
            size_control: SizeControl::Fit,
            size: Size::new(400.0, 250.0),
            margins: Margins::default(),
            spacing: 0.25,
            infinite: false,
            infinite_end_spacing: 0.0,
            starting_panel: 0,
            swipe_gestures: true,
            minimum_swipe_speed: 0.0,
            snap_target: SnapTarget::Next,
            snapping_speed: 10.0,
            snap_velocity_threshold: None,
            hard_snap: true,
            arrival_fraction: 0.1,
        }
    }
}

impl Settings {
    pub fn is_fixed(&self) -> bool {
        self.movement_type == MovementType::Fixed
    }

    /// Wraparound only applies to single-axis carousels.
    pub fn wraps(&self) -> bool {
        self.infinite && self.is_fixed()
    }

    pub fn panel_size(&self, viewport: Size) -> Size {
        match self.size_control {
            SizeControl::Manual => self.size,
            SizeControl::Fit => viewport,
        }
    }

    /// Axes the surface may scroll along while gestures are unrestricted.
    pub fn scroll_axes(&self) -> (bool, bool) {
        match self.movement_type {
            MovementType::Fixed => (
                self.movement_axis == MovementAxis::Horizontal,
                self.movement_axis == MovementAxis::Vertical,
            ),
            MovementType::Free => (true, true),
        }
    }

    pub fn validate(&self, panels: usize, toggles: Option<usize>) -> Result<(), ConfigurationError> {
        if let Some(toggles) = toggles
            && toggles != panels
        {
            return Err(ConfigurationError::ToggleCountMismatch { toggles, panels });
        }
        if self.snapping_speed < 0.0 {
            return Err(ConfigurationError::NegativeSnappingSpeed(self.snapping_speed));
        }
        if panels > 0 && self.starting_panel >= panels {
            return Err(ConfigurationError::StartingPanelOutOfRange {
                index: self.starting_panel,
                panels,
            });
        }
        Ok(())
    }
}
