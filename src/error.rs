use strum::Display as StrumDisplay;
use thiserror::Error;

/// Invalid configuration. Fatal when building a controller, logged and
/// rejected when settings or pagination are replaced later.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error(
        "the number of toggles should be equivalent to the number of panels \
         (there are {toggles} toggles and {panels} panels); insert and remove \
         keep them in step, so attach a pagination sized to the current panels"
    )]
    ToggleCountMismatch { toggles: usize, panels: usize },
    #[error("snapping speed cannot be negative (got {0})")]
    NegativeSnappingSpeed(f64),
    #[error("starting panel {index} is out of range for {panels} panels")]
    StartingPanelOutOfRange { index: usize, panels: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionOp {
    Insert,
    Remove,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("index must be an integer from 0 to {max} (got {index})")]
    IndexOutOfBounds { index: usize, max: usize },
    #[error("there are no panels to remove")]
    NoPanels,
    #[error("automatic layout must be enabled to {op} panels at runtime")]
    AutomaticLayoutDisabled { op: CollectionOp },
}
