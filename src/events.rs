/// Notifications queued by the controller, drained by the host with
/// [`ScrollSnap::drain_events`](crate::ScrollSnap::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapEvent {
    /// A new target was chosen. Fires on every retarget.
    Selected { target: usize },
    /// A drag is in progress. Fires every tick while dragging.
    Selecting,
    /// Homing towards `target` without having arrived yet.
    Changing { current: usize, target: usize },
    /// The target became the current panel.
    Changed { current: usize },
}
