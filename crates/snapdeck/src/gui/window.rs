use gtk::prelude::*;
use gtk4 as gtk;
use kurbo::Size;

/// Longest step fed to the carousel; longer stalls are treated as one frame.
pub const MAX_FRAME_SECONDS: f64 = 0.1;

pub fn widget_size(widget: &impl IsA<gtk::Widget>) -> Size {
    Size::new(widget.width() as f64, widget.height() as f64)
}

/// Seconds between two frame clock timestamps (microseconds).
pub fn frame_delta(last: Option<i64>, now: i64) -> f64 {
    last.map_or(0.0, |last| {
        ((now - last) as f64 / 1_000_000.0).clamp(0.0, MAX_FRAME_SECONDS)
    })
}

pub fn window_title(panel: Option<&str>) -> String {
    match panel {
        Some(title) => format!("Snapdeck: {title}"),
        None => "Snapdeck".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_delta() {
        assert_eq!(frame_delta(None, 5_000_000), 0.0);
        assert_eq!(frame_delta(Some(1_000_000), 1_016_000), 0.016);
        assert_eq!(frame_delta(Some(0), 3_000_000), MAX_FRAME_SECONDS);
        assert_eq!(frame_delta(Some(10), 0), 0.0);
    }

    #[test]
    fn test_window_title() {
        assert_eq!(window_title(Some("Red")), "Snapdeck: Red");
        assert_eq!(window_title(None), "Snapdeck");
    }
}
