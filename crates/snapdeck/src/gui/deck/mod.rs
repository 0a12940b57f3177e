pub mod model;
pub mod view;

pub use model::Deck;
pub use view::draw;

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 480.0;
pub const CORNER_RADIUS: f64 = 14.0;
pub const TITLE_SIZE: f64 = 22.0;

// Pagination dots
pub const DOT_RADIUS: f64 = 5.0;
pub const DOT_SPACING: f64 = 18.0;
pub const DOT_MARGIN: f64 = 24.0; // distance from the bottom edge
pub const DOT_HIT_RADIUS: f64 = 9.0;
