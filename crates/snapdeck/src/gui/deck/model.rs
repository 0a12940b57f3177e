use super::{DOT_HIT_RADIUS, DOT_MARGIN, DOT_SPACING};
use crate::config::{Config, PanelConfig, default_color};
use crate::events::{Command, Place};
use kurbo::{Point, Rect, Size, Vec2};
use scrollsnap::{Panel, ScrollSnap, ScrollSurface, SnapError, SnapEvent, Surface, Viewport};

/// The carousel shown by the window, plus the pointer bookkeeping the widget
/// gestures need.
pub struct Deck {
    snap: ScrollSnap,
    // panel list the carousel was last built from
    panels: Vec<PanelConfig>,
    // pointer travel reported by the last drag update
    drag_offset: Vec2,
}

fn build(config: &Config, viewport: Viewport) -> Result<ScrollSnap, SnapError> {
    let surface = Surface::new(viewport).with_deceleration_rate(config.deceleration_rate);
    let mut snap = ScrollSnap::new(
        config.settings.clone(),
        surface,
        config.build_panels(),
        config.build_pagination(),
    )?;
    snap.set_effects(config.build_effects());
    Ok(snap)
}

impl Deck {
    pub fn new(config: &Config, size: Size) -> Result<Self, SnapError> {
        Ok(Self {
            snap: build(config, Viewport::new(size))?,
            panels: config.panels.clone(),
            drag_offset: Vec2::ZERO,
        })
    }

    /// Applies a new configuration, staying on the targeted panel when it
    /// still exists.
    ///
    /// Settings, effects and pagination are swapped in place while the panel
    /// list is unchanged; a different list rebuilds the carousel.
    pub fn reload(&mut self, config: &Config) -> Result<(), SnapError> {
        if !self.shows(&config.panels) {
            let mut config = config.clone();
            if let Some(last) = config.panels.len().checked_sub(1) {
                config.settings.starting_panel = self.snap.target_panel().min(last);
            }
            self.snap = build(&config, self.snap.surface().viewport())?;
            self.panels = config.panels;
            return Ok(());
        }

        self.snap.set_settings(config.settings.clone())?;
        self.snap.set_pagination(config.build_pagination())?;
        self.snap.set_effects(config.build_effects());
        self.snap
            .surface_mut()
            .set_deceleration_rate(config.deceleration_rate);
        Ok(())
    }

    /// Whether the carousel still holds exactly `panels`, i.e. no panels were
    /// added or removed by commands since it was built.
    fn shows(&self, panels: &[PanelConfig]) -> bool {
        self.panels == panels
            && self
                .snap
                .panels()
                .iter()
                .map(|p| p.key.as_str())
                .eq(panels.iter().map(|p| p.title.as_str()))
    }

    pub fn snap(&self) -> &ScrollSnap {
        &self.snap
    }

    pub fn resize(&mut self, size: Size) {
        if self.snap.surface().viewport().size == size {
            return;
        }
        self.snap.surface_mut().set_viewport(Viewport::new(size));
        self.snap.refresh();
    }

    /// Moves the surface and the carousel forward by one frame.
    pub fn advance(&mut self, dt: f64) -> Vec<SnapEvent> {
        self.snap.surface_mut().integrate(dt);
        self.snap.tick(dt);
        self.snap.drain_events().collect()
    }

    pub fn begin_drag(&mut self) {
        self.drag_offset = Vec2::ZERO;
        self.snap.surface_mut().begin_drag();
        self.snap.begin_drag();
    }

    /// `offset` is the pointer travel since the drag began.
    pub fn drag_to(&mut self, offset: Vec2) {
        let delta = offset - self.drag_offset;
        self.drag_offset = offset;
        self.snap.surface_mut().drag_by(delta);
    }

    pub fn end_drag(&mut self) {
        self.snap.surface_mut().end_drag();
        self.snap.end_drag();
    }

    pub fn press(&mut self, point: Point) {
        self.snap.pointer_down();
        if let Some(index) = self.dot_at(point) {
            // rejections are logged by the carousel
            let _ = self.snap.toggle_changed(index, true);
        }
    }

    pub fn release(&mut self) {
        self.snap.pointer_up();
    }

    pub fn previous(&mut self) {
        self.snap.go_to_previous_panel();
    }

    pub fn next(&mut self) {
        self.snap.go_to_next_panel();
    }

    pub fn apply(&mut self, command: Command) -> Result<(), SnapError> {
        match command {
            Command::Next => self.next(),
            Command::Prev => self.previous(),
            Command::GoTo(index) => self.snap.go_to_panel(index)?,
            Command::Add { at, title } => {
                let panel = Panel::new(title).with_color(default_color(self.snap.panel_count()));
                match at {
                    Place::Front => self.snap.add_to_front(panel)?,
                    Place::Back => self.snap.add_to_back(panel)?,
                    Place::Index(index) => self.snap.insert(index, panel)?,
                }
            }
            Command::Remove(at) => {
                let removed = match at {
                    Place::Front => self.snap.remove_from_front()?,
                    Place::Back => self.snap.remove_from_back()?,
                    Place::Index(index) => self.snap.remove(index)?,
                };
                log::info!("Removed '{}'", removed.key);
            }
            Command::Nudge(velocity) => self.snap.add_velocity(velocity),
        }
        Ok(())
    }

    /// Title of the panel the carousel has settled on.
    pub fn title(&self) -> Option<&str> {
        self.snap
            .panel(self.snap.current_panel())
            .map(|p| p.key.as_str())
    }

    /// On-screen rectangle of a panel after its scale and tilt.
    pub fn screen_rect(&self, panel: &Panel) -> Rect {
        let center = panel.position + self.snap.track().origin + self.snap.surface().offset();
        let visual = &panel.visual;
        let size = Size::new(
            panel.size.width * visual.scale.x * visual.rotation.y.to_radians().cos().abs(),
            panel.size.height * visual.scale.y * visual.rotation.x.to_radians().cos().abs(),
        );
        // pivots are measured from the bottom edge, the screen grows downwards
        let corner = center
            - Vec2::new(
                panel.pivot.x * size.width,
                (1.0 - panel.pivot.y) * size.height,
            );
        Rect::from_origin_size(corner, size)
    }

    pub fn dot_count(&self) -> usize {
        self.snap.pagination().map_or(0, |p| p.len())
    }

    pub fn dot_center(&self, index: usize) -> Point {
        let size = self.snap.surface().viewport().size;
        let middle = (self.dot_count() as f64 - 1.0) / 2.0;
        Point::new(
            size.width / 2.0 + (index as f64 - middle) * DOT_SPACING,
            size.height - DOT_MARGIN,
        )
    }

    pub fn dot_at(&self, point: Point) -> Option<usize> {
        (0..self.dot_count()).find(|&i| self.dot_center(i).distance(point) <= DOT_HIT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        Deck::new(&Config::default(), Size::new(400.0, 250.0)).unwrap()
    }

    #[test]
    fn test_drag_release_settles_on_a_panel() {
        let mut deck = deck();
        deck.begin_drag();
        deck.drag_to(Vec2::new(-150.0, 0.0));
        deck.drag_to(Vec2::new(-300.0, 40.0));
        assert_eq!(deck.advance(0.1), vec![SnapEvent::Selecting]);
        // only the movement axis scrolls
        assert_eq!(deck.snap().surface().offset(), Vec2::new(-300.0, 0.0));

        deck.end_drag();
        assert_eq!(deck.advance(0.016), vec![SnapEvent::Selected { target: 1 }]);

        for _ in 0..200 {
            deck.advance(0.016);
        }
        assert_eq!(deck.snap().current_panel(), 1);
        assert_eq!(deck.title(), Some("Two"));
    }

    #[test]
    fn test_commands() {
        let mut deck = deck();
        deck.apply(Command::Next).unwrap();
        assert_eq!(deck.snap().target_panel(), 1);

        deck.apply(Command::Add {
            at: Place::Front,
            title: "Zero".to_string(),
        })
        .unwrap();
        assert_eq!(deck.snap().panel_count(), 6);
        assert_eq!(deck.snap().target_panel(), 2);

        deck.apply(Command::Remove(Place::Back)).unwrap();
        assert_eq!(deck.snap().panel_count(), 5);
        assert_eq!(deck.dot_count(), 5);

        assert_eq!(
            deck.apply(Command::GoTo(9)),
            Err(SnapError::IndexOutOfBounds { index: 9, max: 4 })
        );

        deck.apply(Command::Nudge(Vec2::new(-800.0, 0.0))).unwrap();
        assert!(!deck.snap().session().selected);
    }

    #[test]
    fn test_dots() {
        let mut deck = deck();
        assert_eq!(deck.dot_center(2), Point::new(200.0, 226.0));
        assert_eq!(deck.dot_at(Point::new(164.0, 226.0)), Some(0));
        assert_eq!(deck.dot_at(Point::new(200.0, 100.0)), None);

        deck.press(Point::new(236.0, 228.0));
        deck.release();
        assert_eq!(deck.snap().target_panel(), 4);
    }

    #[test]
    fn test_screen_rect() {
        let deck = deck();
        let panels = deck.snap().panels();
        assert_eq!(deck.screen_rect(&panels[0]), Rect::new(0.0, 0.0, 400.0, 250.0));
        assert_eq!(deck.screen_rect(&panels[1]), Rect::new(500.0, 0.0, 900.0, 250.0));
    }

    #[test]
    fn test_reload_keeps_target() {
        let mut deck = deck();
        deck.apply(Command::GoTo(3)).unwrap();

        let mut config = Config::default();
        config.panels.truncate(2);
        deck.reload(&config).unwrap();
        assert_eq!(deck.snap().target_panel(), 1);
        assert_eq!(deck.snap().panel_count(), 2);
    }

    #[test]
    fn test_reload_updates_in_place() {
        let mut deck = deck();
        deck.apply(Command::GoTo(3)).unwrap();

        let mut config = Config::default();
        config.settings.spacing = 0.0;
        config.pagination = false;
        config.deceleration_rate = 0.5;
        deck.reload(&config).unwrap();

        assert_eq!(deck.snap().target_panel(), 3);
        assert_eq!(deck.snap().settings().spacing, 0.0);
        assert_eq!(deck.snap().surface().offset(), Vec2::new(-1200.0, 0.0));
        assert_eq!(deck.snap().surface().deceleration_rate(), 0.5);
        assert_eq!(deck.dot_count(), 0);

        config.pagination = true;
        deck.reload(&config).unwrap();
        assert_eq!(deck.dot_count(), 5);
        assert!(deck.snap().pagination().unwrap().get(3).unwrap().on);
    }

    #[test]
    fn test_reload_rebuilds_after_commands_changed_the_panels() {
        let mut deck = deck();
        deck.apply(Command::Add {
            at: Place::Back,
            title: "Six".to_string(),
        })
        .unwrap();
        deck.reload(&Config::default()).unwrap();
        assert_eq!(deck.snap().panel_count(), 5);
    }
}
