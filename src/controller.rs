use crate::error::{CollectionOp, SnapError};
use crate::events::SnapEvent;
use crate::geometry::Frame;
use crate::layout::{Track, arrange, centered_offset};
use crate::pagination::Pagination;
use crate::panel::Panel;
use crate::select::{Step, nearest_panel, neighbor, release_target};
use crate::session::{Session, axis_locks};
use crate::settings::Settings;
use crate::snap;
use crate::surface::{ScrollSurface, Surface};
use crate::transition::{TransitionEffect, apply_effects};
use crate::wrap::wrap_panels;
use kurbo::Vec2;
use std::vec::Drain;

/// A snapping carousel over a scroll surface.
///
/// The host forwards gestures, calls [`tick`](Self::tick) once per frame and
/// drains [`SnapEvent`]s afterwards.
pub struct ScrollSnap<S: ScrollSurface = Surface> {
    settings: Settings,
    surface: S,
    panels: Vec<Panel>,
    track: Track,
    session: Session,
    effects: Vec<TransitionEffect>,
    pagination: Option<Pagination>,
    events: Vec<SnapEvent>,
}

impl<S: ScrollSurface> ScrollSnap<S> {
    /// Validates the configuration and runs the first layout pass.
    pub fn new(
        settings: Settings,
        surface: S,
        panels: Vec<Panel>,
        pagination: Option<Pagination>,
    ) -> Result<Self, SnapError> {
        settings.validate(panels.len(), pagination.as_ref().map(Pagination::len))?;

        let mut snap = Self {
            settings,
            surface,
            panels,
            track: Track::default(),
            session: Session::default(),
            effects: Vec::new(),
            pagination,
            events: Vec::new(),
        };
        snap.layout();
        Ok(snap)
    }

    /// Places the panels and parks the viewport on the starting panel.
    pub fn layout(&mut self) {
        let (horizontal, vertical) = self.settings.scroll_axes();
        self.surface.set_axes(horizontal, vertical);

        let viewport = self.surface.viewport();
        self.track = arrange(&self.settings, &viewport, &mut self.panels);
        self.surface.set_content_size(self.track.size);

        self.session = Session {
            dragging: self.session.dragging,
            pressing: self.session.pressing,
            ..Session::default()
        };

        let Some(last) = self.panels.len().checked_sub(1) else {
            log::info!("laid out an empty carousel");
            return;
        };
        let start = self.settings.starting_panel.min(last);
        let offset = centered_offset(&self.settings, &viewport, self.panels[start].position);
        self.surface.set_offset(offset);
        self.surface.set_velocity(Vec2::ZERO);
        self.session.park(start);

        if let Some(pagination) = &mut self.pagination {
            pagination.select(start);
        }
        log::info!(
            "laid out {} panels on a {}x{} track, starting at panel {start}",
            self.panels.len(),
            self.track.size.width,
            self.track.size.height,
        );
    }

    /// Re-runs the layout pass around the current target, e.g. after the
    /// viewport was resized.
    pub fn refresh(&mut self) {
        if !self.panels.is_empty() {
            self.settings.starting_panel = self.session.target;
        }
        self.layout();
    }

    /// Replaces the settings, keeping the targeted panel in view.
    pub fn set_settings(&mut self, mut settings: Settings) -> Result<(), SnapError> {
        if !self.panels.is_empty() {
            settings.starting_panel = self.session.target;
        }
        settings
            .validate(self.panels.len(), self.pagination.as_ref().map(Pagination::len))
            .map_err(|err| self.reject(err.into()))?;

        self.settings = settings;
        self.layout();
        Ok(())
    }

    /// Attaches or detaches the pagination. It needs one toggle per panel.
    pub fn set_pagination(&mut self, pagination: Option<Pagination>) -> Result<(), SnapError> {
        self.settings
            .validate(self.panels.len(), pagination.as_ref().map(Pagination::len))
            .map_err(|err| self.reject(err.into()))?;

        self.pagination = pagination;
        if let Some(pagination) = &mut self.pagination {
            pagination.select(self.session.target);
        }
        Ok(())
    }

    /// Advances the carousel by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if self.panels.is_empty() {
            return;
        }
        self.update_selection(dt);
        self.update_wraparound();
        self.update_transitions();
        self.update_gestures();
    }

    fn frame(&self) -> Frame {
        Frame::new(self.surface.viewport(), self.track.origin, self.surface.offset())
    }

    fn update_selection(&mut self, dt: f64) {
        if self.session.dragging {
            self.events.push(SnapEvent::Selecting);
        }

        if self.session.selected {
            if self.session.is_held(&self.settings) {
                return;
            }
            let mut frame = self.frame();
            let event = snap::home(
                &mut self.session,
                &self.settings,
                &self.panels,
                &mut frame,
                dt,
            );
            self.surface.set_offset(frame.offset);
            self.events.extend(event);
        } else if self.session.should_resolve(
            self.surface.velocity().hypot(),
            self.settings.snap_velocity_threshold,
        ) {
            self.select_target_panel();
        }
    }

    fn update_wraparound(&mut self) {
        if !self.settings.wraps() {
            return;
        }
        let Some(span) = self.track.span else {
            return;
        };
        let frame = self.frame();
        wrap_panels(&mut self.panels, &frame, self.settings.movement_axis, span);
    }

    fn update_transitions(&mut self) {
        let frame = self.frame();
        apply_effects(
            &self.effects,
            &mut self.panels,
            &frame,
            self.settings.movement_type,
            self.settings.movement_axis,
        );
    }

    fn update_gestures(&mut self) {
        let (horizontal, vertical) = axis_locks(&self.settings, &self.session);
        self.surface.set_axes(horizontal, vertical);
    }

    fn select_target_panel(&mut self) {
        let frame = self.frame();
        let Some(nearest) = nearest_panel(&self.panels, &frame) else {
            return;
        };
        self.session.nearest = nearest;

        let displacement = frame.displacement(self.panels[nearest].position);
        let target = release_target(
            &self.settings,
            &self.session,
            nearest,
            displacement,
            self.panels.len(),
        );
        self.retarget(target);
    }

    fn retarget(&mut self, target: usize) {
        self.session.target = target;
        self.session.selected = true;
        if self.settings.hard_snap {
            self.surface.set_inertia(false);
        }
        if let Some(pagination) = &mut self.pagination {
            pagination.select(target);
        }
        self.events.push(SnapEvent::Selected { target });
        log::debug!("targeting panel {target}");
    }

    fn reject(&self, err: SnapError) -> SnapError {
        log::error!("{err}");
        err
    }

    fn check_index(&self, index: usize, count: usize) -> Result<(), SnapError> {
        match count.checked_sub(1) {
            None => Err(self.reject(SnapError::NoPanels)),
            Some(max) if index > max => Err(self.reject(SnapError::IndexOutOfBounds { index, max })),
            Some(_) => Ok(()),
        }
    }

    pub fn go_to_panel(&mut self, index: usize) -> Result<(), SnapError> {
        self.check_index(index, self.panels.len())?;
        self.retarget(index);
        Ok(())
    }

    pub fn go_to_previous_panel(&mut self) {
        self.step(Step::Previous);
    }

    pub fn go_to_next_panel(&mut self) {
        self.step(Step::Next);
    }

    fn step(&mut self, step: Step) {
        let frame = self.frame();
        let Some(nearest) = nearest_panel(&self.panels, &frame) else {
            return;
        };
        self.session.nearest = nearest;
        let target = neighbor(nearest, self.panels.len(), self.settings.infinite, step);
        self.retarget(target);
    }

    /// Pushes the surface and lets the carousel settle on its own.
    pub fn add_velocity(&mut self, velocity: Vec2) {
        if self.settings.hard_snap {
            self.surface.set_inertia(true);
        }
        let velocity = self.surface.velocity() + velocity;
        self.surface.set_velocity(velocity);
        self.session.selected = false;
    }

    pub fn begin_drag(&mut self) {
        if self.settings.hard_snap {
            self.surface.set_inertia(true);
        }
        self.session.selected = false;
        self.session.dragging = true;
    }

    /// Records the release velocity of the surface. The target is picked on a
    /// later tick.
    pub fn end_drag(&mut self) {
        self.session
            .release(self.surface.velocity(), self.settings.movement_axis);
        if self.settings.hard_snap {
            self.surface.set_inertia(true);
        }
    }

    pub fn pointer_down(&mut self) {
        self.session.pressing = true;
    }

    pub fn pointer_up(&mut self) {
        self.session.pressing = false;
    }

    /// Handles a pagination toggle switching state.
    pub fn toggle_changed(&mut self, index: usize, on: bool) -> Result<(), SnapError> {
        let navigates = self.pagination.as_ref().is_some_and(|p| p.navigation);
        if on && navigates {
            self.go_to_panel(index)
        } else {
            Ok(())
        }
    }

    /// Inserts a panel at `index`, keeping the targeted panel targeted. The
    /// pagination gains a toggle at the same index.
    pub fn insert(&mut self, index: usize, panel: Panel) -> Result<(), SnapError> {
        if !self.settings.automatic_layout {
            return Err(self.reject(SnapError::AutomaticLayoutDisabled {
                op: CollectionOp::Insert,
            }));
        }
        let count = self.panels.len();
        if index > count {
            return Err(self.reject(SnapError::IndexOutOfBounds { index, max: count }));
        }

        let target = target_after_insert(self.session.target, index, count);
        self.panels.insert(index, panel);
        if let Some(pagination) = &mut self.pagination {
            pagination.insert(index);
        }
        self.settings.starting_panel = target;
        self.layout();
        log::info!("inserted panel at {index}");
        Ok(())
    }

    /// Removes the panel at `index`, keeping the targeted panel targeted when
    /// it survives. The toggle at `index` goes with it.
    pub fn remove(&mut self, index: usize) -> Result<Panel, SnapError> {
        if !self.settings.automatic_layout {
            return Err(self.reject(SnapError::AutomaticLayoutDisabled {
                op: CollectionOp::Remove,
            }));
        }
        let count = self.panels.len();
        self.check_index(index, count)?;

        let target = target_after_remove(self.session.target, index, count - 1);
        let panel = self.panels.remove(index);
        if let Some(pagination) = &mut self.pagination {
            pagination.remove(index);
        }
        self.settings.starting_panel = target;
        self.layout();
        log::info!("removed panel {index} ({})", panel.key);
        Ok(panel)
    }

    pub fn add_to_front(&mut self, panel: Panel) -> Result<(), SnapError> {
        self.insert(0, panel)
    }

    pub fn add_to_back(&mut self, panel: Panel) -> Result<(), SnapError> {
        self.insert(self.panels.len(), panel)
    }

    pub fn remove_from_front(&mut self) -> Result<Panel, SnapError> {
        self.remove(0)
    }

    pub fn remove_from_back(&mut self) -> Result<Panel, SnapError> {
        self.remove(self.panels.len().saturating_sub(1))
    }

    pub fn add_effect(&mut self, effect: TransitionEffect) {
        self.effects.push(effect);
    }

    pub fn set_effects(&mut self, effects: Vec<TransitionEffect>) {
        self.effects = effects;
    }

    pub fn effects(&self) -> &[TransitionEffect] {
        &self.effects
    }

    pub fn drain_events(&mut self) -> Drain<'_, SnapEvent> {
        self.events.drain(..)
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn current_panel(&self) -> usize {
        self.session.current
    }

    pub fn target_panel(&self) -> usize {
        self.session.target
    }

    pub fn nearest_panel(&self) -> usize {
        self.session.nearest
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn pagination_mut(&mut self) -> Option<&mut Pagination> {
        self.pagination.as_mut()
    }
}

fn target_after_insert(target: usize, index: usize, count: usize) -> usize {
    match count {
        0 => 0,
        _ if target >= index => target + 1,
        _ => target,
    }
}

/// `count` is the number of panels left after the removal.
fn target_after_remove(target: usize, index: usize, count: usize) -> usize {
    match count {
        0 => 0,
        _ if target > index => target - 1,
        _ if target == index && target == count => target - 1,
        _ => target,
    }
}
