//! Tabbed panel that keeps exactly one page alive.
//!
//! Pages are built on demand by an [`ItemFactory`]. Switching to another
//! index releases the current page and builds the new one in its place;
//! nothing is cached between switches.

use crate::config::TabbedPanelConfig;
use crate::object_list::{ItemFactory, ListItem, ObjectList};
use scrollkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Message, Point, Rect, Size, TypeId, Widget, WidgetId,
};
use tracing::debug;

/// Container showing the page for a single active index.
pub struct TabbedPanel {
    list: ObjectList,
    /// Page currently shown
    page: Option<ListItem>,
    /// Index of the page currently shown
    active_index: usize,
    /// Top-left corner pages are moved to
    bounds: Rect,
    active: bool,
    redraw: bool,
    test_id_value: Option<String>,
}

impl TabbedPanel {
    /// Create a panel at `position` showing the page for `active_index`.
    #[must_use]
    pub fn new(factory: ItemFactory, position: Point, active_index: usize) -> Self {
        let mut panel = Self {
            list: ObjectList::new(factory),
            page: None,
            active_index,
            bounds: Rect::from_origin_size(position, Size::ZERO),
            active: false,
            redraw: false,
            test_id_value: None,
        };
        panel.reset();
        panel
    }

    /// Create a panel from its configuration.
    #[must_use]
    pub fn from_config(factory: ItemFactory, config: &TabbedPanelConfig) -> Self {
        Self::new(factory, config.position, config.active_index)
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Show the page for `which`. Selecting the current page does nothing.
    pub fn set_active(&mut self, which: usize) {
        if which != self.active_index {
            debug!(from = self.active_index, to = which, "switching tab");
            self.active_index = which;
            self.reset();
        }
    }

    /// Rebuild the current page from the factory.
    pub fn reset(&mut self) {
        self.list.delete_item(self.page.take());

        let mut page = self.list.create_item(self.active_index, self.active);
        page.widget.move_to(self.bounds.top_left());
        self.page = Some(page);

        self.request_redraw();
    }

    /// Index of the page currently shown.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// The page currently shown.
    #[must_use]
    pub fn item(&self) -> Option<&dyn Widget> {
        self.page.as_ref().map(|p| p.widget.as_ref())
    }

    /// The page currently shown, mutably.
    pub fn item_mut(&mut self) -> Option<&mut (dyn Widget + 'static)> {
        self.page.as_mut().map(|p| p.widget.as_mut())
    }

    /// Identity of the page currently shown.
    #[must_use]
    pub fn item_id(&self) -> Option<WidgetId> {
        self.page.as_ref().map(|p| p.id)
    }

    /// Number of pages built over the panel's lifetime.
    #[must_use]
    pub const fn pages_built(&self) -> u64 {
        self.list.created()
    }
}

impl std::fmt::Debug for TabbedPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabbedPanel")
            .field("active_index", &self.active_index)
            .field("page", &self.page)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl Widget for TabbedPanel {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.item()
            .map_or(constraints.constrain(Size::ZERO), |p| p.measure(constraints))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        if let Some(page) = self.item_mut() {
            page.move_to(bounds.top_left());
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(page) = self.item() {
            page.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        if !self.active {
            return None;
        }
        self.item_mut().and_then(|page| page.event(event))
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        self.page
            .as_ref()
            .map_or(&[], |p| std::slice::from_ref(&p.widget))
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        self.page
            .as_mut()
            .map_or(&mut [], |p| std::slice::from_mut(&mut p.widget))
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn activate(&mut self) {
        self.active = true;
        if let Some(page) = self.item_mut() {
            page.activate();
        }
    }

    fn deactivate(&mut self) {
        self.active = false;
        if let Some(page) = self.item_mut() {
            page.deactivate();
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn request_redraw(&mut self) {
        if self.active {
            self.redraw = true;
        }
    }

    fn needs_redraw(&self) -> bool {
        self.redraw || self.item().is_some_and(Widget::needs_redraw)
    }

    fn clear_redraw(&mut self) {
        self.redraw = false;
        if let Some(page) = self.item_mut() {
            page.clear_redraw();
        }
    }

    fn is_interactive(&self) -> bool {
        self.active
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TabPanel
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_list::test_support::{probe_factory, probe_index, ProbeHit};
    use scrollkit_core::{MouseButton, Placeholder};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn make_panel(pages: usize, active: usize) -> (TabbedPanel, Arc<AtomicUsize>) {
        let alive = Arc::new(AtomicUsize::new(0));
        let panel = TabbedPanel::new(probe_factory(pages, &alive), Point::new(40.0, 60.0), active);
        (panel, alive)
    }

    // ===== Construction =====

    #[test]
    fn test_new_builds_initial_page() {
        let (panel, alive) = make_panel(3, 1);
        assert_eq!(panel.active_index(), 1);
        assert_eq!(probe_index(panel.item().unwrap()), Some(1));
        assert_eq!(alive.load(Ordering::SeqCst), 1);
        assert_eq!(panel.pages_built(), 1);
    }

    #[test]
    fn test_page_moved_to_panel_corner() {
        let (panel, _alive) = make_panel(3, 0);
        assert_eq!(
            panel.item().unwrap().bounds().top_left(),
            Point::new(40.0, 60.0)
        );
    }

    #[test]
    fn test_from_config() {
        let alive = Arc::new(AtomicUsize::new(0));
        let config = TabbedPanelConfig {
            position: Point::new(1.0, 2.0),
            active_index: 2,
        };
        let panel = TabbedPanel::from_config(probe_factory(3, &alive), &config);
        assert_eq!(panel.active_index(), 2);
        assert_eq!(panel.bounds().top_left(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_missing_page_becomes_placeholder() {
        let (panel, alive) = make_panel(2, 5);
        assert_eq!(panel.item().unwrap().type_id(), TypeId::of::<Placeholder>());
        assert_eq!(alive.load(Ordering::SeqCst), 0);
    }

    // ===== Switching =====

    #[test]
    fn test_set_active_swaps_page() {
        let (mut panel, alive) = make_panel(3, 0);
        let first_id = panel.item_id();
        panel.set_active(2);
        assert_eq!(panel.active_index(), 2);
        assert_eq!(probe_index(panel.item().unwrap()), Some(2));
        assert_ne!(panel.item_id(), first_id);
        assert_eq!(alive.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_active_same_index_keeps_page() {
        let (mut panel, _alive) = make_panel(3, 1);
        let id = panel.item_id();
        panel.set_active(1);
        assert_eq!(panel.item_id(), id);
        assert_eq!(panel.pages_built(), 1);
    }

    #[test]
    fn test_reset_rebuilds_same_index() {
        let (mut panel, alive) = make_panel(3, 1);
        let id = panel.item_id();
        panel.reset();
        assert_ne!(panel.item_id(), id);
        assert_eq!(probe_index(panel.item().unwrap()), Some(1));
        assert_eq!(alive.load(Ordering::SeqCst), 1);
    }

    // ===== Lifecycle =====

    #[test]
    fn test_activation_reaches_page_and_survives_switch() {
        let (mut panel, _alive) = make_panel(3, 0);
        assert!(!panel.item().unwrap().is_active());
        panel.activate();
        assert!(panel.item().unwrap().is_active());
        panel.set_active(1);
        assert!(panel.item().unwrap().is_active());
        panel.deactivate();
        assert!(!panel.item().unwrap().is_active());
    }

    #[test]
    fn test_switch_requests_redraw_only_when_active() {
        let (mut panel, _alive) = make_panel(3, 0);
        panel.set_active(1);
        assert!(!panel.needs_redraw());
        panel.activate();
        panel.set_active(2);
        assert!(panel.needs_redraw());
        panel.clear_redraw();
        assert!(!panel.needs_redraw());
    }

    // ===== Events and tree =====

    #[test]
    fn test_events_reach_page_when_active() {
        let (mut panel, _alive) = make_panel(3, 2);
        let click = Event::MouseDown {
            position: Point::new(45.0, 65.0),
            button: MouseButton::Left,
        };
        assert!(panel.event(&click).is_none());
        panel.activate();
        let msg = panel.event(&click).unwrap();
        assert_eq!(*msg.downcast::<ProbeHit>().unwrap(), ProbeHit(2));
    }

    #[test]
    fn test_children_and_layout() {
        let (mut panel, _alive) = make_panel(3, 0);
        assert_eq!(panel.children().len(), 1);
        panel.layout(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(panel.item().unwrap().bounds().top_left(), Point::ORIGIN);
        assert_eq!(panel.accessible_role(), AccessibleRole::TabPanel);
    }

    #[test]
    fn test_paint_delegates_to_page() {
        let (panel, _alive) = make_panel(3, 1);
        let mut canvas = scrollkit_core::RecordingCanvas::new();
        panel.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["item 1"]);
    }
}
