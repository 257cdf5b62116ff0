//! Virtualized list box.
//!
//! Only a fixed window of `visible_size` items exists at any time. Scrolling
//! by a single row drops the item leaving the window and builds the one
//! entering it; any larger jump rebuilds the whole window.

use crate::config::ListBoxConfig;
use crate::object_list::{ItemFactory, ListItem, ObjectList};
use crate::slider::{ScrollSlider, SliderMoved};
use scrollkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Message, Point, Rect, Size, TypeId, Widget, WidgetId,
};
use tracing::{debug, trace};

/// Message emitted when user input moved the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListScrolled {
    /// Index of the first visible item
    pub first: usize,
}

/// Scrollable list showing a window over `total` factory-built items.
pub struct ListBox {
    list: ObjectList,
    /// Visible items, front to back
    items: Vec<Box<dyn Widget>>,
    /// Identity of each visible item, parallel to `items`
    ids: Vec<WidgetId>,
    /// Index of the first visible item
    first: usize,
    /// Number of items in the whole list
    total: usize,
    /// Top-left corner of the first slot
    origin: Point,
    /// Distance between consecutive slots
    item_offset: Point,
    slider: Option<ScrollSlider>,
    active: bool,
    redraw: bool,
    test_id_value: Option<String>,
}

impl ListBox {
    /// Create a list box and fill its window.
    ///
    /// The window always has at least one slot. The initial position is
    /// clamped so the window never starts past the last full page.
    #[must_use]
    pub fn new(factory: ItemFactory, config: &ListBoxConfig) -> Self {
        let visible = config.visible_size.max(1);
        let first = config
            .initial_position
            .min(config.total_size.saturating_sub(visible));

        let slider = config.slider.as_ref().map(|sc| {
            ScrollSlider::new(sc.position, sc.length, visible, config.total_size)
                .orientation(sc.orientation)
                .style(sc.style)
                .value(first)
        });

        let mut list_box = Self {
            list: ObjectList::new(factory),
            items: Vec::with_capacity(visible),
            ids: Vec::with_capacity(visible),
            first,
            total: config.total_size,
            origin: config.position,
            item_offset: config.item_offset,
            slider,
            active: false,
            redraw: false,
            test_id_value: None,
        };
        list_box.fill(visible);
        list_box
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    fn fill(&mut self, visible: usize) {
        for index in self.first..self.first + visible {
            let item = self.create_slot(index);
            self.ids.push(item.id);
            self.items.push(item.widget);
        }
        self.update_positions();
    }

    /// Slots past the end of the list stay empty without asking the factory.
    fn create_slot(&mut self, index: usize) -> ListItem {
        if index < self.total {
            self.list.create_item(index, self.active)
        } else {
            self.list.create_placeholder(index, self.active)
        }
    }

    fn delete_slot(&mut self, slot: usize) {
        let id = self.ids.remove(slot);
        let widget = self.items.remove(slot);
        self.list.delete_item(Some(ListItem { id, widget }));
    }

    fn visible_size(&self) -> usize {
        self.items.len()
    }

    fn max_first(&self) -> usize {
        self.total.saturating_sub(self.visible_size())
    }

    /// Place every slot at `origin + i * item_offset` and sync the slider.
    pub fn update_positions(&mut self) {
        for (slot, item) in self.items.iter_mut().enumerate() {
            item.move_to(self.origin + self.item_offset.scaled(slot));
        }
        if let Some(slider) = &mut self.slider {
            slider.move_to(self.first);
        }
        self.request_redraw();
    }

    /// Rebuild every visible slot starting at the current position.
    pub fn reset(&mut self) {
        let visible = self.visible_size();
        for (widget, id) in self.items.drain(..).zip(self.ids.drain(..)) {
            self.list.delete_item(Some(ListItem { id, widget }));
        }
        debug!(first = self.first, visible, total = self.total, "resetting list box");
        self.fill(visible);
    }

    /// Change the number of items in the list.
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        if let Some(slider) = &mut self.slider {
            slider.set_amount(total);
        }
        self.first = self.first.min(self.max_first());
        self.reset();
    }

    /// Number of items in the whole list.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.total
    }

    /// Index of the first visible item.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.first
    }

    fn slot_of(&self, which: usize) -> Option<usize> {
        let in_window = which >= self.first && which < self.first + self.visible_size();
        (in_window && which < self.total).then(|| which - self.first)
    }

    /// The item at absolute index `which`, if it is currently visible.
    #[must_use]
    pub fn get_item(&self, which: usize) -> Option<&dyn Widget> {
        self.slot_of(which).map(|slot| self.items[slot].as_ref())
    }

    /// The item at absolute index `which`, mutably.
    pub fn get_item_mut(&mut self, which: usize) -> Option<&mut (dyn Widget + 'static)> {
        self.slot_of(which).map(|slot| self.items[slot].as_mut())
    }

    /// Identity of the item at absolute index `which`.
    #[must_use]
    pub fn item_id(&self, which: usize) -> Option<WidgetId> {
        self.slot_of(which).map(|slot| self.ids[slot])
    }

    /// Absolute index of a visible item.
    #[must_use]
    pub fn index_of(&self, id: WidgetId) -> Option<usize> {
        self.ids
            .iter()
            .position(|&candidate| candidate == id)
            .map(|slot| self.first + slot)
    }

    /// Scroll as little as possible to bring `which` into view.
    pub fn scroll_to(&mut self, which: usize) {
        if which < self.first {
            self.move_to_pos(which);
        } else if which >= self.first + self.visible_size() && which < self.total {
            self.move_to_pos(which + 1 - self.visible_size());
        }
    }

    /// Move the window so it starts at `which`, clamped to the last page.
    pub fn move_to_pos(&mut self, which: usize) {
        let target = which.min(self.max_first());
        if target + 1 == self.first {
            self.move_to_prev();
        } else if target == self.first + 1 {
            self.move_to_next();
        } else if target != self.first {
            self.first = target;
            self.reset();
        }
    }

    /// Shift the window down by one item.
    pub fn move_to_next(&mut self) {
        if self.first + self.visible_size() >= self.total {
            return;
        }
        let visible = self.visible_size();
        self.first += 1;
        self.delete_slot(0);

        let item = self.create_slot(self.first + visible - 1);
        self.ids.push(item.id);
        self.items.push(item.widget);
        trace!(first = self.first, "shifted list box down");
        self.update_positions();
    }

    /// Shift the window up by one item.
    pub fn move_to_prev(&mut self) {
        if self.first == 0 {
            return;
        }
        self.first -= 1;
        self.delete_slot(self.visible_size() - 1);

        let item = self.create_slot(self.first);
        self.ids.insert(0, item.id);
        self.items.insert(0, item.widget);
        trace!(first = self.first, "shifted list box up");
        self.update_positions();
    }

    /// Visible items, front to back.
    #[must_use]
    pub fn items(&self) -> &[Box<dyn Widget>] {
        &self.items
    }

    /// Identities of the visible items, front to back.
    #[must_use]
    pub fn item_ids(&self) -> &[WidgetId] {
        &self.ids
    }

    /// The attached slider, if any.
    #[must_use]
    pub const fn slider(&self) -> Option<&ScrollSlider> {
        self.slider.as_ref()
    }

    /// Number of items built over the list box's lifetime.
    #[must_use]
    pub const fn items_built(&self) -> u64 {
        self.list.created()
    }

    /// Area covered by the visible items.
    fn items_area(&self) -> Rect {
        self.items
            .iter()
            .map(|item| item.bounds())
            .fold(Rect::from_origin_size(self.origin, Size::ZERO), |acc, r| {
                acc.union(&r)
            })
    }

    fn scroll_by_user(&mut self, target: usize) -> Option<Message> {
        let before = self.first;
        self.move_to_pos(target);
        (self.first != before).then(|| Box::new(ListScrolled { first: self.first }) as Message)
    }
}

impl std::fmt::Debug for ListBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListBox")
            .field("first", &self.first)
            .field("visible", &self.items.len())
            .field("total", &self.total)
            .field("ids", &self.ids)
            .field("slider", &self.slider)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl Widget for ListBox {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.bounds().size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let delta = bounds.top_left() - self.bounds().top_left();
        self.origin += delta;
        if let Some(slider) = &mut self.slider {
            slider.move_by(delta);
        }
        self.update_positions();
        LayoutResult {
            size: self.bounds().size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for item in &self.items {
            item.paint(canvas);
        }
        if let Some(slider) = &self.slider {
            slider.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        if !self.active {
            return None;
        }

        if let Some(msg) = self.slider.as_mut().and_then(|s| s.event(event)) {
            return match msg.downcast::<SliderMoved>() {
                Ok(moved) => self.scroll_by_user(moved.position),
                Err(other) => Some(other),
            };
        }

        if let Event::Scroll { position, .. } = event {
            if self.items_area().contains_point(position) {
                let step = event.wheel_step()?;
                return self.scroll_by_user(self.first.saturating_add_signed(step));
            }
        }

        self.items.iter_mut().find_map(|item| item.event(event))
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.items
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.items
    }

    fn bounds(&self) -> Rect {
        let items = self.items_area();
        self.slider
            .as_ref()
            .map_or(items, |slider| items.union(&slider.bounds()))
    }

    fn activate(&mut self) {
        self.active = true;
        for item in &mut self.items {
            item.activate();
        }
        if let Some(slider) = &mut self.slider {
            slider.activate();
        }
    }

    fn deactivate(&mut self) {
        self.active = false;
        for item in &mut self.items {
            item.deactivate();
        }
        if let Some(slider) = &mut self.slider {
            slider.deactivate();
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
        self.redraw
            || self.items.iter().any(|item| item.needs_redraw())
            || self.slider.as_ref().is_some_and(Widget::needs_redraw)
    }

    fn clear_redraw(&mut self) {
        self.redraw = false;
        for item in &mut self.items {
            item.clear_redraw();
        }
        if let Some(slider) = &mut self.slider {
            slider.clear_redraw();
        }
    }

    fn is_interactive(&self) -> bool {
        self.active
    }

    fn is_focusable(&self) -> bool {
        self.slider.is_some()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::object_list::test_support::{probe_factory, probe_index, ProbeHit};
    use proptest::prelude::*;
    use scrollkit_core::{Key, MouseButton, Placeholder};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn config(visible: usize, total: usize, initial: usize) -> ListBoxConfig {
        ListBoxConfig {
            position: Point::new(10.0, 20.0),
            item_offset: Point::new(0.0, 32.0),
            visible_size: visible,
            total_size: total,
            initial_position: initial,
            slider: None,
        }
    }

    fn with_slider(mut config: ListBoxConfig) -> ListBoxConfig {
        config.slider = Some(SliderConfig {
            position: Point::new(200.0, 20.0),
            length: 96.0,
            ..SliderConfig::default()
        });
        config
    }

    fn make_list(config: &ListBoxConfig) -> (ListBox, Arc<AtomicUsize>) {
        let alive = Arc::new(AtomicUsize::new(0));
        let list = ListBox::new(probe_factory(usize::MAX, &alive), config);
        (list, alive)
    }

    fn visible_indices(list: &ListBox) -> Vec<Option<usize>> {
        list.items()
            .iter()
            .map(|item| probe_index(item.as_ref()))
            .collect()
    }

    fn scrolled(msg: Option<Message>) -> Option<usize> {
        msg.and_then(|m| m.downcast::<ListScrolled>().ok())
            .map(|m| m.first)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_fills_window_from_initial_position() {
        let (list, alive) = make_list(&config(3, 10, 4));
        assert_eq!(list.pos(), 4);
        assert_eq!(list.size(), 10);
        assert_eq!(visible_indices(&list), vec![Some(4), Some(5), Some(6)]);
        assert_eq!(alive.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_new_clamps_initial_position() {
        let (list, _alive) = make_list(&config(3, 10, 9));
        assert_eq!(list.pos(), 7);
    }

    #[test]
    fn test_zero_visible_still_has_one_slot() {
        let (list, _alive) = make_list(&config(0, 10, 0));
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_slots_past_end_are_placeholders() {
        let (list, alive) = make_list(&config(5, 3, 0));
        assert_eq!(alive.load(Ordering::SeqCst), 3);
        assert_eq!(list.items().len(), 5);
        assert_eq!(list.items()[3].type_id(), TypeId::of::<Placeholder>());
        assert_eq!(list.items()[4].type_id(), TypeId::of::<Placeholder>());
    }

    #[test]
    fn test_items_positioned_by_offset() {
        let (list, _alive) = make_list(&config(3, 10, 0));
        let origins: Vec<Point> = list.items().iter().map(|i| i.bounds().top_left()).collect();
        assert_eq!(
            origins,
            vec![
                Point::new(10.0, 20.0),
                Point::new(10.0, 52.0),
                Point::new(10.0, 84.0)
            ]
        );
    }

    #[test]
    fn test_slider_built_from_config() {
        let (list, _alive) = make_list(&with_slider(config(3, 10, 2)));
        let slider = list.slider().unwrap();
        assert_eq!(slider.get_value(), 2);
        assert_eq!(slider.get_capacity(), 3);
        assert_eq!(slider.get_amount(), 10);
        assert_eq!(slider.bounds().top_left(), Point::new(200.0, 20.0));
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    #[test]
    fn test_get_item_inside_window() {
        let (list, _alive) = make_list(&config(3, 10, 2));
        assert_eq!(probe_index(list.get_item(2).unwrap()), Some(2));
        assert_eq!(probe_index(list.get_item(4).unwrap()), Some(4));
    }

    #[test]
    fn test_get_item_outside_window() {
        let (list, _alive) = make_list(&config(3, 10, 2));
        assert!(list.get_item(1).is_none());
        assert!(list.get_item(5).is_none());
        assert!(list.get_item(100).is_none());
    }

    #[test]
    fn test_get_item_past_total() {
        let (list, _alive) = make_list(&config(5, 3, 0));
        assert!(list.get_item(2).is_some());
        assert!(list.get_item(3).is_none());
    }

    #[test]
    fn test_get_item_mut() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        let item = list.get_item_mut(1).unwrap();
        item.move_to(Point::new(0.0, 0.0));
        assert_eq!(list.get_item(1).unwrap().bounds().top_left(), Point::ORIGIN);
    }

    #[test]
    fn test_index_of_visible_and_stale_ids() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        let id = list.item_id(2).unwrap();
        assert_eq!(list.index_of(id), Some(2));

        let gone = list.item_id(0).unwrap();
        list.move_to_next();
        assert_eq!(list.index_of(gone), None);
        assert_eq!(list.index_of(id), Some(2));
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    #[test]
    fn test_move_to_next_creates_one_item() {
        let (mut list, alive) = make_list(&config(3, 10, 0));
        let kept = list.item_ids()[1..].to_vec();
        let built = list.items_built();

        list.move_to_next();
        assert_eq!(list.pos(), 1);
        assert_eq!(list.items_built(), built + 1);
        assert_eq!(&list.item_ids()[..2], kept.as_slice());
        assert_eq!(visible_indices(&list), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(alive.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_move_to_prev_creates_one_item() {
        let (mut list, _alive) = make_list(&config(3, 10, 5));
        let built = list.items_built();
        list.move_to_prev();
        assert_eq!(list.pos(), 4);
        assert_eq!(list.items_built(), built + 1);
        assert_eq!(visible_indices(&list), vec![Some(4), Some(5), Some(6)]);
    }

    #[test]
    fn test_shifts_stop_at_bounds() {
        let (mut list, _alive) = make_list(&config(3, 5, 0));
        list.move_to_prev();
        assert_eq!(list.pos(), 0);
        list.move_to_pos(2);
        list.move_to_next();
        assert_eq!(list.pos(), 2);
    }

    #[test]
    fn test_shift_keeps_positions() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        list.move_to_next();
        assert_eq!(list.items()[0].bounds().top_left(), Point::new(10.0, 20.0));
        assert_eq!(list.items()[2].bounds().top_left(), Point::new(10.0, 84.0));
    }

    #[test]
    fn test_move_to_pos_jump_rebuilds_window() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        let built = list.items_built();
        list.move_to_pos(5);
        assert_eq!(list.pos(), 5);
        assert_eq!(list.items_built(), built + 3);
        assert_eq!(visible_indices(&list), vec![Some(5), Some(6), Some(7)]);
    }

    #[test]
    fn test_move_to_pos_same_is_noop() {
        let (mut list, _alive) = make_list(&config(3, 10, 4));
        let built = list.items_built();
        list.move_to_pos(4);
        assert_eq!(list.items_built(), built);
    }

    #[test]
    fn test_move_to_pos_clamps() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        list.move_to_pos(50);
        assert_eq!(list.pos(), 7);

        let (mut short, _alive) = make_list(&config(5, 3, 0));
        short.move_to_pos(2);
        assert_eq!(short.pos(), 0);
    }

    #[test]
    fn test_scroll_to() {
        let (mut list, _alive) = make_list(&config(3, 10, 4));
        list.scroll_to(5);
        assert_eq!(list.pos(), 4);
        list.scroll_to(8);
        assert_eq!(list.pos(), 6);
        list.scroll_to(1);
        assert_eq!(list.pos(), 1);
        list.scroll_to(10);
        assert_eq!(list.pos(), 1);
    }

    #[test]
    fn test_resize_shrinks_window_start() {
        let (mut list, alive) = make_list(&with_slider(config(3, 10, 7)));
        list.resize(5);
        assert_eq!(list.size(), 5);
        assert_eq!(list.pos(), 2);
        assert_eq!(list.slider().unwrap().get_amount(), 5);
        assert_eq!(visible_indices(&list), vec![Some(2), Some(3), Some(4)]);
        assert_eq!(alive.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_resize_grow_fills_placeholders() {
        let (mut list, alive) = make_list(&config(4, 2, 0));
        assert_eq!(alive.load(Ordering::SeqCst), 2);
        list.resize(6);
        assert_eq!(alive.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_slider_follows_programmatic_moves() {
        let (mut list, _alive) = make_list(&with_slider(config(3, 10, 0)));
        list.move_to_pos(6);
        assert_eq!(list.slider().unwrap().get_value(), 6);
        list.move_to_prev();
        assert_eq!(list.slider().unwrap().get_value(), 5);
    }

    // =========================================================================
    // Lifecycle and events
    // =========================================================================

    #[test]
    fn test_activation_reaches_items_and_new_items() {
        let (mut list, _alive) = make_list(&with_slider(config(3, 10, 0)));
        list.activate();
        assert!(list.items().iter().all(|i| i.is_active()));
        assert!(list.slider().unwrap().is_active());

        list.move_to_next();
        assert!(list.items()[2].is_active());
        list.move_to_pos(6);
        assert!(list.items().iter().all(|i| i.is_active()));

        list.deactivate();
        assert!(list.items().iter().all(|i| !i.is_active()));
    }

    #[test]
    fn test_inactive_list_ignores_events() {
        let (mut list, _alive) = make_list(&with_slider(config(3, 10, 0)));
        assert!(list.event(&Event::KeyDown { key: Key::Down }).is_none());
        assert_eq!(list.pos(), 0);
    }

    #[test]
    fn test_slider_keys_scroll_list() {
        let (mut list, _alive) = make_list(&with_slider(config(3, 10, 0)));
        list.activate();
        assert_eq!(scrolled(list.event(&Event::KeyDown { key: Key::Down })), Some(1));
        assert_eq!(
            scrolled(list.event(&Event::KeyDown { key: Key::End })),
            Some(7)
        );
        assert_eq!(list.pos(), 7);
        assert_eq!(visible_indices(&list), vec![Some(7), Some(8), Some(9)]);
    }

    #[test]
    fn test_wheel_over_items_scrolls() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        list.activate();
        let down = Event::Scroll {
            position: Point::new(15.0, 25.0),
            delta_y: 1.0,
        };
        assert_eq!(scrolled(list.event(&down)), Some(1));
        let up = Event::Scroll {
            position: Point::new(15.0, 25.0),
            delta_y: -1.0,
        };
        assert_eq!(scrolled(list.event(&up)), Some(0));
        assert_eq!(scrolled(list.event(&up)), None);
    }

    #[test]
    fn test_wheel_without_vertical_delta_ignored() {
        let (mut list, _alive) = make_list(&config(3, 10, 4));
        list.activate();
        list.clear_redraw();
        let msg = list.event(&Event::Scroll {
            position: Point::new(15.0, 25.0),
            delta_y: 0.0,
        });
        assert!(msg.is_none());
        assert_eq!(list.pos(), 4);
        assert!(!list.needs_redraw());
    }

    #[test]
    fn test_wheel_elsewhere_ignored() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        list.activate();
        let msg = list.event(&Event::Scroll {
            position: Point::new(500.0, 500.0),
            delta_y: 1.0,
        });
        assert!(msg.is_none());
        assert_eq!(list.pos(), 0);
    }

    #[test]
    fn test_clicks_reach_items() {
        let (mut list, _alive) = make_list(&config(3, 10, 3));
        list.activate();
        let msg = list
            .event(&Event::MouseDown {
                position: Point::new(15.0, 60.0),
                button: MouseButton::Left,
            })
            .unwrap();
        assert_eq!(*msg.downcast::<ProbeHit>().unwrap(), ProbeHit(4));
    }

    #[test]
    fn test_redraw_scheduled_when_active() {
        let (mut list, _alive) = make_list(&config(3, 10, 0));
        list.move_to_next();
        assert!(!list.needs_redraw());
        list.activate();
        list.move_to_next();
        assert!(list.needs_redraw());
        list.clear_redraw();
        assert!(!list.needs_redraw());
    }

    #[test]
    fn test_move_to_moves_items_and_slider() {
        let (mut list, _alive) = make_list(&with_slider(config(2, 10, 0)));
        list.move_to(Point::new(110.0, 20.0));
        assert_eq!(list.items()[0].bounds().top_left(), Point::new(110.0, 20.0));
        assert_eq!(list.items()[1].bounds().top_left(), Point::new(110.0, 52.0));
        assert_eq!(
            list.slider().unwrap().bounds().top_left(),
            Point::new(300.0, 20.0)
        );
    }

    #[test]
    fn test_paint_items_then_slider() {
        let (list, _alive) = make_list(&with_slider(config(2, 10, 3)));
        let mut canvas = scrollkit_core::RecordingCanvas::new();
        list.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["item 3", "item 4"]);
        assert_eq!(canvas.command_count(), 4);
    }

    #[test]
    fn test_role_and_test_id() {
        let (list, _alive) = make_list(&config(1, 1, 0));
        let list = list.with_test_id("scenario-list");
        assert_eq!(list.accessible_role(), AccessibleRole::List);
        assert_eq!(Widget::test_id(&list), Some("scenario-list"));
        assert!(format!("{list:?}").contains("ListBox"));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #[test]
        fn prop_window_invariants_hold(
            visible in 1usize..8,
            total in 0usize..40,
            moves in proptest::collection::vec(0usize..50, 1..12)
        ) {
            let (mut list, alive) = make_list(&config(visible, total, 0));
            for target in moves {
                list.move_to_pos(target);
                let expected = target.min(total.saturating_sub(visible));
                prop_assert_eq!(list.pos(), expected);
                prop_assert_eq!(list.items().len(), visible);
                prop_assert_eq!(list.item_ids().len(), visible);
                for (slot, item) in list.items().iter().enumerate() {
                    let index = expected + slot;
                    let want = (index < total).then_some(index);
                    prop_assert_eq!(probe_index(item.as_ref()), want);
                }
                prop_assert_eq!(alive.load(Ordering::SeqCst), visible.min(total - expected));
            }
        }

        #[test]
        fn prop_single_step_builds_one_item(
            visible in 1usize..8,
            total in 2usize..40,
            start in 0usize..40,
            forward in any::<bool>()
        ) {
            let (mut list, _alive) = make_list(&config(visible, total, start));
            let before = list.pos();
            let built = list.items_built();
            let target = if forward { before + 1 } else { before.saturating_sub(1) };
            list.move_to_pos(target);
            let expected = u64::from(list.pos() != before);
            prop_assert_eq!(list.items_built(), built + expected);
        }
    }
}
