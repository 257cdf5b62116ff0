//! Drop box: a closed selector that opens a scrollable popup list.
//!
//! The closed box shows the current choice. A left click opens a
//! [`DropBoxList`] over the box with a blue slider on its right edge; the
//! popup closes on the next press, picking the row under the pointer when
//! that press lands on a row.

use crate::config::DropBoxConfig;
use crate::label::Label;
use crate::picture::Picture;
use crate::slider::{ScrollSlider, SliderMoved, SliderStyle, SLIDER_THICKNESS};
use scrollkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, FontKind, Key, Message, MouseButton, Point, Rect, Size,
    TypeId, Widget,
};
use tracing::debug;

/// Left padding of every label inside the box and the popup.
pub const LABEL_OFFSET: f32 = 3.0;

/// Space reserved for the arrow on the right of the closed box.
pub const ARROW_WIDTH: f32 = 20.0;

/// Called with the index of every entry the user picks.
pub type SelectionCallback = Box<dyn FnMut(usize) + Send + Sync>;

/// Message emitted when the user picked an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropBoxSelected {
    /// Index of the picked entry
    pub index: usize,
    /// Text of the picked entry
    pub text: String,
}

/// Message a popup answers with when it wants to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupClosed {
    /// Entry under the closing press, if it was a valid row
    pub picked: Option<usize>,
}

/// First row shown when a popup opens with `selected` chosen.
///
/// The selection is centered where possible and the window never runs past
/// the last entry.
#[must_use]
pub fn starting_position(selected: usize, visible: usize, len: usize) -> usize {
    if selected < visible / 2 || visible >= len {
        0
    } else {
        (selected - visible / 2).min(len - visible)
    }
}

/// Overlay list opened by a [`DropBox`].
pub struct DropBoxList {
    background: Picture,
    names: Vec<String>,
    /// Entry drawn highlighted
    selected: usize,
    labels: Vec<Label>,
    slider: ScrollSlider,
    /// Rows shown at once
    visible: usize,
    /// First row shown
    position: usize,
    /// Last pointer position, relative to the popup
    pointer: Point,
    active: bool,
    redraw: bool,
}

impl DropBoxList {
    /// Open a popup of `size` at `origin` over `names`.
    #[must_use]
    pub fn new(
        image: impl Into<String>,
        origin: Point,
        size: Size,
        names: Vec<String>,
        selected: usize,
        visible: usize,
    ) -> Self {
        let visible = visible.max(1);
        let start = starting_position(selected, visible, names.len());
        let slider = ScrollSlider::new(
            Point::new(origin.x + size.width - SLIDER_THICKNESS, origin.y),
            size.height,
            visible,
            names.len(),
        )
        .style(SliderStyle::Blue)
        .value(start);

        let mut list = Self {
            background: Picture::new(image, origin, size),
            names,
            selected,
            labels: Vec::new(),
            slider,
            visible,
            position: start,
            pointer: Point::ORIGIN,
            active: false,
            redraw: false,
        };
        list.set_position(start);
        list
    }

    /// Show rows starting at `position`.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;

        let bounds = self.bounds();
        let slider_width = self.slider.bounds().width;
        let row_height = bounds.height / self.visible as f32;
        let end = (position + self.visible).min(self.names.len());

        self.labels = self.names[position.min(end)..end]
            .iter()
            .enumerate()
            .map(|(row, name)| {
                let color = if position + row == self.selected {
                    Color::YELLOW
                } else {
                    Color::WHITE
                };
                let rect = Rect::new(
                    bounds.x + LABEL_OFFSET,
                    bounds.y,
                    bounds.width - LABEL_OFFSET - slider_width,
                    0.0,
                );
                let mut label = Label::new(rect, FontKind::Small, name.as_str()).color(color);
                let centering = (row_height - label.bounds().height) / 2.0;
                label.move_by(Point::new(0.0, row_height * row as f32 + centering));
                label
            })
            .collect();

        self.request_redraw();
    }

    /// First row shown.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Rows shown at once.
    #[must_use]
    pub const fn visible_rows(&self) -> usize {
        self.visible
    }

    /// Labels of the rows shown, top to bottom.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The popup's slider.
    #[must_use]
    pub const fn slider(&self) -> &ScrollSlider {
        &self.slider
    }

    /// Entry under a point given relative to the popup.
    fn row_at(&self, relative: Point) -> usize {
        let height = self.bounds().height;
        if height <= 0.0 {
            return self.position;
        }
        let row = (relative.y.max(0.0) * self.visible as f32 / height).floor() as usize;
        self.position + row.min(self.visible - 1)
    }

    fn follow_slider(&mut self, msg: Option<Message>) -> Option<Message> {
        match msg?.downcast::<SliderMoved>() {
            Ok(moved) => {
                self.set_position(moved.position);
                None
            }
            Err(other) => Some(other),
        }
    }

    fn close(picked: Option<usize>) -> Option<Message> {
        Some(Box::new(PopupClosed { picked }))
    }
}

impl std::fmt::Debug for DropBoxList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropBoxList")
            .field("position", &self.position)
            .field("visible", &self.visible)
            .field("entries", &self.names.len())
            .finish_non_exhaustive()
    }
}

impl Widget for DropBoxList {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.bounds().size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let delta = bounds.top_left() - self.bounds().top_left();
        self.background.move_by(delta);
        self.slider.move_by(delta);
        for label in &mut self.labels {
            label.move_by(delta);
        }
        LayoutResult {
            size: self.bounds().size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.background.paint(canvas);
        for label in &self.labels {
            label.paint(canvas);
        }
        self.slider.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        let bounds = self.bounds();
        if let Some(position) = event.position() {
            self.pointer = position - bounds.top_left();
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if !bounds.contains_point(position) {
                    return Self::close(None);
                }
                if self.pointer.x < bounds.width - self.slider.bounds().width {
                    let index = self.row_at(self.pointer);
                    return Self::close((index < self.names.len()).then_some(index));
                }
                let msg = self.slider.event(event);
                self.follow_slider(msg)
            }
            Event::Scroll { position, .. }
                if bounds.contains_point(position)
                    && !self.slider.bounds().contains_point(position) =>
            {
                let target = self.position.saturating_add_signed(event.wheel_step()?);
                self.slider.move_to(target);
                if self.slider.get_value() != self.position {
                    self.set_position(self.slider.get_value());
                }
                None
            }
            Event::KeyDown { key: Key::Escape } | Event::FocusOut => Self::close(None),
            _ => {
                let msg = self.slider.event(event);
                self.follow_slider(msg)
            }
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn bounds(&self) -> Rect {
        self.background.bounds()
    }

    fn activate(&mut self) {
        self.active = true;
        self.slider.activate();
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.slider.deactivate();
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
        self.redraw || self.slider.needs_redraw()
    }

    fn clear_redraw(&mut self) {
        self.redraw = false;
        self.slider.clear_redraw();
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }
}

/// Closed selector showing the current choice.
pub struct DropBox {
    background: Picture,
    selection: Label,
    items: Vec<String>,
    selected_index: usize,
    list_image: String,
    list_size: Size,
    list_visible_size: usize,
    popup: Option<DropBoxList>,
    callback: Option<SelectionCallback>,
    active: bool,
    redraw: bool,
    test_id_value: Option<String>,
}

impl DropBox {
    /// Create a closed drop box.
    #[must_use]
    pub fn new(config: &DropBoxConfig) -> Self {
        let background = Picture::new(
            config.selection_image.as_str(),
            config.position,
            config.selection_size,
        );
        let text = config
            .items
            .get(config.selected_index)
            .map_or("", String::as_str);
        let selection = Label::new(
            Rect::new(
                config.position.x + LABEL_OFFSET,
                config.position.y,
                config.selection_size.width - LABEL_OFFSET - ARROW_WIDTH,
                0.0,
            ),
            config.font,
            text,
        );

        Self {
            background,
            selection,
            items: config.items.clone(),
            selected_index: config.selected_index,
            list_image: config.list_image.clone(),
            list_size: config.list_size,
            list_visible_size: config.list_visible_size,
            popup: None,
            callback: None,
            active: false,
            redraw: false,
            test_id_value: None,
        }
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Call `callback` with the index of every entry the user picks.
    pub fn set_selection_callback<F>(&mut self, callback: F)
    where
        F: FnMut(usize) + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Index of the current choice. May be out of range.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Text of the current choice.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        self.items.get(self.selected_index).map(String::as_str)
    }

    /// Entries to choose from.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Label showing the current choice.
    #[must_use]
    pub const fn selection_label(&self) -> &Label {
        &self.selection
    }

    /// Whether the popup list is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.popup.is_some()
    }

    /// The popup list, while it is showing.
    #[must_use]
    pub const fn popup(&self) -> Option<&DropBoxList> {
        self.popup.as_ref()
    }

    /// Show the popup list over the box.
    pub fn open_list(&mut self) {
        let mut popup = DropBoxList::new(
            self.list_image.as_str(),
            self.bounds().top_left(),
            self.list_size,
            self.items.clone(),
            self.selected_index,
            self.list_visible_size,
        );
        if self.active {
            popup.activate();
        }
        debug!(
            selected = self.selected_index,
            first_row = popup.position(),
            "opened drop box"
        );
        self.popup = Some(popup);
        self.request_redraw();
    }

    /// Hide the popup list without changing the choice.
    pub fn close_list(&mut self) {
        if let Some(mut popup) = self.popup.take() {
            popup.deactivate();
            debug!("closed drop box");
            self.request_redraw();
        }
    }

    fn select(&mut self, index: usize) -> Option<Message> {
        let text = self.items.get(index)?.clone();
        self.selected_index = index;
        self.selection.set_text(text.as_str());
        if let Some(callback) = self.callback.as_mut() {
            callback(index);
        }
        debug!(index, text = text.as_str(), "drop box selection changed");
        Some(Box::new(DropBoxSelected { index, text }))
    }
}

impl std::fmt::Debug for DropBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropBox")
            .field("items", &self.items)
            .field("selected_index", &self.selected_index)
            .field("popup", &self.popup)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for DropBox {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.bounds().size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let delta = bounds.top_left() - self.bounds().top_left();
        self.background.move_by(delta);
        self.selection.move_by(delta);
        if let Some(popup) = &mut self.popup {
            popup.move_by(delta);
        }
        LayoutResult {
            size: self.bounds().size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.background.paint(canvas);
        self.selection.paint(canvas);
        if let Some(popup) = &self.popup {
            popup.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        if !self.active {
            return None;
        }

        if let Some(popup) = &mut self.popup {
            let msg = popup.event(event)?;
            return match msg.downcast::<PopupClosed>() {
                Ok(closed) => {
                    self.close_list();
                    closed.picked.and_then(|index| self.select(index))
                }
                Err(other) => Some(other),
            };
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds().contains_point(position) => {
                self.open_list();
                None
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn bounds(&self) -> Rect {
        self.background.bounds()
    }

    fn activate(&mut self) {
        self.active = true;
        if let Some(popup) = &mut self.popup {
            popup.activate();
        }
    }

    fn deactivate(&mut self) {
        self.active = false;
        if let Some(popup) = &mut self.popup {
            popup.deactivate();
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
            || self.selection.needs_redraw()
            || self.popup.as_ref().is_some_and(Widget::needs_redraw)
    }

    fn clear_redraw(&mut self) {
        self.redraw = false;
        self.selection.clear_redraw();
        if let Some(popup) = &mut self.popup {
            popup.clear_redraw();
        }
    }

    fn is_interactive(&self) -> bool {
        self.active
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.selected_text()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
