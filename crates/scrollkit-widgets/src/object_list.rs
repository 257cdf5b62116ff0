//! Factory-backed item lifecycle shared by the list containers.
//!
//! An [`ObjectList`] never stores items itself. It asks a factory closure for
//! the widget at a given index, wraps the answer in a [`ListItem`] carrying a
//! fresh [`WidgetId`], and tears items down again when a container lets go of
//! them. [`TabbedPanel`](crate::TabbedPanel) and [`ListBox`](crate::ListBox)
//! both build on it.

use scrollkit_core::{Placeholder, Widget, WidgetId};
use tracing::trace;

/// Builds the widget shown at a list index.
///
/// Returning `None` leaves the slot empty; the list fills it with a
/// [`Placeholder`].
pub type ItemFactory = Box<dyn Fn(usize) -> Option<Box<dyn Widget>> + Send + Sync>;

/// A widget created by an [`ObjectList`], tagged with its identity.
pub struct ListItem {
    /// Identity of this item, unique within the list that created it
    pub id: WidgetId,
    /// The widget itself
    pub widget: Box<dyn Widget>,
}

impl std::fmt::Debug for ListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListItem")
            .field("id", &self.id)
            .field("active", &self.widget.is_active())
            .finish_non_exhaustive()
    }
}

/// Item factory plus bookkeeping for the items it produced.
pub struct ObjectList {
    factory: ItemFactory,
    next_id: u64,
    live: usize,
}

impl ObjectList {
    /// Create a list around `factory`.
    #[must_use]
    pub fn new(factory: ItemFactory) -> Self {
        Self {
            factory,
            next_id: 0,
            live: 0,
        }
    }

    /// Create a list from any suitable closure.
    #[must_use]
    pub fn from_fn<F>(factory: F) -> Self
    where
        F: Fn(usize) -> Option<Box<dyn Widget>> + Send + Sync + 'static,
    {
        Self::new(Box::new(factory))
    }

    /// Build the item for `index`.
    ///
    /// The item is activated when `activate` is set, which containers pass
    /// through from their own active state.
    pub fn create_item(&mut self, index: usize, activate: bool) -> ListItem {
        let widget = (self.factory)(index).unwrap_or_else(|| Box::new(Placeholder::new()));
        self.wrap(index, widget, activate)
    }

    /// Build an empty item without consulting the factory.
    pub fn create_placeholder(&mut self, index: usize, activate: bool) -> ListItem {
        self.wrap(index, Box::new(Placeholder::new()), activate)
    }

    fn wrap(&mut self, index: usize, mut widget: Box<dyn Widget>, activate: bool) -> ListItem {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        self.live += 1;

        if activate {
            widget.activate();
        }
        trace!(index, id = id.0, "created list item");
        ListItem { id, widget }
    }

    /// Release an item. `None` is accepted and ignored.
    pub fn delete_item(&mut self, item: Option<ListItem>) {
        let Some(mut item) = item else {
            return;
        };
        item.widget.deactivate();
        self.live = self.live.saturating_sub(1);
        trace!(id = item.id.0, "deleted list item");
    }

    /// Number of items ever created by this list.
    #[must_use]
    pub const fn created(&self) -> u64 {
        self.next_id
    }

    /// Number of items created and not yet deleted.
    #[must_use]
    pub const fn live(&self) -> usize {
        self.live
    }
}

impl std::fmt::Debug for ObjectList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectList")
            .field("created", &self.next_id)
            .field("live", &self.live)
            .finish_non_exhaustive()
    }
}
