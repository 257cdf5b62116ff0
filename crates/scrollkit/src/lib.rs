//! scrollkit: scrollable list and tab widgets for a game GUI.
//!
//! The widget tree primitives live at the crate root; the list widgets are
//! under [`widgets`].
//!
//! ```
//! use scrollkit::widgets::{ListBox, ListBoxConfig};
//! use scrollkit::{Placeholder, Widget};
//!
//! let config = ListBoxConfig {
//!     visible_size: 4,
//!     total_size: 100,
//!     ..ListBoxConfig::default()
//! };
//! let mut list = ListBox::new(
//!     Box::new(|_| Some(Box::new(Placeholder::new()) as Box<dyn Widget>)),
//!     &config,
//! );
//! list.move_to_pos(10);
//! assert_eq!(list.pos(), 10);
//! assert_eq!(list.items().len(), 4);
//! ```

pub use scrollkit_core::*;
pub use scrollkit_widgets as widgets;
