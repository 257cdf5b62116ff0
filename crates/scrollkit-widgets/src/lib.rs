//! List, tab and dropdown widgets for scrollkit.

pub mod config;
pub mod drop_box;
pub mod label;
pub mod list_box;
pub mod object_list;
pub mod picture;
pub mod slider;
pub mod tabbed;

pub use config::{
    from_yaml, ConfigError, DropBoxConfig, ListBoxConfig, SliderConfig, TabbedPanelConfig,
    Validate,
};
pub use drop_box::{
    starting_position, DropBox, DropBoxList, DropBoxSelected, PopupClosed, SelectionCallback,
};
pub use label::Label;
pub use list_box::{ListBox, ListScrolled};
pub use object_list::{ItemFactory, ListItem, ObjectList};
pub use picture::Picture;
pub use slider::{ScrollSlider, SliderMoved, SliderOrientation, SliderStyle, SLIDER_THICKNESS};
pub use tabbed::TabbedPanel;
