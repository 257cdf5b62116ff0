//! Declarative widget configuration.
//!
//! Every list widget can be described by a small serde struct so screens can
//! be laid out from YAML instead of code:
//!
//! ```yaml
//! position: { x: 10.0, y: 20.0 }
//! item_offset: { x: 0.0, y: 32.0 }
//! visible_size: 5
//! total_size: 40
//! slider:
//!   position: { x: 200.0, y: 20.0 }
//!   length: 160.0
//!   style: blue
//! ```

use crate::slider::{SliderOrientation, SliderStyle};
use scrollkit_core::{FontKind, Point, Size};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML or does not match the schema.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A field holds a value the widget cannot work with.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Semantic checks run after deserialization.
pub trait Validate {
    /// Reject values the widget cannot honor.
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Parse and validate a configuration document.
pub fn from_yaml<T: DeserializeOwned + Validate>(yaml: &str) -> Result<T, ConfigError> {
    let config: T = serde_yaml_ng::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Placement and look of a scroll slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Top-left corner of the slider
    pub position: Point,
    /// Length of the slider along its axis
    pub length: f32,
    /// Axis the slider moves along
    pub orientation: SliderOrientation,
    /// Color scheme
    pub style: SliderStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            length: 100.0,
            orientation: SliderOrientation::Vertical,
            style: SliderStyle::Brown,
        }
    }
}

impl Validate for SliderConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.length <= 0.0 {
            return Err(ConfigError::invalid("length", "must be positive"));
        }
        Ok(())
    }
}

/// Configuration for a [`ListBox`](crate::ListBox).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBoxConfig {
    /// Top-left corner of the first visible item
    pub position: Point,
    /// Distance between consecutive items
    pub item_offset: Point,
    /// Number of item slots kept alive
    pub visible_size: usize,
    /// Number of items in the whole list
    pub total_size: usize,
    /// Index of the first visible item
    pub initial_position: usize,
    /// Optional slider attached to the list
    pub slider: Option<SliderConfig>,
}

impl Default for ListBoxConfig {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            item_offset: Point::new(0.0, 32.0),
            visible_size: 1,
            total_size: 0,
            initial_position: 0,
            slider: None,
        }
    }
}

impl ListBoxConfig {
    /// Load from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        from_yaml(yaml)
    }
}

impl Validate for ListBoxConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_size == 0 {
            return Err(ConfigError::invalid(
                "visible_size",
                "a list box needs at least one slot",
            ));
        }
        if self.initial_position > self.total_size {
            return Err(ConfigError::invalid(
                "initial_position",
                format!(
                    "{} is past the end of a list of {}",
                    self.initial_position, self.total_size
                ),
            ));
        }
        if let Some(slider) = &self.slider {
            slider.validate()?;
        }
        Ok(())
    }
}

/// Configuration for a [`TabbedPanel`](crate::TabbedPanel).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabbedPanelConfig {
    /// Top-left corner of the page
    pub position: Point,
    /// Index of the page shown first
    pub active_index: usize,
}

impl TabbedPanelConfig {
    /// Load from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        from_yaml(yaml)
    }
}

impl Validate for TabbedPanelConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Configuration for a [`DropBox`](crate::DropBox).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropBoxConfig {
    /// Top-left corner of the closed box
    pub position: Point,
    /// Background image of the closed box
    pub selection_image: String,
    /// Size of the closed box
    pub selection_size: Size,
    /// Background image of the popup list
    pub list_image: String,
    /// Size of the popup list
    pub list_size: Size,
    /// Number of rows visible in the popup list
    pub list_visible_size: usize,
    /// Font of the selection label
    pub font: FontKind,
    /// Entries to choose from
    pub items: Vec<String>,
    /// Initially selected entry
    pub selected_index: usize,
}

impl Default for DropBoxConfig {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            selection_image: String::new(),
            selection_size: Size::new(120.0, 20.0),
            list_image: String::new(),
            list_size: Size::new(120.0, 100.0),
            list_visible_size: 5,
            font: FontKind::Small,
            items: Vec::new(),
            selected_index: 0,
        }
    }
}

impl DropBoxConfig {
    /// Load from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        from_yaml(yaml)
    }
}

impl Validate for DropBoxConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.list_visible_size == 0 {
            return Err(ConfigError::invalid(
                "list_visible_size",
                "the popup must show at least one row",
            ));
        }
        if self.list_size.is_empty() {
            return Err(ConfigError::invalid("list_size", "must not be empty"));
        }
        if self.selection_size.is_empty() {
            return Err(ConfigError::invalid("selection_size", "must not be empty"));
        }
        Ok(())
    }
}
