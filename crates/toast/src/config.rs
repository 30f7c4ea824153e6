//! TOML configuration for the toast manager.
//!
//! ```toml
//! position = "bottom-right"
//! max_visible = 4
//! width = 40
//!
//! [styles.info]
//! prefix = "i"
//! fg = "cyan"
//!
//! [styles.12]
//! prefix = "★"
//! fg = "#ffaa00"
//! bold = true
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::countdown::DEFAULT_TICK_INTERVAL_MS;
use crate::manager::{DEFAULT_DURATION_MS, DEFAULT_MAX_VISIBLE, DEFAULT_WIDTH, Manager, Overflow};
use crate::position::Position;
use crate::style::{Category, ToastStyle};

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The document is not valid TOML or does not match the schema.
	#[error("invalid toast config: {0}")]
	Parse(#[from] toml::de::Error),

	/// `max_visible` must be at least one.
	#[error("max_visible must be at least 1")]
	InvalidMaxVisible,

	/// `max_queued` must be at least one when set.
	#[error("max_queued must be at least 1")]
	InvalidMaxQueued,

	/// `tick_interval_ms` must be positive.
	#[error("tick_interval_ms must be greater than 0")]
	InvalidTickInterval,

	/// A style key is neither a built-in category name nor a number.
	#[error("unknown toast category: {0}")]
	UnknownCategory(String),

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),
}

/// Style override entry under `[styles.<category>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
	pub prefix: String,
	pub fg: Option<String>,
	pub bg: Option<String>,
	pub bold: bool,
}

impl StyleConfig {
	fn to_toast_style(&self) -> Result<ToastStyle, ConfigError> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg)?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg)?);
		}
		if self.bold {
			style = style.add_modifier(Modifier::BOLD);
		}
		Ok(ToastStyle::new(self.prefix.clone(), style))
	}
}

/// Manager settings as read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastConfig {
	pub position: Position,
	pub max_visible: usize,
	pub width: u16,
	pub tick_interval_ms: u64,
	pub default_duration_ms: u64,
	pub max_queued: Option<usize>,
	pub overflow: Overflow,
	pub styles: BTreeMap<String, StyleConfig>,
}

impl Default for ToastConfig {
	fn default() -> Self {
		Self {
			position: Position::default(),
			max_visible: DEFAULT_MAX_VISIBLE,
			width: DEFAULT_WIDTH,
			tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
			default_duration_ms: DEFAULT_DURATION_MS,
			max_queued: None,
			overflow: Overflow::default(),
			styles: BTreeMap::new(),
		}
	}
}

impl ToastConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		tracing::debug!(position = ?config.position, max_visible = config.max_visible, styles = config.styles.len(), "toast config loaded");
		Ok(config)
	}

	/// Checks value ranges and style entries.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_visible == 0 {
			return Err(ConfigError::InvalidMaxVisible);
		}
		if self.max_queued == Some(0) {
			return Err(ConfigError::InvalidMaxQueued);
		}
		if self.tick_interval_ms == 0 {
			return Err(ConfigError::InvalidTickInterval);
		}
		self.style_overrides().map(|_| ())
	}

	/// Resolves `[styles]` entries into category overrides.
	pub fn style_overrides(&self) -> Result<Vec<(Category, ToastStyle)>, ConfigError> {
		self.styles
			.iter()
			.map(|(key, entry)| {
				let category = Category::from_name(key).ok_or_else(|| ConfigError::UnknownCategory(key.clone()))?;
				Ok((category, entry.to_toast_style()?))
			})
			.collect()
	}
}

impl Manager {
	/// Builds a manager from validated configuration.
	pub fn from_config(config: &ToastConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		let manager = Self::new()
			.with_position(config.position)
			.with_max_visible(config.max_visible)
			.with_width(config.width)
			.with_tick_interval(Duration::from_millis(config.tick_interval_ms))
			.with_default_duration(Duration::from_millis(config.default_duration_ms))
			.with_max_queued(config.max_queued)
			.with_overflow(config.overflow);

		Ok(config
			.style_overrides()?
			.into_iter()
			.fold(manager, |manager, (category, style)| manager.with_style(category, style)))
	}
}

fn parse_color(value: &str) -> Result<Color, ConfigError> {
	Color::from_str(value).map_err(|_| ConfigError::InvalidColor(value.to_string()))
}
