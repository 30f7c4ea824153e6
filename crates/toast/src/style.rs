//! Toast categories and prefix/style resolution.
//!
//! Categories are an open tag: the three built-ins carry default glyphs and
//! colors, while hosts are free to mint their own values and register a
//! [`ToastStyle`] for them on the manager.

use std::borrow::Cow;
use std::fmt;

use ratatui::style::{Color, Style};

const INFO_STYLE: Style = Style::new().fg(Color::LightBlue);
const WARNING_STYLE: Style = Style::new().fg(Color::LightYellow);
const ERROR_STYLE: Style = Style::new().fg(Color::LightRed);
const NEUTRAL_STYLE: Style = Style::new();

const INFO_PREFIX: &str = "ℹ";
const WARNING_PREFIX: &str = "⚠";
const ERROR_PREFIX: &str = "✗";

/// Category tag selecting the default prefix and style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Category(u16);

impl Category {
	/// Informational message (default).
	pub const INFO: Self = Self(0);
	/// Warning message.
	pub const WARNING: Self = Self(1);
	/// Error message.
	pub const ERROR: Self = Self(2);

	/// Creates a caller-defined category.
	///
	/// Values 0 through 2 alias the built-ins.
	pub const fn custom(value: u16) -> Self {
		Self(value)
	}

	/// Returns the raw tag value.
	pub const fn value(self) -> u16 {
		self.0
	}

	/// Returns true for the built-in categories.
	pub const fn is_builtin(self) -> bool {
		self.0 <= Self::ERROR.0
	}

	/// Parses a category from a built-in name or a numeric tag.
	pub fn from_name(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"info" => Some(Self::INFO),
			"warn" | "warning" => Some(Self::WARNING),
			"error" => Some(Self::ERROR),
			other => other.parse().ok().map(Self),
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::INFO => f.write_str("info"),
			Self::WARNING => f.write_str("warning"),
			Self::ERROR => f.write_str("error"),
			Self(value) => write!(f, "{value}"),
		}
	}
}

/// Prefix glyph and visual style registered for a category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastStyle {
	/// Glyph shown before the message. May be empty.
	pub prefix: String,
	/// Style applied to the whole toast line.
	pub style: Style,
}

impl ToastStyle {
	/// Creates a style override.
	pub fn new(prefix: impl Into<String>, style: Style) -> Self {
		Self {
			prefix: prefix.into(),
			style,
		}
	}
}

/// Resolves the prefix and style for a category.
///
/// An override replaces the built-in defaults entirely, including for the
/// built-in categories. Unknown categories without an override get an empty
/// prefix and a neutral style.
pub fn resolve_style(category: Category, style_override: Option<&ToastStyle>) -> (Cow<'_, str>, Style) {
	if let Some(custom) = style_override {
		return (Cow::Borrowed(custom.prefix.as_str()), custom.style);
	}

	match category {
		Category::INFO => (Cow::Borrowed(INFO_PREFIX), INFO_STYLE),
		Category::WARNING => (Cow::Borrowed(WARNING_PREFIX), WARNING_STYLE),
		Category::ERROR => (Cow::Borrowed(ERROR_PREFIX), ERROR_STYLE),
		_ => (Cow::Borrowed(""), NEUTRAL_STYLE),
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Modifier;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Category::INFO, "ℹ", INFO_STYLE)]
	#[case(Category::WARNING, "⚠", WARNING_STYLE)]
	#[case(Category::ERROR, "✗", ERROR_STYLE)]
	#[case(Category::custom(7), "", NEUTRAL_STYLE)]
	fn builtin_defaults(#[case] category: Category, #[case] prefix: &str, #[case] style: Style) {
		let (resolved_prefix, resolved_style) = resolve_style(category, None);
		assert_eq!(resolved_prefix, prefix);
		assert_eq!(resolved_style, style);
	}

	#[rstest]
	#[case(Category::INFO)]
	#[case(Category::ERROR)]
	#[case(Category::custom(42))]
	fn override_wins_over_defaults(#[case] category: Category) {
		let custom = ToastStyle::new("✔", Style::new().fg(Color::Green).add_modifier(Modifier::BOLD));
		let (prefix, style) = resolve_style(category, Some(&custom));
		assert_eq!(prefix, "✔");
		assert_eq!(style, custom.style);
	}

	#[test]
	fn empty_override_prefix_is_kept() {
		let custom = ToastStyle::new("", Style::new().fg(Color::Cyan));
		let (prefix, style) = resolve_style(Category::WARNING, Some(&custom));
		assert_eq!(prefix, "");
		assert_eq!(style.fg, Some(Color::Cyan));
	}

	#[rstest]
	#[case("info", Some(Category::INFO))]
	#[case("Warning", Some(Category::WARNING))]
	#[case("warn", Some(Category::WARNING))]
	#[case(" error ", Some(Category::ERROR))]
	#[case("12", Some(Category::custom(12)))]
	#[case("success", None)]
	#[case("-1", None)]
	fn parses_names(#[case] name: &str, #[case] expected: Option<Category>) {
		assert_eq!(Category::from_name(name), expected);
	}

	#[test]
	fn display_round_trips_through_from_name() {
		for category in [Category::INFO, Category::WARNING, Category::ERROR, Category::custom(9)] {
			assert_eq!(Category::from_name(&category.to_string()), Some(category));
		}
	}
}
