//! Screen anchor for the toast overlay.

use ratatui::layout::Alignment;
use serde::Deserialize;

/// Screen anchor for the toast stack.
///
/// `render` only models the horizontal alignment; the overlay widget also
/// uses the vertical half to pick the top or bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
	/// Top-left corner of the screen.
	TopLeft,
	/// Top-center of the screen.
	TopCenter,
	/// Top-right corner of the screen (default).
	#[default]
	TopRight,
	/// Bottom-left corner of the screen.
	BottomLeft,
	/// Bottom-center of the screen.
	BottomCenter,
	/// Bottom-right corner of the screen.
	BottomRight,
}

impl Position {
	/// Horizontal alignment of the toast block.
	pub const fn alignment(self) -> Alignment {
		match self {
			Self::TopLeft | Self::BottomLeft => Alignment::Left,
			Self::TopCenter | Self::BottomCenter => Alignment::Center,
			Self::TopRight | Self::BottomRight => Alignment::Right,
		}
	}

	pub const fn is_top(self) -> bool {
		matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
	}
}
