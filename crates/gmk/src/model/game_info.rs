/// Rich text shown by an empty game information window
pub const DEFAULT_INFORMATION: &str = r"{\rtf1\ansi\ansicpg1252\deff0\deflang1033{\fonttbl{\f0\fnil Arial;}}{\colortbl ;\red0\green0\blue0;}\viewkind4\uc1\pard\cf1\f0\fs24}";

/// The game information window, a singleton record
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct GameInformation {
	pub background_color: i32,
	pub mimic_game_window: bool,
	pub form_caption: String,
	pub x: i32,
	pub y: i32,
	pub width: i32,
	pub height: i32,
	pub show_border: bool,
	pub allow_resize: bool,
	pub always_on_top: bool,
	pub pause_game: bool,
	/// RTF document
	pub information: String,
}

impl Default for GameInformation {
	fn default() -> GameInformation {
		GameInformation {
			background_color: -16777192,
			mimic_game_window: false,
			form_caption: "Game Information".to_string(),
			x: -1,
			y: -1,
			width: 600,
			height: 400,
			show_border: true,
			allow_resize: true,
			always_on_top: false,
			pause_game: true,
			information: DEFAULT_INFORMATION.to_string(),
		}
	}
}
