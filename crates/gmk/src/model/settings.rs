/// How the loading progress bar is drawn when the game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadBarMode {
	/// No progress bar
	None = 0,
	/// The runtime's built-in bar
	#[default]
	Default = 1,
	/// A bar made from the custom back and front images
	Custom = 2,
}

impl LoadBarMode {
	/// Maps the stored integer back into a mode
	pub fn from_raw(raw: i32) -> Option<LoadBarMode> {
		match raw {
			0 => Some(LoadBarMode::None),
			1 => Some(LoadBarMode::Default),
			2 => Some(LoadBarMode::Custom),
			_ => None,
		}
	}
}

/// Global game settings, stored as a singleton right after the archive header
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Settings {
	pub fullscreen: bool,
	pub interpolate: bool,
	pub dont_draw_border: bool,
	pub display_cursor: bool,
	pub scaling: i32,
	pub allow_window_resize: bool,
	pub always_on_top: bool,
	pub color_outside_room: i32,
	pub set_resolution: bool,
	pub color_depth: i32,
	pub resolution: i32,
	pub frequency: i32,
	pub dont_show_buttons: bool,
	pub use_synchronization: bool,
	pub disable_screensaver: bool,
	pub let_f4_switch_fullscreen: bool,
	pub let_f1_show_game_info: bool,
	pub let_esc_end_game: bool,
	pub let_f5_save_f6_load: bool,
	pub let_f9_take_screenshot: bool,
	pub treat_close_as_esc: bool,
	pub game_priority: i32,
	pub freeze_on_lose_focus: bool,
	pub load_bar_mode: LoadBarMode,
	/// Only persisted when [`load_bar_mode`](Settings::load_bar_mode) is [`LoadBarMode::Custom`]
	pub back_load_bar_image: Option<Vec<u8>>,
	/// Only persisted when [`load_bar_mode`](Settings::load_bar_mode) is [`LoadBarMode::Custom`]
	pub front_load_bar_image: Option<Vec<u8>>,
	pub show_custom_load_image: bool,
	/// Only persisted when [`show_custom_load_image`](Settings::show_custom_load_image) is set
	pub loading_image: Option<Vec<u8>>,
	pub image_partially_transparent: bool,
	pub load_image_alpha: i32,
	pub scale_progress_bar: bool,
	/// Required by the format, an absent icon can't be written
	pub game_icon: Option<Vec<u8>>,
	pub display_errors: bool,
	pub write_to_log: bool,
	pub abort_on_error: bool,
	pub treat_uninitialized_as_zero: bool,
	pub author: String,
	pub version: String,
	pub project_last_changed: f64,
	pub information: String,
	pub major: i32,
	pub minor: i32,
	pub release: i32,
	pub build: i32,
	pub company: String,
	pub product: String,
	pub copyright: String,
	pub description: String,
	pub settings_last_changed: f64,
}

impl Default for Settings {
	fn default() -> Settings {
		Settings {
			fullscreen: false,
			interpolate: false,
			dont_draw_border: false,
			display_cursor: true,
			scaling: -1,
			allow_window_resize: false,
			always_on_top: false,
			color_outside_room: 0,
			set_resolution: false,
			color_depth: 0,
			resolution: 0,
			frequency: 0,
			dont_show_buttons: false,
			use_synchronization: false,
			disable_screensaver: true,
			let_f4_switch_fullscreen: true,
			let_f1_show_game_info: true,
			let_esc_end_game: true,
			let_f5_save_f6_load: true,
			let_f9_take_screenshot: true,
			treat_close_as_esc: true,
			game_priority: 0,
			freeze_on_lose_focus: false,
			load_bar_mode: LoadBarMode::Default,
			back_load_bar_image: None,
			front_load_bar_image: None,
			show_custom_load_image: false,
			loading_image: None,
			image_partially_transparent: false,
			load_image_alpha: 255,
			scale_progress_bar: true,
			game_icon: Some(Vec::new()),
			display_errors: true,
			write_to_log: false,
			abort_on_error: false,
			treat_uninitialized_as_zero: false,
			author: String::new(),
			version: "100".to_string(),
			project_last_changed: 0.0,
			information: String::new(),
			major: 1,
			minor: 0,
			release: 0,
			build: 0,
			company: String::new(),
			product: String::new(),
			copyright: String::new(),
			description: String::new(),
			settings_last_changed: 0.0,
		}
	}
}
