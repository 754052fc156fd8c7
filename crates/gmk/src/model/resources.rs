use super::object::Action;

/// When a trigger's condition is evaluated within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMoment {
	/// Alongside the regular step event
	#[default]
	Middle = 0,
	/// Alongside the begin step event
	Begin = 1,
	/// Alongside the end step event
	End = 2,
}

impl TriggerMoment {
	/// Maps the stored integer back into a moment
	pub fn from_raw(raw: i32) -> Option<TriggerMoment> {
		match raw {
			0 => Some(TriggerMoment::Middle),
			1 => Some(TriggerMoment::Begin),
			2 => Some(TriggerMoment::End),
			_ => None,
		}
	}
}

/// A user defined event, fired whenever `condition` holds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trigger {
	/// Display name
	pub name: String,
	/// Source code of the condition
	pub condition: String,
	/// Part of the frame the condition is checked in
	pub moment: TriggerMoment,
	/// Name of the constant bound to this trigger's event number
	pub constant_name: String,
}

/// A named global constant, both halves stored as text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Constant {
	#[allow(missing_docs)]
	pub name: String,
	#[allow(missing_docs)]
	pub value: String,
}

/// A sound or music resource
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Sound {
	pub name: String,
	pub kind: i32,
	pub file_type: String,
	pub file_name: String,
	/// Raw audio file contents, if any were imported
	pub data: Option<Vec<u8>>,
	pub effects: i32,
	pub volume: f64,
	pub pan: f64,
	pub preload: bool,
}

/// A single frame of a [`Sprite`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpriteImage {
	#[allow(missing_docs)]
	pub width: i32,
	#[allow(missing_docs)]
	pub height: i32,
	/// Pixel data, required whenever both dimensions are non-zero
	pub data: Option<Vec<u8>>,
}

/// An animated image resource
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Sprite {
	pub name: String,
	pub origin_x: i32,
	pub origin_y: i32,
	pub images: Vec<SpriteImage>,
	pub shape: i32,
	pub alpha_tolerance: i32,
	pub separate_masks: bool,
	pub bbox_mode: i32,
	pub left: i32,
	pub right: i32,
	pub bottom: i32,
	pub top: i32,
}

/// A background or tileset image
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Background {
	pub name: String,
	pub use_as_tileset: bool,
	pub tile_width: i32,
	pub tile_height: i32,
	pub h_offset: i32,
	pub v_offset: i32,
	pub h_sep: i32,
	pub v_sep: i32,
	pub width: i32,
	pub height: i32,
	/// Pixel data, required whenever both dimensions are non-zero
	pub data: Option<Vec<u8>>,
}

/// One control point of a [`Path`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(missing_docs)]
pub struct PathPoint {
	pub x: f64,
	pub y: f64,
	pub speed: f64,
}

/// A movement path
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Path {
	pub name: String,
	pub smooth: bool,
	pub closed: bool,
	pub precision: i32,
	/// Room shown behind the path in the editor, `-1` for none
	pub room_id: i32,
	pub snap_x: i32,
	pub snap_y: i32,
	pub points: Vec<PathPoint>,
}

/// A named piece of source code
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
	#[allow(missing_docs)]
	pub name: String,
	#[allow(missing_docs)]
	pub code: String,
}

/// An external data file. The legacy layout reserves a section for these but never stores anything in it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFile {
	#[allow(missing_docs)]
	pub name: String,
	#[allow(missing_docs)]
	pub file_name: String,
	#[allow(missing_docs)]
	pub data: Option<Vec<u8>>,
}

/// A font resource
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Font {
	pub name: String,
	pub last_changed: f64,
	/// Name of the system font family
	pub font_name: String,
	pub size: i32,
	pub bold: bool,
	pub italic: bool,
	pub range_min: i16,
	pub anti_aliasing: u8,
	pub character_set: u8,
	pub range_max: i32,
}

/// A list of actions run when a [`Timeline`] reaches `step`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Moment {
	#[allow(missing_docs)]
	pub step: i32,
	#[allow(missing_docs)]
	pub actions: Vec<Action>,
}

/// A timeline resource
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
	#[allow(missing_docs)]
	pub name: String,
	#[allow(missing_docs)]
	pub moments: Vec<Moment>,
}

/// A file bundled into the game executable
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Include {
	pub file_name: String,
	pub file_path: String,
	pub original_file_chosen: bool,
	pub original_file_size: i32,
	pub store_in_editable: bool,
	/// Stored contents, exactly `original_file_size` bytes when `store_in_editable` is set
	pub data: Option<Vec<u8>>,
	pub export_mode: i32,
	pub export_folder: i32,
	pub overwrite: bool,
	pub free_after_export: bool,
	pub remove_at_end: bool,
}
