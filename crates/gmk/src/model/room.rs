/// Number of parallax background layers and views per room
pub const ROOM_LAYERS: usize = 8;

/// A parallax background layer of a [`Room`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct RoomBackground {
	pub visible: bool,
	pub foreground: bool,
	pub background_id: i32,
	pub x: i32,
	pub y: i32,
	pub tile_h: bool,
	pub tile_v: bool,
	pub h_speed: i32,
	pub v_speed: i32,
	pub stretch: bool,
}

/// A camera view of a [`Room`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct View {
	pub visible: bool,
	pub view_x: i32,
	pub view_y: i32,
	pub view_w: i32,
	pub view_h: i32,
	pub port_x: i32,
	pub port_y: i32,
	pub port_w: i32,
	pub port_h: i32,
	pub h_border: i32,
	pub v_border: i32,
	pub h_speed: i32,
	pub v_speed: i32,
	/// Object followed by the view, `-1` for none
	pub follow: i32,
}

/// An object placed in a room
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct Instance {
	pub x: i32,
	pub y: i32,
	pub object_id: i32,
	/// Project wide id, see [`Project::next_instance_id`](crate::model::Project::next_instance_id)
	pub id: i32,
	pub creation_code: String,
	pub locked: bool,
}

/// A background tile placed in a room
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct Tile {
	pub x: i32,
	pub y: i32,
	pub background_id: i32,
	pub background_x: i32,
	pub background_y: i32,
	pub width: i32,
	pub height: i32,
	pub depth: i32,
	/// Project wide id, see [`Project::next_tile_id`](crate::model::Project::next_tile_id)
	pub id: i32,
	pub locked: bool,
}

/// Room editor state saved alongside the room
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct EditorState {
	pub remember_window_size: bool,
	pub width: i32,
	pub height: i32,
	pub show_grid: bool,
	pub show_objects: bool,
	pub show_tiles: bool,
	pub show_backgrounds: bool,
	pub show_foregrounds: bool,
	pub show_views: bool,
	pub delete_underlying_objects: bool,
	pub delete_underlying_tiles: bool,
	pub current_tab: i32,
	pub scroll_x: i32,
	pub scroll_y: i32,
}

/// A room resource
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct Room {
	pub name: String,
	pub caption: String,
	pub width: i32,
	pub height: i32,
	pub snap_x: i32,
	pub snap_y: i32,
	pub isometric: bool,
	pub speed: i32,
	pub persistent: bool,
	pub background_color: i32,
	pub draw_background_color: bool,
	pub creation_code: String,
	pub backgrounds: [RoomBackground; ROOM_LAYERS],
	pub enable_views: bool,
	pub views: [View; ROOM_LAYERS],
	pub instances: Vec<Instance>,
	pub tiles: Vec<Tile>,
	pub editor: EditorState,
}
