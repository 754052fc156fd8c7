use rand::Rng;

use super::{
	game_info::GameInformation,
	list::ResourceList,
	object::Object,
	resources::*,
	room::Room,
	settings::Settings,
	tree::TreeNode,
};

/// Project version written by default, the last version of the legacy layout
pub const DEFAULT_VERSION: i32 = 800;

/// Lowest id handed out to room instances
pub const INSTANCE_ID_MIN: i32 = 100_000;

/// Lowest id handed out to room tiles
pub const TILE_ID_MIN: i32 = 10_000_000;

/// Lowest id handed out to data files
pub const DATA_FILE_ID_MIN: i32 = 0;

/// Upper bound (exclusive) of a generated game id
pub const GAME_ID_MAX: i32 = 100_000_000;

/// A complete project, the root of everything stored in an archive
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
	/// Layout version the project was read from, or will be written as
	pub version: i32,
	/// Identifies the game to the runtime, see [`Project::random_game_id`]
	pub game_id: i32,
	#[allow(missing_docs)]
	pub settings: Settings,
	#[allow(missing_docs)]
	pub triggers: ResourceList<Trigger>,
	#[allow(missing_docs)]
	pub triggers_last_changed: f64,
	/// Constants are stored as a flat list, not a sparse one
	pub constants: Vec<Constant>,
	#[allow(missing_docs)]
	pub constants_last_changed: f64,
	#[allow(missing_docs)]
	pub sounds: ResourceList<Sound>,
	#[allow(missing_docs)]
	pub sprites: ResourceList<Sprite>,
	#[allow(missing_docs)]
	pub backgrounds: ResourceList<Background>,
	#[allow(missing_docs)]
	pub paths: ResourceList<Path>,
	#[allow(missing_docs)]
	pub scripts: ResourceList<Script>,
	/// Not persisted, the legacy layout keeps an empty section in their place
	pub data_files: ResourceList<DataFile>,
	#[allow(missing_docs)]
	pub fonts: ResourceList<Font>,
	#[allow(missing_docs)]
	pub timelines: ResourceList<Timeline>,
	#[allow(missing_docs)]
	pub objects: ResourceList<Object>,
	#[allow(missing_docs)]
	pub rooms: ResourceList<Room>,
	/// Next free room instance id, never below [`INSTANCE_ID_MIN`]
	pub next_instance_id: i32,
	/// Next free room tile id, never below [`TILE_ID_MIN`]
	pub next_tile_id: i32,
	/// Not persisted
	pub next_data_file_id: i32,
	#[allow(missing_docs)]
	pub includes: Vec<Include>,
	/// Names of the extension packages in use
	pub packages: Vec<String>,
	#[allow(missing_docs)]
	pub game_information: GameInformation,
	/// Source code of each action library
	pub libraries: Vec<String>,
	/// Flat list of asset names, not persisted
	pub assets: Vec<String>,
	/// The resource tree, see [`TreeNode::standard`]
	pub tree: TreeNode,
}

impl Default for Project {
	fn default() -> Project {
		Project::new()
	}
}

impl Project {
	/// A project with nothing in it: default settings and game information, the standard tree and all counters at their floors
	pub fn new() -> Project {
		Project {
			version: DEFAULT_VERSION,
			game_id: 0,
			settings: Settings::default(),
			triggers: ResourceList::new(),
			triggers_last_changed: 0.0,
			constants: Vec::new(),
			constants_last_changed: 0.0,
			sounds: ResourceList::new(),
			sprites: ResourceList::new(),
			backgrounds: ResourceList::new(),
			paths: ResourceList::new(),
			scripts: ResourceList::new(),
			data_files: ResourceList::new(),
			fonts: ResourceList::new(),
			timelines: ResourceList::new(),
			objects: ResourceList::new(),
			rooms: ResourceList::new(),
			next_instance_id: INSTANCE_ID_MIN,
			next_tile_id: TILE_ID_MIN,
			next_data_file_id: DATA_FILE_ID_MIN,
			includes: Vec::new(),
			packages: Vec::new(),
			game_information: GameInformation::default(),
			libraries: Vec::new(),
			assets: Vec::new(),
			tree: TreeNode::standard(),
		}
	}

	/// A random id in `0..100_000_000`, suitable for [`Project::game_id`]
	pub fn random_game_id() -> i32 {
		rand::thread_rng().gen_range(0..GAME_ID_MAX)
	}

	/// Renumbers every room instance sequentially from [`INSTANCE_ID_MIN`], in room then placement order.
	/// Leaves [`next_instance_id`](Project::next_instance_id) at the next free id
	pub fn refactor_instance_ids(&mut self) {
		let mut next = INSTANCE_ID_MIN;
		for (_, room) in self.rooms.iter_mut() {
			for instance in room.instances.iter_mut() {
				instance.id = next;
				next += 1;
			}
		}

		self.next_instance_id = next;
	}

	/// Renumbers every room tile sequentially from [`TILE_ID_MIN`], in room then placement order.
	/// Leaves [`next_tile_id`](Project::next_tile_id) at the next free id
	pub fn refactor_tile_ids(&mut self) {
		let mut next = TILE_ID_MIN;
		for (_, room) in self.rooms.iter_mut() {
			for tile in room.tiles.iter_mut() {
				tile.id = next;
				next += 1;
			}
		}

		self.next_tile_id = next;
	}
}
