use std::io::Read;

use log::trace;

use super::decoder::Decoder;
use crate::global::{
	error::*,
	section::{ScopePolicy, Section},
};
use crate::model::*;

pub(crate) const TAG_RESOURCE: i32 = 800;

/// A record with a fixed stored layout
pub(crate) trait Decode: Sized {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self>;
}

/// Reads a sparse list written by its encoder counterpart. Holes stay holes, and the watermark covers every stored slot
pub(crate) fn read_list<R: Read, T: Decode>(dec: &mut Decoder<R>, section: Section, tag: i32) -> InternalResult<ResourceList<T>> {
	let name = section.name();
	dec.read_tag(tag, name)?;

	let count = dec.read_len(name)?;
	let mut list = ResourceList::with_watermark(count as u32);

	for id in 0..count as u32 {
		match section.scope() {
			ScopePolicy::PerRecord => {
				let mut block = dec.read_block(name)?;
				if block.read_bool()? {
					trace!("{} #{}", section, id);
					list.insert(id, T::decode(&mut block)?);
				}

				block.finish_block(name)?;
			},
			ScopePolicy::CloseOnly => {
				if dec.read_bool()? {
					trace!("{} #{}", section, id);
					list.insert(id, T::decode(dec)?);
				}
			},
		}
	}

	Ok(list)
}

fn read_optional_blob<R: Read>(dec: &mut Decoder<R>, what: &str) -> InternalResult<Option<Vec<u8>>> {
	match dec.read_bool()? {
		true => Ok(Some(dec.read_blob(what)?)),
		false => Ok(None),
	}
}

/// Returns `(width, height, data)`, data is only stored when both dimensions are non-zero
fn read_image<R: Read>(dec: &mut Decoder<R>, what: &str) -> InternalResult<(i32, i32, Option<Vec<u8>>)> {
	dec.read_tag(TAG_RESOURCE, what)?;
	let width = dec.read_i32()?;
	let height = dec.read_i32()?;

	let data = if width != 0 && height != 0 {
		Some(dec.read_blob(what)?)
	} else {
		None
	};

	Ok((width, height, data))
}

impl Decode for Settings {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		dec.read_i32()?;

		let mut settings = Settings {
			fullscreen: dec.read_bool()?,
			interpolate: dec.read_bool()?,
			dont_draw_border: dec.read_bool()?,
			display_cursor: dec.read_bool()?,
			scaling: dec.read_i32()?,
			allow_window_resize: dec.read_bool()?,
			always_on_top: dec.read_bool()?,
			color_outside_room: dec.read_i32()?,
			set_resolution: dec.read_bool()?,
			color_depth: dec.read_i32()?,
			resolution: dec.read_i32()?,
			frequency: dec.read_i32()?,
			dont_show_buttons: dec.read_bool()?,
			use_synchronization: dec.read_bool()?,
			disable_screensaver: dec.read_bool()?,
			let_f4_switch_fullscreen: dec.read_bool()?,
			let_f1_show_game_info: dec.read_bool()?,
			let_esc_end_game: dec.read_bool()?,
			let_f5_save_f6_load: dec.read_bool()?,
			let_f9_take_screenshot: dec.read_bool()?,
			treat_close_as_esc: dec.read_bool()?,
			game_priority: dec.read_i32()?,
			freeze_on_lose_focus: dec.read_bool()?,
			..Settings::default()
		};

		let mode = dec.read_i32()?;
		settings.load_bar_mode = LoadBarMode::from_raw(mode)
			.ok_or_else(|| InternalError::MalformedArchive(format!("Unknown load bar mode: {}", mode)))?;

		if settings.load_bar_mode == LoadBarMode::Custom {
			settings.back_load_bar_image = read_optional_blob(dec, "Back load bar image")?;
			settings.front_load_bar_image = read_optional_blob(dec, "Front load bar image")?;
		}

		settings.show_custom_load_image = dec.read_bool()?;
		if settings.show_custom_load_image {
			settings.loading_image = read_optional_blob(dec, "Loading image")?;
		}

		settings.image_partially_transparent = dec.read_bool()?;
		settings.load_image_alpha = dec.read_i32()?;
		settings.scale_progress_bar = dec.read_bool()?;
		settings.game_icon = Some(dec.read_blob("Game icon")?);
		settings.display_errors = dec.read_bool()?;
		settings.write_to_log = dec.read_bool()?;
		settings.abort_on_error = dec.read_bool()?;
		settings.treat_uninitialized_as_zero = dec.read_bool()?;
		settings.author = dec.read_str("Author")?;
		settings.version = dec.read_str("Version")?;
		settings.project_last_changed = dec.read_f64()?;
		settings.information = dec.read_str("Information")?;
		settings.major = dec.read_i32()?;
		settings.minor = dec.read_i32()?;
		settings.release = dec.read_i32()?;
		settings.build = dec.read_i32()?;
		settings.company = dec.read_str("Company")?;
		settings.product = dec.read_str("Product")?;
		settings.copyright = dec.read_str("Copyright")?;
		settings.description = dec.read_str("Description")?;
		settings.settings_last_changed = dec.read_f64()?;

		Ok(settings)
	}
}

impl Decode for Trigger {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		dec.read_i32()?;

		let name = dec.read_str("Trigger name")?;
		let condition = dec.read_str("Trigger condition")?;
		let moment = dec.read_i32()?;

		Ok(Trigger {
			name,
			condition,
			moment: TriggerMoment::from_raw(moment)
				.ok_or_else(|| InternalError::MalformedArchive(format!("Unknown trigger moment: {}", moment)))?,
			constant_name: dec.read_str("Trigger constant")?,
		})
	}
}

pub(crate) fn read_constants<R: Read>(dec: &mut Decoder<R>) -> InternalResult<(Vec<Constant>, f64)> {
	dec.read_i32()?;

	let count = dec.read_len("Constants")?;
	let mut constants = Vec::new();
	for _ in 0..count {
		constants.push(Constant {
			name: dec.read_str("Constant name")?,
			value: dec.read_str("Constant value")?,
		});
	}

	Ok((constants, dec.read_f64()?))
}

impl Decode for Sound {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let name = dec.read_str("Sound name")?;
		dec.read_tag(TAG_RESOURCE, "Sound")?;

		Ok(Sound {
			name,
			kind: dec.read_i32()?,
			file_type: dec.read_str("Sound file type")?,
			file_name: dec.read_str("Sound file name")?,
			data: read_optional_blob(dec, "Sound data")?,
			effects: dec.read_i32()?,
			volume: dec.read_f64()?,
			pan: dec.read_f64()?,
			preload: dec.read_bool()?,
		})
	}
}

impl Decode for Sprite {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let name = dec.read_str("Sprite name")?;
		let origin_x = dec.read_i32()?;
		let origin_y = dec.read_i32()?;

		let count = dec.read_len("Sprite images")?;
		let mut images = Vec::new();
		for _ in 0..count {
			let (width, height, data) = read_image(dec, "Sprite image")?;
			images.push(SpriteImage { width, height, data });
		}

		Ok(Sprite {
			name,
			origin_x,
			origin_y,
			images,
			shape: dec.read_i32()?,
			alpha_tolerance: dec.read_i32()?,
			separate_masks: dec.read_bool()?,
			bbox_mode: dec.read_i32()?,
			left: dec.read_i32()?,
			right: dec.read_i32()?,
			bottom: dec.read_i32()?,
			top: dec.read_i32()?,
		})
	}
}

impl Decode for Background {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let mut background = Background {
			name: dec.read_str("Background name")?,
			use_as_tileset: dec.read_bool()?,
			tile_width: dec.read_i32()?,
			tile_height: dec.read_i32()?,
			h_offset: dec.read_i32()?,
			v_offset: dec.read_i32()?,
			h_sep: dec.read_i32()?,
			v_sep: dec.read_i32()?,
			..Default::default()
		};

		let (width, height, data) = read_image(dec, "Background image")?;
		background.width = width;
		background.height = height;
		background.data = data;

		Ok(background)
	}
}

impl Decode for Path {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let name = dec.read_str("Path name")?;
		dec.read_tag(530, "Path")?;

		let mut path = Path {
			name,
			smooth: dec.read_bool()?,
			closed: dec.read_bool()?,
			precision: dec.read_i32()?,
			room_id: dec.read_i32()?,
			snap_x: dec.read_i32()?,
			snap_y: dec.read_i32()?,
			points: Vec::new(),
		};

		let count = dec.read_len("Path points")?;
		for _ in 0..count {
			path.points.push(PathPoint {
				x: dec.read_f64()?,
				y: dec.read_f64()?,
				speed: dec.read_f64()?,
			});
		}

		Ok(path)
	}
}

impl Decode for Script {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let name = dec.read_str("Script name")?;
		dec.read_tag(400, "Script")?;

		Ok(Script {
			name,
			code: dec.read_str("Script code")?,
		})
	}
}

impl Decode for Font {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let name = dec.read_str("Font name")?;
		let last_changed = dec.read_f64()?;
		dec.read_tag(TAG_RESOURCE, "Font")?;

		Ok(Font {
			name,
			last_changed,
			font_name: dec.read_str("Font family")?,
			size: dec.read_i32()?,
			bold: dec.read_bool()?,
			italic: dec.read_bool()?,
			range_min: dec.read_i16()?,
			anti_aliasing: dec.read_byte()?,
			character_set: dec.read_byte()?,
			range_max: dec.read_i32()?,
		})
	}
}

/// Mirror of the action list writer, padding slots are dropped
pub(crate) fn read_actions<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Vec<Action>> {
	dec.read_tag(400, "Actions")?;

	let count = dec.read_len("Actions")?;
	let mut actions = Vec::new();
	for _ in 0..count {
		actions.push(Action::decode(dec)?);
	}

	Ok(actions)
}

impl Decode for Action {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		dec.read_tag(440, "Action")?;

		let mut action = Action {
			library_id: dec.read_i32()?,
			action_id: dec.read_i32()?,
			kind: dec.read_i32()?,
			allow_relative: dec.read_bool()?,
			question: dec.read_bool()?,
			can_apply_to: dec.read_bool()?,
			..Default::default()
		};

		let mode = dec.read_i32()?;
		let function = dec.read_str("Action function")?;
		let code = dec.read_str("Action code")?;

		action.execution = match mode {
			0 => Execution::None,
			1 => Execution::Function(function),
			2 => Execution::Code(code),
			_ => return Err(InternalError::MalformedArchive(format!("Unknown action execution mode: {}", mode))),
		};

		let count = dec.read_len("Arguments")?;
		if count > MAX_ARGUMENTS {
			return Err(InternalError::MalformedArchive(format!(
				"Action declares {} arguments, at most {} fit",
				count, MAX_ARGUMENTS
			)));
		}

		dec.expect_marker(MAX_ARGUMENTS as i32, "Argument kinds")?;
		let mut kinds = [0i32; MAX_ARGUMENTS];
		for kind in kinds.iter_mut() {
			*kind = dec.read_i32()?;
		}

		action.applies_to = dec.read_i32()?;
		action.relative = dec.read_bool()?;

		dec.expect_marker(MAX_ARGUMENTS as i32, "Argument values")?;
		for (slot, kind) in kinds.iter().enumerate() {
			let value = dec.read_str("Argument value")?;

			if slot < count {
				action.arguments.push(Argument { kind: *kind, value });
			}
		}

		action.not = dec.read_bool()?;
		Ok(action)
	}
}

impl Decode for Timeline {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let name = dec.read_str("Timeline name")?;
		dec.read_tag(500, "Timeline")?;

		let count = dec.read_len("Moments")?;
		let mut moments = Vec::new();
		for _ in 0..count {
			moments.push(Moment {
				step: dec.read_i32()?,
				actions: read_actions(dec)?,
			});
		}

		Ok(Timeline { name, moments })
	}
}

impl Decode for Object {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let name = dec.read_str("Object name")?;
		dec.read_tag(430, "Object")?;

		let mut object = Object {
			name,
			sprite_id: dec.read_i32()?,
			solid: dec.read_bool()?,
			visible: dec.read_bool()?,
			depth: dec.read_i32()?,
			persistent: dec.read_bool()?,
			parent_id: dec.read_i32()?,
			mask_id: dec.read_i32()?,
			events: Default::default(),
		};

		// Stored one short of the real count, all buckets are always present
		dec.read_tag(EVENT_BUCKETS as i32 - 1, "Event buckets")?;

		for bucket in object.events.iter_mut() {
			loop {
				let key = dec.read_i32()?;
				if key == EVENT_TERMINATOR {
					break;
				}

				bucket.push(Event {
					key,
					actions: read_actions(dec)?,
				});
			}
		}

		Ok(object)
	}
}

impl Decode for RoomBackground {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		Ok(RoomBackground {
			visible: dec.read_bool()?,
			foreground: dec.read_bool()?,
			background_id: dec.read_i32()?,
			x: dec.read_i32()?,
			y: dec.read_i32()?,
			tile_h: dec.read_bool()?,
			tile_v: dec.read_bool()?,
			h_speed: dec.read_i32()?,
			v_speed: dec.read_i32()?,
			stretch: dec.read_bool()?,
		})
	}
}

impl Decode for View {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		Ok(View {
			visible: dec.read_bool()?,
			view_x: dec.read_i32()?,
			view_y: dec.read_i32()?,
			view_w: dec.read_i32()?,
			view_h: dec.read_i32()?,
			port_x: dec.read_i32()?,
			port_y: dec.read_i32()?,
			port_w: dec.read_i32()?,
			port_h: dec.read_i32()?,
			h_border: dec.read_i32()?,
			v_border: dec.read_i32()?,
			h_speed: dec.read_i32()?,
			v_speed: dec.read_i32()?,
			follow: dec.read_i32()?,
		})
	}
}

impl Decode for Room {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		let mut room = Room {
			name: dec.read_str("Room name")?,
			caption: dec.read_str("Room caption")?,
			width: dec.read_i32()?,
			height: dec.read_i32()?,
			snap_y: dec.read_i32()?,
			snap_x: dec.read_i32()?,
			isometric: dec.read_bool()?,
			speed: dec.read_i32()?,
			persistent: dec.read_bool()?,
			background_color: dec.read_i32()?,
			draw_background_color: dec.read_bool()?,
			creation_code: dec.read_str("Room creation code")?,
			..Default::default()
		};

		dec.expect_marker(ROOM_LAYERS as i32, "Room backgrounds")?;
		for layer in room.backgrounds.iter_mut() {
			*layer = RoomBackground::decode(dec)?;
		}

		room.enable_views = dec.read_bool()?;
		dec.expect_marker(ROOM_LAYERS as i32, "Room views")?;
		for view in room.views.iter_mut() {
			*view = View::decode(dec)?;
		}

		let count = dec.read_len("Room instances")?;
		for _ in 0..count {
			room.instances.push(Instance {
				x: dec.read_i32()?,
				y: dec.read_i32()?,
				object_id: dec.read_i32()?,
				id: dec.read_i32()?,
				creation_code: dec.read_str("Instance creation code")?,
				locked: dec.read_bool()?,
			});
		}

		let count = dec.read_len("Room tiles")?;
		for _ in 0..count {
			room.tiles.push(Tile {
				x: dec.read_i32()?,
				y: dec.read_i32()?,
				background_id: dec.read_i32()?,
				background_x: dec.read_i32()?,
				background_y: dec.read_i32()?,
				width: dec.read_i32()?,
				height: dec.read_i32()?,
				depth: dec.read_i32()?,
				id: dec.read_i32()?,
				locked: dec.read_bool()?,
			});
		}

		room.editor = EditorState {
			remember_window_size: dec.read_bool()?,
			width: dec.read_i32()?,
			height: dec.read_i32()?,
			show_grid: dec.read_bool()?,
			show_objects: dec.read_bool()?,
			show_tiles: dec.read_bool()?,
			show_backgrounds: dec.read_bool()?,
			show_foregrounds: dec.read_bool()?,
			show_views: dec.read_bool()?,
			delete_underlying_objects: dec.read_bool()?,
			delete_underlying_tiles: dec.read_bool()?,
			current_tab: dec.read_i32()?,
			scroll_x: dec.read_i32()?,
			scroll_y: dec.read_i32()?,
		};

		Ok(room)
	}
}

impl Decode for Include {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		dec.read_tag(TAG_RESOURCE, "Include")?;

		let mut include = Include {
			file_name: dec.read_str("Include file name")?,
			file_path: dec.read_str("Include file path")?,
			original_file_chosen: dec.read_bool()?,
			original_file_size: dec.read_i32()?,
			store_in_editable: dec.read_bool()?,
			..Default::default()
		};

		if include.store_in_editable {
			let len = usize::try_from(include.original_file_size).map_err(|_| {
				InternalError::MalformedArchive(format!(
					"Include {} has a negative size: {}",
					include.file_name, include.original_file_size
				))
			})?;

			include.data = Some(dec.read_bytes(len, "Include data")?);
		}

		include.export_mode = dec.read_i32()?;
		include.export_folder = dec.read_i32()?;
		include.overwrite = dec.read_bool()?;
		include.free_after_export = dec.read_bool()?;
		include.remove_at_end = dec.read_bool()?;

		Ok(include)
	}
}

impl Decode for GameInformation {
	fn decode<R: Read>(dec: &mut Decoder<R>) -> InternalResult<Self> {
		Ok(GameInformation {
			background_color: dec.read_i32()?,
			mimic_game_window: dec.read_bool()?,
			form_caption: dec.read_str("Game information caption")?,
			x: dec.read_i32()?,
			y: dec.read_i32()?,
			width: dec.read_i32()?,
			height: dec.read_i32()?,
			show_border: dec.read_bool()?,
			allow_resize: dec.read_bool()?,
			always_on_top: dec.read_bool()?,
			pause_game: dec.read_bool()?,
			information: dec.read_str("Game information text")?,
		})
	}
}
