use std::io::Write;

use log::trace;

use super::encoder::Encoder;
use crate::global::{
	error::*,
	section::{ScopePolicy, Section},
};
use crate::model::*;

/// Layout tag shared by most resource lists and records
pub(crate) const TAG_RESOURCE: i32 = 800;

/// A record with a fixed stored layout
pub(crate) trait Encode {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult;
}

/// Writes a sparse list: the list tag, the slot count, then a presence flag (and the record, if present) for every id up to the watermark.
/// Scoping follows the section's [`ScopePolicy`]
pub(crate) fn write_list<W: Write, T: Encode>(
	enc: &mut Encoder<W>, section: Section, tag: i32, list: &ResourceList<T>,
) -> InternalResult {
	enc.write_i32(tag)?;
	enc.write_len(list.slot_count() as usize, section.name())?;

	let policy = section.scope();
	for (id, item) in list.slots() {
		if policy == ScopePolicy::PerRecord {
			enc.begin_scope();
		}

		match item {
			Some(item) => {
				trace!("{} #{}", section, id);
				enc.write_bool(true)?;
				item.encode(enc)?;
			},
			None => enc.write_bool(false)?,
		};

		// Closes the record's block, or is a no-op for CloseOnly sections
		enc.end_scope()?;
	}

	Ok(())
}

/// Writes an optional blob as a presence flag, then the blob if present
fn write_optional_blob<W: Write>(enc: &mut Encoder<W>, blob: Option<&Vec<u8>>) -> InternalResult {
	match blob {
		Some(bytes) => {
			enc.write_bool(true)?;
			enc.write_blob(bytes)
		},
		None => enc.write_bool(false),
	}
}

/// Image data is required whenever both dimensions are non-zero
fn write_image<W: Write>(enc: &mut Encoder<W>, width: i32, height: i32, data: Option<&Vec<u8>>, owner: &str) -> InternalResult {
	enc.write_i32(TAG_RESOURCE)?;
	enc.write_i32(width)?;
	enc.write_i32(height)?;

	if width != 0 && height != 0 {
		match data {
			Some(bytes) => enc.write_blob(bytes)?,
			None => {
				return Err(InternalError::UnwritableField(format!(
					"{} is {}x{} but has no pixel data",
					owner, width, height
				)))
			},
		}
	};

	Ok(())
}

impl Encode for Settings {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_i32(enc.version())?;

		enc.write_bool(self.fullscreen)?;
		enc.write_bool(self.interpolate)?;
		enc.write_bool(self.dont_draw_border)?;
		enc.write_bool(self.display_cursor)?;
		enc.write_i32(self.scaling)?;
		enc.write_bool(self.allow_window_resize)?;
		enc.write_bool(self.always_on_top)?;
		enc.write_i32(self.color_outside_room)?;
		enc.write_bool(self.set_resolution)?;
		enc.write_i32(self.color_depth)?;
		enc.write_i32(self.resolution)?;
		enc.write_i32(self.frequency)?;
		enc.write_bool(self.dont_show_buttons)?;
		enc.write_bool(self.use_synchronization)?;
		enc.write_bool(self.disable_screensaver)?;
		enc.write_bool(self.let_f4_switch_fullscreen)?;
		enc.write_bool(self.let_f1_show_game_info)?;
		enc.write_bool(self.let_esc_end_game)?;
		enc.write_bool(self.let_f5_save_f6_load)?;
		enc.write_bool(self.let_f9_take_screenshot)?;
		enc.write_bool(self.treat_close_as_esc)?;
		enc.write_i32(self.game_priority)?;
		enc.write_bool(self.freeze_on_lose_focus)?;
		enc.write_i32(self.load_bar_mode as i32)?;

		if self.load_bar_mode == LoadBarMode::Custom {
			write_optional_blob(enc, self.back_load_bar_image.as_ref())?;
			write_optional_blob(enc, self.front_load_bar_image.as_ref())?;
		}

		enc.write_bool(self.show_custom_load_image)?;
		if self.show_custom_load_image {
			write_optional_blob(enc, self.loading_image.as_ref())?;
		}

		enc.write_bool(self.image_partially_transparent)?;
		enc.write_i32(self.load_image_alpha)?;
		enc.write_bool(self.scale_progress_bar)?;

		match &self.game_icon {
			Some(icon) => enc.write_blob(icon)?,
			None => return Err(InternalError::UnwritableField("Settings has no game icon".to_string())),
		};

		enc.write_bool(self.display_errors)?;
		enc.write_bool(self.write_to_log)?;
		enc.write_bool(self.abort_on_error)?;
		enc.write_bool(self.treat_uninitialized_as_zero)?;
		enc.write_str(&self.author)?;
		enc.write_str(&self.version)?;
		enc.write_f64(self.project_last_changed)?;
		enc.write_str(&self.information)?;
		enc.write_i32(self.major)?;
		enc.write_i32(self.minor)?;
		enc.write_i32(self.release)?;
		enc.write_i32(self.build)?;
		enc.write_str(&self.company)?;
		enc.write_str(&self.product)?;
		enc.write_str(&self.copyright)?;
		enc.write_str(&self.description)?;
		enc.write_f64(self.settings_last_changed)?;

		enc.end_scope()
	}
}

impl Encode for Trigger {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_i32(enc.version())?;
		enc.write_str(&self.name)?;
		enc.write_str(&self.condition)?;
		enc.write_i32(self.moment as i32)?;
		enc.write_str(&self.constant_name)
	}
}

pub(crate) fn write_constants<W: Write>(enc: &mut Encoder<W>, constants: &[Constant], last_changed: f64) -> InternalResult {
	enc.write_i32(enc.version())?;
	enc.write_len(constants.len(), "Constants")?;

	for constant in constants {
		enc.write_str(&constant.name)?;
		enc.write_str(&constant.value)?;
	}

	enc.write_f64(last_changed)
}

impl Encode for Sound {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_i32(TAG_RESOURCE)?;
		enc.write_i32(self.kind)?;
		enc.write_str(&self.file_type)?;
		enc.write_str(&self.file_name)?;
		write_optional_blob(enc, self.data.as_ref())?;
		enc.write_i32(self.effects)?;
		enc.write_f64(self.volume)?;
		enc.write_f64(self.pan)?;
		enc.write_bool(self.preload)
	}
}

impl Encode for Sprite {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_i32(self.origin_x)?;
		enc.write_i32(self.origin_y)?;

		enc.write_len(self.images.len(), "Sprite images")?;
		for image in &self.images {
			write_image(enc, image.width, image.height, image.data.as_ref(), &self.name)?;
		}

		enc.write_i32(self.shape)?;
		enc.write_i32(self.alpha_tolerance)?;
		enc.write_bool(self.separate_masks)?;
		enc.write_i32(self.bbox_mode)?;
		enc.write_i32(self.left)?;
		enc.write_i32(self.right)?;
		enc.write_i32(self.bottom)?;
		enc.write_i32(self.top)
	}
}

impl Encode for Background {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_bool(self.use_as_tileset)?;
		enc.write_i32(self.tile_width)?;
		enc.write_i32(self.tile_height)?;
		enc.write_i32(self.h_offset)?;
		enc.write_i32(self.v_offset)?;
		enc.write_i32(self.h_sep)?;
		enc.write_i32(self.v_sep)?;

		write_image(enc, self.width, self.height, self.data.as_ref(), &self.name)
	}
}

impl Encode for Path {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_i32(530)?;
		enc.write_bool(self.smooth)?;
		enc.write_bool(self.closed)?;
		enc.write_i32(self.precision)?;
		enc.write_i32(self.room_id)?;
		enc.write_i32(self.snap_x)?;
		enc.write_i32(self.snap_y)?;

		enc.write_len(self.points.len(), "Path points")?;
		for point in &self.points {
			enc.write_f64(point.x)?;
			enc.write_f64(point.y)?;
			enc.write_f64(point.speed)?;
		}

		Ok(())
	}
}

impl Encode for Script {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_i32(400)?;
		enc.write_str(&self.code)
	}
}

impl Encode for Font {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_f64(self.last_changed)?;
		enc.write_i32(TAG_RESOURCE)?;
		enc.write_str(&self.font_name)?;
		enc.write_i32(self.size)?;
		enc.write_bool(self.bold)?;
		enc.write_bool(self.italic)?;
		enc.write_i16(self.range_min)?;
		enc.write_byte(self.anti_aliasing)?;
		enc.write_byte(self.character_set)?;
		enc.write_i32(self.range_max)
	}
}

/// An action list: the list tag, a count, then every action padded out to the full argument capacity
pub(crate) fn write_actions<W: Write>(enc: &mut Encoder<W>, actions: &[Action]) -> InternalResult {
	enc.write_i32(400)?;
	enc.write_len(actions.len(), "Actions")?;

	for action in actions {
		action.encode(enc)?;
	}

	Ok(())
}

impl Encode for Action {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		if self.arguments.len() > MAX_ARGUMENTS {
			return Err(InternalError::UnwritableField(format!(
				"Action {} of library {} has {} arguments, at most {} can be stored",
				self.action_id,
				self.library_id,
				self.arguments.len(),
				MAX_ARGUMENTS
			)));
		}

		enc.write_i32(440)?;
		enc.write_i32(self.library_id)?;
		enc.write_i32(self.action_id)?;
		enc.write_i32(self.kind)?;
		enc.write_bool(self.allow_relative)?;
		enc.write_bool(self.question)?;
		enc.write_bool(self.can_apply_to)?;

		enc.write_i32(self.execution.mode())?;
		match &self.execution {
			Execution::None => {
				enc.write_str("")?;
				enc.write_str("")?;
			},
			Execution::Function(name) => {
				enc.write_str(name)?;
				enc.write_str("")?;
			},
			Execution::Code(code) => {
				enc.write_str("")?;
				enc.write_str(code)?;
			},
		};

		enc.write_len(self.arguments.len(), "Arguments")?;

		enc.write_len(MAX_ARGUMENTS, "Argument kinds")?;
		for slot in 0..MAX_ARGUMENTS {
			enc.write_i32(self.arguments.get(slot).map_or(0, |arg| arg.kind))?;
		}

		enc.write_i32(self.applies_to)?;
		enc.write_bool(self.relative)?;

		// Unused value slots hold a single NUL character
		enc.write_len(MAX_ARGUMENTS, "Argument values")?;
		for slot in 0..MAX_ARGUMENTS {
			match self.arguments.get(slot) {
				Some(arg) => enc.write_str(&arg.value)?,
				None => enc.write_str("\0")?,
			}
		}

		enc.write_bool(self.not)
	}
}

impl Encode for Timeline {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_i32(500)?;

		enc.write_len(self.moments.len(), "Moments")?;
		for moment in &self.moments {
			enc.write_i32(moment.step)?;
			write_actions(enc, &moment.actions)?;
		}

		Ok(())
	}
}

impl Encode for Object {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_i32(430)?;
		enc.write_i32(self.sprite_id)?;
		enc.write_bool(self.solid)?;
		enc.write_bool(self.visible)?;
		enc.write_i32(self.depth)?;
		enc.write_bool(self.persistent)?;
		enc.write_i32(self.parent_id)?;
		enc.write_i32(self.mask_id)?;

		// The stored marker is one short of the real bucket count
		enc.write_len(EVENT_BUCKETS - 1, "Event buckets")?;
		for bucket in &self.events {
			for event in bucket {
				if event.key == EVENT_TERMINATOR {
					return Err(InternalError::UnwritableField(format!(
						"Object {} has an event keyed {}, which is reserved as the bucket terminator",
						self.name, EVENT_TERMINATOR
					)));
				}

				enc.write_i32(event.key)?;
				write_actions(enc, &event.actions)?;
			}

			enc.write_i32(EVENT_TERMINATOR)?;
		}

		Ok(())
	}
}

impl Encode for RoomBackground {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_bool(self.visible)?;
		enc.write_bool(self.foreground)?;
		enc.write_i32(self.background_id)?;
		enc.write_i32(self.x)?;
		enc.write_i32(self.y)?;
		enc.write_bool(self.tile_h)?;
		enc.write_bool(self.tile_v)?;
		enc.write_i32(self.h_speed)?;
		enc.write_i32(self.v_speed)?;
		enc.write_bool(self.stretch)
	}
}

impl Encode for View {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_bool(self.visible)?;

		for value in [
			self.view_x,
			self.view_y,
			self.view_w,
			self.view_h,
			self.port_x,
			self.port_y,
			self.port_w,
			self.port_h,
			self.h_border,
			self.v_border,
			self.h_speed,
			self.v_speed,
			self.follow,
		] {
			enc.write_i32(value)?;
		}

		Ok(())
	}
}

impl Encode for Room {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_str(&self.name)?;
		enc.write_str(&self.caption)?;
		enc.write_i32(self.width)?;
		enc.write_i32(self.height)?;
		enc.write_i32(self.snap_y)?;
		enc.write_i32(self.snap_x)?;
		enc.write_bool(self.isometric)?;
		enc.write_i32(self.speed)?;
		enc.write_bool(self.persistent)?;
		enc.write_i32(self.background_color)?;
		enc.write_bool(self.draw_background_color)?;
		enc.write_str(&self.creation_code)?;

		enc.write_len(ROOM_LAYERS, "Room backgrounds")?;
		for layer in &self.backgrounds {
			layer.encode(enc)?;
		}

		enc.write_bool(self.enable_views)?;
		enc.write_len(ROOM_LAYERS, "Room views")?;
		for view in &self.views {
			view.encode(enc)?;
		}

		enc.write_len(self.instances.len(), "Room instances")?;
		for instance in &self.instances {
			enc.write_i32(instance.x)?;
			enc.write_i32(instance.y)?;
			enc.write_i32(instance.object_id)?;
			enc.write_i32(instance.id)?;
			enc.write_str(&instance.creation_code)?;
			enc.write_bool(instance.locked)?;
		}

		enc.write_len(self.tiles.len(), "Room tiles")?;
		for tile in &self.tiles {
			enc.write_i32(tile.x)?;
			enc.write_i32(tile.y)?;
			enc.write_i32(tile.background_id)?;
			enc.write_i32(tile.background_x)?;
			enc.write_i32(tile.background_y)?;
			enc.write_i32(tile.width)?;
			enc.write_i32(tile.height)?;
			enc.write_i32(tile.depth)?;
			enc.write_i32(tile.id)?;
			enc.write_bool(tile.locked)?;
		}

		let editor = &self.editor;
		enc.write_bool(editor.remember_window_size)?;
		enc.write_i32(editor.width)?;
		enc.write_i32(editor.height)?;
		enc.write_bool(editor.show_grid)?;
		enc.write_bool(editor.show_objects)?;
		enc.write_bool(editor.show_tiles)?;
		enc.write_bool(editor.show_backgrounds)?;
		enc.write_bool(editor.show_foregrounds)?;
		enc.write_bool(editor.show_views)?;
		enc.write_bool(editor.delete_underlying_objects)?;
		enc.write_bool(editor.delete_underlying_tiles)?;
		enc.write_i32(editor.current_tab)?;
		enc.write_i32(editor.scroll_x)?;
		enc.write_i32(editor.scroll_y)
	}
}

impl Encode for Include {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_i32(TAG_RESOURCE)?;
		enc.write_str(&self.file_name)?;
		enc.write_str(&self.file_path)?;
		enc.write_bool(self.original_file_chosen)?;
		enc.write_i32(self.original_file_size)?;
		enc.write_bool(self.store_in_editable)?;

		if self.store_in_editable {
			match &self.data {
				Some(data) if i32::try_from(data.len()).ok() == Some(self.original_file_size) => {
					enc.write_bytes(data)?
				},
				Some(data) => {
					return Err(InternalError::UnwritableField(format!(
						"Include {} declares {} bytes but stores {}",
						self.file_name,
						self.original_file_size,
						data.len()
					)))
				},
				None => {
					return Err(InternalError::UnwritableField(format!(
						"Include {} is marked as stored but has no data",
						self.file_name
					)))
				},
			}
		};

		enc.write_i32(self.export_mode)?;
		enc.write_i32(self.export_folder)?;
		enc.write_bool(self.overwrite)?;
		enc.write_bool(self.free_after_export)?;
		enc.write_bool(self.remove_at_end)
	}
}

impl Encode for GameInformation {
	fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> InternalResult {
		enc.write_i32(self.background_color)?;
		enc.write_bool(self.mimic_game_window)?;
		enc.write_str(&self.form_caption)?;
		enc.write_i32(self.x)?;
		enc.write_i32(self.y)?;
		enc.write_i32(self.width)?;
		enc.write_i32(self.height)?;
		enc.write_bool(self.show_border)?;
		enc.write_bool(self.allow_resize)?;
		enc.write_bool(self.always_on_top)?;
		enc.write_bool(self.pause_game)?;
		enc.write_str(&self.information)?;

		enc.end_scope()
	}
}
