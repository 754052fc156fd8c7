#![cfg(test)]
// This is meant to mirror as closely as possible, how users should use the crate

// Boring, average every day contemporary imports
use std::io::Cursor;
use crate::prelude::*;
use crate::utils::{Compressor, SwapTable};

// Seeds exercised by the cipher tests, covering both halves of the table walk
const SEEDS: [i32; 7] = [0, 1, 249, 250, 4096, 123_456, i32::MAX];

fn action(arguments: &[(i32, &str)]) -> Action {
	Action {
		library_id: 1,
		action_id: 603,
		kind: 7,
		can_apply_to: true,
		execution: Execution::Code("instance_destroy()".to_string()),
		arguments: arguments
			.iter()
			.map(|(kind, value)| Argument {
				kind: *kind,
				value: value.to_string(),
			})
			.collect(),
		applies_to: -1,
		..Default::default()
	}
}

// A project with at least one record of every kind, and holes in most lists
fn populated_project() -> Project {
	let mut project = Project::new();
	project.game_id = 4_815_162;

	project.settings.load_bar_mode = LoadBarMode::Custom;
	project.settings.back_load_bar_image = Some(vec![1, 2, 3]);
	project.settings.show_custom_load_image = true;
	project.settings.loading_image = Some(vec![9; 32]);
	project.settings.game_icon = Some(vec![0xAB; 64]);
	project.settings.author = "Ferdinand Façade".to_string();

	project.triggers.insert(
		1,
		Trigger {
			name: "on_low_health".to_string(),
			condition: "return hp < 10".to_string(),
			moment: TriggerMoment::End,
			constant_name: "ev_low_health".to_string(),
		},
	);
	project.triggers_last_changed = 41_234.5;

	project.constants.push(Constant {
		name: "MAX_HP".to_string(),
		value: "100".to_string(),
	});
	project.constants_last_changed = 40_000.25;

	project.sounds.push(Sound {
		name: "snd_jump".to_string(),
		file_type: ".wav".to_string(),
		file_name: "jump.wav".to_string(),
		data: Some(vec![0x52, 0x49, 0x46, 0x46]),
		volume: 0.8,
		pan: -0.25,
		preload: true,
		..Default::default()
	});

	project.sprites.insert(
		2,
		Sprite {
			name: "spr_player".to_string(),
			origin_x: 16,
			origin_y: 32,
			images: vec![
				SpriteImage {
					width: 2,
					height: 2,
					data: Some(vec![0xFF; 16]),
				},
				SpriteImage::default(),
			],
			right: 31,
			bottom: 63,
			..Default::default()
		},
	);

	project.backgrounds.push(Background {
		name: "bg_sky".to_string(),
		use_as_tileset: true,
		tile_width: 16,
		tile_height: 16,
		width: 1,
		height: 1,
		data: Some(vec![0, 0, 255, 255]),
		..Default::default()
	});

	project.paths.push(Path {
		name: "pth_patrol".to_string(),
		closed: true,
		precision: 4,
		room_id: -1,
		points: vec![
			PathPoint { x: 0.0, y: 0.0, speed: 100.0 },
			PathPoint { x: 64.5, y: 12.0, speed: 50.0 },
		],
		..Default::default()
	});

	project.scripts.insert(
		4,
		Script {
			name: "scr_damage".to_string(),
			code: "hp -= argument0;".to_string(),
		},
	);

	project.fonts.insert(
		2,
		Font {
			name: "fnt_ui".to_string(),
			last_changed: 39_000.0,
			font_name: "Arial".to_string(),
			size: 12,
			bold: true,
			range_min: 32,
			anti_aliasing: 3,
			character_set: 1,
			range_max: 127,
			..Default::default()
		},
	);

	project.timelines.push(Timeline {
		name: "tl_intro".to_string(),
		moments: vec![
			Moment { step: 0, actions: vec![action(&[])] },
			Moment { step: 30, actions: vec![action(&[(1, "42")]), action(&[(0, "a"), (2, "b")])] },
		],
	});

	let mut player = Object {
		name: "obj_player".to_string(),
		sprite_id: 2,
		solid: true,
		depth: -10,
		..Default::default()
	};
	player.add_event(EventType::Create, Event::new(0, vec![action(&[(1, "3")])]));
	player.add_event(EventType::Collision, Event::collision(1, vec![action(&[])]));
	player.add_event(EventType::KeyRelease, Event::new(32, Vec::new()));
	project.objects.push(player);
	project.objects.insert(1, Object::default());

	let mut room = Room {
		name: "rm_start".to_string(),
		caption: "Start".to_string(),
		width: 640,
		height: 480,
		snap_x: 16,
		snap_y: 16,
		speed: 30,
		creation_code: "score = 0;".to_string(),
		enable_views: true,
		..Default::default()
	};
	room.backgrounds[0].visible = true;
	room.backgrounds[0].background_id = 0;
	room.views[1].port_w = 320;
	room.views[1].follow = 0;
	room.instances.push(Instance {
		x: 32,
		y: 64,
		object_id: 0,
		id: 100_001,
		creation_code: String::new(),
		locked: true,
	});
	room.tiles.push(Tile {
		width: 16,
		height: 16,
		depth: 1_000_000,
		id: 10_000_001,
		..Default::default()
	});
	room.editor.show_grid = true;
	room.editor.current_tab = 2;
	project.rooms.push(room);
	project.next_instance_id = 100_002;
	project.next_tile_id = 10_000_002;

	project.includes.push(Include {
		file_name: "readme.txt".to_string(),
		file_path: "C:\\game\\readme.txt".to_string(),
		original_file_chosen: true,
		original_file_size: 5,
		store_in_editable: true,
		data: Some(b"hello".to_vec()),
		export_mode: 2,
		..Default::default()
	});

	project.packages.push("Windows Dialogs".to_string());
	project.libraries.push("@library 01".to_string());
	project.game_information.form_caption = "Help".to_string();

	project.tree.children[0].children.push(
		TreeNode::group("Characters", ResourceType::SPRITES).with_child(TreeNode::leaf(
			"spr_player",
			ResourceType::SPRITES,
			2,
		)),
	);

	project
}

fn roundtrip(project: &Project, seed: i32) -> InternalResult<Project> {
	let mut target = Cursor::new(Vec::new());
	dump(&mut target, project, &WriterConfig::default().seed(seed), None)?;

	target.set_position(0);
	load(target, &LoaderConfig::default().seed(seed), None)
}

#[test]
fn swap_tables_are_inverse() {
	for seed in SEEDS {
		let table = SwapTable::new(seed).unwrap();
		let (forward, reverse) = (table.forward(), table.reverse());

		assert_eq!(forward[0], 0);
		assert_eq!(reverse[0], 0);

		for i in 1..256usize {
			assert_ne!(forward[i], 0, "seed {} moved index 0", seed);
			assert_eq!(reverse[forward[i] as usize] as usize, i, "seed {}", seed);
			assert_eq!(forward[reverse[i] as usize] as usize, i, "seed {}", seed);
		}
	}

	assert!(SwapTable::new(-1).is_none());
	assert!(SwapTable::new(i32::MIN).is_none());
}

#[test]
fn swap_table_positions() {
	let table = SwapTable::new(1337).unwrap();

	for position in [0u64, 1, 255, 256, 1 << 33] {
		for value in 0..=255u8 {
			assert_eq!(table.decode(table.encode(value, position), position), value);
		}
	}

	// Same byte, different positions, different output
	assert_ne!(table.encode(7, 0), table.encode(7, 1));
}

#[test]
fn compressor_roundtrip() -> InternalResult {
	let inputs: [Vec<u8>; 3] = [Vec::new(), vec![12u8; 4096], (0..=255u8).cycle().take(10_000).collect()];

	for input in inputs {
		let mut compressed = Vec::new();
		let consumed = Compressor::new(input.as_slice()).compress(&mut compressed)?;
		assert_eq!(consumed, input.len() as u64);

		// zlib framing: CMF byte announcing deflate
		assert_eq!(compressed[0] & 0x0F, 8);

		let mut output = Vec::new();
		Compressor::new(compressed.as_slice()).decompress(&mut output)?;
		assert_eq!(output, input);
	}

	let mut output = Vec::new();
	match Compressor::new([1u8, 2, 3, 4].as_slice()).decompress(&mut output) {
		Err(InternalError::MalformedArchive(_)) => (),
		other => panic!("Garbage should not inflate: {:?}", other),
	};

	Ok(())
}

#[test]
#[cfg(feature = "builder")]
fn strings_above_latin1_are_rejected() -> InternalResult {
	use crate::writer::encoder::Encoder;

	let mut encoder = Encoder::new(Vec::new(), None, 800);
	encoder.write_str("café")?;

	match encoder.write_str("price: 5€") {
		Err(InternalError::UnrepresentableCharacter { character, offset }) => {
			assert_eq!(character, '€');
			assert_eq!(offset, 8);
		},
		other => panic!("Expected a rejection, got {:?}", other),
	};

	let mut project = Project::new();
	project.scripts.push(Script {
		name: "scr_Ω".to_string(),
		code: String::new(),
	});

	let result = dump(Cursor::new(Vec::new()), &project, &WriterConfig::default(), None);
	assert!(matches!(result, Err(InternalError::UnrepresentableCharacter { character: 'Ω', .. })));

	Ok(())
}

#[test]
#[cfg(feature = "builder")]
fn string_layout() -> InternalResult {
	use crate::writer::encoder::Encoder;

	let mut target = Vec::new();
	let mut encoder = Encoder::new(&mut target, None, 800);
	encoder.write_str("ÿes")?;
	encoder.write_bool(true)?;
	encoder.finish()?;

	assert_eq!(target, [3, 0, 0, 0, 0xFF, b'e', b's', 1, 0, 0, 0]);
	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn sparse_list_holes() -> InternalResult {
	use crate::{loader::decoder::Decoder, loader::records::read_list, writer::encoder::Encoder, writer::records::write_list};

	let mut sprites = ResourceList::new();
	for id in [0, 2, 5] {
		sprites.insert(
			id,
			Sprite {
				name: format!("spr_{}", id),
				..Default::default()
			},
		);
	}
	assert_eq!(sprites.last_id(), Some(5));

	let mut target = Vec::new();
	let mut encoder = Encoder::new(&mut target, None, 800);
	write_list(&mut encoder, Section::Sprites, 800, &sprites)?;
	encoder.finish()?;

	// Tag, slot count, then the first presence flag
	assert_eq!(&target[..12], &[0x20, 0x03, 0, 0, 6, 0, 0, 0, 1, 0, 0, 0]);

	let mut decoder = Decoder::new(target.as_slice());
	let decoded: ResourceList<Sprite> = read_list(&mut decoder, Section::Sprites, 800)?;

	let flags = decoded.slots().map(|(_, sprite)| sprite.is_some()).collect::<Vec<_>>();
	assert_eq!(flags, [true, false, true, false, false, true]);
	assert_eq!(decoded, sprites);

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn trailing_holes_keep_the_watermark() -> InternalResult {
	let mut project = Project::new();
	project.scripts.push(Script::default());
	project.scripts.push(Script::default());
	project.scripts.remove(1);

	let decoded = roundtrip(&project, -1)?;
	assert_eq!(decoded.scripts.last_id(), Some(1));
	assert_eq!(decoded.scripts.len(), 1);

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn action_argument_padding() -> InternalResult {
	use crate::{loader::decoder::Decoder, loader::records::read_actions, writer::encoder::Encoder, writer::records::write_actions};

	let mut source = action(&[(1, "x"), (0, "y"), (5, "200")]);
	source.execution = Execution::None;

	let mut target = Vec::new();
	let mut encoder = Encoder::new(&mut target, None, 800);
	write_actions(&mut encoder, std::slice::from_ref(&source))?;
	encoder.finish()?;

	let int_at = |offset: usize| i32::from_le_bytes(target[offset..offset + 4].try_into().unwrap());

	// list tag + count, then 7 header ints, the mode and two empty strings
	assert_eq!(int_at(8), 440);
	assert_eq!(int_at(8 + 40), 3);
	assert_eq!(int_at(8 + 44), 8);
	assert_eq!(&[int_at(8 + 48), int_at(8 + 52), int_at(8 + 56)], &[1, 0, 5]);
	assert!((3..8).all(|slot| int_at(8 + 48 + slot * 4) == 0));

	let mut decoder = Decoder::new(target.as_slice());
	let decoded = read_actions(&mut decoder)?;

	assert_eq!(decoded.len(), 1);
	assert_eq!(decoded[0].arguments.len(), 3);
	assert_eq!(decoded[0], source);

	// Too many arguments can't be stored
	let crowded = action(&[(0, "0"); 9]);
	let mut encoder = Encoder::new(Vec::new(), None, 800);
	assert!(matches!(write_actions(&mut encoder, &[crowded]), Err(InternalError::UnwritableField(_))));

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn tree_roundtrip() -> InternalResult {
	let mut project = Project::new();
	project.tree.children[7].children.push(
		TreeNode::group("Enemies", ResourceType::OBJECTS)
			.with_child(TreeNode::leaf("obj_bat", ResourceType::OBJECTS, 3))
			.with_child(TreeNode::group("Bosses", ResourceType::OBJECTS)),
	);
	project.tree.children[11].node_type = NodeType(9);

	let decoded = roundtrip(&project, -1)?;

	assert_eq!(decoded.tree.children.len(), 12);
	assert_eq!(decoded.tree.count(), project.tree.count());
	assert_eq!(decoded.tree.find("obj_bat").map(|node| node.id), Some(3));
	assert_eq!(decoded.tree.children[11].node_type, NodeType(9));

	for (left, right) in decoded.tree.children.iter().zip(project.tree.children.iter()) {
		assert_eq!(left.name, right.name);
		assert_eq!(left.children.len(), right.children.len());
	}

	assert_eq!(decoded.tree, project.tree);
	Ok(())
}

#[test]
#[cfg(feature = "builder")]
fn tree_needs_every_category() {
	let mut project = Project::new();
	project.tree.children.pop();

	let result = dump(Cursor::new(Vec::new()), &project, &WriterConfig::default(), None);
	assert!(matches!(result, Err(InternalError::UnwritableField(_))));

	// A bare root has nowhere to go, the layout always stores the categories
	project.tree = TreeNode::root();
	let result = dump(Cursor::new(Vec::new()), &project, &WriterConfig::default(), None);
	assert!(matches!(result, Err(InternalError::UnwritableField(_))));
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn empty_project_roundtrip() -> InternalResult {
	let project = Project::new();

	let mut target = Cursor::new(Vec::new());
	let written = dump(&mut target, &project, &WriterConfig::default(), None)?;

	let bytes = target.get_ref();
	assert_eq!(written, bytes.len() as u64);
	assert_eq!(&bytes[..4], &crate::MAGIC.to_le_bytes());
	assert_eq!(&bytes[4..8], &800i32.to_le_bytes());

	target.set_position(0);
	let decoded = load(target, &LoaderConfig::default(), None)?;

	assert_eq!(decoded, project);
	assert!(decoded.sprites.last_id().is_none());
	assert_eq!(decoded.tree, TreeNode::standard());

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn legacy_versions_reserve_header_bytes() -> InternalResult {
	let project = Project::new();

	let mut modern = Vec::new();
	dump(&mut modern, &project, &WriterConfig::default(), None)?;

	let mut legacy = Vec::new();
	dump(&mut legacy, &project, &WriterConfig::default().version(530), None)?;

	assert_eq!(legacy.len(), modern.len() + 4);
	assert_eq!(&legacy[8..12], &[0, 0, 0, 0]);

	let decoded = load(legacy.as_slice(), &LoaderConfig::default(), None)?;
	assert_eq!(decoded.version, 530);

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn populated_project_roundtrip() -> InternalResult {
	let project = populated_project();

	let decoded = roundtrip(&project, -1)?;
	assert_eq!(decoded, project);

	assert!(decoded.triggers.get(0).is_none());
	assert_eq!(decoded.fonts.last_id(), Some(2));
	assert_eq!(decoded.objects.get(0).unwrap().events_of(EventType::Collision)[0].key, 1);
	assert_eq!(decoded.includes[0].data.as_deref(), Some(b"hello".as_slice()));

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn ciphered_roundtrip() -> InternalResult {
	let project = populated_project();

	let mut plain = Vec::new();
	dump(&mut plain, &project, &WriterConfig::default(), None)?;

	for seed in SEEDS {
		let mut ciphered = Vec::new();
		dump(&mut ciphered, &project, &WriterConfig::default().seed(seed), None)?;

		assert_eq!(ciphered.len(), plain.len());
		assert_ne!(ciphered, plain);

		let decoded = load(ciphered.as_slice(), &LoaderConfig::default().seed(seed), None)?;
		assert_eq!(decoded, project);
	}

	// Reading ciphered bytes without the seed trips over the magic
	let mut ciphered = Vec::new();
	dump(&mut ciphered, &project, &WriterConfig::default().seed(7), None)?;

	match load(ciphered.as_slice(), &LoaderConfig::default(), None) {
		Err(InternalError::InvalidMagic(magic)) => assert_ne!(magic, crate::MAGIC),
		other => panic!("Expected an invalid magic, got {:?}", other.map(|_| ())),
	};

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn per_record_blocks() -> InternalResult {
	let mut project = Project::new();
	project.fonts.insert(
		1,
		Font {
			name: "fnt_a".to_string(),
			..Default::default()
		},
	);

	// Reading back only works if every slot, hole included, was its own block
	let decoded = roundtrip(&project, 99)?;
	assert_eq!(decoded.fonts, project.fonts);

	assert_eq!(Section::Fonts.scope(), ScopePolicy::PerRecord);
	assert_eq!(Section::Triggers.scope(), ScopePolicy::PerRecord);
	assert_eq!(Section::Sprites.scope(), ScopePolicy::CloseOnly);
	assert_eq!(Section::GameInformation.scope(), ScopePolicy::CloseOnly);

	Ok(())
}

#[test]
#[cfg(feature = "archive")]
fn block_trailing_bytes() -> InternalResult {
	use crate::loader::decoder::Decoder;

	let mut block = Vec::new();
	Compressor::new([1u8, 0, 0, 0, 0xEE].as_slice()).compress(&mut block)?;

	let mut source = (block.len() as i32).to_le_bytes().to_vec();
	source.extend_from_slice(&block);

	let mut decoder = Decoder::new(source.as_slice());
	let mut inner = decoder.read_block("Test")?;
	assert!(inner.read_bool()?);

	assert!(matches!(inner.finish_block("Test"), Err(InternalError::MalformedArchive(_))));
	Ok(())
}

#[test]
#[cfg(feature = "archive")]
fn malformed_lengths() {
	use crate::loader::decoder::Decoder;

	let negative = (-5i32).to_le_bytes();
	let result = Decoder::new(negative.as_slice()).read_str("Test");
	assert!(matches!(result, Err(InternalError::MalformedArchive(_))));

	let mut overlong = 1_000_000i32.to_le_bytes().to_vec();
	overlong.extend_from_slice(b"abc");
	let result = Decoder::new(overlong.as_slice()).read_blob("Test");
	assert!(matches!(result, Err(InternalError::MalformedArchive(_))));

	let result = Decoder::new([1u8, 2].as_slice()).read_i32();
	assert!(matches!(result, Err(InternalError::MalformedArchive(_))));
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn truncated_archives() -> InternalResult {
	let mut target = Vec::new();
	dump(&mut target, &populated_project(), &WriterConfig::default(), None)?;

	for cut in [8, 60, target.len() / 2, target.len() - 1] {
		match load(&target[..cut], &LoaderConfig::default(), None) {
			Err(InternalError::MalformedArchive(_)) => (),
			other => panic!("Cut at {} should be malformed, got {:?}", cut, other.map(|_| ())),
		}
	}

	let garbage = [0u8; 64];
	assert!(matches!(
		load(garbage.as_slice(), &LoaderConfig::default(), None),
		Err(InternalError::InvalidMagic(0))
	));

	Ok(())
}

#[test]
#[cfg(feature = "builder")]
fn unwritable_fields() {
	let mut project = Project::new();
	project.backgrounds.push(Background {
		name: "bg_missing".to_string(),
		width: 4,
		height: 4,
		data: None,
		..Default::default()
	});

	let result = dump(Cursor::new(Vec::new()), &project, &WriterConfig::default(), None);
	assert!(matches!(result, Err(InternalError::UnwritableField(_))));

	let mut project = Project::new();
	project.settings.game_icon = None;
	let result = dump(Cursor::new(Vec::new()), &project, &WriterConfig::default(), None);
	assert!(matches!(result, Err(InternalError::UnwritableField(_))));

	let mut project = Project::new();
	project.includes.push(Include {
		original_file_size: 10,
		store_in_editable: true,
		data: Some(vec![0; 3]),
		..Default::default()
	});
	let result = dump(Cursor::new(Vec::new()), &project, &WriterConfig::default(), None);
	assert!(matches!(result, Err(InternalError::UnwritableField(_))));
}

#[test]
#[cfg(feature = "builder")]
fn reserved_event_keys() {
	for event in [Event::collision(-1, vec![action(&[])]), Event::new(EVENT_TERMINATOR, Vec::new())] {
		let mut project = Project::new();
		let mut object = Object::default();
		object.add_event(EventType::Collision, event);
		project.objects.push(object);

		let result = dump(Cursor::new(Vec::new()), &project, &WriterConfig::default(), None);
		assert!(matches!(result, Err(InternalError::UnwritableField(_))));
	}
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn extreme_ids_roundtrip() -> InternalResult {
	let mut project = Project::new();

	let mut object = Object::default();
	object.add_event(EventType::Collision, Event::collision(i32::MAX, vec![action(&[])]));
	object.add_event(EventType::Collision, Event::collision(-2, Vec::new()));
	project.objects.push(object);

	project.tree.children[7]
		.children
		.push(TreeNode::leaf("obj_far", ResourceType::OBJECTS, i32::MAX));

	let decoded = roundtrip(&project, -1)?;
	let keys = decoded.objects.get(0).unwrap().events_of(EventType::Collision).iter().map(|e| e.key).collect::<Vec<_>>();

	assert_eq!(keys, [i32::MAX, -2]);
	assert_eq!(decoded.tree.find("obj_far").map(|node| node.id), Some(i32::MAX));
	assert_eq!(decoded, project);

	Ok(())
}

#[test]
fn error_messages() {
	let message = InternalError::InvalidMagic(42).to_string();
	assert!(message.contains(&crate::MAGIC.to_string()));
	assert!(message.ends_with("42"));

	let message = InternalError::from(std::io::Error::new(std::io::ErrorKind::Other, "sink closed")).to_string();
	assert!(message.contains("sink closed"));
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn progress_reports() -> InternalResult {
	let mut written = Vec::new();
	let mut target = Vec::new();

	let mut callback = |progress: &Progress| written.push(*progress);
	dump(&mut target, &Project::new(), &WriterConfig::default(), Some(&mut callback))?;

	assert_eq!(written.len(), Section::ALL.len());
	assert_eq!(written[0].message, "Starting project write...");
	assert_eq!(written.last().map(|p| p.percentage), Some(100));
	assert!(written.windows(2).all(|pair| pair[0].percentage <= pair[1].percentage));

	let mut read = Vec::new();
	let mut callback = |progress: &Progress| read.push(progress.section);
	load(target.as_slice(), &LoaderConfig::default(), Some(&mut callback))?;

	assert_eq!(read, Section::ALL);
	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn unpersisted_values_are_dropped() -> InternalResult {
	let mut project = Project::new();
	project.assets.push("sprites\\spr_player".to_string());
	project.data_files.push(DataFile::default());
	project.next_data_file_id = 1;

	let decoded = roundtrip(&project, -1)?;
	assert!(decoded.assets.is_empty());
	assert!(decoded.data_files.is_empty());
	assert_eq!(decoded.next_data_file_id, DATA_FILE_ID_MIN);

	Ok(())
}

#[test]
fn refactor_ids() {
	let mut project = Project::new();
	for _ in 0..2 {
		let mut room = Room::default();
		room.instances = vec![Instance { id: 7, ..Default::default() }; 3];
		room.tiles = vec![Tile { id: 7, ..Default::default() }; 2];
		project.rooms.push(room);
	}

	project.refactor_instance_ids();
	project.refactor_tile_ids();

	let instance_ids = project
		.rooms
		.iter()
		.flat_map(|(_, room)| room.instances.iter().map(|i| i.id))
		.collect::<Vec<_>>();

	assert_eq!(instance_ids, (INSTANCE_ID_MIN..INSTANCE_ID_MIN + 6).collect::<Vec<_>>());
	assert_eq!(project.next_instance_id, INSTANCE_ID_MIN + 6);
	assert_eq!(project.next_tile_id, TILE_ID_MIN + 4);

	let id = Project::random_game_id();
	assert!((0..GAME_ID_MAX).contains(&id));
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn parallel_decoding() -> InternalResult {
	use rayon::prelude::*;

	let project = populated_project();
	let archives = SEEDS
		.iter()
		.map(|seed| {
			let mut target = Vec::new();
			dump(&mut target, &project, &WriterConfig::default().seed(*seed), None).map(|_| (*seed, target))
		})
		.collect::<InternalResult<Vec<_>>>()?;

	let decoded = archives
		.par_iter()
		.map(|(seed, bytes)| load(bytes.as_slice(), &LoaderConfig::default().seed(*seed), None))
		.collect::<Vec<_>>();

	for result in decoded {
		assert_eq!(result?, project);
	}

	Ok(())
}

#[test]
#[cfg(all(feature = "builder", feature = "archive"))]
fn project_files() -> InternalResult {
	let file = tempfile::NamedTempFile::new()?;
	let project = populated_project();

	let written = write_project(file.path(), &project, &WriterConfig::default().seed(3), None)?;
	assert_eq!(written, std::fs::metadata(file.path())?.len());

	let decoded = read_project(file.path(), &LoaderConfig::default().seed(3), None)?;
	assert_eq!(decoded, project);

	// Rewriting a smaller project truncates the old contents
	write_project(file.path(), &Project::new(), &WriterConfig::default(), None)?;
	assert_eq!(read_project(file.path(), &LoaderConfig::default(), None)?, Project::new());

	let directory = tempfile::tempdir()?;
	let missing = directory.path().join("missing.gmk");

	match write_project(&missing, &project, &WriterConfig::default(), None) {
		Err(InternalError::MissingSourceFile(path)) => assert_eq!(path, missing),
		other => panic!("Expected a missing file, got {:?}", other),
	};
	assert!(!missing.exists());

	Ok(())
}
