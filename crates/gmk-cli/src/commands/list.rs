use tabled::{
	Table, Tabled,
	settings::{*, object::Columns},
};
use gmk::prelude::*;

use super::CommandTrait;
use crate::keys::{key_names, parse_seed};

pub const VERSION: &str = "0.1.0";

/// This command lists the resources in a project in tabulated form
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let input_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => {
				anyhow::bail!("Please provide an input project file using the -i or --input keys!")
			},
		};

		let config = LoaderConfig::default().seed(parse_seed(args, key_names::SEED)?);
		let project = read_project(input_path, &config, None)?;

		// log basic metadata
		println!(
			"Project: version {}, game id {}, {} constant(s), {} include(s), {} package(s)",
			project.version,
			project.game_id,
			project.constants.len(),
			project.includes.len(),
			project.packages.len()
		);

		let mut rows = Vec::new();
		collect(&mut rows, "Trigger", &project.triggers, |t| &t.name);
		collect(&mut rows, "Sound", &project.sounds, |s| &s.name);
		collect(&mut rows, "Sprite", &project.sprites, |s| &s.name);
		collect(&mut rows, "Background", &project.backgrounds, |b| &b.name);
		collect(&mut rows, "Path", &project.paths, |p| &p.name);
		collect(&mut rows, "Script", &project.scripts, |s| &s.name);
		collect(&mut rows, "Font", &project.fonts, |f| &f.name);
		collect(&mut rows, "Timeline", &project.timelines, |t| &t.name);
		collect(&mut rows, "Object", &project.objects, |o| &o.name);
		collect(&mut rows, "Room", &project.rooms, |r| &r.name);

		// Sort the rows accordingly, they are already grouped by kind and id
		match args.value_of(key_names::SORT) {
			Some("id") | None => (),
			Some("name") => rows.sort_by(|a, b| a.name.cmp(b.name)),
			Some(sort) => anyhow::bail!("Unknown sort option provided: {}. Valid sort types are: 'id' 'name'", sort),
		};

		let mut table = Table::new(rows);
		table
			.with(Style::rounded())
			.with(Modify::list(Columns::new(..1), Alignment::left()));

		println!("{}", table);

		Ok(())
	}
}

fn collect<'a, T>(rows: &mut Vec<ResourceRow<'a>>, kind: &'static str, list: &'a ResourceList<T>, name: fn(&T) -> &String) {
	rows.extend(list.iter().map(|(id, item)| ResourceRow {
		kind,
		id: *id,
		name: name(item).as_str(),
	}))
}

#[derive(Tabled)]
struct ResourceRow<'a> {
	kind: &'static str,
	id: u32,
	name: &'a str,
}
