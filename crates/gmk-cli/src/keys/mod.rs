use clap::Arg;
use std::collections::HashMap;

pub mod key_names {
	pub(crate) const OUTPUT: &str = "OUTPUT";
	pub(crate) const INPUT: &str = "INPUT";

	pub(crate) const SEED: &str = "SEED";
	pub(crate) const OUT_SEED: &str = "OUT_SEED";
	pub(crate) const VERSION: &str = "VERSION";

	pub(crate) const SORT: &str = "SORT";
}

pub fn build_keys<'a>() -> HashMap<&'static str, Arg<'a>> {
	/* please only use this function once during the lifecycle of the program */
	let mut map = HashMap::with_capacity(6);

	/* The various keys usable in the CLI */
	// A general output target
	map.insert(
		key_names::OUTPUT,
		Arg::new(key_names::OUTPUT)
			.short('o')
			.long("output")
			.value_name(key_names::OUTPUT)
			.help("The project file to write to")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	// A general input source
	map.insert(
		key_names::INPUT,
		Arg::new(key_names::INPUT)
			.short('i')
			.long("input")
			.value_name(key_names::INPUT)
			.help("The project file to read from")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	// Cipher seed of the input
	map.insert(
		key_names::SEED,
		Arg::new(key_names::SEED)
			.short('s')
			.long("seed")
			.value_name(key_names::SEED)
			.help("The seed the project was ciphered with, negative or absent for none")
			.required(false)
			.allow_hyphen_values(true)
			.takes_value(true)
			.number_of_values(1),
	);

	// Cipher seed of the output
	map.insert(
		key_names::OUT_SEED,
		Arg::new(key_names::OUT_SEED)
			.long("out-seed")
			.value_name(key_names::OUT_SEED)
			.help("The seed to cipher the written project with, negative or absent for none")
			.required(false)
			.allow_hyphen_values(true)
			.takes_value(true)
			.number_of_values(1),
	);

	// Layout version to write
	map.insert(
		key_names::VERSION,
		Arg::new(key_names::VERSION)
			.long("version")
			.short('v')
			.value_name(key_names::VERSION)
			.help("The layout version to write, versions below 600 reserve extra header bytes")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	// sorting the resource table
	map.insert(
		key_names::SORT,
		Arg::new(key_names::SORT)
			.long("sort")
			.value_name(key_names::SORT)
			.help("How to sort resources within the table, either by kind and id or alphabetically by name")
			.required(false)
			.takes_value(true)
			.number_of_values(1),
	);

	map
}

/// Parses an optional seed key, no seed means no cipher
pub fn parse_seed(args: &clap::ArgMatches, key: &str) -> anyhow::Result<i32> {
	match args.value_of(key) {
		Some(seed) => Ok(seed.parse::<i32>()?),
		None => Ok(-1),
	}
}
