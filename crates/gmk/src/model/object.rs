/// Maximum number of arguments an [`Action`] can carry
pub const MAX_ARGUMENTS: usize = 8;

/// Number of main event buckets every [`Object`] owns
pub const EVENT_BUCKETS: usize = 11;

/// Stored after the last event of every bucket
pub const EVENT_TERMINATOR: i32 = -1;

/// How an action executes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Execution {
	/// Handled by the runtime itself
	#[default]
	None,
	/// Calls a named library function
	Function(String),
	/// Runs a block of source code
	Code(String),
}

impl Execution {
	/// Integer stored for this mode
	pub fn mode(&self) -> i32 {
		match self {
			Execution::None => 0,
			Execution::Function(_) => 1,
			Execution::Code(_) => 2,
		}
	}
}

/// One argument slot of an [`Action`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Argument {
	/// Argument type, as understood by the action library
	pub kind: i32,
	/// Textual value
	pub value: String,
}

/// An atomic behaviour record, nested inside events and timeline moments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct Action {
	pub library_id: i32,
	pub action_id: i32,
	pub kind: i32,
	pub allow_relative: bool,
	pub question: bool,
	pub can_apply_to: bool,
	pub execution: Execution,
	/// At most [`MAX_ARGUMENTS`], the stored layout always pads up to that many slots
	pub arguments: Vec<Argument>,
	/// Target instance, `-1` for self and `-2` for other
	pub applies_to: i32,
	pub relative: bool,
	pub not: bool,
}

/// The main event categories, each addressing one bucket of [`Object::events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum EventType {
	Create = 0,
	Destroy = 1,
	Alarm = 2,
	Step = 3,
	/// Keyed by the id of the colliding object rather than a subtype
	Collision = 4,
	Keyboard = 5,
	Mouse = 6,
	Other = 7,
	Draw = 8,
	KeyPress = 9,
	KeyRelease = 10,
}

impl EventType {
	/// All event types, in bucket order
	pub const ALL: [EventType; EVENT_BUCKETS] = [
		EventType::Create,
		EventType::Destroy,
		EventType::Alarm,
		EventType::Step,
		EventType::Collision,
		EventType::Keyboard,
		EventType::Mouse,
		EventType::Other,
		EventType::Draw,
		EventType::KeyPress,
		EventType::KeyRelease,
	];

	/// Position of this type's bucket
	#[inline(always)]
	pub fn index(self) -> usize {
		self as usize
	}
}

/// A single event, owning the actions it runs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
	/// Event subtype, or for collisions the id of the other object.
	/// `-1` terminates a bucket when stored, so it can't be used as a key
	pub key: i32,
	#[allow(missing_docs)]
	pub actions: Vec<Action>,
}

impl Event {
	/// An event keyed by subtype
	pub fn new(subtype: i32, actions: Vec<Action>) -> Event {
		Event { key: subtype, actions }
	}

	/// A collision event against the object with id `other`
	pub fn collision(other: i32, actions: Vec<Action>) -> Event {
		Event { key: other, actions }
	}
}

/// An object resource
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Object {
	pub name: String,
	pub sprite_id: i32,
	pub solid: bool,
	pub visible: bool,
	pub depth: i32,
	pub persistent: bool,
	pub parent_id: i32,
	pub mask_id: i32,
	/// Fixed event buckets, index with [`EventType::index`]
	pub events: [Vec<Event>; EVENT_BUCKETS],
}

impl Default for Object {
	fn default() -> Object {
		Object {
			name: String::new(),
			sprite_id: -1,
			solid: false,
			visible: true,
			depth: 0,
			persistent: false,
			parent_id: -100,
			mask_id: -1,
			events: Default::default(),
		}
	}
}

impl Object {
	/// Events registered under `kind`
	pub fn events_of(&self, kind: EventType) -> &[Event] {
		&self.events[kind.index()]
	}

	/// Appends an event to the bucket for `kind`
	pub fn add_event(&mut self, kind: EventType, event: Event) {
		self.events[kind.index()].push(event);
	}
}
