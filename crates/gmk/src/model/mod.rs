mod game_info;
mod list;
mod object;
mod project;
mod resources;
mod room;
mod settings;
mod tree;

pub use game_info::*;
pub use list::ResourceList;
pub use object::*;
pub use project::*;
pub use resources::*;
pub use room::*;
pub use settings::*;
pub use tree::*;
