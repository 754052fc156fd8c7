/// Number of category nodes directly under the tree root
pub const ROOT_CATEGORIES: usize = 12;

/// Deepest nesting accepted below the root, deeper trees are rejected by both the encoder and decoder
pub const MAX_TREE_DEPTH: usize = 512;

/// Kind of a [`TreeNode`]. Kept as a raw integer so unknown values survive a round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeType(pub i32);

impl NodeType {
	/// One of the fixed top level categories
	pub const PRIMARY: NodeType = NodeType(1);
	/// A user created folder
	pub const GROUP: NodeType = NodeType(2);
	/// A node pointing at a resource
	pub const CHILD: NodeType = NodeType(3);
}

/// Resource kind a [`TreeNode`] belongs to. Kept as a raw integer so unknown values survive a round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub struct ResourceType(pub i32);

#[allow(missing_docs)]
impl ResourceType {
	pub const NONE: ResourceType = ResourceType(0);
	pub const OBJECTS: ResourceType = ResourceType(1);
	pub const SPRITES: ResourceType = ResourceType(2);
	pub const SOUNDS: ResourceType = ResourceType(3);
	pub const ROOMS: ResourceType = ResourceType(4);
	pub const BACKGROUNDS: ResourceType = ResourceType(6);
	pub const SCRIPTS: ResourceType = ResourceType(7);
	pub const PATHS: ResourceType = ResourceType(8);
	pub const FONTS: ResourceType = ResourceType(9);
	pub const GAME_INFORMATION: ResourceType = ResourceType(10);
	pub const GLOBAL_GAME_SETTINGS: ResourceType = ResourceType(11);
	pub const TIMELINES: ResourceType = ResourceType(12);
	pub const EXTENSION_PACKAGES: ResourceType = ResourceType(13);
}

/// The twelve categories under the root, in stored order
pub const DEFAULT_CATEGORIES: [(&str, ResourceType); ROOT_CATEGORIES] = [
	("Sprites", ResourceType::SPRITES),
	("Sounds", ResourceType::SOUNDS),
	("Backgrounds", ResourceType::BACKGROUNDS),
	("Paths", ResourceType::PATHS),
	("Scripts", ResourceType::SCRIPTS),
	("Fonts", ResourceType::FONTS),
	("Time Lines", ResourceType::TIMELINES),
	("Objects", ResourceType::OBJECTS),
	("Rooms", ResourceType::ROOMS),
	("Game Information", ResourceType::GAME_INFORMATION),
	("Global Game Settings", ResourceType::GLOBAL_GAME_SETTINGS),
	("Extension Packages", ResourceType::EXTENSION_PACKAGES),
];

/// A node of the resource tree. Children are owned, the tree has no back references
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeNode {
	#[allow(missing_docs)]
	pub node_type: NodeType,
	#[allow(missing_docs)]
	pub resource_type: ResourceType,
	/// Id of the referenced resource, only meaningful for [`NodeType::CHILD`] nodes
	pub id: i32,
	#[allow(missing_docs)]
	pub name: String,
	#[allow(missing_docs)]
	pub children: Vec<TreeNode>,
}

impl TreeNode {
	/// The implicit root. Only its children are stored, so a decoded tree always starts from this node
	pub fn root() -> TreeNode {
		TreeNode::default()
	}

	/// The root populated with the twelve standard categories
	pub fn standard() -> TreeNode {
		let mut root = TreeNode::root();
		root.children = DEFAULT_CATEGORIES
			.iter()
			.map(|(name, kind)| TreeNode::category(*name, *kind))
			.collect();

		root
	}

	/// A top level category node
	pub fn category(name: impl Into<String>, resource_type: ResourceType) -> TreeNode {
		TreeNode {
			node_type: NodeType::PRIMARY,
			resource_type,
			id: 0,
			name: name.into(),
			children: Vec::new(),
		}
	}

	/// A folder node
	pub fn group(name: impl Into<String>, resource_type: ResourceType) -> TreeNode {
		TreeNode {
			node_type: NodeType::GROUP,
			..TreeNode::category(name, resource_type)
		}
	}

	/// A node referencing the resource with id `id`
	pub fn leaf(name: impl Into<String>, resource_type: ResourceType, id: i32) -> TreeNode {
		TreeNode {
			node_type: NodeType::CHILD,
			id,
			..TreeNode::category(name, resource_type)
		}
	}

	/// Appends a child, builder style
	pub fn with_child(mut self, child: TreeNode) -> TreeNode {
		self.children.push(child);
		self
	}

	/// Total number of nodes in this subtree, itself included
	pub fn count(&self) -> usize {
		1 + self.children.iter().map(TreeNode::count).sum::<usize>()
	}

	/// Depth first search for a node by name
	pub fn find(&self, name: &str) -> Option<&TreeNode> {
		if self.name == name {
			return Some(self);
		}

		self.children.iter().find_map(|child| child.find(name))
	}

	/// Visits every node pre-order, along with its depth below `self`
	pub fn walk<'a>(&'a self, visitor: &mut dyn FnMut(&'a TreeNode, usize)) {
		fn inner<'a>(node: &'a TreeNode, depth: usize, visitor: &mut dyn FnMut(&'a TreeNode, usize)) {
			visitor(node, depth);
			for child in &node.children {
				inner(child, depth + 1, visitor);
			}
		}

		inner(self, 0, visitor)
	}
}
