use std::io::Read;

use super::decoder::Decoder;
use crate::global::error::*;
use crate::model::{NodeType, ResourceType, TreeNode, MAX_TREE_DEPTH, ROOT_CATEGORIES};

pub(crate) fn read_tree<R: Read>(dec: &mut Decoder<R>) -> InternalResult<TreeNode> {
	dec.read_tag(700, "Tree")?;

	// Room execution order, always zero
	dec.read_i32()?;

	let mut root = TreeNode::root();
	for _ in 0..ROOT_CATEGORIES {
		root.children.push(read_node(dec, 1)?);
	}

	Ok(root)
}

fn read_node<R: Read>(dec: &mut Decoder<R>, depth: usize) -> InternalResult<TreeNode> {
	if depth > MAX_TREE_DEPTH {
		return Err(InternalError::MalformedArchive(format!(
			"Tree is nested deeper than {} levels",
			MAX_TREE_DEPTH
		)));
	}

	let mut node = TreeNode {
		node_type: NodeType(dec.read_i32()?),
		resource_type: ResourceType(dec.read_i32()?),
		id: dec.read_i32()?,
		name: dec.read_str("Tree node name")?,
		children: Vec::new(),
	};

	let count = dec.read_len("Tree children")?;
	for _ in 0..count {
		node.children.push(read_node(dec, depth + 1)?);
	}

	Ok(node)
}
