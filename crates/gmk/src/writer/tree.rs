use std::io::Write;

use super::encoder::Encoder;
use crate::global::error::*;
use crate::model::{TreeNode, MAX_TREE_DEPTH, ROOT_CATEGORIES};

/// Writes the tree tag, the room execution order, then the root's categories pre-order.
/// The root itself is implicit and never stored
pub(crate) fn write_tree<W: Write>(enc: &mut Encoder<W>, root: &TreeNode) -> InternalResult {
	if root.children.len() != ROOT_CATEGORIES {
		return Err(InternalError::UnwritableField(format!(
			"The tree root must hold exactly {} categories, found {}",
			ROOT_CATEGORIES,
			root.children.len()
		)));
	}

	enc.write_i32(700)?;
	enc.write_i32(0)?;

	for category in &root.children {
		write_node(enc, category, 1)?;
	}

	Ok(())
}

fn write_node<W: Write>(enc: &mut Encoder<W>, node: &TreeNode, depth: usize) -> InternalResult {
	if depth > MAX_TREE_DEPTH {
		return Err(InternalError::UnwritableField(format!(
			"Tree node {} is nested deeper than {} levels",
			node.name, MAX_TREE_DEPTH
		)));
	}

	enc.write_i32(node.node_type.0)?;
	enc.write_i32(node.resource_type.0)?;
	enc.write_i32(node.id)?;
	enc.write_str(&node.name)?;
	enc.write_len(node.children.len(), "Tree children")?;

	for child in &node.children {
		write_node(enc, child, depth + 1)?;
	}

	Ok(())
}
