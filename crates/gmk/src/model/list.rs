use std::collections::{btree_map, BTreeMap};

/// An id indexed collection of resources, tracking the highest id ever handed out.
///
/// Ids are never reused: removing an item leaves a hole, and the watermark stays where it was.
/// When serialized the list is walked from `0` through [`last_id`](ResourceList::last_id) inclusive, holes included.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<T> {
	items: BTreeMap<u32, T>,
	last_id: Option<u32>,
}

impl<T> Default for ResourceList<T> {
	fn default() -> Self {
		ResourceList {
			items: BTreeMap::new(),
			last_id: None,
		}
	}
}

impl<T> ResourceList<T> {
	/// An empty list, no ids assigned yet
	pub fn new() -> ResourceList<T> {
		Self::default()
	}

	/// An empty list whose watermark already covers `count` slots, all of them holes
	pub fn with_watermark(count: u32) -> ResourceList<T> {
		ResourceList {
			items: BTreeMap::new(),
			last_id: count.checked_sub(1),
		}
	}

	/// Appends an item under the next free id, and returns that id
	pub fn push(&mut self, item: T) -> u32 {
		let id = self.last_id.map_or(0, |id| id + 1);
		self.items.insert(id, item);
		self.last_id = Some(id);
		id
	}

	/// Places an item under a specific id, raising the watermark if needed. Returns the item previously stored there
	pub fn insert(&mut self, id: u32, item: T) -> Option<T> {
		self.last_id = Some(self.last_id.map_or(id, |last| last.max(id)));
		self.items.insert(id, item)
	}

	/// Removes an item, leaving a hole. The watermark is untouched
	pub fn remove(&mut self, id: u32) -> Option<T> {
		self.items.remove(&id)
	}

	/// Fetch an item by id
	pub fn get(&self, id: u32) -> Option<&T> {
		self.items.get(&id)
	}

	/// Fetch an item by id, mutably
	pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
		self.items.get_mut(&id)
	}

	/// Iterates over present items in ascending id order
	pub fn iter(&self) -> btree_map::Iter<'_, u32, T> {
		self.items.iter()
	}

	/// Iterates mutably over present items in ascending id order
	pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, u32, T> {
		self.items.iter_mut()
	}

	/// Number of present items, holes excluded
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether no item is present. A list may be empty and still have a watermark
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// The highest id ever assigned, `None` if no id was ever handed out
	pub fn last_id(&self) -> Option<u32> {
		self.last_id
	}

	/// Number of slots a serialized walk covers, ie `last_id + 1`
	pub fn slot_count(&self) -> u64 {
		self.last_id.map_or(0, |id| id as u64 + 1)
	}

	/// Walks every slot from `0` through the watermark, yielding `None` for holes
	pub fn slots(&self) -> impl Iterator<Item = (u32, Option<&T>)> + '_ {
		let end = self.last_id.map_or(0, |id| id as u64 + 1);
		(0..end).map(move |id| (id as u32, self.items.get(&(id as u32))))
	}
}

impl<'a, T> IntoIterator for &'a ResourceList<T> {
	type Item = (&'a u32, &'a T);
	type IntoIter = btree_map::Iter<'a, u32, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::ResourceList;

	#[test]
	fn watermark_survives_removal() {
		let mut list = ResourceList::new();
		assert_eq!(list.push("a"), 0);
		assert_eq!(list.push("b"), 1);

		list.remove(1);
		assert_eq!(list.last_id(), Some(1));
		assert_eq!(list.push("c"), 2);
		assert_eq!(list.len(), 2);
	}

	#[test]
	fn slots_include_holes() {
		let mut list = ResourceList::new();
		list.insert(0, 'x');
		list.insert(3, 'y');

		let flags: Vec<bool> = list.slots().map(|(_, item)| item.is_some()).collect();
		assert_eq!(flags, [true, false, false, true]);
		assert_eq!(ResourceList::<u8>::new().slots().count(), 0);
		assert_eq!(ResourceList::<u8>::with_watermark(2).slot_count(), 2);
	}
}
