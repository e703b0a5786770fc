//! Reverse child → parent index over the document graph, and the breadcrumb
//! trail derived from it.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::BoardData;

/// Child id → direct parent id, built once from the root at load time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AncestorIndex {
	parents: HashMap<String, String>,
}

impl AncestorIndex {
	pub fn parent_of(&self, id: &str) -> Option<&str> {
		self.parents.get(id).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.parents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parents.is_empty()
	}
}

/// Walk the graph depth-first from the root, recording the first parent seen
/// for every referenced document id. Already-visited ids are pruned rather
/// than re-descended, so shared references and cycles terminate. Best-effort:
/// ids missing from the graph simply stop the descent.
pub fn build_ancestor_index(data: &BoardData) -> AncestorIndex {
	let mut parents = HashMap::new();
	let mut visited = HashSet::new();
	// The root never records a parent, even if a card points back at it.
	visited.insert(data.root.clone());
	descend(data, &data.root, &mut parents, &mut visited);
	debug!("ancestor index covers {} documents", parents.len());
	AncestorIndex { parents }
}

fn descend(
	data: &BoardData,
	id: &str,
	parents: &mut HashMap<String, String>,
	visited: &mut HashSet<String>,
) {
	let Some(doc) = data.documents.get(id) else {
		return;
	};
	for card in &doc.cards {
		if visited.insert(card.document_id.clone()) {
			parents.insert(card.document_id.clone(), id.to_string());
			descend(data, &card.document_id, parents, visited);
		}
	}
}

/// One entry of the root→current trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
	pub id: String,
	pub label: String,
	pub path: String,
}

/// Reconstruct the ordered ancestor chain for `current`: root first, the
/// current document last. Recomputed on every navigation. A repeated parent
/// id within the walk stops it, so a residual cycle in the index cannot hang
/// the resolver.
pub fn resolve_breadcrumbs(current: &str, index: &AncestorIndex, data: &BoardData) -> Vec<Crumb> {
	let root_label = data
		.documents
		.get(&data.root)
		.and_then(|doc| doc.label.clone())
		.unwrap_or_else(|| "Home".to_string());
	let mut crumbs = vec![Crumb {
		id: data.root.clone(),
		label: root_label,
		path: "/".to_string(),
	}];
	if current == data.root {
		return crumbs;
	}

	let mut chain = Vec::new();
	let mut seen = HashSet::new();
	seen.insert(current.to_string());
	let mut cursor = current.to_string();
	while let Some(parent) = index.parent_of(&cursor) {
		if parent == data.root || !seen.insert(parent.to_string()) {
			break;
		}
		chain.push(parent.to_string());
		cursor = parent.to_string();
	}
	chain.reverse();

	for id in &chain {
		crumbs.push(crumb_for(id, data));
	}
	crumbs.push(crumb_for(current, data));
	crumbs
}

fn crumb_for(id: &str, data: &BoardData) -> Crumb {
	let label = data
		.documents
		.get(id)
		.and_then(|doc| doc.label.clone())
		.unwrap_or_else(|| id.to_string());
	Crumb {
		id: id.to_string(),
		label,
		path: format!("/{id}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_graph() -> BoardData {
		serde_json::from_str(
			r#"{
				"root": "home",
				"documents": {
					"home": {"type": "board", "label": "Home", "cards": [
						{"card_id": "c1", "document_id": "b1",
						 "position_x": 0, "position_y": 0,
						 "size_width": 200, "size_height": 150, "z": 1}
					]},
					"b1": {"type": "board", "label": "B1", "cards": [
						{"card_id": "c2", "document_id": "leaf",
						 "position_x": 10, "position_y": 10,
						 "size_width": 50, "size_height": 50, "z": 1}
					]},
					"leaf": {"type": "text", "original_file": "x.txt"}
				}
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn index_records_one_parent_per_document() {
		let data = sample_graph();
		let index = build_ancestor_index(&data);
		assert_eq!(index.len(), 2);
		assert_eq!(index.parent_of("b1"), Some("home"));
		assert_eq!(index.parent_of("leaf"), Some("b1"));
		assert_eq!(index.parent_of("home"), None);
	}

	#[test]
	fn shared_document_keeps_first_parent() {
		let data: BoardData = serde_json::from_str(
			r#"{
				"root": "r",
				"documents": {
					"r": {"type": "board", "cards": [
						{"card_id": "c1", "document_id": "x"},
						{"card_id": "c2", "document_id": "y"}
					]},
					"x": {"type": "board", "cards": [{"card_id": "c3", "document_id": "z"}]},
					"y": {"type": "board", "cards": [{"card_id": "c4", "document_id": "z"}]},
					"z": {"type": "text"}
				}
			}"#,
		)
		.unwrap();
		let index = build_ancestor_index(&data);
		// z is reachable via x and y; exactly one parent is recorded.
		assert_eq!(index.parent_of("z"), Some("x"));
		assert_eq!(index.len(), 3);
	}

	#[test]
	fn cyclic_graph_terminates() {
		let data: BoardData = serde_json::from_str(
			r#"{
				"root": "a",
				"documents": {
					"a": {"type": "board", "cards": [{"card_id": "c1", "document_id": "b"}]},
					"b": {"type": "board", "cards": [{"card_id": "c2", "document_id": "a"}]}
				}
			}"#,
		)
		.unwrap();
		let index = build_ancestor_index(&data);
		assert_eq!(index.parent_of("b"), Some("a"));
		// The cycle edge back to the root is pruned, not recorded.
		assert_eq!(index.parent_of("a"), None);
	}

	#[test]
	fn breadcrumbs_for_root_is_single_entry() {
		let data = sample_graph();
		let index = build_ancestor_index(&data);
		let crumbs = resolve_breadcrumbs("home", &index, &data);
		assert_eq!(crumbs.len(), 1);
		assert_eq!(crumbs[0].id, "home");
		assert_eq!(crumbs[0].label, "Home");
		assert_eq!(crumbs[0].path, "/");
	}

	#[test]
	fn breadcrumbs_walk_root_to_current() {
		let data = sample_graph();
		let index = build_ancestor_index(&data);
		let crumbs = resolve_breadcrumbs("leaf", &index, &data);
		let ids: Vec<&str> = crumbs.iter().map(|c| c.id.as_str()).collect();
		assert_eq!(ids, ["home", "b1", "leaf"]);
		assert_eq!(crumbs[1].path, "/b1");
		assert_eq!(crumbs[2].path, "/leaf");
		// depth 2 document yields depth + 1 entries
		assert_eq!(crumbs.len(), 3);
	}

	#[test]
	fn breadcrumbs_tolerate_residual_index_cycle() {
		let data: BoardData = serde_json::from_str(
			r#"{"root": "r", "documents": {"r": {"type": "board"}}}"#,
		)
		.unwrap();
		// Hand-built index with a cycle the builder can never produce.
		let mut parents = HashMap::new();
		parents.insert("a".to_string(), "b".to_string());
		parents.insert("b".to_string(), "a".to_string());
		let index = AncestorIndex { parents };

		let crumbs = resolve_breadcrumbs("a", &index, &data);
		let ids: Vec<&str> = crumbs.iter().map(|c| c.id.as_str()).collect();
		assert_eq!(ids, ["r", "b", "a"]);
	}

	#[test]
	fn unreachable_document_still_gets_a_trail() {
		let data = sample_graph();
		let index = build_ancestor_index(&data);
		let crumbs = resolve_breadcrumbs("orphan", &index, &data);
		let ids: Vec<&str> = crumbs.iter().map(|c| c.id.as_str()).collect();
		assert_eq!(ids, ["home", "orphan"]);
	}
}
