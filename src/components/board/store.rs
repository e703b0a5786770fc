//! The immutable board snapshot: fetched once at startup, indexed once, and
//! shared by reference for the rest of the session.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use super::content::fetch_text;
use super::index::{AncestorIndex, build_ancestor_index};
use super::types::{BoardData, Document};

/// Location of the exported board JSON.
pub const CONTENTS_URL: &str = "/board/contents.json";

/// Reserved route segment that maps to the graph's root document.
pub const HOME_SEGMENT: &str = "home";

/// The loaded document graph plus the ancestor index built over it. Both are
/// read-only after construction.
#[derive(Debug)]
pub struct BoardState {
	pub data: BoardData,
	pub ancestors: AncestorIndex,
}

impl BoardState {
	pub fn new(data: BoardData) -> Self {
		let ancestors = build_ancestor_index(&data);
		Self { data, ancestors }
	}

	pub fn document(&self, id: &str) -> Option<&Document> {
		self.data.documents.get(id)
	}

	/// Map a trailing route segment to a document id. The empty segment and
	/// the reserved home segment both select the root.
	pub fn route_target(&self, segment: &str) -> String {
		if segment.is_empty() || segment == HOME_SEGMENT {
			self.data.root.clone()
		} else {
			segment.to_string()
		}
	}
}

/// Context handle for the snapshot. Empty until the one-time load resolves.
#[derive(Clone, Copy)]
pub struct BoardStore(RwSignal<Option<Arc<BoardState>>>);

impl BoardStore {
	/// Install an empty store in context and kick off the snapshot load.
	pub fn provide() -> Self {
		let store = Self(RwSignal::new(None));
		provide_context(store);
		store.load();
		store
	}

	pub fn expect() -> Self {
		expect_context::<Self>()
	}

	pub fn get(&self) -> Option<Arc<BoardState>> {
		self.0.get()
	}

	fn load(self) {
		spawn_local(async move {
			match fetch_contents().await {
				Ok(data) => {
					let state = BoardState::new(data);
					info!(
						"loaded board snapshot: {} documents, root {:?}",
						state.data.documents.len(),
						state.data.root
					);
					self.0.set(Some(Arc::new(state)));
				}
				Err(err) => error!("failed to load {CONTENTS_URL}: {err}"),
			}
		});
	}
}

async fn fetch_contents() -> Result<BoardData, String> {
	let body = fetch_text(CONTENTS_URL).await?;
	serde_json::from_str(&body).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn route_target_maps_sentinel_to_root() {
		let data: BoardData = serde_json::from_str(
			r#"{"root": "root-id", "documents": {"root-id": {"type": "board"}}}"#,
		)
		.unwrap();
		let state = BoardState::new(data);
		assert_eq!(state.route_target(""), "root-id");
		assert_eq!(state.route_target("home"), "root-id");
		assert_eq!(state.route_target("b1"), "b1");
	}
}
