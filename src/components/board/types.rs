use std::collections::HashMap;

use serde::Deserialize;

/// A full board export: the designated root plus every document keyed by id.
///
/// Loaded once per session and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BoardData {
	pub root: String,
	#[serde(default)]
	pub documents: HashMap<String, Document>,
}

/// Closed set of document variants. Anything the export ships that we do not
/// recognize lands on `Unknown` and is rendered as a structural dump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
	Board,
	Image,
	Text,
	Url,
	Pdf,
	#[default]
	#[serde(other)]
	Unknown,
}

/// One node of the document graph.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Document {
	#[serde(rename = "type", default)]
	pub kind: DocumentKind,
	#[serde(default)]
	pub label: Option<String>,
	/// Child placements; only populated for boards.
	#[serde(default)]
	pub cards: Vec<Card>,
	/// Connector lines between sibling cards, by card id.
	#[serde(default)]
	pub connections: Vec<Connection>,
	/// Freeform ink drawings overlaid on the board.
	#[serde(default)]
	pub ink_models: HashMap<String, InkModel>,
	#[serde(default)]
	pub original_file: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub color: Option<String>,
}

impl Document {
	pub fn is_board(&self) -> bool {
		self.kind == DocumentKind::Board
	}
}

/// A placement of a document inside a parent board. Cards reference their
/// document by id only; the graph owns the documents.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Card {
	#[serde(default)]
	pub card_id: String,
	pub document_id: String,
	#[serde(default)]
	pub position_x: f64,
	#[serde(default)]
	pub position_y: f64,
	#[serde(default = "default_card_size")]
	pub size_width: f64,
	#[serde(default = "default_card_size")]
	pub size_height: f64,
	/// Paint order among siblings.
	#[serde(default)]
	pub z: i32,
}

// Fallback box for cards exported without a size.
fn default_card_size() -> f64 {
	200.0
}

/// Connector endpoints: a pair of sibling card ids.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Connection(pub String, pub String);

/// An exported ink trace, served as an SVG file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InkModel {
	#[serde(default)]
	pub original_file: Option<String>,
	#[serde(default)]
	pub color: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_board_export() {
		let data: BoardData = serde_json::from_str(
			r#"{
				"root": "home",
				"documents": {
					"home": {
						"type": "board",
						"label": "Home",
						"cards": [
							{"card_id": "c1", "document_id": "b1",
							 "position_x": 0, "position_y": 0,
							 "size_width": 200, "size_height": 150, "z": 1}
						],
						"connections": [["c1", "c2"]]
					},
					"b1": {"type": "text", "original_file": "x.txt"}
				}
			}"#,
		)
		.unwrap();

		assert_eq!(data.root, "home");
		let home = &data.documents["home"];
		assert_eq!(home.kind, DocumentKind::Board);
		assert_eq!(home.cards.len(), 1);
		assert_eq!(home.cards[0].document_id, "b1");
		assert_eq!(home.cards[0].size_height, 150.0);
		assert_eq!(home.connections, vec![Connection("c1".into(), "c2".into())]);
		assert_eq!(data.documents["b1"].kind, DocumentKind::Text);
		assert_eq!(data.documents["b1"].original_file.as_deref(), Some("x.txt"));
	}

	#[test]
	fn absent_fields_default() {
		let doc: Document = serde_json::from_str(r#"{"type": "board"}"#).unwrap();
		assert!(doc.cards.is_empty());
		assert!(doc.connections.is_empty());
		assert!(doc.ink_models.is_empty());
		assert!(doc.label.is_none());

		let card: Card = serde_json::from_str(r#"{"document_id": "d"}"#).unwrap();
		assert_eq!(card.position_x, 0.0);
		assert_eq!(card.size_width, 200.0);
		assert_eq!(card.z, 0);
	}

	#[test]
	fn unknown_type_tag_is_explicit() {
		let doc: Document = serde_json::from_str(r#"{"type": "hologram"}"#).unwrap();
		assert_eq!(doc.kind, DocumentKind::Unknown);
	}
}
