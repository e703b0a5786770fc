//! Pure geometry: card placement, nested-board fit scale, connector boxes.

use super::types::{Card, Document};

/// Fraction of the fitted scale kept, leaving a margin so nested content
/// never touches the card edge.
pub const FIT_MARGIN: f64 = 0.9;

/// Absolute CSS-space rectangle for one card inside its parent surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
	pub z_index: i32,
}

/// Map a card's logical placement straight into CSS pixels. No clipping, no
/// collision handling; overlap is resolved by z-order alone.
pub fn place_card(card: &Card) -> CardRect {
	CardRect {
		left: card.position_x,
		top: card.position_y,
		width: card.size_width,
		height: card.size_height,
		z_index: card.z,
	}
}

/// Bounding box of a board's cards, measured from the board's own origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
	pub width: f64,
	pub height: f64,
}

pub fn content_extent(doc: &Document) -> Extent {
	doc.cards.iter().fold(Extent::default(), |max, card| Extent {
		width: max.width.max(card.position_x + card.size_width),
		height: max.height.max(card.position_y + card.size_height),
	})
}

/// Scale that fits a board's content extent into a container. A degenerate
/// extent axis counts as the container dimension (scale 1 on that axis); the
/// result never upscales and always keeps the `FIT_MARGIN` breathing room.
pub fn fit_scale(doc: &Document, container_width: f64, container_height: f64) -> f64 {
	let extent = content_extent(doc);
	let extent_w = if extent.width > 0.0 { extent.width } else { container_width };
	let extent_h = if extent.height > 0.0 { extent.height } else { container_height };
	let scale_x = container_width / extent_w;
	let scale_y = container_height / extent_h;
	scale_x.min(scale_y).min(1.0) * FIT_MARGIN
}

/// Axis-aligned box spanning two card centers, with both endpoints
/// re-expressed relative to the box origin for local drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorBox {
	pub origin_x: f64,
	pub origin_y: f64,
	pub width: f64,
	pub height: f64,
	pub local_start: (f64, f64),
	pub local_end: (f64, f64),
}

pub fn connector_box(a: &Card, b: &Card) -> ConnectorBox {
	let start = (
		a.position_x + a.size_width / 2.0,
		a.position_y + a.size_height / 2.0,
	);
	let end = (
		b.position_x + b.size_width / 2.0,
		b.position_y + b.size_height / 2.0,
	);
	let origin_x = start.0.min(end.0);
	let origin_y = start.1.min(end.1);
	ConnectorBox {
		origin_x,
		origin_y,
		// 1-unit floor keeps the box non-degenerate when the centers share an axis
		width: (start.0 - end.0).abs().max(1.0),
		height: (start.1 - end.1).abs().max(1.0),
		local_start: (start.0 - origin_x, start.1 - origin_y),
		local_end: (end.0 - origin_x, end.1 - origin_y),
	}
}
