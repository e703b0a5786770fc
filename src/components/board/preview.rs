//! Non-interactive preview raster of a board: the same extent/fit math as
//! the interactive renderer, painted onto a fixed-size canvas.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::context::MAX_RECURSE_DEPTH;
use super::layout::{fit_scale, place_card};
use super::store::BoardStore;
use super::types::{BoardData, Document, DocumentKind};

/// Output raster size.
pub const PREVIEW_WIDTH: f64 = 1200.0;
pub const PREVIEW_HEIGHT: f64 = 630.0;

const PADDING: f64 = 40.0;
const TITLE_BAND: f64 = 80.0;

const BACKDROP: &str = "#dfdfde";
const CARD_FILL: &str = "#f0f0ee";
const TEXT_COLOR: &str = "#171717";

/// One paint instruction. Planning is pure so the recursion, placement and
/// scale policy can be exercised without a canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
	Backdrop,
	CardBox {
		left: f64,
		top: f64,
		width: f64,
		height: f64,
		fill: String,
	},
	Label {
		text: String,
		x: f64,
		y: f64,
		size: f64,
	},
	Placeholder {
		left: f64,
		top: f64,
		width: f64,
		height: f64,
	},
	Title {
		text: String,
	},
	NotFound,
}

#[derive(Clone, Copy)]
struct Frame {
	left: f64,
	top: f64,
	width: f64,
	height: f64,
}

/// Plan the paint operations for one document id, or the not-found fallback
/// when the id is absent from the graph.
pub fn plan_preview(data: &BoardData, id: &str) -> Vec<PaintOp> {
	let mut ops = vec![PaintOp::Backdrop];
	let Some(doc) = data.documents.get(id) else {
		ops.push(PaintOp::NotFound);
		return ops;
	};
	let frame = Frame {
		left: PADDING,
		top: PADDING,
		width: PREVIEW_WIDTH - 2.0 * PADDING,
		height: PREVIEW_HEIGHT - PADDING - TITLE_BAND,
	};
	plan_board(data, doc, frame, 0, &mut ops);
	ops.push(PaintOp::Title {
		text: doc
			.label
			.clone()
			.unwrap_or_else(|| "Untitled Board".to_string()),
	});
	ops
}

fn plan_board(data: &BoardData, doc: &Document, frame: Frame, depth: usize, ops: &mut Vec<PaintOp>) {
	let scale = fit_scale(doc, frame.width, frame.height);
	for card in &doc.cards {
		let Some(info) = data.documents.get(&card.document_id) else {
			continue;
		};
		let rect = place_card(card);
		let child = Frame {
			left: frame.left + rect.left * scale,
			top: frame.top + rect.top * scale,
			width: rect.width * scale,
			height: rect.height * scale,
		};
		let fill = info.color.clone().unwrap_or_else(|| CARD_FILL.to_string());
		match info.kind {
			DocumentKind::Board => {
				if depth < MAX_RECURSE_DEPTH {
					ops.push(PaintOp::CardBox {
						left: child.left,
						top: child.top,
						width: child.width,
						height: child.height,
						fill,
					});
					plan_board(data, info, child, depth + 1, ops);
				} else {
					ops.push(PaintOp::Placeholder {
						left: child.left,
						top: child.top,
						width: child.width,
						height: child.height,
					});
				}
			}
			_ => {
				ops.push(PaintOp::CardBox {
					left: child.left,
					top: child.top,
					width: child.width,
					height: child.height,
					fill,
				});
				if let Some(label) = info.label.clone() {
					ops.push(PaintOp::Label {
						text: label,
						x: child.left + 8.0,
						y: child.top + 18.0,
						size: (14.0 * scale).max(6.0),
					});
				}
			}
		}
	}
}

/// Replay a plan onto a 2d canvas context.
pub fn draw_preview(ops: &[PaintOp], ctx: &CanvasRenderingContext2d) {
	for op in ops {
		match op {
			PaintOp::Backdrop => {
				ctx.set_fill_style_str(BACKDROP);
				ctx.fill_rect(0.0, 0.0, PREVIEW_WIDTH, PREVIEW_HEIGHT);
			}
			PaintOp::CardBox {
				left,
				top,
				width,
				height,
				fill,
			} => {
				ctx.set_fill_style_str(fill);
				ctx.fill_rect(*left, *top, *width, *height);
				ctx.set_stroke_style_str("rgba(0, 0, 0, 0.1)");
				ctx.set_line_width(1.0);
				ctx.stroke_rect(*left, *top, *width, *height);
			}
			PaintOp::Label { text, x, y, size } => {
				ctx.set_fill_style_str(TEXT_COLOR);
				ctx.set_text_align("left");
				ctx.set_font(&format!("{size}px sans-serif"));
				let _ = ctx.fill_text(text, *x, *y);
			}
			PaintOp::Placeholder {
				left,
				top,
				width,
				height,
			} => {
				ctx.set_stroke_style_str("rgba(23, 23, 23, 0.25)");
				ctx.set_line_width(1.0);
				let _ = ctx.set_line_dash(&js_sys::Array::of2(
					&JsValue::from_f64(6.0),
					&JsValue::from_f64(4.0),
				));
				ctx.stroke_rect(*left, *top, *width, *height);
				let _ = ctx.set_line_dash(&js_sys::Array::new());
			}
			PaintOp::Title { text } => {
				ctx.set_fill_style_str(TEXT_COLOR);
				ctx.set_text_align("center");
				ctx.set_font("32px sans-serif");
				let _ = ctx.fill_text(text, PREVIEW_WIDTH / 2.0, PREVIEW_HEIGHT - TITLE_BAND / 2.0);
			}
			PaintOp::NotFound => {
				ctx.set_fill_style_str(TEXT_COLOR);
				ctx.set_text_align("center");
				ctx.set_font("48px sans-serif");
				let _ = ctx.fill_text("Board Not Found", PREVIEW_WIDTH / 2.0, PREVIEW_HEIGHT / 2.0);
			}
		}
	}
}

/// Canvas host for the static preview of one document.
#[component]
pub fn PreviewCanvas(#[prop(into)] id: Signal<String>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let store = BoardStore::expect();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(state) = store.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(PREVIEW_WIDTH as u32);
		canvas.set_height(PREVIEW_HEIGHT as u32);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let target = state.route_target(&id.get());
		let ops = plan_preview(&state.data, &target);
		if matches!(ops.last(), Some(PaintOp::NotFound)) {
			warn!("no document {target:?} to preview");
		}
		draw_preview(&ops, &ctx);
	});

	view! { <canvas node_ref=canvas_ref class="board-preview-canvas" /> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_document_plans_fallback() {
		let data: BoardData = serde_json::from_str(r#"{"root": "r", "documents": {}}"#).unwrap();
		let ops = plan_preview(&data, "r");
		assert_eq!(ops, vec![PaintOp::Backdrop, PaintOp::NotFound]);
	}

	#[test]
	fn self_referential_board_terminates_with_placeholder() {
		let data: BoardData = serde_json::from_str(
			r#"{
				"root": "a",
				"documents": {
					"a": {"type": "board", "label": "A", "cards": [
						{"card_id": "c", "document_id": "a",
						 "position_x": 0, "position_y": 0,
						 "size_width": 100, "size_height": 100, "z": 1}
					]}
				}
			}"#,
		)
		.unwrap();
		let ops = plan_preview(&data, "a");
		let boxes = ops
			.iter()
			.filter(|op| matches!(op, PaintOp::CardBox { .. }))
			.count();
		let placeholders = ops
			.iter()
			.filter(|op| matches!(op, PaintOp::Placeholder { .. }))
			.count();
		assert_eq!(boxes, MAX_RECURSE_DEPTH);
		assert_eq!(placeholders, 1);
		assert!(matches!(ops.last(), Some(PaintOp::Title { .. })));
	}

	#[test]
	fn leaf_cards_plan_scaled_box_and_label() {
		let data: BoardData = serde_json::from_str(
			r#"{
				"root": "b",
				"documents": {
					"b": {"type": "board", "label": "B", "cards": [
						{"card_id": "c", "document_id": "note",
						 "position_x": 100, "position_y": 50,
						 "size_width": 50, "size_height": 50, "z": 1}
					]},
					"note": {"type": "text", "label": "Note"}
				}
			}"#,
		)
		.unwrap();
		let ops = plan_preview(&data, "b");
		// extent 150x100 into 1120x510: min-axis fit caps at 1, so scale 0.9
		let Some(PaintOp::CardBox {
			left, top, width, ..
		}) = ops.get(1)
		else {
			panic!("expected a card box, got {:?}", ops.get(1));
		};
		assert!((left - (PADDING + 100.0 * 0.9)).abs() < 1e-9);
		assert!((top - (PADDING + 50.0 * 0.9)).abs() < 1e-9);
		assert!((width - 45.0).abs() < 1e-9);
		assert!(
			ops.iter()
				.any(|op| matches!(op, PaintOp::Label { text, .. } if text == "Note"))
		);
	}

	#[test]
	fn dangling_card_reference_is_omitted() {
		let data: BoardData = serde_json::from_str(
			r#"{
				"root": "b",
				"documents": {
					"b": {"type": "board", "cards": [
						{"card_id": "c", "document_id": "gone"}
					]}
				}
			}"#,
		)
		.unwrap();
		let ops = plan_preview(&data, "b");
		assert_eq!(ops.len(), 2); // backdrop + title, nothing for the card
		assert!(matches!(ops.last(), Some(PaintOp::Title { .. })));
	}
}
