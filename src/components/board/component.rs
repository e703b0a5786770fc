use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use log::{debug, warn};

use super::content::{InkOverlay, LeafContent};
use super::context::RenderContext;
use super::index::resolve_breadcrumbs;
use super::layout::{ConnectorBox, connector_box, content_extent, fit_scale, place_card};
use super::store::{BoardState, BoardStore};
use super::types::{Card, Document, DocumentKind};

/// Active view for one route target: navigation chrome wrapped around the
/// recursive render. Rebuilds its render context on every navigation and
/// whenever the snapshot arrives.
#[component]
pub fn BoardView(#[prop(into)] id: Signal<String>) -> impl IntoView {
	let store = BoardStore::expect();
	view! {
		{move || {
			let Some(state) = store.get() else {
				return view! {
					<div class="board-loading">
						<p>"Loading board…"</p>
					</div>
				}
				.into_any();
			};
			let target = state.route_target(&id.get());
			let Some(doc) = state.document(&target).cloned() else {
				warn!("no document {target:?} in snapshot");
				return view! {
					<div class="board-missing">
						<p>"No board data available"</p>
					</div>
				}
				.into_any();
			};
			let ctx = RenderContext::root(target);
			view! {
				<WithChrome state=state.clone() ctx=ctx.clone()>
					<DocumentNode state=state.clone() doc=doc.clone() ctx=ctx.clone() />
				</WithChrome>
			}
			.into_any()
		}}
	}
}

/// Explicit chrome composition: breadcrumbs and the parent link are painted
/// by this one wrapper around the active render, never by the per-type
/// renderers themselves. The root view and nested previews get bare content.
#[component]
fn WithChrome(state: Arc<BoardState>, ctx: RenderContext, children: Children) -> impl IntoView {
	let show = ctx.shows_chrome() && ctx.id != state.data.root;
	let chrome = show.then(|| {
		let crumbs = resolve_breadcrumbs(&ctx.id, &state.ancestors, &state.data);
		let count = crumbs.len();
		let parent_href = state.ancestors.parent_of(&ctx.id).map(|parent| {
			if parent == state.data.root {
				"/".to_string()
			} else {
				format!("/{parent}")
			}
		});
		view! {
			<nav class="board-breadcrumbs">
				{crumbs
					.into_iter()
					.enumerate()
					.map(|(i, crumb)| {
						if i + 1 == count {
							view! { <span class="crumb crumb-current">{crumb.label}</span> }
								.into_any()
						} else {
							view! {
								<span class="crumb">
									<A href=crumb.path>{crumb.label}</A>
								</span>
							}
							.into_any()
						}
					})
					.collect_view()}
			</nav>
			{parent_href
				.map(|href| {
					view! {
						<div class="parent-link">
							<A href=href>"↑ Parent"</A>
						</div>
					}
				})}
		}
	});
	view! {
		<div class="board-frame">
			{chrome}
			{children()}
		</div>
	}
}

/// Dispatch one document to the board surface or a leaf renderer.
#[component]
pub fn DocumentNode(state: Arc<BoardState>, doc: Document, ctx: RenderContext) -> impl IntoView {
	if doc.is_board() {
		view! { <BoardSurface state doc ctx /> }.into_any()
	} else {
		view! { <LeafContent doc ctx /> }.into_any()
	}
}

/// One board's surface: connectors under the cards, cards resolved purely by
/// z-order, ink traces on top, and the title heading on the active view.
#[component]
fn BoardSurface(state: Arc<BoardState>, doc: Document, ctx: RenderContext) -> impl IntoView {
	let mut style = if ctx.shows_chrome() {
		"position:relative;min-height:100vh;".to_string()
	} else {
		"position:relative;width:100%;height:100%;".to_string()
	};
	if let Some(color) = doc.color.clone().or_else(|| ctx.color.clone()) {
		style.push_str(&format!("background:{color};"));
	}

	let connectors: Vec<ConnectorBox> = doc
		.connections
		.iter()
		.filter_map(|conn| {
			let a = doc.cards.iter().find(|c| c.card_id == conn.0);
			let b = doc.cards.iter().find(|c| c.card_id == conn.1);
			match (a, b) {
				(Some(a), Some(b)) => Some(connector_box(a, b)),
				_ => {
					debug!("connector {:?} -> {:?} has a missing endpoint", conn.0, conn.1);
					None
				}
			}
		})
		.collect();

	let title = ctx
		.shows_chrome()
		.then(|| doc.label.clone())
		.flatten()
		.map(|label| view! { <h1 class="board-title">{label}</h1> });

	view! {
		<div class="board-surface" style=style>
			{connectors
				.into_iter()
				.map(|line| view! { <ConnectorLine line /> })
				.collect_view()}
			{doc.cards
				.clone()
				.into_iter()
				.map(|card| view! { <CardNode state=state.clone() card ctx=ctx.clone() /> })
				.collect_view()}
			<InkOverlay inks=doc.ink_models.clone() />
			{title}
		</div>
	}
}

/// One card: absolute placement, click navigation on the active board, and
/// either leaf content or a scaled-down nested board preview. The depth
/// governor turns boards past the cap into empty placeholders.
#[component]
fn CardNode(state: Arc<BoardState>, card: Card, ctx: RenderContext) -> impl IntoView {
	let Some(target) = state.document(&card.document_id).cloned() else {
		// Dangling reference: the card is omitted, siblings are unaffected.
		debug!(
			"card {:?} references missing document {:?}",
			card.card_id, card.document_id
		);
		return ().into_any();
	};

	let rect = place_card(&card);
	let nav_enabled = ctx.interactive() && target.kind != DocumentKind::Url;
	let navigate = use_navigate();
	let dest = card.document_id.clone();
	let on_click = move |_| {
		if nav_enabled {
			navigate(&format!("/{dest}"), NavigateOptions::default());
		}
	};

	let class = if nav_enabled {
		"board-card board-card-clickable"
	} else {
		"board-card"
	};
	let mut style = format!(
		"position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};overflow:hidden;",
		rect.left, rect.top, rect.width, rect.height, rect.z_index
	);
	if let Some(color) = target.color.as_ref() {
		style.push_str(&format!("background:{color};"));
	}

	// url cards are excluded from the label overlay; their anchor is the label
	let overlay = (target.kind != DocumentKind::Url)
		.then(|| target.label.clone())
		.flatten()
		.map(|label| view! { <div class="card-label">{label}</div> });

	let inner = if target.is_board() {
		if ctx.can_expand() {
			let child_ctx = ctx.descend(card.document_id.clone(), target.color.clone());
			let scale = fit_scale(&target, rect.width, rect.height);
			let extent = content_extent(&target);
			view! {
				<div
					class="board-card-preview"
					style=format!(
						"position:absolute;left:0;top:0;transform:scale({scale});transform-origin:0 0;width:{}px;height:{}px;",
						extent.width,
						extent.height,
					)
				>
					<BoardSurface state=state.clone() doc=target.clone() ctx=child_ctx />
				</div>
			}
			.into_any()
		} else {
			// Depth cap reached: an empty placeholder instead of recursing.
			view! { <div class="board-card-preview board-card-capped"></div> }.into_any()
		}
	} else {
		view! {
			<LeafContent doc=target.clone() ctx=ctx.descend(card.document_id.clone(), None) />
		}
		.into_any()
	};

	view! {
		<div class=class style=style on:click=on_click>
			{inner}
			{overlay}
		</div>
	}
	.into_any()
}

/// Connector line from the center of one card to the center of another,
/// drawn inside its own minimal bounding box.
#[component]
fn ConnectorLine(line: ConnectorBox) -> impl IntoView {
	view! {
		<svg
			class="board-connector"
			style=format!(
				"position:absolute;left:{}px;top:{}px;pointer-events:none;",
				line.origin_x,
				line.origin_y,
			)
			width=line.width
			height=line.height
		>
			<line
				x1=line.local_start.0
				y1=line.local_start.1
				x2=line.local_end.0
				y2=line.local_end.1
				stroke="rgba(100, 180, 255, 0.8)"
				stroke-width="1.5"
				stroke-dasharray="8 4"
			/>
		</svg>
	}
}
