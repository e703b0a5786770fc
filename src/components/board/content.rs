//! Leaf-content renderers (image, text, url, pdf, unknown), ink overlays,
//! and the process-wide content cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::context::RenderContext;
use super::types::{Document, DocumentKind, InkModel};

/// Base path under which the export's static files are served.
pub const FILES_BASE: &str = "/board/files";

/// Text bodies are only fetched this deep; further preview levels render the
/// label instead of the body.
const TEXT_FETCH_DEPTH: usize = 1;

pub(crate) fn file_url(name: &str) -> String {
	format!("{FILES_BASE}/{name}")
}

/// Fetched leaf bodies keyed by (source reference, recursion depth). The
/// snapshot is immutable, so entries are never evicted.
#[derive(Clone, Default)]
pub struct ContentCache(Arc<Mutex<HashMap<(String, usize), String>>>);

impl ContentCache {
	pub fn get(&self, reference: &str, depth: usize) -> Option<String> {
		self.0.lock().unwrap().get(&(reference.to_string(), depth)).cloned()
	}

	pub fn insert(&self, reference: &str, depth: usize, body: String) {
		self.0.lock().unwrap().insert((reference.to_string(), depth), body);
	}
}

/// Fetch a relative URL as text via the browser fetch API.
pub(crate) async fn fetch_text(url: &str) -> Result<String, String> {
	let window = web_sys::window().ok_or("no window")?;
	let resp = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|err| format!("{err:?}"))?;
	let resp: Response = resp.dyn_into().map_err(|_| "not a Response".to_string())?;
	if !resp.ok() {
		return Err(format!("HTTP {}", resp.status()));
	}
	let body = JsFuture::from(resp.text().map_err(|err| format!("{err:?}"))?)
		.await
		.map_err(|err| format!("{err:?}"))?;
	body.as_string().ok_or_else(|| "body is not text".to_string())
}

/// Dispatch one leaf document to its type-specific renderer. Boards never
/// reach this; the card renderer expands them inline.
#[component]
pub fn LeafContent(doc: Document, ctx: RenderContext) -> impl IntoView {
	match doc.kind {
		DocumentKind::Image => view! { <ImageContent doc ctx /> }.into_any(),
		DocumentKind::Text => view! { <TextContent doc ctx /> }.into_any(),
		DocumentKind::Url => view! { <UrlContent doc /> }.into_any(),
		DocumentKind::Pdf => view! { <PdfContent doc ctx /> }.into_any(),
		DocumentKind::Board => ().into_any(),
		DocumentKind::Unknown => view! { <UnknownContent doc /> }.into_any(),
	}
}

#[component]
fn ImageContent(doc: Document, ctx: RenderContext) -> impl IntoView {
	let Some(file) = doc.original_file.clone() else {
		return ().into_any();
	};
	view! {
		<img
			class="leaf-image"
			style=nested_fill_style(&ctx)
			src=file_url(&file)
			alt=doc.label.clone().unwrap_or_else(|| "Image".to_string())
		/>
	}
	.into_any()
}

#[component]
fn TextContent(doc: Document, ctx: RenderContext) -> impl IntoView {
	let body = RwSignal::new(None::<String>);
	match doc.original_file.clone() {
		Some(file) if ctx.depth <= TEXT_FETCH_DEPTH => {
			let cache = expect_context::<ContentCache>();
			let depth = ctx.depth;
			if let Some(hit) = cache.get(&file, depth) {
				body.set(Some(hit));
			} else {
				// Fire-and-forget: the placeholder stays up until this
				// resolves, indefinitely on failure.
				spawn_local(async move {
					match fetch_text(&file_url(&file)).await {
						Ok(text) => {
							cache.insert(&file, depth, text.clone());
							body.set(Some(text));
						}
						Err(err) => error!("text fetch failed for {file}: {err}"),
					}
				});
			}
		}
		_ => body.set(doc.label.clone()),
	}
	view! { <div class="leaf-text">{move || body.get()}</div> }
}

#[component]
fn PdfContent(doc: Document, ctx: RenderContext) -> impl IntoView {
	let Some(file) = doc.original_file.clone() else {
		return ().into_any();
	};
	// The export ships pre-rasterized pages; page 0 is the preview.
	view! {
		<img
			class="leaf-pdf"
			style=nested_fill_style(&ctx)
			src=format!("{}-0.png", file_url(&file))
			alt=doc.label.clone().unwrap_or_else(|| "PDF Preview".to_string())
		/>
	}
	.into_any()
}

#[component]
fn UrlContent(doc: Document) -> impl IntoView {
	let Some(url) = doc.url.clone() else {
		return ().into_any();
	};
	let text = doc
		.label
		.clone()
		.or_else(|| doc.title.clone())
		.unwrap_or_else(|| url.clone());
	view! {
		<a class="leaf-link" href=url target="_blank" rel="noopener noreferrer">
			{text}
		</a>
	}
	.into_any()
}

/// Debug affordance for unrecognized document types: a raw structural dump.
#[component]
fn UnknownContent(doc: Document) -> impl IntoView {
	view! { <pre class="leaf-debug">{format!("{doc:#?}")}</pre> }
}

/// Ink traces overlaid on a board surface; never intercepts the pointer.
#[component]
pub fn InkOverlay(inks: HashMap<String, InkModel>) -> impl IntoView {
	let mut entries: Vec<(String, InkModel)> = inks.into_iter().collect();
	entries.sort_by(|a, b| a.0.cmp(&b.0));
	view! {
		<div class="ink-overlay" style="position:absolute;inset:0;pointer-events:none;">
			{entries
				.into_iter()
				.filter_map(|(_, ink)| ink.original_file)
				.map(|file| {
					view! {
						<img
							class="ink-trace"
							style="position:absolute;inset:0;width:100%;height:100%;"
							src=file_url(&file)
						/>
					}
				})
				.collect_view()}
		</div>
	}
}

// Nested renders fill their card box; the active view keeps natural sizing.
fn nested_fill_style(ctx: &RenderContext) -> &'static str {
	if ctx.depth == 0 {
		""
	} else {
		"width:100%;height:100%;object-fit:contain;"
	}
}
