use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::board::PreviewCanvas;

/// Non-interactive raster preview of one document.
#[component]
pub fn Preview() -> impl IntoView {
	let params = use_params_map();
	let id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));

	view! {
		<main class="preview-page">
			<PreviewCanvas id />
		</main>
	}
}
