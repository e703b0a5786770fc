use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::board::BoardView;

/// A document addressed by the trailing path segment.
#[component]
pub fn BoardPage() -> impl IntoView {
	let params = use_params_map();
	let id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));

	view! {
		<main class="board-page">
			<BoardView id />
		</main>
	}
}
