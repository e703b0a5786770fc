use leptos::prelude::*;
use leptos_router::components::A;

/// 404 fallback.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<h1>"Page not found"</h1>
			<p>
				<A href="/">"Back to the board"</A>
			</p>
		</main>
	}
}
