use leptos::prelude::*;

use crate::components::board::BoardView;

/// Default Home Page: the export's root board.
#[component]
pub fn Home() -> impl IntoView {
	let id = Signal::derive(String::new);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="board-page">
				<BoardView id />
			</main>
		</ErrorBoundary>
	}
}
