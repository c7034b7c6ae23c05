use leptos::ev;
use leptos::prelude::*;

use crate::components::galaxy_view::{GalaxyView, IdeaRecord, Origin};

/// Width taken by the toolbar and idea panel beside the galaxy canvas.
const SIDE_PANELS: f64 = 400.0;

/// A few cards so the galaxy has something to show on first open.
fn sample_ideas() -> Vec<IdeaRecord> {
	[
		("Weekly planning board", Origin::User),
		("What if we turned this into an action list?", Origin::Ai),
		("Customer interview notes", Origin::User),
		("What would the simplest MVP look like?", Origin::Ai),
		("Onboarding flow sketch", Origin::User),
	]
	.into_iter()
	.enumerate()
	.map(|(i, (content, origin))| IdeaRecord::new(format!("sample-{i}"), content, origin))
	.collect()
}

/// Millisecond timestamp plus list length, unique within one session.
fn next_id(len: usize) -> String {
	format!("{}-{}", js_sys::Date::now() as u64, len)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let ideas = RwSignal::new(sample_ideas());
	let (draft, set_draft) = signal(String::new());
	let show_galaxy = RwSignal::new(false);

	let add_idea = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		let content = draft.get().trim().to_string();
		if content.is_empty() {
			return;
		}
		ideas.update(|list| {
			let id = next_id(list.len());
			list.push(IdeaRecord::new(id, content, Origin::User));
		});
		set_draft.set(String::new());
	};

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

			<div class="whiteboard">
				<aside class="idea-panel">
					<h1>"Ideas"</h1>
					<form on:submit=add_idea>
						<input
							type="text"
							placeholder="Write an idea..."
							prop:value=draft
							on:input=move |ev| set_draft.set(event_target_value(&ev))
						/>
						<button type="submit">"Add"</button>
					</form>
					<div class="idea-actions">
						<button on:click=move |_| show_galaxy.update(|open| *open = !*open)>
							{move || if show_galaxy.get() { "Hide galaxy" } else { "Galaxy mode" }}
						</button>
						<button on:click=move |_| ideas.set(Vec::new())>"Clear"</button>
					</div>
					<ul class="idea-list">
						<For
							each=move || ideas.get()
							key=|idea| idea.id.clone()
							children=move |idea: IdeaRecord| {
								let id = idea.id.clone();
								let (class, author) = match idea.origin {
									Origin::Ai => ("idea idea-ai", "AI"),
									Origin::User => ("idea idea-user", "You"),
								};
								view! {
									<li class=class>
										<span class="idea-author">{author}</span>
										<p>{idea.content}</p>
										<button
											title="Delete"
											on:click=move |_| ideas.update(|list| list.retain(|i| i.id != id))
										>
											"×"
										</button>
									</li>
								}
							}
						/>
					</ul>
				</aside>

				<Show when=move || show_galaxy.get()>
					<GalaxyView
						ideas=ideas
						on_close=move |_: ()| show_galaxy.set(false)
						fullscreen=true
						inset=SIDE_PANELS
					/>
				</Show>
			</div>
		</ErrorBoundary>
	}
}
