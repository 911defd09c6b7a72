use wasm_bindgen::prelude::{Closure, JsCast};
use web_sys::MediaQueryListEvent;
use yew::prelude::*;

fn query_matches(query: &str) -> bool {
	match gloo_utils::window().match_media(query) {
		Ok(Some(list)) => list.matches(),
		_ => false,
	}
}

/// Tracks whether the css media query currently matches, updating when the viewport changes.
#[hook]
pub fn use_media_query(query: impl Into<String>) -> bool {
	let query: String = query.into();
	let matches = use_state_eq({
		let query = query.clone();
		move || query_matches(&query)
	});

	use_effect_with(query, {
		let matches = matches.clone();
		move |query: &String| {
			let on_change = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
				matches.set(event.matches());
			});
			let list = gloo_utils::window().match_media(query).ok().flatten();
			if let Some(list) = &list {
				list.set_onchange(Some(on_change.as_ref().unchecked_ref()));
			}
			move || {
				if let Some(list) = list {
					list.set_onchange(None);
				}
				drop(on_change);
			}
		}
	});

	*matches
}
