use crate::{components::use_media_query, config};
use yew::prelude::*;

/// Page layout, picked from the viewport width.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
	Desktop,
	Mobile,
}

impl Kind {
	/// The css query which matches viewports wide enough for the desktop layout.
	pub fn desktop_query(min_width: usize) -> String {
		format!("(min-width: {min_width}px)")
	}

	pub fn from_desktop_match(is_desktop: bool) -> Self {
		match is_desktop {
			true => Self::Desktop,
			false => Self::Mobile,
		}
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ProviderProps {
	/// Narrowest viewport (px) which gets the desktop layout.
	#[prop_or(config::MOBILE_THRESHOLD)]
	pub min_desktop_width: usize,
	#[prop_or_default]
	pub children: Children,
}

#[function_component]
pub fn Provider(
	ProviderProps {
		min_desktop_width,
		children,
	}: &ProviderProps,
) -> Html {
	let is_desktop = use_media_query(Kind::desktop_query(*min_desktop_width));
	html! {
		<ContextProvider<Kind> context={Kind::from_desktop_match(is_desktop)}>
			{children.clone()}
		</ContextProvider<Kind>>
	}
}

/// Layout of the enclosing [`Provider`], desktop when there is none.
#[hook]
pub fn use_layout() -> Kind {
	use_context::<Kind>().unwrap_or(Kind::Desktop)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn breakpoint_query() {
		assert_eq!(Kind::desktop_query(config::MOBILE_THRESHOLD), "(min-width: 768px)");
	}

	#[test]
	fn layout_from_match() {
		assert_eq!(Kind::from_desktop_match(true), Kind::Desktop);
		assert_eq!(Kind::from_desktop_match(false), Kind::Mobile);
	}
}
