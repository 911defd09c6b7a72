use crate::view::Tab;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TabNavProps {
	pub active: Tab,
	pub onselect: Callback<Tab>,
	/// True for the stacked list in the narrow-layout menu.
	#[prop_or_default]
	pub column: bool,
	#[prop_or_default]
	pub children: Children,
}

/// One button per [`Tab`], the active one highlighted.
#[function_component]
pub fn TabNav(
	TabNavProps {
		active,
		onselect,
		column,
		children,
	}: &TabNavProps,
) -> Html {
	let nav_classes = classes!(
		"nav",
		"nav-pills",
		match *column {
			false => "flex-row",
			true => "flex-column",
		}
	);
	let nav_items = Tab::all()
		.map(|tab| {
			let mut classes = classes!("nav-link");
			if *column {
				classes.push("w-100 text-start");
			}
			if tab == *active {
				classes.push("active");
			}
			let onclick = onselect.reform(move |_: MouseEvent| tab);
			html! {
				<li class="nav-item" role="presentation">
					<button
						class={classes} type="button" role="tab"
						id={format!("tab-{}", tab.id())}
						aria-selected={(tab == *active).to_string()}
						{onclick}
					>
						{tab.display_name()}
					</button>
				</li>
			}
		})
		.collect::<Vec<_>>();

	html! {
		<ul class={nav_classes} role="tablist">
			{nav_items}
			{children.clone()}
		</ul>
	}
}
