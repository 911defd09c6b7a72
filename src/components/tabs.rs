//! Placeholder views for each tab. Each only needs the access token to fetch its own data.
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TabContentProps {
	pub token: AttrValue,
}

#[derive(Clone, PartialEq, Properties)]
struct PanelProps {
	id: &'static str,
	title: &'static str,
	description: &'static str,
}

#[function_component]
fn Panel(PanelProps { id, title, description }: &PanelProps) -> Html {
	html! {
		<section class="card" role="tabpanel" id={*id} aria-labelledby={format!("tab-{id}")}>
			<div class="card-body">
				<h2 class="card-title h4">{*title}</h2>
				<p class="card-text text-body-secondary">{*description}</p>
			</div>
		</section>
	}
}

#[function_component]
pub fn Playlists(TabContentProps { token: _ }: &TabContentProps) -> Html {
	html!(<Panel id="playlists" title="Playlists" description="Your saved and followed playlists." />)
}

#[function_component]
pub fn Discovery(TabContentProps { token: _ }: &TabContentProps) -> Html {
	html!(<Panel id="discovery" title="Discovery" description="Recommendations based on your top artists." />)
}

#[function_component]
pub fn RecentlyPlayed(TabContentProps { token: _ }: &TabContentProps) -> Html {
	html!(<Panel id="recentlyplayed" title="Recently Played" description="The tracks you listened to most recently." />)
}

#[function_component]
pub fn Statistics(TabContentProps { token: _ }: &TabContentProps) -> Html {
	html!(<Panel id="statistics" title="Stats" description="Your top tracks and artists over time." />)
}
