use crate::{
	components::{
		mobile::{self, Kind},
		tabs::{Discovery, Playlists, RecentlyPlayed, Statistics},
		TabNav,
	},
	view::{Tab, ViewState},
};
use implicit_grant::Auth;
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct DashboardProps {
	pub token: AttrValue,
}

#[function_component]
pub fn Dashboard(DashboardProps { token }: &DashboardProps) -> Html {
	let auth = use_context::<Auth>().unwrap();
	let (view, dispatch) = use_store::<ViewState>();
	let layout = mobile::use_layout();

	let select_tab = dispatch.reduce_mut_callback_with(|state, tab: Tab| state.select_tab(tab));
	let select_from_menu = dispatch.reduce_mut_callback_with(|state, tab: Tab| state.select_from_menu(tab));
	let toggle_menu = dispatch.reduce_mut_callback(|state| state.toggle_menu());
	let logout = auth.logout_callback().reform(|_: MouseEvent| ());

	let navigation = match layout {
		Kind::Desktop => html! {<>
			<TabNav active={view.active_tab()} onselect={select_tab} />
			<button class="btn btn-danger" type="button" onclick={logout.clone()}>{"Log out"}</button>
		</>},
		Kind::Mobile => html! {
			<button
				class="navbar-toggler" type="button"
				aria-controls="navMenu" aria-expanded={view.is_menu_open().to_string()} aria-label="Toggle navigation"
				onclick={toggle_menu}
			>
				<span class="navbar-toggler-icon"></span>
			</button>
		},
	};

	let menu = (layout == Kind::Mobile && view.is_menu_open()).then(|| {
		html! {
			<div id="navMenu" class="container-fluid mt-3 p-3 rounded bg-body-secondary">
				<TabNav active={view.active_tab()} onselect={select_from_menu} column={true}>
					<li class="nav-item">
						<button class="nav-link w-100 text-start" type="button" onclick={logout}>{"Log out"}</button>
					</li>
				</TabNav>
			</div>
		}
	});

	let content = match view.active_tab() {
		Tab::Playlists => html!(<Playlists token={token.clone()} />),
		Tab::Discovery => html!(<Discovery token={token.clone()} />),
		Tab::RecentlyPlayed => html!(<RecentlyPlayed token={token.clone()} />),
		Tab::Statistics => html!(<Statistics token={token.clone()} />),
	};

	html! {<>
		<header>
			<nav class="navbar sticky-top bg-body-tertiary shadow-sm">
				<div class="container-fluid">
					<span class="navbar-brand">{"Spotify Dashboard"}</span>
					<div class="d-flex align-items-center gap-3">
						{navigation}
					</div>
				</div>
				{menu}
			</nav>
		</header>
		<main class="container mt-4 p-3">
			{content}
		</main>
	</>}
}
