use crate::{Auth, BrowserLocation, LocalTokenStore, SessionManager};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ProviderProps {
	/// The localStorage key the access token is kept under.
	pub storage_key: &'static str,
	pub login_url: AttrValue,
	#[prop_or_default]
	pub children: Children,
}

/// Resolves the session during the first render, so children never paint against an unresolved session.
#[function_component]
pub fn Provider(
	ProviderProps {
		storage_key,
		login_url,
		children,
	}: &ProviderProps,
) -> Html {
	let manager = use_memo(*storage_key, |key| {
		SessionManager::new(LocalTokenStore::new(*key), BrowserLocation)
	});
	let session = use_state_eq({
		let manager = manager.clone();
		move || manager.initialize()
	});
	let logout = Callback::from({
		let manager = manager.clone();
		let session = session.clone();
		move |_: ()| {
			session.set(manager.logout());
		}
	});

	let auth = Auth {
		session: (*session).clone(),
		login_url: login_url.clone(),
		logout,
	};
	html! {
		<ContextProvider<Auth> context={auth}>
			{children.clone()}
		</ContextProvider<Auth>>
	}
}
