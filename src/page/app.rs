use crate::{components::mobile, config, page::Dashboard};
use implicit_grant::{Auth, Session};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn App() -> Html {
	let login_url = use_memo((), |_| AttrValue::from(config::login_url()));
	html! {
		<YewduxRoot>
			<implicit_grant::Provider storage_key={config::STORAGE_KEY} login_url={(*login_url).clone()}>
				<mobile::Provider>
					<SessionGate />
				</mobile::Provider>
			</implicit_grant::Provider>
		</YewduxRoot>
	}
}

/// Only an authenticated session reaches the dashboard.
#[function_component]
fn SessionGate() -> Html {
	let auth = use_context::<Auth>().unwrap();
	match auth.session() {
		Session::Failed { error } => html! {
			<div class="d-flex justify-content-center align-items-center vh-100">
				<p class="fs-5" role="alert">{error.to_string()}</p>
			</div>
		},
		Session::Pending => html! {
			<div class="d-flex justify-content-center align-items-center vh-100">
				<a class="btn btn-success btn-lg rounded-pill px-4" href={auth.login_url().clone()}>
					{"Log in with Spotify"}
				</a>
			</div>
		},
		Session::Authenticated { token } => html! {
			<Dashboard token={AttrValue::from(token.clone())} />
		},
	}
}
