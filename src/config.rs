use implicit_grant::{url::ParseError, AuthorizeRequest};

/// Spotify application id, provided at build time.
pub static CLIENT_ID: &str = match option_env!("SPOTIFY_CLIENT_ID") {
	Some(id) => id,
	None => "",
};

/// Where the provider sends the user back to. Defaults to the page origin when not set at build time.
pub static REDIRECT_URI: Option<&str> = option_env!("SPOTIFY_REDIRECT_URI");

pub static SCOPES: &[&str] = &[
	"user-read-private",
	"user-read-email",
	"playlist-read-private",
	"user-top-read",
	"user-read-recently-played",
];

/// localStorage key of the persisted access token.
pub static STORAGE_KEY: &str = "spotifyAccessToken";

/// Viewports narrower than this (in px) use the collapsible navigation menu.
pub static MOBILE_THRESHOLD: usize = 768;

pub fn login_url_for(redirect_uri: &str) -> Result<String, ParseError> {
	if CLIENT_ID.is_empty() {
		log::warn!(target: "auth", "SPOTIFY_CLIENT_ID was not set at build time");
	}
	let url = AuthorizeRequest::new(CLIENT_ID, redirect_uri)
		.with_scopes(SCOPES)
		.to_url()?;
	Ok(url.to_string())
}

/// The login link target for the running page.
pub fn login_url() -> String {
	let redirect_uri = match REDIRECT_URI {
		Some(uri) => uri.to_owned(),
		None => {
			let origin = gloo_utils::window().location().origin().unwrap_or_default();
			format!("{origin}/")
		}
	};
	match login_url_for(&redirect_uri) {
		Ok(url) => url,
		Err(err) => {
			log::error!(target: "auth", "Failed to build login url: {err}");
			"#".to_owned()
		}
	}
}
