use url::Url;

pub static SPOTIFY_AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";

/// Builds the address of the provider's authorization endpoint for an implicit grant
/// (`response_type=token`). The provider redirects back to `redirect_uri` with the token in the fragment.
#[derive(Clone, PartialEq, Debug)]
pub struct AuthorizeRequest<'a> {
	pub endpoint: &'a str,
	pub client_id: &'a str,
	pub redirect_uri: &'a str,
	pub scopes: &'a [&'a str],
	pub state: Option<&'a str>,
	pub show_dialog: bool,
}

impl<'a> AuthorizeRequest<'a> {
	pub fn new(client_id: &'a str, redirect_uri: &'a str) -> Self {
		Self {
			endpoint: SPOTIFY_AUTHORIZE_URL,
			client_id,
			redirect_uri,
			scopes: &[],
			state: None,
			show_dialog: false,
		}
	}

	pub fn with_scopes(mut self, scopes: &'a [&'a str]) -> Self {
		self.scopes = scopes;
		self
	}

	pub fn with_state(mut self, state: &'a str) -> Self {
		self.state = Some(state);
		self
	}

	pub fn with_dialog(mut self, show_dialog: bool) -> Self {
		self.show_dialog = show_dialog;
		self
	}

	pub fn to_url(&self) -> Result<Url, url::ParseError> {
		let mut url = Url::parse(self.endpoint)?;
		{
			let mut query = url.query_pairs_mut();
			query
				.append_pair("client_id", self.client_id)
				.append_pair("response_type", "token")
				.append_pair("redirect_uri", self.redirect_uri);
			if !self.scopes.is_empty() {
				query.append_pair("scope", &self.scopes.join(" "));
			}
			if let Some(state) = self.state {
				query.append_pair("state", state);
			}
			if self.show_dialog {
				query.append_pair("show_dialog", "true");
			}
		}
		Ok(url)
	}
}
