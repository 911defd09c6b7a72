use url::form_urlencoded;

/// The parameters an authorization provider appends to the redirect fragment,
/// e.g. `#access_token=..&token_type=Bearer&expires_in=3600`.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Redirect {
	pub access_token: Option<String>,
	pub token_type: Option<String>,
	pub expires_in: Option<u64>,
	pub state: Option<String>,
	/// Set by the provider when the user denied access or the request was malformed.
	pub error: Option<String>,
}

impl Redirect {
	/// Parses a location fragment. Returns None if there is no fragment at all
	/// (empty string or a lone `#`).
	pub fn parse(fragment: &str) -> Option<Self> {
		let query = fragment.strip_prefix('#').unwrap_or(fragment);
		if query.is_empty() {
			return None;
		}
		let pairs = form_urlencoded::parse(query.as_bytes()).into_owned().collect::<Vec<_>>();
		// Only the first occurrence of a key counts, and an empty value is as good as missing.
		let first = |key: &str| {
			let (_, value) = pairs.iter().find(|(name, _)| name == key)?;
			(!value.is_empty()).then(|| value.clone())
		};
		let redirect = Self {
			access_token: first("access_token"),
			token_type: first("token_type"),
			expires_in: first("expires_in").and_then(|value| value.parse::<u64>().ok()),
			state: first("state"),
			error: first("error"),
		};
		Some(redirect)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn absent() {
		assert_eq!(Redirect::parse(""), None);
		assert_eq!(Redirect::parse("#"), None);
	}

	#[test]
	fn full_redirect() {
		let redirect =
			Redirect::parse("#access_token=BQD%2Bx_y&token_type=Bearer&expires_in=3600&state=s1").unwrap();
		assert_eq!(
			redirect,
			Redirect {
				access_token: Some("BQD+x_y".into()),
				token_type: Some("Bearer".into()),
				expires_in: Some(3600),
				state: Some("s1".into()),
				error: None,
			}
		);
	}

	#[test]
	fn without_hash_prefix() {
		let redirect = Redirect::parse("access_token=abc").unwrap();
		assert_eq!(redirect.access_token.as_deref(), Some("abc"));
	}

	#[test]
	fn provider_error() {
		let redirect = Redirect::parse("#error=access_denied&state=s1").unwrap();
		assert_eq!(redirect.access_token, None);
		assert_eq!(redirect.error.as_deref(), Some("access_denied"));
	}

	#[test]
	fn empty_token_is_missing() {
		let redirect = Redirect::parse("#access_token=&token_type=Bearer").unwrap();
		assert_eq!(redirect.access_token, None);
	}

	#[test]
	fn first_token_wins() {
		let redirect = Redirect::parse("#access_token=A&access_token=B").unwrap();
		assert_eq!(redirect.access_token.as_deref(), Some("A"));
	}

	#[test]
	fn empty_first_token_is_missing() {
		let redirect = Redirect::parse("#access_token=&access_token=B").unwrap();
		assert_eq!(redirect.access_token, None);
	}

	#[test]
	fn bad_expiry_is_ignored() {
		let redirect = Redirect::parse("#access_token=abc&expires_in=soon").unwrap();
		assert_eq!(redirect.expires_in, None);
		assert_eq!(redirect.access_token.as_deref(), Some("abc"));
	}
}
