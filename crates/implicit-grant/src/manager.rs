use crate::{Location, Redirect, Session, SessionError, TokenStore};

/// The outcome of resolving a session from the persisted token and the redirect fragment,
/// along with the side effects the caller must apply.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Resolution {
	pub session: Session,
	/// A freshly received token which must be written to durable storage.
	pub persist: Option<String>,
	/// True if the fragment was consumed and must be removed from the address.
	pub strip_fragment: bool,
}

/// Resolves the session for this load. A stored token always wins, the fragment is not even parsed.
pub fn resolve(stored: Option<&str>, fragment: &str) -> Resolution {
	if let Some(token) = stored.filter(|token| !token.is_empty()) {
		return Resolution {
			session: Session::Authenticated {
				token: token.to_owned(),
			},
			persist: None,
			strip_fragment: false,
		};
	}

	let Some(redirect) = Redirect::parse(fragment) else {
		return Resolution {
			session: Session::Pending,
			persist: None,
			strip_fragment: false,
		};
	};

	match redirect.access_token {
		Some(token) => {
			if let Some(expires_in) = redirect.expires_in {
				log::debug!(target: "auth", "Received access token, expires in {expires_in}s");
			}
			Resolution {
				session: Session::Authenticated { token: token.clone() },
				persist: Some(token),
				strip_fragment: true,
			}
		}
		None => {
			if let Some(reason) = &redirect.error {
				log::error!(target: "auth", "Authorization provider reported {reason:?}");
			}
			Resolution {
				session: Session::Failed {
					error: SessionError::TokenMissing,
				},
				persist: None,
				strip_fragment: false,
			}
		}
	}
}

/// Owns the access-token lifecycle: resolves it once per load and clears it on logout.
pub struct SessionManager<S, L> {
	store: S,
	location: L,
}

impl<S: TokenStore, L: Location> SessionManager<S, L> {
	pub fn new(store: S, location: L) -> Self {
		Self { store, location }
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn location(&self) -> &L {
		&self.location
	}

	pub fn initialize(&self) -> Session {
		let stored = self.store.load();
		let fragment = match stored {
			Some(_) => String::new(),
			None => self.location.fragment(),
		};
		let Resolution {
			session,
			persist,
			strip_fragment,
		} = resolve(stored.as_deref(), &fragment);

		if let Some(token) = persist {
			// The token is still adopted for this load even if it cannot be kept across reloads.
			if let Err(err) = self.store.store(&token) {
				log::warn!(target: "auth", "{err}");
			}
		}
		if strip_fragment {
			self.location.clear_fragment();
		}

		match &session {
			Session::Pending => log::debug!(target: "auth", "No session, awaiting login"),
			Session::Authenticated { .. } => log::info!(target: "auth", "Session authenticated"),
			Session::Failed { error } => log::error!(target: "auth", "{error}"),
		}
		session
	}

	pub fn logout(&self) -> Session {
		log::info!(target: "auth", "Logging out");
		self.store.clear();
		self.location.clear_fragment();
		Session::Pending
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{MemoryLocation, MemoryTokenStore};

	fn manager(stored: Option<&str>, fragment: &str) -> SessionManager<MemoryTokenStore, MemoryLocation> {
		let store = match stored {
			Some(token) => MemoryTokenStore::with_token(token),
			None => MemoryTokenStore::default(),
		};
		SessionManager::new(store, MemoryLocation::new(fragment))
	}

	#[test]
	fn stored_token_wins() {
		for fragment in ["", "#access_token=new", "#error=access_denied", "#junk"] {
			let manager = manager(Some("old"), fragment);
			assert_eq!(
				manager.initialize(),
				Session::Authenticated { token: "old".into() }
			);
			assert_eq!(manager.store().get().as_deref(), Some("old"));
			// the fragment is left untouched
			assert_eq!(manager.location().fragment(), fragment);
		}
	}

	#[test]
	fn token_from_fragment() {
		let manager = manager(None, "#access_token=X&token_type=Bearer&expires_in=3600");
		assert_eq!(manager.initialize(), Session::Authenticated { token: "X".into() });
		assert_eq!(manager.store().get().as_deref(), Some("X"));
		assert_eq!(manager.location().fragment(), "");
	}

	#[test]
	fn fragment_without_token() {
		let manager = manager(None, "#token_type=Bearer");
		assert_eq!(
			manager.initialize(),
			Session::Failed {
				error: SessionError::TokenMissing
			}
		);
		assert_eq!(manager.store().get(), None);
	}

	#[test]
	fn provider_denied() {
		let resolution = resolve(None, "#error=access_denied");
		assert_eq!(resolution.session.error(), Some(SessionError::TokenMissing));
		assert_eq!(resolution.persist, None);
	}

	#[test]
	fn nothing_to_resolve() {
		let manager = manager(None, "");
		assert_eq!(manager.initialize(), Session::Pending);
		assert_eq!(manager.store().get(), None);
	}

	#[test]
	fn empty_stored_token_is_absent() {
		let resolution = resolve(Some(""), "#access_token=X");
		assert_eq!(resolution.session, Session::Authenticated { token: "X".into() });
		assert_eq!(resolution.persist.as_deref(), Some("X"));
		assert!(resolution.strip_fragment);
	}

	#[test]
	fn repeated_token_keys() {
		let resolution = resolve(None, "#access_token=A&access_token=B");
		assert_eq!(resolution.session, Session::Authenticated { token: "A".into() });
		assert_eq!(resolution.persist.as_deref(), Some("A"));

		let resolution = resolve(None, "#access_token=&access_token=B");
		assert_eq!(resolution.session.error(), Some(SessionError::TokenMissing));
		assert_eq!(resolution.persist, None);
	}

	#[test]
	fn storage_failure_still_authenticates() {
		let manager = SessionManager::new(MemoryTokenStore::read_only(), MemoryLocation::new("#access_token=X"));
		assert_eq!(manager.initialize(), Session::Authenticated { token: "X".into() });
		assert_eq!(manager.store().get(), None);
		assert_eq!(manager.location().fragment(), "");
	}

	#[test]
	fn logout_from_any_state() {
		for (stored, fragment) in [(Some("T"), ""), (None, "#access_token=X"), (None, "#nope"), (None, "")] {
			let manager = manager(stored, fragment);
			let _ = manager.initialize();
			assert_eq!(manager.logout(), Session::Pending);
			assert_eq!(manager.store().get(), None);
			assert_eq!(manager.location().fragment(), "");
		}
	}

	#[test]
	fn logout_is_idempotent() {
		let manager = manager(Some("T"), "");
		let _ = manager.initialize();
		let once = manager.logout();
		let twice = manager.logout();
		assert_eq!(once, twice);
		assert_eq!(manager.store().get(), None);
		assert_eq!(manager.initialize(), Session::Pending);
	}
}
