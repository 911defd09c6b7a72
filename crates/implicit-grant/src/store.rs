use crate::StoreError;
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;

/// Durable storage for the raw access token string.
pub trait TokenStore {
	fn load(&self) -> Option<String>;
	fn store(&self, token: &str) -> Result<(), StoreError>;
	fn clear(&self);
}

/// Browser `localStorage`, holding the token unencoded under a single key.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
	key: &'static str,
}

impl LocalTokenStore {
	pub fn new(key: &'static str) -> Self {
		Self { key }
	}
}

impl TokenStore for LocalTokenStore {
	fn load(&self) -> Option<String> {
		// Read the raw item so the value is not expected to be json.
		let value = LocalStorage::raw().get_item(self.key).ok().flatten()?;
		(!value.is_empty()).then_some(value)
	}

	fn store(&self, token: &str) -> Result<(), StoreError> {
		LocalStorage::raw()
			.set_item(self.key, token)
			.map_err(|err| StoreError::Write(format!("{err:?}")))
	}

	fn clear(&self) {
		LocalStorage::delete(self.key);
	}
}

/// In-process token store, for hosts without a browser and for tests.
#[derive(Default, Debug)]
pub struct MemoryTokenStore {
	token: RefCell<Option<String>>,
	read_only: bool,
}

impl MemoryTokenStore {
	pub fn with_token(token: impl Into<String>) -> Self {
		Self {
			token: RefCell::new(Some(token.into())),
			read_only: false,
		}
	}

	/// A store which rejects every write, like a browser with storage disabled.
	pub fn read_only() -> Self {
		Self {
			token: RefCell::new(None),
			read_only: true,
		}
	}

	pub fn get(&self) -> Option<String> {
		self.token.borrow().clone()
	}
}

impl TokenStore for MemoryTokenStore {
	fn load(&self) -> Option<String> {
		self.token.borrow().clone().filter(|token| !token.is_empty())
	}

	fn store(&self, token: &str) -> Result<(), StoreError> {
		if self.read_only {
			return Err(StoreError::Unavailable);
		}
		*self.token.borrow_mut() = Some(token.to_owned());
		Ok(())
	}

	fn clear(&self) {
		*self.token.borrow_mut() = None;
	}
}
