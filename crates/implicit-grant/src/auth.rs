use crate::Session;
use yew::prelude::*;

/// Context handed to the app by [`Provider`](crate::Provider).
#[derive(Clone, PartialEq)]
pub struct Auth {
	pub(crate) session: Session,
	pub(crate) login_url: AttrValue,
	pub(crate) logout: Callback<()>,
}
impl Auth {
	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Target of the login link, the provider's authorization endpoint.
	pub fn login_url(&self) -> &AttrValue {
		&self.login_url
	}

	pub fn logout_callback(&self) -> &Callback<()> {
		&self.logout
	}
}
