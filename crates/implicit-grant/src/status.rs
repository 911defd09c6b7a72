use crate::SessionError;

/// The authentication status of the current user for this page load.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub enum Session {
	/// No token has been resolved yet; the user needs to log in.
	#[default]
	Pending,
	Authenticated {
		token: String,
	},
	/// Terminal for the load, only a reload re-runs initialization.
	Failed {
		error: SessionError,
	},
}

impl Session {
	pub fn token(&self) -> Option<&str> {
		match self {
			Self::Authenticated { token } => Some(token.as_str()),
			_ => None,
		}
	}

	pub fn error(&self) -> Option<SessionError> {
		match self {
			Self::Failed { error } => Some(*error),
			_ => None,
		}
	}
}
