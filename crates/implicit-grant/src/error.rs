#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
	/// A redirect fragment was present but did not carry an access token.
	#[error("Error: access token not found")]
	TokenMissing,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
	#[error("durable storage is unavailable")]
	Unavailable,
	#[error("failed to write token to storage: {0}")]
	Write(String),
}
