mod auth;
pub use auth::*;

mod authorize;
pub use authorize::*;

mod error;
pub use error::*;

mod fragment;
pub use fragment::*;

mod location;
pub use location::*;

mod manager;
pub use manager::*;

mod provider;
pub use provider::*;

mod status;
pub use status::*;

mod store;
pub use store::*;

pub use url;
