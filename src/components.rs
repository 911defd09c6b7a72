mod media_query;
pub use media_query::*;
pub mod mobile;
mod nav;
pub use nav::*;
pub mod tabs;
