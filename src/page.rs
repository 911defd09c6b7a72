pub mod app;
pub use app::App;

mod dashboard;
pub use dashboard::Dashboard;
