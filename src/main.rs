use spotify_dashboard::logging;

#[cfg(target_family = "wasm")]
fn main() {
	logging::wasm::init(logging::wasm::Config::default().prefer_target());
	yew::Renderer::<spotify_dashboard::page::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	use spotify_dashboard::config;

	logging::console::init("spotify-dashboard", log::LevelFilter::Info, &[])?;
	log::warn!("The dashboard renders in a browser, build it for wasm32-unknown-unknown.");
	match option_env!("SPOTIFY_REDIRECT_URI") {
		Some(redirect_uri) => log::info!("Login url: {}", config::login_url_for(redirect_uri)?),
		None => log::info!("Set SPOTIFY_REDIRECT_URI at build time to print the login url."),
	}
	Ok(())
}
