use anyhow::{Context, Result};
pub use log::LevelFilter;

/// Logs to the terminal and to `{name}.log` in the working directory.
pub fn init(name: &str, level: LevelFilter, ignore: &[&'static str]) -> Result<()> {
	use simplelog::*;
	let log_path = std::env::current_dir()?.join(format!("{name}.log"));
	let file = std::fs::OpenOptions::new()
		.create(true)
		.write(true)
		.truncate(true)
		.open(&log_path)
		.with_context(|| format!("opening {}", log_path.display()))?;
	let cfg = {
		let mut builder = ConfigBuilder::new();
		builder
			.set_time_format_custom(format_description!("[hour]:[minute]:[second]"))
			// [ERROR]
			// [ WARN]
			// [ INFO]
			.set_level_padding(LevelPadding::Left)
			// Target is always logged so that readers know what owner logged each line
			.set_target_level(LevelFilter::Error)
			.set_location_level(LevelFilter::Off);
		for str in ignore.iter() {
			builder.add_filter_ignore_str(str);
		}
		builder.build()
	};
	CombinedLogger::init(vec![
		TermLogger::new(level, cfg.clone(), TerminalMode::Mixed, ColorChoice::Auto),
		WriteLogger::new(level, cfg, file),
	])?;
	log::debug!("Writing log to {}", log_path.display());
	Ok(())
}
