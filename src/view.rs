use enumset::{EnumSet, EnumSetType};
use yewdux::prelude::*;

/// The content tabs of the dashboard, in display order.
#[derive(Debug, EnumSetType)]
pub enum Tab {
	Playlists,
	Discovery,
	RecentlyPlayed,
	Statistics,
}

impl Default for Tab {
	fn default() -> Self {
		Self::Playlists
	}
}

impl Tab {
	pub fn all() -> impl Iterator<Item = Self> {
		EnumSet::<Tab>::all().into_iter()
	}

	/// Stable identifier, used for element ids.
	pub fn id(&self) -> &'static str {
		match self {
			Self::Playlists => "playlists",
			Self::Discovery => "discovery",
			Self::RecentlyPlayed => "recentlyplayed",
			Self::Statistics => "statistics",
		}
	}

	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Playlists => "Playlists",
			Self::Discovery => "Discovery",
			Self::RecentlyPlayed => "Recently Played",
			Self::Statistics => "Stats",
		}
	}
}

/// Which tab is shown and whether the narrow-layout menu is open. Not persisted, resets on reload.
#[derive(Clone, PartialEq, Debug, Default, Store)]
pub struct ViewState {
	active_tab: Tab,
	menu_open: bool,
}

impl ViewState {
	pub fn active_tab(&self) -> Tab {
		self.active_tab
	}

	pub fn is_active(&self, tab: Tab) -> bool {
		self.active_tab == tab
	}

	pub fn is_menu_open(&self) -> bool {
		self.menu_open
	}

	pub fn select_tab(&mut self, tab: Tab) {
		log::debug!(target: "view", "Selecting tab {}", tab.id());
		self.active_tab = tab;
	}

	pub fn toggle_menu(&mut self) {
		self.menu_open = !self.menu_open;
	}

	pub fn close_menu(&mut self) {
		self.menu_open = false;
	}

	/// Navigating from the overlay menu always closes it.
	pub fn select_from_menu(&mut self, tab: Tab) {
		self.select_tab(tab);
		self.close_menu();
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn defaults() {
		let view = ViewState::default();
		assert_eq!(view.active_tab(), Tab::Playlists);
		assert!(!view.is_menu_open());
	}

	#[test]
	fn last_selection_wins() {
		let mut view = ViewState::default();
		view.select_tab(Tab::Discovery);
		view.select_tab(Tab::Statistics);
		let active = Tab::all().filter(|tab| view.is_active(*tab)).collect::<Vec<_>>();
		assert_eq!(active, vec![Tab::Statistics]);
	}

	#[test]
	fn toggle_menu() {
		let mut view = ViewState::default();
		view.toggle_menu();
		assert!(view.is_menu_open());
		view.toggle_menu();
		assert!(!view.is_menu_open());
	}

	#[test]
	fn menu_selection_closes_menu() {
		for open in [false, true] {
			let mut view = ViewState::default();
			if open {
				view.toggle_menu();
			}
			view.select_from_menu(Tab::RecentlyPlayed);
			assert_eq!(view.active_tab(), Tab::RecentlyPlayed);
			assert!(!view.is_menu_open());
		}
	}

	#[test]
	fn tab_selection_leaves_menu() {
		let mut view = ViewState::default();
		view.toggle_menu();
		view.select_tab(Tab::Discovery);
		assert!(view.is_menu_open());
	}

	#[test]
	fn tab_ids() {
		let ids = Tab::all().map(|tab| tab.id()).collect::<Vec<_>>();
		assert_eq!(ids, vec!["playlists", "discovery", "recentlyplayed", "statistics"]);
	}
}
