use std::cell::RefCell;

/// Access to the fragment of the page address.
pub trait Location {
	fn fragment(&self) -> String;
	fn clear_fragment(&self);
}

#[derive(Clone, Copy, Default, Debug)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
	fn fragment(&self) -> String {
		gloo_utils::window().location().hash().unwrap_or_default()
	}

	fn clear_fragment(&self) {
		if let Err(err) = gloo_utils::window().location().set_hash("") {
			log::warn!(target: "auth", "Failed to clear location fragment: {err:?}");
		}
	}
}

#[derive(Default, Debug)]
pub struct MemoryLocation(RefCell<String>);

impl MemoryLocation {
	pub fn new(fragment: impl Into<String>) -> Self {
		Self(RefCell::new(fragment.into()))
	}
}

impl Location for MemoryLocation {
	fn fragment(&self) -> String {
		self.0.borrow().clone()
	}

	fn clear_fragment(&self) {
		self.0.borrow_mut().clear();
	}
}
