//! Atomically replaceable provider configuration for concurrent request handlers.

// self
use crate::{_prelude::*, provider::ProviderData};

/// Shared handle that hands out immutable snapshots of a provider's configuration.
///
/// Readers clone an [`Arc`] and never hold the lock while resolving secrets; reloads swap
/// the whole [`ProviderData`] so no reader observes a half-updated configuration.
#[derive(Clone, Debug)]
pub struct SharedProvider {
	inner: Arc<RwLock<Arc<ProviderData>>>,
}
impl SharedProvider {
	/// Wraps an initial configuration.
	pub fn new(data: ProviderData) -> Self {
		Self { inner: Arc::new(RwLock::new(Arc::new(data))) }
	}

	/// Returns the current configuration snapshot.
	pub fn load(&self) -> Arc<ProviderData> {
		self.inner.read().clone()
	}

	/// Replaces the configuration and returns the previous snapshot.
	pub fn replace(&self, data: ProviderData) -> Arc<ProviderData> {
		let next = Arc::new(data);

		std::mem::replace(&mut *self.inner.write(), next)
	}
}
impl From<ProviderData> for SharedProvider {
	fn from(data: ProviderData) -> Self {
		Self::new(data)
	}
}
