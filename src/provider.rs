//! Provider configuration data (what) and the default-merging + secret-resolution rules (how).
//!
//! `data` holds the immutable [`ProviderData`] built once per provider, `defaults` carries
//! the built-in endpoint values a provider falls back to, `kind` enumerates the built-in
//! providers, and `shared` lets a serving process swap whole configurations atomically.

pub mod data;
pub mod defaults;
pub mod kind;
pub mod shared;

pub use data::*;
pub use defaults::*;
pub use kind::*;
pub use shared::*;

// self
use crate::{_prelude::*, auth::ClientSecret};

/// Common surface every concrete provider exposes to the OAuth flow.
pub trait Provider: Send + Sync {
	/// Returns the provider's configuration data.
	fn data(&self) -> &ProviderData;

	/// Resolves the client secret from the inline value or the configured file.
	fn client_secret(&self) -> Result<ClientSecret> {
		self.data().resolve_client_secret()
	}
}
impl Provider for ProviderData {
	fn data(&self) -> &ProviderData {
		self
	}
}
impl<P> Provider for Arc<P>
where
	P: ?Sized + Provider,
{
	fn data(&self) -> &ProviderData {
		(**self).data()
	}
}
