//! Provider configuration data plus the default-merging and secret-resolution rules.

/// Builder API for assembling provider data.
pub mod builder;

pub use builder::*;

// std
use std::path::{Path, PathBuf};
// self
use crate::{
	_prelude::*,
	auth::{ClientSecret, FsSecretReader, SecretReader},
	obs::{self, DiagnosticSink, ResolutionOutcome, SecretSource, TracingDiagnostics},
	provider::ProviderDefaults,
};

/// Configuration for a single OAuth 2.0 / OpenID Connect provider.
///
/// Values are built once through [`ProviderDataBuilder`] and then only read; to rotate
/// credentials, build a fresh value and swap it in through
/// [`SharedProvider`](crate::provider::SharedProvider).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderData {
	/// Human-readable provider name, assigned by [`apply_defaults`](Self::apply_defaults).
	pub name: String,
	/// Authorization endpoint users are redirected to.
	pub login_url: Option<Url>,
	/// Token endpoint used to redeem authorization codes.
	pub redeem_url: Option<Url>,
	/// Endpoint returning the authenticated user's profile.
	pub profile_url: Option<Url>,
	/// Upstream resource the issued token is meant for. Never defaulted.
	pub protected_resource_url: Option<Url>,
	/// Endpoint used to validate issued tokens.
	pub validate_url: Option<Url>,
	/// OpenID Connect `acr_values` request parameter.
	pub acr_values: String,
	/// Legacy `approval_prompt` request parameter (renamed `prompt` in OpenID Connect).
	pub approval_prompt: String,
	/// OpenID Connect `prompt` request parameter.
	pub prompt: String,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Inline client secret; wins over [`client_secret_file`](Self::client_secret_file).
	pub client_secret: ClientSecret,
	/// File holding the client secret, read on every resolution.
	pub client_secret_file: Option<PathBuf>,
	/// Scope string sent with authorization requests.
	pub scope: String,
}
impl ProviderData {
	/// Creates a new, empty builder.
	pub fn builder() -> ProviderDataBuilder {
		ProviderDataBuilder::new()
	}

	/// Fills unset endpoints and scope from `defaults` and assigns the provider name.
	///
	/// Set fields are left untouched, the name is always overwritten, and
	/// `protected_resource_url` is never modified. Calling this twice with the same
	/// defaults yields the same value as calling it once.
	pub fn apply_defaults(&mut self, defaults: &ProviderDefaults) {
		self.name.clone_from(&defaults.name);

		fill_unset(&mut self.login_url, &defaults.login_url);
		fill_unset(&mut self.redeem_url, &defaults.redeem_url);
		fill_unset(&mut self.profile_url, &defaults.profile_url);
		fill_unset(&mut self.validate_url, &defaults.validate_url);

		if self.scope.is_empty() {
			self.scope.clone_from(&defaults.scope);
		}
	}

	/// Resolves the client secret using the filesystem and the `tracing` diagnostic sink.
	///
	/// See [`resolve_client_secret_with`](Self::resolve_client_secret_with).
	pub fn resolve_client_secret(&self) -> Result<ClientSecret> {
		self.resolve_client_secret_with(&FsSecretReader, &TracingDiagnostics)
	}

	/// Resolves the client secret through the injected reader and diagnostic sink.
	///
	/// A non-empty inline secret, or an unset secret file, yields the inline value as-is
	/// (an empty secret is a successful outcome). Otherwise the file is read in full on
	/// every call. A failed read is reported to `diagnostics` with the path and cause, and
	/// the caller only receives [`Error::SecretFileUnreadable`].
	pub fn resolve_client_secret_with(
		&self,
		reader: &dyn SecretReader,
		diagnostics: &dyn DiagnosticSink,
	) -> Result<ClientSecret> {
		let Some(path) = self.secret_file_to_read() else {
			obs::record_secret_resolution(SecretSource::Inline, ResolutionOutcome::Success);

			return Ok(self.client_secret.clone());
		};

		match reader.read(path) {
			Ok(contents) => {
				obs::record_secret_resolution(SecretSource::File, ResolutionOutcome::Success);

				Ok(ClientSecret::new(contents))
			},
			Err(e) => {
				diagnostics.secret_file_unreadable(path, &e);
				obs::record_secret_resolution(SecretSource::File, ResolutionOutcome::Failure);

				Err(Error::SecretFileUnreadable)
			},
		}
	}

	fn secret_file_to_read(&self) -> Option<&Path> {
		if !self.client_secret.is_empty() {
			return None;
		}

		self.client_secret_file.as_deref().filter(|path| !path.as_os_str().is_empty())
	}
}

fn fill_unset(slot: &mut Option<Url>, default: &Option<Url>) {
	if slot.is_none() {
		slot.clone_from(default);
	}
}
