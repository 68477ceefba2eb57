// std
use std::path::PathBuf;
// self
use crate::{
	_prelude::*,
	auth::ClientSecret,
	provider::{ProviderData, ProviderDefaults},
};

/// Builder for [`ProviderData`] values.
///
/// Provider factories set whatever the deployer configured and then call
/// [`build`](Self::build) with their built-in defaults; the result is never mutated again.
#[derive(Clone, Debug, Default)]
pub struct ProviderDataBuilder {
	data: ProviderData,
}
impl ProviderDataBuilder {
	/// Creates a builder with every field unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the login endpoint.
	pub fn login_url(mut self, url: Url) -> Self {
		self.data.login_url = Some(url);

		self
	}

	/// Sets the redeem endpoint.
	pub fn redeem_url(mut self, url: Url) -> Self {
		self.data.redeem_url = Some(url);

		self
	}

	/// Sets the profile endpoint.
	pub fn profile_url(mut self, url: Url) -> Self {
		self.data.profile_url = Some(url);

		self
	}

	/// Sets the protected resource; defaults never fill this field.
	pub fn protected_resource_url(mut self, url: Url) -> Self {
		self.data.protected_resource_url = Some(url);

		self
	}

	/// Sets the validation endpoint.
	pub fn validate_url(mut self, url: Url) -> Self {
		self.data.validate_url = Some(url);

		self
	}

	/// Sets the `acr_values` parameter.
	pub fn acr_values(mut self, value: impl Into<String>) -> Self {
		self.data.acr_values = value.into();

		self
	}

	/// Sets the `approval_prompt` parameter.
	pub fn approval_prompt(mut self, value: impl Into<String>) -> Self {
		self.data.approval_prompt = value.into();

		self
	}

	/// Sets the `prompt` parameter.
	pub fn prompt(mut self, value: impl Into<String>) -> Self {
		self.data.prompt = value.into();

		self
	}

	/// Sets the client identifier.
	pub fn client_id(mut self, value: impl Into<String>) -> Self {
		self.data.client_id = value.into();

		self
	}

	/// Sets the inline client secret.
	pub fn client_secret(mut self, secret: impl Into<ClientSecret>) -> Self {
		self.data.client_secret = secret.into();

		self
	}

	/// Sets the client secret file; an empty path leaves it unset.
	pub fn client_secret_file(mut self, path: impl Into<PathBuf>) -> Self {
		let path = path.into();

		self.data.client_secret_file = (!path.as_os_str().is_empty()).then_some(path);

		self
	}

	/// Sets the scope.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.data.scope = scope.into();

		self
	}

	/// Consumes the builder, merging in the provider's defaults.
	pub fn build(self, defaults: &ProviderDefaults) -> ProviderData {
		let mut data = self.data;

		data.apply_defaults(defaults);

		data
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::*;

	#[test]
	fn builder_sets_every_field_before_defaults() {
		let data = ProviderData::builder()
			.login_url(url("https://idp.internal/login"))
			.protected_resource_url(url("https://api.internal/"))
			.acr_values("urn:mace:incommon:iap:silver")
			.approval_prompt("force")
			.prompt("consent")
			.client_id("proxy")
			.client_secret("inline")
			.client_secret_file("/run/secrets/client")
			.build(
				&ProviderDefaults::new("Internal").redeem_url(url("https://idp.internal/token")),
			);

		assert_eq!(data.name, "Internal");
		assert_eq!(data.login_url, Some(url("https://idp.internal/login")));
		assert_eq!(data.redeem_url, Some(url("https://idp.internal/token")));
		assert_eq!(data.protected_resource_url, Some(url("https://api.internal/")));
		assert_eq!(data.acr_values, "urn:mace:incommon:iap:silver");
		assert_eq!(data.approval_prompt, "force");
		assert_eq!(data.prompt, "consent");
		assert_eq!(data.client_id, "proxy");
		assert_eq!(data.client_secret.expose_str(), Some("inline"));
		assert_eq!(data.client_secret_file, Some(PathBuf::from("/run/secrets/client")));
	}

	#[test]
	fn empty_secret_file_stays_unset() {
		let data =
			ProviderData::builder().client_secret_file("").build(&ProviderDefaults::new("X"));

		assert!(data.client_secret_file.is_none());
	}
}
