//! Built-in fallback values a provider applies at construction time.

// self
use crate::_prelude::*;

/// Default endpoints and scope a provider falls back to when the deployer leaves them unset.
///
/// Any URL may be absent: a provider without such an endpoint simply has no default, and the
/// corresponding [`ProviderData`](crate::provider::ProviderData) field stays unset after
/// merging. Spotting a missing required endpoint is left to higher layers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderDefaults {
	/// Human-readable provider name assigned during merging.
	pub name: String,
	/// Default authorization (login) endpoint.
	pub login_url: Option<Url>,
	/// Default token (redeem) endpoint.
	pub redeem_url: Option<Url>,
	/// Default profile endpoint.
	pub profile_url: Option<Url>,
	/// Default token validation endpoint.
	pub validate_url: Option<Url>,
	/// Default scope string.
	pub scope: String,
}
impl ProviderDefaults {
	/// Creates defaults for `name` with no endpoints and an empty scope.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), ..Default::default() }
	}

	/// Sets the default login endpoint.
	pub fn login_url(mut self, url: Url) -> Self {
		self.login_url = Some(url);

		self
	}

	/// Sets the default redeem endpoint.
	pub fn redeem_url(mut self, url: Url) -> Self {
		self.redeem_url = Some(url);

		self
	}

	/// Sets the default profile endpoint.
	pub fn profile_url(mut self, url: Url) -> Self {
		self.profile_url = Some(url);

		self
	}

	/// Sets the default validation endpoint.
	pub fn validate_url(mut self, url: Url) -> Self {
		self.validate_url = Some(url);

		self
	}

	/// Sets the default scope.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = scope.into();

		self
	}
}
