//! Deployer-facing provider settings and their conversion into [`ProviderData`].

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	provider::{ProviderData, ProviderKind},
};

/// Raw provider settings as written by a deployer.
///
/// Every field is optional in the serialized form; an empty URL string means "unset" and
/// lets the provider's built-in default apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
	/// Built-in provider identifier (`google`, `github`, `gitlab`, `azure`, `oidc`).
	pub provider: String,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Inline client secret.
	pub client_secret: String,
	/// Path of a file holding the client secret.
	pub client_secret_file: String,
	/// Login endpoint override.
	pub login_url: String,
	/// Redeem endpoint override.
	pub redeem_url: String,
	/// Profile endpoint override.
	pub profile_url: String,
	/// Protected resource URL.
	pub protected_resource_url: String,
	/// Validation endpoint override.
	pub validate_url: String,
	/// Scope override.
	pub scope: String,
	/// OpenID Connect `acr_values`.
	pub acr_values: String,
	/// Legacy `approval_prompt` parameter.
	pub approval_prompt: String,
	/// OpenID Connect `prompt` parameter.
	pub prompt: String,
}
impl ProviderConfig {
	/// Parses settings from JSON bytes, reporting the path of any malformed field.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_slice(bytes);
		let config = serde_path_to_error::deserialize(&mut de)?;

		de.end().map_err(|source| ConfigError::TrailingInput { source })?;

		Ok(config)
	}

	/// Parses settings from a JSON string.
	pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
		Self::from_json_slice(s.as_bytes())
	}

	/// Resolves the provider kind and builds its [`ProviderData`] with defaults applied.
	pub fn build(&self) -> Result<ProviderData, ConfigError> {
		let kind = self.provider.parse::<ProviderKind>()?;
		let mut builder = ProviderData::builder()
			.client_id(self.client_id.as_str())
			.client_secret(self.client_secret.as_str())
			.client_secret_file(self.client_secret_file.as_str())
			.scope(self.scope.as_str())
			.acr_values(self.acr_values.as_str())
			.approval_prompt(self.approval_prompt.as_str())
			.prompt(self.prompt.as_str());

		if let Some(url) = parse_url("login_url", &self.login_url)? {
			builder = builder.login_url(url);
		}
		if let Some(url) = parse_url("redeem_url", &self.redeem_url)? {
			builder = builder.redeem_url(url);
		}
		if let Some(url) = parse_url("profile_url", &self.profile_url)? {
			builder = builder.profile_url(url);
		}
		if let Some(url) = parse_url("protected_resource_url", &self.protected_resource_url)? {
			builder = builder.protected_resource_url(url);
		}
		if let Some(url) = parse_url("validate_url", &self.validate_url)? {
			builder = builder.validate_url(url);
		}

		Ok(builder.build(&kind.defaults()))
	}
}
impl Default for ProviderConfig {
	fn default() -> Self {
		Self {
			provider: ProviderKind::default().as_str().into(),
			client_id: String::new(),
			client_secret: String::new(),
			client_secret_file: String::new(),
			login_url: String::new(),
			redeem_url: String::new(),
			profile_url: String::new(),
			protected_resource_url: String::new(),
			validate_url: String::new(),
			scope: String::new(),
			acr_values: String::new(),
			approval_prompt: "force".into(),
			prompt: String::new(),
		}
	}
}

fn parse_url(field: &'static str, raw: &str) -> Result<Option<Url>, ConfigError> {
	if raw.is_empty() {
		return Ok(None);
	}

	Url::parse(raw).map(Some).map_err(|source| ConfigError::InvalidUrl { field, source })
}
