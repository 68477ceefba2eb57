//! Conversion of provider data into `oauth2` client credentials for token exchanges.

// self
use crate::{
	_prelude::*,
	auth::{FsSecretReader, SecretReader},
	obs::{DiagnosticSink, TracingDiagnostics},
	provider::ProviderData,
};

/// Credentials and endpoints handed to the component performing the code exchange.
#[derive(Clone, Debug)]
pub struct ExchangeCredentials {
	/// Client identifier.
	pub client_id: oauth2::ClientId,
	/// Resolved client secret; `None` when the resolved secret is empty (public client).
	///
	/// `oauth2` secrets are text, so a non-UTF-8 secret fails here with
	/// [`Error::SecretNotUtf8`] rather than during resolution.
	pub client_secret: Option<oauth2::ClientSecret>,
	/// Authorization endpoint, from the provider's login URL.
	pub auth_url: Option<oauth2::AuthUrl>,
	/// Token endpoint, from the provider's redeem URL.
	pub token_url: Option<oauth2::TokenUrl>,
}
impl ExchangeCredentials {
	/// Resolves the secret from the filesystem and converts the provider data.
	pub fn from_provider(data: &ProviderData) -> Result<Self> {
		Self::from_provider_with(data, &FsSecretReader, &TracingDiagnostics)
	}

	/// Resolves the secret through the injected reader and sink, then converts.
	pub fn from_provider_with(
		data: &ProviderData,
		reader: &dyn SecretReader,
		diagnostics: &dyn DiagnosticSink,
	) -> Result<Self> {
		let secret = data.resolve_client_secret_with(reader, diagnostics)?;
		let client_secret = if secret.is_empty() {
			None
		} else {
			let text = String::from_utf8(secret.into_inner()).map_err(|_| Error::SecretNotUtf8)?;

			Some(oauth2::ClientSecret::new(text))
		};

		Ok(Self {
			client_id: oauth2::ClientId::new(data.client_id.clone()),
			client_secret,
			auth_url: data.login_url.clone().map(oauth2::AuthUrl::from_url),
			token_url: data.redeem_url.clone().map(oauth2::TokenUrl::from_url),
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{_preludet::*, provider::ProviderKind};

	#[test]
	fn converts_endpoints_and_secret() {
		let data = ProviderData::builder()
			.client_id("proxy")
			.client_secret("inline")
			.build(&ProviderKind::GitHub.defaults());
		let credentials =
			ExchangeCredentials::from_provider(&data).expect("Inline secret should convert.");

		assert_eq!(credentials.client_id.as_str(), "proxy");
		assert_eq!(
			credentials.client_secret.as_ref().map(|secret| secret.secret().as_str()),
			Some("inline"),
		);
		assert_eq!(
			credentials.auth_url.as_ref().map(|url| url.url().as_str()),
			Some("https://github.com/login/oauth/authorize"),
		);
		assert_eq!(
			credentials.token_url.as_ref().map(|url| url.url().as_str()),
			Some("https://github.com/login/oauth/access_token"),
		);
	}

	#[test]
	fn empty_secret_becomes_public_client() {
		let data =
			ProviderData::builder().client_id("public").build(&ProviderKind::Oidc.defaults());
		let credentials = ExchangeCredentials::from_provider_with(
			&data,
			&CountingReader::returning("unused"),
			&NoopDiagnostics,
		)
		.expect("Empty secret should convert.");

		assert!(credentials.client_secret.is_none());
		assert!(credentials.auth_url.is_none());
		assert!(credentials.token_url.is_none());
	}

	#[test]
	fn binary_secret_fails_only_at_conversion() {
		let reader = CountingReader::returning([0xff, 0xfe, b'a']);
		let data = ProviderData::builder()
			.client_secret_file("/run/secrets/binary")
			.build(&ProviderKind::Google.defaults());
		let secret = data
			.resolve_client_secret_with(&reader, &NoopDiagnostics)
			.expect("Resolution keeps binary secrets.");

		assert_eq!(secret.expose(), [0xff, 0xfe, b'a'].as_slice());

		let err = ExchangeCredentials::from_provider_with(&data, &reader, &NoopDiagnostics)
			.expect_err("Binary secrets cannot become oauth2 secrets.");

		assert!(matches!(err, Error::SecretNotUtf8));
		assert_eq!(err.to_string(), "Client secret is not valid UTF-8.");
	}

	#[test]
	fn unreadable_secret_propagates_generic_error() {
		let data = ProviderData::builder()
			.client_secret_file("/nonexistent/oauth2-proxy-provider/exchange")
			.build(&ProviderKind::Google.defaults());
		let err = ExchangeCredentials::from_provider_with(&data, &FsSecretReader, &NoopDiagnostics)
			.expect_err("Missing secret file must fail.");

		assert!(matches!(err, Error::SecretFileUnreadable));
	}
}
