//! Provider-level error types shared across configuration and secret resolution.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
///
/// Variants never carry filesystem paths; detailed causes for secret failures go to the
/// injected [`DiagnosticSink`](crate::obs::DiagnosticSink) instead.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The client secret file could not be read.
	#[error("Could not read client secret file.")]
	SecretFileUnreadable,
	/// The resolved client secret is not text and cannot feed a text-only consumer.
	#[error("Client secret is not valid UTF-8.")]
	SecretNotUtf8,
}

/// Configuration failures raised while turning deployer input into provider data.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A configured endpoint is not an absolute URL.
	#[error("The {field} setting is not a valid URL.")]
	InvalidUrl {
		/// Name of the offending setting.
		field: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Provider configuration JSON could not be deserialized.
	#[error("Provider configuration is malformed.")]
	Parse {
		/// Structured parsing failure, including the path to the offending field.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Provider configuration JSON is followed by trailing input.
	#[error("Provider configuration has trailing characters after the JSON document.")]
	TrailingInput {
		/// Underlying parser failure, including line and column.
		#[source]
		source: serde_json::Error,
	},
	/// Provider kind did not match any built-in provider.
	#[error("Unknown provider `{name}`.")]
	UnknownProvider {
		/// Provider string supplied by the deployer.
		name: String,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Parse { source }
	}
}
