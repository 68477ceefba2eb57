//! Built-in providers and their literal default endpoints.

// self
use crate::{_prelude::*, error::ConfigError, provider::ProviderDefaults};

/// Identity providers shipped with built-in defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProviderKind {
	/// Google accounts.
	#[default]
	Google,
	/// GitHub.com.
	GitHub,
	/// GitLab.com (or a self-hosted instance when endpoints are overridden).
	GitLab,
	/// Microsoft Azure Active Directory.
	Azure,
	/// Any OpenID Connect issuer; every endpoint must be configured explicitly.
	Oidc,
}
impl ProviderKind {
	/// Every built-in provider.
	pub const ALL: [ProviderKind; 5] = [
		ProviderKind::Google,
		ProviderKind::GitHub,
		ProviderKind::GitLab,
		ProviderKind::Azure,
		ProviderKind::Oidc,
	];

	/// Returns the configuration identifier (`google`, `github`, ...).
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderKind::Google => "google",
			ProviderKind::GitHub => "github",
			ProviderKind::GitLab => "gitlab",
			ProviderKind::Azure => "azure",
			ProviderKind::Oidc => "oidc",
		}
	}

	/// Returns the human-readable provider name assigned during default merging.
	pub const fn display_name(self) -> &'static str {
		match self {
			ProviderKind::Google => "Google",
			ProviderKind::GitHub => "GitHub",
			ProviderKind::GitLab => "GitLab",
			ProviderKind::Azure => "Azure",
			ProviderKind::Oidc => "OpenID Connect",
		}
	}

	/// Returns the provider's built-in defaults.
	pub fn defaults(self) -> ProviderDefaults {
		let name = self.display_name();

		match self {
			ProviderKind::Google => ProviderDefaults {
				name: name.into(),
				login_url: known("https://accounts.google.com/o/oauth2/auth?access_type=offline"),
				redeem_url: known("https://www.googleapis.com/oauth2/v3/token"),
				profile_url: None,
				validate_url: known("https://www.googleapis.com/oauth2/v1/tokeninfo"),
				scope: "profile email".into(),
			},
			ProviderKind::GitHub => ProviderDefaults {
				name: name.into(),
				login_url: known("https://github.com/login/oauth/authorize"),
				redeem_url: known("https://github.com/login/oauth/access_token"),
				profile_url: None,
				validate_url: known("https://api.github.com/"),
				scope: "user:email".into(),
			},
			ProviderKind::GitLab => ProviderDefaults {
				name: name.into(),
				login_url: known("https://gitlab.com/oauth/authorize"),
				redeem_url: known("https://gitlab.com/oauth/token"),
				profile_url: None,
				validate_url: known("https://gitlab.com/api/v4/user"),
				scope: "openid email".into(),
			},
			ProviderKind::Azure => ProviderDefaults {
				name: name.into(),
				login_url: known("https://login.microsoftonline.com/common/oauth2/authorize"),
				redeem_url: known("https://login.microsoftonline.com/common/oauth2/token"),
				profile_url: known("https://graph.microsoft.com/v1.0/me"),
				validate_url: known("https://graph.microsoft.com/v1.0/me"),
				scope: "openid".into(),
			},
			ProviderKind::Oidc => ProviderDefaults::new(name).scope("openid email profile"),
		}
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProviderKind {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| ConfigError::UnknownProvider { name: s.to_owned() })
	}
}

// Literal endpoints always parse.
fn known(literal: &'static str) -> Option<Url> {
	Url::parse(literal).ok()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn literal_defaults_parse() {
		for kind in ProviderKind::ALL {
			let defaults = kind.defaults();

			assert_eq!(defaults.name, kind.display_name());
			assert!(!defaults.scope.is_empty(), "{kind} should carry a default scope.");

			if kind != ProviderKind::Oidc {
				assert!(defaults.login_url.is_some(), "{kind} login URL should parse.");
				assert!(defaults.redeem_url.is_some(), "{kind} redeem URL should parse.");
				assert!(defaults.validate_url.is_some(), "{kind} validate URL should parse.");
			}
		}
	}

	#[test]
	fn oidc_has_no_endpoint_defaults() {
		let defaults = ProviderKind::Oidc.defaults();

		assert!(defaults.login_url.is_none());
		assert!(defaults.redeem_url.is_none());
		assert!(defaults.profile_url.is_none());
		assert!(defaults.validate_url.is_none());
		assert_eq!(defaults.scope, "openid email profile");
	}

	#[test]
	fn parses_identifiers() {
		assert_eq!("github".parse::<ProviderKind>().ok(), Some(ProviderKind::GitHub));
		assert_eq!(ProviderKind::Azure.to_string(), "azure");

		let err = "facebook".parse::<ProviderKind>().expect_err("Unknown kinds must fail.");

		assert!(matches!(err, ConfigError::UnknownProvider { ref name } if name == "facebook"));
	}
}
