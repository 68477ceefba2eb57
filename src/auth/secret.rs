//! Client secret value kept as opaque bytes.

// self
use crate::_prelude::*;

/// Client secret exactly as configured or as read from the secret file.
///
/// The bytes are never decoded or trimmed, so file-backed secrets need not be UTF-8.
/// Formatting never prints the material. An empty secret is a legitimate value; whether a
/// flow accepts it is up to the caller.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientSecret(Vec<u8>);
impl ClientSecret {
	/// Wraps inline text or raw file contents.
	pub fn new(value: impl Into<Vec<u8>>) -> Self {
		Self(value.into())
	}

	/// Raw secret bytes, for token requests only.
	pub fn expose(&self) -> &[u8] {
		&self.0
	}

	/// The secret as text, or `None` when the bytes are not UTF-8.
	pub fn expose_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.0).ok()
	}

	/// Whether nothing was configured or the file was empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Hands the raw bytes to the caller.
	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}
}
impl From<Vec<u8>> for ClientSecret {
	fn from(value: Vec<u8>) -> Self {
		Self(value)
	}
}
impl From<String> for ClientSecret {
	fn from(value: String) -> Self {
		Self(value.into_bytes())
	}
}
impl From<&str> for ClientSecret {
	fn from(value: &str) -> Self {
		Self(value.as_bytes().to_vec())
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(if self.0.is_empty() { "ClientSecret(<empty>)" } else { "ClientSecret(***)" })
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("***")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatting_hides_client_secret() {
		let secret = ClientSecret::from("proxy-client-secret");

		assert_eq!(format!("{secret:?}"), "ClientSecret(***)");
		assert_eq!(secret.to_string(), "***");
		assert!(!format!("{secret:?}{secret}").contains("proxy-client-secret"));
	}

	#[test]
	fn empty_secret_is_distinguishable_but_valid() {
		let secret = ClientSecret::default();

		assert!(secret.is_empty());
		assert_eq!(format!("{secret:?}"), "ClientSecret(<empty>)");
		assert_eq!(secret.expose_str(), Some(""));
		assert!(secret.into_inner().is_empty());
	}

	#[test]
	fn binary_file_contents_survive_untouched() {
		let raw = vec![0xff, 0xfe, b'a'];
		let secret = ClientSecret::new(raw.clone());

		assert_eq!(secret.expose(), raw.as_slice());
		assert_eq!(secret.expose_str(), None);
		assert_eq!(secret.into_inner(), raw);
	}
}
