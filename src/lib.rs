//! Provider configuration core for OAuth 2.0 reverse proxies: built-in endpoint defaults,
//! redacted client secrets, and file-backed secret resolution that never leaks paths.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod exchange;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
pub use url;
#[cfg(test)] use {color_eyre as _, tracing_subscriber as _};
