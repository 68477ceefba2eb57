//! Observability hooks for secret resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) so [`TracingDiagnostics`] emits an `error` event under the
//!   `oauth2_proxy_provider::secret` target with the `path` and `error` fields.
//! - Enable `metrics` to increment the `oauth2_proxy_provider_secret_resolution_total` counter
//!   for every resolution, labeled by `source` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// std
use std::{io, path::Path};
// self
use crate::_prelude::*;

/// Receives operator-facing failure context that must never reach callers.
///
/// Resolution hands the sink the secret file path together with the raw I/O error and then
/// returns a path-free [`Error::SecretFileUnreadable`] to its caller.
pub trait DiagnosticSink: Send + Sync {
	/// Reports that the client secret file at `path` could not be read.
	fn secret_file_unreadable(&self, path: &Path, error: &io::Error);
}

/// Sink that discards every diagnostic record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDiagnostics;
impl DiagnosticSink for NoopDiagnostics {
	fn secret_file_unreadable(&self, _path: &Path, _error: &io::Error) {}
}

/// Where a resolved client secret came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecretSource {
	/// The inline `client_secret` value (possibly empty).
	Inline,
	/// The file named by `client_secret_file`.
	File,
}
impl SecretSource {
	/// Returns a stable label suitable for log or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SecretSource::Inline => "inline",
			SecretSource::File => "file",
		}
	}
}
impl Display for SecretSource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionOutcome {
	/// A secret was produced.
	Success,
	/// Resolution failed and the caller received an error.
	Failure,
}
impl ResolutionOutcome {
	/// Returns a stable label suitable for log or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolutionOutcome::Success => "success",
			ResolutionOutcome::Failure => "failure",
		}
	}
}
impl Display for ResolutionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
