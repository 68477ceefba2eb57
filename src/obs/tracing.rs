// std
use std::{io, path::Path};
// self
use crate::obs::DiagnosticSink;

/// Default sink forwarding diagnostics to `tracing` (a no-op without the `tracing` feature).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;
impl DiagnosticSink for TracingDiagnostics {
	fn secret_file_unreadable(&self, path: &Path, error: &io::Error) {
		#[cfg(feature = "tracing")]
		{
			tracing::error!(
				target: "oauth2_proxy_provider::secret",
				path = %path.display(),
				error = %error,
				"Error reading client secret file."
			);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (path, error);
		}
	}
}
