// self
use crate::obs::{ResolutionOutcome, SecretSource};

/// Records a secret resolution via the global metrics recorder (when enabled).
pub fn record_secret_resolution(source: SecretSource, outcome: ResolutionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_proxy_provider_secret_resolution_total",
			"source" => source.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (source, outcome);
	}
}
