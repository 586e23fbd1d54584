pub mod error;
pub mod prober;
pub mod result;

pub use error::ScanError;
pub use prober::{DEFAULT_TIMEOUT, ProbeEvent, ProbeProgressCallback, Prober, build_probe_url};
pub use result::{ProbeOutcome, ProbeResult, ProbeTarget, Verdict, classify_status};
