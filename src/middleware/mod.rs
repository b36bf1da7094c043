pub mod metrics;
pub mod security_headers;

pub use metrics::RequestMetrics;
pub use security_headers::SecurityHeaders;
