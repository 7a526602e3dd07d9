/// Metric type prefixes owned by the calling application rather than the platform.
pub const USER_DEFINED_PREFIXES: [&str; 2] = ["custom.googleapis.com/", "workload.googleapis.com/"];

/// True for custom and workload metric types; built-in platform metrics are excluded.
pub fn is_custom_metric(metric_type: &str) -> bool {
    USER_DEFINED_PREFIXES
        .iter()
        .any(|prefix| metric_type.starts_with(prefix))
}
