//! Route key → product label normalisation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Label used for empty or unknown route keys.
pub const DEFAULT_CHANNEL_LABEL: &str = "General";

static CHANNEL_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("help-gcp-apple", "GCP"),
        ("help-aws-apple", "AWS"),
        ("help-oci-apple", "OCI"),
        ("help-icloud-apple", "iCloud"),
        ("help-alicloud", "Alicloud"),
        ("help-linux-found", "Linux Foundation"),
        ("help-rubix", "Rubix"),
        ("help-spinclou", "Spincloud"),
        ("Rubix", "Rubix"),
        ("GCP", "GCP"),
        ("AWS", "AWS"),
        ("OCI", "OCI"),
        ("Alicloud", "Alicloud"),
    ])
});

/// Short product label for a route key. Matching is exact.
pub fn channel_label(raw: &str) -> &'static str {
    match CHANNEL_LABELS.get(raw) {
        Some(label) => *label,
        None => {
            tracing::debug!(route_key = raw, "Unknown route key; using default label");
            DEFAULT_CHANNEL_LABEL
        }
    }
}
