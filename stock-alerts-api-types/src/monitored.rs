use serde::{Deserialize, Serialize};

/// A ticker the backend tracks, independent of whether it currently has alerts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonitoredStock {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
}
