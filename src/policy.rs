// ⚙️ Payment Policy - accountant configuration as data
//
// Every field has a default, so `{}` is a valid policy and behaves exactly like
// `PaymentPolicy::default()`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPolicy {
    /// Prefix used when rendering amounts ("$200")
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Refuse to pay agreements for an issue that is not yet published
    #[serde(default)]
    pub require_published_issue: bool,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl PaymentPolicy {
    /// Load policy from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read policy file: {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse payment policy JSON")
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        PaymentPolicy {
            currency_symbol: default_currency_symbol(),
            require_published_issue: false,
        }
    }
}
