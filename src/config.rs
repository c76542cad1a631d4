//! Invoice settings and the issuing business profile

use serde::{Deserialize, Serialize};

use crate::types::{InvoiceError, InvoiceResult};

/// Longest configurable payment term, about ten years
pub const MAX_DUE_IN_DAYS: i64 = 3650;
/// Widest configurable sales chart window
pub const MAX_CHART_DAYS: u32 = 366;

/// Document and dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    /// Days between the invoice date and the default due date
    pub due_in_days: i64,
    /// Heading printed above the invoice details
    pub title: String,
    /// Terms and conditions, one per printed line
    pub terms: Vec<String>,
    pub currency_symbol: String,
    /// How many invoices the dashboard lists as recent
    pub recent_invoice_count: usize,
    /// Number of days covered by the dashboard sales chart
    pub chart_days: u32,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            due_in_days: 7,
            title: "TAX INVOICE ORIGINAL FOR RECIPIENT".to_string(),
            terms: vec![
                "Please check stock properly before taking the stock".to_string(),
                "Damaged goods will not be taken back".to_string(),
            ],
            currency_symbol: "₹".to_string(),
            recent_invoice_count: 5,
            chart_days: 7,
        }
    }
}

impl InvoiceSettings {
    /// Load settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> InvoiceResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| InvoiceError::Config(format!("invoice settings: {}", e)))?;

        if !(0..=MAX_DUE_IN_DAYS).contains(&settings.due_in_days) {
            return Err(InvoiceError::Config(format!(
                "due_in_days must be between 0 and {}, got {}",
                MAX_DUE_IN_DAYS, settings.due_in_days
            )));
        }
        if settings.chart_days > MAX_CHART_DAYS {
            return Err(InvoiceError::Config(format!(
                "chart_days cannot exceed {}, got {}",
                MAX_CHART_DAYS, settings.chart_days
            )));
        }

        Ok(settings)
    }
}

/// The business issuing invoices, as printed in the header and payment blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub gst_number: String,
    pub pan: String,
    pub bank_name: String,
    pub ifsc: String,
    pub account_number: String,
    pub bank_branch: String,
    pub upi_id: String,
    /// Payment QR code as an image data URL
    pub qr_code: Option<String>,
}

impl BusinessProfile {
    /// Load a profile from JSON; missing fields are left blank
    pub fn from_json(json: &str) -> InvoiceResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| InvoiceError::Config(format!("business profile: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings = InvoiceSettings::from_json(r#"{ "due_in_days": 15 }"#).unwrap();
        assert_eq!(settings.due_in_days, 15);
        assert_eq!(settings.title, "TAX INVOICE ORIGINAL FOR RECIPIENT");
        assert_eq!(settings.recent_invoice_count, 5);
    }

    #[test]
    fn test_settings_rejects_bad_input() {
        assert!(matches!(
            InvoiceSettings::from_json("not json"),
            Err(InvoiceError::Config(_))
        ));
        assert!(matches!(
            InvoiceSettings::from_json(r#"{ "due_in_days": -1 }"#),
            Err(InvoiceError::Config(_))
        ));
    }

    #[test]
    fn test_settings_rejects_out_of_range_windows() {
        assert!(matches!(
            InvoiceSettings::from_json(r#"{ "due_in_days": 200000000 }"#),
            Err(InvoiceError::Config(_))
        ));
        assert!(matches!(
            InvoiceSettings::from_json(r#"{ "chart_days": 4000000000 }"#),
            Err(InvoiceError::Config(_))
        ));

        let settings =
            InvoiceSettings::from_json(r#"{ "due_in_days": 3650, "chart_days": 366 }"#).unwrap();
        assert_eq!(settings.due_in_days, MAX_DUE_IN_DAYS);
        assert_eq!(settings.chart_days, MAX_CHART_DAYS);
    }

    #[test]
    fn test_business_profile_from_json() {
        let profile = BusinessProfile::from_json(
            r#"{ "name": "Subham Store", "gst_number": "10FNZPS6138A1ZS" }"#,
        )
        .unwrap();
        assert_eq!(profile.name, "Subham Store");
        assert_eq!(profile.gst_number, "10FNZPS6138A1ZS");
        assert!(profile.qr_code.is_none());
        assert!(profile.upi_id.is_empty());
    }
}
