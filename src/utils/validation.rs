//! Validation utilities for customer and product forms

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::money::zero;
use crate::types::*;

/// Per-field messages from a failed customer form validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormErrors {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub pincode: Option<String>,
}

impl FormErrors {
    /// Whether no field has an error
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mobile.is_none()
            && self.email.is_none()
            && self.gst_number.is_none()
            && self.pincode.is_none()
    }

    /// All messages in field order
    pub fn messages(&self) -> Vec<&str> {
        [
            &self.name,
            &self.mobile,
            &self.email,
            &self.gst_number,
            &self.pincode,
        ]
        .into_iter()
        .filter_map(|m| m.as_deref())
        .collect()
    }
}

impl From<FormErrors> for InvoiceError {
    fn from(errors: FormErrors) -> Self {
        InvoiceError::Validation(errors.messages().join("; "))
    }
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

/// Check the `local@domain.tld` shape with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Check a 15 character GSTIN such as `22AAAAA0000A1Z5`.
///
/// Layout: 2 digit state code, 5 letter PAN prefix, 4 digits, 1 letter,
/// entity code (1-9 or A-Z), the literal `Z`, then a check character.
pub fn is_valid_gstin(gstin: &str) -> bool {
    let chars: Vec<char> = gstin.chars().collect();
    if chars.len() != 15 {
        return false;
    }

    let upper = |c: &char| c.is_ascii_uppercase();
    let digit = |c: &char| c.is_ascii_digit();

    chars[0..2].iter().all(digit)
        && chars[2..7].iter().all(upper)
        && chars[7..11].iter().all(digit)
        && upper(&chars[11])
        && (upper(&chars[12]) || ('1'..='9').contains(&chars[12]))
        && chars[13] == 'Z'
        && (upper(&chars[14]) || digit(&chars[14]))
}

/// Validate a customer form, collecting every field error
pub fn validate_customer(customer: &Customer) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    if customer.name.trim().is_empty() {
        errors.name = Some("Customer name is required".to_string());
    }

    let mobile = customer.mobile.trim();
    if mobile.is_empty() {
        errors.mobile = Some("Mobile number is required".to_string());
    } else if !all_digits(mobile, 10) {
        errors.mobile = Some("Invalid mobile number (10 digits required)".to_string());
    }

    if !customer.email.is_empty() && !is_valid_email(&customer.email) {
        errors.email = Some("Invalid email address".to_string());
    }

    if !customer.gst_number.is_empty() && !is_valid_gstin(&customer.gst_number) {
        errors.gst_number =
            Some("Invalid gst_number format (e.g., 22AAAAA0000A1Z5)".to_string());
    }

    if !customer.pincode.is_empty() && !all_digits(&customer.pincode, 6) {
        errors.pincode = Some("Invalid pincode (6 digits required)".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate that an amount is zero or more
pub fn validate_non_negative(label: &str, amount: &BigDecimal) -> InvoiceResult<()> {
    if *amount < zero() {
        Err(InvoiceError::Validation(format!(
            "{} cannot be negative",
            label
        )))
    } else {
        Ok(())
    }
}

/// Validate a product before it is added to the catalog
pub fn validate_product(product: &Product) -> InvoiceResult<()> {
    if product.name.trim().is_empty() {
        return Err(InvoiceError::Validation(
            "Product name is required".to_string(),
        ));
    }

    validate_non_negative("Rate", &product.rate)?;
    validate_non_negative("MRP", &product.mrp)?;
    validate_non_negative("Tax rate", &product.tax_rate)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer::new("c1".to_string(), "Ravi Traders".to_string(), "9876543210".to_string())
    }

    #[test]
    fn test_valid_customer() {
        let mut c = customer();
        c.email = "ravi@example.in".to_string();
        c.gst_number = "22AAAAA0000A1Z5".to_string();
        c.pincode = "800008".to_string();
        assert!(validate_customer(&c).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut c = Customer::default();
        c.email = "not an email".to_string();
        c.gst_number = "22AAAAA0000A1X5".to_string();
        c.pincode = "8000".to_string();

        let errors = validate_customer(&c).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some("Customer name is required"));
        assert_eq!(errors.mobile.as_deref(), Some("Mobile number is required"));
        assert!(errors.email.is_some());
        assert!(errors.gst_number.is_some());
        assert!(errors.pincode.is_some());
        assert_eq!(errors.messages().len(), 5);
    }

    #[test]
    fn test_mobile_must_be_ten_digits() {
        let mut c = customer();
        c.mobile = "98765".to_string();
        let errors = validate_customer(&c).unwrap_err();
        assert_eq!(
            errors.mobile.as_deref(),
            Some("Invalid mobile number (10 digits required)")
        );
    }

    #[test]
    fn test_gstin_shape() {
        assert!(is_valid_gstin("10FNZPS6138A1ZS"));
        assert!(is_valid_gstin("22AAAAA0000A1Z5"));
        assert!(!is_valid_gstin("22AAAAA0000A0Z5"));
        assert!(!is_valid_gstin("22aaaaa0000A1Z5"));
        assert!(!is_valid_gstin("22AAAAA0000A1Z"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_form_errors_into_invoice_error() {
        let errors = validate_customer(&Customer::default()).unwrap_err();
        let err: InvoiceError = errors.into();
        assert!(err.to_string().contains("Customer name is required"));
    }
}
