//! GST line-item and invoice total calculations
//!
//! Every derived amount is rounded to two decimal places on its own, so a
//! line total may differ from `base + tax` by a paisa. Invoice totals reuse
//! the rounded tax of each line instead of recomputing it, which keeps them
//! consistent with what the user already saw per line.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::money::{round_currency, zero};
use crate::traits::TaxedLine;
use crate::types::{InvoiceError, InvoiceResult};

/// Raw line entry as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Units billed
    pub quantity: u32,
    /// Price per unit before tax
    pub unit_rate: BigDecimal,
    /// GST percentage (e.g. 18 for 18%)
    pub tax_percent: BigDecimal,
}

impl LineItemInput {
    pub fn new(quantity: u32, unit_rate: BigDecimal, tax_percent: BigDecimal) -> Self {
        Self {
            quantity,
            unit_rate,
            tax_percent,
        }
    }

    /// Compute the rounded amounts for this line
    pub fn compute(&self) -> InvoiceResult<LineItemResult> {
        compute_line_item(self.quantity, &self.unit_rate, &self.tax_percent)
    }
}

/// Rounded amounts for a single line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemResult {
    /// quantity × rate
    pub base_amount: BigDecimal,
    /// GST on the base amount
    pub tax_amount: BigDecimal,
    /// Base plus tax
    pub total_amount: BigDecimal,
}

/// Compute base, tax and total for one line.
///
/// The tax percentage is not range checked. A negative rate is rejected.
pub fn compute_line_item(
    quantity: u32,
    unit_rate: &BigDecimal,
    tax_percent: &BigDecimal,
) -> InvoiceResult<LineItemResult> {
    if *unit_rate < zero() {
        return Err(InvoiceError::Validation(format!(
            "Unit rate cannot be negative: {}",
            unit_rate
        )));
    }

    let base_amount = BigDecimal::from(quantity) * unit_rate;
    let tax_amount = (&base_amount * tax_percent) / BigDecimal::from(100);
    let total_amount = &base_amount + &tax_amount;

    Ok(LineItemResult {
        base_amount: round_currency(&base_amount),
        tax_amount: round_currency(&tax_amount),
        total_amount: round_currency(&total_amount),
    })
}

/// Invoice-level totals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of quantity × selling rate
    pub subtotal: BigDecimal,
    /// Amount GST is charged on; equal to the subtotal
    pub taxable_amount: BigDecimal,
    /// Central GST, half of the total tax
    pub cgst_total: BigDecimal,
    /// State GST, half of the total tax
    pub sgst_total: BigDecimal,
    /// Subtotal plus all tax
    pub total_amount: BigDecimal,
}

impl InvoiceTotals {
    /// Combined CGST and SGST
    pub fn total_tax(&self) -> BigDecimal {
        &self.cgst_total + &self.sgst_total
    }
}

/// Reduce line items into invoice totals.
///
/// Tax is always split evenly into CGST and SGST. Inter-state supplies,
/// which would normally carry IGST instead, get the same split.
pub fn aggregate_invoice<'a, T, I>(items: I) -> InvoiceTotals
where
    T: TaxedLine + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut subtotal = zero();
    let mut total_tax = zero();

    for item in items {
        subtotal += BigDecimal::from(item.quantity()) * item.selling_rate();
        total_tax += item.tax_amount();
    }

    let half_tax = &total_tax / BigDecimal::from(2);
    let total_amount = &subtotal + &total_tax;

    InvoiceTotals {
        taxable_amount: round_currency(&subtotal),
        subtotal: round_currency(&subtotal),
        cgst_total: round_currency(&half_tax),
        sgst_total: round_currency(&half_tax),
        total_amount: round_currency(&total_amount),
    }
}
