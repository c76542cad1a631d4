//! Core records for products, customers and invoices

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::money::{round_currency, zero};
use crate::tax::gst::{compute_line_item, InvoiceTotals};
use crate::tax::words::amount_to_words;

/// Catalog product that can be billed on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier assigned by the catalog
    pub id: String,
    /// Display name
    pub name: String,
    pub description: Option<String>,
    /// Maximum retail price printed on the invoice
    pub mrp: BigDecimal,
    pub category: String,
    /// Selling rate per unit, before tax
    pub rate: BigDecimal,
    /// GST percentage applied to this product (e.g. 18 for 18%)
    pub tax_rate: BigDecimal,
    /// Unit of sale (pcs, kg, box, ...)
    pub unit: String,
    /// Units currently in stock
    pub stock: u32,
    /// Reorder threshold; `None` disables low-stock tracking
    pub min_stock: Option<u32>,
    pub barcode: Option<String>,
    pub hsn_code: Option<String>,
}

impl Product {
    /// Create a product with the fields an invoice needs
    pub fn new(
        id: String,
        name: String,
        mrp: BigDecimal,
        rate: BigDecimal,
        tax_rate: BigDecimal,
    ) -> Self {
        Self {
            id,
            name,
            description: None,
            mrp,
            category: String::new(),
            rate,
            tax_rate,
            unit: "pcs".to_string(),
            stock: 0,
            min_stock: None,
            barcode: None,
            hsn_code: None,
        }
    }

    /// Whether stock has fallen to or below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        match self.min_stock {
            Some(min) if min > 0 => self.stock <= min,
            _ => false,
        }
    }
}

/// Customer billed on an invoice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// Ten digit mobile number
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    /// GSTIN, empty for unregistered customers
    pub gst_number: String,
    pub place_of_supply: String,
    pub customer_type: String,
    pub credit_limit: String,
    pub notes: String,
}

impl Customer {
    /// Create a customer with a name and mobile number
    pub fn new(id: String, name: String, mobile: String) -> Self {
        Self {
            id,
            name,
            mobile,
            ..Default::default()
        }
    }
}

/// One billed product on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub mrp: BigDecimal,
    /// Rate actually charged per unit, before tax
    pub selling_rate: BigDecimal,
    /// GST percentage
    pub tax_rate: BigDecimal,
    /// Rounded tax for the whole line, as shown to the user
    pub tax_amount: BigDecimal,
    /// Rounded line total including tax
    pub amount: BigDecimal,
}

impl InvoiceItem {
    /// Build a line for `quantity` units of `product`
    pub fn from_product(product: &Product, quantity: u32) -> InvoiceResult<Self> {
        let result = compute_line_item(quantity, &product.rate, &product.tax_rate)?;
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            mrp: product.mrp.clone(),
            selling_rate: product.rate.clone(),
            tax_rate: product.tax_rate.clone(),
            tax_amount: result.tax_amount,
            amount: result.total_amount,
        })
    }

    /// Change the quantity and recompute tax and amount from the stored rates
    pub fn set_quantity(&mut self, quantity: u32) -> InvoiceResult<()> {
        let result = compute_line_item(quantity, &self.selling_rate, &self.tax_rate)?;
        self.quantity = quantity;
        self.tax_amount = result.tax_amount;
        self.amount = result.total_amount;
        Ok(())
    }
}

/// Payment state of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Fully paid
    Paid,
    /// Nothing received yet
    Pending,
    /// Some amount received, balance outstanding
    Partial,
    /// Unpaid past its due date, see [`Invoice::effective_status`]
    Overdue,
}

impl PaymentStatus {
    /// Derive the status from the amount received against the invoice total
    pub fn from_received(received: &BigDecimal, total: &BigDecimal) -> Self {
        if received >= total {
            PaymentStatus::Paid
        } else if *received > zero() {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Pending
        }
    }

    /// Whether an amount is still owed
    pub fn is_outstanding(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Pending | PaymentStatus::Partial | PaymentStatus::Overdue
        )
    }
}

/// A finalized invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Identifier, assigned when the invoice is stored
    pub id: String,
    /// Sequential invoice number, assigned when the invoice is stored
    pub invoice_no: Option<u64>,
    pub customer: Customer,
    pub items: Vec<InvoiceItem>,
    pub totals: InvoiceTotals,
    pub received_amount: BigDecimal,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    pub created_at: Option<NaiveDateTime>,
}

impl Invoice {
    /// Amount still owed, never negative
    pub fn balance_due(&self) -> BigDecimal {
        let balance = &self.totals.total_amount - &self.received_amount;
        if balance > zero() {
            round_currency(&balance)
        } else {
            round_currency(&zero())
        }
    }

    /// Grand total in Indian-numbering words
    pub fn amount_in_words(&self) -> String {
        amount_to_words(&self.totals.total_amount)
    }

    /// Recompute the status from the received amount
    pub fn refresh_status(&mut self) {
        self.status = PaymentStatus::from_received(&self.received_amount, &self.totals.total_amount);
    }

    /// Not paid and the due date is before `today`. An invoice due today is
    /// not yet overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != PaymentStatus::Paid && self.due_date < today
    }

    /// Status as shown in invoice lists on `today`; the stored status is
    /// left untouched
    pub fn effective_status(&self, today: NaiveDate) -> PaymentStatus {
        if self.is_overdue(today) {
            PaymentStatus::Overdue
        } else {
            self.status
        }
    }
}

/// Errors produced while computing, drafting or storing invoices
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Please select a customer")]
    MissingCustomer,
    #[error("Please add at least one product")]
    EmptyInvoice,
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for invoice operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_payment_status_from_received() {
        let total = dec("236.00");
        assert_eq!(PaymentStatus::from_received(&dec("236"), &total), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_received(&dec("300"), &total), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_received(&dec("100"), &total), PaymentStatus::Partial);
        assert_eq!(PaymentStatus::from_received(&dec("0"), &total), PaymentStatus::Pending);
    }

    fn invoice_due(due: NaiveDate, total: &str, received: &str) -> Invoice {
        let mut invoice = Invoice {
            id: "inv".to_string(),
            invoice_no: Some(1),
            customer: Customer::default(),
            items: Vec::new(),
            totals: InvoiceTotals {
                total_amount: dec(total),
                ..Default::default()
            },
            received_amount: dec(received),
            invoice_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            due_date: due,
            status: PaymentStatus::Pending,
            created_at: None,
        };
        invoice.refresh_status();
        invoice
    }

    #[test]
    fn test_overdue_is_derived_from_due_date() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let day_after = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();

        let pending = invoice_due(due, "100", "0");
        assert!(!pending.is_overdue(due));
        assert_eq!(pending.effective_status(due), PaymentStatus::Pending);
        assert!(pending.is_overdue(day_after));
        assert_eq!(pending.effective_status(day_after), PaymentStatus::Overdue);
        assert_eq!(pending.status, PaymentStatus::Pending);

        let partial = invoice_due(due, "100", "40");
        assert_eq!(partial.effective_status(day_after), PaymentStatus::Overdue);

        let paid = invoice_due(due, "100", "100");
        assert!(!paid.is_overdue(day_after));
        assert_eq!(paid.effective_status(day_after), PaymentStatus::Paid);
    }

    #[test]
    fn test_low_stock() {
        let mut product = Product::new(
            "p1".to_string(),
            "Rice".to_string(),
            dec("60"),
            dec("55"),
            dec("5"),
        );
        assert!(!product.is_low_stock());

        product.min_stock = Some(10);
        product.stock = 10;
        assert!(product.is_low_stock());

        product.stock = 11;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_item_quantity_recompute() {
        let product = Product::new(
            "p1".to_string(),
            "Soap".to_string(),
            dec("120"),
            dec("100"),
            dec("18"),
        );
        let mut item = InvoiceItem::from_product(&product, 1).unwrap();
        assert_eq!(item.tax_amount, dec("18"));
        assert_eq!(item.amount, dec("118"));

        item.set_quantity(2).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.tax_amount, dec("36"));
        assert_eq!(item.amount, dec("236"));
    }
}
