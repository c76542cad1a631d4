//! Traits for storage abstraction and tax aggregation

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::types::*;

/// A billed line that can be folded into invoice totals
pub trait TaxedLine {
    /// Units billed
    fn quantity(&self) -> u32;

    /// Rate charged per unit, before tax
    fn selling_rate(&self) -> &BigDecimal;

    /// Rounded tax already computed for the whole line
    fn tax_amount(&self) -> &BigDecimal;
}

impl TaxedLine for InvoiceItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn selling_rate(&self) -> &BigDecimal {
        &self.selling_rate
    }

    fn tax_amount(&self) -> &BigDecimal {
        &self.tax_amount
    }
}

/// Storage abstraction for invoices, products and customers
///
/// The billing service works against any backend (a REST API client, a local
/// cache, in-memory maps) that implements these methods.
#[async_trait]
pub trait InvoiceStorage: Send + Sync {
    /// Save a new or updated invoice
    async fn save_invoice(&mut self, invoice: &Invoice) -> InvoiceResult<()>;

    /// Get an invoice by ID
    async fn get_invoice(&self, invoice_id: &str) -> InvoiceResult<Option<Invoice>>;

    /// List all invoices
    async fn list_invoices(&self) -> InvoiceResult<Vec<Invoice>>;

    /// Delete an invoice
    async fn delete_invoice(&mut self, invoice_id: &str) -> InvoiceResult<()>;

    /// Highest invoice number issued so far, if any
    async fn last_invoice_no(&self) -> InvoiceResult<Option<u64>>;

    /// Save a new or updated product
    async fn save_product(&mut self, product: &Product) -> InvoiceResult<()>;

    /// Get a product by ID
    async fn get_product(&self, product_id: &str) -> InvoiceResult<Option<Product>>;

    /// List all products
    async fn list_products(&self) -> InvoiceResult<Vec<Product>>;

    /// Save a new or updated customer
    async fn save_customer(&mut self, customer: &Customer) -> InvoiceResult<()>;

    /// List all customers
    async fn list_customers(&self) -> InvoiceResult<Vec<Customer>>;
}
