//! Billing service that coordinates drafting, storage and reporting

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::billing::dashboard::{daily_sales, recent_invoices, DashboardStats, SalesPoint};
use crate::config::InvoiceSettings;
use crate::invoice::InvoiceDraft;
use crate::money::round_currency;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{validate_customer, validate_non_negative, validate_product};

/// Main billing system over a storage backend
pub struct BillingService<S: InvoiceStorage> {
    storage: S,
    settings: InvoiceSettings,
}

impl<S: InvoiceStorage> BillingService<S> {
    /// Create a new billing service with default settings
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, InvoiceSettings::default())
    }

    /// Create a new billing service with custom settings
    pub fn with_settings(storage: S, settings: InvoiceSettings) -> Self {
        Self { storage, settings }
    }

    pub fn settings(&self) -> &InvoiceSettings {
        &self.settings
    }

    /// Start a new draft dated `today`
    pub fn new_draft(&self, today: NaiveDate) -> InvoiceResult<InvoiceDraft> {
        InvoiceDraft::new(today, &self.settings)
    }

    // Invoice operations
    /// Finalize a draft, number it and store it
    pub async fn create_invoice(&mut self, draft: InvoiceDraft) -> InvoiceResult<Invoice> {
        let mut invoice = draft.finalize()?;

        let next_no = self.storage.last_invoice_no().await?.unwrap_or(0) + 1;
        invoice.id = uuid::Uuid::new_v4().to_string();
        invoice.invoice_no = Some(next_no);
        invoice.created_at = Some(chrono::Utc::now().naive_utc());

        self.storage.save_invoice(&invoice).await?;

        tracing::info!(
            invoice_id = %invoice.id,
            invoice_no = next_no,
            total = %invoice.totals.total_amount,
            status = ?invoice.status,
            "invoice created"
        );
        Ok(invoice)
    }

    /// Get an invoice by ID
    pub async fn get_invoice(&self, invoice_id: &str) -> InvoiceResult<Option<Invoice>> {
        self.storage.get_invoice(invoice_id).await
    }

    /// Get an invoice by ID, returning an error if not found
    pub async fn get_invoice_required(&self, invoice_id: &str) -> InvoiceResult<Invoice> {
        self.storage
            .get_invoice(invoice_id)
            .await?
            .ok_or_else(|| InvoiceError::InvoiceNotFound(invoice_id.to_string()))
    }

    /// List all invoices
    pub async fn list_invoices(&self) -> InvoiceResult<Vec<Invoice>> {
        self.storage.list_invoices().await
    }

    /// Delete an invoice
    pub async fn delete_invoice(&mut self, invoice_id: &str) -> InvoiceResult<()> {
        self.storage.delete_invoice(invoice_id).await?;
        tracing::info!(invoice_id, "invoice deleted");
        Ok(())
    }

    /// Add a payment to an invoice and update its status
    pub async fn record_payment(
        &mut self,
        invoice_id: &str,
        amount: &BigDecimal,
    ) -> InvoiceResult<Invoice> {
        validate_non_negative("Payment", amount)?;

        let mut invoice = self.get_invoice_required(invoice_id).await?;
        invoice.received_amount = round_currency(&(&invoice.received_amount + amount));
        invoice.refresh_status();

        self.storage.save_invoice(&invoice).await?;

        tracing::info!(
            invoice_id,
            amount = %amount,
            status = ?invoice.status,
            "payment recorded"
        );
        Ok(invoice)
    }

    // Catalog operations
    /// Validate and store a product
    pub async fn add_product(&mut self, product: Product) -> InvoiceResult<Product> {
        validate_product(&product)?;
        self.storage.save_product(&product).await?;
        tracing::debug!(product_id = %product.id, "product saved");
        Ok(product)
    }

    /// Get a product by ID, returning an error if not found
    pub async fn get_product_required(&self, product_id: &str) -> InvoiceResult<Product> {
        self.storage
            .get_product(product_id)
            .await?
            .ok_or_else(|| InvoiceError::ProductNotFound(product_id.to_string()))
    }

    /// Products whose name or description contains `query`, ignoring case
    pub async fn search_products(&self, query: &str) -> InvoiceResult<Vec<Product>> {
        let needle = query.to_lowercase();
        let products = self.storage.list_products().await?;
        Ok(products
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Validate and store a customer
    pub async fn add_customer(&mut self, customer: Customer) -> InvoiceResult<Customer> {
        validate_customer(&customer)?;
        self.storage.save_customer(&customer).await?;
        tracing::debug!(customer_id = %customer.id, "customer saved");
        Ok(customer)
    }

    /// Customers whose name contains `query` (ignoring case) or whose
    /// mobile number contains it
    pub async fn search_customers(&self, query: &str) -> InvoiceResult<Vec<Customer>> {
        let needle = query.to_lowercase();
        let customers = self.storage.list_customers().await?;
        Ok(customers
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.mobile.contains(query))
            .collect())
    }

    // Reporting
    /// Headline dashboard figures as of `today`
    pub async fn dashboard(&self, today: NaiveDate) -> InvoiceResult<DashboardStats> {
        let invoices = self.storage.list_invoices().await?;
        let products = self.storage.list_products().await?;
        Ok(DashboardStats::compute(&invoices, &products, today))
    }

    /// The most recently created invoices, as many as the settings allow
    pub async fn recent_invoices(&self) -> InvoiceResult<Vec<Invoice>> {
        let invoices = self.storage.list_invoices().await?;
        Ok(recent_invoices(&invoices, self.settings.recent_invoice_count))
    }

    /// Daily sales over the configured chart window ending `today`
    pub async fn sales_chart(&self, today: NaiveDate) -> InvoiceResult<Vec<SalesPoint>> {
        let invoices = self.storage.list_invoices().await?;
        Ok(daily_sales(&invoices, today, self.settings.chart_days))
    }
}
