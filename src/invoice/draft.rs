//! Invoice drafting: pick a customer, add products, adjust quantities

use bigdecimal::BigDecimal;
use chrono::{Duration, NaiveDate};

use crate::config::InvoiceSettings;
use crate::money::{round_currency, zero};
use crate::tax::gst::{aggregate_invoice, InvoiceTotals};
use crate::types::*;
use crate::utils::validation::validate_non_negative;

/// An invoice being assembled, before it has an id or number
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    customer: Option<Customer>,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    items: Vec<InvoiceItem>,
    received_amount: BigDecimal,
}

impl InvoiceDraft {
    /// Start a draft dated `today`, due after the configured number of days
    pub fn new(today: NaiveDate, settings: &InvoiceSettings) -> InvoiceResult<Self> {
        let due_date = Duration::try_days(settings.due_in_days)
            .filter(|_| settings.due_in_days >= 0)
            .and_then(|term| today.checked_add_signed(term))
            .ok_or_else(|| {
                InvoiceError::Config(format!(
                    "due_in_days {} gives no valid due date",
                    settings.due_in_days
                ))
            })?;

        Ok(Self {
            customer: None,
            invoice_date: today,
            due_date,
            items: Vec::new(),
            received_amount: zero(),
        })
    }

    pub fn select_customer(&mut self, customer: Customer) {
        tracing::debug!(customer_id = %customer.id, "customer selected");
        self.customer = Some(customer);
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Override the invoice and due dates
    pub fn set_dates(&mut self, invoice_date: NaiveDate, due_date: NaiveDate) -> InvoiceResult<()> {
        if due_date < invoice_date {
            return Err(InvoiceError::Validation(
                "Due date cannot be before the invoice date".to_string(),
            ));
        }
        self.invoice_date = invoice_date;
        self.due_date = due_date;
        Ok(())
    }

    pub fn invoice_date(&self) -> NaiveDate {
        self.invoice_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Record the amount already received against this invoice
    pub fn set_received_amount(&mut self, amount: BigDecimal) -> InvoiceResult<()> {
        validate_non_negative("Received amount", &amount)?;
        self.received_amount = amount;
        Ok(())
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    /// Add one unit of a product. A product already on the draft gets its
    /// quantity bumped instead of a second line.
    pub fn add_product(&mut self, product: &Product) -> InvoiceResult<()> {
        if let Some(existing) = self
            .items
            .iter()
            .find(|item| item.product_id == product.id)
        {
            let quantity = existing.quantity.checked_add(1).ok_or_else(|| {
                InvoiceError::Validation(format!(
                    "Quantity of {} cannot go any higher",
                    product.name
                ))
            })?;
            return self.update_quantity(&product.id, quantity);
        }

        let item = InvoiceItem::from_product(product, 1)?;
        tracing::debug!(product_id = %product.id, "line added");
        self.items.push(item);
        Ok(())
    }

    /// Set the quantity of a line; zero removes it
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> InvoiceResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or_else(|| InvoiceError::ProductNotFound(product_id.to_string()))?;

        item.set_quantity(quantity)?;
        tracing::debug!(product_id, quantity, "line quantity updated");
        Ok(())
    }

    /// Remove a line from the draft
    pub fn remove_item(&mut self, product_id: &str) -> InvoiceResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);

        if self.items.len() == before {
            return Err(InvoiceError::ProductNotFound(product_id.to_string()));
        }
        Ok(())
    }

    /// Current totals across all lines
    pub fn totals(&self) -> InvoiceTotals {
        aggregate_invoice(&self.items)
    }

    /// Turn the draft into an invoice. The id, number and creation time are
    /// left for the storing service to assign.
    pub fn finalize(self) -> InvoiceResult<Invoice> {
        let customer = self.customer.ok_or(InvoiceError::MissingCustomer)?;
        if self.items.is_empty() {
            return Err(InvoiceError::EmptyInvoice);
        }

        let totals = aggregate_invoice(&self.items);
        let status = PaymentStatus::from_received(&self.received_amount, &totals.total_amount);

        Ok(Invoice {
            id: String::new(),
            invoice_no: None,
            customer,
            items: self.items,
            totals,
            received_amount: round_currency(&self.received_amount),
            invoice_date: self.invoice_date,
            due_date: self.due_date,
            status,
            created_at: None,
        })
    }
}
