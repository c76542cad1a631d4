//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
    products: Arc<RwLock<HashMap<String, Product>>>,
    customers: Arc<RwLock<HashMap<String, Customer>>>,
}

fn read<T>(lock: &RwLock<T>) -> InvoiceResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| InvoiceError::Storage("storage lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> InvoiceResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| InvoiceError::Storage("storage lock poisoned".to_string()))
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            invoices: Arc::new(RwLock::new(HashMap::new())),
            products: Arc::new(RwLock::new(HashMap::new())),
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> InvoiceResult<()> {
        write(&self.invoices)?.clear();
        write(&self.products)?.clear();
        write(&self.customers)?.clear();
        Ok(())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceStorage for MemoryStorage {
    async fn save_invoice(&mut self, invoice: &Invoice) -> InvoiceResult<()> {
        write(&self.invoices)?.insert(invoice.id.clone(), invoice.clone());
        Ok(())
    }

    async fn get_invoice(&self, invoice_id: &str) -> InvoiceResult<Option<Invoice>> {
        Ok(read(&self.invoices)?.get(invoice_id).cloned())
    }

    async fn list_invoices(&self) -> InvoiceResult<Vec<Invoice>> {
        let mut invoices: Vec<Invoice> = read(&self.invoices)?.values().cloned().collect();
        invoices.sort_by_key(|invoice| invoice.invoice_no);
        Ok(invoices)
    }

    async fn delete_invoice(&mut self, invoice_id: &str) -> InvoiceResult<()> {
        if write(&self.invoices)?.remove(invoice_id).is_some() {
            Ok(())
        } else {
            Err(InvoiceError::InvoiceNotFound(invoice_id.to_string()))
        }
    }

    async fn last_invoice_no(&self) -> InvoiceResult<Option<u64>> {
        Ok(read(&self.invoices)?
            .values()
            .filter_map(|invoice| invoice.invoice_no)
            .max())
    }

    async fn save_product(&mut self, product: &Product) -> InvoiceResult<()> {
        write(&self.products)?.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn get_product(&self, product_id: &str) -> InvoiceResult<Option<Product>> {
        Ok(read(&self.products)?.get(product_id).cloned())
    }

    async fn list_products(&self) -> InvoiceResult<Vec<Product>> {
        let mut products: Vec<Product> = read(&self.products)?.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn save_customer(&mut self, customer: &Customer) -> InvoiceResult<()> {
        write(&self.customers)?.insert(customer.id.clone(), customer.clone());
        Ok(())
    }

    async fn list_customers(&self) -> InvoiceResult<Vec<Customer>> {
        let mut customers: Vec<Customer> = read(&self.customers)?.values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }
}
