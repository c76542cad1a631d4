//! Invoice calculation walkthrough

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use invoice_core::{
    amount_to_words, compute_line_item, render_invoice_html, utils::MemoryStorage, BillingService,
    BusinessProfile, Customer, Product,
};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🧾 Invoice Core - Calculation Examples\n");

    // 1. A single line
    println!("📦 Line item (2 × ₹100 at 18%):");
    let line = compute_line_item(2, &BigDecimal::from(100), &BigDecimal::from(18))?;
    println!("  Base:  ₹{}", line.base_amount);
    println!("  Tax:   ₹{}", line.tax_amount);
    println!("  Total: ₹{}", line.total_amount);
    println!();

    // 2. Amounts in words
    println!("🔤 Amounts in words:");
    for amount in ["0", "0.50", "236", "100000", "12345678.90"] {
        let value = BigDecimal::from_str(amount)?;
        println!("  {:>12} → {}", amount, amount_to_words(&value));
    }
    println!();

    // 3. A full invoice
    let mut service = BillingService::new(MemoryStorage::new());
    let tea = service
        .add_product(Product::new(
            "tea".to_string(),
            "Assam Tea 500g".to_string(),
            BigDecimal::from(260),
            BigDecimal::from_str("245.50")?,
            BigDecimal::from(5),
        ))
        .await?;
    let kettle = service
        .add_product(Product::new(
            "kettle".to_string(),
            "Electric Kettle".to_string(),
            BigDecimal::from(1499),
            BigDecimal::from(1299),
            BigDecimal::from(18),
        ))
        .await?;
    let customer = service
        .add_customer(Customer::new(
            "c1".to_string(),
            "New E Kirana".to_string(),
            "8434861924".to_string(),
        ))
        .await?;

    let today = NaiveDate::from_ymd_opt(2024, 6, 10).ok_or("invalid date")?;
    let mut draft = service.new_draft(today)?;
    draft.select_customer(customer);
    draft.add_product(&tea)?;
    draft.add_product(&tea)?;
    draft.add_product(&kettle)?;
    draft.set_received_amount(BigDecimal::from(1000))?;

    let invoice = service.create_invoice(draft).await?;
    let totals = &invoice.totals;

    println!("🧮 Invoice #{}:", invoice.invoice_no.unwrap_or_default());
    println!("  Subtotal: ₹{}", totals.subtotal);
    println!("  CGST:     ₹{}", totals.cgst_total);
    println!("  SGST:     ₹{}", totals.sgst_total);
    println!("  Total:    ₹{}", totals.total_amount);
    println!("  Status:   {:?}", invoice.status);
    println!("  Due:      ₹{}", invoice.balance_due());
    println!("  In words: {}", invoice.amount_in_words());
    println!();

    let html = render_invoice_html(&invoice, &BusinessProfile::default(), service.settings());
    println!("🖨️  Rendered {} bytes of printable HTML", html.len());

    Ok(())
}
