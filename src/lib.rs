//! # Invoice Core
//!
//! GST invoice computation for small Indian businesses: per-line tax,
//! invoice totals with a CGST/SGST split, amounts in words using lakh and
//! crore grouping, and a printable HTML invoice.
//!
//! ## Features
//!
//! - **Line items**: base, tax and total per line, each rounded to paise
//! - **Invoice totals**: subtotal, taxable amount, CGST, SGST and grand total
//! - **Amount in words**: "One Lakh Twenty Thousand Rupees and Fifty Paise"
//! - **Drafting**: add products, adjust quantities, derive payment status
//! - **Rendering**: self-contained A4 HTML ready for a PDF engine
//! - **Storage abstraction**: trait-based backend for invoices, products and customers
//!
//! ## Quick Start
//!
//! ```rust
//! use invoice_core::{amount_to_words, compute_line_item};
//! use bigdecimal::BigDecimal;
//!
//! let line = compute_line_item(2, &BigDecimal::from(100), &BigDecimal::from(18)).unwrap();
//! assert_eq!(line.total_amount.to_string(), "236.00");
//! assert_eq!(amount_to_words(&line.total_amount), "Two Hundred Thirty Six Rupees");
//! ```

pub mod billing;
pub mod config;
pub mod invoice;
pub mod money;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use billing::*;
pub use config::*;
pub use invoice::*;
pub use tax::gst::*;
pub use tax::words::*;
pub use traits::*;
pub use types::*;
