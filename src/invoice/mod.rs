//! Invoice drafting, display formatting and printable rendering

pub mod draft;
pub mod format;
pub mod template;

pub use draft::InvoiceDraft;
pub use template::render_invoice_html;
