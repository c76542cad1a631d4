//! Printable A4 invoice rendered as a self-contained HTML document
//!
//! The HTML is handed to whatever PDF engine the host platform provides.
//! Every interpolated value is escaped.

use std::fmt::Write;

use bigdecimal::BigDecimal;

use crate::config::{BusinessProfile, InvoiceSettings};
use crate::invoice::format::{currency, format_date};
use crate::money::zero;
use crate::types::{Invoice, InvoiceItem};

const STYLE: &str = r#"
    @page { size: A4; margin: 18mm 12mm; }
    body { font-family: Arial, Helvetica, sans-serif; font-size: 12px; color: #000; margin: 0; padding: 0; }
    .container { padding: 14px; }
    .company { font-size: 18px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.5px; }
    .comp-address { font-size: 11px; line-height: 1.35; margin-top: 6px; }
    .invoice-title { text-align: center; font-weight: 700; margin: 10px 0 6px 0; font-size: 14px; text-transform: uppercase; }
    .meta { display: flex; gap: 12px; font-size: 11px; }
    .meta div { min-width: 33%; }
    .box { border: 1px solid #000; padding: 8px; font-size: 11px; line-height: 1.35; }
    .two-cols { display: flex; gap: 12px; margin-top: 10px; }
    .col { flex: 1; }
    table.items { width: 100%; border-collapse: collapse; margin-top: 12px; table-layout: fixed; font-size: 11px; }
    table.items th, table.items td { border: 1px solid #000; padding: 6px; vertical-align: top; word-wrap: break-word; }
    table.items th { background: #f7f7f7; font-weight: 700; text-align: left; }
    .c-sno { width: 6%; }
    .c-item { width: 44%; }
    .c-qty { width: 8%; text-align: center; }
    .c-mrp, .c-rate, .c-tax { width: 10%; text-align: right; }
    .c-amt { width: 12%; text-align: right; }
    .subtotal { margin-top: 8px; font-size: 11px; }
    .summary { margin-top: 12px; display: flex; justify-content: space-between; gap: 12px; }
    .bank { border: 1px solid #000; padding: 8px; width: 60%; font-size: 11px; }
    .qr { width: 35%; text-align: center; font-size: 11px; }
    .qr img { width: 140px; height: 140px; object-fit: contain; margin-top: 8px; }
    .amount-box { margin-top: 12px; float: right; width: 38%; font-size: 11px; line-height: 1.6; text-align: right; }
    .total-words { margin-top: 18px; font-weight: 700; font-size: 11px; }
    .terms { margin-top: 14px; font-size: 11px; line-height: 1.4; }
    .clear { clear: both; }
"#;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

struct Renderer<'a> {
    out: String,
    symbol: &'a str,
}

fn money(symbol: &str, amount: &BigDecimal) -> String {
    escape_html(&currency(symbol, Some(amount)))
}

impl Renderer<'_> {
    // write! into a String cannot fail
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn header(&mut self, business: &BusinessProfile, settings: &InvoiceSettings) {
        let _ = write!(
            self.out,
            r#"<div class="header">
  <div class="company">{}</div>
  <div class="comp-address">
    {}<br/>
    Mobile : {}<br/>
    Email : {}<br/>
    GSTIN : {}<br/>
    PAN Number : {}
  </div>
</div>
<div class="invoice-title">{}</div>
"#,
            escape_html(&business.name),
            escape_html(&business.address),
            escape_html(&business.mobile),
            escape_html(&business.email),
            escape_html(&business.gst_number),
            escape_html(&business.pan),
            escape_html(&settings.title),
        );
    }

    fn meta(&mut self, invoice: &Invoice) {
        let number = invoice
            .invoice_no
            .map(|n| n.to_string())
            .unwrap_or_default();
        let _ = write!(
            self.out,
            r#"<div class="meta">
  <div><b>Invoice No.</b> {}</div>
  <div><b>Invoice Date</b> {}</div>
  <div><b>Due Date</b> {}</div>
</div>
"#,
            escape_html(&number),
            format_date(Some(invoice.invoice_date)),
            format_date(Some(invoice.due_date)),
        );
    }

    fn parties(&mut self, invoice: &Invoice) {
        let customer = &invoice.customer;
        let place_of_supply = if customer.place_of_supply.is_empty() {
            &customer.address
        } else {
            &customer.place_of_supply
        };
        let _ = write!(
            self.out,
            r#"<div class="two-cols">
  <div class="col"><div class="box">
    <strong>BILL TO</strong><br/>
    {name}<br/>
    {address}<br/>
    Mobile : {mobile}<br/>
    Place of Supply : {supply}
  </div></div>
  <div class="col"><div class="box">
    <strong>SHIP TO</strong><br/>
    {name}<br/>
    {address}
  </div></div>
</div>
"#,
            name = escape_html(&customer.name),
            address = escape_html(&customer.address),
            mobile = escape_html(&customer.mobile),
            supply = escape_html(place_of_supply),
        );
    }

    fn item_row(&mut self, index: usize, item: &InvoiceItem) {
        let tax_rate = if item.tax_rate > zero() {
            format!("{}%", item.tax_rate.normalized())
        } else {
            String::new()
        };
        let symbol = self.symbol;
        let _ = write!(
            self.out,
            r#"<tr>
  <td class="c-sno">{}</td>
  <td class="c-item">{}</td>
  <td class="c-qty">{}</td>
  <td class="c-mrp">{}</td>
  <td class="c-rate">{}</td>
  <td class="c-tax">{}<br/>{}</td>
  <td class="c-amt">{}</td>
</tr>
"#,
            index + 1,
            escape_html(&item.product_name),
            item.quantity,
            money(symbol, &item.mrp),
            money(symbol, &item.selling_rate),
            escape_html(&tax_rate),
            money(symbol, &item.tax_amount),
            money(symbol, &item.amount),
        );
    }

    fn items(&mut self, invoice: &Invoice) {
        self.line(
            r#"<table class="items">
<thead><tr>
  <th class="c-sno">S.NO.</th><th class="c-item">ITEMS</th><th class="c-qty">QTY.</th>
  <th class="c-mrp">MRP</th><th class="c-rate">RATE</th><th class="c-tax">TAX</th><th class="c-amt">AMOUNT</th>
</tr></thead>
<tbody>"#,
        );

        if invoice.items.is_empty() {
            self.line(r#"<tr><td colspan="7" style="padding:14px; text-align:center;">No items</td></tr>"#);
        }
        for (index, item) in invoice.items.iter().enumerate() {
            self.item_row(index, item);
        }

        self.line("</tbody>\n</table>");

        let symbol = self.symbol;
        let _ = write!(
            self.out,
            r#"<div class="subtotal">
  <strong>SUBTOTAL</strong>
  <div>Qty: {} &nbsp;&nbsp;&nbsp; Tax: {} &nbsp;&nbsp;&nbsp; Total: {}</div>
</div>
"#,
            invoice.items.len(),
            money(symbol, &invoice.totals.total_tax()),
            money(symbol, &invoice.totals.total_amount),
        );
    }

    fn payment(&mut self, business: &BusinessProfile) {
        let qr = business
            .qr_code
            .as_deref()
            .map(|src| format!(r#"<img src="{}" alt="QR"/>"#, escape_html(src)))
            .unwrap_or_default();
        let _ = write!(
            self.out,
            r#"<div class="summary">
  <div class="bank">
    <strong>BANK DETAILS</strong><br/>
    Name: {}<br/>
    IFSC Code: {}<br/>
    Account No: {}<br/>
    Bank: {}
  </div>
  <div class="qr">
    <strong>PAYMENT QR CODE</strong><br/>
    <div>{}</div>
    <div>UPI ID:<br/>{}</div>
  </div>
</div>
"#,
            escape_html(&business.bank_name),
            escape_html(&business.ifsc),
            escape_html(&business.account_number),
            escape_html(&business.bank_branch),
            qr,
            escape_html(&business.upi_id),
        );
    }

    fn amounts(&mut self, invoice: &Invoice) {
        let totals = &invoice.totals;
        let symbol = self.symbol;
        let _ = write!(
            self.out,
            r#"<div class="amount-box">
  Taxable Amount: {}<br/>
  CGST: {}<br/>
  SGST: {}<br/>
  <div><b>Total Amount: {}</b></div>
  Received Amount: {}
</div>
<div class="clear"></div>
<div class="total-words">{}</div>
"#,
            money(symbol, &totals.taxable_amount),
            money(symbol, &totals.cgst_total),
            money(symbol, &totals.sgst_total),
            money(symbol, &totals.total_amount),
            money(symbol, &invoice.received_amount),
            escape_html(&invoice.amount_in_words()),
        );
    }

    fn terms(&mut self, settings: &InvoiceSettings) {
        self.line(r#"<div class="terms">"#);
        self.line("<strong>TERMS AND CONDITIONS</strong><br/>");
        for term in &settings.terms {
            let _ = writeln!(self.out, "{}<br/>", escape_html(term));
        }
        self.line("</div>");
    }
}

/// Render a finalized invoice as a printable HTML page
pub fn render_invoice_html(
    invoice: &Invoice,
    business: &BusinessProfile,
    settings: &InvoiceSettings,
) -> String {
    let mut renderer = Renderer {
        out: String::with_capacity(8 * 1024),
        symbol: &settings.currency_symbol,
    };

    renderer.line("<!doctype html>");
    renderer.line("<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Invoice</title>");
    let _ = writeln!(renderer.out, "<style>{}</style>", STYLE);
    renderer.line("</head>\n<body>\n<div class=\"container\">");

    renderer.header(business, settings);
    renderer.meta(invoice);
    renderer.parties(invoice);
    renderer.items(invoice);
    renderer.payment(business);
    renderer.amounts(invoice);
    renderer.terms(settings);

    renderer.line("</div>\n</body>\n</html>");

    tracing::debug!(
        invoice_id = %invoice.id,
        bytes = renderer.out.len(),
        "invoice rendered"
    );
    renderer.out
}
