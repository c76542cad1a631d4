//! Sales summaries for the dashboard

use bigdecimal::BigDecimal;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::MAX_CHART_DAYS;
use crate::money::{round_currency, zero};
use crate::types::*;

/// Headline figures shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum of all invoice totals
    pub total_sales: BigDecimal,
    pub total_invoices: usize,
    /// Outstanding balance across pending and partially paid invoices
    pub pending_amount: BigDecimal,
    /// Products at or below their reorder threshold
    pub low_stock_items: usize,
    /// Sales dated today or later
    pub today_sales: BigDecimal,
    /// Sales dated on or after the first of this month
    pub month_sales: BigDecimal,
}

fn sum_totals<'a>(invoices: impl Iterator<Item = &'a Invoice>) -> BigDecimal {
    let total: BigDecimal = invoices.map(|invoice| &invoice.totals.total_amount).sum();
    round_currency(&total)
}

impl DashboardStats {
    /// Compute the dashboard figures as of `today`
    pub fn compute(invoices: &[Invoice], products: &[Product], today: NaiveDate) -> Self {
        let start_of_month = today.with_day(1).unwrap_or(today);

        let pending: BigDecimal = invoices
            .iter()
            .filter(|invoice| invoice.status.is_outstanding())
            .map(|invoice| &invoice.totals.total_amount - &invoice.received_amount)
            .sum();

        Self {
            total_sales: sum_totals(invoices.iter()),
            total_invoices: invoices.len(),
            pending_amount: round_currency(&pending),
            low_stock_items: products.iter().filter(|p| p.is_low_stock()).count(),
            today_sales: sum_totals(invoices.iter().filter(|i| i.invoice_date >= today)),
            month_sales: sum_totals(
                invoices
                    .iter()
                    .filter(|i| i.invoice_date >= start_of_month),
            ),
        }
    }
}

/// One bar of the daily sales chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    /// `dd/mm` axis label
    pub label: String,
    pub amount: BigDecimal,
}

/// Sales per day for the `days` days ending with `today`, oldest first.
///
/// The window is capped at [`MAX_CHART_DAYS`] and stops at the earliest
/// representable date.
pub fn daily_sales(invoices: &[Invoice], today: NaiveDate, days: u32) -> Vec<SalesPoint> {
    (0..days.min(MAX_CHART_DAYS))
        .rev()
        .filter_map(|offset| today.checked_sub_signed(Duration::days(i64::from(offset))))
        .map(|date| SalesPoint {
            date,
            label: date.format("%d/%m").to_string(),
            amount: sum_totals(invoices.iter().filter(|i| i.invoice_date == date)),
        })
        .collect()
}

/// The `limit` most recently created invoices, newest first.
///
/// Invoices without a creation time sort last.
pub fn recent_invoices(invoices: &[Invoice], limit: usize) -> Vec<Invoice> {
    let mut sorted = invoices.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_sales: zero(),
            total_invoices: 0,
            pending_amount: zero(),
            low_stock_items: 0,
            today_sales: zero(),
            month_sales: zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::gst::InvoiceTotals;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn invoice(id: &str, day: NaiveDate, total: &str, received: &str) -> Invoice {
        let totals = InvoiceTotals {
            total_amount: dec(total),
            ..Default::default()
        };
        let mut invoice = Invoice {
            id: id.to_string(),
            invoice_no: None,
            customer: Customer::default(),
            items: Vec::new(),
            totals,
            received_amount: dec(received),
            invoice_date: day,
            due_date: day,
            status: PaymentStatus::Pending,
            created_at: day.and_hms_opt(10, 0, 0),
        };
        invoice.refresh_status();
        invoice
    }

    #[test]
    fn test_stats() {
        let previous_month = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let invoices = vec![
            invoice("a", previous_month, "1000", "0"),
            invoice("b", date(3), "500", "200"),
            invoice("c", date(10), "250", "250"),
        ];
        let mut product = Product::new(
            "p".to_string(),
            "Oil".to_string(),
            dec("10"),
            dec("10"),
            dec("5"),
        );
        product.min_stock = Some(5);
        product.stock = 2;

        let stats = DashboardStats::compute(&invoices, &[product], date(10));
        assert_eq!(stats.total_sales, dec("1750"));
        assert_eq!(stats.total_invoices, 3);
        assert_eq!(stats.pending_amount, dec("1300"));
        assert_eq!(stats.low_stock_items, 1);
        assert_eq!(stats.today_sales, dec("250"));
        assert_eq!(stats.month_sales, dec("750"));
    }

    #[test]
    fn test_stats_empty() {
        let stats = DashboardStats::compute(&[], &[], date(1));
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_daily_sales_window() {
        let invoices = vec![
            invoice("a", date(4), "100", "0"),
            invoice("b", date(10), "40", "0"),
            invoice("c", date(10), "60", "0"),
            invoice("d", date(1), "999", "0"),
        ];
        let points = daily_sales(&invoices, date(10), 7);

        assert_eq!(points.len(), 7);
        assert_eq!(points[0].date, date(4));
        assert_eq!(points[0].label, "04/06");
        assert_eq!(points[0].amount, dec("100"));
        assert_eq!(points[6].label, "10/06");
        assert_eq!(points[6].amount, dec("100"));
        assert_eq!(points[3].amount, zero());
    }

    #[test]
    fn test_daily_sales_window_is_capped() {
        let points = daily_sales(&[], date(10), 4_000_000_000);
        assert_eq!(points.len(), MAX_CHART_DAYS as usize);
        assert_eq!(points.last().map(|p| p.date), Some(date(10)));

        let points = daily_sales(&[], NaiveDate::MIN, 7);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, NaiveDate::MIN);
    }

    #[test]
    fn test_recent_invoices() {
        let mut undated = invoice("x", date(9), "1", "0");
        undated.created_at = None;
        let invoices = vec![
            invoice("a", date(1), "1", "0"),
            undated,
            invoice("b", date(5), "1", "0"),
            invoice("c", date(3), "1", "0"),
        ];
        let recent: Vec<String> = recent_invoices(&invoices, 3)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(recent, vec!["b", "c", "a"]);
    }
}
