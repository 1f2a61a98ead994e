//! Read-only statistics and filters over parsed invoices.
//!
//! Filters borrow from the input; none of these functions fail.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::invoice::{EppDocument, Invoice, PURCHASE, SALE};

/// Invoice counts of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceStats {
    /// All invoices, credit notes included.
    pub total: usize,
    /// FZ invoices.
    pub purchase: usize,
    /// FS invoices.
    pub sale: usize,
}

/// Summed amounts of a set of invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub net: f64,
    pub vat: f64,
    pub gross: f64,
}

/// Count all invoices and the base FZ/FS documents among them.
pub fn invoice_stats(document: &EppDocument) -> InvoiceStats {
    document
        .invoices
        .iter()
        .fold(InvoiceStats::default(), |mut stats, invoice| {
            stats.total += 1;
            match invoice.kind.as_str() {
                PURCHASE => stats.purchase += 1,
                SALE => stats.sale += 1,
                _ => {}
            }
            stats
        })
}

/// Count invoices per type code.
pub fn count_by_type(invoices: &[Invoice]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for invoice in invoices {
        *counts.entry(invoice.kind.clone()).or_insert(0) += 1;
    }
    counts
}

/// Invoices whose type code equals `kind`.
pub fn filter_by_type<'a>(invoices: &'a [Invoice], kind: &str) -> Vec<&'a Invoice> {
    invoices.iter().filter(|inv| inv.kind == kind).collect()
}

/// Invoices whose contractor code contains `code` (case-sensitive).
pub fn filter_by_contractor<'a>(invoices: &'a [Invoice], code: &str) -> Vec<&'a Invoice> {
    invoices
        .iter()
        .filter(|inv| inv.contractor_code.contains(code))
        .collect()
}

/// Invoices issued strictly between `start` and `end`.
///
/// Invoices without an issue date never match.
pub fn filter_by_issue_date(
    invoices: &[Invoice],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|inv| inv.issue_date.is_some_and(|date| date > start && date < end))
        .collect()
}

/// Sum net, VAT and gross amounts.
pub fn calculate_totals<'a, I>(invoices: I) -> Totals
where
    I: IntoIterator<Item = &'a Invoice>,
{
    invoices.into_iter().fold(Totals::default(), |totals, inv| Totals {
        net: totals.net + inv.net_amount,
        vat: totals.vat + inv.vat_amount,
        gross: totals.gross + inv.gross_amount,
    })
}

/// Group invoices by the `YYYY-MM` of their issue date.
///
/// Invoices without an issue date are left out.
pub fn group_by_month(invoices: &[Invoice]) -> BTreeMap<String, Vec<&Invoice>> {
    let mut grouped: BTreeMap<String, Vec<&Invoice>> = BTreeMap::new();
    for invoice in invoices {
        if let Some(date) = invoice.issue_date {
            grouped
                .entry(date.format("%Y-%m").to_string())
                .or_default()
                .push(invoice);
        }
    }
    grouped
}
