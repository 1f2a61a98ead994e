//! Invoice data models for EPP (EDI++) exports.
//!
//! Serialized field names are Polish (`typ`, `numer`, `pozycje`, ...) and
//! form the stable JSON schema of the converter output.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Purchase invoice (faktura zakupowa).
pub const PURCHASE: &str = "FZ";
/// Purchase credit note (korekta faktury zakupowej).
pub const PURCHASE_CORRECTION: &str = "KFZ";
/// Sale invoice (faktura sprzedażowa).
pub const SALE: &str = "FS";
/// Sale credit note (korekta faktury sprzedażowej).
pub const SALE_CORRECTION: &str = "KFS";

/// Complete contents of one EPP export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EppDocument {
    /// Export metadata from the `[INFO]` block (`version`, `system`, `company`).
    pub info: BTreeMap<String, String>,

    /// Invoices in document order.
    #[serde(rename = "faktury")]
    pub invoices: Vec<Invoice>,
}

/// A single accounting document (FZ, KFZ, FS or KFS).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Document type code.
    #[serde(rename = "typ")]
    pub kind: String,

    /// Document number as issued.
    #[serde(rename = "numer")]
    pub number: String,

    /// Number assigned by the accounting system.
    #[serde(rename = "numer_wewnetrzny")]
    pub internal_number: String,

    /// Not carried by header lines; kept so the output schema stays stable.
    #[serde(rename = "numer_dokumentu")]
    pub document_number: String,

    /// Posting date.
    #[serde(rename = "data", with = "timestamp")]
    pub date: Option<NaiveDateTime>,

    #[serde(rename = "data_wystawienia", with = "timestamp")]
    pub issue_date: Option<NaiveDateTime>,

    #[serde(rename = "data_sprzedazy", with = "timestamp")]
    pub sale_date: Option<NaiveDateTime>,

    #[serde(rename = "kod_kontrahenta")]
    pub contractor_code: String,

    /// Contractor short name.
    #[serde(rename = "nazwa_kontrahenta")]
    pub contractor_name: String,

    #[serde(rename = "pelna_nazwa_kontrahenta")]
    pub contractor_full_name: String,

    #[serde(rename = "miasto")]
    pub city: String,

    #[serde(rename = "kod_pocztowy")]
    pub postal_code: String,

    #[serde(rename = "adres")]
    pub address: String,

    /// Polish tax identification number.
    pub nip: String,

    pub category: String,

    #[serde(rename = "kwota_netto")]
    pub net_amount: f64,

    #[serde(rename = "kwota_vat")]
    pub vat_amount: f64,

    #[serde(rename = "kwota_brutto")]
    pub gross_amount: f64,

    /// Currency code (e.g. `PLN`).
    #[serde(rename = "waluta")]
    pub currency: String,

    /// Payment due date.
    #[serde(rename = "termin_platnosci", with = "timestamp")]
    pub payment_date: Option<NaiveDateTime>,

    /// Operator who registered the document.
    #[serde(rename = "rejestrator")]
    pub registrar: String,

    #[serde(rename = "pozycje")]
    pub items: Vec<InvoiceItem>,
}

/// A single invoice line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// VAT rate label as exported (`23`, `8`, `zw`, ...).
    #[serde(rename = "stawka_vat")]
    pub vat_rate: String,

    #[serde(rename = "ilosc")]
    pub quantity: f64,

    /// Unit price (net).
    #[serde(rename = "cena_netto")]
    pub net_price: f64,

    #[serde(rename = "kwota_vat")]
    pub vat_amount: f64,

    /// Unit price (gross).
    #[serde(rename = "cena_brutto")]
    pub gross_price: f64,

    #[serde(rename = "wartosc_netto")]
    pub net_total: f64,

    #[serde(rename = "wartosc_vat")]
    pub vat_total: f64,

    #[serde(rename = "wartosc_brutto")]
    pub gross_total: f64,
}

/// Simplified invoice listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceBrief {
    #[serde(rename = "typ")]
    pub kind: String,

    #[serde(rename = "numer")]
    pub number: String,

    /// Contractor short name.
    #[serde(rename = "kontrahent")]
    pub contractor: String,

    /// Gross amount.
    #[serde(rename = "kwota")]
    pub amount: f64,

    /// Issue date.
    #[serde(rename = "data", with = "timestamp")]
    pub date: Option<NaiveDateTime>,

    #[serde(rename = "liczba_pozycji")]
    pub items_count: usize,
}

impl Invoice {
    /// Build the simplified listing entry for this invoice.
    pub fn brief(&self) -> InvoiceBrief {
        InvoiceBrief {
            kind: self.kind.clone(),
            number: self.number.clone(),
            contractor: self.contractor_name.clone(),
            amount: self.gross_amount,
            date: self.issue_date,
            items_count: self.items.len(),
        }
    }

    /// Validate the invoice data and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.number.is_empty() {
            issues.push(format!("Missing invoice number (type: {})", self.kind));
        }

        if self.gross_amount < 0.0 {
            issues.push(format!("Negative gross amount in invoice {}", self.number));
        }

        if self.contractor_name.is_empty() {
            issues.push(format!("Missing contractor name in invoice {}", self.number));
        }

        issues
    }
}

impl EppDocument {
    /// Simplified listing of every invoice.
    pub fn briefs(&self) -> Vec<InvoiceBrief> {
        self.invoices.iter().map(Invoice::brief).collect()
    }
}
