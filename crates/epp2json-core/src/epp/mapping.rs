//! Positional mapping of tokenized EPP records onto invoice models.
//!
//! EDI++ records carry no field names, only positions. Each model has a
//! static slot table; a slot is applied when the record is longer than its
//! guard and the field at its index exists. Unfilled attributes keep their
//! zero value.

use crate::models::invoice::{Invoice, InvoiceItem};

use super::rules::{parse_amount, parse_date};

/// One positional field of a record.
struct Slot<T> {
    /// The slot applies only when `fields.len() > guard`.
    guard: usize,
    /// Zero-based position of the field.
    index: usize,
    apply: fn(&mut T, &str),
}

const fn header(index: usize, apply: fn(&mut Invoice, &str)) -> Slot<Invoice> {
    Slot {
        guard: index,
        index,
        apply,
    }
}

const fn item(index: usize, apply: fn(&mut InvoiceItem, &str)) -> Slot<InvoiceItem> {
    Slot {
        guard: index,
        index,
        apply,
    }
}

fn apply_slots<T: Default>(slots: &[Slot<T>], fields: &[String]) -> T {
    let mut target = T::default();
    for slot in slots {
        if fields.len() > slot.guard {
            if let Some(value) = fields.get(slot.index) {
                (slot.apply)(&mut target, value);
            }
        }
    }
    target
}

static HEADER_SLOTS: &[Slot<Invoice>] = &[
    header(0, |inv, v| inv.kind = v.to_string()),
    header(4, |inv, v| inv.number = v.to_string()),
    header(6, |inv, v| inv.internal_number = v.to_string()),
    header(11, |inv, v| inv.contractor_code = v.to_string()),
    header(12, |inv, v| inv.contractor_name = v.to_string()),
    header(13, |inv, v| inv.contractor_full_name = v.to_string()),
    header(14, |inv, v| inv.city = v.to_string()),
    header(15, |inv, v| inv.postal_code = v.to_string()),
    header(16, |inv, v| inv.address = v.to_string()),
    header(17, |inv, v| inv.nip = v.to_string()),
    // Guarded one position early: a 19-field record leaves category unset.
    Slot {
        guard: 18,
        ..header(19, |inv, v| inv.category = v.to_string())
    },
    header(21, |inv, v| inv.date = parse_date(v)),
    header(22, |inv, v| inv.issue_date = parse_date(v)),
    header(23, |inv, v| inv.sale_date = parse_date(v)),
    header(27, |inv, v| inv.net_amount = parse_amount(v)),
    header(28, |inv, v| inv.vat_amount = parse_amount(v)),
    header(29, |inv, v| inv.gross_amount = parse_amount(v)),
    header(34, |inv, v| inv.payment_date = parse_date(v)),
    header(41, |inv, v| inv.registrar = v.to_string()),
    header(46, |inv, v| inv.currency = v.to_string()),
];

static ITEM_SLOTS: &[Slot<InvoiceItem>] = &[
    item(0, |item, v| item.vat_rate = v.to_string()),
    item(1, |item, v| item.quantity = parse_amount(v)),
    item(2, |item, v| item.net_price = parse_amount(v)),
    item(3, |item, v| item.vat_amount = parse_amount(v)),
    item(4, |item, v| item.gross_price = parse_amount(v)),
    item(5, |item, v| item.net_total = parse_amount(v)),
    item(6, |item, v| item.vat_total = parse_amount(v)),
    item(7, |item, v| item.gross_total = parse_amount(v)),
];

/// Map a tokenized section header onto a new invoice with no items.
pub fn map_header(fields: &[String]) -> Invoice {
    apply_slots(HEADER_SLOTS, fields)
}

/// Map a tokenized content line onto a single invoice item.
pub fn map_item(fields: &[String]) -> InvoiceItem {
    apply_slots(ITEM_SLOTS, fields)
}
