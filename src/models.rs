//! Domain types for medicines, scan results, and listings

use crate::error::ScanError;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

/// Items expiring within this many calendar months count as near-expiry
pub const NEAR_EXPIRY_MONTHS: i32 = 5;

/// Stock below this many units counts as low
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// Peer-trade listings are offered at 60% of the retail price
pub const PEER_PRICE_FACTOR: f64 = 0.6;

/// Raw medicine details as returned by the model, before validation.
///
/// All six fields are required; a response missing any of them fails to
/// deserialize. Numbers arrive as JSON numbers, the expiry date as text.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawMedicineDetails {
    pub name: String,
    pub dosage: String,
    pub price: f64,
    pub stock: f64,
    pub expiry_date: String,
    pub category: String,
}

/// Validated medicine details extracted from a packaging photo.
///
/// Only produced by [`MedicineDetails::try_from`]; every instance is fully
/// populated and well-typed.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineDetails {
    pub name: String,
    pub dosage: String,
    pub price: f64,
    pub stock: u32,
    pub expiry_date: NaiveDate,
    pub category: String,
}

impl TryFrom<RawMedicineDetails> for MedicineDetails {
    type Error = ScanError;

    fn try_from(raw: RawMedicineDetails) -> Result<Self, ScanError> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(ScanError::Schema("medicine name is empty".to_string()));
        }
        if !raw.price.is_finite() || raw.price < 0.0 {
            return Err(ScanError::Schema(format!(
                "price must be a non-negative number, got {}",
                raw.price
            )));
        }
        if !raw.stock.is_finite() || raw.stock < 0.0 || raw.stock.fract() != 0.0 {
            return Err(ScanError::Schema(format!(
                "stock must be a non-negative whole number, got {}",
                raw.stock
            )));
        }
        if raw.stock > u32::MAX as f64 {
            return Err(ScanError::Schema(format!(
                "stock out of range: {}",
                raw.stock
            )));
        }
        let expiry_date = NaiveDate::parse_from_str(raw.expiry_date.trim(), "%Y-%m-%d")
            .map_err(|e| {
                ScanError::Schema(format!(
                    "expiry date '{}' is not a YYYY-MM-DD date: {}",
                    raw.expiry_date, e
                ))
            })?;
        Ok(MedicineDetails {
            name,
            dosage: raw.dosage,
            price: raw.price,
            stock: raw.stock as u32,
            expiry_date,
            category: raw.category,
        })
    }
}

/// A committed catalog entry with stable identity and owner attribution
#[derive(Debug, Clone, PartialEq)]
pub struct Medicine {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub price: f64,
    pub stock: u32,
    pub expiry_date: NaiveDate,
    pub chemist_id: String,
    pub chemist_name: String,
    pub category: String,
    pub description: String,
    /// Per-item customer discount in percent, set on near-expiry listings
    pub near_expiry_discount: Option<u8>,
}

impl Medicine {
    /// Returns true if this item's stock is below the low-stock threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Returns true if this item expires within the near-expiry window.
    ///
    /// The window is a calendar-month difference, so an item expiring later
    /// in the current month still counts, and already-expired items do too.
    pub fn is_near_expiry(&self, today: NaiveDate) -> bool {
        let diff_months = (self.expiry_date.year() - today.year()) * 12
            + (self.expiry_date.month() as i32 - today.month() as i32);
        diff_months <= NEAR_EXPIRY_MONTHS
    }

    /// Customer-facing price after any near-expiry discount
    pub fn discounted_price(&self) -> f64 {
        match self.near_expiry_discount {
            Some(pct) => self.price * (1.0 - f64::from(pct) / 100.0),
            None => self.price,
        }
    }

    /// Price when listed on the peer-trade marketplace
    pub fn peer_price(&self) -> f64 {
        self.price * PEER_PRICE_FACTOR
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
