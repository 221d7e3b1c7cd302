//! In-memory medicine catalog with explicit commit semantics
//!
//! Scanned details only enter the catalog through [`Catalog::commit`];
//! discarding a scan is simply never calling it.

use crate::models::{Medicine, MedicineDetails};
use chrono::NaiveDate;
use uuid::Uuid;

/// Description assigned to records created from a scan
const SCAN_DESCRIPTION: &str = "Auto-added via AI scan";

/// Owned collection of committed medicine records
#[derive(Debug, Default)]
pub struct Catalog {
    medicines: Vec<Medicine>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the given records
    pub fn with_medicines(medicines: Vec<Medicine>) -> Self {
        Self { medicines }
    }

    /// Commits scanned details as a new record owned by the given chemist.
    ///
    /// Allocates a fresh id on every call and copies the detail fields
    /// untouched; the details themselves are not consumed, so a discarded
    /// scan never reaches the catalog. New records go to the front, newest
    /// first.
    pub fn commit(
        &mut self,
        details: &MedicineDetails,
        chemist_id: &str,
        chemist_name: &str,
    ) -> Medicine {
        let medicine = Medicine {
            id: Uuid::new_v4(),
            name: details.name.clone(),
            dosage: details.dosage.clone(),
            price: details.price,
            stock: details.stock,
            expiry_date: details.expiry_date,
            chemist_id: chemist_id.to_string(),
            chemist_name: chemist_name.to_string(),
            category: details.category.clone(),
            description: SCAN_DESCRIPTION.to_string(),
            near_expiry_discount: None,
        };
        log::info!(
            "Committing '{}' to inventory for {} (id: {})",
            medicine.name,
            medicine.chemist_name,
            medicine.id
        );
        self.medicines.insert(0, medicine.clone());
        medicine
    }

    /// Look up a record by id
    pub fn get(&self, id: &Uuid) -> Option<&Medicine> {
        self.medicines.iter().find(|m| &m.id == id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Iterate over all records, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Medicine> {
        self.medicines.iter()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for m in &self.medicines {
            if !categories.contains(&m.category.as_str()) {
                categories.push(&m.category);
            }
        }
        categories
    }

    /// Records matching a search query and optional category filter.
    ///
    /// The query matches case-insensitively against name or category; the
    /// category filter is an exact match. An empty query matches everything.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Medicine> {
        let query = query.to_lowercase();
        self.medicines
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&query)
                    || m.category.to_lowercase().contains(&query)
            })
            .filter(|m| category.map(|c| m.category == c).unwrap_or(true))
            .collect()
    }

    /// Records expiring within the near-expiry window
    pub fn near_expiry(&self, today: NaiveDate) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| m.is_near_expiry(today))
            .collect()
    }

    /// Number of records below the low-stock threshold
    pub fn low_stock_count(&self) -> usize {
        self.medicines.iter().filter(|m| m.is_low_stock()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> MedicineDetails {
        MedicineDetails {
            name: "Amoxicillin".to_string(),
            dosage: "500mg".to_string(),
            price: 12.5,
            stock: 50,
            expiry_date: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
            category: "Antibiotics".to_string(),
        }
    }

    #[test]
    fn commit_assigns_fresh_id_and_owner() {
        let mut catalog = Catalog::new();
        let scanned = details();

        let record = catalog.commit(&scanned, "c1", "My Chemist");

        assert_eq!(record.name, "Amoxicillin");
        assert_eq!(record.dosage, "500mg");
        assert_eq!(record.price, 12.5);
        assert_eq!(record.stock, 50);
        assert_eq!(record.chemist_id, "c1");
        assert_eq!(record.chemist_name, "My Chemist");
        assert_eq!(record.description, "Auto-added via AI scan");
        assert_eq!(record.near_expiry_discount, None);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&record.id), Some(&record));
    }

    #[test]
    fn committing_twice_yields_distinct_ids() {
        let mut catalog = Catalog::new();
        let scanned = details();

        let first = catalog.commit(&scanned, "c1", "My Chemist");
        let second = catalog.commit(&scanned, "c1", "My Chemist");

        assert_ne!(first.id, second.id);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn commit_does_not_mutate_details() {
        let mut catalog = Catalog::new();
        let scanned = details();
        let before = scanned.clone();

        catalog.commit(&scanned, "c1", "My Chemist");

        assert_eq!(scanned, before);
    }

    #[test]
    fn new_records_go_to_the_front() {
        let mut catalog = Catalog::new();
        let mut second = details();
        second.name = "Paracetamol".to_string();

        catalog.commit(&details(), "c1", "My Chemist");
        catalog.commit(&second, "c1", "My Chemist");

        let names: Vec<&str> = catalog.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Paracetamol", "Amoxicillin"]);
    }

    #[test]
    fn discarded_scan_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        let kept = catalog.commit(&details(), "c1", "My Chemist");

        // A scan that is reviewed and dropped never touches the catalog
        let _discarded = details();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().next(), Some(&kept));
    }

    #[test]
    fn categories_are_distinct_first_seen() {
        let mut catalog = Catalog::new();
        let mut a = details();
        a.category = "Pain Relief".to_string();
        let mut b = details();
        b.category = "Antibiotics".to_string();
        let mut c = details();
        c.category = "Pain Relief".to_string();

        catalog.commit(&a, "c1", "My Chemist");
        catalog.commit(&b, "c1", "My Chemist");
        catalog.commit(&c, "c1", "My Chemist");

        assert_eq!(catalog.categories(), vec!["Pain Relief", "Antibiotics"]);
    }

    #[test]
    fn search_matches_name_or_category() {
        let mut catalog = Catalog::new();
        let mut allergy = details();
        allergy.name = "Loratadine".to_string();
        allergy.category = "Allergy".to_string();
        catalog.commit(&details(), "c1", "My Chemist");
        catalog.commit(&allergy, "c1", "My Chemist");

        assert_eq!(catalog.search("amox", None).len(), 1);
        assert_eq!(catalog.search("ALLERGY", None).len(), 1);
        assert_eq!(catalog.search("", None).len(), 2);
        assert_eq!(catalog.search("", Some("Allergy")).len(), 1);
        assert_eq!(catalog.search("lora", Some("Antibiotics")).len(), 0);
    }

    #[test]
    fn near_expiry_filters_by_window() {
        let mut catalog = Catalog::new();
        let mut soon = details();
        soon.expiry_date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut later = details();
        later.expiry_date = NaiveDate::from_ymd_opt(2026, 5, 15).unwrap();
        catalog.commit(&soon, "c1", "My Chemist");
        catalog.commit(&later, "c1", "My Chemist");

        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let near = catalog.near_expiry(today);
        assert_eq!(near.len(), 1);
        assert_eq!(
            near[0].expiry_date,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn low_stock_count_uses_threshold() {
        let mut catalog = Catalog::new();
        let mut low = details();
        low.stock = 15;
        catalog.commit(&details(), "c1", "My Chemist");
        catalog.commit(&low, "c1", "My Chemist");

        assert_eq!(catalog.low_stock_count(), 1);
    }
}
