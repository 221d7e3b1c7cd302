//! Seed datasets for the demo marketplace and chemist inventory
//!
//! Ids are generated fresh on every call; nothing here persists.

use crate::catalog::Catalog;
use crate::models::Medicine;
use chrono::NaiveDate;
use uuid::Uuid;

#[allow(clippy::too_many_arguments)]
fn med(
    name: &str,
    dosage: &str,
    price: f64,
    stock: u32,
    expiry: (i32, u32, u32),
    chemist_id: &str,
    chemist_name: &str,
    category: &str,
    description: &str,
    discount: Option<u8>,
) -> Medicine {
    Medicine {
        id: Uuid::new_v4(),
        name: name.to_string(),
        dosage: dosage.to_string(),
        price,
        stock,
        expiry_date: NaiveDate::from_ymd_opt(expiry.0, expiry.1, expiry.2)
            .expect("valid demo expiry date"),
        chemist_id: chemist_id.to_string(),
        chemist_name: chemist_name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        near_expiry_discount: discount,
    }
}

/// The customer-facing marketplace listing (three pharmacies)
pub fn marketplace() -> Catalog {
    Catalog::with_medicines(vec![
        med("Amoxicillin", "500mg", 12.50, 50, (2025, 10, 12), "c1", "Green Cross Pharma", "Antibiotics", "Broad-spectrum antibiotic for bacterial infections.", None),
        med("Paracetamol", "1000mg", 4.20, 100, (2026, 5, 15), "c2", "The Herb Wellness", "Pain Relief", "Effective relief for mild to moderate pain and fever.", None),
        med("Loratadine", "10mg", 8.90, 30, (2025, 5, 20), "c1", "Green Cross Pharma", "Allergy", "Non-drowsy antihistamine for seasonal allergy relief.", Some(20)),
        med("Vitamin C", "500mg", 15.00, 200, (2025, 8, 1), "c3", "Nature Path", "Vitamins", "Essential nutrient for immune support and skin health.", None),
        med("Ibuprofen", "400mg", 7.50, 85, (2025, 12, 20), "c2", "The Herb Wellness", "Pain Relief", "Anti-inflammatory for pain, swelling, and fever.", None),
        med("Metformin", "850mg", 18.00, 40, (2025, 6, 15), "c1", "Green Cross Pharma", "Diabetes", "Management of type 2 diabetes.", None),
        med("Cetirizine", "10mg", 6.50, 60, (2025, 4, 10), "c3", "Nature Path", "Allergy", "Relief from sneezing, runny nose, and itchy eyes.", Some(30)),
        med("Omega-3 Fish Oil", "1000mg", 22.00, 45, (2026, 2, 14), "c3", "Nature Path", "Vitamins", "Supports heart, brain, and eye health.", None),
        med("Salbutamol Inhaler", "100mcg", 25.00, 12, (2025, 4, 30), "c2", "The Herb Wellness", "Respiratory", "Quick relief for asthma and COPD symptoms.", Some(15)),
        med("Magnesium Citrate", "200mg", 14.50, 55, (2025, 11, 5), "c3", "Nature Path", "Vitamins", "Supports muscle function and nerve health.", None),
        med("Omeprazole", "20mg", 10.20, 70, (2025, 7, 22), "c1", "Green Cross Pharma", "Gastric", "Treatment for acid reflux and heartburn.", None),
        med("B-Complex", "High Potency", 13.00, 90, (2026, 8, 30), "c3", "Nature Path", "Vitamins", "Energy metabolism and nervous system support.", None),
    ])
}

/// The demo chemist's own stock
pub fn chemist_inventory() -> Catalog {
    Catalog::with_medicines(vec![
        med("Amoxicillin", "500mg", 12.50, 50, (2025, 10, 12), "c1", "My Chemist", "Antibiotics", "Sample desc", None),
        med("Panadol Extra", "500mg", 6.00, 120, (2025, 4, 10), "c1", "My Chemist", "Pain Relief", "Sample desc", None),
        med("Antacid Gel", "200ml", 15.00, 15, (2025, 3, 1), "c1", "My Chemist", "Gastric", "Sample desc", None),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketplace_has_twelve_listings_from_three_pharmacies() {
        let catalog = marketplace();
        assert_eq!(catalog.len(), 12);

        let mut chemists: Vec<&str> = catalog.iter().map(|m| m.chemist_id.as_str()).collect();
        chemists.sort();
        chemists.dedup();
        assert_eq!(chemists, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn marketplace_ids_are_unique() {
        let catalog = marketplace();
        let mut ids: Vec<_> = catalog.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn discounted_listings_carry_a_percentage() {
        let catalog = marketplace();
        let discounted: Vec<&Medicine> = catalog
            .iter()
            .filter(|m| m.near_expiry_discount.is_some())
            .collect();
        assert_eq!(discounted.len(), 3);
    }

    #[test]
    fn chemist_inventory_belongs_to_one_chemist() {
        let catalog = chemist_inventory();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|m| m.chemist_id == "c1"));
    }
}
