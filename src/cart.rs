//! Shopping cart with merge-by-id quantity aggregation

use crate::models::Medicine;
use uuid::Uuid;

/// A cart line: one medicine and how many units of it
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub medicine: Medicine,
    pub quantity: u32,
}

/// Customer shopping cart
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a medicine.
    ///
    /// Adding a medicine already in the cart increments its quantity
    /// instead of creating a duplicate line.
    pub fn add(&mut self, medicine: &Medicine) {
        if let Some(item) = self.items.iter_mut().find(|i| i.medicine.id == medicine.id) {
            item.quantity += 1;
            log::debug!(
                "Incremented '{}' in cart to {}",
                item.medicine.name,
                item.quantity
            );
        } else {
            log::debug!("Added '{}' to cart", medicine.name);
            self.items.push(CartItem {
                medicine: medicine.clone(),
                quantity: 1,
            });
        }
    }

    /// Removes a line entirely, regardless of quantity
    pub fn remove(&mut self, id: &Uuid) {
        self.items.retain(|i| &i.medicine.id != id);
    }

    /// Cart lines in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total price across all lines
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.medicine.price * f64::from(i.quantity))
            .sum()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn medicine(name: &str, price: f64) -> Medicine {
        Medicine {
            id: Uuid::new_v4(),
            name: name.to_string(),
            dosage: "500mg".to_string(),
            price,
            stock: 50,
            expiry_date: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
            chemist_id: "c1".to_string(),
            chemist_name: "Green Cross Pharma".to_string(),
            category: "Antibiotics".to_string(),
            description: "desc".to_string(),
            near_expiry_discount: None,
        }
    }

    #[test]
    fn adding_same_medicine_twice_merges() {
        let mut cart = Cart::new();
        let med = medicine("Amoxicillin", 12.5);

        cart.add(&med);
        cart.add(&med);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn different_medicines_get_separate_lines() {
        let mut cart = Cart::new();
        cart.add(&medicine("Amoxicillin", 12.5));
        cart.add(&medicine("Paracetamol", 4.2));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        let amox = medicine("Amoxicillin", 12.5);
        cart.add(&amox);
        cart.add(&amox);
        cart.add(&medicine("Paracetamol", 4.2));

        assert!((cart.total() - 29.2).abs() < 1e-9);
    }

    #[test]
    fn remove_drops_the_whole_line() {
        let mut cart = Cart::new();
        let med = medicine("Amoxicillin", 12.5);
        cart.add(&med);
        cart.add(&med);

        cart.remove(&med.id);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
