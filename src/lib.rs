//! Pharmacy Stock - medicine scanning and marketplace stock management
//!
//! Scans medicine packaging photos through the Gemini API, validates the
//! extracted details, and manages an in-memory pharmacy catalog and cart.

pub mod cart;
pub mod catalog;
pub mod demo;
pub mod error;
pub mod gemini;
pub mod models;

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use error::{Result, ScanError};
pub use gemini::GeminiApi;
pub use models::{Medicine, MedicineDetails, RawMedicineDetails};
