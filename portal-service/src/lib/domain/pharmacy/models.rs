use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::pharmacy::errors::PharmacyError;
use crate::user::models::UserId;

/// Medicine catalog entity.
///
/// Prices are decimal strings ("12.99"); money never passes through a
/// float comparison.
#[derive(Debug, Clone)]
pub struct Medicine {
    pub id: MedicineId,
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub price: String,
    pub requires_prescription: bool,
    pub in_stock: bool,
}

/// Medicine unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MedicineId(pub i64);

impl fmt::Display for MedicineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// New medicine record handed to the repository, which assigns the id.
#[derive(Debug, Clone)]
pub struct NewMedicine {
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub price: String,
    pub requires_prescription: bool,
    pub in_stock: bool,
}

/// Medicine order entity.
///
/// Orders start in status "pending" and are never mutated in this service.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub medicine_id: MedicineId,
    pub quantity: i32,
    pub total_price: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Order unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// New order record handed to the repository, which assigns the id,
/// status, and timestamp.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub medicine_id: MedicineId,
    pub quantity: i32,
    pub total_price: String,
}

/// Command to order a medicine with a validated quantity
#[derive(Debug)]
pub struct CreateOrderCommand {
    pub medicine_id: MedicineId,
    pub quantity: i32,
}

impl CreateOrderCommand {
    const MIN_QUANTITY: i32 = 1;
    const MAX_QUANTITY: i32 = 10;

    /// Construct a new order command.
    ///
    /// # Arguments
    /// * `medicine_id` - Medicine to order
    /// * `quantity` - Number of units (1-10)
    ///
    /// # Returns
    /// CreateOrderCommand with a validated quantity
    ///
    /// # Errors
    /// * `QuantityOutOfRange` - Quantity outside 1-10
    pub fn new(medicine_id: MedicineId, quantity: i32) -> Result<Self, PharmacyError> {
        if !(Self::MIN_QUANTITY..=Self::MAX_QUANTITY).contains(&quantity) {
            return Err(PharmacyError::QuantityOutOfRange {
                min: Self::MIN_QUANTITY,
                max: Self::MAX_QUANTITY,
                actual: quantity,
            });
        }

        Ok(Self {
            medicine_id,
            quantity,
        })
    }
}
