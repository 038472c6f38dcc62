use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::pharmacy::errors::PharmacyError;
use crate::domain::pharmacy::models::CreateOrderCommand;
use crate::domain::pharmacy::models::Medicine;
use crate::domain::pharmacy::models::NewOrder;
use crate::domain::pharmacy::models::Order;
use crate::domain::pharmacy::ports::MedicineRepository;
use crate::domain::pharmacy::ports::OrderRepository;
use crate::domain::pharmacy::ports::PharmacyServicePort;
use crate::user::models::UserId;

/// Domain service implementation for pharmacy operations.
///
/// Concrete implementation of PharmacyServicePort with dependency injection.
pub struct PharmacyService<MR, OR>
where
    MR: MedicineRepository,
    OR: OrderRepository,
{
    medicines: Arc<MR>,
    orders: Arc<OR>,
}

impl<MR, OR> PharmacyService<MR, OR>
where
    MR: MedicineRepository,
    OR: OrderRepository,
{
    /// Create a new pharmacy service with injected repositories.
    ///
    /// # Arguments
    /// * `medicines` - Medicine catalog implementation
    /// * `orders` - Order persistence implementation
    ///
    /// # Returns
    /// Configured pharmacy service instance
    pub fn new(medicines: Arc<MR>, orders: Arc<OR>) -> Self {
        Self { medicines, orders }
    }

    fn total_price(medicine: &Medicine, quantity: i32) -> Result<String, PharmacyError> {
        let unit_price: f64 = medicine
            .price
            .parse()
            .map_err(|_| PharmacyError::InvalidPrice(medicine.price.clone()))?;

        Ok(format!("{:.2}", unit_price * f64::from(quantity)))
    }
}

#[async_trait]
impl<MR, OR> PharmacyServicePort for PharmacyService<MR, OR>
where
    MR: MedicineRepository,
    OR: OrderRepository,
{
    async fn list_medicines(&self) -> Result<Vec<Medicine>, PharmacyError> {
        self.medicines.list_all().await
    }

    async fn place_order(
        &self,
        user_id: UserId,
        command: CreateOrderCommand,
    ) -> Result<Order, PharmacyError> {
        let medicine = self
            .medicines
            .find_by_id(&command.medicine_id)
            .await?
            .ok_or(PharmacyError::MedicineNotFound(command.medicine_id))?;

        if !medicine.in_stock {
            return Err(PharmacyError::OutOfStock(medicine.name));
        }

        if medicine.requires_prescription {
            return Err(PharmacyError::PrescriptionRequired);
        }

        let total_price = Self::total_price(&medicine, command.quantity)?;

        self.orders
            .create(NewOrder {
                user_id,
                medicine_id: medicine.id,
                quantity: command.quantity,
                total_price,
            })
            .await
    }

    async fn orders_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, PharmacyError> {
        self.orders.find_for_user(user_id).await
    }
}
