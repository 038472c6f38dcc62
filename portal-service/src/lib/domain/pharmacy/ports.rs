use async_trait::async_trait;

use crate::domain::pharmacy::errors::PharmacyError;
use crate::domain::pharmacy::models::CreateOrderCommand;
use crate::domain::pharmacy::models::Medicine;
use crate::domain::pharmacy::models::MedicineId;
use crate::domain::pharmacy::models::NewMedicine;
use crate::domain::pharmacy::models::NewOrder;
use crate::domain::pharmacy::models::Order;
use crate::user::models::UserId;

/// Port for pharmacy catalog and ordering operations.
#[async_trait]
pub trait PharmacyServicePort: Send + Sync + 'static {
    /// List the full medicine catalog.
    ///
    /// # Returns
    /// All medicines in ascending id order
    async fn list_medicines(&self) -> Result<Vec<Medicine>, PharmacyError>;

    /// Place an order for a medicine on behalf of a user.
    ///
    /// The medicine must exist, be in stock, and be available without a
    /// prescription; checks run in that order.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated user placing the order
    /// * `command` - Validated order data
    ///
    /// # Returns
    /// The stored order in status "pending" with its computed total
    ///
    /// # Errors
    /// * `MedicineNotFound` - No medicine with that id
    /// * `OutOfStock` - Medicine is not in stock
    /// * `PrescriptionRequired` - Medicine needs a prescription
    /// * `InvalidPrice` - Catalog price could not be parsed
    async fn place_order(
        &self,
        user_id: UserId,
        command: CreateOrderCommand,
    ) -> Result<Order, PharmacyError>;

    /// List the orders a user has placed.
    ///
    /// # Arguments
    /// * `user_id` - User whose orders to list
    ///
    /// # Returns
    /// The user's orders in ascending id order
    async fn orders_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, PharmacyError>;
}

/// Repository port for the medicine catalog.
#[async_trait]
pub trait MedicineRepository: Send + Sync + 'static {
    /// Persist a new medicine, assigning its id.
    ///
    /// # Arguments
    /// * `medicine` - Medicine record without an id
    ///
    /// # Returns
    /// The stored medicine
    async fn create(&self, medicine: NewMedicine) -> Result<Medicine, PharmacyError>;

    /// Find a medicine by id.
    ///
    /// # Arguments
    /// * `id` - Medicine id to look up
    ///
    /// # Returns
    /// The medicine if one exists
    async fn find_by_id(&self, id: &MedicineId) -> Result<Option<Medicine>, PharmacyError>;

    /// List the full catalog.
    ///
    /// # Returns
    /// All medicines in ascending id order
    async fn list_all(&self) -> Result<Vec<Medicine>, PharmacyError>;
}

/// Repository port for order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Persist a new order, assigning id, status, and timestamp.
    ///
    /// # Arguments
    /// * `order` - Order record without an id
    ///
    /// # Returns
    /// The stored order
    async fn create(&self, order: NewOrder) -> Result<Order, PharmacyError>;

    /// Find all orders belonging to a user.
    ///
    /// # Arguments
    /// * `user_id` - Owning user
    ///
    /// # Returns
    /// The user's orders in ascending id order
    async fn find_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, PharmacyError>;
}
