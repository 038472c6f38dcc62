use std::collections::BTreeMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::pharmacy::errors::PharmacyError;
use crate::domain::pharmacy::models::Medicine;
use crate::domain::pharmacy::models::MedicineId;
use crate::domain::pharmacy::models::NewMedicine;
use crate::domain::pharmacy::models::NewOrder;
use crate::domain::pharmacy::models::Order;
use crate::domain::pharmacy::models::OrderId;
use crate::domain::pharmacy::ports::MedicineRepository;
use crate::domain::pharmacy::ports::OrderRepository;
use crate::user::models::UserId;

/// Catalog shipped with every fresh instance: name, description, dosage,
/// price, and whether a prescription is required.
const DEFAULT_CATALOG: [(&str, &str, &str, &str, bool); 9] = [
    (
        "Atripla",
        "Complete HIV treatment regimen containing efavirenz, emtricitabine, and tenofovir",
        "600mg/200mg/300mg",
        "89.99",
        true,
    ),
    (
        "Biktarvy",
        "Single tablet HIV treatment containing bictegravir, emtricitabine, and tenofovir",
        "50mg/200mg/25mg",
        "99.99",
        true,
    ),
    (
        "Premium Condoms (Pack of 12)",
        "Latex condoms with lubricant for safe sex practices",
        "One-size",
        "12.99",
        false,
    ),
    (
        "Birth Control Pills",
        "Monthly oral contraceptive pills",
        "28-day pack",
        "24.99",
        true,
    ),
    (
        "Plan B One-Step",
        "Emergency contraception to prevent pregnancy when taken within 72 hours",
        "1.5mg",
        "49.99",
        false,
    ),
    (
        "Generic Paracetamol",
        "Pain relief and fever reduction",
        "500mg",
        "9.99",
        false,
    ),
    (
        "Allergy Relief",
        "24-hour allergy relief antihistamine",
        "10mg",
        "19.99",
        false,
    ),
    (
        "Antibiotics",
        "Broad-spectrum antibiotic (requires prescription)",
        "250mg",
        "29.99",
        true,
    ),
    (
        "PrEP (Pre-Exposure Prophylaxis)",
        "Daily medication to prevent HIV infection in high-risk individuals",
        "200mg/300mg",
        "79.99",
        true,
    ),
];

/// In-memory implementation of MedicineRepository.
///
/// A BTreeMap keyed by id keeps the catalog in ascending id order.
pub struct InMemoryMedicineRepository {
    medicines: RwLock<BTreeMap<i64, Medicine>>,
    next_id: AtomicI64,
}

impl InMemoryMedicineRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            medicines: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Create a repository pre-seeded with the default catalog, ids 1-9,
    /// everything in stock.
    pub fn with_default_catalog() -> Self {
        let mut medicines = BTreeMap::new();
        let mut next_id = 1;

        for (name, description, dosage, price, requires_prescription) in DEFAULT_CATALOG {
            medicines.insert(
                next_id,
                Medicine {
                    id: MedicineId(next_id),
                    name: name.to_string(),
                    description: description.to_string(),
                    dosage: dosage.to_string(),
                    price: price.to_string(),
                    requires_prescription,
                    in_stock: true,
                },
            );
            next_id += 1;
        }

        Self {
            medicines: RwLock::new(medicines),
            next_id: AtomicI64::new(next_id),
        }
    }
}

impl Default for InMemoryMedicineRepository {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[async_trait]
impl MedicineRepository for InMemoryMedicineRepository {
    async fn create(&self, medicine: NewMedicine) -> Result<Medicine, PharmacyError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let medicine = Medicine {
            id: MedicineId(id),
            name: medicine.name,
            description: medicine.description,
            dosage: medicine.dosage,
            price: medicine.price,
            requires_prescription: medicine.requires_prescription,
            in_stock: medicine.in_stock,
        };

        self.medicines.write().await.insert(id, medicine.clone());

        Ok(medicine)
    }

    async fn find_by_id(&self, id: &MedicineId) -> Result<Option<Medicine>, PharmacyError> {
        Ok(self.medicines.read().await.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Medicine>, PharmacyError> {
        Ok(self.medicines.read().await.values().cloned().collect())
    }
}

/// In-memory implementation of OrderRepository.
pub struct InMemoryOrderRepository {
    orders: RwLock<BTreeMap<i64, Order>>,
    next_id: AtomicI64,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, PharmacyError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let order = Order {
            id: OrderId(id),
            user_id: order.user_id,
            medicine_id: order.medicine_id,
            quantity: order.quantity,
            total_price: order.total_price,
            status: "pending".to_string(),
            created_at: Utc::now(),
        };

        self.orders.write().await.insert(id, order.clone());

        Ok(order)
    }

    async fn find_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, PharmacyError> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.user_id == *user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_catalog_is_seeded_in_order() {
        let repository = InMemoryMedicineRepository::with_default_catalog();

        let catalog = repository.list_all().await.unwrap();

        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog[0].id, MedicineId(1));
        assert_eq!(catalog[0].name, "Atripla");
        assert_eq!(catalog[8].name, "PrEP (Pre-Exposure Prophylaxis)");
        assert!(catalog.iter().all(|medicine| medicine.in_stock));
    }

    #[tokio::test]
    async fn test_create_continues_after_seeded_ids() {
        let repository = InMemoryMedicineRepository::with_default_catalog();

        let created = repository
            .create(NewMedicine {
                name: "Ibuprofen".to_string(),
                description: "Anti-inflammatory pain relief".to_string(),
                dosage: "200mg".to_string(),
                price: "7.49".to_string(),
                requires_prescription: false,
                in_stock: true,
            })
            .await
            .unwrap();

        assert_eq!(created.id, MedicineId(10));
        assert_eq!(repository.list_all().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repository = InMemoryMedicineRepository::with_default_catalog();

        let found = repository.find_by_id(&MedicineId(6)).await.unwrap();
        assert_eq!(found.unwrap().name, "Generic Paracetamol");

        let missing = repository.find_by_id(&MedicineId(99)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_orders_are_scoped_to_their_user() {
        let repository = InMemoryOrderRepository::new();

        let new_order = |user_id: i64| NewOrder {
            user_id: UserId(user_id),
            medicine_id: MedicineId(6),
            quantity: 2,
            total_price: "19.98".to_string(),
        };

        repository.create(new_order(1)).await.unwrap();
        repository.create(new_order(2)).await.unwrap();
        repository.create(new_order(1)).await.unwrap();

        let own = repository.find_for_user(&UserId(1)).await.unwrap();

        assert_eq!(own.len(), 2);
        assert_eq!(own[0].id, OrderId(1));
        assert_eq!(own[1].id, OrderId(3));
        assert!(own.iter().all(|order| order.status == "pending"));
    }
}
