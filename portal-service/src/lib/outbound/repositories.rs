pub mod consultation;
pub mod pharmacy;
pub mod user;

pub use consultation::InMemoryConsultationRepository;
pub use pharmacy::InMemoryMedicineRepository;
pub use pharmacy::InMemoryOrderRepository;
pub use user::InMemoryUserRepository;
