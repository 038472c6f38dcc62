pub mod consultation;
pub mod pharmacy;
pub mod user;
