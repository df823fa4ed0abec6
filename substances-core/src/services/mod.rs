//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod bedrock;
mod doctor;
mod gateway;
pub mod shop;

pub use doctor::{Check, CheckStatus, DoctorReport, DoctorService};
pub use gateway::{EconomyGateway, Resolution};
pub use shop::{Menu, MenuButton, PurchaseOutcome, ShopService};
