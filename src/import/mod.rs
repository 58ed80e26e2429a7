//! Turning merged movie records into catalog products.

pub mod mapper;
pub mod persister;
pub mod runner;

pub use mapper::{to_product, MappingError};
pub use persister::{persist, PersistError};
pub use runner::{ImportReport, ImportRunner, ItemOutcome};
