pub mod moto_registry;

pub use moto_registry::{MotoRegistry, RegistryError};
