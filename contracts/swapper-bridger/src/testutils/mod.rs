//! In-process stand-ins for the contracts a dispatcher depends on.
//!
//! Each one records what it was asked to do so tests can assert on it, and
//! none of them enforce more than the dispatcher needs to be exercised.

pub mod factory;
pub mod gas_service;
pub mod gateway;
pub mod registry;
pub mod router;

pub use factory::{MockDexFactory, MockDexFactoryClient};
pub use gas_service::{GasPayment, MockGasService, MockGasServiceClient};
pub use gateway::{ContractCall, MockGateway, MockGatewayClient};
pub use registry::{MockRegistry, MockRegistryClient};
pub use router::{MockDexRouter, MockDexRouterClient};
