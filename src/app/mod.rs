pub mod error;
pub mod facade;
pub mod local;
pub mod remote;

pub use error::FacadeError;
pub use facade::{Backend, BackendMode, Facade, SubscriptionStatus};
pub use local::LocalBackend;
pub use remote::RemoteBackend;
