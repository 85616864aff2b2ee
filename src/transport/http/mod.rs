pub mod router;
pub mod types;
pub mod handlers {
    pub mod clients;
    pub mod common;
    pub mod contacts;
    pub mod health;
    pub mod projects;
    pub mod subscribers;
}

pub use router::{create_router, with_frontend, ApiDoc, MAX_BODY_BYTES};
pub use types::{ApiError, AppState, MessageResponse};
