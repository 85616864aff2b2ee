pub mod identity;
pub mod media;
pub mod model;
pub mod seed;
