pub mod classifier;
pub mod digest;
pub mod dtos;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod preview;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::FileService;
