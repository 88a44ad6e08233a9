pub mod error;
pub mod runner;
pub mod settings;
pub mod summary;
pub mod transform;
