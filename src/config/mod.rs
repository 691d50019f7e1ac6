//! Configuration and path management

pub mod paths;
pub mod settings;
pub mod upload;

pub use paths::LedgerPaths;
pub use settings::Settings;
