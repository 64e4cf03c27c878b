//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::KaskuPaths;
pub use settings::Settings;
