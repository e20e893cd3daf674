pub mod registry;
pub mod traits;

// Rate source implementations
pub mod backend;
pub mod fallback;
