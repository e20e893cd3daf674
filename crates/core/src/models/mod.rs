pub mod account;
pub mod analytics;
pub mod rates;
pub mod session;
pub mod settings;
pub mod transaction;
