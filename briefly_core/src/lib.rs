pub mod account;
pub mod error;
pub mod helpers;
pub mod history;
pub mod services;
pub mod session;
pub mod summarize;
pub mod usage;
