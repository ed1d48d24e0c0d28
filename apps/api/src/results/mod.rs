pub mod handlers;
pub mod session;
pub mod store;
pub mod validation;
