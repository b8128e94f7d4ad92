pub mod invitation;
pub mod postgres_service;
pub mod session;
pub mod token;
pub mod user;
