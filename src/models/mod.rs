pub mod account;
pub mod application;
pub mod feedback;
pub mod position;
