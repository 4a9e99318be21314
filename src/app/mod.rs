pub mod handlers;
pub mod speech;
