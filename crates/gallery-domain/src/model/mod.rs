//! Domain Models - The vocabulary of Gallery
//!
//! Plain records owned by the storage backend. Callers always receive
//! copies; the `*Response` types are what may leave the process.

pub mod item;
pub mod museum;
pub mod museum_to_art;
pub mod user;
pub mod user_to_art;
