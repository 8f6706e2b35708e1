//! `homestay-web`
//!
//! **Responsibility:** the browser client's route protection.
//!
//! This crate provides:
//! - The protected route table (which roles may open which screens)
//! - A Leptos frontend (wasm32) that wraps protected pages in an access gate
//!
//! The gate is a UX convenience; the booking API enforces authorization.

pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use routes::{PROTECTED_ROUTES, PUBLIC_ROUTES, RouteGuard, guard_for};
