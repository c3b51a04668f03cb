// SPDX-License-Identifier: MIT

//! Middleware modules (authentication, page gating, security headers).

pub mod auth;
pub mod pages;
pub mod security;

pub use auth::require_auth;
