// SPDX-License-Identifier: MIT

//! Access gating for UI page routes.
//!
//! API routes carry their own auth; page routes only check that a session
//! cookie is present and bounce to the sign-in page otherwise, carrying the
//! originally requested path for post-auth redirect.

use crate::middleware::auth::SESSION_COOKIE;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

/// Page prefixes that require a session.
const PROTECTED_PAGES: &[&str] = &["/dashboard", "/goals", "/activity", "/foods", "/favorites"];

fn is_protected_page(path: &str) -> bool {
    PROTECTED_PAGES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
}

/// Redirect unauthenticated requests for protected pages to sign-in.
pub async fn gate_protected_pages(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    if is_protected_page(&path) && jar.get(SESSION_COOKIE).is_none() {
        let target = format!("/signin?redirect={}", urlencoding::encode(&path));
        return Redirect::temporary(&target).into_response();
    }

    next.run(request).await
}
