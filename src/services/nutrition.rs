// SPDX-License-Identifier: MIT

//! Open Food Facts API client for barcode product lookups.
//!
//! One best-effort request per lookup: no retry, no caching, transport
//! defaults for timeouts. The product payload is returned exactly as
//! received; normalization happens in [`crate::services::nutrients`].

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field subset requested from the API unless the caller overrides it.
pub const DEFAULT_FIELDS: &[&str] = &[
    "code",
    "product_name",
    "brands",
    "nutriments",
    "serving_size",
    "image_url",
];

/// Errors from a product lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The HTTP call returned a non-success status.
    #[error("Open Food Facts request failed: {status} {status_text}")]
    Transport { status: u16, status_text: String },

    /// The HTTP call itself failed (connect, TLS, body read, decode).
    #[error("Open Food Facts request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The response parsed but carried no found product.
    #[error("Product not found for barcode {barcode}")]
    NotFound { barcode: String },
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound { .. } => AppError::NotFound(err.to_string()),
            _ => AppError::Lookup(err.to_string()),
        }
    }
}

/// Product record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffProduct {
    /// Barcode
    pub code: Option<String>,
    pub product_name: Option<String>,
    pub brands: Option<String>,
    /// Loosely-typed nutriment mapping; normalize before use.
    pub nutriments: Option<Map<String, Value>>,
    pub serving_size: Option<String>,
    pub image_url: Option<String>,
}

/// Lookup response envelope: `status` 1 with a present product is the only
/// success case.
#[derive(Debug, Clone, Deserialize)]
pub struct OffProductResponse {
    pub code: String,
    pub status: u8,
    #[serde(default)]
    pub status_verbose: Option<String>,
    pub product: Option<OffProduct>,
}

/// Open Food Facts API client. Constructed explicitly and injected through
/// `AppState`; no process-wide instance.
#[derive(Clone)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch a product by barcode, requesting `fields` (or the default six
    /// when empty). Returns the raw product on `status == 1`.
    pub async fn product_by_barcode(
        &self,
        barcode: &str,
        fields: &[&str],
    ) -> Result<OffProductResponse, LookupError> {
        let fields = if fields.is_empty() {
            DEFAULT_FIELDS
        } else {
            fields
        };
        let url = format!(
            "{}/product/{}",
            self.base_url,
            urlencoding::encode(barcode)
        );

        let response = self
            .http
            .get(&url)
            .query(&[("fields", fields.join(","))])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(LookupError::Transport {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let data: OffProductResponse = response.json().await?;

        if data.status != 1 || data.product.is_none() {
            return Err(LookupError::NotFound {
                barcode: barcode.to_string(),
            });
        }

        Ok(data)
    }
}
