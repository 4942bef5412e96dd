//! Lossless JSON wire form of a [`PolicyDocument`].
//!
//! The provisioning layer consumes the document as a declarative value;
//! this module fixes the canonical property names it is serialized under.
//!
//! ## Wire shape
//!
//! ```json
//! {
//!   "documentName": "MyApp-WebACL",
//!   "defaultAction": "Allow",
//!   "scope": "GLOBAL_EDGE",
//!   "rules": [
//!     {
//!       "name": "WhiteList",
//!       "priority": 0,
//!       "action": "Allow",
//!       "matchCriterion": { "addressSetReference": { "reference": "arn:..." } },
//!       "metricName": "WhiteList-Metrics"
//!     }
//!   ],
//!   "metricName": "MyApp-WebACL-Metrics",
//!   "metricsEnabled": true
//! }
//! ```
//!
//! Decoding re-runs the document invariant checks before handing back a
//! [`PolicyDocument`], so a hand-edited or corrupted wire value cannot
//! smuggle an inconsistent document past construction. The fixed fields
//! are covered too: a non-Allow default action, a regional scope, or
//! disabled metrics all fail decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{PolicyDocument, PolicyError, RuleAction, RuleSpec, Scope};

/// Errors that can occur when decoding a [`PolicyDocument`] from JSON.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("failed to parse policy document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decoded document failed validation: {0}")]
    Validation(#[from] PolicyError),
}

/// The document exactly as it crosses the wire. Field names here are the
/// canonical contract with the provisioning layer.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDocument {
    document_name: String,
    default_action: RuleAction,
    scope: Scope,
    rules: Vec<RuleSpec>,
    metric_name: String,
    metrics_enabled: bool,
}

impl From<&PolicyDocument> for WireDocument {
    fn from(document: &PolicyDocument) -> Self {
        Self {
            document_name: document.name().to_owned(),
            default_action: document.default_action(),
            scope: document.scope(),
            rules: document.rules().to_vec(),
            metric_name: document.metric_name().to_owned(),
            metrics_enabled: document.metrics_enabled(),
        }
    }
}

impl PolicyDocument {
    /// Serialize to the compact JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&WireDocument::from(self))
    }

    /// Serialize to indented JSON, for inspection and diffs.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&WireDocument::from(self))
    }

    /// Decode a document previously produced by [`to_json`](Self::to_json),
    /// re-validating the document invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError`] on parse or validation failure.
    pub fn from_json(input: &str) -> Result<Self, DeserializeError> {
        let wire: WireDocument = serde_json::from_str(input)?;
        let document = Self::from_parts(
            wire.document_name,
            wire.default_action,
            wire.scope,
            wire.rules,
            wire.metric_name,
            wire.metrics_enabled,
        )?;
        Ok(document)
    }
}
