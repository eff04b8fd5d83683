//! Render reports: a JSON summary of a finished pattern.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::error::PatternError;
use crate::hashing::{canonical_json, sha256_hex};
use crate::pattern::Pattern;
use crate::ENGINE_VERSION;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub engine_version: String,
    pub generator: String,
    pub digest: String,
    pub width: u32,
    pub height: u32,
    pub background: String,
    /// SHA-256 of the serialized SVG.
    pub svg_hash: String,
    /// SHA-256 of the canonical job description. Identical inputs and
    /// options give identical job hashes on any run.
    pub job_hash: String,
    pub created_at: DateTime<Utc>,
    pub data_url: String,
}

impl RenderReport {
    pub fn from_pattern(pattern: &Pattern) -> Result<Self, PatternError> {
        let svg = pattern.to_string();

        Ok(Self {
            engine_version: ENGINE_VERSION.to_string(),
            generator: pattern.generator().name().to_string(),
            digest: pattern.digest().to_string(),
            width: pattern.width(),
            height: pattern.height(),
            background: pattern.background().to_css(),
            svg_hash: sha256_hex(svg.as_bytes()),
            job_hash: job_hash(pattern)?,
            created_at: Utc::now(),
            data_url: pattern.to_data_url(),
        })
    }

    pub fn to_json(&self) -> Result<String, PatternError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn job_hash(pattern: &Pattern) -> Result<String, PatternError> {
    let job = json!({
        "digest": pattern.digest(),
        "options": pattern.options(),
        "engineVersion": ENGINE_VERSION,
    });
    Ok(sha256_hex(canonical_json(&job)?.as_bytes()))
}
