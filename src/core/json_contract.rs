use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::PlotRequest;

pub const PLOT_REQUEST_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequestJsonContractV1 {
    pub schema_version: u32,
    pub request: PlotRequest,
}

impl PlotRequest {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotRequestJsonContractV1 {
            schema_version: PLOT_REQUEST_JSON_SCHEMA_V1,
            request: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plot request contract v1: {e}"))
        })
    }

    /// Parses either a bare request or a versioned envelope.
    ///
    /// Input is read as an envelope only when it carries a top-level
    /// `schema_version` key, so errors point at the shape actually sent.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse plot request json: {e}"))
        })?;
        let is_envelope = value
            .as_object()
            .is_some_and(|object| object.contains_key("schema_version"));
        if !is_envelope {
            return serde_json::from_str::<PlotRequest>(input).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse plot request json: {e}"))
            });
        }

        let payload: PlotRequestJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse plot request json payload: {e}"))
        })?;
        if payload.schema_version != PLOT_REQUEST_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported plot request schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.request)
    }
}
