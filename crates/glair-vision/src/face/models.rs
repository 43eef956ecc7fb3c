use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gesture the subject is asked to perform during active liveness.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureCode {
    #[serde(rename = "HAND_00000")]
    Hand00000,
    #[serde(rename = "HAND_00001")]
    Hand00001,
    #[serde(rename = "HAND_00002")]
    Hand00002,
    #[serde(rename = "HAND_00003")]
    Hand00003,
    #[serde(rename = "HAND_00004")]
    Hand00004,
    #[serde(rename = "HAND_00005")]
    Hand00005,
    #[serde(rename = "HAND_00006")]
    Hand00006,
    #[serde(rename = "HAND_00007")]
    Hand00007,
    #[serde(rename = "HAND_00008")]
    Hand00008,
    #[serde(rename = "HAND_00009")]
    Hand00009,
    #[serde(rename = "HAND_00010")]
    Hand00010,
}

impl GestureCode {
    /// Code as sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureCode::Hand00000 => "HAND_00000",
            GestureCode::Hand00001 => "HAND_00001",
            GestureCode::Hand00002 => "HAND_00002",
            GestureCode::Hand00003 => "HAND_00003",
            GestureCode::Hand00004 => "HAND_00004",
            GestureCode::Hand00005 => "HAND_00005",
            GestureCode::Hand00006 => "HAND_00006",
            GestureCode::Hand00007 => "HAND_00007",
            GestureCode::Hand00008 => "HAND_00008",
            GestureCode::Hand00009 => "HAND_00009",
            GestureCode::Hand00010 => "HAND_00010",
        }
    }
}

impl fmt::Display for GestureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of the passive liveness endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PassiveLivenessResult {
    /// Processing status reported by the API.
    pub status: String,
    /// Human readable explanation of `status`.
    #[serde(default)]
    pub reason: String,
    /// Liveness verdict, absent when no face could be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<LivenessData>,
}

/// Response of the active liveness endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActiveLivenessResult {
    /// Processing status reported by the API.
    pub status: String,
    /// Human readable explanation of `status`.
    #[serde(default)]
    pub reason: String,
    /// Liveness verdict, absent when no face could be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<LivenessData>,
}

/// Liveness verdict for a face image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LivenessData {
    /// Verdict label, e.g. `LIVE` or `SPOOF`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Confidence of the verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Response of the face matching endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FaceMatchingResult {
    /// Processing status reported by the API.
    pub status: String,
    /// Human readable explanation of `status`.
    #[serde(default)]
    pub reason: String,
    /// Comparison outcome, absent when either face could not be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FaceMatchingData>,
}

/// Comparison outcome of two faces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FaceMatchingData {
    /// Whether both images show the same person.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub is_match: Option<bool>,
    /// Similarity score of the two faces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
