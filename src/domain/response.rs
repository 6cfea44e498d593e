use serde::Serialize;

/// Decoded gateway response for one recipient, passed through without a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SendResult(serde_json::Value);

impl SendResult {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}

/// Aggregated results of one send call.
///
/// A call with exactly one recipient yields [`SendOutcome::Single`]; any other count yields
/// [`SendOutcome::Batch`] in recipient order. Serializes untagged, as the bare object or list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SendOutcome {
    Single(SendResult),
    Batch(Vec<SendResult>),
}

impl SendOutcome {
    pub(crate) fn from_results(mut results: Vec<SendResult>) -> Self {
        if results.len() == 1 {
            if let Some(single) = results.pop() {
                return Self::Single(single);
            }
        }
        Self::Batch(results)
    }

    /// Flatten into an ordered list regardless of shape.
    pub fn into_results(self) -> Vec<SendResult> {
        match self {
            Self::Single(result) => vec![result],
            Self::Batch(results) => results,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
