//! Wire-format types shared between the form and the API client

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of documentation to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    #[default]
    Function,
    Api,
    ErrorHandling,
    Database,
    Workflow,
}

impl DocType {
    pub const ALL: [DocType; 5] = [
        DocType::Function,
        DocType::Api,
        DocType::ErrorHandling,
        DocType::Database,
        DocType::Workflow,
    ];

    /// Human-readable label for the selector
    pub fn label(self) -> &'static str {
        match self {
            DocType::Function => "Function",
            DocType::Api => "API",
            DocType::ErrorHandling => "Error Handling",
            DocType::Database => "Database",
            DocType::Workflow => "Workflow",
        }
    }
}

/// Formatting convention for the generated documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleGuide {
    #[default]
    Google,
    Numpy,
    Sphinx,
    Custom,
}

impl StyleGuide {
    pub const ALL: [StyleGuide; 4] = [
        StyleGuide::Google,
        StyleGuide::Numpy,
        StyleGuide::Sphinx,
        StyleGuide::Custom,
    ];

    /// Human-readable label for the selector
    pub fn label(self) -> &'static str {
        match self {
            StyleGuide::Google => "Google",
            StyleGuide::Numpy => "NumPy",
            StyleGuide::Sphinx => "Sphinx",
            StyleGuide::Custom => "Custom",
        }
    }
}

/// Payload sent to the generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationRequest {
    pub content: String,
    pub doc_type: DocType,
    pub style_guide: StyleGuide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl DocumentationRequest {
    /// Build the minimal payload the form submits
    pub fn new(content: String, doc_type: DocType, style_guide: StyleGuide) -> Self {
        Self {
            content,
            doc_type,
            style_guide,
            context: None,
            examples: None,
        }
    }
}

/// Response returned by the generation endpoint
///
/// `metadata` is carried through untouched; the client never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationResponse {
    pub documentation: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Normalized failure surfaced to the UI layer
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status code, when the failure came from a completed response
    pub status: Option<u16>,
}

impl ApiError {
    /// Generic message used when a failure carries no usable description
    pub const GENERIC_MESSAGE: &'static str = "Failed to generate documentation";

    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn generic(status: Option<u16>) -> Self {
        Self::new(Self::GENERIC_MESSAGE, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_optional_fields() {
        for doc_type in DocType::ALL {
            for style_guide in StyleGuide::ALL {
                let payload =
                    DocumentationRequest::new("fn main() {}".to_string(), doc_type, style_guide);
                let value = serde_json::to_value(&payload).unwrap();
                let object = value.as_object().unwrap();
                assert_eq!(object.len(), 3);
                assert!(object.contains_key("content"));
                assert!(object.contains_key("doc_type"));
                assert!(object.contains_key("style_guide"));
            }
        }
    }

    #[test]
    fn test_request_includes_optional_fields_when_set() {
        let mut payload = DocumentationRequest::new(
            "def f(): pass".to_string(),
            DocType::Function,
            StyleGuide::Numpy,
        );
        payload.context = Some(HashMap::from([(
            "language".to_string(),
            serde_json::json!("python"),
        )]));
        payload.examples = Some(vec!["f()".to_string()]);

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["context"]["language"], "python");
        assert_eq!(object["examples"][0], "f()");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(DocType::ErrorHandling).unwrap(),
            "error_handling"
        );
        assert_eq!(serde_json::to_value(DocType::Api).unwrap(), "api");
        assert_eq!(serde_json::to_value(StyleGuide::Numpy).unwrap(), "numpy");
        assert_eq!(serde_json::to_value(StyleGuide::Google).unwrap(), "google");
    }

    #[test]
    fn test_response_metadata_defaults_to_empty() {
        let response: DocumentationResponse =
            serde_json::from_str(r#"{"documentation": "docs"}"#).unwrap();
        assert_eq!(response.documentation, "docs");
        assert!(response.metadata.is_empty());
    }

    #[test]
    fn test_api_error_display_is_message() {
        let err = ApiError::new("bad input", Some(422));
        assert_eq!(err.to_string(), "bad input");
        assert_eq!(ApiError::generic(None).to_string(), ApiError::GENERIC_MESSAGE);
    }
}
