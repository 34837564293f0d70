//! Tool protocol for the callable command surface.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tool execution errors.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),
}

/// Definition of a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique identifier for the tool.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Description of what the tool does.
    pub description: String,

    /// JSON Schema for the parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<serde_json::Value>,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            parameters_schema: None,
        }
    }

    /// Set the parameters schema.
    pub fn with_parameters_schema(mut self, schema: serde_json::Value) -> Self {
        self.parameters_schema = Some(schema);
        self
    }
}

/// Result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Output content.
    pub content: String,

    /// Structured output (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_output: Option<serde_json::Value>,

    /// Error message if execution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Additional metadata about the execution.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ToolResult {
    /// Create a successful result with text content.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            structured_output: None,
            error: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a successful result with structured output.
    pub fn success_json(content: impl Into<String>, output: serde_json::Value) -> Self {
        Self {
            success: true,
            content: content.into(),
            structured_output: Some(output),
            error: None,
            metadata: HashMap::new(),
        }
    }

    /// Create an error result.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: String::new(),
            structured_output: None,
            error: Some(error.into()),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Context for tool execution.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// Session ID for the current session.
    pub session_id: String,

    /// Additional context data.
    pub data: HashMap<String, serde_json::Value>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            data: HashMap::new(),
        }
    }
}

/// Core trait for callable tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool definition.
    fn definition(&self) -> &ToolDefinition;

    /// Execute the tool with the given parameters.
    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError>;

    /// Validate the parameters before execution.
    fn validate(&self, params: &serde_json::Value) -> Result<(), ToolError> {
        let definition = self.definition();
        if let Some(schema) = &definition.parameters_schema {
            if schema.get("type") == Some(&serde_json::json!("object")) && !params.is_object() {
                return Err(ToolError::ValidationFailed(
                    "Parameters must be an object".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTool {
        definition: ToolDefinition,
    }

    impl MockTool {
        fn new() -> Self {
            Self {
                definition: ToolDefinition::new("mock_tool", "Mock Tool", "A mock tool")
                    .with_parameters_schema(serde_json::json!({"type": "object"})),
            }
        }
    }

    #[async_trait]
    impl Tool for MockTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            _params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success("executed"))
        }
    }

    #[test]
    fn test_validate_rejects_non_object_params() {
        let tool = MockTool::new();
        assert!(tool.validate(&serde_json::json!({"key": "value"})).is_ok());
        let result = tool.validate(&serde_json::json!("not an object"));
        assert!(matches!(result, Err(ToolError::ValidationFailed(_))));
    }

    #[test]
    fn test_tool_result_constructors() {
        let ok = ToolResult::success("done").with_metadata("count", serde_json::json!(3));
        assert!(ok.success);
        assert_eq!(ok.metadata.get("count"), Some(&serde_json::json!(3)));

        let err = ToolResult::error("boom");
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn test_mock_tool_executes() {
        let tool = MockTool::new();
        let result = tool
            .execute(serde_json::json!({}), ToolContext::new("session-1"))
            .await
            .unwrap();
        assert_eq!(result.content, "executed");
    }
}
