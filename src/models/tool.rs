use serde::{Deserialize, Serialize};
use serde_json::json;

pub const UPDATE_DOCUMENT_TOOL: &str = "updateDocument";

/// A function call exactly as the model produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToolCall {
    /// Invocation id; echoed back on the matching tool result.
    pub id: String,
    pub name: String,
    /// Arguments as the raw JSON text sent by the model.
    pub arguments: String,
}

/// A function offered to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    /// JSON schema of the argument object.
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateDocumentArgs {
    new_content: String,
}

/// The closed set of tools the document editor understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorTool {
    /// Replace the whole document with `new_content`.
    UpdateDocument { new_content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolCallError {
    #[error("unknown tool `{0}`")]
    UnknownTool(String),
    #[error("invalid arguments for `{name}`: {reason}")]
    InvalidArguments { name: String, reason: String },
}

impl EditorTool {
    pub fn declarations() -> Vec<ToolDeclaration> {
        vec![ToolDeclaration {
            name: UPDATE_DOCUMENT_TOOL.to_string(),
            description: "Updates the entire document content with the new text provided. Use this whenever the user asks to edit, rewrite, fix, or change the document content.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "newContent": {
                        "type": "string",
                        "description": "The full new content of the document after applying the changes."
                    }
                },
                "required": ["newContent"]
            }),
        }]
    }

    pub fn parse(call: &RawToolCall) -> Result<Self, ToolCallError> {
        match call.name.as_str() {
            UPDATE_DOCUMENT_TOOL => {
                let args: UpdateDocumentArgs =
                    serde_json::from_str(&call.arguments).map_err(|e| {
                        ToolCallError::InvalidArguments {
                            name: call.name.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                Ok(EditorTool::UpdateDocument {
                    new_content: args.new_content,
                })
            }
            other => Err(ToolCallError::UnknownTool(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorTool::UpdateDocument { .. } => UPDATE_DOCUMENT_TOOL,
        }
    }
}
