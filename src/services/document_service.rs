use serde_json::json;
use uuid::Uuid;

use super::ai_service::AiGateway;
use super::markup::{html_to_text, promote_plain_text};
use crate::error::GatewayError;
use crate::models::{ChatSession, EditorTool, RawToolCall, Turn};

/// Persona of the document editor assistant.
pub const DOCUMENT_ASSISTANT_INSTRUCTION: &str = "Sen 'Akademik Word Asistanı'sın. Kullanıcı bir belge yazıyor. Görevin, kullanıcının isteği üzerine belgedeki metni düzenlemek, genişletmek veya düzeltmek. Eğer kullanıcı metinde bir değişiklik isterse, SADECE sohbet etmekle kalma, `updateDocument` aracını kullanarak metni gerçekten güncelle. Kullanıcıya her zaman yaptığın değişikliği kısaca açıkla.";

pub const TOOL_SUCCESS_RESULT: &str = "Document updated successfully.";

/// Shown when the model gives no usable explanation.
pub const NEUTRAL_FALLBACK: &str = "İşlem tamamlandı.";

/// Result of one user request against the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTurn {
    /// Assistant text to show the user.
    pub reply: String,
    /// Full replacement content, when the model updated the document.
    pub new_content: Option<String>,
}

/// The user message actually sent to the model: the document as plain text
/// followed by the literal request.
pub fn context_message(document_html: &str, request: &str) -> String {
    format!(
        "Current Document Content (Plain Text Representation):\n\"\"\"{}\"\"\"\n\nUser Request: {}",
        html_to_text(document_html),
        request
    )
}

/// Runs one editor request: a first exchange offering `updateDocument`,
/// and, if the model calls it, a second exchange carrying the tool result
/// that yields the explanation.
///
/// Nothing is written to `session` and no content is returned unless every
/// exchange succeeded. Only the first tool call of a reply is honored; an
/// unknown or malformed call is treated as if the model made none.
pub async fn run_update_turn(
    gateway: &AiGateway,
    session: &mut ChatSession,
    current_content: &str,
    request: &str,
) -> Result<DocumentTurn, GatewayError> {
    let user_turn = Turn::user(context_message(current_content, request));
    let mut turns = session.turns().to_vec();
    turns.push(user_turn.clone());

    let first = gateway
        .exchange(
            Some(DOCUMENT_ASSISTANT_INSTRUCTION),
            turns.clone(),
            EditorTool::declarations(),
        )
        .await?;

    if first.tool_calls.len() > 1 {
        tracing::debug!(
            dropped = first.tool_calls.len() - 1,
            "only the first tool call is applied"
        );
    }

    let invocation = first.tool_calls.first().and_then(|raw| match EditorTool::parse(raw) {
        Ok(tool) => Some((raw.clone(), tool)),
        Err(e) => {
            tracing::warn!("Ignoring tool call: {}", e);
            None
        }
    });

    let Some((mut call, EditorTool::UpdateDocument { new_content })) = invocation else {
        let reply = first.non_empty_text().unwrap_or(NEUTRAL_FALLBACK).to_string();
        session.commit_turn(vec![user_turn, Turn::model(reply.clone())]);
        return Ok(DocumentTurn {
            reply,
            new_content: None,
        });
    };

    if call.id.is_empty() {
        call.id = format!("call_{}", Uuid::new_v4().simple());
    }
    let promoted = promote_plain_text(&new_content);
    tracing::debug!(call_id = %call.id, chars = promoted.len(), "applying document update");

    let result_turn = tool_result(&call);
    let call_turn = Turn::ToolCall { call };
    turns.push(call_turn.clone());
    turns.push(result_turn.clone());

    let second = gateway
        .exchange(
            Some(DOCUMENT_ASSISTANT_INSTRUCTION),
            turns,
            EditorTool::declarations(),
        )
        .await?;
    let reply = second.non_empty_text().unwrap_or(NEUTRAL_FALLBACK).to_string();

    session.commit_turn(vec![
        user_turn,
        call_turn,
        result_turn,
        Turn::model(reply.clone()),
    ]);

    Ok(DocumentTurn {
        reply,
        new_content: Some(promoted),
    })
}

fn tool_result(call: &RawToolCall) -> Turn {
    Turn::ToolResult {
        call_id: call.id.clone(),
        name: call.name.clone(),
        result: json!({ "result": TOOL_SUCCESS_RESULT }),
    }
}
