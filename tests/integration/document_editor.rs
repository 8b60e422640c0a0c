use akademik_lib::commands::{
    DocumentEditor, EDITOR_ERROR_MESSAGE, EDITOR_GREETING, PLACEHOLDER_DOCUMENT,
};
use akademik_lib::models::{HistoryKind, LoadingState, Message, Role, Turn};
use akademik_lib::services::document_service::NEUTRAL_FALLBACK;
use akademik_lib::services::llm_client::ModelReply;
use pretty_assertions::assert_eq;

use crate::helpers::{harness, transport_failure, update_document};

#[tokio::test]
async fn opens_on_placeholder_without_payload() {
    let h = harness(vec![]);
    let editor = DocumentEditor::new(h.services, None);
    assert_eq!(editor.content(), PLACEHOLDER_DOCUMENT);
    assert_eq!(editor.messages(), &[Message::model(EDITOR_GREETING)]);
    assert!(!editor.can_undo());
}

#[tokio::test]
async fn tool_update_replaces_content_and_is_undoable() {
    let h = harness(vec![
        Ok(update_document("call_1", "Line one\nLine two")),
        Ok(ModelReply::text("Metni iki paragraf olarak yeniden yazdım.")),
    ]);
    let mut editor = DocumentEditor::new(h.services, Some("<p>Eski metin</p>".to_string()));

    let reply = editor.send("Metni yeniden yaz").await.cloned();
    assert_eq!(
        reply,
        Some(Message::model("Metni iki paragraf olarak yeniden yazdım."))
    );
    assert_eq!(editor.content(), "<p>Line one</p><p>Line two</p>");
    assert_eq!(editor.state(), LoadingState::Idle);

    assert!(editor.undo());
    assert_eq!(editor.content(), "<p>Eski metin</p>");
    assert!(editor.redo());
    assert_eq!(editor.content(), "<p>Line one</p><p>Line two</p>");

    let requests = h.backend.requests();
    match &requests[0].turns[..] {
        [Turn::User { text }] => {
            assert!(text.contains("\"\"\"Eski metin\"\"\""));
            assert!(text.ends_with("User Request: Metni yeniden yaz"));
        }
        other => panic!("unexpected turns: {other:?}"),
    }
}

#[tokio::test]
async fn html_argument_is_used_verbatim() {
    let h = harness(vec![
        Ok(update_document("c", "<p>Already HTML</p>")),
        Ok(ModelReply::text("Tamam.")),
    ]);
    let mut editor = DocumentEditor::new(h.services, None);
    editor.send("değiştir").await;
    assert_eq!(editor.content(), "<p>Already HTML</p>");
}

#[tokio::test]
async fn failure_on_tool_result_leaves_content_unchanged() {
    let h = harness(vec![
        Ok(update_document("call_1", "<p>Yeni</p>")),
        Err(transport_failure()),
    ]);
    let mut editor = DocumentEditor::new(h.services, Some("<p>Önce</p>".to_string()));
    let messages_before = editor.messages().len();

    editor.send("yeniden yaz").await;

    assert_eq!(editor.content(), "<p>Önce</p>");
    assert!(!editor.can_undo());
    assert_eq!(editor.state(), LoadingState::Error);
    assert!(editor.session().is_empty());

    let new_messages = &editor.messages()[messages_before..];
    assert_eq!(
        new_messages,
        &[Message::user("yeniden yaz"), Message::model(EDITOR_ERROR_MESSAGE)]
    );
    let errors = editor
        .messages()
        .iter()
        .filter(|m| m.role == Role::Model && m.text == EDITOR_ERROR_MESSAGE)
        .count();
    assert_eq!(errors, 1);
}

#[tokio::test]
async fn failure_on_first_exchange_leaves_content_unchanged() {
    let h = harness(vec![Err(transport_failure())]);
    let mut editor = DocumentEditor::new(h.services, Some("<p>Önce</p>".to_string()));
    let messages_before = editor.messages().len();

    let reply = editor.send("özetle").await.cloned();

    assert_eq!(reply, Some(Message::model(EDITOR_ERROR_MESSAGE)));
    assert_eq!(editor.content(), "<p>Önce</p>");
    assert!(!editor.can_undo());
    assert_eq!(editor.state(), LoadingState::Error);
    assert!(editor.session().is_empty());
    assert_eq!(
        &editor.messages()[messages_before..],
        &[Message::user("özetle"), Message::model(EDITOR_ERROR_MESSAGE)]
    );
    assert_eq!(h.backend.requests().len(), 1);
}

#[tokio::test]
async fn reply_without_tool_call_is_shown_and_session_grows() {
    let h = harness(vec![
        Ok(ModelReply::text("Giriş bölümü yeterince açık.")),
        Ok(ModelReply::default()),
    ]);
    let mut editor = DocumentEditor::new(h.services, None);

    editor.send("Giriş nasıl?").await;
    editor.send("Peki sonuç?").await;

    let texts: Vec<_> = editor.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            EDITOR_GREETING,
            "Giriş nasıl?",
            "Giriş bölümü yeterince açık.",
            "Peki sonuç?",
            NEUTRAL_FALLBACK,
        ]
    );
    assert_eq!(editor.content(), PLACEHOLDER_DOCUMENT);
    assert_eq!(editor.session().len(), 4);
    // The second request carries the first exchange.
    assert_eq!(h.backend.requests()[1].turns.len(), 3);
}

#[tokio::test]
async fn blank_request_sends_nothing() {
    let h = harness(vec![]);
    let mut editor = DocumentEditor::new(h.services, None);
    assert!(editor.send("  ").await.is_none());
    assert!(h.backend.requests().is_empty());
    assert_eq!(editor.messages().len(), 1);
}

#[tokio::test]
async fn typing_after_undo_drops_redo() {
    let h = harness(vec![]);
    let mut editor = DocumentEditor::new(h.services, Some("<p>a</p>".to_string()));
    editor.edit("<p>ab</p>");
    editor.edit("<p>abc</p>");
    editor.undo();
    editor.edit("<p>ax</p>");

    assert!(!editor.can_redo());
    assert!(editor.undo());
    assert_eq!(editor.content(), "<p>a</p>");
}

#[tokio::test]
async fn save_records_draft_in_history() {
    let h = harness(vec![]);
    let html = "<p>Bu çalışmada yapay zekâ destekli akademik yazım incelenmektedir.</p>";
    let editor = DocumentEditor::new(h.services, Some(html.to_string()));

    let saved = editor.save().unwrap();
    assert_eq!(saved.kind, HistoryKind::Edit);
    assert_eq!(saved.title, "Taslak: Bu çalışmada yapay z...");
    assert_eq!(
        saved.preview,
        "Bu çalışmada yapay zekâ destekli akademik yazım in"
    );
    assert_eq!(saved.full_content.as_deref(), Some(html));
    assert_eq!(h.history.list(), vec![saved]);
}
