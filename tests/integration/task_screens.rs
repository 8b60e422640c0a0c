use akademik_lib::commands::{
    CHAT_ERROR_MESSAGE, CHAT_GREETING, ChatScreen, EditScreen, SummarizeScreen, TASK_ERROR_MESSAGE,
    TranslateScreen,
};
use akademik_lib::models::{HistoryKind, LoadingState, Role, SummaryTone, TargetLanguage, Turn};
use akademik_lib::services::ai_service::ASSISTANT_PERSONA;
use akademik_lib::services::llm_client::ModelReply;
use pretty_assertions::assert_eq;

use crate::helpers::{harness, transport_failure};

#[tokio::test]
async fn translation_is_saved_with_full_content() {
    let h = harness(vec![Ok(ModelReply::text(
        "Bu çalışma, yapay zekânın akademik yazım üzerindeki etkisini incelemektedir.",
    ))]);
    let mut screen = TranslateScreen::new(h.services);
    screen.toggle_language();
    screen.toggle_language();
    assert_eq!(screen.target(), TargetLanguage::Tr);

    let input = "This study examines the impact of AI on academic writing.";
    let out = screen.translate(input).await.map(str::to_string);
    assert!(out.is_some());
    assert_eq!(screen.output().state(), LoadingState::Success);

    let items = h.history.list();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, HistoryKind::Translate);
    assert_eq!(items[0].title, "This study examines the impact...");
    assert_eq!(items[0].preview.chars().count(), 50);
    assert_eq!(items[0].full_content, out);
}

#[tokio::test]
async fn short_translation_title_has_no_ellipsis() {
    let h = harness(vec![Ok(ModelReply::text("Merhaba"))]);
    let mut screen = TranslateScreen::new(h.services);
    screen.set_target(TargetLanguage::En);
    screen.translate("Hello").await;
    assert_eq!(h.history.list()[0].title, "Hello");
    assert!(h.backend.requests()[0].system_instruction.is_none());
}

#[tokio::test]
async fn failed_task_reports_error_and_skips_history() {
    let h = harness(vec![Err(transport_failure())]);
    let mut screen = EditScreen::new(h.services);

    assert_eq!(screen.improve("bozuk metin").await, None);
    assert_eq!(screen.output().state(), LoadingState::Error);
    assert_eq!(screen.output().error_message(), Some(TASK_ERROR_MESSAGE));
    assert!(h.history.list().is_empty());
}

#[tokio::test]
async fn blank_input_never_reaches_the_model() {
    let h = harness(vec![]);
    let mut screen = EditScreen::new(h.services);
    assert_eq!(screen.improve("   ").await, None);
    assert_eq!(screen.output().state(), LoadingState::Idle);
    assert!(h.backend.requests().is_empty());
}

#[tokio::test]
async fn improvement_is_saved_as_edit() {
    let h = harness(vec![Ok(ModelReply::text("Düzeltilmiş metin."))]);
    let mut screen = EditScreen::new(h.services);
    screen.improve("duzeltilmemis bir metin ornegi burada").await;

    let items = h.history.list();
    let item = &items[0];
    assert_eq!(item.kind, HistoryKind::Edit);
    assert_eq!(item.title, "Düzenleme: duzeltilmemis bir me...");
    assert_eq!(item.full_content.as_deref(), Some("Düzeltilmiş metin."));
}

#[tokio::test]
async fn summary_is_saved_without_full_content() {
    let h = harness(vec![Ok(ModelReply::text("Kısa özet."))]);
    let mut screen = SummarizeScreen::new(h.services);
    screen.set_tone(SummaryTone::Critical);
    screen.set_target_words(120);

    assert_eq!(screen.summarize("Uzun bir makale metni").await, Some("Kısa özet."));
    let items = h.history.list();
    let item = &items[0];
    assert_eq!(item.kind, HistoryKind::Summarize);
    assert_eq!(item.title, "Özet: Uzun bir makale metn...");
    assert_eq!(item.full_content, None);

    match &h.backend.requests()[0].turns[..] {
        [Turn::User { text }] => assert!(text.contains("Eleştirel") && text.contains("120")),
        other => panic!("unexpected turns: {other:?}"),
    }
}

#[tokio::test]
async fn summarize_reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("makale.txt");
    std::fs::write(&path, "Dosyadan gelen metin").unwrap();
    assert_eq!(SummarizeScreen::load_file(&path).unwrap(), "Dosyadan gelen metin");
    assert!(SummarizeScreen::load_file(&dir.path().join("yok.txt")).is_err());
}

#[tokio::test]
async fn chat_records_history_only_for_first_exchange() {
    let h = harness(vec![
        Ok(ModelReply::text("Nitel yöntemler şunlardır...")),
        Ok(ModelReply::text("Örneklem büyüklüğü...")),
    ]);
    let mut chat = ChatScreen::new(h.services);

    chat.send("Nitel araştırma yöntemleri nelerdir?").await;
    chat.send("Örneklem ne kadar olmalı?").await;

    let items = h.history.list();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, HistoryKind::Chat);
    assert_eq!(items[0].title, "Sohbet: Nitel araştırma yönt...");
    assert_eq!(items[0].preview, "Nitel yöntemler şunlardır...");

    let requests = h.backend.requests();
    assert_eq!(requests[0].system_instruction.as_deref(), Some(ASSISTANT_PERSONA));
    assert_eq!(
        requests[1].turns,
        vec![
            Turn::model(CHAT_GREETING),
            Turn::user("Nitel araştırma yöntemleri nelerdir?"),
            Turn::model("Nitel yöntemler şunlardır..."),
            Turn::user("Örneklem ne kadar olmalı?"),
        ]
    );
    assert_eq!(chat.messages().len(), 5);
}

#[tokio::test]
async fn chat_failure_appends_apology() {
    let h = harness(vec![Err(transport_failure())]);
    let mut chat = ChatScreen::new(h.services);

    let reply = chat.send("Merhaba").await.cloned().unwrap();
    assert_eq!(reply.role, Role::Model);
    assert_eq!(reply.text, CHAT_ERROR_MESSAGE);
    assert_eq!(chat.state(), LoadingState::Error);
    assert!(h.history.list().is_empty());
}
