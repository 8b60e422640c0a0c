use std::sync::Arc;

use super::llm_client::{ModelBackend, ModelReply, ModelRequest};
use crate::error::GatewayError;
use crate::models::{SummaryTone, TargetLanguage, ToolDeclaration, Turn};

// ============================================================================
// PROMPTS
// ============================================================================

const TRANSLATE_TR_PROMPT: &str = "Aşağıdaki metni akademik Türkçe'ye çevir. Resmi, nesnel ve akademik bir dil kullan. Sadece çeviriyi döndür.\n\nMetin: ";
const TRANSLATE_EN_PROMPT: &str = "Translate the following text to Academic English. Use formal, objective, and scholarly language. Return only the translation.\n\nText: ";
const IMPROVE_PROMPT: &str = "Sen uzman bir akademik editörsün. Aşağıdaki metni akademik standartlara (gramer, akıcılık, resmiyet, nesnellik) göre düzenle ve iyileştir. Anlam bütünlüğünü bozma. Sadece iyileştirilmiş metni döndür.\n\nMetin: ";

/// Persona of the free-form academic assistant chat.
pub const ASSISTANT_PERSONA: &str = "Sen yardımsever bir akademik asistansın. Kullanıcılara araştırma, yazım, literatür tarama ve akademik metodoloji konularında yardımcı oluyorsun. Cevapların kısa, öz ve akademik dilde olsun.";

pub const TRANSLATE_FALLBACK: &str = "Çeviri yapılamadı.";
pub const IMPROVE_FALLBACK: &str = "Düzenleme yapılamadı.";
pub const SUMMARY_FALLBACK: &str = "Özet oluşturulamadı.";
pub const CHAT_FALLBACK: &str = "Cevap alınamadı.";

fn translate_prompt(text: &str, target: TargetLanguage) -> String {
    let instruction = match target {
        TargetLanguage::Tr => TRANSLATE_TR_PROMPT,
        TargetLanguage::En => TRANSLATE_EN_PROMPT,
    };
    format!("{}{}", instruction, text)
}

fn summarize_prompt(text: &str, tone: SummaryTone, target_words: u32) -> String {
    format!(
        "Aşağıdaki metni {} bir tonla özetle. Hedef kelime sayısı yaklaşık {} kelime olsun. Akademik bir dil kullan.\n\nMetin: {}",
        tone.prompt_label(),
        target_words,
        text
    )
}

// ============================================================================
// GATEWAY
// ============================================================================

/// Every model-backed capability of the app. Holds no conversation state;
/// callers pass the turns they own on every call.
#[derive(Clone)]
pub struct AiGateway {
    backend: Arc<dyn ModelBackend>,
    model: String,
}

impl AiGateway {
    pub fn new(backend: Arc<dyn ModelBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String, GatewayError> {
        self.complete("translate", translate_prompt(text, target), TRANSLATE_FALLBACK)
            .await
    }

    pub async fn improve(&self, text: &str) -> Result<String, GatewayError> {
        self.complete("improve", format!("{}{}", IMPROVE_PROMPT, text), IMPROVE_FALLBACK)
            .await
    }

    /// Tone and length are only requested in the prompt; the reply is not
    /// checked against them.
    pub async fn summarize(
        &self,
        text: &str,
        tone: SummaryTone,
        target_words: u32,
    ) -> Result<String, GatewayError> {
        self.complete("summarize", summarize_prompt(text, tone, target_words), SUMMARY_FALLBACK)
            .await
    }

    pub async fn chat(&self, message: &str, prior_turns: &[Turn]) -> Result<String, GatewayError> {
        let mut turns = prior_turns.to_vec();
        turns.push(Turn::user(message));

        let reply = self
            .exchange(Some(ASSISTANT_PERSONA), turns, Vec::new())
            .await
            .inspect_err(|e| tracing::error!("Chat error: {}", e))?;
        Ok(reply
            .non_empty_text()
            .unwrap_or(CHAT_FALLBACK)
            .to_string())
    }

    /// One raw exchange, used by the tool-calling document editor.
    pub async fn exchange(
        &self,
        system_instruction: Option<&str>,
        turns: Vec<Turn>,
        tools: Vec<ToolDeclaration>,
    ) -> Result<ModelReply, GatewayError> {
        self.backend
            .generate(ModelRequest {
                model: self.model.clone(),
                system_instruction: system_instruction.map(str::to_string),
                turns,
                tools,
            })
            .await
    }

    async fn complete(
        &self,
        operation: &'static str,
        prompt: String,
        fallback: &str,
    ) -> Result<String, GatewayError> {
        let reply = self
            .exchange(None, vec![Turn::user(prompt)], Vec::new())
            .await
            .inspect_err(|e| tracing::error!(operation = %operation, "Gateway error: {}", e))?;
        Ok(reply.non_empty_text().unwrap_or(fallback).to_string())
    }
}
