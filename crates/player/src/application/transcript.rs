//! Transcript entries and narrator-text normalization.
//!
//! Narrator text embeds character speech using a fixed convention:
//! `**<Name>:** "<Speech>"`. Normalization splits one narrator blob into an
//! ordered list of typed fragments so the UI can attribute each span.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use uuid::Uuid;

use detetive_protocol::SuggestedOption;

/// Fixed sender label for plain narration fragments.
pub const NARRATOR_LABEL: &str = "Narrador";

/// Bold-name, colon, quoted speech. Both captures are non-greedy, so speech
/// that itself contains the literal `**Name:**` sequence mis-splits; that is
/// an accepted limitation of the convention, not something to work around.
static SPEECH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\*\*(.*?):\*\* "(.*?)""#).expect("speech pattern is a valid literal regex")
});

/// Classification of one transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Narrator,
    CharacterSpeech,
    System,
    Error,
    GameOver,
}

impl MessageKind {
    /// Display label for kinds with a fixed sender.
    ///
    /// Narration and character speech get their sender from the text itself.
    pub fn label(self) -> &'static str {
        match self {
            MessageKind::User => "Você",
            MessageKind::Narrator | MessageKind::CharacterSpeech => NARRATOR_LABEL,
            MessageKind::System => "Sistema",
            MessageKind::Error => "Erro",
            MessageKind::GameOver => "Fim de Jogo",
        }
    }
}

/// One entry of the game transcript. Append-only; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub kind: MessageKind,
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Local>,
    pub options: Vec<SuggestedOption>,
}

impl ChatMessage {
    fn new(kind: MessageKind, sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            sender: sender.into(),
            content: content.into(),
            timestamp: Local::now(),
            options: Vec::new(),
        }
    }

    /// Clock-face timestamp shown next to the sender.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Build a single transcript entry for a non-narrator kind.
///
/// These bypass speech splitting and get their sender from the fixed label
/// table.
pub fn single(kind: MessageKind, content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(kind, kind.label(), content)
}

/// Split one narrator blob into narration and character-speech fragments.
///
/// Unmatched spans around the speech matches become narration fragments
/// (trimmed, empty spans skipped). Zero matches yield exactly one narration
/// fragment carrying the trimmed input. Suggested options attach to the last
/// fragment so the quick-action row follows the final spoken line.
pub fn narrator_fragments(text: &str, options: Vec<SuggestedOption>) -> Vec<ChatMessage> {
    let mut fragments = Vec::new();
    let mut last_index = 0;

    for captures in SPEECH_PATTERN.captures_iter(text) {
        let (Some(full), Some(name), Some(speech)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };

        let preceding = text[last_index..full.start()].trim();
        if !preceding.is_empty() {
            fragments.push(ChatMessage::new(
                MessageKind::Narrator,
                NARRATOR_LABEL,
                preceding,
            ));
        }

        fragments.push(ChatMessage::new(
            MessageKind::CharacterSpeech,
            name.as_str().trim(),
            speech.as_str().trim(),
        ));

        last_index = full.end();
    }

    let trailing = text[last_index..].trim();
    if !trailing.is_empty() {
        fragments.push(ChatMessage::new(
            MessageKind::Narrator,
            NARRATOR_LABEL,
            trailing,
        ));
    }

    if fragments.is_empty() {
        fragments.push(ChatMessage::new(
            MessageKind::Narrator,
            NARRATOR_LABEL,
            text.trim(),
        ));
    }

    if let Some(last) = fragments.last_mut() {
        last.options = options;
    }

    fragments
}
