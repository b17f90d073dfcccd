use tracing::debug;

/// Classification tag carried by the provider's `{type, content}` reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    Sql,
    Chat,
}

impl EnvelopeKind {
    /// Case-insensitive. Anything other than `SQL` (including a missing tag)
    /// is treated as conversation.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_uppercase()) {
            Some(t) if t == "SQL" => EnvelopeKind::Sql,
            Some(t) if t == "CHAT" => EnvelopeKind::Chat,
            other => {
                debug!("Unrecognized envelope type {:?}, treating as CHAT", other);
                EnvelopeKind::Chat
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeKind::Sql => "SQL",
            EnvelopeKind::Chat => "CHAT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEnvelope {
    kind: EnvelopeKind,
    content: String,
}

impl CompletionEnvelope {
    pub fn new(kind: EnvelopeKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> EnvelopeKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

/// What the mediator should do with an interpreted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// A statement to hand to the executor as-is.
    Data(String),
    /// Text to surface to the user as a literal.
    Conversational(String),
}
