use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single chat turn, serialized as `{"role": ..., "content": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The system prompt followed by the user's question, in that order.
///
/// Built fresh for every request and consumed by a single gateway call.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    turns: [Turn; 2],
}

impl Conversation {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            turns: [
                Turn {
                    role: Role::System,
                    content: system.into(),
                },
                Turn {
                    role: Role::User,
                    content: user.into(),
                },
            ],
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn system(&self) -> &str {
        self.turns[0].content()
    }

    pub fn user(&self) -> &str {
        self.turns[1].content()
    }
}
