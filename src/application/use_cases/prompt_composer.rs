use crate::domain::{Conversation, SchemaDescription};

/// Builds the system/user conversation sent to the completion provider.
///
/// The question is forwarded verbatim: the provider consumes natural language,
/// and anything it echoes back is escaped on the way out by
/// [`super::wrap_literal`].
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    schema: SchemaDescription,
}

impl PromptComposer {
    pub fn compose(&self, question: &str) -> Conversation {
        Conversation::new(self.system_prompt(), question)
    }

    fn system_prompt(&self) -> String {
        format!(
            "\
You are an inventory database assistant.
Schema: {schema}.

Analyze the user's input and return a JSON object with exactly two string fields: \"type\" and \"content\".

1. If the user asks for DATA (e.g. \"how many items?\", \"list products\"), write a single read-only \
SQL SELECT query over the schema above.
   Format: {{\"type\": \"SQL\", \"content\": \"SELECT ...;\"}}
2. If the user CHATS (e.g. \"hi\", \"thanks\", \"who are you?\"), write a short helpful reply.
   Format: {{\"type\": \"CHAT\", \"content\": \"Hello! I am your inventory assistant...\"}}
3. If the request is UNRELATED to the inventory (e.g. weather, jokes), refuse politely.
   Format: {{\"type\": \"CHAT\", \"content\": \"I can only answer inventory questions.\"}}

Never write INSERT, UPDATE, DELETE, DROP or any other statement that modifies data.
Return ONLY the raw JSON object. No markdown, no code fences, no explanations.",
            schema = self.schema.as_text()
        )
    }
}
