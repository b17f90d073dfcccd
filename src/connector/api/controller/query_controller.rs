use anyhow::Result;

use crate::application::QueryRow;

use super::super::Container;

pub struct QueryController<'a> {
    container: &'a Container,
}

impl<'a> QueryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, question: String) -> Result<String> {
        let use_case = self.container.ask_use_case();
        let rows = use_case.execute(&question).await?;
        Ok(format_rows(&rows))
    }

    pub async fn translate(&self, question: String) -> Result<String> {
        Ok(self.container.mediator().translate(&question).await)
    }
}

/// One block per row, `column: value` per line.
pub fn format_rows(rows: &[QueryRow]) -> String {
    if rows.is_empty() {
        return "No rows returned.".to_string();
    }

    let mut output = String::new();
    for (i, row) in rows.iter().enumerate() {
        if rows.len() > 1 {
            output.push_str(&format!("Row {}:\n", i + 1));
        }
        for (column, value) in row {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            output.push_str(&format!("  {}: {}\n", column, rendered));
        }
    }

    output.trim_end().to_string()
}
