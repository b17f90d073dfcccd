use crate::domain::DomainError;

/// Wrap display text as `SELECT '<text>' AS message;`.
///
/// Single quotes are doubled, so the text can never close the literal early:
/// the result is always one statement yielding one row with a `message` column.
pub fn wrap_literal(text: &str) -> String {
    format!("SELECT '{}' AS message;", text.replace('\'', "''"))
}

/// Accept only a single statement that starts with the `SELECT` keyword.
///
/// Comments are ignored, trailing `;` terminators are allowed, and any other
/// `;` outside a quoted literal or identifier means a second statement.
pub fn ensure_read_only(sql: &str) -> Result<(), DomainError> {
    let code = executable_text(sql)?;
    let statement = code.trim();

    if !starts_with_keyword(statement, "SELECT") {
        return Err(DomainError::unsafe_statement(format!(
            "only SELECT statements may run: {}",
            sql.trim()
        )));
    }

    reject_stacked(&code, sql)
}

/// Accept any input that holds at most one statement.
pub fn ensure_single_statement(sql: &str) -> Result<(), DomainError> {
    let code = executable_text(sql)?;
    reject_stacked(&code, sql)
}

fn reject_stacked(code: &str, sql: &str) -> Result<(), DomainError> {
    let body = code.trim_end_matches(|c: char| c == ';' || c.is_whitespace());
    if body.contains(';') {
        return Err(DomainError::unsafe_statement(format!(
            "multiple statements are not allowed: {}",
            sql.trim()
        )));
    }
    Ok(())
}

fn starts_with_keyword(statement: &str, keyword: &str) -> bool {
    let Some(prefix) = statement.get(..keyword.len()) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case(keyword) {
        return false;
    }
    !matches!(
        statement[keyword.len()..].chars().next(),
        Some(c) if c.is_alphanumeric() || c == '_'
    )
}

/// The statement as the database lexer sees it: comments become whitespace
/// and quoted literals or identifiers keep only their delimiters.
///
/// Constructs whose extent the DuckDB lexer could read differently are
/// refused outright: `E'...'` escape strings, `$...$` quoting or parameters,
/// nested or unterminated block comments, and unterminated quotes.
fn executable_text(sql: &str) -> Result<String, DomainError> {
    let mut code = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                if c == '\'' && matches!(code.chars().last(), Some('e' | 'E')) {
                    return Err(DomainError::unsafe_statement(
                        "escape string literals are not allowed",
                    ));
                }
                let mut closed = false;
                while let Some(inner) = chars.next() {
                    if inner == c {
                        // Doubled delimiter stays inside the literal.
                        if chars.peek() == Some(&c) {
                            chars.next();
                            continue;
                        }
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(DomainError::unsafe_statement("unterminated quoted text"));
                }
                code.push(c);
                code.push(c);
            }
            '-' if chars.peek() == Some(&'-') => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        break;
                    }
                }
                code.push('\n');
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut closed = false;
                while let Some(inner) = chars.next() {
                    match (inner, chars.peek()) {
                        ('*', Some(&'/')) => {
                            chars.next();
                            closed = true;
                            break;
                        }
                        ('/', Some(&'*')) => {
                            return Err(DomainError::unsafe_statement(
                                "nested block comments are not allowed",
                            ));
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(DomainError::unsafe_statement("unterminated block comment"));
                }
                code.push(' ');
            }
            '$' => {
                return Err(DomainError::unsafe_statement(
                    "dollar quoting and parameters are not allowed",
                ));
            }
            _ => code.push(c),
        }
    }

    Ok(code)
}
