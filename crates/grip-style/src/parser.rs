//! Turning declaration text into property/value pairs.
//!
//! In a browser host this is done by the engine itself: assign the text to
//! an element's `style` and enumerate what stuck. [`StyleParser`] is that
//! seam. [`DeclarationParser`] is a small fallback for hosts without one;
//! it splits declarations and decodes CSS escapes the way an engine would,
//! but does not expand shorthands or compute values.

/// Something that can enumerate the declarations in a CSS text.
pub trait StyleParser {
    fn parse(&self, text: &str) -> Vec<(String, String)>;
}

impl<F> StyleParser for F
where
    F: Fn(&str) -> Vec<(String, String)>,
{
    fn parse(&self, text: &str) -> Vec<(String, String)> {
        self(text)
    }
}

/// Splits `name: value; ...` text, dropping fragments a CSS engine would drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationParser;

impl StyleParser for DeclarationParser {
    fn parse(&self, text: &str) -> Vec<(String, String)> {
        split_declarations(&strip_comments(text))
            .into_iter()
            .filter_map(parse_declaration)
            .collect()
    }
}

/// Remove `/* ... */` comments outside of strings. An unterminated comment
/// swallows the rest of the input.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) => {
                out.push(ch);
                if ch == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if ch == q {
                    quote = None;
                }
            }
            None if ch == '/' && chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            None => {
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                }
                out.push(ch);
            }
        }
    }
    out
}

/// Split on `;` that are outside quotes and parentheses.
fn split_declarations(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' | '\'' => match quote {
                Some(q) if q == ch => quote = None,
                None => quote = Some(ch),
                Some(_) => {}
            },
            '(' if quote.is_none() => depth += 1,
            ')' if quote.is_none() => depth = depth.saturating_sub(1),
            ';' if quote.is_none() && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn parse_declaration(fragment: &str) -> Option<(String, String)> {
    let (name, value) = fragment.split_once(':')?;

    let name = name.trim().to_ascii_lowercase();
    if !is_identifier(&name) {
        return None;
    }

    // The policy must see what an engine would read, not the escaped text.
    let value = decode_escapes(value);
    let value = strip_important(value.trim()).trim();
    if value.is_empty() || value.contains('\\') {
        return None;
    }

    Some((name, value.to_string()))
}

/// Decode CSS escapes: `\` + 1-6 hex digits (plus one trailing whitespace),
/// or `\` + any other character for that character. Invalid code points
/// become U+FFFD and an escaped newline is a line continuation.
fn decode_escapes(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut code = 0u32;
                let mut digits = 0;
                while digits < 6 {
                    match chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(d) => {
                            code = code * 16 + d;
                            digits += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }
                match chars.peek() {
                    Some('\r') => {
                        chars.next();
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                        }
                    }
                    Some(' ' | '\t' | '\n' | '\x0c') => {
                        chars.next();
                    }
                    _ => {}
                }
                let decoded = match code {
                    0 => None,
                    code => char::from_u32(code),
                };
                out.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some('\n' | '\r' | '\x0c') => {
                chars.next();
            }
            Some(c) => {
                chars.next();
                out.push(c);
            }
            None => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
    out
}

fn is_identifier(name: &str) -> bool {
    let body = name.trim_start_matches('-');
    !body.is_empty()
        && !body.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn strip_important(value: &str) -> &str {
    let Some(bang) = value.rfind('!') else {
        return value;
    };
    if value[bang + 1..].trim().eq_ignore_ascii_case("important") {
        &value[..bang]
    } else {
        value
    }
}
