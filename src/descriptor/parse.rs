use crate::descriptor::spec::{FieldType, ParsedSpec};

const TRUTHY_MARK: char = '*';
const OPEN: char = '(';
const CLOSE: char = ')';
const LENGTH_MARK: char = '@';
const PATH_SEPARATOR: char = '/';

/// Lexical pieces of a descriptor, in the order they may appear.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    /// Leading `*`.
    Truthy,
    /// Raw text between `(` and the first `)`.
    Constraint(&'a str),
    /// Everything else.
    Path(&'a str),
}

/// Parse one field descriptor into its structured form.
///
/// Grammar:
/// ['*'] ['(' TYPE ['@' LENGTH] ')'] PATH
///
/// Example:
/// *(int@4)profile/birth_year
///
/// Never fails. A parenthetical that does not parse degrades to "no type, the
/// whole remaining text is the path".
pub fn parse(descriptor: &str) -> ParsedSpec {
    let mut require_truthy = false;
    let mut field_type = FieldType::Any;
    let mut max_length = None;
    let mut degraded = false;
    let mut path = "";

    for token in tokenize(descriptor) {
        match token {
            Token::Truthy => require_truthy = true,
            Token::Constraint(raw) => match parse_constraint(raw) {
                Some((ty, len)) => {
                    field_type = ty;
                    max_length = len;
                }
                None => degraded = true,
            },
            Token::Path(text) => {
                path = text;
                if field_type == FieldType::Any && text.starts_with(OPEN) {
                    degraded = true;
                }
            }
        }
    }

    // A rejected constraint gives its text back to the path.
    if degraded {
        path = descriptor.strip_prefix(TRUTHY_MARK).unwrap_or(descriptor);
    }

    ParsedSpec {
        require_truthy,
        field_type,
        max_length,
        path: split_path(path),
        degraded,
    }
}

/// Split a descriptor into tokens. Precedence: truthy mark first, then the
/// parenthetical, then the path.
fn tokenize(descriptor: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::with_capacity(3);
    let mut rest = descriptor;

    if let Some(stripped) = rest.strip_prefix(TRUTHY_MARK) {
        tokens.push(Token::Truthy);
        rest = stripped;
    }

    // Unmatched '(' is not a constraint; it stays part of the path.
    if let Some(inner) = rest.strip_prefix(OPEN) {
        if let Some(close) = inner.find(CLOSE) {
            tokens.push(Token::Constraint(&inner[..close]));
            rest = &inner[close + CLOSE.len_utf8()..];
        }
    }

    tokens.push(Token::Path(rest));
    tokens
}

/// Parse "TYPE[@LENGTH]". None if the text is not a well-formed constraint.
fn parse_constraint(raw: &str) -> Option<(FieldType, Option<usize>)> {
    let (type_token, length) = match raw.split_once(LENGTH_MARK) {
        Some((ty, len)) => (ty, Some(len)),
        None => (raw, None),
    };

    if type_token.is_empty()
        || !type_token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }

    let max_length = match length {
        Some(len) => {
            if len.is_empty() || !len.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            Some(len.parse::<usize>().ok()?)
        }
        None => None,
    };

    Some((FieldType::from_token(type_token), max_length))
}

fn split_path(path: &str) -> Vec<String> {
    // str::split always yields at least one piece, so the path is never empty.
    path.split(PATH_SEPARATOR).map(str::to_string).collect()
}
