//! Select-list scanning for raw queries.
//!
//! SQLite reports a declared type only for result columns that reference a
//! table column directly. For derived columns (`SUM(renda_mensal)`,
//! `valor_monetario * 12`) this module finds which select-list expressions
//! mention a decimal column by name.
//!
//! # Invariants
//! - Mentions inside `COUNT(...)` and after a top-level `AS` do not count.
//! - When the select list cannot be lined up with the result columns
//!   (`*` items, no top-level `SELECT`), no expression is reported.

use std::collections::HashSet;

const CLAUSE_KEYWORDS: &[&str] = &[
    "from", "where", "group", "having", "order", "limit", "window", "union", "intersect",
    "except",
];

#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// Identifier or keyword, lowercased.
    Word(String),
    Punct(char),
    Other,
}

/// Flags, per result column, whether its expression mentions one of
/// `decimal_columns`. Names in `decimal_columns` are lowercase.
pub(crate) fn decimal_expressions(
    sql: &str,
    decimal_columns: &HashSet<String>,
    column_count: usize,
) -> Vec<bool> {
    let tokens = tokenize(sql);
    match select_items(&tokens) {
        Some(items) if items.len() == column_count => items
            .iter()
            .map(|item| mentions_decimal(item, decimal_columns))
            .collect(),
        _ => vec![false; column_count],
    }
}

fn tokenize(sql: &str) -> Vec<Token> {
    let chars = sql.chars().collect::<Vec<_>>();
    let mut tokens = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        let current = chars[index];
        let next = chars.get(index + 1).copied();
        match current {
            c if c.is_whitespace() => index += 1,
            '-' if next == Some('-') => {
                while index < chars.len() && chars[index] != '\n' {
                    index += 1;
                }
            }
            '/' if next == Some('*') => {
                index += 2;
                while index < chars.len()
                    && !(chars[index] == '*' && chars.get(index + 1) == Some(&'/'))
                {
                    index += 1;
                }
                index += 2;
            }
            '\'' => {
                index = skip_quoted(&chars, index, '\'');
                tokens.push(Token::Other);
            }
            '"' | '`' | '[' => {
                let close = if current == '[' { ']' } else { current };
                let end = skip_quoted(&chars, index, close);
                let inner = chars[index + 1..end.saturating_sub(1).max(index + 1)]
                    .iter()
                    .collect::<String>();
                tokens.push(Token::Word(inner.to_ascii_lowercase()));
                index = end;
            }
            c if c.is_ascii_digit() => {
                while index < chars.len() && (chars[index].is_alphanumeric() || chars[index] == '.')
                {
                    index += 1;
                }
                tokens.push(Token::Other);
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = index;
                while index < chars.len() && is_word_char(chars[index]) {
                    index += 1;
                }
                let word = chars[start..index].iter().collect::<String>();
                tokens.push(Token::Word(word.to_ascii_lowercase()));
            }
            '(' | ')' | ',' | ';' | '.' | '*' => {
                tokens.push(Token::Punct(current));
                index += 1;
            }
            _ => {
                tokens.push(Token::Other);
                index += 1;
            }
        }
    }
    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Returns the index just past the closing quote. Doubled quotes escape.
fn skip_quoted(chars: &[char], start: usize, close: char) -> usize {
    let mut index = start + 1;
    while index < chars.len() {
        if chars[index] == close {
            if close != ']' && chars.get(index + 1) == Some(&close) {
                index += 2;
                continue;
            }
            return index + 1;
        }
        index += 1;
    }
    chars.len()
}

/// Splits the select list of the outermost `SELECT` into items.
fn select_items(tokens: &[Token]) -> Option<Vec<&[Token]>> {
    let mut depth = 0usize;
    let mut start = None;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Punct('(') => depth += 1,
            Token::Punct(')') => depth = depth.saturating_sub(1),
            Token::Word(word) if depth == 0 && word == "select" => {
                start = Some(index + 1);
                break;
            }
            _ => {}
        }
    }
    let mut cursor = start?;
    while let Some(Token::Word(word)) = tokens.get(cursor) {
        if word == "distinct" || word == "all" {
            cursor += 1;
        } else {
            break;
        }
    }

    let mut items = Vec::new();
    let mut item_start = cursor;
    let mut depth = 0usize;
    let mut end = tokens.len();
    for (index, token) in tokens.iter().enumerate().skip(cursor) {
        match token {
            Token::Punct('(') => depth += 1,
            Token::Punct(')') => depth = depth.saturating_sub(1),
            Token::Punct(',') if depth == 0 => {
                items.push(&tokens[item_start..index]);
                item_start = index + 1;
            }
            Token::Punct(';') if depth == 0 => {
                end = index;
                break;
            }
            Token::Word(word) if depth == 0 && CLAUSE_KEYWORDS.contains(&word.as_str()) => {
                end = index;
                break;
            }
            _ => {}
        }
    }
    items.push(&tokens[item_start..end]);

    if items.iter().any(|item| is_star(item)) {
        return None;
    }
    Some(items)
}

fn is_star(item: &[Token]) -> bool {
    match item {
        [Token::Punct('*')] => true,
        [.., Token::Punct('.'), Token::Punct('*')] => true,
        _ => false,
    }
}

fn mentions_decimal(item: &[Token], decimal_columns: &HashSet<String>) -> bool {
    let mut depth = 0usize;
    let mut count_depth: Option<usize> = None;
    let mut index = 0;

    while index < item.len() {
        match &item[index] {
            Token::Punct('(') => depth += 1,
            Token::Punct(')') => {
                if count_depth == Some(depth) {
                    count_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            Token::Word(word) if depth == 0 && word == "as" => return false,
            Token::Word(word)
                if word == "count"
                    && count_depth.is_none()
                    && item.get(index + 1) == Some(&Token::Punct('(')) =>
            {
                count_depth = Some(depth + 1);
            }
            Token::Word(word) if count_depth.is_none() && decimal_columns.contains(word) => {
                return true;
            }
            _ => {}
        }
        index += 1;
    }
    false
}
