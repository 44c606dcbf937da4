use regex::Regex;
use serde::{Deserialize, Serialize};

/// Access level of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// No access modifier.
    Package,
}

impl Visibility {
    fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("public") => Self::Public,
            Some("protected") => Self::Protected,
            Some("private") => Self::Private,
            _ => Self::Package,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Package => "package",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Method,
    Constructor,
    /// `class`, `interface`, `enum`, `record` or `@interface`.
    Type,
}

impl DeclarationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Type => "type",
        }
    }
}

/// A declaration recognized on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub visibility: Visibility,
    pub kind: DeclarationKind,
}

/// Words that can sit where a return type or member name would, but only
/// ever start statements.
const STATEMENT_KEYWORDS: &[&str] = &[
    "if",
    "for",
    "while",
    "switch",
    "catch",
    "new",
    "return",
    "throw",
    "else",
    "case",
    "do",
    "try",
    "synchronized",
    "assert",
    "yield",
    "record",
];

/// Recognizes member and type declaration shapes line by line.
///
/// This is a heuristic over single lines, not a parser: it looks for
/// `[visibility] {modifier} [<generics>] [type] name (` and rejects lines that
/// start with a statement keyword.
pub struct DeclarationMatcher {
    member: Regex,
    type_decl: Regex,
}

impl Default for DeclarationMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            member: Regex::new(
                r"^(?:(public|protected|private)\s+)?(?:(?:static|final|abstract|synchronized|native|default|strictfp)\s+)*(?:<[^()]*?>\s*)?(?:([\w$][\w$.]*(?:<[^()]*?>)?(?:\s*\[\s*\])*)\s+)?([A-Za-z_$][\w$]*)\s*\(",
            )
            .expect("Invalid regex"),
            type_decl: Regex::new(
                r"^(?:(public|protected|private)\s+)?(?:(?:static|final|abstract|sealed|non-sealed|strictfp)\s+)*(?:class|interface|enum|record|@interface)\s+([A-Za-z_$][\w$]*)",
            )
            .expect("Invalid regex"),
        }
    }

    /// Either a type or a member declaration on this code line.
    #[must_use]
    pub fn declaration(&self, code: &str) -> Option<Declaration> {
        self.type_declaration(code)
            .or_else(|| self.member_declaration(code))
    }

    /// A method or constructor declaration shape. Does not check for a body.
    #[must_use]
    pub fn member_declaration(&self, code: &str) -> Option<Declaration> {
        let code = strip_annotations(code.trim());
        let caps = self.member.captures(code)?;

        let visibility_keyword = caps.get(1).map(|m| m.as_str());
        let return_type = caps.get(2).map(|m| m.as_str());
        let name = caps.get(3)?.as_str();

        let first_word = code
            .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
            .next()
            .unwrap_or_default();
        if is_statement_keyword(first_word)
            || is_statement_keyword(name)
            || return_type.is_some_and(is_statement_keyword)
        {
            return None;
        }

        let kind = match return_type {
            Some(_) => DeclarationKind::Method,
            // A bare `Name(` is only a declaration when an access modifier says so.
            None if visibility_keyword.is_some() => DeclarationKind::Constructor,
            None => return None,
        };

        Some(Declaration {
            name: name.to_string(),
            visibility: Visibility::from_keyword(visibility_keyword),
            kind,
        })
    }

    #[must_use]
    pub fn type_declaration(&self, code: &str) -> Option<Declaration> {
        let code = strip_annotations(code.trim());
        let caps = self.type_decl.captures(code)?;
        Some(Declaration {
            name: caps.get(2)?.as_str().to_string(),
            visibility: Visibility::from_keyword(caps.get(1).map(|m| m.as_str())),
            kind: DeclarationKind::Type,
        })
    }
}

/// `code` without its leading `@Name` and `@Name(...)` annotations.
fn strip_annotations(code: &str) -> &str {
    if code.starts_with("@interface") {
        return code;
    }
    let mut rest = code;
    while let Some(after_at) = rest.strip_prefix('@') {
        let name_len = after_at
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.')))
            .unwrap_or(after_at.len());
        if name_len == 0 {
            break;
        }
        let mut tail = after_at[name_len..].trim_start();
        if tail.starts_with('(') {
            let Some(close) = closing_paren(tail) else {
                break;
            };
            tail = &tail[close + 1..];
        }
        rest = tail.trim_start();
    }
    rest
}

/// Byte offset of the `)` matching the `(` that `s` starts with. Parens inside
/// string and char literals are skipped.
fn closing_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_statement_keyword(word: &str) -> bool {
    STATEMENT_KEYWORDS.contains(&word)
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
