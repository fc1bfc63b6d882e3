//! [`TypeExpr`] and the parser for textual type hints.
//!
//! Hints come in two flavours: bracketed annotations such as
//! `Dict[str, List[str]]` that servers embed in argument descriptions, and
//! coarse JSON-schema type tokens such as `array`. Both parse into the same
//! recursive [`TypeExpr`]. Parsing never fails: anything unrecognized
//! degrades to [`ScalarKind::Any`] at the deepest point it stops matching.
//! Generics nested deeper than [`MAX_NESTING`] also stop matching there.

use std::fmt;

/// Deepest generic nesting the parser follows before degrading to `Any`.
pub const MAX_NESTING: usize = 64;

/// Leaf kinds of a [`TypeExpr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
    /// Universal fallback for anything that could not be recovered.
    Any,
}

impl ScalarKind {
    /// Look up a bare annotation keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "str" | "EmailStr" => Some(Self::String),
            "int" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Boolean),
            "None" => Some(Self::Null),
            "Any" => Some(Self::Any),
            _ => None,
        }
    }

    /// Keyword used when rendering back to annotation form.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Boolean => "bool",
            Self::Null => "None",
            Self::Any => "Any",
        }
    }

    /// Human-readable kind name, used in example placeholders.
    pub fn label(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Any => "any",
        }
    }
}

/// Recursive description of a value's shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Scalar(ScalarKind),
    Sequence(Box<TypeExpr>),
    Mapping(Box<TypeExpr>, Box<TypeExpr>),
}

impl TypeExpr {
    pub const ANY: Self = Self::Scalar(ScalarKind::Any);
    pub const STRING: Self = Self::Scalar(ScalarKind::String);

    pub fn list(element: TypeExpr) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub fn dict(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Mapping(Box::new(key), Box::new(value))
    }

    /// Parse a type hint, degrading to `Any` when it is not recognized.
    pub fn parse(hint: &str) -> Self {
        Self::parse_hint(hint).unwrap_or(Self::ANY)
    }

    /// Parse a type hint, returning `None` when its top-level form is unknown.
    ///
    /// Unknown pieces nested inside a recognized generic still degrade to
    /// `Any` (or `str` for a mapping key); only the outermost form decides
    /// whether the hint counts as recognized.
    pub fn parse_hint(hint: &str) -> Option<Self> {
        Self::parse_nested(hint, 0)
    }

    fn parse_nested(hint: &str, depth: usize) -> Option<Self> {
        let hint = hint.trim();
        if hint.is_empty() || depth > MAX_NESTING {
            return None;
        }

        let alternatives = split_top_level(hint, '|');
        if alternatives.len() > 1 {
            return alternatives
                .into_iter()
                .find_map(|alternative| Self::parse_nested(alternative, depth));
        }

        let inner_type = |text: &str| Self::parse_nested(text, depth + 1);

        if let Some(inner) = generic_args(hint, &["List", "list"]) {
            return Some(Self::list(inner_type(inner).unwrap_or(Self::ANY)));
        }

        if let Some(inner) = generic_args(hint, &["Dict", "dict"]) {
            let parts = split_top_level(inner, ',');
            let key = parts
                .first()
                .and_then(|key| inner_type(*key))
                .unwrap_or(Self::STRING);
            let value = match parts.as_slice() {
                [_, value] => inner_type(*value).unwrap_or(Self::ANY),
                _ => Self::ANY,
            };
            return Some(Self::dict(key, value));
        }

        ScalarKind::from_keyword(hint).map(Self::Scalar)
    }

    /// Map a coarse JSON-schema type token.
    pub fn from_schema_type(token: &str) -> Self {
        match token.trim() {
            "string" => Self::STRING,
            "integer" => Self::Scalar(ScalarKind::Integer),
            "number" => Self::Scalar(ScalarKind::Float),
            "boolean" => Self::Scalar(ScalarKind::Boolean),
            "null" => Self::Scalar(ScalarKind::Null),
            "array" => Self::list(Self::ANY),
            "object" => Self::dict(Self::STRING, Self::ANY),
            _ => Self::ANY,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => f.write_str(kind.keyword()),
            Self::Sequence(element) => write!(f, "List[{element}]"),
            Self::Mapping(key, value) => write!(f, "Dict[{key}, {value}]"),
        }
    }
}

/// Return the text between `Head[` and the matching final `]`.
///
/// The closing bracket must balance the opening one, so `List[a] x [b]`
/// is rejected rather than read as a list of `a] x [b`.
fn generic_args<'a>(hint: &'a str, heads: &[&str]) -> Option<&'a str> {
    let rest = heads.iter().find_map(|head| hint.strip_prefix(head))?;
    let inner = rest.trim_start().strip_prefix('[')?.strip_suffix(']')?;

    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

/// Split on `sep` wherever it is not nested inside brackets or parentheses.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            c if c == sep && depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts
}
