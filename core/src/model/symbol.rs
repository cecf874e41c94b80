//! The symbol-string grammar: every entity the indexer names gets a stable,
//! self-describing string.
//!
//! A symbol is either `local N` (file-scoped) or a `scheme manager
//! package-name package-version descriptor-path` global symbol, where the
//! descriptor path is a sequence of `(name, suffix)` descriptors.
//! [`Symbol::encode`]/[`Symbol::parse`] must be exact inverses: encoding a
//! symbol and parsing the result back always yields an equal value.

use std::fmt;

/// The kind of declaration a descriptor names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Suffix {
    Namespace,
    Type,
    Term,
    /// Carries an optional disambiguator, used when two methods on the same
    /// type share a name after overload resolution.
    Method { disambiguator: String },
    TypeParameter,
    Parameter,
    Meta,
}

/// One `(name, suffix)` step of a symbol's descriptor path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub name: String,
    pub suffix: Suffix,
}

impl Descriptor {
    pub fn namespace(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: Suffix::Namespace,
        }
    }

    pub fn r#type(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: Suffix::Type,
        }
    }

    pub fn term(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: Suffix::Term,
        }
    }

    pub fn method(name: impl Into<String>, disambiguator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: Suffix::Method {
                disambiguator: disambiguator.into(),
            },
        }
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: Suffix::TypeParameter,
        }
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: Suffix::Parameter,
        }
    }

    pub fn meta(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: Suffix::Meta,
        }
    }

    fn encode(&self, out: &mut String) {
        let escaped = escape_name(&self.name);
        match &self.suffix {
            Suffix::Namespace => {
                out.push_str(&escaped);
                out.push('/');
            }
            Suffix::Type => {
                out.push_str(&escaped);
                out.push('#');
            }
            Suffix::Term => {
                out.push_str(&escaped);
                out.push('.');
            }
            Suffix::Method { disambiguator } => {
                out.push_str(&escaped);
                out.push('(');
                out.push_str(disambiguator);
                out.push(')');
                out.push('.');
            }
            Suffix::TypeParameter => {
                out.push('[');
                out.push_str(&escaped);
                out.push(']');
            }
            Suffix::Parameter => {
                out.push('(');
                out.push_str(&escaped);
                out.push(')');
            }
            Suffix::Meta => {
                out.push_str(&escaped);
                out.push(':');
            }
        }
    }
}

/// A symbol identifier: either file-scoped (`local N`) or a global,
/// grammar-encoded tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Local(u32),
    Global {
        scheme: String,
        manager: String,
        package_name: String,
        package_version: String,
        descriptors: Vec<Descriptor>,
    },
}

impl Symbol {
    pub fn local(n: u32) -> Self {
        Symbol::Local(n)
    }

    pub fn global(
        scheme: impl Into<String>,
        manager: impl Into<String>,
        package_name: impl Into<String>,
        package_version: impl Into<String>,
        descriptors: Vec<Descriptor>,
    ) -> Self {
        Symbol::Global {
            scheme: scheme.into(),
            manager: manager.into(),
            package_name: package_name.into(),
            package_version: package_version.into(),
            descriptors,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Symbol::Local(_))
    }

    /// Renders the grammar string: `local N` or
    /// `scheme manager package-name package-version descriptor-path`.
    pub fn encode(&self) -> String {
        match self {
            Symbol::Local(n) => format!("local {n}"),
            Symbol::Global {
                scheme,
                manager,
                package_name,
                package_version,
                descriptors,
            } => {
                let mut out = String::new();
                out.push_str(scheme);
                out.push(' ');
                out.push_str(manager);
                out.push(' ');
                out.push_str(&escape_package_component(package_name));
                out.push(' ');
                out.push_str(&escape_package_component(package_version));
                out.push(' ');
                for d in descriptors {
                    d.encode(&mut out);
                }
                out
            }
        }
    }

    /// Inverse of [`Symbol::encode`].
    ///
    /// # Errors
    ///
    /// Returns a [`SymbolGrammarError`] if `s` does not conform to the
    /// grammar.
    pub fn parse(s: &str) -> Result<Symbol, SymbolGrammarError> {
        if let Some(rest) = s.strip_prefix("local ") {
            let n: u32 = rest
                .parse()
                .map_err(|_| SymbolGrammarError::InvalidLocalId(rest.to_string()))?;
            return Ok(Symbol::Local(n));
        }

        // Parsed with one cursor over the whole string rather than
        // `str::splitn`, since a backtick-escaped component (package name,
        // version, or descriptor name) may itself contain literal spaces.
        let mut chars = CharCursor::new(s);
        let scheme = read_name(&mut chars)?;
        if scheme.is_empty() {
            return Err(SymbolGrammarError::Truncated);
        }
        chars.expect_space()?;
        let manager = read_name(&mut chars)?;
        chars.expect_space()?;
        let package_name = read_package_component(&mut chars)?;
        chars.expect_space()?;
        let package_version = read_package_component(&mut chars)?;
        chars.expect_space()?;
        let descriptor_path = chars.remaining();

        let descriptors = parse_descriptor_path(descriptor_path)?;

        Ok(Symbol::Global {
            scheme,
            manager,
            package_name,
            package_version,
            descriptors,
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolGrammarError {
    Truncated,
    InvalidLocalId(String),
    UnterminatedBacktick,
    UnterminatedBracket(char),
    UnexpectedEnd,
    UnexpectedChar(char),
}

impl fmt::Display for SymbolGrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolGrammarError::Truncated => write!(f, "symbol string is missing a component"),
            SymbolGrammarError::InvalidLocalId(s) => {
                write!(f, "'{s}' is not a valid local symbol id")
            }
            SymbolGrammarError::UnterminatedBacktick => {
                write!(f, "unterminated backtick-escaped descriptor name")
            }
            SymbolGrammarError::UnterminatedBracket(c) => {
                write!(f, "unterminated bracketed descriptor, expected closing '{c}'")
            }
            SymbolGrammarError::UnexpectedEnd => write!(f, "unexpected end of symbol string"),
            SymbolGrammarError::UnexpectedChar(c) => write!(f, "unexpected character '{c}'"),
        }
    }
}

impl std::error::Error for SymbolGrammarError {}

/// A name is identifier-safe if every character is a valid identifier
/// continuation character and the first is a valid start character —
/// reusing [`crate::core::text_utils::is_word_character`]'s notion of
/// "word character" so escaping stays consistent with the rest of the
/// crate; names containing non-identifier bytes get backtick-escaped.
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if unicode_ident::is_xid_start(c) || c == '_' => {}
        _ => return false,
    }
    chars.all(crate::core::text_utils::is_word_character)
}

fn escape_name(name: &str) -> String {
    if is_plain_identifier(name) {
        return name.to_string();
    }
    backtick_escape(name)
}

/// Package names and versions are import paths and semver strings, which
/// routinely contain `/` and `.` — fine for [`read_package_component`],
/// which (unlike [`read_name`]) only stops at an unescaped space. Only a
/// literal space or backtick forces escaping.
fn escape_package_component(name: &str) -> String {
    if name.contains(' ') || name.contains('`') {
        backtick_escape(name)
    } else {
        name.to_string()
    }
}

fn backtick_escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('`');
    for c in name.chars() {
        if c == '`' {
            out.push('`');
            out.push('`');
        } else {
            out.push(c);
        }
    }
    out.push('`');
    out
}

struct CharCursor<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    src: &'a str,
    pos: usize,
}

impl<'a> CharCursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            src,
            pos: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(c) = c {
            self.pos += c.len_utf8();
        }
        c
    }

    fn remaining(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn expect_space(&mut self) -> Result<(), SymbolGrammarError> {
        match self.next() {
            Some(' ') => Ok(()),
            Some(c) => Err(SymbolGrammarError::UnexpectedChar(c)),
            None => Err(SymbolGrammarError::UnexpectedEnd),
        }
    }
}

/// Reads one (possibly backtick-escaped) name, stopping before the next
/// unescaped space or grammar punctuation character.
fn read_name(chars: &mut CharCursor<'_>) -> Result<String, SymbolGrammarError> {
    if chars.peek() == Some('`') {
        read_backtick_escaped(chars)
    } else {
        let mut out = String::new();
        while let Some(c) = chars.peek() {
            if c == ' ' || is_descriptor_punctuation(c) {
                break;
            }
            out.push(c);
            chars.next();
        }
        Ok(out)
    }
}

/// Reads a package name or version, stopping only at an unescaped space.
/// Unlike descriptor names, these components are never split on `/` or
/// `.` — an import path or semver string is the whole field.
fn read_package_component(chars: &mut CharCursor<'_>) -> Result<String, SymbolGrammarError> {
    if chars.peek() == Some('`') {
        read_backtick_escaped(chars)
    } else {
        let mut out = String::new();
        while let Some(c) = chars.peek() {
            if c == ' ' {
                break;
            }
            out.push(c);
            chars.next();
        }
        Ok(out)
    }
}

fn read_backtick_escaped(chars: &mut CharCursor<'_>) -> Result<String, SymbolGrammarError> {
    chars.next();
    let mut out = String::new();
    loop {
        match chars.next() {
            Some('`') => {
                if chars.peek() == Some('`') {
                    chars.next();
                    out.push('`');
                } else {
                    return Ok(out);
                }
            }
            Some(c) => out.push(c),
            None => return Err(SymbolGrammarError::UnterminatedBacktick),
        }
    }
}

fn is_descriptor_punctuation(c: char) -> bool {
    matches!(c, '/' | '#' | '.' | '(' | ')' | '[' | ']' | ':')
}

fn parse_descriptor_path(path: &str) -> Result<Vec<Descriptor>, SymbolGrammarError> {
    let mut chars = CharCursor::new(path);
    let mut descriptors = Vec::new();

    while chars.peek().is_some() {
        match chars.peek() {
            Some('[') => {
                chars.next();
                let name = read_name(&mut chars)?;
                match chars.next() {
                    Some(']') => descriptors.push(Descriptor::type_parameter(name)),
                    _ => return Err(SymbolGrammarError::UnterminatedBracket(']')),
                }
            }
            Some('(') => {
                chars.next();
                let name = read_name(&mut chars)?;
                match chars.next() {
                    Some(')') => descriptors.push(Descriptor::parameter(name)),
                    _ => return Err(SymbolGrammarError::UnterminatedBracket(')')),
                }
            }
            Some(_) => {
                let name = read_name(&mut chars)?;
                match chars.next() {
                    Some('/') => descriptors.push(Descriptor::namespace(name)),
                    Some('#') => descriptors.push(Descriptor::r#type(name)),
                    Some('.') => descriptors.push(Descriptor::term(name)),
                    Some(':') => descriptors.push(Descriptor::meta(name)),
                    Some('(') => {
                        let disambiguator = read_name(&mut chars)?;
                        match chars.next() {
                            Some(')') => {}
                            _ => return Err(SymbolGrammarError::UnterminatedBracket(')')),
                        }
                        match chars.next() {
                            Some('.') => descriptors.push(Descriptor::method(name, disambiguator)),
                            Some(c) => return Err(SymbolGrammarError::UnexpectedChar(c)),
                            None => return Err(SymbolGrammarError::UnexpectedEnd),
                        }
                    }
                    Some(c) => return Err(SymbolGrammarError::UnexpectedChar(c)),
                    None => return Err(SymbolGrammarError::UnexpectedEnd),
                }
            }
            None => break,
        }
    }

    Ok(descriptors)
}
