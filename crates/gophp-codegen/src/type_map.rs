//! Go/cgo type tokens to PHP types
//!
//! Two ordered rule tables share one token vocabulary: native Go types, the
//! `Go*` aliases from cgo's generated header, and `C.*` / plain C spellings.
//! The first matching rule wins, so string and char-pointer rules sit ahead
//! of the generic pointer and array rules.
//!
//! - [`doc_type`] is total: unknown tokens become `mixed`.
//! - [`hint_type`] is partial: unknown and void tokens yield no hint.

/// PHP type names used in generated PHPDoc and signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhpType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Void,
    Mixed,
}

impl PhpType {
    pub fn as_str(self) -> &'static str {
        match self {
            PhpType::String => "string",
            PhpType::Int => "int",
            PhpType::Float => "float",
            PhpType::Bool => "bool",
            PhpType::Array => "array",
            PhpType::Void => "void",
            PhpType::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for PhpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule recognises a (trimmed) type token
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Token equals one of the spellings
    Exact(&'static [&'static str]),
    /// Token contains the fragment
    Contains(&'static str),
    /// Token contains the fragment or equals one of the spellings
    ContainsOrExact(&'static str, &'static [&'static str]),
    /// Pointer to anything but a char type
    NonCharPointer,
}

impl Matcher {
    fn matches(self, token: &str) -> bool {
        match self {
            Matcher::Exact(spellings) => spellings.contains(&token),
            Matcher::Contains(fragment) => token.contains(fragment),
            Matcher::ContainsOrExact(fragment, spellings) => {
                token.contains(fragment) || spellings.contains(&token)
            }
            Matcher::NonCharPointer => token.starts_with('*') && !token.contains("char"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TypeRule {
    matcher: Matcher,
    target: PhpType,
}

const fn rule(matcher: Matcher, target: PhpType) -> TypeRule {
    TypeRule { matcher, target }
}

const CHAR_POINTER: Matcher = Matcher::ContainsOrExact("*C.char", &["char*"]);
const STRINGS: Matcher = Matcher::Exact(&["string", "GoString"]);

const INTEGERS: Matcher = Matcher::Exact(&[
    // Go
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    // C
    "char", "short", "long", "long long", "unsigned char", "unsigned short", "unsigned int",
    "unsigned long", "size_t", "ssize_t",
    // cgo
    "GoInt", "GoInt8", "GoInt16", "GoInt32", "GoInt64", "GoUint", "GoUint8", "GoUint16",
    "GoUint32", "GoUint64", "C.int", "C.long", "C.short", "C.char",
]);

const FLOATS: Matcher = Matcher::Exact(&[
    "float", "float32", "float64", "double", "GoFloat32", "GoFloat64", "C.float", "C.double",
]);

const BOOLS: Matcher = Matcher::Exact(&["bool", "GoBool", "_Bool"]);

const VOID: Matcher = Matcher::Exact(&["void", ""]);

/// Rules for PHPDoc types; unmatched tokens fall back to `mixed`
const DOC_RULES: &[TypeRule] = &[
    rule(CHAR_POINTER, PhpType::String),
    rule(STRINGS, PhpType::String),
    rule(Matcher::Contains("map["), PhpType::Array),
    rule(Matcher::Contains("GoMap"), PhpType::Array),
    rule(Matcher::Contains("GoSlice"), PhpType::Array),
    rule(Matcher::Contains("[]"), PhpType::Array),
    rule(INTEGERS, PhpType::Int),
    rule(FLOATS, PhpType::Float),
    rule(BOOLS, PhpType::Bool),
    rule(VOID, PhpType::Void),
];

/// Rules for signature type hints; void and unmatched tokens get no hint
const HINT_RULES: &[TypeRule] = &[
    rule(CHAR_POINTER, PhpType::String),
    rule(STRINGS, PhpType::String),
    rule(Matcher::Contains("map["), PhpType::Array),
    rule(Matcher::Contains("GoMap"), PhpType::Array),
    rule(Matcher::Contains("GoSlice"), PhpType::Array),
    rule(Matcher::Contains("[]"), PhpType::Array),
    rule(Matcher::NonCharPointer, PhpType::Array),
    rule(INTEGERS, PhpType::Int),
    rule(FLOATS, PhpType::Float),
    rule(BOOLS, PhpType::Bool),
];

fn first_match(rules: &[TypeRule], token: &str) -> Option<PhpType> {
    let token = token.trim();
    rules
        .iter()
        .find(|rule| rule.matcher.matches(token))
        .map(|rule| rule.target)
}

/// PHPDoc type for a Go type token
pub fn doc_type(go_type: &str) -> PhpType {
    first_match(DOC_RULES, go_type).unwrap_or(PhpType::Mixed)
}

/// PHP type hint for a Go type token, `None` when the position stays untyped
pub fn hint_type(go_type: &str) -> Option<PhpType> {
    first_match(HINT_RULES, go_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCABULARY: &[&str] = &[
        "*C.char", "char*", "string", "GoString", "map[string]int", "GoMap", "GoSlice",
        "[]int", "[]string", "int", "int8", "int16", "int32", "int64", "uint", "uint8",
        "uint16", "uint32", "uint64", "char", "short", "long", "long long", "unsigned char",
        "unsigned short", "unsigned int", "unsigned long", "size_t", "ssize_t", "GoInt",
        "GoInt8", "GoInt16", "GoInt32", "GoInt64", "GoUint", "GoUint8", "GoUint16", "GoUint32",
        "GoUint64", "C.int", "C.long", "C.short", "C.char", "float", "float32", "float64",
        "double", "GoFloat32", "GoFloat64", "C.float", "C.double", "bool", "GoBool", "_Bool",
    ];

    #[test]
    fn test_doc_type_is_total_over_vocabulary() {
        for token in VOCABULARY {
            assert_ne!(doc_type(token), PhpType::Mixed, "unmapped: {token}");
        }
        assert_eq!(doc_type("void"), PhpType::Void);
        assert_eq!(doc_type(""), PhpType::Void);
    }

    #[test]
    fn test_hint_type_covers_non_void_vocabulary() {
        for token in VOCABULARY {
            assert!(hint_type(token).is_some(), "no hint: {token}");
        }
        assert_eq!(hint_type("void"), None);
        assert_eq!(hint_type(""), None);
    }

    #[test]
    fn test_char_pointer_is_string_not_array() {
        assert_eq!(doc_type("*C.char"), PhpType::String);
        assert_eq!(hint_type("*C.char"), Some(PhpType::String));
        assert_eq!(hint_type("**C.char"), Some(PhpType::String));
        assert_eq!(hint_type("char*"), Some(PhpType::String));
    }

    #[test]
    fn test_generic_pointer() {
        assert_eq!(hint_type("*int"), Some(PhpType::Array));
        assert_eq!(hint_type("*C.GoInt"), Some(PhpType::Array));
        assert_eq!(doc_type("*int"), PhpType::Mixed);
        // A pointer to a char-ish type that is not `*C.char` stays untyped
        assert_eq!(hint_type("*C.uchar"), None);
    }

    #[test]
    fn test_composite_types() {
        assert_eq!(doc_type("[]float64"), PhpType::Array);
        assert_eq!(hint_type("map[string]string"), Some(PhpType::Array));
        assert_eq!(doc_type("map[string]string"), PhpType::Array);
        assert_eq!(hint_type("[4]byte"), None);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        assert_eq!(doc_type("  int "), PhpType::Int);
        assert_eq!(hint_type(" float64"), Some(PhpType::Float));
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(doc_type("error"), PhpType::Mixed);
        assert_eq!(hint_type("error"), None);
        assert_eq!(doc_type("int, error"), PhpType::Mixed);
        assert_eq!(hint_type("unsafe.Pointer"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PhpType::Array.to_string(), "array");
        assert_eq!(PhpType::Mixed.as_str(), "mixed");
    }
}
