//! Descriptors recovered from exported Go declarations

/// A single function parameter after type elision has been resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    /// Raw Go type as written in source, never empty
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One exported function: an `//export` marker followed by its declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: String,
    /// Comment lines accumulated above the marker, space-joined
    pub comment: String,
    pub params: Vec<Param>,
    /// Raw return type, `"void"` when the declaration returns nothing
    pub return_type: String,
    /// 1-based line of the declaration in the source file
    pub line: usize,
}

/// Return type recorded for declarations without a result
pub const VOID_TYPE: &str = "void";

/// Why a candidate line did not become a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A marked `func` line whose shape could not be recognised
    MalformedDeclaration,
    /// An `//export` marker not followed by a declaration
    MarkerWithoutDeclaration,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MalformedDeclaration => write!(f, "unrecognised declaration"),
            SkipReason::MarkerWithoutDeclaration => write!(f, "export marker without declaration"),
        }
    }
}

/// A skipped candidate line, kept for diagnostics only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Result of one extraction pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Descriptors in declaration order
    pub functions: Vec<FunctionDescriptor>,
    pub skipped: Vec<SkippedLine>,
}
