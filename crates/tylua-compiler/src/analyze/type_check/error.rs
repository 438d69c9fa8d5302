use rowan::TextRange;

/// Cause category of a [`TypeCheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeErrorKind {
    /// Call with the wrong number of arguments.
    ArityMismatch,
    /// Operand of the wrong primitive class for an operator.
    OperandMismatch,
    /// Initializer not assignable to the declared annotation.
    TypeMismatch,
    ArgumentMismatch,
    ReturnMismatch,
    MissingField,
    /// Member access or indexing on a value that supports neither.
    NotIndexable,
    NotCallable,
    MixedTable,
    UnsupportedAnnotation,
}

impl TypeErrorKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::ArityMismatch => "arity mismatch",
            Self::OperandMismatch => "invalid operand",
            Self::TypeMismatch => "type mismatch",
            Self::ArgumentMismatch => "argument type mismatch",
            Self::ReturnMismatch => "return type mismatch",
            Self::MissingField => "no such field",
            Self::NotIndexable => "not indexable",
            Self::NotCallable => "not callable",
            Self::MixedTable => "mixed table literal",
            Self::UnsupportedAnnotation => "unsupported annotation",
        }
    }
}

/// The first rule violation found in a chunk. Checking stops there.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TypeCheckError {
    pub kind: TypeErrorKind,
    pub message: String,
    pub span: TextRange,
}

impl TypeCheckError {
    pub fn new(kind: TypeErrorKind, message: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}

pub type CheckResult<T> = std::result::Result<T, TypeCheckError>;
