//! Abstract syntax tree for the tylua dialect.
//!
//! The tree is a closed set of enums. Expression nodes and declarations carry
//! an empty type slot that the type checker fills in place.

use std::fmt;

use rowan::TextRange;

use crate::analyze::type_check::TypeId;

/// One compilation unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chunk {
    pub stmts: Vec<Stmt>,
}

/// Statements delimited by a keyword pair (`do ... end`, function bodies, `if` arms).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: TextRange,
}

/// Identifier with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub text: String,
    pub span: TextRange,
}

impl Name {
    pub fn new(text: impl Into<String>, span: TextRange) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Local(LocalStmt),
    Function(FunctionDecl),
    Return(ReturnStmt),
    If(IfStmt),
    Do(Block),
    /// A call evaluated for its side effects.
    Call(Expr),
    Assign(AssignStmt),
}

impl Stmt {
    pub fn span(&self) -> TextRange {
        match self {
            Stmt::Local(s) => s.span,
            Stmt::Function(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::Do(b) => b.span,
            Stmt::Call(e) => e.span,
            Stmt::Assign(s) => s.span,
        }
    }
}

/// `local a: T, b = x, y`
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStmt {
    pub decls: Vec<VarDecl>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Name,
    pub annotation: Option<TypeAnnotation>,
    pub init: Expr,
    /// Bound type, set by the checker.
    pub ty: Option<TypeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Name,
    pub annotation: Option<TypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    pub is_local: bool,
    pub params: Vec<Param>,
    pub return_annotation: Option<TypeAnnotation>,
    pub body: Block,
    /// Function type, set by the checker.
    pub ty: Option<TypeId>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub values: Vec<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    ElseIf(Box<IfStmt>),
    Else(Block),
}

/// `target = value`. The target is a variable, member access or index.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Expr,
    pub value: Expr,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: TextRange,
    /// Inferred type. `None` until the checker visits the node.
    pub ty: Option<TypeId>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: TextRange) -> Self {
        Self {
            kind,
            span,
            ty: None,
        }
    }

    /// Whether the expression may appear on the left of `=`.
    pub fn is_place(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Var(_) | ExprKind::Member { .. } | ExprKind::Index { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
    Var(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        field: Name,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Table(Vec<TableEntry>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableEntry {
    Positional(Expr),
    Keyed { key: Name, value: Expr },
}

impl TableEntry {
    pub fn value(&self) -> &Expr {
        match self {
            TableEntry::Positional(value) | TableEntry::Keyed { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
    Len,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "not",
            UnaryOp::Len => "#",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    And,
    Or,
    Concat,
}

/// Binding power of unary operators, between `* /` and postfix operators.
pub const UNARY_PRECEDENCE: u8 = 7;

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "~=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Concat => "..",
        }
    }

    /// Lua operator precedence, higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Less
            | BinaryOp::LessEq
            | BinaryOp::Greater
            | BinaryOp::GreaterEq => 3,
            BinaryOp::Concat => 4,
            BinaryOp::Add | BinaryOp::Sub => 5,
            BinaryOp::Mul | BinaryOp::Div => 6,
        }
    }

    pub fn is_right_assoc(self) -> bool {
        matches!(self, BinaryOp::Concat)
    }
}

/// User-written type annotation, kept unresolved until checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub kind: AnnotationKind,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationKind {
    Primitive(PrimitiveName),
    /// `(T, U) -> R`
    Function {
        params: Vec<TypeAnnotation>,
        ret: Box<TypeAnnotation>,
    },
    /// `{ name: T, ... }` in source order.
    Table(Vec<(Name, TypeAnnotation)>),
    /// `T[]`
    Array(Box<TypeAnnotation>),
    /// `T | U`
    Union(Vec<TypeAnnotation>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveName {
    Number,
    String,
    Boolean,
    Nil,
}

impl PrimitiveName {
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "boolean" => Some(Self::Boolean),
            "nil" => Some(Self::Nil),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Nil => "nil",
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AnnotationKind::Primitive(p) => f.write_str(p.as_str()),
            AnnotationKind::Function { params, ret } => {
                f.write_str("(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {ret}")
            }
            AnnotationKind::Table(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {ty}", name.text)?;
                }
                f.write_str(" }")
            }
            AnnotationKind::Array(elem) => {
                if matches!(
                    elem.kind,
                    AnnotationKind::Function { .. } | AnnotationKind::Union(_)
                ) {
                    write!(f, "({elem})[]")
                } else {
                    write!(f, "{elem}[]")
                }
            }
            AnnotationKind::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}
