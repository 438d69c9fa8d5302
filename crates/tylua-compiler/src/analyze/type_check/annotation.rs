//! Resolution of user-written annotations to types.
//!
//! Only primitive annotations resolve. The composite forms parse fine but are
//! rejected here until the checker can relate them.

use crate::parser::ast::{AnnotationKind, PrimitiveName, TypeAnnotation};

use super::error::{CheckResult, TypeCheckError, TypeErrorKind};
use super::types::{TYPE_BOOLEAN, TYPE_NIL, TYPE_NUMBER, TYPE_STRING, TypeId};

pub fn resolve_annotation(annotation: &TypeAnnotation) -> CheckResult<TypeId> {
    let form = match &annotation.kind {
        AnnotationKind::Primitive(name) => return Ok(primitive_type(*name)),
        AnnotationKind::Function { .. } => "function",
        AnnotationKind::Table(_) => "table",
        AnnotationKind::Array(_) => "array",
        AnnotationKind::Union(_) => "union",
    };

    Err(TypeCheckError::new(
        TypeErrorKind::UnsupportedAnnotation,
        format!("{form} type annotations are not supported yet: `{annotation}`"),
        annotation.span,
    ))
}

pub fn primitive_type(name: PrimitiveName) -> TypeId {
    match name {
        PrimitiveName::Number => TYPE_NUMBER,
        PrimitiveName::String => TYPE_STRING,
        PrimitiveName::Boolean => TYPE_BOOLEAN,
        PrimitiveName::Nil => TYPE_NIL,
    }
}
