//! Type annotation grammar.
//!
//! ```text
//! annotation := postfix ('|' postfix)*
//! postfix    := primary ('[' ']')*
//! primary    := number | string | boolean | nil
//!             | '(' [annotation (',' annotation)*] ')' '->' annotation
//!             | '(' annotation ')'
//!             | '{' [name ':' annotation (',' name ':' annotation)* [',']] '}'
//! ```

use crate::parser::Parser;
use crate::parser::ast::{AnnotationKind, Name, PrimitiveName, TypeAnnotation};
use crate::parser::error::{ParseErrorKind, ParseResult};
use crate::parser::syntax_kind::SyntaxKind::*;

impl Parser<'_> {
    pub(crate) fn parse_annotation(&mut self) -> ParseResult<TypeAnnotation> {
        self.enter_recursion()?;
        let result = self.parse_annotation_inner();
        self.exit_recursion();
        result
    }

    fn parse_annotation_inner(&mut self) -> ParseResult<TypeAnnotation> {
        let first = self.parse_annotation_postfix()?;
        if !self.at(Pipe) {
            return Ok(first);
        }

        let mut span = first.span;
        let mut members = vec![first];
        while self.eat(Pipe).is_some() {
            let member = self.parse_annotation_postfix()?;
            span = span.cover(member.span);
            members.push(member);
        }

        Ok(TypeAnnotation {
            kind: AnnotationKind::Union(members),
            span,
        })
    }

    fn parse_annotation_postfix(&mut self) -> ParseResult<TypeAnnotation> {
        let mut annotation = self.parse_annotation_primary()?;
        while self.at(BracketOpen) && self.nth(1) == Some(BracketClose) {
            self.bump();
            let close = self.bump();
            let span = annotation.span.cover(close.span);
            annotation = TypeAnnotation {
                kind: AnnotationKind::Array(Box::new(annotation)),
                span,
            };
        }
        Ok(annotation)
    }

    fn parse_annotation_primary(&mut self) -> ParseResult<TypeAnnotation> {
        match self.current() {
            Some(KwNil) => {
                let token = self.bump();
                Ok(TypeAnnotation {
                    kind: AnnotationKind::Primitive(PrimitiveName::Nil),
                    span: token.span,
                })
            }
            Some(Ident) => {
                let token = self.bump();
                let text = self.text(&token);
                match PrimitiveName::from_keyword(text) {
                    Some(name) => Ok(TypeAnnotation {
                        kind: AnnotationKind::Primitive(name),
                        span: token.span,
                    }),
                    None => Err(self.error(
                        ParseErrorKind::UnexpectedToken,
                        format!(
                            "unknown type `{text}`, expected number, string, boolean or nil"
                        ),
                        token.span,
                    )),
                }
            }
            Some(ParenOpen) => self.parse_function_annotation(),
            Some(BraceOpen) => self.parse_table_annotation(),
            _ => Err(self.unexpected("type")),
        }
    }

    /// `(T, U) -> R`, or a parenthesized annotation when no arrow follows.
    fn parse_function_annotation(&mut self) -> ParseResult<TypeAnnotation> {
        let start = self.bump().span;
        let mut params = Vec::new();
        if !self.at(ParenClose) {
            params.push(self.parse_annotation()?);
            while self.eat(Comma).is_some() {
                params.push(self.parse_annotation()?);
            }
        }
        self.expect(ParenClose, "`)`")?;

        if self.eat(Arrow).is_none() {
            if params.len() == 1 {
                return Ok(params.remove(0));
            }
            return Err(self.unexpected("`->`"));
        }

        let ret = self.parse_annotation()?;
        let span = start.cover(ret.span);
        Ok(TypeAnnotation {
            kind: AnnotationKind::Function {
                params,
                ret: Box::new(ret),
            },
            span,
        })
    }

    fn parse_table_annotation(&mut self) -> ParseResult<TypeAnnotation> {
        let start = self.bump().span;
        let mut fields = Vec::new();
        while !self.at(BraceClose) {
            let token = self.expect(Ident, "field name")?;
            let name = Name::new(self.text(&token), token.span);
            self.expect(Colon, "`:`")?;
            fields.push((name, self.parse_annotation()?));
            if self.eat(Comma).is_none() {
                break;
            }
        }
        let close = self.expect(BraceClose, "`}`")?;
        Ok(TypeAnnotation {
            kind: AnnotationKind::Table(fields),
            span: start.cover(close.span),
        })
    }
}
