//! Expression parsing implementation
//!
//! This module handles the bottom of the Ity grammar: conditions,
//! arithmetic expressions, and call argument lists.
//!
//! # Grammar
//!
//! ```text
//! ConditionExpression ::= Condition [ LogicalOp Condition ]
//! Condition           ::= Expression ComparisonOp Expression
//! Expression          ::= Term ( AddOp Term )*
//! Term                ::= Factor ( MulOp Factor )*
//! Factor              ::= ID | Number | "(" Expression ")"
//! ```
//!
//! The layering gives `*` and `/` precedence over `+` and `-`; a
//! `Condition` always requires a comparison operator, so a bare
//! expression is not a valid condition.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

fn is_logical_op(text: &str) -> bool {
    matches!(text, "&&" | "||" | "~")
}

fn is_comparison_op(text: &str) -> bool {
    matches!(text, "==" | "!=" | ">" | ">=" | "<" | "<=")
}

fn is_add_op(text: &str) -> bool {
    matches!(text, "+" | "-")
}

fn is_mul_op(text: &str) -> bool {
    matches!(text, "*" | "/")
}

impl Parser {
    /// FuncCall -> ID ( ArgumentList ) ;
    pub(crate) fn func_call(&mut self) -> bool {
        if !self.match_kind(TokenKind::Identifier) {
            return false;
        }
        if !self.match_text("(") {
            self.record_miss();
            return false;
        }
        self.record("FuncCall -> ID ( ArgumentList ) ;");
        self.argument_list();
        if !self.match_text(")") {
            self.record_miss();
            return false;
        }
        if !self.match_text(";") {
            self.record_miss();
            return false;
        }
        true
    }

    /// ArgumentList -> ε | ArgumentSequence
    fn argument_list(&mut self) {
        if self.current().is_some() && !self.check_text(")") {
            self.record("ArgumentList -> ArgumentSequence");
            self.argument_sequence();
        } else {
            self.record("ArgumentList -> ε");
        }
    }

    /// ArgumentSequence -> Expression | ArgumentSequence , Expression
    fn argument_sequence(&mut self) {
        if self.expression() {
            if self.match_text(",") {
                self.record("ArgumentSequence -> ArgumentSequence , Expression");
                self.argument_sequence();
            } else {
                self.record("ArgumentSequence -> Expression");
            }
        } else {
            self.record_miss();
        }
    }

    /// ConditionExpression -> Condition | Condition LogicalOp Condition
    pub(crate) fn condition_expression(&mut self) -> bool {
        if !self.condition() {
            return false;
        }
        if self.current().map_or(false, |t| is_logical_op(&t.text)) {
            self.advance();
            if self.condition() {
                self.record("ConditionExpression -> Condition LogicalOp Condition");
                true
            } else {
                self.record_miss();
                false
            }
        } else {
            self.record("ConditionExpression -> Condition");
            true
        }
    }

    /// Condition -> Expression ComparisonOp Expression
    fn condition(&mut self) -> bool {
        if !self.expression() {
            return false;
        }
        if self.current().map_or(false, |t| is_comparison_op(&t.text)) {
            self.advance();
            if self.expression() {
                self.record("Condition -> Expression ComparisonOp Expression");
                true
            } else {
                self.record_miss();
                false
            }
        } else {
            self.record_miss();
            false
        }
    }

    /// Expression -> Term | Expression AddOp Term
    pub(crate) fn expression(&mut self) -> bool {
        if !self.term() {
            return false;
        }
        if self.current().map_or(false, |t| is_add_op(&t.text)) {
            self.advance();
            if !self.term() {
                self.record_miss();
                return false;
            }
            self.record("Expression -> Expression AddOp Term");
            self.more_terms();
            true
        } else {
            self.record("Expression -> Term");
            true
        }
    }

    /// Consume any further `AddOp Term` pairs after the first.
    fn more_terms(&mut self) {
        while self.current().map_or(false, |t| is_add_op(&t.text)) {
            self.advance();
            if !self.term() {
                self.record_miss();
                break;
            }
            self.record("Expression -> Expression AddOp Term");
        }
    }

    /// Term -> Factor | Term MulOp Factor
    fn term(&mut self) -> bool {
        if !self.factor() {
            return false;
        }
        if self.current().map_or(false, |t| is_mul_op(&t.text)) {
            self.advance();
            if !self.factor() {
                self.record_miss();
                return false;
            }
            self.record("Term -> Term MulOp Factor");
            self.more_factors();
            true
        } else {
            self.record("Term -> Factor");
            true
        }
    }

    /// Consume any further `MulOp Factor` pairs after the first.
    fn more_factors(&mut self) {
        while self.current().map_or(false, |t| is_mul_op(&t.text)) {
            self.advance();
            if !self.factor() {
                self.record_miss();
                break;
            }
            self.record("Term -> Term MulOp Factor");
        }
    }

    /// Factor -> ID | Number | ( Expression )
    fn factor(&mut self) -> bool {
        let kind = match self.current() {
            Some(token) => token.kind,
            None => return false,
        };

        match kind {
            TokenKind::Identifier => {
                self.advance();
                self.record("Factor -> ID");
                true
            }
            TokenKind::Constant => {
                self.advance();
                self.record("Factor -> Number");
                true
            }
            _ => {
                if self.match_text("(") {
                    if !self.expression() {
                        self.record_miss();
                        return false;
                    }
                    if self.match_text(")") {
                        self.record("Factor -> ( Expression )");
                        true
                    } else {
                        self.record_miss();
                        false
                    }
                } else {
                    false
                }
            }
        }
    }
}
