//! Statement parsing implementation
//!
//! This module handles parsing of all Ity statement types:
//!
//! - Assignments: `x = a + b;`
//! - Control flow: `TrueFor`/`Else`, `However`, `When`, `Scan(Conditionof x)`
//! - Jump statements: `Respondwith`, `Endthis`
//! - Struct statements: `Srap(expr);`
//! - Function call statements
//! - Blocks: `{ ... }`
//!
//! # Grammar
//!
//! ```text
//! Statement ::= Assignment | TrueForStmt | HoweverStmt | WhenStmt
//!             | RespondwithStmt | EndthisStmt | ScanStmt | SrapStmt
//!             | FuncCallStmt
//! Block     ::= "{" Statements "}"
//! ```
//!
//! `Statements` is the second panic-mode recovery site: a token that cannot
//! start any statement gets one "Not Matched" record and a one-token
//! advance, and the loop exits on `}` without consuming it.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Statements -> Statement Statements | ε
    ///
    /// A statement that starts but fails midway has already recorded its
    /// failure and moved the cursor, so the forced advance only fires for
    /// tokens no statement can start with.
    pub(crate) fn statements(&mut self) {
        while let Some(token) = self.current() {
            if token.text == "}" {
                break;
            }
            let before = self.cursor();
            if self.statement() {
                self.record("Statements -> Statement Statements");
            } else if self.cursor() == before {
                self.record_miss();
                self.advance();
            }
        }
    }

    /// Dispatch on the current token to one of the statement productions.
    /// Returns false without consuming anything when no alternative can
    /// start here.
    pub(crate) fn statement(&mut self) -> bool {
        let (kind, text) = match self.current() {
            Some(token) => (token.kind, token.text.clone()),
            None => return false,
        };

        if kind == TokenKind::Identifier && self.peek_ahead(1).map_or(false, |t| t.text == "=") {
            self.record("Statement -> Assignment");
            return self.assignment();
        }

        match text.as_str() {
            "TrueFor" => {
                self.record("Statement -> TrueForStmt");
                self.truefor_stmt()
            }
            "However" => {
                self.record("Statement -> HoweverStmt");
                self.however_stmt()
            }
            "When" => {
                self.record("Statement -> WhenStmt");
                self.when_stmt()
            }
            "Respondwith" => {
                self.record("Statement -> RespondwithStmt");
                self.respondwith_stmt()
            }
            "Endthis" => {
                self.record("Statement -> EndthisStmt");
                self.endthis_stmt()
            }
            "Scan" | "Conditionof" => {
                self.record("Statement -> ScanStmt");
                self.scan_stmt()
            }
            "Srap" => {
                self.record("Statement -> SrapStmt");
                self.srap_stmt()
            }
            _ => {
                if kind == TokenKind::Identifier
                    && self.peek_ahead(1).map_or(false, |t| t.text == "(")
                {
                    self.record("Statement -> FuncCallStmt");
                    self.func_call_stmt()
                } else {
                    false
                }
            }
        }
    }

    /// Assignment -> ID = Expression ;
    fn assignment(&mut self) -> bool {
        if !self.match_kind(TokenKind::Identifier) {
            return false;
        }
        if !self.match_text("=") {
            self.record_miss();
            return false;
        }
        self.record("Assignment -> ID = Expression ;");
        if !self.expression() {
            self.record_miss();
            return false;
        }
        if !self.match_text(";") {
            self.record_miss();
            return false;
        }
        true
    }

    /// FuncCallStmt -> FuncCall ;
    fn func_call_stmt(&mut self) -> bool {
        if self.func_call() {
            self.record("FuncCallStmt -> FuncCall ;");
            true
        } else {
            false
        }
    }

    /// TrueForStmt -> TrueFor ( ConditionExpression ) Block
    ///              | TrueFor ( ConditionExpression ) Block TrueForElse Block
    fn truefor_stmt(&mut self) -> bool {
        if !self.match_text("TrueFor") {
            return false;
        }
        if !self.match_text("(") {
            self.record_miss();
            return false;
        }
        if !self.condition_expression() {
            self.record_miss();
            return false;
        }
        if !self.match_text(")") {
            self.record_miss();
            return false;
        }
        if !self.block() {
            self.record_miss();
            return false;
        }

        if self.check_text("Else") {
            self.truefor_else();
            if self.block() {
                self.record(
                    "TrueForStmt -> TrueFor ( ConditionExpression ) Block TrueForElse Block",
                );
                true
            } else {
                self.record_miss();
                false
            }
        } else {
            self.record("TrueForStmt -> TrueFor ( ConditionExpression ) Block");
            true
        }
    }

    /// TrueForElse -> Else
    fn truefor_else(&mut self) -> bool {
        if self.match_text("Else") {
            self.record("TrueForElse -> Else");
            true
        } else {
            false
        }
    }

    /// HoweverStmt -> However ( ConditionExpression ) Block
    fn however_stmt(&mut self) -> bool {
        if !self.match_text("However") {
            return false;
        }
        if !self.match_text("(") {
            self.record_miss();
            return false;
        }
        if !self.condition_expression() {
            self.record_miss();
            return false;
        }
        if !self.match_text(")") {
            self.record_miss();
            return false;
        }
        if !self.block() {
            self.record_miss();
            return false;
        }
        self.record("HoweverStmt -> However ( ConditionExpression ) Block");
        true
    }

    /// WhenStmt -> When ( Expression ; Expression ; Expression ) Block
    fn when_stmt(&mut self) -> bool {
        if !self.match_text("When") {
            return false;
        }
        if !self.match_text("(") {
            self.record_miss();
            return false;
        }
        if !self.expression() {
            self.record_miss();
            return false;
        }
        if !self.match_text(";") {
            self.record_miss();
            return false;
        }
        if !self.expression() {
            self.record_miss();
            return false;
        }
        if !self.match_text(";") {
            self.record_miss();
            return false;
        }
        if !self.expression() {
            self.record_miss();
            return false;
        }
        if !self.match_text(")") {
            self.record_miss();
            return false;
        }
        if !self.block() {
            self.record_miss();
            return false;
        }
        self.record("WhenStmt -> When ( Expression ; Expression ; Expression ) Block");
        true
    }

    /// RespondwithStmt -> Respondwith Expression ; | Respondwith ID ;
    ///
    /// A leading identifier commits to the ID form; `Respondwith x + 1;`
    /// therefore fails at `+` rather than reparsing as an expression.
    fn respondwith_stmt(&mut self) -> bool {
        if !self.match_text("Respondwith") {
            return false;
        }
        if self.match_kind(TokenKind::Identifier) {
            if self.match_text(";") {
                self.record("RespondwithStmt -> Respondwith ID ;");
                true
            } else {
                self.record_miss();
                false
            }
        } else {
            if !self.expression() {
                self.record_miss();
                return false;
            }
            if !self.match_text(";") {
                self.record_miss();
                return false;
            }
            self.record("RespondwithStmt -> Respondwith Expression ;");
            true
        }
    }

    /// EndthisStmt -> Endthis ;
    fn endthis_stmt(&mut self) -> bool {
        if !self.match_text("Endthis") {
            return false;
        }
        if self.match_text(";") {
            self.record("EndthisStmt -> Endthis ;");
            true
        } else {
            self.record_miss();
            false
        }
    }

    /// ScanStmt -> Scan(Conditionof ID) ;
    fn scan_stmt(&mut self) -> bool {
        if !self.match_text("Scan") {
            return false;
        }
        if !self.match_text("(") {
            self.record_miss();
            return false;
        }
        if !self.match_text("Conditionof") {
            self.record_miss();
            return false;
        }
        if !self.match_kind(TokenKind::Identifier) {
            self.record_miss();
            return false;
        }
        if !self.match_text(")") {
            self.record_miss();
            return false;
        }
        if !self.match_text(";") {
            self.record_miss();
            return false;
        }
        self.record("ScanStmt -> Scan(Conditionof ID) ;");
        true
    }

    /// SrapStmt -> Srap ( Expression ) ;
    fn srap_stmt(&mut self) -> bool {
        if !self.match_text("Srap") {
            return false;
        }
        if !self.match_text("(") {
            self.record_miss();
            return false;
        }
        if !self.expression() {
            self.record_miss();
            return false;
        }
        if !self.match_text(")") {
            self.record_miss();
            return false;
        }
        if !self.match_text(";") {
            self.record_miss();
            return false;
        }
        self.record("SrapStmt -> Srap ( Expression ) ;");
        true
    }

    /// Block -> { Statements }
    pub(crate) fn block(&mut self) -> bool {
        if !self.match_text("{") {
            self.record_miss();
            return false;
        }
        self.record("Block -> { Statements }");
        self.statements();
        if self.match_text("}") {
            true
        } else {
            self.record_miss();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::{Outcome, Parser};

    fn parse(source: &str) -> Parser {
        let mut lexer = Lexer::new();
        lexer.scan(source);
        let mut parser = Parser::new(lexer.into_tokens());
        parser.parse();
        parser
    }

    fn matched_rules(parser: &Parser) -> Vec<&'static str> {
        parser
            .records()
            .iter()
            .filter_map(|r| match r.outcome {
                Outcome::Matched(rule) => Some(rule),
                Outcome::NotMatched => None,
            })
            .collect()
    }

    fn method_body(statements: &str) -> String {
        format!("@Ity Foo{{Valueless run(){{{}}}}}$", statements)
    }

    #[test]
    fn test_assignment_statement() {
        let parser = parse(&method_body("x = a + 1;"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"Statement -> Assignment"));
        assert!(rules.contains(&"Assignment -> ID = Expression ;"));
        assert!(rules.contains(&"Expression -> Expression AddOp Term"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_truefor_with_else() {
        let parser = parse(&method_body("TrueFor(a == b){x = 1;}Else{x = 2;}"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(
            &"TrueForStmt -> TrueFor ( ConditionExpression ) Block TrueForElse Block"
        ));
        assert!(rules.contains(&"TrueForElse -> Else"));
        assert!(rules.contains(&"Condition -> Expression ComparisonOp Expression"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_truefor_without_else() {
        let parser = parse(&method_body("TrueFor(a < b){Endthis;}"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"TrueForStmt -> TrueFor ( ConditionExpression ) Block"));
        assert!(rules.contains(&"EndthisStmt -> Endthis ;"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_however_loop() {
        let parser = parse(&method_body("However(i < n && j > 0){i = i + 1;}"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"HoweverStmt -> However ( ConditionExpression ) Block"));
        assert!(rules.contains(&"ConditionExpression -> Condition LogicalOp Condition"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_when_loop() {
        // The grammar's When header takes plain expressions, so no
        // comparison operators appear here.
        let parser = parse(&method_body("When(i; n; i + 1){x = i;}"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"WhenStmt -> When ( Expression ; Expression ; Expression ) Block"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_scan_and_srap() {
        let parser = parse(&method_body("Scan(Conditionof x);Srap(y + 1);"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"ScanStmt -> Scan(Conditionof ID) ;"));
        assert!(rules.contains(&"SrapStmt -> Srap ( Expression ) ;"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_respondwith_forms() {
        let parser = parse(&method_body("Respondwith x;Respondwith 1 + 2;"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"RespondwithStmt -> Respondwith ID ;"));
        assert!(rules.contains(&"RespondwithStmt -> Respondwith Expression ;"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_func_call_statement() {
        let parser = parse(&method_body("compute(a, b + 1);"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"Statement -> FuncCallStmt"));
        assert!(rules.contains(&"FuncCall -> ID ( ArgumentList ) ;"));
        assert!(rules.contains(&"ArgumentSequence -> ArgumentSequence , Expression"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_statement_recovery_reaches_closing_brace() {
        // `;;` cannot start statements: two Not Matched records, then the
        // following assignment and the method's closing brace still match.
        let parser = parse(&method_body(";;x = 1;"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"Assignment -> ID = Expression ;"));
        assert!(rules.contains(&"MethodDecl -> FuncDecl { VariableDecls Statements }"));
        assert_eq!(parser.error_count(), 2);
    }

    #[test]
    fn test_declarations_before_statements() {
        let parser = parse(&method_body("Ity i;Cwq c;i = 1;"));
        let rules = matched_rules(&parser);

        assert!(rules.contains(&"VariableDecls -> VariableDecl VariableDecls"));
        assert!(rules.contains(&"Assignment -> ID = Expression ;"));
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_declaration_after_statement_not_matched() {
        // Declarations are only valid before the first statement; a later
        // one falls through statement dispatch and is skipped token by
        // token.
        let parser = parse(&method_body("i = 1;Ity j;"));
        assert!(parser.error_count() > 0);
    }

    #[test]
    fn test_nested_blocks() {
        let parser = parse(&method_body("TrueFor(a == b){However(i < n){i = i + 1;}}"));
        let rules = matched_rules(&parser);

        assert_eq!(
            rules.iter().filter(|r| **r == "Block -> { Statements }").count(),
            2
        );
        assert_eq!(parser.error_count(), 0);
    }
}
