//! Declaration parsing implementation
//!
//! This module handles the top half of the Ity grammar:
//!
//! - The `Program` envelope: start symbol, one class declaration, end symbol
//! - Class declarations, plain or `DerivedFrom` a parent class
//! - Class bodies and their members (comments, `Require` commands, function
//!   calls, method declarations, variable declarations)
//! - Method and variable declarations, parameter lists, identifier lists
//!
//! # Grammar
//!
//! ```text
//! Program          ::= Start_Symbols ClassDeclaration End_Symbols
//! ClassDeclaration ::= Type ID ClassBody | Type ID "DerivedFrom" ID ClassBody
//! ClassBody        ::= "{" ClassMembers "}"
//! ClassMember      ::= Comment | RequireCommand | FuncCall
//!                    | MethodDecl | VariableDecl
//! MethodDecl       ::= FuncDecl ";" | FuncDecl "{" VariableDecls Statements "}"
//! VariableDecl     ::= Type IDList ";" | Type IDList "[" ID "]" ";"
//! ```
//!
//! `MethodDecl` and `VariableDecl` share the `Type ID` prefix, so
//! `class_member` saves a savepoint, tries the method path, and on failure
//! rolls back (cursor, records, and error count together) before trying
//! the variable path.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;
use crate::parser::tree::ParseTreeNode;

/// Words the `Type` production accepts: the eight primitive-type keywords,
/// plus the class keyword `Type` itself (which is what makes a class
/// header like `@ Type Foo { ... } $` well-formed).
pub(crate) fn is_type_word(text: &str) -> bool {
    matches!(
        text,
        "Ity" | "Sity" | "Cwq" | "CwqSequence" | "Ifity" | "Sifity" | "Valueless" | "Logical"
            | "Type"
    )
}

impl Parser {
    /// Program -> Start_Symbols ClassDeclaration End_Symbols
    pub(crate) fn program(&mut self) -> Option<ParseTreeNode> {
        let start = match self.start_symbols() {
            Some(node) => node,
            None => {
                self.record_miss();
                return None;
            }
        };
        self.record("Program -> Start_Symbols ClassDeclaration End_Symbols");

        let mut node = ParseTreeNode::new("Program");
        node.add_node(start);
        if let Some(class_decl) = self.class_declaration() {
            node.add_node(class_decl);
        }
        if let Some(end) = self.end_symbols() {
            node.add_node(end);
        }
        Some(node)
    }

    /// Start_Symbols -> @ | ^
    fn start_symbols(&mut self) -> Option<ParseTreeNode> {
        for symbol in ["@", "^"] {
            if self.match_text(symbol) {
                self.record("Start_Symbols -> @ | ^");
                return Some(ParseTreeNode::leaf("Start_Symbols", symbol));
            }
        }
        None
    }

    /// End_Symbols -> $ | #
    fn end_symbols(&mut self) -> Option<ParseTreeNode> {
        for symbol in ["$", "#"] {
            if self.match_text(symbol) {
                self.record("End_Symbols -> $ | #");
                return Some(ParseTreeNode::leaf("End_Symbols", symbol));
            }
        }
        self.record_miss();
        None
    }

    /// ClassDeclaration -> Type ID ClassBody | Type ID DerivedFrom ID ClassBody
    fn class_declaration(&mut self) -> Option<ParseTreeNode> {
        let type_text = match self.match_type() {
            Some(text) => text,
            None => {
                self.record_miss();
                return None;
            }
        };

        let mut node = ParseTreeNode::new("ClassDeclaration");
        node.add_node(ParseTreeNode::leaf("Type", type_text));

        if !self.match_kind(TokenKind::Identifier) {
            self.record_miss();
            return None;
        }
        node.add_node(ParseTreeNode::leaf("ID", self.previous_text()));

        if self.match_text("DerivedFrom") {
            self.record("ClassDeclaration -> Type ID DerivedFrom ClassBody");
            if self.match_kind(TokenKind::Identifier) {
                node.add_node(ParseTreeNode::leaf("ID", self.previous_text()));
            }
            if let Some(body) = self.class_body() {
                node.add_node(body);
            }
        } else {
            self.record("ClassDeclaration -> Type ID ClassBody");
            if let Some(body) = self.class_body() {
                node.add_node(body);
            }
        }
        Some(node)
    }

    /// ClassBody -> { ClassMembers }
    fn class_body(&mut self) -> Option<ParseTreeNode> {
        if !self.match_text("{") {
            self.record_miss();
            return None;
        }
        self.record("ClassBody -> { ClassMembers }");

        let mut node = ParseTreeNode::new("ClassBody");
        if let Some(members) = self.class_members() {
            node.add_node(members);
        }
        if !self.match_text("}") {
            self.record_miss();
        }
        Some(node)
    }

    /// ClassMembers -> ClassMember ClassMembers | ε
    ///
    /// Repetition site with panic-mode recovery: a token that cannot start
    /// any member gets one "Not Matched" record and the cursor moves one
    /// token forward, so the enclosing `}` stays reachable.  The loop exits
    /// on `}` without consuming it.
    fn class_members(&mut self) -> Option<ParseTreeNode> {
        let mut node = ParseTreeNode::new("ClassMembers");

        while let Some(token) = self.current() {
            if token.text == "}" {
                break;
            }
            let before = self.cursor();
            match self.class_member() {
                Some(member) => {
                    self.record("ClassMembers -> ClassMember ClassMembers");
                    node.add_node(member);
                }
                None => {
                    if self.cursor() == before {
                        self.record_miss();
                        self.advance();
                    }
                }
            }
        }

        if node.children.is_empty() {
            None
        } else {
            Some(node)
        }
    }

    /// ClassMember -> Comment | RequireCommand | FuncCall | MethodDecl
    ///              | VariableDecl
    fn class_member(&mut self) -> Option<ParseTreeNode> {
        let (kind, text, comment) = match self.current() {
            Some(token) => (token.kind, token.text.clone(), token.is_comment()),
            None => return None,
        };

        if comment {
            self.record("ClassMember -> Comment");
            self.comment();
            return Some(ParseTreeNode::new("Comment"));
        }

        if kind == TokenKind::Inclusion {
            self.record("ClassMember -> RequireCommand");
            self.require_command();
            return Some(ParseTreeNode::new("RequireCommand"));
        }

        if kind == TokenKind::Identifier && self.peek_ahead(1).map_or(false, |t| t.text == "(") {
            self.record("ClassMember -> FuncCall");
            self.func_call();
            return Some(ParseTreeNode::new("FuncCall"));
        }

        if is_type_word(&text) {
            // MethodDecl and VariableDecl both start with `Type ID`; try
            // the longer method path first, rolling the attempt back
            // transactionally before falling back to the variable path.
            let savepoint = self.savepoint();
            if self.method_decl() {
                self.record("ClassMember -> MethodDecl");
                return Some(ParseTreeNode::new("MethodDecl"));
            }
            self.rollback(savepoint);
            if self.variable_decl() {
                self.record("ClassMember -> VariableDecl");
                return Some(ParseTreeNode::new("VariableDecl"));
            }
            self.rollback(savepoint);
            return None;
        }

        None
    }

    /// Comment -> /< STR >/ | /* STR
    fn comment(&mut self) -> bool {
        if self.current().map_or(false, |t| t.is_comment()) {
            self.advance();
            self.record("Comment -> /< STR >/ | /* STR");
            true
        } else {
            false
        }
    }

    /// RequireCommand -> Require ( F_name.txt ) ;
    ///
    /// The lexer folds the whole directive into one Inclusion token, so a
    /// single token match suffices here.
    fn require_command(&mut self) -> bool {
        if self.match_kind(TokenKind::Inclusion) {
            self.record("RequireCommand -> Require ( F_name.txt ) ;");
            true
        } else {
            false
        }
    }

    /// MethodDecl -> FuncDecl ; | FuncDecl { VariableDecls Statements }
    fn method_decl(&mut self) -> bool {
        if !self.func_decl() {
            return false;
        }
        if self.match_text(";") {
            self.record("MethodDecl -> FuncDecl ;");
            return true;
        }
        if self.match_text("{") {
            self.record("MethodDecl -> FuncDecl { VariableDecls Statements }");
            self.variable_decls();
            self.statements();
            if self.match_text("}") {
                return true;
            }
            self.record_miss();
            return false;
        }
        false
    }

    /// FuncDecl -> Type ID ( ParameterList )
    fn func_decl(&mut self) -> bool {
        if self.match_type().is_none() {
            return false;
        }
        if !self.match_kind(TokenKind::Identifier) {
            self.record_miss();
            return false;
        }
        if !self.match_text("(") {
            self.record_miss();
            return false;
        }
        self.record("FuncDecl -> Type ID ( ParameterList )");
        self.parameter_list();
        if !self.match_text(")") {
            self.record_miss();
            return false;
        }
        true
    }

    /// ParameterList -> ε | Parameters
    fn parameter_list(&mut self) {
        if self.current().is_some() && !self.check_text(")") {
            self.record("ParameterList -> Parameters");
            self.parameters();
        } else {
            self.record("ParameterList -> ε");
        }
    }

    /// Parameters -> Parameter | Parameters , Parameter
    fn parameters(&mut self) {
        if self.parameter() {
            if self.match_text(",") {
                self.record("Parameters -> Parameters , Parameter");
                self.parameters();
            } else {
                self.record("Parameters -> Parameter");
            }
        } else {
            self.record_miss();
        }
    }

    /// Parameter -> Type ID
    fn parameter(&mut self) -> bool {
        if self.match_type().is_none() {
            return false;
        }
        if self.match_kind(TokenKind::Identifier) {
            self.record("Parameter -> Type ID");
            true
        } else {
            self.record_miss();
            false
        }
    }

    /// VariableDecl -> Type IDList ; | Type IDList [ ID ] ;
    pub(crate) fn variable_decl(&mut self) -> bool {
        if self.match_type().is_none() {
            return false;
        }
        if !self.id_list() {
            self.record_miss();
            return false;
        }

        if self.match_text("[") {
            if !self.match_kind(TokenKind::Identifier) {
                self.record_miss();
                return false;
            }
            if !self.match_text("]") {
                self.record_miss();
                return false;
            }
            if !self.match_text(";") {
                self.record_miss();
                return false;
            }
            self.record("VariableDecl -> Type IDList [ ID ] ;");
            true
        } else if self.match_text(";") {
            self.record("VariableDecl -> Type IDList ;");
            true
        } else {
            self.record_miss();
            false
        }
    }

    /// VariableDecls -> VariableDecl VariableDecls | ε
    ///
    /// Used in method bodies, where declarations come strictly before
    /// statements.  A declaration that fails has already consumed its
    /// leading type keyword and recorded its failure, so the loop just
    /// stops.
    pub(crate) fn variable_decls(&mut self) {
        while self.current().map_or(false, |t| is_type_word(&t.text)) {
            if self.variable_decl() {
                self.record("VariableDecls -> VariableDecl VariableDecls");
            } else {
                break;
            }
        }
    }

    /// IDList -> ID | IDList , ID
    fn id_list(&mut self) -> bool {
        if !self.match_kind(TokenKind::Identifier) {
            return false;
        }
        if self.match_text(",") {
            self.record("IDList -> IDList , ID");
            self.id_list()
        } else {
            self.record("IDList -> ID");
            true
        }
    }

    /// Type -> Ity | Sity | Cwq | CwqSequence | Ifity | Sifity | Valueless
    ///       | Logical
    ///
    /// Returns the matched type keyword's text for parse-tree labeling.
    pub(crate) fn match_type(&mut self) -> Option<String> {
        let text = match self.current() {
            Some(token) if is_type_word(&token.text) => token.text.clone(),
            _ => return None,
        };
        self.advance();
        self.record("Type -> Ity | Sity | Cwq | CwqSequence | Ifity | Sifity | Valueless | Logical");
        Some(text)
    }
}
