//! Lexer (tokenizer) for Ity source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser.  `Require(file);` directives are resolved here: the included
//! file's tokens are spliced into the stream at the point of the directive,
//! before scanning of the including file resumes.
//!
//! Lexical errors never abort the scan.  Each one becomes an error token
//! carrying a reason, the error counter is bumped, and scanning resumes
//! right after the offending span.

use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;

/// Classification of a scanned token.
///
/// The `Display` impl produces the type names used in the token report
/// (`Token Type: Integer`, `Token Type: Start Symbol`, ...).  Both comment
/// variants display as `Comment`; the split is kept so the two comment
/// syntaxes stay distinguishable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Class,       // Type
    Inheritance, // DerivedFrom
    Condition,   // TrueFor, Else
    Integer,     // Ity
    SInteger,    // Sity
    Character,   // Cwq
    Str,         // CwqSequence
    Float,       // Ifity
    SFloat,      // Sifity
    Void,        // Valueless
    Boolean,     // Logical
    Break,       // Endthis
    Loop,        // However, When
    Return,      // Respondwith
    Struct,      // Srap
    Switch,      // Scan, Conditionof
    Inclusion,   // Require(file)

    // Symbols
    StartSymbol,  // @ ^
    EndSymbol,    // $ #
    Braces,       // { } [ ] ( )
    Delimiter,    // ; ,
    AccessOp,     // ->
    LogicOp,      // && || ~
    RelationalOp, // == != < <= > >=
    AssignmentOp, // =
    ArithmeticOp, // + - * /

    // Literals
    StringLiteral,
    CharLiteral,
    LineComment,  // /* to end of line
    BlockComment, // /< ... >/
    Constant,
    Identifier,

    // Errors (the payload is the human-readable reason)
    Error(&'static str),
    InvalidType,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Class => "Class",
            TokenKind::Inheritance => "Inheritance",
            TokenKind::Condition => "Condition",
            TokenKind::Integer => "Integer",
            TokenKind::SInteger => "SInteger",
            TokenKind::Character => "Character",
            TokenKind::Str => "String",
            TokenKind::Float => "Float",
            TokenKind::SFloat => "SFloat",
            TokenKind::Void => "Void",
            TokenKind::Boolean => "Boolean",
            TokenKind::Break => "Break",
            TokenKind::Loop => "Loop",
            TokenKind::Return => "Return",
            TokenKind::Struct => "Struct",
            TokenKind::Switch => "Switch",
            TokenKind::Inclusion => "Inclusion",
            TokenKind::StartSymbol => "Start Symbol",
            TokenKind::EndSymbol => "End Symbol",
            TokenKind::Braces => "Braces",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::AccessOp => "Access Operator",
            TokenKind::LogicOp => "Logic operators",
            TokenKind::RelationalOp => "relational operators",
            TokenKind::AssignmentOp => "Assignment operator",
            TokenKind::ArithmeticOp => "Arithmetic Operation",
            TokenKind::StringLiteral => "String Literal",
            TokenKind::CharLiteral => "Character Literal",
            TokenKind::LineComment | TokenKind::BlockComment => "Comment",
            TokenKind::Constant => "Constant",
            TokenKind::Identifier => "Identifier",
            TokenKind::Error(_) => "Error",
            TokenKind::InvalidType => "InvalidType",
        };
        f.write_str(name)
    }
}

/// One scanned token: classification, verbatim source text, and the line it
/// started on.  Immutable once produced; tokens are emitted strictly in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    /// True for error and invalid-type tokens.
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_) | TokenKind::InvalidType)
    }

    /// True for both comment syntaxes.
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// The reason attached to an error token, if this is one.
    pub fn error_reason(&self) -> Option<&'static str> {
        match self.kind {
            TokenKind::Error(reason) => Some(reason),
            TokenKind::InvalidType => Some("Invalid type"),
            _ => None,
        }
    }
}

/// Keyword table.  Lookup is exact-case: `trueFor` or `ity` fall through
/// and become identifiers.
fn keyword_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "Type" => TokenKind::Class,
        "DerivedFrom" => TokenKind::Inheritance,
        "TrueFor" | "Else" => TokenKind::Condition,
        "Ity" => TokenKind::Integer,
        "Sity" => TokenKind::SInteger,
        "Cwq" => TokenKind::Character,
        "CwqSequence" => TokenKind::Str,
        "Ifity" => TokenKind::Float,
        "Sifity" => TokenKind::SFloat,
        "Valueless" => TokenKind::Void,
        "Logical" => TokenKind::Boolean,
        "Endthis" => TokenKind::Break,
        "However" | "When" => TokenKind::Loop,
        "Respondwith" => TokenKind::Return,
        "Srap" => TokenKind::Struct,
        "Scan" | "Conditionof" => TokenKind::Switch,
        "Require" => TokenKind::Inclusion,
        _ => return None,
    };
    Some(kind)
}

/// Two-character symbol table, consulted before the single-character one.
fn two_char_symbol(pair: &str) -> Option<TokenKind> {
    let kind = match pair {
        "&&" | "||" => TokenKind::LogicOp,
        "==" | "!=" | "<=" | ">=" => TokenKind::RelationalOp,
        "->" => TokenKind::AccessOp,
        _ => return None,
    };
    Some(kind)
}

fn single_char_symbol(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '@' | '^' => TokenKind::StartSymbol,
        '$' | '#' => TokenKind::EndSymbol,
        '+' | '-' | '*' | '/' => TokenKind::ArithmeticOp,
        '~' => TokenKind::LogicOp,
        '<' | '>' => TokenKind::RelationalOp,
        '=' => TokenKind::AssignmentOp,
        '{' | '}' | '[' | ']' | '(' | ')' => TokenKind::Braces,
        ';' | ',' => TokenKind::Delimiter,
        _ => return None,
    };
    Some(kind)
}

/// Lexer for Ity source code.
///
/// One instance covers one top-level scan, including every file pulled in
/// through `Require`.  The visited set lives on the instance, so independent
/// scans never share inclusion state.
pub struct Lexer {
    tokens: Vec<Token>,
    line: usize,
    errors: usize,
    included: FxHashSet<String>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line: 1,
            errors: 0,
            included: FxHashSet::default(),
        }
    }

    /// Read and scan a top-level source file.
    ///
    /// Only the top-level file reports I/O failure to the caller; missing
    /// `Require` targets are warnings handled inside the scan.
    pub fn scan_file(&mut self, path: &str) -> io::Result<()> {
        let source = fs::read_to_string(path)?;
        self.scan(&source);
        Ok(())
    }

    /// Scan a source string, appending to the token stream.
    ///
    /// Called recursively for included files; `line` carries across the
    /// call and the caller restores it afterwards.
    pub fn scan(&mut self, source: &str) {
        let chars: Vec<char> = source.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if ch == '\n' {
                self.line += 1;
                i += 1;
                continue;
            }
            if ch == ' ' || ch == '\t' || ch == '\r' {
                i += 1;
                continue;
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                i = self.word(&chars, i);
                continue;
            }

            if ch.is_ascii_digit() {
                i = self.number(&chars, i);
                continue;
            }

            if ch == '"' {
                i = self.string_literal(&chars, i);
                continue;
            }

            if ch == '\'' {
                i = self.char_literal(&chars, i);
                continue;
            }

            // Comments open with '/*' (to end of line) or '/<' (to '>/');
            // checked before '/' falls through to the arithmetic operators.
            if ch == '/' && i + 1 < chars.len() && chars[i + 1] == '*' {
                i = self.line_comment(&chars, i);
                continue;
            }
            if ch == '/' && i + 1 < chars.len() && chars[i + 1] == '<' {
                i = self.block_comment(&chars, i);
                continue;
            }

            // Two-character operators before single-character fallbacks, so
            // '<=' never splits into '<' '='.
            if i + 1 < chars.len() {
                let pair: String = chars[i..i + 2].iter().collect();
                if let Some(kind) = two_char_symbol(&pair) {
                    self.push(pair, kind);
                    i += 2;
                    continue;
                }
            }
            if let Some(kind) = single_char_symbol(ch) {
                self.push(ch.to_string(), kind);
                i += 1;
                continue;
            }

            self.push_error(ch.to_string(), "Invalid token");
            i += 1;
        }
    }

    /// Scan an identifier or keyword starting at `start`.
    ///
    /// Keyword lookup is exact-case, with two documented ad-hoc rejections:
    /// the C-style type names `int`/`float`/`char` become invalid-type
    /// error tokens, and the bare word `in` becomes an error token.  Any
    /// other near-miss of a keyword is an ordinary identifier.
    fn word(&mut self, chars: &[char], start: usize) -> usize {
        let mut i = start;
        while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
            i += 1;
        }
        let word: String = chars[start..i].iter().collect();

        if word == "Require" {
            return self.require_directive(chars, i);
        }

        if let Some(kind) = keyword_kind(&word) {
            self.push(word, kind);
        } else {
            match word.as_str() {
                "int" | "float" | "char" => self.push_invalid_type(word),
                "in" => self.push_error(word, "Invalid identifier"),
                _ => self.push(word, TokenKind::Identifier),
            }
        }
        i
    }

    /// Scan a numeric constant: a digit run with at most one decimal point.
    /// A second '.' ends the literal; the dot and whatever follows belong
    /// to the next token.
    fn number(&mut self, chars: &[char], start: usize) -> usize {
        let mut i = start;
        let mut has_decimal = false;

        while i < chars.len() {
            if chars[i] == '.' && !has_decimal {
                has_decimal = true;
                i += 1;
            } else if chars[i].is_ascii_digit() {
                i += 1;
            } else {
                break;
            }
        }

        self.push(chars[start..i].iter().collect(), TokenKind::Constant);
        i
    }

    /// Scan a '"'-delimited string literal.  The token text keeps the
    /// quotes.  Newlines inside count toward `line`, but the token is
    /// attributed to the line the literal started on.
    fn string_literal(&mut self, chars: &[char], start: usize) -> usize {
        let start_line = self.line;
        let mut i = start + 1;

        while i < chars.len() && chars[i] != '"' {
            if chars[i] == '\n' {
                self.line += 1;
            }
            i += 1;
        }

        if i >= chars.len() {
            self.push_error_at(
                start_line,
                chars[start..i].iter().collect(),
                "Unterminated string",
            );
        } else {
            i += 1; // closing quote
            self.push_at(
                start_line,
                chars[start..i].iter().collect(),
                TokenKind::StringLiteral,
            );
        }
        i
    }

    /// Scan a '\''-delimited character literal.  Same handling as strings.
    fn char_literal(&mut self, chars: &[char], start: usize) -> usize {
        let start_line = self.line;
        let mut i = start + 1;

        while i < chars.len() && chars[i] != '\'' {
            if chars[i] == '\n' {
                self.line += 1;
            }
            i += 1;
        }

        if i >= chars.len() {
            self.push_error_at(
                start_line,
                chars[start..i].iter().collect(),
                "Unterminated character literal",
            );
        } else {
            i += 1;
            self.push_at(
                start_line,
                chars[start..i].iter().collect(),
                TokenKind::CharLiteral,
            );
        }
        i
    }

    /// Scan a '/*' comment, which runs to the end of the physical line.
    /// The terminating newline is left for the main loop.
    fn line_comment(&mut self, chars: &[char], start: usize) -> usize {
        let mut i = start + 2;
        while i < chars.len() && chars[i] != '\n' {
            i += 1;
        }
        self.push(chars[start..i].iter().collect(), TokenKind::LineComment);
        i
    }

    /// Scan a '/<' ... '>/' comment, possibly spanning several lines.
    /// Missing '>/' before end of input is an unterminated-comment error.
    fn block_comment(&mut self, chars: &[char], start: usize) -> usize {
        let start_line = self.line;
        let mut i = start + 2;

        while i < chars.len() {
            if chars[i] == '>' && i + 1 < chars.len() && chars[i + 1] == '/' {
                i += 2;
                self.push_at(
                    start_line,
                    chars[start..i].iter().collect(),
                    TokenKind::BlockComment,
                );
                return i;
            }
            if chars[i] == '\n' {
                self.line += 1;
            }
            i += 1;
        }

        self.push_error_at(
            start_line,
            chars[start..i].iter().collect(),
            "Unterminated multi-line comment",
        );
        i
    }

    /// Handle `Require ( filename ) ;`, entered with `i` just past the
    /// keyword.  The whole directive is folded into a single Inclusion
    /// token, then the named file is scanned in place.
    fn require_directive(&mut self, chars: &[char], mut i: usize) -> usize {
        let directive_line = self.line;

        while i < chars.len() && chars[i] != '(' {
            if chars[i] == '\n' {
                self.line += 1;
            }
            i += 1;
        }
        if i >= chars.len() {
            self.push_error_at(
                directive_line,
                "Require".to_string(),
                "Incomplete Require statement",
            );
            return i;
        }
        i += 1; // '('

        let name_start = i;
        while i < chars.len() && chars[i] != ')' {
            if chars[i] == '\n' {
                self.line += 1;
            }
            i += 1;
        }
        if i >= chars.len() {
            self.push_error_at(
                directive_line,
                "Require".to_string(),
                "Incomplete Require statement",
            );
            return i;
        }
        let file_name: String = chars[name_start..i].iter().collect();
        let file_name = file_name.trim().to_string();
        i += 1; // ')'

        while i < chars.len() && chars[i] != ';' {
            if chars[i] == '\n' {
                self.line += 1;
            }
            i += 1;
        }
        if i < chars.len() {
            i += 1; // ';'
        }

        self.push_at(
            directive_line,
            format!("Require({})", file_name),
            TokenKind::Inclusion,
        );
        self.include(&file_name);
        i
    }

    /// Scan an included file's tokens into the stream at the current
    /// position.  A file already seen in this scan is skipped silently,
    /// which is what breaks inclusion cycles.  The included file continues
    /// the current line counter; the including file's counter is restored
    /// once it finishes.
    fn include(&mut self, file_name: &str) {
        if self.included.contains(file_name) {
            return;
        }
        self.included.insert(file_name.to_string());

        match fs::read_to_string(file_name) {
            Ok(source) => {
                let saved_line = self.line;
                self.scan(&source);
                self.line = saved_line;
                eprintln!("Successfully included file: {}", file_name);
            }
            Err(_) => {
                eprintln!("Warning: File '{}' not found for inclusion.", file_name);
            }
        }
    }

    fn push(&mut self, text: String, kind: TokenKind) {
        self.push_at(self.line, text, kind);
    }

    fn push_at(&mut self, line: usize, text: String, kind: TokenKind) {
        self.tokens.push(Token { kind, text, line });
    }

    fn push_error(&mut self, text: String, reason: &'static str) {
        self.push_error_at(self.line, text, reason);
    }

    fn push_error_at(&mut self, line: usize, text: String, reason: &'static str) {
        self.errors += 1;
        self.tokens.push(Token {
            kind: TokenKind::Error(reason),
            text,
            line,
        });
    }

    fn push_invalid_type(&mut self, word: String) {
        self.errors += 1;
        self.tokens.push(Token {
            kind: TokenKind::InvalidType,
            text: word,
            line: self.line,
        });
    }

    /// The scanned tokens, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the lexer, handing the token stream to the parser.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of lexical errors recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Render the token dump: one line per token plus the error total.
    pub fn token_report(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            if token.is_error() {
                out.push_str(&format!(
                    "Line {}: Error in Token Text: {}\n",
                    token.line, token.text
                ));
            } else {
                out.push_str(&format!(
                    "Line {}: Token Text: {} Token Type: {}\n",
                    token.line, token.text, token.kind
                ));
            }
        }
        out.push_str(&format!("Total NO of errors: {}\n", self.errors));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Lexer {
        let mut lexer = Lexer::new();
        lexer.scan(source);
        lexer
    }

    #[test]
    fn test_simple_tokens() {
        let lexer = scan("@Ity Foo{Ity x;}$");
        let tokens = lexer.tokens();

        assert_eq!(tokens[0].kind, TokenKind::StartSymbol);
        assert_eq!(tokens[1].kind, TokenKind::Integer);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].text, "Foo");
        assert_eq!(tokens[3].kind, TokenKind::Braces);
        assert_eq!(tokens[4].kind, TokenKind::Integer);
        assert_eq!(tokens[5].text, "x");
        assert_eq!(tokens[6].kind, TokenKind::Delimiter);
        assert_eq!(tokens[7].kind, TokenKind::Braces);
        assert_eq!(tokens[8].kind, TokenKind::EndSymbol);
        assert_eq!(lexer.error_count(), 0);
    }

    #[test]
    fn test_two_char_operators() {
        let lexer = scan("&& || == != <= >= -> < > = ~");
        let kinds: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            vec![
                TokenKind::LogicOp,
                TokenKind::LogicOp,
                TokenKind::RelationalOp,
                TokenKind::RelationalOp,
                TokenKind::RelationalOp,
                TokenKind::RelationalOp,
                TokenKind::AccessOp,
                TokenKind::RelationalOp,
                TokenKind::RelationalOp,
                TokenKind::AssignmentOp,
                TokenKind::LogicOp,
            ]
        );
    }

    #[test]
    fn test_keywords_exact_case() {
        let lexer = scan("TrueFor truefor Ity ity However Type");
        let tokens = lexer.tokens();

        assert_eq!(tokens[0].kind, TokenKind::Condition);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Integer);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[4].kind, TokenKind::Loop);
        assert_eq!(tokens[5].kind, TokenKind::Class);
    }

    #[test]
    fn test_invalid_type_keywords() {
        let lexer = scan("int x; float y; char z;");
        let tokens = lexer.tokens();

        assert_eq!(tokens[0].kind, TokenKind::InvalidType);
        assert_eq!(tokens[3].kind, TokenKind::InvalidType);
        assert_eq!(tokens[6].kind, TokenKind::InvalidType);
        assert_eq!(lexer.error_count(), 3);
        assert_eq!(tokens[0].error_reason(), Some("Invalid type"));
    }

    #[test]
    fn test_rejected_in_identifier() {
        let lexer = scan("in input");
        let tokens = lexer.tokens();

        assert!(tokens[0].is_error());
        // Only the exact word is rejected, not words containing it.
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(lexer.error_count(), 1);
    }

    #[test]
    fn test_number_with_one_decimal_point() {
        let lexer = scan("12 3.14 1.2.3");
        let tokens = lexer.tokens();

        assert_eq!(tokens[0].text, "12");
        assert_eq!(tokens[1].text, "3.14");
        // Second '.' terminates the literal; the dot itself is not a
        // recognized symbol and the remainder scans as a new constant.
        assert_eq!(tokens[2].text, "1.2");
        assert!(tokens[3].is_error());
        assert_eq!(tokens[4].text, "3");
        assert_eq!(tokens[4].kind, TokenKind::Constant);
    }

    #[test]
    fn test_string_literal_keeps_quotes() {
        let lexer = scan("\"hello\" 'c'");
        let tokens = lexer.tokens();

        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, "\"hello\"");
        assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[1].text, "'c'");
    }

    #[test]
    fn test_unterminated_string() {
        let lexer = scan("Cwq s = \"abc;");
        let tokens = lexer.tokens();
        let last = tokens.last().expect("tokens expected");

        assert!(last.is_error());
        assert_eq!(last.error_reason(), Some("Unterminated string"));
        assert_eq!(last.line, 1);
        assert_eq!(lexer.error_count(), 1);
    }

    #[test]
    fn test_comments() {
        let lexer = scan("/* note\nIty x; /<multi\nline>/ Ity y;");
        let tokens = lexer.tokens();

        assert_eq!(tokens[0].kind, TokenKind::LineComment);
        assert_eq!(tokens[0].text, "/* note");
        assert_eq!(tokens[1].kind, TokenKind::Integer);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[4].kind, TokenKind::BlockComment);
        assert_eq!(tokens[4].text, "/<multi\nline>/");
        assert_eq!(tokens[4].line, 2);
        // Newline inside the block comment still advances the counter.
        assert_eq!(tokens[5].line, 3);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let lexer = scan("/<never closed\nIty");
        let tokens = lexer.tokens();

        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].error_reason(),
            Some("Unterminated multi-line comment")
        );
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn test_invalid_character() {
        let lexer = scan("%Foo;");
        let tokens = lexer.tokens();

        assert!(tokens[0].is_error());
        assert_eq!(tokens[0].text, "%");
        assert_eq!(tokens[0].error_reason(), Some("Invalid token"));
        // Scan continues past the bad character.
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Delimiter);
        assert_eq!(lexer.error_count(), 1);
    }

    #[test]
    fn test_line_numbers_monotone() {
        let lexer = scan("Ity a;\n\nCwq b;\n/<\n\n>/ Ity c;");
        let mut prev = 0;
        for token in lexer.tokens() {
            assert!(token.line >= prev);
            prev = token.line;
        }
        assert_eq!(lexer.tokens().last().expect("tokens expected").line, 6);
    }

    #[test]
    fn test_missing_require_target_is_nonfatal() {
        let lexer = scan("Require(no_such_file.txt);\nIty x;");
        let tokens = lexer.tokens();

        assert_eq!(tokens[0].kind, TokenKind::Inclusion);
        assert_eq!(tokens[0].text, "Require(no_such_file.txt)");
        // The including file keeps scanning after the failed inclusion.
        assert_eq!(tokens[1].kind, TokenKind::Integer);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(lexer.error_count(), 0);
    }

    #[test]
    fn test_incomplete_require() {
        let lexer = scan("Require(util.txt");
        let tokens = lexer.tokens();

        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].error_reason(),
            Some("Incomplete Require statement")
        );
    }

    #[test]
    fn test_token_report_format() {
        let lexer = scan("@ %");
        let report = lexer.token_report();

        assert!(report.contains("Line 1: Token Text: @ Token Type: Start Symbol"));
        assert!(report.contains("Line 1: Error in Token Text: %"));
        assert!(report.ends_with("Total NO of errors: 1\n"));
    }
}
