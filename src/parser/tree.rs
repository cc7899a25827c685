//! Parse tree definitions
//!
//! A [`ParseTreeNode`] is built for every production that succeeds; failed
//! productions contribute nothing.  Each child slot is a [`TreeChild`],
//! either a nested node or a terminal's source text, so traversal and
//! printing stay total without downcasting.  The tree is singly owned:
//! no sharing, no cycles.

use std::fmt;

/// One child slot of a parse tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChild {
    Node(ParseTreeNode),
    Terminal(String),
}

/// A node in the parse tree, labeled with the production that built it.
///
/// `token` carries the terminal text for leaf-like rules (`Start_Symbols`,
/// `ID`, ...); interior rules hold their parts in `children`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseTreeNode {
    pub rule: &'static str,
    pub children: Vec<TreeChild>,
    pub token: Option<String>,
}

impl ParseTreeNode {
    /// Interior node with no terminal of its own.
    pub fn new(rule: &'static str) -> Self {
        Self {
            rule,
            children: Vec::new(),
            token: None,
        }
    }

    /// Leaf node labeled with the terminal it matched.
    pub fn leaf(rule: &'static str, token: impl Into<String>) -> Self {
        Self {
            rule,
            children: Vec::new(),
            token: Some(token.into()),
        }
    }

    pub fn add_node(&mut self, child: ParseTreeNode) {
        self.children.push(TreeChild::Node(child));
    }

    pub fn add_terminal(&mut self, text: impl Into<String>) {
        self.children.push(TreeChild::Terminal(text.into()));
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let indent = "  ".repeat(level);
        write!(f, "{}{}", indent, self.rule)?;
        if let Some(token) = &self.token {
            write!(f, " (Token: {})", token)?;
        }
        writeln!(f)?;
        for child in &self.children {
            match child {
                TreeChild::Node(node) => node.fmt_indented(f, level + 1)?,
                TreeChild::Terminal(text) => writeln!(f, "{}  {}", indent, text)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ParseTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_indents_nested_nodes() {
        let mut root = ParseTreeNode::new("Program");
        root.add_node(ParseTreeNode::leaf("Start_Symbols", "@"));
        let mut decl = ParseTreeNode::new("ClassDeclaration");
        decl.add_terminal("Foo");
        root.add_node(decl);

        let rendered = root.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Program");
        assert_eq!(lines[1], "  Start_Symbols (Token: @)");
        assert_eq!(lines[2], "  ClassDeclaration");
        assert_eq!(lines[3], "    Foo");
    }
}
