use std::{
    fmt::Display,
    slice::{Iter, IterMut},
};

use super::statements::Stmt;

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    EmptyStmt,
    ReturnStmt,
    AssignmentStmt,
    StructureStmt,
    FunctionStmt,
    WhileLoopStmt,
    ForLoopStmt,
    ConditionalStmt,
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Empty,
    Nested,
    Identifier,
    Null,
    Number,
    Boolean,
    String,
    Character,
    List,
    Sequence,
    Condition,
}

/// Program
///
/// The root of the tree: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.statements.push(stmt);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.statements.iter_mut()
    }
}

impl From<Vec<Stmt>> for Program {
    fn from(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Renders the whole program on one line. Parsing the rendering yields an
/// equal program.
impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self
            .statements
            .iter()
            .map(|stmt| stmt.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", statements.join(" "))
    }
}
