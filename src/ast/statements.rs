use std::fmt::Display;

use super::{
    ast::StmtType,
    expressions::{Expr, Identifier},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Identifier,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureStmt {
    pub name: Identifier,
    pub members: Vec<Identifier>,
}

/// Function definition. Anonymous functions have an empty `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt {
    pub name: Identifier,
    pub parameters: Vec<Identifier>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoopStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForLoopStmt {
    pub index: Identifier,
    pub sequence: Expr,
    pub body: Vec<Stmt>,
}

/// `if` with at most one `elif` clause and an optional `else`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalStmt {
    pub if_condition: Expr,
    pub if_body: Vec<Stmt>,
    pub elif_condition: Option<Expr>,
    pub elif_body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Empty,
    Return(ReturnStmt),
    Assignment(AssignmentStmt),
    Structure(StructureStmt),
    Function(FunctionStmt),
    WhileLoop(WhileLoopStmt),
    ForLoop(ForLoopStmt),
    Conditional(ConditionalStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Empty => StmtType::EmptyStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
            Stmt::Assignment(_) => StmtType::AssignmentStmt,
            Stmt::Structure(_) => StmtType::StructureStmt,
            Stmt::Function(_) => StmtType::FunctionStmt,
            Stmt::WhileLoop(_) => StmtType::WhileLoopStmt,
            Stmt::ForLoop(_) => StmtType::ForLoopStmt,
            Stmt::Conditional(_) => StmtType::ConditionalStmt,
        }
    }
}

fn write_body(f: &mut std::fmt::Formatter<'_>, body: &[Stmt]) -> std::fmt::Result {
    for stmt in body {
        write!(f, " {}", stmt)?;
    }
    Ok(())
}

/// Renders the statement back to source form, one space between tokens.
impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Empty => write!(f, "nop"),
            Stmt::Return(ReturnStmt { value: None }) => write!(f, "ret"),
            Stmt::Return(ReturnStmt { value: Some(value) }) => write!(f, "ret {}", value),
            Stmt::Assignment(assignment) => {
                write!(f, "{} = {}", assignment.target, assignment.value)
            }
            Stmt::Structure(structure) => {
                write!(f, "dat {}", structure.name)?;
                let members = structure
                    .members
                    .iter()
                    .map(|member| member.name.as_str())
                    .collect::<Vec<_>>();
                if !members.is_empty() {
                    write!(f, " {}", members.join(" , "))?;
                }
                write!(f, " end")
            }
            Stmt::Function(function) => {
                write!(f, "fun")?;
                if !function.name.is_empty() {
                    write!(f, " {}", function.name)?;
                }
                let parameters = function
                    .parameters
                    .iter()
                    .map(|parameter| parameter.name.as_str())
                    .collect::<Vec<_>>();
                if parameters.is_empty() {
                    write!(f, " ( )")?;
                } else {
                    write!(f, " ( {} )", parameters.join(" , "))?;
                }
                write_body(f, &function.body)?;
                write!(f, " end")
            }
            Stmt::WhileLoop(while_loop) => {
                write!(f, "while {}", while_loop.condition)?;
                write_body(f, &while_loop.body)?;
                write!(f, " end")
            }
            Stmt::ForLoop(for_loop) => {
                write!(f, "for {} in {}", for_loop.index, for_loop.sequence)?;
                write_body(f, &for_loop.body)?;
                write!(f, " end")
            }
            Stmt::Conditional(conditional) => {
                write!(f, "if {}", conditional.if_condition)?;
                write_body(f, &conditional.if_body)?;
                if let Some(elif_condition) = &conditional.elif_condition {
                    write!(f, " elif {}", elif_condition)?;
                    write_body(f, &conditional.elif_body)?;
                }
                if !conditional.else_body.is_empty() {
                    write!(f, " else")?;
                    write_body(f, &conditional.else_body)?;
                }
                write!(f, " end")
            }
        }
    }
}
