//! Unit tests for the AST module.
//!
//! Covers the node type tags, operator symbols and the source rendering.

use super::{
    ast::{ExprType, Program, StmtType},
    expressions::{Expr, Identifier, Operator},
    statements::{ConditionalStmt, FunctionStmt, ReturnStmt, Stmt, StructureStmt},
};

#[test]
fn test_operator_symbols() {
    for symbol in ["=", "+", "-", "*", "/", "<", ">", "!", "&", "|", "^", "~"] {
        let operator = Operator::from_symbol(symbol).expect("known operator");
        assert_eq!(operator.symbol(), symbol);
    }

    assert_eq!(Operator::from_symbol("=="), None);
}

#[test]
fn test_expr_types() {
    assert_eq!(Expr::Empty.get_expr_type(), ExprType::Empty);
    assert_eq!(Expr::identifier("x").get_expr_type(), ExprType::Identifier);
    assert_eq!(
        Expr::sequence(Expr::Number(0.0), Expr::Number(1.0), Expr::Empty).get_expr_type(),
        ExprType::Sequence
    );
    assert!(Expr::Empty.is_empty());
    assert!(!Expr::Null.is_empty());
}

#[test]
fn test_render_expressions() {
    assert_eq!(Expr::Number(3.0).to_string(), "3");
    assert_eq!(Expr::Number(0.25).to_string(), "0.25");
    assert_eq!(Expr::String("hi there".to_string()).to_string(), "\" hi there \"");
    assert_eq!(Expr::Character('c').to_string(), "' c '");
    assert_eq!(
        Expr::Nested(Box::new(Expr::identifier("x"))).to_string(),
        "( x )"
    );
    assert_eq!(
        Expr::List(vec![Expr::Number(1.0), Expr::Boolean(true), Expr::Null]).to_string(),
        "[ 1 , true , null ]"
    );
    assert_eq!(
        Expr::sequence(Expr::Number(1.0), Expr::identifier("n"), Expr::Empty).to_string(),
        "[ 1 : n ]"
    );
    assert_eq!(
        Expr::sequence(Expr::Number(1.0), Expr::Number(9.0), Expr::Number(2.0)).to_string(),
        "[ 1 : 9 : 2 ]"
    );
    assert_eq!(
        Expr::condition(Expr::identifier("a"), Operator::Xor, Expr::identifier("b")).to_string(),
        "a ^ b"
    );
}

#[test]
fn test_render_statements() {
    let function = Stmt::Function(FunctionStmt {
        name: Identifier::new("add"),
        parameters: vec![Identifier::new("a"), Identifier::new("b")],
        body: vec![Stmt::Return(ReturnStmt {
            value: Some(Expr::condition(
                Expr::identifier("a"),
                Operator::Plus,
                Expr::identifier("b"),
            )),
        })],
    });
    assert_eq!(function.to_string(), "fun add ( a , b ) ret a + b end");

    let anonymous = Stmt::Function(FunctionStmt {
        name: Identifier::empty(),
        parameters: vec![],
        body: vec![Stmt::Empty],
    });
    assert_eq!(anonymous.to_string(), "fun ( ) nop end");

    let structure = Stmt::Structure(StructureStmt {
        name: Identifier::new("Point"),
        members: vec![Identifier::new("x"), Identifier::new("y")],
    });
    assert_eq!(structure.to_string(), "dat Point x , y end");

    let conditional = Stmt::Conditional(ConditionalStmt {
        if_condition: Expr::identifier("a"),
        if_body: vec![Stmt::Empty],
        elif_condition: Some(Expr::identifier("b")),
        elif_body: vec![],
        else_body: vec![Stmt::Return(ReturnStmt { value: None })],
    });
    assert_eq!(conditional.to_string(), "if a nop elif b else ret end");
    assert_eq!(conditional.get_stmt_type(), StmtType::ConditionalStmt);
}

#[test]
fn test_render_program() {
    let program = Program::from(vec![Stmt::Empty, Stmt::Return(ReturnStmt { value: None })]);

    assert_eq!(program.to_string(), "nop ret");
    assert_eq!(program.len(), 2);
    assert_eq!((&program).into_iter().count(), 2);
}
