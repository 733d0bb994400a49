//! Integration tests for end-to-end parsing.
//!
//! These tests run whole programs through the public entry points and check
//! the resulting tree, partial results after errors, and that rendering a
//! parsed program and parsing it again gives the same tree.

use dude::{
    ast::{
        ast::StmtType,
        expressions::Expr,
        statements::{Stmt, StructureStmt},
    },
    errors::errors::ErrorImpl,
    lexer::lexer::Whitespace,
    parse, parse_with_config, ParseConfig, Program,
};

const PROGRAM: &str = "dat Point x , y end \
fun distance ( a , b ) \
dx = a - b - 1 \
if dx < 0 ret ( 0 - dx ) end \
ret dx \
end \
points = [ 1 , 2 , 3 ] \
total = 0 \
for i in [ 0 : 10 : 2 ] \
total = total + i \
end \
while total > 0 total = total - 1 end \
name = \" a point  named, oddly \" \
initial = ' p ' \
done = true \
nop";

fn parse_ok(source: &str) -> Program {
    let (program, error) = parse(source);
    assert!(error.is_none(), "unexpected error: {}", error.unwrap());
    program
}

#[test]
fn test_parse_full_program() {
    let program = parse_ok(PROGRAM);

    let types: Vec<StmtType> = program.iter().map(|stmt| stmt.get_stmt_type()).collect();
    assert_eq!(
        types,
        vec![
            StmtType::StructureStmt,
            StmtType::FunctionStmt,
            StmtType::AssignmentStmt,
            StmtType::AssignmentStmt,
            StmtType::ForLoopStmt,
            StmtType::WhileLoopStmt,
            StmtType::AssignmentStmt,
            StmtType::AssignmentStmt,
            StmtType::AssignmentStmt,
            StmtType::EmptyStmt,
        ]
    );

    assert!(matches!(
        &program.statements[0],
        Stmt::Structure(StructureStmt { members, .. }) if members.len() == 2
    ));

    match &program.statements[6] {
        Stmt::Assignment(assignment) => assert_eq!(
            assignment.value,
            Expr::String("a point  named, oddly".to_string())
        ),
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_render_then_parse_is_identity() {
    let program = parse_ok(PROGRAM);
    let rendered = program.to_string();

    assert_eq!(parse_ok(&rendered), program);
}

#[test]
fn test_render_is_stable() {
    let once = parse_ok(PROGRAM).to_string();
    let twice = parse_ok(&once).to_string();

    assert_eq!(once, twice);
}

#[test]
fn test_partial_program_after_error() {
    let (program, error) = parse("a = 1 fun f ( ) ret a b = 2");
    let error = error.expect("the function body is never closed");

    assert_eq!(program.len(), 1);
    assert_eq!(program.statements[0].get_stmt_type(), StmtType::AssignmentStmt);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnterminatedBlock {
            opener: "fun",
            expected: "end",
        }
    );
}

#[test]
fn test_multiline_source() {
    let source = "fun main ( )\n\
                  \tfor i in [ 1 : 4 ]\n\
                  \t\tif i > 2 ret i end\n\
                  \tend\n\
                  end\n";

    let config = ParseConfig::default().with_whitespace(Whitespace::Any);
    let (program, error) = parse_with_config(source, config);

    assert!(error.is_none());
    assert_eq!(program.len(), 1);

    let (_, error) = parse(source);
    assert!(error.is_some(), "newlines are not separators by default");
}

#[test]
fn test_error_report_points_at_token() {
    let (_, error) = parse("fun f ( ) x 5 end");
    let error = error.expect("missing `=`");

    let report = error.to_string();
    assert!(report.starts_with("SyntaxError at position 12:"));
    assert!(report.contains("f ( ) x 5"));
}
