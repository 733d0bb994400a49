use std::fmt::Display;

use super::ast::ExprType;

/// A name. The empty identifier stands in for the name of an anonymous
/// function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    pub fn empty() -> Self {
        Identifier::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Assign,     // =
    Plus,       // +
    Minus,      // -
    Multiply,   // *
    Divide,     // /
    Less,       // <
    Greater,    // >
    Not,        // !
    And,        // &
    Or,         // |
    Xor,        // ^
    Complement, // ~
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let operator = match symbol {
            "=" => Operator::Assign,
            "+" => Operator::Plus,
            "-" => Operator::Minus,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            "<" => Operator::Less,
            ">" => Operator::Greater,
            "!" => Operator::Not,
            "&" => Operator::And,
            "|" => Operator::Or,
            "^" => Operator::Xor,
            "~" => Operator::Complement,
            _ => return None,
        };

        Some(operator)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::Not => "!",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::Complement => "~",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Range expression `[ start : stop : step ]`. An unstepped range carries
/// `Expr::Empty` as its step.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpr {
    pub start: Box<Expr>,
    pub stop: Box<Expr>,
    pub step: Box<Expr>,
}

/// A binary relation. Chains nest on the right: `a + b + c` holds
/// `b + c` as its right side.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Empty,
    Nested(Box<Expr>),
    Identifier(Identifier),
    Null,
    Number(f64),
    Boolean(bool),
    String(String),
    Character(char),
    List(Vec<Expr>),
    Sequence(SequenceExpr),
    Condition(ConditionExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Empty => ExprType::Empty,
            Expr::Nested(_) => ExprType::Nested,
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Null => ExprType::Null,
            Expr::Number(_) => ExprType::Number,
            Expr::Boolean(_) => ExprType::Boolean,
            Expr::String(_) => ExprType::String,
            Expr::Character(_) => ExprType::Character,
            Expr::List(_) => ExprType::List,
            Expr::Sequence(_) => ExprType::Sequence,
            Expr::Condition(_) => ExprType::Condition,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::Empty)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier::new(name))
    }

    pub fn sequence(start: Expr, stop: Expr, step: Expr) -> Self {
        Expr::Sequence(SequenceExpr {
            start: Box::new(start),
            stop: Box::new(stop),
            step: Box::new(step),
        })
    }

    pub fn condition(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::Condition(ConditionExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}

/// Renders the expression back to source form, one space between tokens.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Empty => Ok(()),
            Expr::Nested(inner) => write!(f, "( {} )", inner),
            Expr::Identifier(identifier) => write!(f, "{}", identifier),
            Expr::Null => write!(f, "null"),
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Boolean(value) => write!(f, "{}", value),
            Expr::String(value) => write!(f, "\" {} \"", value),
            Expr::Character(value) => write!(f, "' {} '", value),
            Expr::List(elements) => {
                let elements = elements
                    .iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<_>>();
                write!(f, "[ {} ]", elements.join(" , "))
            }
            Expr::Sequence(sequence) => {
                write!(f, "[ {} : {}", sequence.start, sequence.stop)?;
                if !sequence.step.is_empty() {
                    write!(f, " : {}", sequence.step)?;
                }
                write!(f, " ]")
            }
            Expr::Condition(condition) => write!(
                f,
                "{} {} {}",
                condition.left, condition.operator, condition.right
            ),
        }
    }
}
