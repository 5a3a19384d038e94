//! An AST evaluator for the Monkey programming language from
//! <https://interpreterbook.com/>.

use crate::ast;
use crate::object::{self, Object};
use crate::token::Token;

use std::cell::RefCell;
use std::error;
use std::fmt;
use std::rc::Rc;
use std::result;

/// Evaluates an `ast::Node` in an environment and produces an
/// `object::Object`.
pub fn eval(node: ast::Node, env: &Rc<RefCell<object::Environment>>) -> Result<Object> {
    match node {
        ast::Node::Program(prog) => eval_program(prog, env),
        ast::Node::Statement(stmt) => match stmt {
            ast::Statement::Block(block) => eval_block_statement(block, env),
            ast::Statement::Expression(expr) => eval(ast::Node::Expression(expr), env),
            ast::Statement::Let(stmt) => {
                let obj = eval(ast::Node::Expression(stmt.value), env)?;

                // eval succeeded; capture this binding in our environment.
                env.borrow_mut().set(stmt.name, &obj);
                Ok(Object::Null)
            }
            ast::Statement::Return(ret) => Ok(Object::ReturnValue(Box::new(eval(
                ast::Node::Expression(ret.value),
                env,
            )?))),
        },
        ast::Node::Expression(expr) => match expr {
            ast::Expression::Integer(i) => Ok(Object::Integer(i)),
            ast::Expression::Boolean(b) => Ok(Object::Boolean(b)),
            ast::Expression::String(s) => Ok(Object::String(s)),
            ast::Expression::Array(a) => Ok(Object::Array(object::Array {
                elements: eval_expressions(a.elements, env)?,
            })),
            ast::Expression::Prefix(p) => eval_prefix_expression(p, env),
            ast::Expression::Infix(i) => eval_infix_expression(i, env),
            ast::Expression::If(stmt) => eval_if_expression(stmt, env),
            ast::Expression::Identifier(id) => eval_identifier(id, env),
            ast::Expression::Function(func) => Ok(Object::Function(object::Function {
                parameters: func.parameters,
                body: func.body,

                // The function closes over the environment it is defined in.
                env: Rc::clone(env),
            })),
            ast::Expression::Call(call) => {
                let func = eval(ast::Node::Expression(*call.function), env)?;
                let args = eval_expressions(call.arguments, env)?;

                match func {
                    Object::Function(f) => apply_function(f, &args),
                    // Built-ins use their own execution logic.
                    Object::Builtin(b) => b.apply(&args).map_err(Error::Object),

                    other => Err(Error::NotAFunction(other.kind())),
                }
            }
        },
    }
}

/// Evaluates a program and returns the result.
fn eval_program(prog: ast::Program, env: &Rc<RefCell<object::Environment>>) -> Result<Object> {
    let mut result = Object::Null;

    for stmt in prog.statements {
        result = eval(ast::Node::Statement(stmt), env)?;

        // Handle early return statements if applicable, unwrapping the inner
        // value and terminating the program.
        if let Object::ReturnValue(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates a block statement and returns the result.
fn eval_block_statement(
    block: ast::BlockStatement,
    env: &Rc<RefCell<object::Environment>>,
) -> Result<Object> {
    let mut result = Object::Null;

    for stmt in block.statements {
        result = eval(ast::Node::Statement(stmt), env)?;

        // Handle early return statements if applicable, but do not unwrap the
        // inner value so that only this block statement terminates, and not
        // the entire program.
        if let Object::ReturnValue(_) = result {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a prefix expression to produce an Object.
fn eval_prefix_expression(
    expr: ast::PrefixExpression,
    env: &Rc<RefCell<object::Environment>>,
) -> Result<Object> {
    // Evaluate the right side before applying the prefix operator.
    let right = eval(ast::Node::Expression(*expr.right), env)?;

    match &expr.operator {
        // Logical negation: false and null are the only falsey objects.
        Token::Bang => match right {
            Object::Boolean(b) => Ok(Object::Boolean(!b)),
            Object::Null => Ok(Object::Boolean(true)),
            _ => Ok(Object::Boolean(false)),
        },
        // Negative numbers.
        Token::Minus => match right {
            Object::Integer(i) => Ok(Object::Integer(i.wrapping_neg())),

            right => Err(Error::UnknownPrefixOperator {
                operator: Token::Minus,
                right: right.kind(),
            }),
        },

        operator => Err(Error::UnknownPrefixOperator {
            operator: operator.clone(),
            right: right.kind(),
        }),
    }
}

/// Evaluates an infix expression to produce an Object.
fn eval_infix_expression(
    expr: ast::InfixExpression,
    env: &Rc<RefCell<object::Environment>>,
) -> Result<Object> {
    let left = eval(ast::Node::Expression(*expr.left), env)?;
    let right = eval(ast::Node::Expression(*expr.right), env)?;

    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(expr.operator, l, r)
        }

        // Left and right types must match from this point on.
        (left, right) if left.kind() != right.kind() => Err(Error::TypeMismatch {
            left: left.kind(),
            operator: expr.operator,
            right: right.kind(),
        }),

        (left, right) => match expr.operator {
            Token::Equal => Ok(Object::Boolean(left == right)),
            Token::NotEqual => Ok(Object::Boolean(left != right)),

            operator => Err(Error::UnknownInfixOperator {
                left: left.kind(),
                operator,
                right: right.kind(),
            }),
        },
    }
}

// Evaluates `l (op) r` for integer operands.
fn eval_integer_infix_expression(operator: Token, l: i64, r: i64) -> Result<Object> {
    match operator {
        Token::Plus => Ok(Object::Integer(l.wrapping_add(r))),
        Token::Minus => Ok(Object::Integer(l.wrapping_sub(r))),
        Token::Asterisk => Ok(Object::Integer(l.wrapping_mul(r))),
        Token::Slash => {
            if r == 0 {
                Err(Error::DivisionByZero)
            } else {
                Ok(Object::Integer(l.wrapping_div(r)))
            }
        }
        Token::LessThan => Ok(Object::Boolean(l < r)),
        Token::GreaterThan => Ok(Object::Boolean(l > r)),
        Token::Equal => Ok(Object::Boolean(l == r)),
        Token::NotEqual => Ok(Object::Boolean(l != r)),

        operator => Err(Error::UnknownInfixOperator {
            left: "INTEGER",
            operator,
            right: "INTEGER",
        }),
    }
}

/// Evaluates an if/else expression to produce an Object.
fn eval_if_expression(
    expr: ast::IfExpression,
    env: &Rc<RefCell<object::Environment>>,
) -> Result<Object> {
    let condition = eval(ast::Node::Expression(*expr.condition), env)?;

    if is_truthy(&condition) {
        eval(
            ast::Node::Statement(ast::Statement::Block(expr.consequence)),
            env,
        )
    } else if let Some(alt) = expr.alternative {
        eval(ast::Node::Statement(ast::Statement::Block(alt)), env)
    } else {
        Ok(Object::Null)
    }
}

/// Evaluates an object bound to an identifier and returns the result.
fn eval_identifier(id: String, env: &Rc<RefCell<object::Environment>>) -> Result<Object> {
    // Check the environment chain first so that user bindings may shadow
    // built-ins.
    if let Some(obj) = env.borrow().get(&id) {
        return Ok(obj);
    }

    match object::Builtin::lookup(&id) {
        Some(b) => Ok(Object::Builtin(b)),
        None => Err(Error::UnknownIdentifier(id)),
    }
}

/// Evaluates several expressions in order and produces objects for each of
/// them.
fn eval_expressions(
    expressions: Vec<ast::Expression>,
    env: &Rc<RefCell<object::Environment>>,
) -> Result<Vec<Object>> {
    let mut results = vec![];

    for expr in expressions {
        results.push(eval(ast::Node::Expression(expr), env)?);
    }

    Ok(results)
}

/// Applies a function with arguments to produce a result object.
fn apply_function(function: object::Function, args: &[Object]) -> Result<Object> {
    // Bind function arguments in an environment enclosed by the one the
    // function captured at its definition.
    let env = Rc::new(RefCell::new(extend_function_env(&function, args)?));

    let evaluated = eval(
        ast::Node::Statement(ast::Statement::Block(function.body)),
        &env,
    )?;

    // If the function had an early return, unwrap it here so it stops at
    // this call and not in the caller.
    if let Object::ReturnValue(ret) = evaluated {
        Ok(*ret)
    } else {
        Ok(evaluated)
    }
}

// Extends a function's captured environment to bind its arguments.
fn extend_function_env(
    func: &object::Function,
    args: &[Object],
) -> Result<object::Environment> {
    if func.parameters.len() != args.len() {
        return Err(Error::WrongNumberOfArguments {
            want: func.parameters.len(),
            got: args.len(),
        });
    }

    let mut env = object::Environment::new_enclosed(Rc::clone(&func.env));

    for (param, arg) in func.parameters.iter().zip(args) {
        env.set(param.to_string(), arg);
    }

    Ok(env)
}

/// Determines if an object is truthy in Monkey.
fn is_truthy(obj: &Object) -> bool {
    match obj {
        Object::Boolean(false) | Object::Null => false,
        _ => true,
    }
}

/// A Result type specialized use with for an Error.
pub type Result<T> = result::Result<T, Error>;

/// Specifies the different classes of errors which may occur.
#[derive(Debug, PartialEq)]
pub enum Error {
    TypeMismatch {
        left: &'static str,
        operator: Token,
        right: &'static str,
    },
    UnknownPrefixOperator {
        operator: Token,
        right: &'static str,
    },
    UnknownInfixOperator {
        left: &'static str,
        operator: Token,
        right: &'static str,
    },
    UnknownIdentifier(String),
    NotAFunction(&'static str),
    WrongNumberOfArguments {
        want: usize,
        got: usize,
    },
    DivisionByZero,
    Object(object::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TypeMismatch {
                left,
                operator,
                right,
            } => write!(f, "type mismatch: {} {} {}", left, operator, right),
            Error::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {}{}", operator, right)
            }
            Error::UnknownInfixOperator {
                left,
                operator,
                right,
            } => write!(f, "unknown operator: {} {} {}", left, operator, right),
            Error::UnknownIdentifier(id) => write!(f, "identifier not found: {}", id),
            Error::NotAFunction(kind) => write!(f, "not a function: {}", kind),
            Error::WrongNumberOfArguments { want, got } => {
                write!(f, "wrong number of arguments: want={}, got={}", want, got)
            }
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::Object(err) => err.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match self {
            Error::Object(err) => Some(err),
            _ => None,
        }
    }
}
