//! Objects produced when evaluating the Monkey programming language from
//! <https://interpreterbook.com/>.

use crate::ast;

use std::cell::RefCell;
use std::collections::HashMap;
use std::error;
use std::fmt;
use std::rc::Rc;
use std::result;

/// Objects produced when evaluating Monkey source code, along with their
/// associated data if applicable.
#[derive(Clone, Debug)]
pub enum Object {
    Null,
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(Array),
    ReturnValue(Box<Object>),
    Function(Function),
    Builtin(Builtin),
}

impl Object {
    /// Produces the name of this `Object`'s type, for use in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Null => "NULL",
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Integer(i) => i.fmt(f),
            Object::Boolean(b) => b.fmt(f),
            Object::String(s) => s.fmt(f),
            Object::Array(a) => a.fmt(f),
            Object::ReturnValue(r) => write!(f, "return({})", r),
            Object::Function(func) => func.fmt(f),
            Object::Builtin(b) => b.fmt(f),
        }
    }
}

impl PartialEq for Object {
    // Value objects compare structurally; functions and builtin bindings
    // from different sites never compare equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Null, Object::Null) => true,
            (Object::Integer(l), Object::Integer(r)) => l == r,
            (Object::Boolean(l), Object::Boolean(r)) => l == r,
            (Object::String(l), Object::String(r)) => l == r,
            (Object::Array(l), Object::Array(r)) => l.elements == r.elements,
            (Object::ReturnValue(l), Object::ReturnValue(r)) => l == r,
            (Object::Builtin(l), Object::Builtin(r)) => l == r,

            _ => false,
        }
    }
}

/// An array of objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Array {
    pub elements: Vec<Object>,
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let elements: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();

        write!(f, "[{}]", elements.join(", "))
    }
}

/// An execution environment used when evaluating Monkey source code.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a new `Environment`.
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }

    /// Creates an enclosed `Environment` for use within a function call,
    /// sharing a reference to the environment it extends.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        let mut env = Self::new();
        env.outer = Some(outer);
        env
    }

    /// Retrieves the object associated with an identifier name, or returns
    /// `None` if no object is associated with `name`.
    pub fn get(&self, name: &str) -> Option<Object> {
        match (self.store.get(name), &self.outer) {
            // We found a binding in this environment; no need to consult the
            // outer environment.
            (Some(obj), _) => Some(obj.clone()),
            // We did not find a binding; try the outer environment.
            (None, Some(outer)) => outer.borrow().get(name),
            // We found no binding and there is no outer environment.
            (None, None) => None,
        }
    }

    /// Binds an object in this environment with the identifier `name`,
    /// shadowing any binding of the same name in an outer environment.
    pub fn set(&mut self, name: String, obj: &Object) -> Object {
        self.store.insert(name, obj.clone());
        obj.clone()
    }
}

/// The object representation of a Monkey function: a closure over the
/// environment it was defined in.
#[derive(Clone)]
pub struct Function {
    pub parameters: Vec<String>,
    pub body: ast::BlockStatement,
    pub env: Rc<RefCell<Environment>>,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let params = self.parameters.join(", ");

        write!(f, "fn({}) {{\n{}\n}}", params, self.body)
    }
}

impl fmt::Debug for Function {
    // The captured environment may refer back to this function, so it is
    // omitted to keep the output finite.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Function({})", self)
    }
}

/// The object representation of a built-in Monkey function.
#[derive(Clone, Debug, PartialEq)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    /// Constructs a built-in using its name.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Builtin::Len),
            "first" => Some(Builtin::First),
            "last" => Some(Builtin::Last),
            "rest" => Some(Builtin::Rest),
            "push" => Some(Builtin::Push),
            "puts" => Some(Builtin::Puts),

            _ => None,
        }
    }

    /// Applies the appropriate built-in function on `args` to produce an
    /// `Object`.
    pub fn apply(&self, args: &[Object]) -> Result<Object> {
        match self {
            Builtin::Len => builtin_len(args),
            Builtin::First => builtin_first(args),
            Builtin::Last => builtin_last(args),
            Builtin::Rest => builtin_rest(args),
            Builtin::Push => builtin_push(args),
            Builtin::Puts => builtin_puts(args),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Builtin::Len => write!(f, "len"),
            Builtin::First => write!(f, "first"),
            Builtin::Last => write!(f, "last"),
            Builtin::Rest => write!(f, "rest"),
            Builtin::Push => write!(f, "push"),
            Builtin::Puts => write!(f, "puts"),
        }
    }
}

fn builtin_len(args: &[Object]) -> Result<Object> {
    if args.len() != 1 {
        return Err(Error::Builtin(
            Builtin::Len,
            format!("expected 1 argument, but got {}", args.len()),
        ));
    }

    match &args[0] {
        Object::String(s) => Ok(Object::Integer(s.len() as i64)),
        Object::Array(a) => Ok(Object::Integer(a.elements.len() as i64)),
        arg => Err(Error::Builtin(
            Builtin::Len,
            format!("argument {} is not a string or array", arg),
        )),
    }
}

fn builtin_first(args: &[Object]) -> Result<Object> {
    if args.len() != 1 {
        return Err(Error::Builtin(
            Builtin::First,
            format!("expected 1 argument, but got {}", args.len()),
        ));
    }

    match &args[0] {
        Object::String(s) => Ok(match s.as_bytes().first() {
            Some(b) => Object::String((*b as char).to_string()),
            None => Object::Null,
        }),
        Object::Array(a) => Ok(match a.elements.first() {
            Some(obj) => obj.clone(),
            None => Object::Null,
        }),
        arg => Err(Error::Builtin(
            Builtin::First,
            format!("argument {} is not a string or array", arg),
        )),
    }
}

fn builtin_last(args: &[Object]) -> Result<Object> {
    if args.len() != 1 {
        return Err(Error::Builtin(
            Builtin::Last,
            format!("expected 1 argument, but got {}", args.len()),
        ));
    }

    match &args[0] {
        Object::String(s) => Ok(match s.as_bytes().last() {
            Some(b) => Object::String((*b as char).to_string()),
            None => Object::Null,
        }),
        Object::Array(a) => Ok(match a.elements.last() {
            Some(obj) => obj.clone(),
            None => Object::Null,
        }),
        arg => Err(Error::Builtin(
            Builtin::Last,
            format!("argument {} is not a string or array", arg),
        )),
    }
}

fn builtin_rest(args: &[Object]) -> Result<Object> {
    if args.len() != 1 {
        return Err(Error::Builtin(
            Builtin::Rest,
            format!("expected 1 argument, but got {}", args.len()),
        ));
    }

    match &args[0] {
        Object::String(s) => Ok(match s.get(1..) {
            Some(rest) => Object::String(rest.to_string()),
            None => Object::Null,
        }),
        Object::Array(a) => {
            if a.elements.is_empty() {
                Ok(Object::Null)
            } else {
                Ok(Object::Array(Array {
                    elements: a.elements[1..].to_vec(),
                }))
            }
        }
        arg => Err(Error::Builtin(
            Builtin::Rest,
            format!("argument {} is not a string or array", arg),
        )),
    }
}

fn builtin_push(args: &[Object]) -> Result<Object> {
    if args.len() < 2 {
        return Err(Error::Builtin(
            Builtin::Push,
            format!("expected at least 2 arguments, but got {}", args.len()),
        ));
    }

    match &args[0] {
        Object::Array(a) => {
            let mut elements = a.elements.clone();
            elements.extend_from_slice(&args[1..]);

            Ok(Object::Array(Array { elements }))
        }

        // A non-array first argument quietly produces null.
        _ => Ok(Object::Null),
    }
}

fn builtin_puts(args: &[Object]) -> Result<Object> {
    for arg in args {
        println!("{}", arg);
    }

    Ok(Object::Null)
}

/// A Result type specialized use with for an Error.
pub type Result<T> = result::Result<T, Error>;

/// Specifies the different classes of errors which may occur.
#[derive(Debug, PartialEq)]
pub enum Error {
    Builtin(Builtin, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Builtin(b, err) => write!(f, "built-in {}: {}", b, err),
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}
