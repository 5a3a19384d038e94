extern crate getopts;
extern crate monkey;

use getopts::Options;
use monkey::ast;
use monkey::evaluator;
use monkey::lexer::Lexer;
use monkey::object::{Environment, Object};
use monkey::parser::Parser;
use monkey::token::Token;

use std::cell::RefCell;
use std::env;
use std::error;
use std::io::{self, BufRead, Write};
use std::process;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("l", "lex", "only perform the lexing process");
    opts.optflag("p", "parse", "only perform the lexing and parsing processes");

    let matches = opts.parse(&args[1..])?;

    // Present usage if '-h'.
    if matches.opt_present("h") {
        let brief = format!("Usage: {} 'let five = 5;'", program);
        print!("{}", opts.usage(&brief));
        return Ok(());
    }

    // With no arguments, read and evaluate programs interactively.
    if matches.free.is_empty() {
        return repl();
    }

    // Pass all free arguments through the interpreter pipeline.
    let source = matches.free.join(" ");

    if let Err(err) = lex(&source) {
        println!("\nlexer error: {}", err);
        process::exit(1);
    };

    if matches.opt_present("l") {
        return Ok(());
    }

    if let Err(err) = parse(&source) {
        println!("\nparser error: {}", err);
        process::exit(1);
    };

    if matches.opt_present("p") {
        return Ok(());
    }

    if let Err(err) = evaluate(&source) {
        println!("\nevaluator error: {}", err);
        process::exit(1);
    };

    Ok(())
}

fn lex(input: &str) -> Result<(), String> {
    println!("lexer:");

    let mut l = Lexer::new(input);

    let tokens = l.lex();
    for t in &tokens {
        match t {
            Token::Eof => {
                break;
            }
            Token::Illegal(ill) => {
                return Err(format!("illegal token: {}", ill));
            }
            _ => {
                println!("  - {:?}", t);
            }
        };
    }

    Ok(())
}

fn parse(input: &str) -> Result<(), String> {
    println!("\nparser:");

    let mut p = Parser::new(Lexer::new(input));

    let prog = match p.parse() {
        Ok(prog) => prog,
        Err(errors) => {
            return Err(errors.to_string());
        }
    };

    for s in prog.statements {
        println!("  - {}", s);
    }

    Ok(())
}

fn evaluate(input: &str) -> Result<(), String> {
    println!("\nevaluator:");

    let mut p = Parser::new(Lexer::new(input));

    let prog = match p.parse() {
        Ok(prog) => prog,
        Err(errors) => {
            return Err(errors.to_string());
        }
    };

    let env = Rc::new(RefCell::new(Environment::new()));

    match evaluator::eval(ast::Node::Program(prog), &env) {
        Ok(Object::Null) => {}
        Ok(obj) => println!("  - {}", obj),
        Err(err) => {
            return Err(err.to_string());
        }
    };

    Ok(())
}

// Reads programs line by line from stdin, evaluating each one in a
// persistent environment.
fn repl() -> Result<(), Box<dyn error::Error>> {
    let env = Rc::new(RefCell::new(Environment::new()));

    let stdin = io::stdin();
    let stdout = io::stdout();

    prompt(&stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;

        match Parser::new(Lexer::new(&line)).parse() {
            Ok(prog) => match evaluator::eval(ast::Node::Program(prog), &env) {
                // Don't echo empty results.
                Ok(Object::Null) => {}
                Ok(obj) => println!("{}", obj),
                Err(err) => println!("error: {}", err),
            },
            Err(errors) => {
                for err in &errors.0 {
                    println!("\t{}", err);
                }
            }
        };

        prompt(&stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &io::Stdout) -> io::Result<()> {
    let mut out = stdout.lock();

    out.write_all(b">> ")?;
    out.flush()
}
