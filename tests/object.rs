extern crate monkey;

use monkey::object::{Array, Builtin, Environment, Object};

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn object_display() {
    let tests = vec![
        (Object::Null, "null"),
        (Object::Integer(101), "101"),
        (Object::Integer(-5), "-5"),
        (Object::Boolean(true), "true"),
        (Object::Boolean(false), "false"),
        (Object::String("foo bar".to_string()), "foo bar"),
        (
            Object::Array(Array {
                elements: vec![Object::Integer(1), Object::Integer(2)],
            }),
            "[1, 2]",
        ),
        (
            Object::ReturnValue(Box::new(Object::Integer(1))),
            "return(1)",
        ),
        (Object::Builtin(Builtin::Len), "len"),
        (Object::Builtin(Builtin::Puts), "puts"),
    ];

    for test in tests {
        let (obj, string) = test;

        assert_eq!(string, format!("{}", obj));
    }
}

#[test]
fn object_kind() {
    let tests = vec![
        (Object::Null, "NULL"),
        (Object::Integer(1), "INTEGER"),
        (Object::Boolean(true), "BOOLEAN"),
        (Object::String("foo".to_string()), "STRING"),
        (Object::Array(Array { elements: vec![] }), "ARRAY"),
        (
            Object::ReturnValue(Box::new(Object::Null)),
            "RETURN_VALUE",
        ),
        (Object::Builtin(Builtin::Len), "BUILTIN"),
    ];

    for test in tests {
        let (obj, kind) = test;

        assert_eq!(kind, obj.kind());
    }
}

#[test]
fn environment_set_get() {
    let mut env = Environment::new();

    assert_eq!(None, env.get("foo"));

    env.set("foo".to_string(), &Object::Integer(1));
    assert_eq!(Some(Object::Integer(1)), env.get("foo"));

    // Rebinding the same name overwrites.
    env.set("foo".to_string(), &Object::Boolean(true));
    assert_eq!(Some(Object::Boolean(true)), env.get("foo"));
}

#[test]
fn environment_enclosed_lookup() {
    let outer = Rc::new(RefCell::new(Environment::new()));
    outer
        .borrow_mut()
        .set("x".to_string(), &Object::Integer(5));

    let mut inner = Environment::new_enclosed(Rc::clone(&outer));

    // The inner environment delegates to the outer one on a miss.
    assert_eq!(Some(Object::Integer(5)), inner.get("x"));

    // An inner binding shadows the outer one without modifying it.
    inner.set("x".to_string(), &Object::Integer(10));
    assert_eq!(Some(Object::Integer(10)), inner.get("x"));
    assert_eq!(Some(Object::Integer(5)), outer.borrow().get("x"));
}

#[test]
fn builtin_lookup() {
    let tests = vec![
        ("len", Some(Builtin::Len)),
        ("first", Some(Builtin::First)),
        ("last", Some(Builtin::Last)),
        ("rest", Some(Builtin::Rest)),
        ("push", Some(Builtin::Push)),
        ("puts", Some(Builtin::Puts)),
        ("foo", None),
    ];

    for (name, want) in tests {
        assert_eq!(want, Builtin::lookup(name));
    }
}

#[test]
fn builtin_len() {
    let tests = vec![
        (Object::String("".to_string()), 0),
        (Object::String("hello world".to_string()), 11),
        (Object::Array(Array { elements: vec![] }), 0),
        (
            Object::Array(Array {
                elements: vec![Object::Integer(1), Object::Integer(2)],
            }),
            2,
        ),
    ];

    for (arg, want) in tests {
        let got = Builtin::Len.apply(&[arg]).expect("failed to apply len");

        assert_eq!(Object::Integer(want), got);
    }
}

#[test]
fn builtin_len_errors() {
    let tests = vec![
        (vec![], "built-in len: expected 1 argument, but got 0"),
        (
            vec![Object::Integer(1)],
            "built-in len: argument 1 is not a string or array",
        ),
    ];

    for (args, want) in tests {
        let err = Builtin::Len.apply(&args).expect_err("expected a len error");

        assert_eq!(want, err.to_string());
    }
}

#[test]
fn builtin_first_last_rest() {
    let array = Object::Array(Array {
        elements: vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)],
    });
    let empty = Object::Array(Array { elements: vec![] });

    let tests = vec![
        (Builtin::First, array.clone(), Object::Integer(1)),
        (Builtin::Last, array.clone(), Object::Integer(3)),
        (
            Builtin::Rest,
            array.clone(),
            Object::Array(Array {
                elements: vec![Object::Integer(2), Object::Integer(3)],
            }),
        ),
        (Builtin::First, empty.clone(), Object::Null),
        (Builtin::Last, empty.clone(), Object::Null),
        (Builtin::Rest, empty, Object::Null),
        (
            Builtin::First,
            Object::String("abc".to_string()),
            Object::String("a".to_string()),
        ),
        (
            Builtin::Last,
            Object::String("abc".to_string()),
            Object::String("c".to_string()),
        ),
        (
            Builtin::Rest,
            Object::String("abc".to_string()),
            Object::String("bc".to_string()),
        ),
        (
            Builtin::Rest,
            Object::String("".to_string()),
            Object::Null,
        ),
    ];

    for (builtin, arg, want) in tests {
        let got = builtin
            .apply(&[arg])
            .expect("failed to apply built-in function");

        assert_eq!(want, got);
    }
}

#[test]
fn builtin_push() {
    let got = Builtin::Push
        .apply(&[
            Object::Array(Array {
                elements: vec![Object::Integer(1)],
            }),
            Object::Integer(2),
            Object::Integer(3),
        ])
        .expect("failed to apply push");

    let want = Object::Array(Array {
        elements: vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)],
    });

    assert_eq!(want, got);

    // Pushing onto a non-array quietly produces null.
    let got = Builtin::Push
        .apply(&[Object::Integer(1), Object::Integer(2)])
        .expect("failed to apply push");

    assert_eq!(Object::Null, got);
}
