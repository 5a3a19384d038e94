extern crate monkey;

use monkey::token::Token;

#[test]
fn token_display() {
    let tests = vec![
        (Token::Illegal('x'), "illegal(x)"),
        (Token::Eof, "EOF"),
        (
            Token::Identifier("string".to_string()),
            "identifier(string)",
        ),
        (Token::Integer("101".to_string()), "101"),
        (Token::String("foo bar".to_string()), "\"foo bar\""),
        (Token::Assign, "="),
        (Token::Plus, "+"),
        (Token::Minus, "-"),
        (Token::Bang, "!"),
        (Token::Asterisk, "*"),
        (Token::Slash, "/"),
        (Token::Equal, "=="),
        (Token::NotEqual, "!="),
        (Token::LessThan, "<"),
        (Token::GreaterThan, ">"),
        (Token::Comma, ","),
        (Token::Semicolon, ";"),
        (Token::Colon, ":"),
        (Token::LeftParen, "("),
        (Token::RightParen, ")"),
        (Token::LeftBrace, "{"),
        (Token::RightBrace, "}"),
        (Token::LeftBracket, "["),
        (Token::RightBracket, "]"),
        (Token::Function, "fn"),
        (Token::Let, "let"),
        (Token::True, "true"),
        (Token::False, "false"),
        (Token::If, "if"),
        (Token::Else, "else"),
        (Token::Return, "return"),
    ];

    for test in tests {
        let (token, string) = test;

        assert_eq!(string, format!("{}", token));
    }
}

#[test]
fn token_kind() {
    let tests = vec![
        (Token::Illegal('x'), "ILLEGAL"),
        (Token::Eof, "EOF"),
        (Token::Identifier("string".to_string()), "IDENT"),
        (Token::Integer("101".to_string()), "INT"),
        (Token::String("foo bar".to_string()), "STRING"),
        (Token::Assign, "="),
        (Token::Equal, "=="),
        (Token::NotEqual, "!="),
        (Token::LessThan, "<"),
        (Token::GreaterThan, ">"),
        (Token::Function, "FUNCTION"),
        (Token::Let, "LET"),
        (Token::True, "TRUE"),
        (Token::False, "FALSE"),
        (Token::If, "IF"),
        (Token::Else, "ELSE"),
        (Token::Return, "RETURN"),
    ];

    for test in tests {
        let (token, kind) = test;

        assert_eq!(kind, token.kind());
    }
}
