use qwq::{interpret, parse, tokenize, Error, Session};
use qwq_diagnostics::SyntaxError;
use qwq_eval::{RuntimeError, Value};

/// Runs `source` the way the REPL prints it.
fn output(source: &str) -> String {
    match interpret(source) {
        Ok(Some(value)) => format!("{}\n", value),
        Ok(None) => String::new(),
        Err(Error::Syntax(errors)) => errors
            .iter()
            .map(|error| format!("{}\n", error))
            .collect(),
        Err(err) => format!("{}\n", err),
    }
}

fn printed(source: &str) -> String {
    parse(source).unwrap().to_string()
}

#[test]
fn integer_statement() {
    assert_eq!(output("5;"), "5\n");
    let program = parse("5;").unwrap();
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "5");
}

#[test]
fn prefix_minus() {
    assert_eq!(printed("-5 + 5"), "((-5) + 5)");
    assert_eq!(output("-5 + 5"), "0\n");
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(printed("(1 + 2) * 3;"), "((1 + 2) * 3)");
    assert_eq!(output("(1 + 2) * 3;"), "9\n");
    assert_eq!(printed("1 - 1 * 10;"), "(1 - (1 * 10))");
    assert_eq!(output("1 - 1 * 10;"), "-9\n");
}

#[test]
fn bang() {
    assert_eq!(output("!true"), "false\n");
    assert_eq!(output("!!true"), "true\n");
    assert_eq!(output("!5"), "false\n");
}

#[test]
fn comparison_precedence() {
    assert_eq!(printed("5 > 4 == 3 < 4;"), "((5 > 4) == (3 < 4))");
    assert_eq!(output("5 > 4 == 3 < 4;"), "true\n");
}

#[test]
fn conditionals() {
    assert_eq!(output("if (true) { 10 }"), "10\n");
    assert_eq!(output("if (1 > 2) { 10 } else { 20 }"), "20\n");
    assert_eq!(output("if (1 > 2) { 10 }"), "");
}

#[test]
fn lexes_function_definition() {
    let kinds: Vec<String> = tokenize("let add = fn(x, y) { x + y }")
        .iter()
        .map(|token| match token.kind.to_string().as_str() {
            kind @ "IDENT" | kind @ "INT" => format!("{}({})", kind, token.literal),
            kind => kind.to_string(),
        })
        .collect();
    assert_eq!(
        kinds.join(" "),
        "LET IDENT(add) = FUNCTION ( IDENT(x) , IDENT(y) ) { IDENT(x) + IDENT(y) }"
    );
}

#[test]
fn lexes_digraphs() {
    let kinds: Vec<String> = tokenize("a == b\n a != b\n a <= b\n a>=b")
        .iter()
        .filter(|token| token.literal != "a" && token.literal != "b")
        .map(|token| token.kind.to_string())
        .collect();
    assert_eq!(kinds, vec!["==", "!=", "<=", ">="]);
}

#[test]
fn malformed_let_continues() {
    assert_eq!(output("let = 5;\nlet x = 1;"), "expect IDENT, got =\n");
    assert_eq!(
        interpret("let = 5;"),
        Err(Error::Syntax(vec![SyntaxError::new("expect IDENT, got =")]))
    );
}

#[test]
fn runtime_errors() {
    assert_eq!(output("5 + true; 5"), "ERROR: type mismatch: INTEGER + BOOLEAN\n");
    assert_eq!(
        interpret("let x = 10; x / (x - 10)"),
        Err(Error::Runtime(RuntimeError::DivisionByZero))
    );
    assert_eq!(output("y"), "ERROR: identifier not found: y\n");
}

#[test]
fn functions_and_closures() {
    assert_eq!(
        output(
            r#"
            let make_counter = fn(start) {
                fn(step) { start + step }
            };
            let from_ten = make_counter(10);
            from_ten(5) * 2"#
        ),
        "30\n"
    );
    assert_eq!(output("let id = fn(x) { x }; id"), "fn(x){x}\n");
    assert_eq!(
        output(
            r#"
            let max = fn(a, b) {
                if (a > b) { return a; }
                b
            };
            max(3, 7) + max(9, 1)"#
        ),
        "16\n"
    );
}

#[test]
fn suffix_operators() {
    assert_eq!(output("let n = 41; n++"), "42\n");
    assert_eq!(output("let n = 41; n++; n"), "41\n");
    assert_eq!(output("let empty? = false; empty? ?"), "false\n");
}

#[test]
fn session_keeps_bindings() {
    let mut session = Session::new();
    assert_eq!(session.run("let x = 5;"), Ok(None));
    assert_eq!(session.run("let double = fn(n) { n * 2 };"), Ok(None));
    assert_eq!(session.run("double(x)"), Ok(Some(Value::Integer(10))));
    assert!(session.run("let = 3;").is_err());
    assert!(session.run("x + true").is_err());
    assert_eq!(session.run("x"), Ok(Some(Value::Integer(5))));
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let source = "- ".repeat(100_000) + "1";
    assert_eq!(
        interpret(&source),
        Err(Error::Syntax(vec![SyntaxError::new(
            "expression nested too deeply"
        )]))
    );
    assert_eq!(output(&("-(".repeat(40) + "7" + &")".repeat(40))), "7\n");
}

#[test]
fn question_mark_round_trips() {
    let printed = printed("let a = false; (a)?");
    assert_eq!(printed, "let a = false;((a)?)");
    assert_eq!(output(&printed), "false\n");
}
