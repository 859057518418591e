//! Integration tests for the complete front end.
//!
//! These tests run whole sources through tokenization, parsing and the
//! collaborators that consume the tree: the canonical printer, the type
//! environment and the expression evaluator.

use script_frontend::{
    ast::ast::Stmt,
    errors::errors::ErrorTip,
    evaluator::{environment::Environment, evaluator::eval, object::Object},
    get_line_at_position,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
    types::types::{Type, TypeEnv},
};

const PROGRAM: &str = r#"// Compute things
int limit = 10;
float ratio = 0.5;
string greeting = "hello";

int fn square(int n) {
    return n * n;
}

void report(string label, int value) {
    if (value >= limit) {
        return;
    } else if (value < 0) return;
    else {
        print(label, value);
    }
}

fn main() {
    int total = square(limit) + 1;
    for (i in range(limit)) {
        if (i % 2 == 0) continue;
        report("odd", i);
    }
    loop {
        break;
    }
    while (total > 0) {
        print(typeof(total));
        break;
    }
}
"#;

#[test]
fn test_program_renders_canonically() {
    let (parser, program) = parse(PROGRAM.to_string(), Some("program.mg".to_string()));

    assert!(parser.errors().is_empty(), "{:?}", parser.error_messages());
    assert_eq!(program.len(), 6);

    let expected = [
        "int limit = 10;",
        "float ratio = 0.5;",
        "string greeting = \"hello\";",
        "int square(int n) { return (n * n); }",
        "void report(string label, int value) { if ((value >= limit)) { return; } else if ((value < 0)) { return; } else { print(label, value) } }",
        "void main() { int total = (square(limit) + 1); for (i in range(limit)) { if (((i % 2) == 0)) { continue; } report(\"odd\", i) } loop { break; } while ((total > 0)) { print(typeof(total)) break; } }",
    ];

    assert_eq!(program.to_string(), format!("{}\n", expected.join("\n")));
}

#[test]
fn test_program_statement_kinds() {
    let (_, program) = parse(PROGRAM.to_string(), None);

    let kinds = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::VarDecl(_) => "var",
            Stmt::Function(_) => "fn",
            _ => "other",
        })
        .collect::<Vec<_>>();

    assert_eq!(kinds, vec!["var", "var", "var", "fn", "fn", "fn"]);
}

#[test]
fn test_type_env_from_parsed_program() {
    let (_, program) = parse(PROGRAM.to_string(), None);
    let env = TypeEnv::from_program(&program);

    assert_eq!(env.get("limit"), Type::Int);
    assert_eq!(env.get("ratio"), Type::Float);
    assert_eq!(env.get("greeting"), Type::String);
    assert_eq!(env.get("square"), Type::Int);
    assert_eq!(env.get("report"), Type::Void);
    assert_eq!(env.get("main"), Type::Void);
    assert_eq!(env.get("total"), Type::Unknown);
}

#[test]
fn test_errors_are_collected_in_order_with_positions() {
    let source = "int a = 1\nint b = ;\nif x { }\nfloat c = 2.5;\n";
    let (parser, program) = parse(source.to_string(), Some("broken.mg".to_string()));

    assert_eq!(
        parser.error_messages(),
        vec![
            "no prefix parse function for ; found",
            "expected next token to be (, got IDENT instead",
        ]
    );
    assert_eq!(program.to_string(), "int a = 1;\nfloat c = 2.5;\n");

    let first = &parser.errors()[0];
    assert_eq!(first.get_error_name(), "NoPrefixParseFn");
    assert_eq!(*first.get_position().1, "broken.mg");
    let (line, text, column) = get_line_at_position(source, first.get_position().0);
    assert_eq!((line, text.as_str(), column), (2, "int b = ;\n", 8));

    let second = &parser.errors()[1];
    let (line, _, column) = get_line_at_position(source, second.get_position().0);
    assert_eq!((line, column), (3, 3));
}

#[test]
fn test_unterminated_string_is_reported() {
    let (parser, program) = parse("string s = \"abc".to_string(), None);

    assert!(program.is_empty());
    assert_eq!(
        parser.error_messages(),
        vec!["no prefix parse function for ILLEGAL found"]
    );

    match parser.errors()[0].get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unterminated string literal"),
        ErrorTip::None => panic!("expected a tip"),
    }
}

#[test]
fn test_parser_terminates_on_garbage() {
    let (parser, _) = parse("} ) ( { ; , @ # else in".to_string(), None);

    assert!(!parser.errors().is_empty());
}

#[test]
fn test_tokens_render_kind_and_literal() {
    let tokens = tokenize("int x = 4.5;".to_string(), None);
    let rendered = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        rendered,
        vec![
            "TYPE       int",
            "IDENT      x",
            "=          =",
            "FLOAT      4.5",
            ";          ;",
            "EOF        ",
        ]
    );
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
}

#[test]
fn test_evaluate_expression_with_bindings() {
    let mut env = Environment::new();
    env.set("x", Object::from_input("10"));
    env.set("scale", Object::from_input("0.5"));

    let mut parser = Parser::new(Lexer::new("(x + 2) * scale".to_string(), None));
    let expr = parser.parse_standalone_expression();
    assert!(parser.errors().is_empty());

    let result = eval(&expr.unwrap(), &env).unwrap();
    assert_eq!(result, Object::Float(6.0));
    assert_eq!(result.inspect(), "6.0");

    let mut parser = Parser::new(Lexer::new("typeof(x * 2);".to_string(), None));
    let expr = parser.parse_standalone_expression().unwrap();
    assert_eq!(eval(&expr, &env).unwrap().inspect(), "int");
}
