use expressions::{
    ast::{BinaryOperator, Expr, ExprKind, LiteralValue, Span, UnaryOperator},
    interpreter::lexer::{Token, TokenKind, lex},
    parse_expression,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap_or_else(|e| panic!("Failed to lex {src:?}: {e}"))
            .iter()
            .map(|t| t.kind)
            .collect()
}

fn parse(src: &str) -> Expr {
    parse_expression(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

fn binary(expr: &Expr) -> (BinaryOperator, &str, &Expr, &Expr) {
    match &expr.kind {
        ExprKind::Binary { op,
                           symbol,
                           left,
                           right, } => (*op, symbol.as_str(), &**left, &**right),
        other => panic!("Expected a binary node, found {other:?}"),
    }
}

#[test]
fn keywords_are_single_tokens() {
    assert_eq!(lex("true").unwrap(), [Token::new("true", TokenKind::True, 0)]);
    assert_eq!(lex("false").unwrap(), [Token::new("false", TokenKind::False, 0)]);
    assert_eq!(kinds("and or xor"),
               [TokenKind::Conjunction, TokenKind::Disjunction, TokenKind::Xor]);
}

#[test]
fn keywords_need_no_separator() {
    assert_eq!(kinds("trueand"), [TokenKind::True, TokenKind::Conjunction]);
    assert_eq!(kinds("1or2"), [TokenKind::Number, TokenKind::Disjunction, TokenKind::Number]);
}

#[test]
fn operator_spellings() {
    assert_eq!(kinds(r"&& /\ and"), [TokenKind::Conjunction; 3]);
    assert_eq!(kinds(r"\/ or"), [TokenKind::Disjunction; 2]);
    assert_eq!(kinds("=== <-> <=>"), [TokenKind::Equality; 3]);
    assert_eq!(kinds("!== !<-> !<=> <>"), [TokenKind::NotEquality; 4]);
    assert_eq!(kinds("=> ->"), [TokenKind::Implication; 2]);
    assert_eq!(kinds("~ !"), [TokenKind::Not; 2]);
    assert_eq!(kinds("== != >= <= > < - ( )"),
               [TokenKind::Equals,
                TokenKind::NotEquals,
                TokenKind::GreaterEqual,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::Less,
                TokenKind::Minus,
                TokenKind::LeftParen,
                TokenKind::RightParen]);
}

#[test]
fn longer_spellings_win() {
    assert_eq!(kinds("==="), [TokenKind::Equality]);
    assert_eq!(kinds("!=="), [TokenKind::NotEquality]);
    assert_eq!(kinds("!!="), [TokenKind::Not, TokenKind::NotEquals]);
    assert_eq!(kinds("<=>=="), [TokenKind::Equality, TokenKind::Equals]);
    assert_eq!(kinds(">==="), [TokenKind::GreaterEqual, TokenKind::Equals]);
    assert_eq!(kinds("--1"), [TokenKind::Minus, TokenKind::Minus, TokenKind::Number]);
}

#[test]
fn offsets_skip_whitespace() {
    let tokens = lex("  1 >=\t2\n").unwrap();
    let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, [2, 4, 7]);
    assert_eq!(tokens[1].span(), Span::new(4, 6));
}

#[test]
fn literals() {
    let tokens = lex(r#"3.25 "a \" b" 07"#).unwrap();
    assert_eq!(tokens[0], Token::new("3.25", TokenKind::Number, 0));
    assert_eq!(tokens[1], Token::new(r#""a \" b""#, TokenKind::StringLit, 5));
    assert_eq!(tokens[2], Token::new("07", TokenKind::Number, 14));
}

#[test]
fn blank_input_has_no_tokens() {
    assert!(lex("").unwrap().is_empty());
    assert!(lex(" \t\r\n").unwrap().is_empty());
    assert!(parse("  ").is_empty());
}

#[test]
fn keywords_are_case_sensitive() {
    assert!(lex("True").is_err());
    assert!(lex("AND").is_err());
}

#[test]
fn binary_levels_nest_by_precedence() {
    // a == (b -> (c or (d and (e xor (f > g)))))
    let expr = parse("true == false -> true or false and true xor 1 > 2");

    let (op, _, _, rest) = binary(&expr);
    assert_eq!(op, BinaryOperator::Equal);
    let (op, _, _, rest) = binary(rest);
    assert_eq!(op, BinaryOperator::Implies);
    let (op, _, _, rest) = binary(rest);
    assert_eq!(op, BinaryOperator::Or);
    let (op, _, _, rest) = binary(rest);
    assert_eq!(op, BinaryOperator::And);
    let (op, _, _, rest) = binary(rest);
    assert_eq!(op, BinaryOperator::Xor);
    let (op, _, _, _) = binary(rest);
    assert_eq!(op, BinaryOperator::Greater);
}

#[test]
fn operators_are_left_associative() {
    let expr = parse("1 > 2 > 3");
    let (_, _, left, right) = binary(&expr);
    assert_eq!(expr.span, Span::new(0, 9));
    assert_eq!(left.span, Span::new(0, 5));
    assert_eq!(right.kind, ExprKind::Literal(LiteralValue::Number(3.0)));

    let expr = parse("true -> false -> true");
    let (_, _, left, _) = binary(&expr);
    assert!(matches!(left.kind, ExprKind::Binary { op: BinaryOperator::Implies, .. }));
}

#[test]
fn symbols_keep_their_spelling() {
    for (src, expected, spelling) in [(r"true /\ false", BinaryOperator::And, r"/\"),
                                      ("1 <=> 1", BinaryOperator::StrictEqual, "<=>"),
                                      ("1 <> 1", BinaryOperator::StrictNotEqual, "<>")]
    {
        let expr = parse(src);
        let (op, symbol, ..) = binary(&expr);
        assert_eq!((op, symbol), (expected, spelling), "{src}");
    }
}

#[test]
fn unary_nodes_span_operator_and_operand() {
    let expr = parse("! - 1");
    assert_eq!(expr.span, Span::new(0, 5));

    let ExprKind::Unary { op, operand, .. } = &expr.kind else {
        panic!("Expected a unary node, found {:?}", expr.kind);
    };
    assert_eq!(*op, UnaryOperator::Not);
    assert_eq!(operand.span, Span::new(2, 5));
    assert!(matches!(operand.kind, ExprKind::Unary { op: UnaryOperator::Negate, .. }));
}

#[test]
fn parentheses_widen_the_inner_span() {
    let expr = parse("(true)");
    assert_eq!(expr.kind, ExprKind::Literal(LiteralValue::Boolean(true)));
    assert_eq!(expr.span, Span::new(0, 6));

    let expr = parse(" ( 1 > 2 ) and true");
    let (_, _, left, _) = binary(&expr);
    assert_eq!(left.span, Span::new(1, 10));
    assert_eq!(expr.span, Span::new(1, 19));
}

#[test]
fn string_literals_drop_their_quotes() {
    let expr = parse(r#""say \"hi\"""#);
    assert_eq!(expr.kind, ExprKind::Literal(LiteralValue::from(r#"say \"hi\""#)));
}
