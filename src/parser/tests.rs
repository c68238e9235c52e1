//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Facts and rules
//! - Disjunction/conjunction chains and their associativity
//! - Atom arguments and parenthesised groups
//! - List literals and their `cons`/`nil` form
//! - Module headers and type declarations
//! - Error positions and messages

use crate::{
    ast::node::{NodeLabel, ParseNode},
    config::ParserConfig,
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
};

use super::{
    lookups::Nonterminal,
    parser::{parse, parse_program, parse_tokens, parse_with_config},
};

fn render(source: &str, start: Nonterminal) -> String {
    parse(source, start).unwrap().render()
}

fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

#[test]
fn test_parse_fact() {
    let relation = parse("f.", Nonterminal::Relation).unwrap();

    assert_eq!(relation.label(), Some(NodeLabel::Relation));
    assert_eq!(relation.children().len(), 1);
    assert_eq!(relation.children()[0].label(), Some(NodeLabel::Atom));
    assert_eq!(
        relation.render(),
        lines(&["|Relation", "|  |Atom", "|  |  |Id : 'f'"])
    );
}

#[test]
fn test_parse_rule() {
    assert_eq!(
        render("f :- g.", Nonterminal::Relation),
        lines(&[
            "|Relation",
            "|  |Atom",
            "|  |  |Id : 'f'",
            "|  |Expression",
            "|  |  |Term",
            "|  |  |  |Atom",
            "|  |  |  |  |Id : 'g'",
        ])
    );
}

#[test]
fn test_parse_program_wraps_relations() {
    assert_eq!(
        render("f.\ng.", Nonterminal::Prolog),
        lines(&[
            "|Prolog",
            "|  |Relation",
            "|  |  |Atom",
            "|  |  |  |Id : 'f'",
            "|  |Relation",
            "|  |  |Atom",
            "|  |  |  |Id : 'g'",
        ])
    );
}

#[test]
fn test_parse_empty_program() {
    let program = parse_program("  % nothing here\n").unwrap();

    assert_eq!(program.label(), Some(NodeLabel::Prolog));
    assert!(program.children().is_empty());
    assert_eq!(program.render(), "|Prolog");
}

#[test]
fn test_disjunction_is_right_associative() {
    let expression = parse("a;b;c", Nonterminal::Expression).unwrap();

    let [first, rest] = expression.children() else {
        panic!("expected two children, got {:?}", expression);
    };
    assert_eq!(first.label(), Some(NodeLabel::Term));
    assert_eq!(rest.label(), Some(NodeLabel::Expression));
    assert_eq!(rest.children().len(), 2);
    assert_eq!(rest.children()[1].label(), Some(NodeLabel::Expression));
    assert_eq!(rest.children()[1].children().len(), 1);

    assert_eq!(
        expression.render(),
        lines(&[
            "|Expression",
            "|  |Term",
            "|  |  |Atom",
            "|  |  |  |Id : 'a'",
            "|  |Expression",
            "|  |  |Term",
            "|  |  |  |Atom",
            "|  |  |  |  |Id : 'b'",
            "|  |  |Expression",
            "|  |  |  |Term",
            "|  |  |  |  |Atom",
            "|  |  |  |  |  |Id : 'c'",
        ])
    );
}

#[test]
fn test_conjunction_is_right_associative() {
    let term = parse("a, b, c", Nonterminal::Term).unwrap();

    let [first, rest] = term.children() else {
        panic!("expected two children, got {:?}", term);
    };
    assert_eq!(first.label(), Some(NodeLabel::Atom));
    assert_eq!(rest.label(), Some(NodeLabel::Term));
    assert_eq!(rest.children()[0].label(), Some(NodeLabel::Atom));
    assert_eq!(rest.children()[1].label(), Some(NodeLabel::Term));
    assert_eq!(rest.children()[1].children().len(), 1);
}

#[test]
fn test_conjunction_binds_tighter_than_disjunction() {
    let expression = parse("a, b; c", Nonterminal::Expression).unwrap();

    let [term, rest] = expression.children() else {
        panic!("expected two children, got {:?}", expression);
    };
    assert_eq!(term.label(), Some(NodeLabel::Term));
    assert_eq!(term.children().len(), 2);
    assert_eq!(rest.label(), Some(NodeLabel::Expression));
}

#[test]
fn test_parenthesised_body_is_transparent() {
    assert_eq!(
        render("(a; b)", Nonterminal::Term),
        render("a; b", Nonterminal::Expression)
            .lines()
            .map(|line| format!("|  {}", line))
            .fold(String::from("|Term"), |acc, line| acc + "\n" + &line)
    );
}

#[test]
fn test_atom_arguments() {
    assert_eq!(
        render("f a X (g b)", Nonterminal::Atom),
        lines(&[
            "|Atom",
            "|  |Id : 'f'",
            "|  |Id : 'a'",
            "|  |Var : 'X'",
            "|  |Atom",
            "|  |  |Id : 'g'",
            "|  |  |Id : 'b'",
        ])
    );
}

#[test]
fn test_nested_argument_parentheses() {
    assert_eq!(
        render("f ((a))", Nonterminal::Atom),
        lines(&["|Atom", "|  |Id : 'f'", "|  |Atom", "|  |  |Id : 'a'"])
    );
    assert!(parse("f (((X)))", Nonterminal::Atom).is_ok());
    assert!(parse("f ([a])", Nonterminal::Atom).is_ok());
}

#[test]
fn test_argument_parentheses_are_not_clause_parentheses() {
    assert!(parse_program("a (a ; b, c).").is_err());
    assert!(parse_program("f (c;c;c) :- b.").is_err());
    assert!(parse_program("h :- a (a ; b).").is_err());
    assert!(parse_program("f (a, b).").is_err());
}

#[test]
fn test_empty_list_is_nil() {
    assert_eq!(
        render("[]", Nonterminal::List),
        lines(&["|Atom", "|  |Id : 'nil'"])
    );
}

#[test]
fn test_list_with_variable_tail() {
    assert_eq!(
        render("[a|T]", Nonterminal::List),
        lines(&["|Atom", "|  |Id : 'cons'", "|  |Id : 'a'", "|  |Var : 'T'"])
    );
}

#[test]
fn test_list_desugaring_matches_cons_atoms() {
    let list = parse("[a, b]", Nonterminal::List).unwrap();
    let atom = parse("cons a (cons b nil)", Nonterminal::Atom).unwrap();

    assert_eq!(list, atom);
    assert_eq!(list.render(), atom.render());
}

#[test]
fn test_list_desugaring_with_compound_elements() {
    let list = parse("[f X, [], [b|T]]", Nonterminal::List).unwrap();
    let atom = parse("cons (f X) (cons nil (cons (cons b T) nil))", Nonterminal::Atom).unwrap();

    assert_eq!(list, atom);
}

#[test]
fn test_list_tail_may_be_a_list() {
    let list = parse("[a | [b]]", Nonterminal::List).unwrap();

    assert_eq!(list, parse("[a, b]", Nonterminal::List).unwrap());
}

#[test]
fn test_list_with_several_heads_and_tail() {
    let list = parse("[a, b | T]", Nonterminal::List).unwrap();

    assert_eq!(list, parse("cons a (cons b T)", Nonterminal::Atom).unwrap());
}

#[test]
fn test_nested_list_head() {
    let list = parse("[ [a] | T ]", Nonterminal::List).unwrap();

    assert_eq!(
        list.render(),
        lines(&[
            "|Atom",
            "|  |Id : 'cons'",
            "|  |Atom",
            "|  |  |Id : 'cons'",
            "|  |  |Id : 'a'",
            "|  |  |Id : 'nil'",
            "|  |Var : 'T'",
        ])
    );
}

#[test]
fn test_list_as_atom_argument() {
    assert_eq!(
        render("len [] zero", Nonterminal::Atom),
        lines(&["|Atom", "|  |Id : 'len'", "|  |Id : 'nil'", "|  |Id : 'zero'"])
    );
    assert!(parse_program("append [H|T] L [H|R] :- append T L R.").is_ok());
}

#[test]
fn test_malformed_lists_are_rejected() {
    assert!(parse("[a, b,]", Nonterminal::List).is_err());
    assert!(parse("[a |]", Nonterminal::List).is_err());
    assert!(parse("[a | b]", Nonterminal::List).is_err());
    assert!(parse("[a | T, b]", Nonterminal::List).is_err());
    assert!(parse("[,]", Nonterminal::List).is_err());
    assert!(parse("[a", Nonterminal::List).is_err());
}

#[test]
fn test_trailing_comma_error_points_at_bracket() {
    let error = parse("[a, b,]", Nonterminal::List).unwrap_err();

    assert_eq!(error.get_position().column, 7);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            token: String::from("]"),
            expected: String::from("identifier, variable or `[`"),
        }
    );
}

#[test]
fn test_parse_module() {
    assert_eq!(
        render("module name.", Nonterminal::Module),
        lines(&["|Module", "|  |Id : 'name'"])
    );
}

#[test]
fn test_keyword_is_not_an_identifier() {
    let error = parse("module module.", Nonterminal::Module).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().column, 8);

    assert!(parse_program("module module.").is_err());
    assert!(parse_program("type.").is_err());
    assert!(parse_program("f type.").is_err());
}

#[test]
fn test_parse_type_declaration() {
    assert_eq!(
        render("type cons A -> list A -> list A.", Nonterminal::TypeDecl),
        lines(&[
            "|TypeDecl",
            "|  |Id : 'cons'",
            "|  |Type",
            "|  |  |Var : 'A'",
            "|  |  |Type",
            "|  |  |  |Atom",
            "|  |  |  |  |Id : 'list'",
            "|  |  |  |  |Var : 'A'",
            "|  |  |  |Type",
            "|  |  |  |  |Atom",
            "|  |  |  |  |  |Id : 'list'",
            "|  |  |  |  |  |Var : 'A'",
        ])
    );
}

#[test]
fn test_parenthesised_type() {
    let ty = parse("(a -> b) -> c", Nonterminal::Type).unwrap();

    let [first, rest] = ty.children() else {
        panic!("expected two children, got {:?}", ty);
    };
    assert!(!first.is_visible());
    assert_eq!(first.children()[0].label(), Some(NodeLabel::Type));
    assert_eq!(first.children()[0].children().len(), 2);
    assert_eq!(rest.label(), Some(NodeLabel::Type));

    assert!(parse("list (a -> b)", Nonterminal::Type).is_err());
    assert!(parse("a ->", Nonterminal::Type).is_err());
}

#[test]
fn test_parse_full_program() {
    let source = "module lists.\n\
                  type append list A -> list A -> list A -> o.\n\
                  type reverse list A -> list A -> o.\n\
                  append [] L L.\n\
                  append [H|T] L [H|R] :- append T L R.\n";
    let program = parse_program(source).unwrap();

    let labels = program
        .children()
        .iter()
        .map(|child| child.label())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            Some(NodeLabel::Module),
            Some(NodeLabel::TypeDecl),
            Some(NodeLabel::TypeDecl),
            Some(NodeLabel::Relation),
            Some(NodeLabel::Relation),
        ]
    );
}

#[test]
fn test_declarations_must_precede_relations() {
    assert!(parse_program("f.\nmodule m.").is_err());
    assert!(parse_program("f.\ntype t o.").is_err());
    assert!(parse_program("type t o.\nmodule m.").is_err());
}

#[test]
fn test_accepts_valid_programs() {
    let sources = [
        "f.\nf :- g.\n f :- g, h; t.\n f :- g, (h; t).\nf a :- g, h (t c d).\nf (cons h t) :- g h, f t.",
        "odd (cons H (cons H1 T)) (cons H T1) :- odd T T1. \n odd (cons H nil) nil. \nodd nil nil.",
        "f :- (((g))).\nf :- a ((((b)))).\nf  :- a (a (a)).",
        "f :- (a b) , (c d). ",
        "a \n\n\tb (((\naa\n)\n)\n)\n\n\n\n.f ((((a ((((b)))))))) :- (((((a (b)))))).",
        "a b c d e f g h. q w e r t :- q w e r t.",
        "one two (three (four)) :- ((a));(b,c;d a a a ;(a)).",
        "a (b c (d)) :- a;(a b,c,d).",
        "f (a (b c) d (e (f g))).",
    ];

    for source in sources {
        assert!(parse_program(source).is_ok(), "expected {:?} to parse", source);
    }
}

#[test]
fn test_rejects_invalid_programs() {
    let sources = [
        "(a b) c.",
        "a ((b) c).",
        "f :- a ((a b) (a b)).",
        "a (a b )))))).",
        "head",
        "head :- body",
        "f :- g; h, .",
        "f :- (g; (f).",
        "f ().",
        "(((b))).",
        ".",
        "head :- id ;;;;; id.",
        "a (a ; b, c).",
        "f (c;c;c) :- b.",
        "h :- a (a ; b).",
        "f ( :- ) h.",
        "f :- g.....",
        "f\ng.\nf :- a ((f;g).\nf ).",
        "f :- g \ng :- f.",
        "f.f :- .\nf g :- f ((b);), h.",
        "\\\\\\.",
        "f \\ (g h) :- h.",
        "f :.",
    ];

    for source in sources {
        assert!(parse_program(source).is_err(), "expected {:?} to fail", source);
    }
}

#[test]
fn test_furthest_failure_is_reported() {
    let error = parse_program("f :- g; h, .").unwrap_err();

    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 12);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            token: String::from("."),
            expected: String::from("`(` or identifier"),
        }
    );
}

#[test]
fn test_error_on_later_line() {
    let error = parse_program("f.\ng :- h,\n").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedEof");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_missing_relation_terminator() {
    let error = parse_program("head").unwrap_err();

    match error.get_impl() {
        ErrorImpl::UnexpectedEof { expected } => {
            assert!(expected.ends_with("`.` or `:-`"), "{}", expected)
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_trailing_input_is_rejected() {
    assert!(parse("a.", Nonterminal::Relation).is_ok());

    let error = parse("a.)", Nonterminal::Relation).unwrap_err();
    assert_eq!(error.get_error_name(), "TrailingInput");
    assert_eq!(error.get_position().column, 3);

    let error = parse_program("a. )").unwrap_err();
    assert_eq!(error.get_error_name(), "TrailingInput");
    assert_eq!(error.get_position().column, 4);
}

#[test]
fn test_every_start_symbol_requires_full_input() {
    assert!(parse("f", Nonterminal::Atom).is_ok());
    assert!(parse("f.", Nonterminal::Atom).is_err());
    assert!(parse("a, b", Nonterminal::Term).is_ok());
    assert!(parse("a, b; c", Nonterminal::Term).is_err());
    assert!(parse("", Nonterminal::Atom).is_err());
    assert!(parse("", Nonterminal::List).is_err());

    assert!(parse("(a -> b)", Nonterminal::TypeAtom).is_ok());
    assert!(parse("list A", Nonterminal::TypeAtom).is_ok());
    assert!(parse("X", Nonterminal::TypeAtom).is_ok());
    assert!(parse("a -> b", Nonterminal::TypeAtom).is_err());

    assert!(parse("(a; b)", Nonterminal::TermAtom).is_ok());
    assert!(parse("g X", Nonterminal::TermAtom).is_ok());
    assert!(parse("a, b", Nonterminal::TermAtom).is_err());
    assert!(parse("X", Nonterminal::TermAtom).is_err());

    assert!(parse("X", Nonterminal::Arg).is_ok());
    assert!(parse("(g X)", Nonterminal::Arg).is_ok());
    assert!(parse("g X", Nonterminal::Arg).is_err());
    assert!(parse("(a; b)", Nonterminal::Arg).is_err());

    assert!(parse("g X", Nonterminal::BracketedArg).is_ok());
    assert!(parse("((g))", Nonterminal::BracketedArg).is_ok());
    assert!(parse("a; b", Nonterminal::BracketedArg).is_err());

    assert!(parse("f X", Nonterminal::Elem).is_ok());
    assert!(parse("[a]", Nonterminal::Elem).is_ok());
    assert!(parse("(f)", Nonterminal::Elem).is_err());

    assert!(parse("", Nonterminal::ArgSeq).is_ok());
    assert!(parse("a ;", Nonterminal::ArgSeq).is_err());
}

#[test]
fn test_argument_level_roots() {
    let args = parse("a X [b] (f c)", Nonterminal::ArgSeq).unwrap();
    assert!(!args.is_visible());
    assert_eq!(args.children().len(), 4);
    assert_eq!(
        parse("a X", Nonterminal::ArgSeq).unwrap().render(),
        lines(&["|Id : 'a'", "|Var : 'X'"])
    );

    assert_eq!(
        parse("[a|T]", Nonterminal::Arg).unwrap(),
        parse("(cons a T)", Nonterminal::Arg).unwrap()
    );
    assert_eq!(
        parse("[]", Nonterminal::Elem).unwrap(),
        parse("nil", Nonterminal::Atom).unwrap()
    );
}

#[test]
fn test_lexical_error_is_surfaced() {
    let error = parse_program("f :- g.\nh @ i.").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_nesting_limit() {
    let config = ParserConfig::default().with_max_depth(3);

    assert!(parse_with_config("f :- ((g)).", Nonterminal::Relation, &config).is_ok());

    let error = parse_with_config("f :- ((((g)))).", Nonterminal::Relation, &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position().column, 9);

    let error = parse_with_config("[[[[a]]]]", Nonterminal::List, &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let depth = 100;
    let source = format!("f :- {}g{}.", "(".repeat(depth), ")".repeat(depth));

    assert!(parse_program(&source).is_ok());
}

#[test]
fn test_long_chains_render_one_line_per_node() {
    let body = vec!["g"; 300].join("; ");
    let relation = parse(&format!("f :- {}.", body), Nonterminal::Relation).unwrap();

    let rendered = relation.render();
    assert_eq!(rendered.lines().count(), 3 + 300 * 4);

    let args = vec!["a"; 5000].join(" ");
    let atom = parse(&format!("f {}", args), Nonterminal::Atom).unwrap();
    assert_eq!(atom.atom_arguments().map(|args| args.len()), Some(5000));
}

#[test]
fn test_long_list_is_built_compared_and_dropped() {
    let count = 100_000;
    let source = format!("[{}]", vec!["a"; count].join(", "));
    let list = parse(&source, Nonterminal::List).unwrap();

    let mut conses = 0;
    let mut node = Some(&list);
    while let Some(args) = node.and_then(ParseNode::atom_arguments) {
        assert_eq!(args.len(), 2);
        conses += 1;
        node = args[1].children().first();
    }
    assert_eq!(conses, count);

    assert_eq!(list, parse(&source, Nonterminal::List).unwrap());
    drop(list);
}

#[test]
fn test_long_conjunction_is_built_and_dropped() {
    let count = 100_000;
    let source = format!("f :- {}.", vec!["a"; count].join(", "));
    let relation = parse(&source, Nonterminal::Relation).unwrap();

    let mut term = &relation.children()[1].children()[0];
    let mut links = 0;
    while let [_, rest] = term.children() {
        links += 1;
        term = rest;
    }
    assert_eq!(links, count - 1);
    assert_eq!(term.label(), Some(NodeLabel::Term));

    drop(relation);
}

#[test]
fn test_parse_tokens_directly() {
    let tokens = tokenize("f X.").unwrap();
    let relation = parse_tokens(tokens, Nonterminal::Relation, &ParserConfig::default()).unwrap();

    assert_eq!(
        relation,
        ParseNode::structural(
            NodeLabel::Relation,
            vec![ParseNode::atom(ParseNode::id("f"), vec![ParseNode::var("X")])]
        )
    );
}

#[test]
fn test_nonterminal_names() {
    assert_eq!("prolog".parse::<Nonterminal>(), Ok(Nonterminal::Prolog));
    assert_eq!("Atom".parse::<Nonterminal>(), Ok(Nonterminal::Atom));
    assert_eq!("type-decl".parse::<Nonterminal>(), Ok(Nonterminal::TypeDecl));
    assert_eq!("type_decl".parse::<Nonterminal>(), Ok(Nonterminal::TypeDecl));
    assert_eq!("type-atom".parse::<Nonterminal>(), Ok(Nonterminal::TypeAtom));
    assert_eq!("arg_seq".parse::<Nonterminal>(), Ok(Nonterminal::ArgSeq));
    assert_eq!("arg".parse::<Nonterminal>(), Ok(Nonterminal::Arg));
    assert_eq!("BracketedArg".parse::<Nonterminal>(), Ok(Nonterminal::BracketedArg));
    assert!("clause".parse::<Nonterminal>().is_err());
    assert_eq!(Nonterminal::default(), Nonterminal::Prolog);

    for nonterminal in Nonterminal::ALL {
        assert_eq!(nonterminal.to_string().parse::<Nonterminal>(), Ok(nonterminal));
    }
}
