//! End-to-end rendering scenarios combining paths, predicates, combinators,
//! and function calls, checked against both concrete syntaxes.

use xpath1_syntax::{Expression, NodeTest, Path, Syntax, functions};

#[test]
fn test_nested_predicate_with_attribute_comparison() {
    // //chapter[title = 'Introduction']/para[@type = 'warning'][1]
    let mut title = Path::builder();
    title.child("title");
    let title = title.relative().unwrap();

    let mut attr = Path::builder();
    attr.attribute("type");
    let attr = attr.relative().unwrap();

    let mut builder = Path::builder();
    builder
        .descendant_or_self(NodeTest::Node)
        .child_with("chapter", |step| {
            step.predicate(Expression::from(title).equal(Expression::string("Introduction")));
        })
        .child_with("para", |step| {
            step.predicate(Expression::from(attr).equal(Expression::string("warning")))
                .predicate(Expression::number(1.0));
        });
    let p = builder.absolute();

    assert_eq!(
        p.unabbreviated(),
        "/descendant-or-self::node()/child::chapter[child::title = 'Introduction']\
         /child::para[attribute::type = 'warning'][1]"
    );
    assert_eq!(
        p.abbreviated(),
        "//chapter[title = 'Introduction']/para[@type = 'warning'][1]"
    );
}

#[test]
fn test_positional_predicate_with_function_calls() {
    // para[position() = last() - 1]
    let mut builder = Path::builder();
    builder.child_with("para", |step| {
        step.predicate(functions::position().equal(functions::last() - Expression::number(1.0)));
    });
    let p = builder.relative().unwrap();

    assert_eq!(
        p.unabbreviated(),
        "child::para[position() = last() - 1]"
    );
    assert_eq!(p.abbreviated(), "para[position() = last() - 1]");
}

#[test]
fn test_union_of_absolute_paths_with_elision() {
    let mut headings = Path::builder();
    headings.descendant_or_self(NodeTest::Node).child("h1");
    let mut titles = Path::builder();
    titles.descendant_or_self(NodeTest::Node).child("title");

    let e = Expression::from(headings.absolute()).union(titles.absolute().into());
    assert_eq!(
        e.unabbreviated(),
        "/descendant-or-self::node()/child::h1 | /descendant-or-self::node()/child::title"
    );
    assert_eq!(e.abbreviated(), "//h1 | //title");
}

#[test]
fn test_processing_instruction_and_text_node_tests() {
    let mut builder = Path::builder();
    builder
        .child(NodeTest::ProcessingInstruction(Some("xml-stylesheet".into())))
        .following_sibling(NodeTest::Text);
    let p = builder.relative().unwrap();

    assert_eq!(
        p.unabbreviated(),
        "child::processing-instruction('xml-stylesheet')/following-sibling::text()"
    );
    assert_eq!(
        p.abbreviated(),
        "processing-instruction('xml-stylesheet')/following-sibling::text()"
    );
}

#[test]
fn test_structural_equality_and_sharing() {
    let mut builder = Path::builder();
    builder.attribute("id");
    let attr = builder.relative().unwrap();

    // the same subtree may appear in several composed expressions
    let first = Expression::from(attr.clone()).equal(Expression::string("a"));
    let second = Expression::from(attr.clone()).equal(Expression::string("a"));
    assert_eq!(first, second);
    assert_eq!(first.abbreviated(), "@id = 'a'");
}

#[test]
fn test_precedence_across_logical_and_arithmetic_layers() {
    // (1 + 2) * 3 > 8 and position() != last()
    let arithmetic = (Expression::number(1.0) + Expression::number(2.0))
        * Expression::number(3.0);
    let e = arithmetic
        .greater_than(Expression::number(8.0))
        .and(functions::position().not_equal(functions::last()));

    assert_eq!(
        e.unabbreviated(),
        "(1 + 2) * 3 > 8 and position() != last()"
    );
    assert_eq!(e.abbreviated(), e.unabbreviated());
}

#[test]
fn test_repeated_renders_are_identical() {
    let mut builder = Path::builder();
    builder
        .self_(NodeTest::Node)
        .descendant_or_self(NodeTest::Node)
        .child("para");
    let p = builder.relative().unwrap();

    let once = p.abbreviated();
    let twice = p.abbreviated();
    assert_eq!(once, twice);
    assert_eq!(once, ".//para");
}
