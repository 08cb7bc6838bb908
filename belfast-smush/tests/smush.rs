//! End-to-end smushing behavior over parsed Turtle documents.

use belfast_graph_ir::Term;
use belfast_graph_turtle::parse;
use belfast_smush::GroupsheetSmusher;
use belfast_vocab::belfast;

const PREFIXES: &str = r#"
    @prefix bibo: <http://purl.org/ontology/bibo/> .
    @prefix dc: <http://purl.org/dc/terms/> .
    @prefix schema: <http://schema.org/> .
"#;

fn doc(body: &str) -> String {
    format!(
        r#"{PREFIXES}
        <http://example.org/doc> schema:about <{}> ;
            schema:mentions _:ms .
        {body}
        "#,
        belfast::BELFAST_GROUP
    )
}

fn smushed_iris(turtle: &str) -> Vec<String> {
    let graph = parse(turtle).unwrap();
    let output = GroupsheetSmusher::default().smush(&graph).unwrap();
    let mut iris: Vec<String> = output
        .iter()
        .flat_map(|t| [&t.s, &t.o])
        .filter_map(Term::as_iri)
        .filter(|iri| iri.starts_with(belfast::GROUPSHEET_NS))
        .map(str::to_string)
        .collect();
    iris.sort();
    iris.dedup();
    iris
}

#[test]
fn known_fingerprint_for_named_author() {
    let turtle = doc(
        r#"_:ms a bibo:Manuscript ;
            dc:title "Letter" ;
            schema:author [ schema:familyName "Heaney" ; schema:givenName "Seamus" ] ."#,
    );

    // md5("Heaney, Seamus letter")
    assert_eq!(
        smushed_iris(&turtle),
        vec![format!(
            "{}98268a4abdfe44dea33ebe46ce5529be",
            belfast::GROUPSHEET_NS
        )]
    );
}

#[test]
fn known_fingerprint_for_anonymous_sheet() {
    let turtle = doc(r#"_:ms a bibo:Manuscript ; dc:title ( "Soundings" "Belfast Poems" ) ."#);

    // md5("anonymous belfast-poems soundings")
    assert_eq!(
        smushed_iris(&turtle),
        vec![format!(
            "{}e8a04a2e92f4e36a3793c4c2755c8c71",
            belfast::GROUPSHEET_NS
        )]
    );
}

#[test]
fn known_fingerprint_for_literal_author() {
    let turtle = doc(
        r#"_:ms a bibo:Manuscript ;
            dc:title ( "The Group" "Elegy" ) ;
            schema:author "Longley, Michael" ."#,
    );

    // md5("Longley, Michael elegy the-group")
    assert_eq!(
        smushed_iris(&turtle),
        vec![format!(
            "{}3485aad1afe699d583d724f74140e918",
            belfast::GROUPSHEET_NS
        )]
    );
}

#[test]
fn title_order_does_not_matter() {
    let forward = doc(r#"_:ms a bibo:Manuscript ; dc:title ( "Soundings" "Belfast Poems" ) ."#);
    let reverse = doc(r#"_:ms a bibo:Manuscript ; dc:title ( "Belfast Poems" "Soundings" ) ."#);

    assert_eq!(smushed_iris(&forward), smushed_iris(&reverse));
}

#[test]
fn accented_and_plain_titles_merge() {
    let accented = doc(r#"_:ms a bibo:Manuscript ; dc:title "Dán" ."#);
    let plain = doc(r#"_:ms a bibo:Manuscript ; dc:title "Dan" ."#);

    assert_eq!(smushed_iris(&accented), smushed_iris(&plain));
}

#[test]
fn case_and_punctuation_do_not_matter() {
    let shouted = doc(r#"_:ms a bibo:Manuscript ; dc:title "THE GROUP!" ."#);
    let plain = doc(r#"_:ms a bibo:Manuscript ; dc:title "the group" ."#);

    assert_eq!(smushed_iris(&shouted), smushed_iris(&plain));
}

#[test]
fn same_sheet_merges_across_documents() {
    let sheet = r#"_:ms a bibo:Manuscript ;
        dc:title "Letter" ;
        schema:author [ schema:familyName "Heaney" ; schema:givenName "Seamus" ] ."#;

    let a = doc(sheet);
    // a second harvest of the same sheet, different document IRI
    let b = a.replace("http://example.org/doc", "http://example.org/other-doc");

    assert_eq!(smushed_iris(&a), smushed_iris(&b));
}

#[test]
fn smushing_is_deterministic() {
    let turtle = doc(r#"_:ms a bibo:Manuscript ; dc:title "Letter" ."#);
    let graph = parse(&turtle).unwrap();
    let smusher = GroupsheetSmusher::default();

    let mut first = smusher.smush(&graph).unwrap();
    let mut second = smusher.smush(&graph).unwrap();
    first.canonicalize();
    second.canonicalize();
    assert_eq!(first, second);
}

#[test]
fn graph_without_groupsheets_is_untouched() {
    // a manuscript exists, but no document about the topic mentions it
    let turtle = format!(
        r#"{PREFIXES}
        _:ms a bibo:Manuscript ; dc:title "Letter" .
        "#
    );
    let graph = parse(&turtle).unwrap();
    assert!(GroupsheetSmusher::default().smush(&graph).is_none());
}

#[test]
fn sheet_without_signal_keeps_its_blank_node() {
    // mentioned and typed as a manuscript, but no title and no author
    let turtle = doc("_:ms a bibo:Manuscript .");
    let graph = parse(&turtle).unwrap();
    let output = GroupsheetSmusher::default().smush(&graph).unwrap();

    assert!(smushed_iris(&turtle).is_empty());
    assert!(output.iter().any(|t| t.s == Term::blank("ms")));
}

#[test]
fn rewrite_covers_subjects_and_objects_but_not_predicates() {
    let turtle = doc(
        r#"_:ms a bibo:Manuscript ; dc:title "Letter" .
        <http://example.org/copy> schema:about _:ms ."#,
    );
    let graph = parse(&turtle).unwrap();
    let output = GroupsheetSmusher::default().smush(&graph).unwrap();

    // the blank node is gone from subject and object positions
    let ms = Term::blank("ms");
    assert!(!output.iter().any(|t| t.s == ms || t.o == ms));

    // predicates are untouched, even though terms were rewritten
    let input_preds: Vec<_> = graph.iter().map(|t| &t.p).collect();
    let output_preds: Vec<_> = output.iter().map(|t| &t.p).collect();
    assert_eq!(input_preds, output_preds);
}

#[test]
fn prefix_bindings_survive_the_rewrite() {
    let turtle = doc(r#"_:ms a bibo:Manuscript ; dc:title "Letter" ."#);
    let graph = parse(&turtle).unwrap();
    let output = GroupsheetSmusher::default().smush(&graph).unwrap();
    assert_eq!(output.prefixes, graph.prefixes);
}

#[test]
fn smushing_is_idempotent() {
    let turtle = doc(r#"_:ms a bibo:Manuscript ; dc:title "Letter" ."#);
    let graph = parse(&turtle).unwrap();
    let smusher = GroupsheetSmusher::default();

    let mut once = smusher.smush(&graph).unwrap();
    let mut twice = smusher.smush(&once).unwrap();
    once.canonicalize();
    twice.canonicalize();
    assert_eq!(once, twice);
}

#[test]
fn custom_topic_and_namespace() {
    let turtle = format!(
        r#"{PREFIXES}
        <http://example.org/doc> schema:about <http://example.org/workshop> ;
            schema:mentions _:ms .
        _:ms a bibo:Manuscript ; dc:title "Letter" .
        "#
    );
    let graph = parse(&turtle).unwrap();

    // default topic does not match
    assert!(GroupsheetSmusher::default().smush(&graph).is_none());

    let smusher = GroupsheetSmusher::new(
        "http://example.org/workshop",
        "http://example.org/sheets/md5/",
    );
    let output = smusher.smush(&graph).unwrap();
    assert!(output
        .iter()
        .filter_map(|t| t.o.as_iri())
        .any(|iri| iri.starts_with("http://example.org/sheets/md5/")));
}
