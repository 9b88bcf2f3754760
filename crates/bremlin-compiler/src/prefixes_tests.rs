use crate::{ErrorCategory, PrefixTable};

#[test]
fn default_table_has_builtin_aliases() {
    let table = PrefixTable::default();

    assert_eq!(table.len(), 6);
    assert_eq!(table.get("bsm"), Some("https://bsm.bloomberg.com/ontology/"));
    assert_eq!(table.get("ex"), Some("http://example.org/"));
    assert_eq!(table.get("nope"), None);
}

#[test]
fn shorten_rewrites_and_strips_brackets() {
    let table = PrefixTable::default();

    let out = table.shorten("HasType[<https://bsm.bloomberg.com/ontology/Company>]");

    assert_eq!(out, "HasType[bsm:Company]");
}

#[test]
fn shorten_rewrites_every_occurrence() {
    let table = PrefixTable::default();

    let out = table.shorten(
        "Follow[<http://www.w3.org/2000/01/rdf-schema#subClassOf>].HasType[<http://www.w3.org/2002/07/owl#Class>]",
    );

    assert_eq!(out, "Follow[rdfs:subClassOf].HasType[owl:Class]");
}

#[test]
fn unmapped_iri_is_left_bare() {
    let table = PrefixTable::default();

    let out = table.shorten("HasType[<urn:isbn:0451450523>]");

    assert_eq!(out, "HasType[urn:isbn:0451450523]");
}

#[test]
fn longest_namespace_wins() {
    let mut table = PrefixTable::default();
    table.insert("geo", "http://example.org/geo/");

    let out = table.shorten("<http://example.org/geo/Point> <http://example.org/Thing>");

    assert_eq!(out, "geo:Point ex:Thing");
}

#[test]
fn empty_table_only_strips_brackets() {
    let table = PrefixTable::empty();

    assert!(table.is_empty());
    assert_eq!(
        table.shorten("<http://example.org/Thing>"),
        "http://example.org/Thing"
    );
}

#[test]
fn from_json_preserves_order() {
    let table = PrefixTable::from_json(
        r#"{ "schema": "http://schema.org/", "foaf": "http://xmlns.com/foaf/0.1/" }"#,
    )
    .unwrap();

    let aliases: Vec<_> = table.iter().map(|(alias, _)| alias).collect();
    assert_eq!(aliases, vec!["schema", "foaf"]);
    assert_eq!(table.shorten("<http://schema.org/Person>"), "schema:Person");
}

#[test]
fn from_json_rejects_non_object() {
    let err = PrefixTable::from_json(r#"["http://schema.org/"]"#).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Config);
}

#[test]
fn extend_adds_aliases() {
    let mut table = PrefixTable::empty();
    table.extend([("skos", "http://www.w3.org/2004/02/skos/core#")]);

    assert_eq!(
        table.shorten("<http://www.w3.org/2004/02/skos/core#broader>"),
        "skos:broader"
    );
}
