//! Turtle 1.1 serializer.
//!
//! Subjects are grouped and sorted, `rdf:type` is written as `a` and listed
//! first, and IRIs under a known namespace are shortened to prefixed names
//! when their local part is a valid `PN_LOCAL`.

use std::collections::BTreeMap;

use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Graph, LiteralRef, NamedNodeRef, NamedOrBlankNodeRef, TermRef};

/// Serialize a graph to a Turtle string using the given prefix table.
#[must_use]
pub fn to_turtle(graph: &Graph, prefixes: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(graph.len() * 96);

    for (prefix, base) in prefixes {
        out.push_str(&format!("@prefix {prefix}: <{base}> .\n"));
    }
    out.push('\n');

    // subject -> (predicate sort key, predicate) -> objects
    let mut subjects: BTreeMap<String, BTreeMap<(u8, String), Vec<String>>> = BTreeMap::new();
    for triple in graph {
        let subject = subject_term(triple.subject, prefixes);
        let predicate = if triple.predicate == rdf::TYPE {
            (0, "a".to_string())
        } else {
            (1, compact(triple.predicate, prefixes))
        };
        subjects
            .entry(subject)
            .or_default()
            .entry(predicate)
            .or_default()
            .push(object_term(triple.object, prefixes));
    }

    for (subject, predicates) in subjects {
        out.push_str(&subject);
        let count = predicates.len();
        for (i, ((_, predicate), mut objects)) in predicates.into_iter().enumerate() {
            objects.sort_unstable();
            let separator = if i + 1 == count { " ." } else { " ;" };
            if i == 0 {
                out.push(' ');
            } else {
                out.push_str("\n    ");
            }
            out.push_str(&format!("{predicate} {}{separator}", objects.join(", ")));
        }
        out.push_str("\n\n");
    }

    out
}

/// Shorten an IRI to a prefixed name when possible.
fn compact(iri: NamedNodeRef<'_>, prefixes: &[(&str, &str)]) -> String {
    prefixes
        .iter()
        .find_map(|(prefix, base)| {
            iri.as_str()
                .strip_prefix(base)
                .filter(|local| is_pn_local(local))
                .map(|local| format!("{prefix}:{local}"))
        })
        .unwrap_or_else(|| iri.to_string())
}

fn subject_term(subject: NamedOrBlankNodeRef<'_>, prefixes: &[(&str, &str)]) -> String {
    match subject {
        NamedOrBlankNodeRef::NamedNode(node) => compact(node, prefixes),
        other => other.to_string(),
    }
}

fn object_term(object: TermRef<'_>, prefixes: &[(&str, &str)]) -> String {
    match object {
        TermRef::NamedNode(node) => compact(node, prefixes),
        TermRef::Literal(literal) => literal_term(literal, prefixes),
        other => other.to_string(),
    }
}

fn literal_term(literal: LiteralRef<'_>, prefixes: &[(&str, &str)]) -> String {
    if literal.language().is_some() || literal.datatype() == xsd::STRING {
        return literal.to_string();
    }
    format!(
        "{}^^{}",
        LiteralRef::new_simple_literal(literal.value()),
        compact(literal.datatype(), prefixes)
    )
}

/// Conservative ASCII subset of the Turtle `PN_LOCAL` production.
fn is_pn_local(local: &str) -> bool {
    let valid_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.');
    !local.is_empty()
        && local.chars().all(valid_char)
        && !local.starts_with(['-', '.'])
        && !local.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode, TripleRef};

    const PREFIXES: &[(&str, &str)] = &[
        ("gdpr", "http://example.org/gdpr#"),
        ("eli", "http://data.europa.eu/eli/ontology#"),
        ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ];

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    #[test]
    fn test_pn_local() {
        assert!(is_pn_local("cpt_I.art_1_eu_en"));
        assert!(is_pn_local("1st"));
        assert!(!is_pn_local("art_1."));
        assert!(!is_pn_local(".art"));
        assert!(!is_pn_local("a b"));
        assert!(!is_pn_local(""));
    }

    #[test]
    fn test_turtle_groups_subjects() {
        let mut graph = Graph::new();
        let article = node("http://example.org/gdpr#cpt_I.art_1");
        let chapter = node("http://example.org/gdpr#cpt_I");
        let class = node("http://example.org/gdpr#Article");
        let part_of = node("http://data.europa.eu/eli/ontology#is_part_of");
        let date = node("http://data.europa.eu/eli/ontology#date_document");
        let day = Literal::new_typed_literal("2016-04-27", xsd::DATE);

        graph.insert(TripleRef::new(article.as_ref(), part_of.as_ref(), chapter.as_ref()));
        graph.insert(TripleRef::new(article.as_ref(), rdf::TYPE, class.as_ref()));
        graph.insert(TripleRef::new(chapter.as_ref(), date.as_ref(), day.as_ref()));

        let out = to_turtle(&graph, PREFIXES);
        let expected = "@prefix gdpr: <http://example.org/gdpr#> .\n\
                        @prefix eli: <http://data.europa.eu/eli/ontology#> .\n\
                        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
                        \n\
                        gdpr:cpt_I eli:date_document \"2016-04-27\"^^xsd:date .\n\
                        \n\
                        gdpr:cpt_I.art_1 a gdpr:Article ;\n    eli:is_part_of gdpr:cpt_I .\n\
                        \n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_unprefixable_iri_kept_absolute() {
        let iri = node("http://example.org/gdpr#art_1.");
        assert_eq!(compact(iri.as_ref(), PREFIXES), "<http://example.org/gdpr#art_1.>");
        let other = node("http://other.org/x");
        assert_eq!(compact(other.as_ref(), PREFIXES), "<http://other.org/x>");
    }
}
