//! N-Triples serializer.
//!
//! One triple per line with absolute IRIs, sorted so that two runs over the
//! same input produce byte-identical files.

use oxrdf::Graph;

/// Serialize a graph to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut lines: Vec<String> = graph
        .iter()
        .map(|t| format!("{} {} {} .", t.subject, t.predicate, t.object))
        .collect();
    lines.sort_unstable();

    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode, TripleRef};

    #[test]
    fn test_ntriples_sorted_lines() {
        let mut graph = Graph::new();
        let s = NamedNode::new("http://example.org/b").unwrap();
        let t = NamedNode::new("http://example.org/a").unwrap();
        let p = NamedNode::new("http://example.org/p").unwrap();
        let title = Literal::new_simple_literal("Say \"hi\"");
        graph.insert(TripleRef::new(s.as_ref(), p.as_ref(), title.as_ref()));
        graph.insert(TripleRef::new(t.as_ref(), p.as_ref(), s.as_ref()));

        let out = to_ntriples(&graph);
        assert_eq!(
            out,
            "<http://example.org/a> <http://example.org/p> <http://example.org/b> .\n\
             <http://example.org/b> <http://example.org/p> \"Say \\\"hi\\\"\" .\n"
        );
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(to_ntriples(&Graph::new()), "");
    }
}
