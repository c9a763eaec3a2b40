//! Triple sink: the duplicate-tolerant set every handler writes into.

use oxrdf::{
    Graph, Literal, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Term, TermRef, TripleRef,
};

use crate::config::Namespaces;
use crate::serializer::{serialize, OutputFormat};

/// An append-only set of triples with the small query surface the walk needs.
///
/// Insertion is idempotent. Lookups return owned snapshots, so a caller may
/// keep inserting while it iterates over a previous answer.
pub trait TripleSink {
    /// Insert a triple. Returns `false` when it was already present.
    fn add(&mut self, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>, object: TermRef<'_>)
        -> bool;

    /// Objects currently bound to `(subject, predicate)`.
    fn objects(&self, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<Term>;

    /// Subjects currently bound to `(predicate, object)`.
    fn subjects(&self, predicate: NamedNodeRef<'_>, object: TermRef<'_>) -> Vec<NamedOrBlankNode>;

    /// Number of distinct triples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `subject forward object` together with `object backward subject`.
    fn link(
        &mut self,
        subject: NamedNodeRef<'_>,
        forward: NamedNodeRef<'_>,
        backward: NamedNodeRef<'_>,
        object: NamedNodeRef<'_>,
    ) {
        self.add(subject, forward, object.into());
        self.add(object, backward, subject.into());
    }

    /// Insert a literal-valued attribute.
    fn literal(&mut self, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>, value: &Literal) {
        self.add(subject, predicate, value.as_ref().into());
    }
}

/// [`TripleSink`] backed by an in-memory [`oxrdf::Graph`].
#[derive(Debug, Default, Clone)]
pub struct GraphSink {
    graph: Graph,
}

impl GraphSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Render the graph in the requested exchange format.
    #[must_use]
    pub fn serialize(&self, format: OutputFormat, namespaces: &Namespaces) -> String {
        serialize(&self.graph, format, namespaces)
    }
}

impl TripleSink for GraphSink {
    fn add(
        &mut self,
        subject: NamedNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> bool {
        self.graph.insert(TripleRef::new(subject, predicate, object))
    }

    fn objects(&self, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        self.graph
            .objects_for_subject_predicate(subject, predicate)
            .map(TermRef::into_owned)
            .collect()
    }

    fn subjects(&self, predicate: NamedNodeRef<'_>, object: TermRef<'_>) -> Vec<NamedOrBlankNode> {
        self.graph
            .subjects_for_predicate_object(predicate, object)
            .map(NamedOrBlankNodeRef::into_owned)
            .collect()
    }

    fn len(&self) -> usize {
        self.graph.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;

    fn node(local: &str) -> NamedNode {
        NamedNode::new(format!("http://example.org/law#{local}")).unwrap()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut sink = GraphSink::new();
        let (s, p, o) = (node("a"), node("p"), node("b"));

        assert!(sink.add(s.as_ref(), p.as_ref(), o.as_ref().into()));
        assert_eq!(sink.len(), 1);
        assert!(!sink.add(s.as_ref(), p.as_ref(), o.as_ref().into()));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_link_adds_both_directions() {
        let mut sink = GraphSink::new();
        let (child, parent) = (node("child"), node("parent"));
        let (part_of, has_part) = (node("is_part_of"), node("has_part"));

        sink.link(child.as_ref(), part_of.as_ref(), has_part.as_ref(), parent.as_ref());

        assert_eq!(
            sink.objects(child.as_ref(), part_of.as_ref()),
            vec![Term::from(parent.clone())]
        );
        assert_eq!(
            sink.subjects(has_part.as_ref(), child.as_ref().into()),
            vec![NamedOrBlankNode::from(parent)]
        );
    }

    #[test]
    fn test_objects_is_a_snapshot() {
        let mut sink = GraphSink::new();
        let (s, p) = (node("s"), node("p"));
        sink.add(s.as_ref(), p.as_ref(), node("x").as_ref().into());

        let snapshot = sink.objects(s.as_ref(), p.as_ref());
        for _ in &snapshot {
            sink.add(s.as_ref(), p.as_ref(), node("y").as_ref().into());
        }

        assert_eq!(snapshot.len(), 1);
        assert_eq!(sink.objects(s.as_ref(), p.as_ref()).len(), 2);
    }

    #[test]
    fn test_literal_attribute() {
        let mut sink = GraphSink::new();
        let (s, p) = (node("s"), node("title"));
        sink.literal(s.as_ref(), p.as_ref(), &Literal::new_simple_literal("General provisions"));
        assert_eq!(
            sink.objects(s.as_ref(), p.as_ref()),
            vec![Term::from(Literal::new_simple_literal("General provisions"))]
        );
        assert!(!sink.is_empty());
    }
}
