//! The RDF term model: named and blank nodes, literals, variables, the
//! default graph, and quads.
//!
//! Every term exposes a stable `value` string and a `term_type` discriminator.
//! Equality is structural (same term type, same payload), so `PartialEq` is
//! the `equals` predicate of the RDF/JS data model. Terms serialize to the
//! `{ "termType": ..., "value": ... }` JSON shape via serde.
//!
//! The index layer only needs a deterministic string projection per term,
//! provided by the `From<&...> for Key` conversions in [`crate::key`].

use crate::errors::TermError;
use crate::vocab::{RDF_LANG_STRING, XSD_STRING};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

fn is_absolute_iri(value: &str) -> bool {
    // scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
    match value.split_once(':') {
        Some((scheme, _)) if !scheme.is_empty() => {
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// An IRI term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Build a named node, validating that the value is an absolute IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self, TermError> {
        let iri = iri.into();
        if !is_absolute_iri(&iri) {
            return Err(TermError::InvalidIri(iri));
        }
        Ok(NamedNode { iri })
    }

    /// Build a named node from a value already known to be an absolute IRI.
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        NamedNode { iri: iri.into() }
    }

    pub fn value(&self) -> &str {
        &self.iri
    }

    pub fn term_type(&self) -> &'static str {
        "NamedNode"
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

/// A blank node with a nonempty local label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode {
    id: String,
}

impl BlankNode {
    pub fn new(id: impl Into<String>) -> Result<Self, TermError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TermError::EmptyValue("BlankNode"));
        }
        Ok(BlankNode { id })
    }

    pub fn value(&self) -> &str {
        &self.id
    }

    pub fn term_type(&self) -> &'static str {
        "BlankNode"
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id)
    }
}

/// A query variable with a nonempty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Result<Self, TermError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TermError::EmptyValue("Variable"));
        }
        Ok(Variable { name })
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    pub fn term_type(&self) -> &'static str {
        "Variable"
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// A literal: lexical value plus language tag or datatype.
///
/// Plain literals carry `xsd:string`, language-tagged ones `rdf:langString`.
/// Equality compares value, language, and datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: String,
    language: String,
    datatype: NamedNode,
}

impl Literal {
    /// A plain literal with datatype `xsd:string`.
    pub fn new_simple(value: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: String::new(),
            datatype: XSD_STRING.clone(),
        }
    }

    /// A literal with an explicit datatype.
    pub fn new_typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            language: String::new(),
            datatype,
        }
    }

    /// A language-tagged literal; the datatype is always `rdf:langString`.
    pub fn new_language_tagged(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, TermError> {
        let language = language.into();
        if language.is_empty() {
            return Err(TermError::EmptyValue("language tag"));
        }
        Ok(Literal {
            value: value.into(),
            language,
            datatype: RDF_LANG_STRING.clone(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    pub fn term_type(&self) -> &'static str {
        "Literal"
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pick the first quoting style the value does not collide with
        if !self.value.contains('"') {
            write!(f, "\"{}\"", self.value)?;
        } else if !self.value.contains('\'') {
            write!(f, "'{}'", self.value)?;
        } else if !self.value.contains("\"\"\"") {
            write!(f, "\"\"\"{}\"\"\"", self.value)?;
        } else {
            write!(f, "'''{}'''", self.value)?;
        }
        if self.datatype == *RDF_LANG_STRING {
            write!(f, "@{}", self.language)
        } else if self.datatype != *XSD_STRING {
            write!(f, "^^{}", self.datatype)
        } else {
            Ok(())
        }
    }
}

/// The default graph of a dataset. Its value is the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultGraph;

impl DefaultGraph {
    pub fn new() -> Self {
        DefaultGraph
    }

    pub fn value(&self) -> &str {
        ""
    }

    pub fn term_type(&self) -> &'static str {
        "DefaultGraph"
    }
}

impl fmt::Display for DefaultGraph {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// An RDF statement of subject, predicate, object, and graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Quad {
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    pub fn graph(&self) -> &Term {
        &self.graph
    }

    pub fn value(&self) -> &str {
        ""
    }

    pub fn term_type(&self) -> &'static str {
        "Quad"
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.subject, self.predicate, self.object)?;
        if !matches!(self.graph, Term::DefaultGraph(_)) {
            write!(f, "{} ", self.graph)?;
        }
        write!(f, ".")
    }
}

/// Any RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
    Variable(Variable),
    DefaultGraph(DefaultGraph),
    Quad(Box<Quad>),
}

impl Term {
    /// The stable string projection of the term. Quads and the default graph
    /// project onto the empty string.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(node) => node.value(),
            Term::BlankNode(node) => node.value(),
            Term::Literal(literal) => literal.value(),
            Term::Variable(variable) => variable.value(),
            Term::DefaultGraph(graph) => graph.value(),
            Term::Quad(quad) => quad.value(),
        }
    }

    /// The term type discriminator of the RDF/JS data model.
    pub fn term_type(&self) -> &'static str {
        match self {
            Term::NamedNode(node) => node.term_type(),
            Term::BlankNode(node) => node.term_type(),
            Term::Literal(literal) => literal.term_type(),
            Term::Variable(variable) => variable.term_type(),
            Term::DefaultGraph(graph) => graph.term_type(),
            Term::Quad(quad) => quad.term_type(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(node) => node.fmt(f),
            Term::BlankNode(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
            Term::Variable(variable) => variable.fmt(f),
            Term::DefaultGraph(graph) => graph.fmt(f),
            Term::Quad(quad) => quad.fmt(f),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

impl From<DefaultGraph> for Term {
    fn from(graph: DefaultGraph) -> Self {
        Term::DefaultGraph(graph)
    }
}

impl From<Quad> for Term {
    fn from(quad: Quad) -> Self {
        Term::Quad(Box::new(quad))
    }
}

// Serialization follows the toJSON shape of the RDF/JS data model:
// termType and value on every term, language and datatype on literals,
// the four components on quads.

impl Serialize for NamedNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NamedNode", 2)?;
        state.serialize_field("termType", self.term_type())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

impl Serialize for BlankNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BlankNode", 2)?;
        state.serialize_field("termType", self.term_type())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Variable", 2)?;
        state.serialize_field("termType", self.term_type())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

impl Serialize for DefaultGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DefaultGraph", 2)?;
        state.serialize_field("termType", self.term_type())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Literal", 4)?;
        state.serialize_field("termType", self.term_type())?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("language", self.language())?;
        state.serialize_field("datatype", self.datatype())?;
        state.end()
    }
}

impl Serialize for Quad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Quad", 6)?;
        state.serialize_field("termType", self.term_type())?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("subject", self.subject())?;
        state.serialize_field("predicate", self.predicate())?;
        state.serialize_field("object", self.object())?;
        state.serialize_field("graph", self.graph())?;
        state.end()
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::NamedNode(node) => node.serialize(serializer),
            Term::BlankNode(node) => node.serialize(serializer),
            Term::Literal(literal) => literal.serialize(serializer),
            Term::Variable(variable) => variable.serialize(serializer),
            Term::DefaultGraph(graph) => graph.serialize(serializer),
            Term::Quad(quad) => quad.serialize(serializer),
        }
    }
}
