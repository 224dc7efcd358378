//! Well-known RDF vocabulary terms used by the term model.

use crate::term::NamedNode;
use lazy_static::lazy_static;

lazy_static! {
    /// rdf:langString, the datatype of every language-tagged literal.
    pub static ref RDF_LANG_STRING: NamedNode =
        NamedNode::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");

    /// xsd:string, the datatype of plain literals.
    pub static ref XSD_STRING: NamedNode =
        NamedNode::new_unchecked("http://www.w3.org/2001/XMLSchema#string");
}
