//! RDF literal datatypes
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! Plain strings default to `xsd:string`, language-tagged strings use
//! `rdf:langString`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Well-known datatype IRIs, re-exported from the vocab crate.
pub mod iri {
    pub use belfast_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use belfast_vocab::xsd::{
        ANY_URI as XSD_ANY_URI, BOOLEAN as XSD_BOOLEAN, DECIMAL as XSD_DECIMAL,
        DOUBLE as XSD_DOUBLE, INTEGER as XSD_INTEGER, STRING as XSD_STRING,
    };
}

/// RDF literal datatype, stored as an expanded IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI.
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Self::from_iri(iri::XSD_DECIMAL)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// xsd:anyURI
    pub fn xsd_any_uri() -> Self {
        Self::from_iri(iri::XSD_ANY_URI)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    /// Get the IRI representation of this datatype.
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype.
    pub fn is_xsd_string(&self) -> bool {
        self.0.as_ref() == iri::XSD_STRING
    }

    /// Check if this is the rdf:langString datatype.
    pub fn is_lang_string(&self) -> bool {
        self.0.as_ref() == iri::RDF_LANG_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
