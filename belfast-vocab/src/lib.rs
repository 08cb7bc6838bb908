//! RDF Vocabulary Constants for the Belfast Group data toolkit
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs
//! and project-wide URIs used throughout the workspace.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `dc` - Dublin Core terms (http://purl.org/dc/terms/)
//! - `schema` - schema.org vocabulary
//! - `bibo` - Bibliographic Ontology
//! - `arch` / `dcmitype` - namespace roots carried through for output fidelity
//! - `belfast` - project URIs (topic entity, groupsheet identifier namespace)

/// RDF vocabulary constants
pub mod rdf {
    /// Namespace root
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// XSD vocabulary constants
pub mod xsd {
    /// Namespace root
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// Dublin Core terms
pub mod dc {
    /// Namespace root
    pub const NS: &str = "http://purl.org/dc/terms/";

    /// dcterms:title IRI - manuscript title (literal or RDF list of literals)
    pub const TITLE: &str = "http://purl.org/dc/terms/title";

    /// dcterms:hasPart IRI
    pub const HAS_PART: &str = "http://purl.org/dc/terms/hasPart";
}

/// schema.org vocabulary
pub mod schema {
    /// Namespace root
    pub const NS: &str = "http://schema.org/";

    /// schema:about IRI - document topic relation
    pub const ABOUT: &str = "http://schema.org/about";

    /// schema:mentions IRI - document-to-manuscript relation
    pub const MENTIONS: &str = "http://schema.org/mentions";

    /// schema:author IRI
    pub const AUTHOR: &str = "http://schema.org/author";

    /// schema:familyName IRI
    pub const FAMILY_NAME: &str = "http://schema.org/familyName";

    /// schema:givenName IRI
    pub const GIVEN_NAME: &str = "http://schema.org/givenName";

    /// schema:name IRI
    pub const NAME: &str = "http://schema.org/name";

    /// schema:relatedLink IRI
    pub const RELATED_LINK: &str = "http://schema.org/relatedLink";
}

/// Bibliographic Ontology
pub mod bibo {
    /// Namespace root
    pub const NS: &str = "http://purl.org/ontology/bibo/";

    /// bibo:Manuscript IRI - the type matched by the groupsheet query
    pub const MANUSCRIPT: &str = "http://purl.org/ontology/bibo/Manuscript";

    /// bibo:Document IRI
    pub const DOCUMENT: &str = "http://purl.org/ontology/bibo/Document";
}

/// Archival vocabulary namespace root
pub mod arch {
    /// Namespace root
    pub const NS: &str = "http://purl.org/archival/vocab/arch#";
}

/// DCMI type vocabulary namespace root
pub mod dcmitype {
    /// Namespace root
    pub const NS: &str = "http://purl.org/dc/dcmitype/";
}

/// Project URIs
pub mod belfast {
    /// VIAF URI for the Belfast Group literary collective.
    ///
    /// Documents with a schema:about relation to this entity are the ones
    /// searched for groupsheet manuscripts.
    pub const BELFAST_GROUP: &str = "http://viaf.org/viaf/123393054/";

    /// Base namespace for content-derived groupsheet identifiers.
    ///
    /// A canonical identifier is this prefix followed by the hex MD5 digest
    /// of the normalized author/title text.
    pub const GROUPSHEET_NS: &str = "http://belfastgroup.org/groupsheets/md5/";
}
