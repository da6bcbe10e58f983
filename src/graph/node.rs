//! Entity representation for BEL graph nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// BEL function wrapping an entity (`p(...)`, `bp(...)`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Function {
    Abundance,
    Gene,
    #[serde(rename = "RNA")]
    Rna,
    #[serde(rename = "miRNA")]
    MiRna,
    Protein,
    Complex,
    Composite,
    BiologicalProcess,
    Pathology,
    Reaction,
}

impl Function {
    /// Short BEL form used when rendering statements
    pub fn bel_short(&self) -> &'static str {
        match self {
            Function::Abundance => "a",
            Function::Gene => "g",
            Function::Rna => "r",
            Function::MiRna => "m",
            Function::Protein => "p",
            Function::Complex => "complex",
            Function::Composite => "composite",
            Function::BiologicalProcess => "bp",
            Function::Pathology => "path",
            Function::Reaction => "rxn",
        }
    }
}

/// A biological entity in a BEL graph
///
/// Named entities carry a namespace plus a name and/or identifier. List
/// abundances (unnamed complexes, composites) carry `members` instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// BEL function
    pub function: Function,
    /// Controlled vocabulary the entity comes from (e.g. "HGNC")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Database identifier within the namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Members of a list abundance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Entity>,
}

impl Entity {
    /// Create a named entity
    pub fn new(function: Function, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            function,
            namespace: Some(namespace.into()),
            name: Some(name.into()),
            identifier: None,
            members: Vec::new(),
        }
    }

    /// Create an unnamed list abundance from its members
    pub fn list(function: Function, members: Vec<Entity>) -> Self {
        Self {
            function,
            namespace: None,
            name: None,
            identifier: None,
            members,
        }
    }

    pub fn protein(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Function::Protein, namespace, name)
    }

    pub fn abundance(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Function::Abundance, namespace, name)
    }

    /// Set the identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Drop the name, keeping only namespace and identifier
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Whether the entity is grounded in a namespace
    pub fn is_concept(&self) -> bool {
        self.namespace.is_some()
    }

    /// A complex that has its own namespace entry (e.g. `complex(FPLX:AP1)`)
    pub fn is_named_complex(&self) -> bool {
        self.function == Function::Complex && self.is_concept()
    }

    /// Stable string identity: `namespace:identifier`, else `namespace:name`,
    /// else the full BEL form.
    pub fn label(&self) -> String {
        let local = non_empty(&self.identifier).or_else(|| non_empty(&self.name));
        match (&self.namespace, local) {
            (Some(namespace), Some(local)) => format!("{}:{}", namespace, local),
            _ => self.to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Quote a BEL name unless it is a bare word
fn quote_bel(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('"', "\\\""))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function.bel_short())?;
        if let Some(namespace) = &self.namespace {
            match (non_empty(&self.identifier), non_empty(&self.name)) {
                (Some(identifier), Some(name)) => {
                    write!(f, "{}:{} ! {}", namespace, quote_bel(identifier), quote_bel(name))?
                }
                (Some(local), None) | (None, Some(local)) => {
                    write!(f, "{}:{}", namespace, quote_bel(local))?
                }
                (None, None) => write!(f, "{}", namespace)?,
            }
        } else {
            let members: Vec<String> = self.members.iter().map(|m| m.to_string()).collect();
            write!(f, "{}", members.join(", "))?;
        }
        write!(f, ")")
    }
}
