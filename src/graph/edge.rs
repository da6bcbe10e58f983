//! Edge data for BEL statements: relation, modifiers and keys

use super::node::Entity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Namespace for deterministic edge keys
const EDGE_KEY_NAMESPACE: Uuid = Uuid::from_u128(0x6b65_656e_2d62_656c_2d65_6467_652d_6b65);

/// Key distinguishing parallel edges between the same node pair
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeKey(String);

impl EdgeKey {
    /// Create a key from an existing string
    pub fn from_string(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive the key from the edge data, so identical statements share a key
    pub fn for_data(data: &EdgeData) -> serde_json::Result<Self> {
        let canonical = serde_json::to_vec(data)?;
        Ok(Self(Uuid::new_v5(&EDGE_KEY_NAMESPACE, &canonical).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// BEL relationship vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    Increases,
    DirectlyIncreases,
    Decreases,
    DirectlyDecreases,
    Regulates,
    CausesNoChange,
    RateLimitingStepOf,
    PositiveCorrelation,
    NegativeCorrelation,
    Correlation,
    NoCorrelation,
    Association,
    BiomarkerFor,
    PrognosticBiomarkerFor,
    IsA,
    PartOf,
    HasComponent,
    HasMember,
    HasVariant,
    HasReactant,
    HasProduct,
    EquivalentTo,
    Orthologous,
    AnalogousTo,
    TranscribedTo,
    TranslatedTo,
    SubprocessOf,
}

impl Relation {
    /// BEL long form, as it appears in statements
    pub fn as_bel(&self) -> &'static str {
        match self {
            Relation::Increases => "increases",
            Relation::DirectlyIncreases => "directlyIncreases",
            Relation::Decreases => "decreases",
            Relation::DirectlyDecreases => "directlyDecreases",
            Relation::Regulates => "regulates",
            Relation::CausesNoChange => "causesNoChange",
            Relation::RateLimitingStepOf => "rateLimitingStepOf",
            Relation::PositiveCorrelation => "positiveCorrelation",
            Relation::NegativeCorrelation => "negativeCorrelation",
            Relation::Correlation => "correlation",
            Relation::NoCorrelation => "noCorrelation",
            Relation::Association => "association",
            Relation::BiomarkerFor => "biomarkerFor",
            Relation::PrognosticBiomarkerFor => "prognosticBiomarkerFor",
            Relation::IsA => "isA",
            Relation::PartOf => "partOf",
            Relation::HasComponent => "hasComponent",
            Relation::HasMember => "hasMember",
            Relation::HasVariant => "hasVariant",
            Relation::HasReactant => "hasReactant",
            Relation::HasProduct => "hasProduct",
            Relation::EquivalentTo => "equivalentTo",
            Relation::Orthologous => "orthologous",
            Relation::AnalogousTo => "analogousTo",
            Relation::TranscribedTo => "transcribedTo",
            Relation::TranslatedTo => "translatedTo",
            Relation::SubprocessOf => "subprocessOf",
        }
    }

    pub fn is_increase(&self) -> bool {
        matches!(self, Relation::Increases | Relation::DirectlyIncreases)
    }

    pub fn is_decrease(&self) -> bool {
        matches!(self, Relation::Decreases | Relation::DirectlyDecreases)
    }

    pub fn is_correlative(&self) -> bool {
        matches!(
            self,
            Relation::Correlation
                | Relation::PositiveCorrelation
                | Relation::NegativeCorrelation
                | Relation::NoCorrelation
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_bel())
    }
}

/// How a participant takes part in a relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierKind {
    Activity,
    Degradation,
    Translocation,
}

/// Subject or object modifier attached to an edge
///
/// Any key may be missing in loaded data; `modifier` in particular is
/// absent when only a location is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ModifierKind>,
    /// Molecular activity, e.g. "kin"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    /// Cellular location, e.g. "GO:nucleus"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Modifier {
    pub fn activity() -> Self {
        Self {
            modifier: Some(ModifierKind::Activity),
            ..Default::default()
        }
    }

    pub fn degradation() -> Self {
        Self {
            modifier: Some(ModifierKind::Degradation),
            ..Default::default()
        }
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_activity(&self) -> bool {
        self.modifier == Some(ModifierKind::Activity)
    }

    /// Wrap a rendered entity in this modifier's BEL function
    ///
    /// A location always belongs to the entity itself, so it is placed
    /// inside any activity, degradation or translocation wrapper.
    fn wrap(&self, inner: &str) -> String {
        let located = match (&self.location, inner.strip_suffix(')')) {
            (Some(location), Some(head)) => format!("{}, loc({}))", head, location),
            _ => inner.to_string(),
        };
        match self.modifier {
            Some(ModifierKind::Activity) => match &self.effect {
                Some(effect) => format!("act({}, ma({}))", located, effect),
                None => format!("act({})", located),
            },
            Some(ModifierKind::Degradation) => format!("deg({})", located),
            Some(ModifierKind::Translocation) => format!("tloc({})", located),
            None => located,
        }
    }
}

/// Data carried by one keyed edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    pub relation: Relation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, Vec<String>>,
}

impl EdgeData {
    /// Create edge data with no modifiers
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            subject: None,
            object: None,
            citation: None,
            evidence: None,
            annotations: BTreeMap::new(),
        }
    }

    pub fn with_subject(mut self, modifier: Modifier) -> Self {
        self.subject = Some(modifier);
        self
    }

    pub fn with_object(mut self, modifier: Modifier) -> Self {
        self.object = Some(modifier);
        self
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Whether the object carries an activity modifier
    pub fn object_is_activity(&self) -> bool {
        self.object.as_ref().map_or(false, Modifier::is_activity)
    }

    /// Neither endpoint carries a modifier
    pub fn is_unmodified(&self) -> bool {
        self.subject.is_none() && self.object.is_none()
    }

    /// Render the statement `u rel v` in BEL
    pub fn to_bel(&self, source: &Entity, target: &Entity) -> String {
        let subject = match &self.subject {
            Some(modifier) => modifier.wrap(&source.to_string()),
            None => source.to_string(),
        };
        let object = match &self.object {
            Some(modifier) => modifier.wrap(&target.to_string()),
            None => target.to_string(),
        };
        format!("{} {} {}", subject, self.relation, object)
    }
}
