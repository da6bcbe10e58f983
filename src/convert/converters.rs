//! Converter rules mapping BEL edges to triples
//!
//! Each rule is a predicate over one keyed edge plus the conversion applied
//! when the predicate holds. Predicates inspect only what is present in the
//! edge data, so malformed or partial data simply fails to match.

use super::Triple;
use crate::graph::{EdgeData, EdgeKey, Entity, Function, Relation};
use std::sync::OnceLock;

/// A predicate/transform pair deciding whether and how an edge becomes a triple
pub trait Converter: Send + Sync {
    /// Stable name used in logs and registry listings
    fn name(&self) -> &'static str;

    /// Whether this rule applies to the edge
    fn predicate(&self, u: &Entity, v: &Entity, key: &EdgeKey, data: &EdgeData) -> bool;

    /// Build the triple. Only called when `predicate` returned true.
    fn convert(&self, u: &Entity, v: &Entity, key: &EdgeKey, data: &EdgeData) -> Triple;
}

fn both_concepts(u: &Entity, v: &Entity) -> bool {
    u.is_concept() && v.is_concept()
}

/// `complex(X) hasComponent p(Y)` becomes `Y part of complex(X)`
pub struct NamedComplexHasComponent;

impl Converter for NamedComplexHasComponent {
    fn name(&self) -> &'static str {
        "named_complex_has_component"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation == Relation::HasComponent && u.is_named_complex() && v.is_concept()
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(v.label(), "part of", u.to_string())
    }
}

/// `p(X) partOf complex(Y)`
pub struct PartOfNamedComplex;

impl Converter for PartOfNamedComplex {
    fn name(&self) -> &'static str {
        "part_of_named_complex"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation == Relation::PartOf && u.is_concept() && v.is_named_complex()
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "part of", v.to_string())
    }
}

/// `X partOf bp(Y)`
pub struct PartOfBiologicalProcess;

impl Converter for PartOfBiologicalProcess {
    fn name(&self) -> &'static str {
        "part_of_biological_process"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation == Relation::PartOf
            && v.function == Function::BiologicalProcess
            && both_concepts(u, v)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "part of", v.label())
    }
}

/// Predicate emitted for `X regulates act(Y)`; downstream tables depend on the exact text
pub const REGULATES_ACTIVITY: &str = "activity directly negatively regulates activity of";

/// `X regulates act(Y)`
pub struct RegulatesActivity;

impl Converter for RegulatesActivity {
    fn name(&self) -> &'static str {
        "regulates_activity"
    }

    fn predicate(&self, _u: &Entity, _v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation == Relation::Regulates && data.object_is_activity()
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), REGULATES_ACTIVITY, v.label())
    }
}

fn mirna_targets_expression(u: &Entity, v: &Entity, data: &EdgeData) -> bool {
    u.function == Function::MiRna
        && matches!(v.function, Function::Rna | Function::Gene)
        && data.object.is_none()
        && both_concepts(u, v)
}

/// `m(X) decreases r(Y)`
pub struct MiRnaDecreasesExpression;

impl Converter for MiRnaDecreasesExpression {
    fn name(&self) -> &'static str {
        "mirna_decreases_expression"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation == Relation::Decreases && mirna_targets_expression(u, v, data)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "decreases expression of", v.label())
    }
}

/// `m(X) directlyDecreases r(Y)`
pub struct MiRnaDirectlyDecreasesExpression;

impl Converter for MiRnaDirectlyDecreasesExpression {
    fn name(&self) -> &'static str {
        "mirna_directly_decreases_expression"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation == Relation::DirectlyDecreases && mirna_targets_expression(u, v, data)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "directly decreases expression of", v.label())
    }
}

/// Relations rendered with a fixed predicate between two concepts
macro_rules! simple_converter {
    ($(#[$doc:meta])* $name:ident, $id:literal, $relation:path, $predicate:literal) => {
        $(#[$doc])*
        pub struct $name;

        impl Converter for $name {
            fn name(&self) -> &'static str {
                $id
            }

            fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
                data.relation == $relation && both_concepts(u, v)
            }

            fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
                Triple::new(u.label(), $predicate, v.label())
            }
        }
    };
}

simple_converter!(
    /// `X isA Y`
    IsA, "is_a", Relation::IsA, "is a"
);
simple_converter!(
    /// `X equivalentTo Y`
    Equivalence, "equivalence", Relation::EquivalentTo, "equivalent to"
);
simple_converter!(
    /// `X association Y`
    Association, "association", Relation::Association, "association"
);

/// Any of the correlation relations; the predicate keeps the BEL relation name
pub struct Correlation;

impl Converter for Correlation {
    fn name(&self) -> &'static str {
        "correlation"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation.is_correlative() && both_concepts(u, v)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> Triple {
        Triple::new(u.label(), data.relation.as_bel(), v.label())
    }
}

fn drug_to_disease(u: &Entity, v: &Entity) -> bool {
    u.function == Function::Abundance && v.function == Function::Pathology && both_concepts(u, v)
}

/// `a(drug) decreases path(disease)`
pub struct DrugIndication;

impl Converter for DrugIndication {
    fn name(&self) -> &'static str {
        "drug_indication"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation.is_decrease() && drug_to_disease(u, v)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "indication for", v.label())
    }
}

/// `a(drug) increases path(side effect)`
pub struct DrugSideEffect;

impl Converter for DrugSideEffect {
    fn name(&self) -> &'static str {
        "drug_side_effect"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation.is_increase() && drug_to_disease(u, v)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "side effect", v.label())
    }
}

/// `X regulates Y` with an unmodified subject
///
/// Object modifiers are not inspected; activity objects are claimed
/// earlier by [`RegulatesActivity`].
pub struct RegulatesAmount;

impl Converter for RegulatesAmount {
    fn name(&self) -> &'static str {
        "regulates_amount"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation == Relation::Regulates && data.subject.is_none() && both_concepts(u, v)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "regulates amount of", v.label())
    }
}

/// `X increases Y` with no modifiers
pub struct IncreasesAmount;

impl Converter for IncreasesAmount {
    fn name(&self) -> &'static str {
        "increases_amount"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation.is_increase() && data.is_unmodified() && both_concepts(u, v)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "increases amount of", v.label())
    }
}

/// `X decreases Y` with no modifiers
pub struct DecreasesAmount;

impl Converter for DecreasesAmount {
    fn name(&self) -> &'static str {
        "decreases_amount"
    }

    fn predicate(&self, u: &Entity, v: &Entity, _key: &EdgeKey, data: &EdgeData) -> bool {
        data.relation.is_decrease() && data.is_unmodified() && both_concepts(u, v)
    }

    fn convert(&self, u: &Entity, v: &Entity, _key: &EdgeKey, _data: &EdgeData) -> Triple {
        Triple::new(u.label(), "decreases amount of", v.label())
    }
}

/// Ordered list of converters; the first matching rule wins.
pub struct ConverterRegistry {
    converters: Vec<Box<dyn Converter>>,
}

impl Default for ConverterRegistry {
    /// The standard rules in priority order
    fn default() -> Self {
        Self::empty()
            .with(NamedComplexHasComponent)
            .with(PartOfNamedComplex)
            .with(PartOfBiologicalProcess)
            .with(RegulatesActivity)
            .with(MiRnaDecreasesExpression)
            .with(MiRnaDirectlyDecreasesExpression)
            .with(IsA)
            .with(Equivalence)
            .with(Correlation)
            .with(Association)
            .with(DrugIndication)
            .with(DrugSideEffect)
            .with(RegulatesAmount)
            .with(IncreasesAmount)
            .with(DecreasesAmount)
    }
}

impl ConverterRegistry {
    /// Create a registry with no rules
    pub fn empty() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// Shared instance of the standard rules
    pub fn standard() -> &'static ConverterRegistry {
        static STANDARD: OnceLock<ConverterRegistry> = OnceLock::new();
        STANDARD.get_or_init(ConverterRegistry::default)
    }

    /// Append a rule at the lowest priority
    pub fn with<C: Converter + 'static>(mut self, converter: C) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    /// Rule names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.converters.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// First rule whose predicate accepts the edge
    pub fn find(&self, u: &Entity, v: &Entity, key: &EdgeKey, data: &EdgeData) -> Option<&dyn Converter> {
        self.converters
            .iter()
            .map(|c| c.as_ref())
            .find(|c| c.predicate(u, v, key, data))
    }
}
