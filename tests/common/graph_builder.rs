//! Small builder for BEL test graphs

use biokeen::{BelGraph, EdgeData, EdgeKey, Entity, Function, Modifier, Relation};

/// Builds a [`BelGraph`] statement by statement
#[derive(Default)]
pub struct GraphBuilder {
    graph: BelGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement keyed by its data
    pub fn statement(mut self, u: &Entity, relation: Relation, v: &Entity) -> Self {
        self.graph
            .add_edge(u.clone(), v.clone(), EdgeData::new(relation))
            .expect("edge data serializes");
        self
    }

    /// Add a statement with full edge data
    pub fn edge(mut self, u: &Entity, v: &Entity, data: EdgeData) -> Self {
        self.graph
            .add_edge(u.clone(), v.clone(), data)
            .expect("edge data serializes");
        self
    }

    /// Add a statement under an explicit key
    pub fn keyed(mut self, u: &Entity, v: &Entity, key: &str, data: EdgeData) -> Self {
        self.graph
            .add_edge_with_key(u.clone(), v.clone(), EdgeKey::from(key), data);
        self
    }

    pub fn build(self) -> BelGraph {
        self.graph
    }
}

pub fn hgnc(name: &str, identifier: &str) -> Entity {
    Entity::protein("HGNC", name).with_identifier(identifier)
}

/// A graph touching every standard rule once, plus two unhandled edges
pub fn pathway_graph() -> BelGraph {
    let ap1 = Entity::new(Function::Complex, "FPLX", "AP1");
    let fos = hgnc("FOS", "3796");
    let jun = hgnc("JUN", "6204");
    let akt1 = hgnc("AKT1", "391");
    let gsk3b = hgnc("GSK3B", "4617");
    let apoptosis = Entity::new(Function::BiologicalProcess, "GO", "apoptotic process")
        .with_identifier("0006915");
    let mir21 = Entity::new(Function::MiRna, "MIRBASE", "hsa-mir-21");
    let pten_rna = Entity::new(Function::Rna, "HGNC", "PTEN").with_identifier("9588");
    let pten_gene = Entity::new(Function::Gene, "HGNC", "PTEN").with_identifier("9588");
    let ad = Entity::new(Function::Pathology, "MESH", "Alzheimer Disease").with_identifier("D000544");
    let dementia = Entity::new(Function::Pathology, "MESH", "Dementia").with_identifier("D003704");
    let aspirin = Entity::abundance("CHEBI", "aspirin").with_identifier("15365");
    let pain = Entity::new(Function::Pathology, "MESH", "Pain").with_identifier("D010146");
    let bleeding = Entity::new(Function::Pathology, "MESH", "Hemorrhage").with_identifier("D006470");

    GraphBuilder::new()
        .statement(&ap1, Relation::HasComponent, &fos)
        .statement(&jun, Relation::PartOf, &ap1)
        .statement(&gsk3b, Relation::PartOf, &apoptosis)
        .edge(
            &akt1,
            &gsk3b,
            EdgeData::new(Relation::Regulates).with_object(Modifier::activity().with_effect("kin")),
        )
        .statement(&mir21, Relation::Decreases, &pten_rna)
        .statement(&mir21, Relation::DirectlyDecreases, &pten_rna)
        .statement(&ad, Relation::IsA, &dementia)
        .statement(&fos, Relation::EquivalentTo, &jun)
        .statement(&fos, Relation::PositiveCorrelation, &jun)
        .statement(&akt1, Relation::Association, &ad)
        .statement(&aspirin, Relation::Decreases, &pain)
        .statement(&aspirin, Relation::Increases, &bleeding)
        .statement(&akt1, Relation::Regulates, &fos)
        .statement(&akt1, Relation::Increases, &jun)
        .statement(&gsk3b, Relation::Decreases, &jun)
        .statement(&pten_gene, Relation::TranscribedTo, &pten_rna)
        .edge(
            &akt1,
            &gsk3b,
            EdgeData::new(Relation::Increases).with_subject(Modifier::activity()),
        )
        .build()
}
