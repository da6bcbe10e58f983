//! End-to-end conversion from graph to exported table

mod common;

use biokeen::convert::converters::REGULATES_ACTIVITY;
use biokeen::{
    get_triple, read_table, to_triples, write_summary, write_table, BelGraph, EdgeData, Entity,
    Function, KeyedGraph, Modifier, Relation, Summary, Triple,
};
use common::graph_builder::hgnc;
use common::{pathway_graph, GraphBuilder};

#[test]
fn every_rule_produces_its_triple() {
    let table = to_triples(&pathway_graph());
    let expected = vec![
        Triple::new("CHEBI:15365", "indication for", "MESH:D010146"),
        Triple::new("CHEBI:15365", "side effect", "MESH:D006470"),
        Triple::new("HGNC:3796", "equivalent to", "HGNC:6204"),
        Triple::new("HGNC:3796", "part of", "complex(FPLX:AP1)"),
        Triple::new("HGNC:3796", "positiveCorrelation", "HGNC:6204"),
        Triple::new("HGNC:391", "activity directly negatively regulates activity of", "HGNC:4617"),
        Triple::new("HGNC:391", "association", "MESH:D000544"),
        Triple::new("HGNC:391", "increases amount of", "HGNC:6204"),
        Triple::new("HGNC:391", "regulates amount of", "HGNC:3796"),
        Triple::new("HGNC:4617", "decreases amount of", "HGNC:6204"),
        Triple::new("HGNC:4617", "part of", "GO:0006915"),
        Triple::new("HGNC:6204", "part of", "complex(FPLX:AP1)"),
        Triple::new("MESH:D000544", "is a", "MESH:D003704"),
        Triple::new("MIRBASE:hsa-mir-21", "decreases expression of", "HGNC:9588"),
        Triple::new("MIRBASE:hsa-mir-21", "directly decreases expression of", "HGNC:9588"),
    ];
    assert_eq!(table.rows(), expected.as_slice());
}

#[test]
fn conversion_is_deterministic() {
    let graph = pathway_graph();
    let first = to_triples(&graph);
    let second = to_triples(&graph);
    assert_eq!(first, second);

    let dir = tempfile::tempdir().unwrap();
    let (a, b) = (dir.path().join("a.tsv"), dir.path().join("b.tsv"));
    write_table(&first, &a).unwrap();
    write_table(&second, &b).unwrap();
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn output_rows_are_sorted() {
    let table = to_triples(&pathway_graph());
    assert!(table.rows().windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn parallel_keys_with_same_triple_appear_once() {
    let a = hgnc("A", "1");
    let b = hgnc("B", "2");
    let graph = GraphBuilder::new()
        .keyed(&a, &b, "first", EdgeData::new(Relation::Association).with_citation("PMID:1"))
        .keyed(&a, &b, "second", EdgeData::new(Relation::Association).with_citation("PMID:2"))
        .build();
    assert_eq!(graph.number_of_edges(), 2);
    assert_eq!(
        to_triples(&graph).rows(),
        &[Triple::new("HGNC:1", "association", "HGNC:2")]
    );
}

#[test]
fn regulates_activity_takes_priority() {
    let a = hgnc("A", "1");
    let b = hgnc("B", "2");
    let graph = GraphBuilder::new()
        .edge(&a, &b, EdgeData::new(Relation::Regulates).with_object(Modifier::activity()))
        .build();
    let (u, v, key) = graph.edges().next().unwrap();
    let triple = get_triple(&graph, u, v, key).unwrap();
    assert_eq!(triple, Triple::new("HGNC:1", REGULATES_ACTIVITY, "HGNC:2"));
}

#[test]
fn unmatched_edges_produce_no_rows() {
    let gene = Entity::new(Function::Gene, "HGNC", "TP53");
    let rna = Entity::new(Function::Rna, "HGNC", "TP53");
    let graph = GraphBuilder::new()
        .statement(&gene, Relation::TranscribedTo, &rna)
        .statement(&gene, Relation::Orthologous, &rna)
        .build();
    assert!(to_triples(&graph).is_empty());
}

#[test]
fn empty_graph_writes_nothing() {
    let table = to_triples(&BelGraph::new());
    assert_eq!(table.len(), 0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.keen.tsv");
    assert!(!write_table(&table, &path).unwrap());
    assert!(!path.exists());
}

#[test]
fn unnamed_entities_render_as_bel() {
    let member_list = Entity::list(
        Function::Complex,
        vec![hgnc("FOS", "3796"), hgnc("JUN", "6204")],
    );
    let target = hgnc("MAPK8", "6881");
    let graph = GraphBuilder::new()
        .statement(&target, Relation::PartOf, &Entity::new(Function::BiologicalProcess, "GO", "signaling"))
        .statement(&member_list, Relation::Association, &target)
        .build();

    // the list complex is not a concept, so association does not apply
    let table = to_triples(&graph);
    assert_eq!(table.rows(), &[Triple::new("HGNC:6881", "part of", "GO:signaling")]);

    let label = member_list.label();
    assert_eq!(label, "complex(p(HGNC:3796 ! FOS), p(HGNC:6204 ! JUN))");
}

#[test]
fn has_component_example() {
    let complex = Entity::new(Function::Complex, "GO", "C");
    let member = Entity::protein("HGNC", "p").with_identifier("1");
    let graph = GraphBuilder::new()
        .statement(&complex, Relation::HasComponent, &member)
        .build();
    assert_eq!(
        to_triples(&graph).rows(),
        &[Triple::new("HGNC:1", "part of", complex.to_string())]
    );
}

#[test]
fn export_and_summary_files() {
    let table = to_triples(&pathway_graph());
    let dir = tempfile::tempdir().unwrap();
    let tsv = dir.path().join("pathway.keen.tsv");
    let json = dir.path().join("pathway.keen.summary.json");

    assert!(write_table(&table, &tsv).unwrap());
    assert_eq!(read_table(&tsv).unwrap(), table);

    let summary = write_summary(&table, &json, 2).unwrap();
    assert_eq!(summary.relations, 15);
    assert_eq!(summary.namespaces["HGNC"], 18);
    assert_eq!(summary.namespaces["complex(FPLX"], 2);

    let reloaded: Summary = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(reloaded, summary);
}

#[test]
fn graph_document_file_converts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pathway.json");
    pathway_graph().to_json_path(&path).unwrap();

    let graph = BelGraph::from_json_path(&path).unwrap();
    assert_eq!(to_triples(&graph), to_triples(&pathway_graph()));
}
