//! Property 1: Equivalence with independent oracles.
//!
//! For any generated graph, the Kruskal forest must match Prim's oracle on
//! total weight, edge count, and component count. Tiny graphs are also
//! checked against an exhaustive search.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;

use super::brute_force::brute_force_forest_weight;
use super::helpers::total_weight_i128;
use super::oracle::prim_forest;
use super::types::MstFixture;

/// Runs the Prim's oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph()).map_err(|e| {
        TestCaseError::fail(format!(
            "kruskal failed: {e} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;
    let oracle = prim_forest(fixture.vertex_count, &fixture.edges);
    let context = format!(
        "(distribution={:?}, vertices={}, edges={})",
        fixture.distribution,
        fixture.vertex_count,
        fixture.edges.len(),
    );

    let kruskal_weight = total_weight_i128(forest.edges());
    if kruskal_weight != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={kruskal_weight}, prim={} {context}",
            oracle.total_weight,
        )));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, prim={} {context}",
            forest.edges().len(),
            oracle.edge_count,
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, prim={} {context}",
            forest.component_count(),
            oracle.component_count,
        )));
    }
    Ok(())
}

/// Runs the exhaustive-search property for a tiny fixture.
pub(super) fn run_brute_force_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph())
        .map_err(|e| TestCaseError::fail(format!("kruskal failed: {e}")))?;
    let Some(expected) = brute_force_forest_weight(fixture.vertex_count, &fixture.edges) else {
        return Err(TestCaseError::reject("edge list too large to enumerate"));
    };

    let actual = i128::from(forest.total_weight());
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "total weight {actual} is not minimal: exhaustive search found {expected} \
             (vertices={}, edges={:?})",
            fixture.vertex_count, fixture.edges,
        )));
    }
    Ok(())
}
