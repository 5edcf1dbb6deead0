//! Shared helpers for fogwalk benchmark suites.

use fogwalk_harness::worlds::random_field::RandomField;
use fogwalk_kernel::grid::generate::GenerationConfig;

/// A named random-field workload.
pub struct Regime {
    pub name: &'static str,
    pub world: RandomField,
}

fn regime(name: &'static str, size: usize, blocked_probability: f64, seed: u64) -> Regime {
    Regime {
        name,
        world: RandomField {
            config: GenerationConfig {
                size,
                blocked_probability,
                seed,
            },
        },
    }
}

/// Workloads spanning open fields, the default density, and dense fields
/// where most runs end stuck after many replans.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        regime("open_32", 32, 0.0, 1),
        regime("sparse_32", 32, 0.1, 1),
        regime("default_32", 32, 0.25, 1),
        regime("dense_32", 32, 0.4, 1),
        regime("default_64", 64, 0.25, 1),
    ]
}
