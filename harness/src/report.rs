//! `RunReport`: serializable summary of a replanning run with a content digest.
//!
//! The report is rendered through `serde_json::Value`, whose object map is
//! ordered by key, so the compact JSON bytes (and therefore the digest) do not
//! depend on struct field order or platform.

use serde::Serialize;

use fogwalk_kernel::grid::position::Position;
use fogwalk_kernel::proof::hash::{canonical_hash, grid_hash, ContentHash, HashDomain};
use fogwalk_search::path::Path;

use crate::policy::RunConfig;
use crate::runner::{RunResult, RunStatus};

/// Schema identifier embedded in every report.
pub const RUN_REPORT_SCHEMA_VERSION: &str = "fogwalk.run_report.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub schema_version: &'static str,
    pub scenario_id: String,
    pub dimension: usize,
    pub start: Position,
    pub goal: Position,
    pub config: RunConfig,
    pub status: RunStatus,
    pub steps_taken: usize,
    pub planning_rounds: usize,
    pub replans: usize,
    pub path_history: Vec<Path>,
    pub trajectory: Vec<Position>,
    /// Replay search over the final knowledge; `null` when none exists.
    pub final_path: Option<Path>,
    /// Final knowledge as `0`/`1` rows.
    pub final_knowledge: Vec<Vec<u8>>,
    /// [`grid_hash`] of the final knowledge.
    pub knowledge_digest: String,
}

impl RunReport {
    #[must_use]
    pub fn from_run(
        scenario_id: &str,
        start: Position,
        goal: Position,
        config: &RunConfig,
        result: &RunResult,
    ) -> Self {
        let knowledge = result.final_knowledge.as_grid();
        Self {
            schema_version: RUN_REPORT_SCHEMA_VERSION,
            scenario_id: scenario_id.to_string(),
            dimension: knowledge.dimension(),
            start,
            goal,
            config: config.clone(),
            status: result.status,
            steps_taken: result.steps_taken,
            planning_rounds: result.planning_rounds,
            replans: result.replans(),
            path_history: result.path_history.clone(),
            trajectory: result.trajectory.clone(),
            final_path: result.final_path.clone(),
            final_knowledge: knowledge.rows(),
            knowledge_digest: grid_hash(knowledge).as_str().to_string(),
        }
    }

    /// Compact JSON with keys sorted at every level.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for this type.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let value = serde_json::to_value(self)?;
        serde_json::to_vec(&value)
    }

    /// Content digest of [`Self::to_json_bytes`] under
    /// [`HashDomain::RunReport`].
    ///
    /// # Errors
    ///
    /// See [`Self::to_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(HashDomain::RunReport, &self.to_json_bytes()?))
    }
}
