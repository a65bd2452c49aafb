/// Change-detection errors.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("regulation mismatch: expected {expected}, found {found} in passage {passage_id}")]
    RegulationMismatch {
        expected: String,
        found: String,
        passage_id: String,
    },
}
