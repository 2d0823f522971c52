use crate::core::models::{
    BinaryPrediction,
    FlatPrediction,
};

/// Messages the background workers push to the GUI. Errors cross this
/// boundary as their `Display` strings; the pages show exactly one of them
/// per failed submission.
#[derive(Debug, Clone)]
pub enum TaskResult {
    BaseProgress(f32),
    BasePrediction(Result<FlatPrediction, String>),

    BinaryProgress(f32),
    BinaryPrediction(Result<BinaryPrediction, String>),
}
