use serde::{Deserialize, Serialize};

/// Error body returned by the checkpoint endpoint on a denied submission.
/// `success` is always false here; the reason is shown to the user verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeniedBody {
    pub success: bool,
    pub reason: String,
}
