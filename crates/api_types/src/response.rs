use serde::{Deserialize, Serialize};

/// Standard beacon API envelope: `{ "data": … }` with optional metadata flags.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DataResponse<T> {
    pub execution_optimistic: Option<bool>,
    pub finalized: Option<bool>,
    pub data: T,
}
