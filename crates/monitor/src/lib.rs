pub mod estimate;
pub mod history;
pub mod report;
pub mod sampler;
pub mod service;
pub mod snapshot;
