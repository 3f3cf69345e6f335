pub mod checkpoints;
pub mod error;
pub mod header;
pub mod node;
pub mod response;
pub mod sync;
