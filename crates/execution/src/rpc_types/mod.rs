pub mod block;
pub mod eth_syncing;
