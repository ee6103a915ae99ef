pub mod client;
pub mod endpoint;
mod operation;
mod protocol;
mod signer;
pub mod types;

pub use client::{KinesisClient, KinesisClientBuilder};
pub use operation::Operation;
