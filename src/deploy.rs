//! Deploy operations: the six rollout state machines.

mod commands;

pub use commands::{CreateTagRequest, DeployCommandService, DeployRequest};
