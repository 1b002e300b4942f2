//! One module per admin operation.

pub mod edit;
pub mod publish;
pub mod pull;
pub mod upload;
