pub mod git;
pub mod marker;
pub mod workflow;
