/// Dependency lookup domain: pure models and policies, no I/O
pub mod domain;
pub mod policies;
