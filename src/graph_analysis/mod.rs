/// Graph analysis domain - pure dependency graph logic with no I/O
pub mod domain;
pub mod services;
