pub mod legacy;
pub mod scheduler;
