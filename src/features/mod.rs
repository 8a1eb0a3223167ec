pub mod claim;
pub mod identity;
pub mod publish;
