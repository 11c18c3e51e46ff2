pub mod assign;
pub mod gesture;
pub mod history;
pub mod roster_ops;
pub mod selection;
pub mod stats;
