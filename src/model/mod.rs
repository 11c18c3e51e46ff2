pub mod cell;
pub mod staff;
pub mod work_item;
pub mod schedule;
pub mod config;

pub use cell::*;
pub use staff::*;
pub use work_item::*;
pub use schedule::*;
pub use config::*;
