// Sub-modules organized by entity
pub mod cycle;
pub mod dimension;
pub mod expense;
pub mod goal;
pub mod goal_evaluation;
pub mod record;
pub mod user_profile;

pub use cycle::*;
pub use dimension::*;
pub use expense::*;
pub use goal::*;
pub use goal_evaluation::*;
pub use record::*;
pub use user_profile::*;
