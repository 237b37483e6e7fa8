//! Cycle identifiers through naming styles.
//!
//! Each line of a selection is classified by its current shape and converted
//! to the next style: `user_name → UserName → USER_NAME → userName →
//! user_name`. The conversions are pure functions over `&str`.

pub mod classify;
pub mod cli;
pub mod config;
pub mod convert;
pub mod cycle;
pub mod error;

pub use classify::{classify, Rotation, Rule};
pub use config::Config;
pub use convert::{to_camel_case, to_pascal_case, to_separated_case};
pub use cycle::{transform, Cycler, LineOutcome};
pub use error::{Error, Result};
