//! Document model for Gherkin feature normalization.
//!
//! Plain data, no behavior beyond small builders and iterators. Every other
//! stage (ingest, normalize, render) reads and writes these types.
//!
//! ```rust
//! use model::{Feature, Scenario, StepRole};
//!
//! let feature = Feature::new("User Login")
//!     .with_background_step("the user has opened the login page")
//!     .with_scenario(
//!         Scenario::new("Valid credentials")
//!             .with_tag("smoke")
//!             .with_role_step(StepRole::When, "the user clicks the login button"),
//!     );
//!
//! assert_eq!(feature.step_count(), 2);
//! assert_eq!(feature.scenarios[0].tags, vec!["smoke".to_string()]);
//! ```

mod feature;
mod scenario;
mod step;

pub use crate::feature::Feature;
pub use crate::scenario::{ExampleRow, ExampleTable, Scenario, ScenarioOutline, Tag};
pub use crate::step::{Step, StepRole};
