//! featnorm normalization layer.
//!
//! Takes a parsed [`Feature`](model::Feature) and rewrites it into a
//! normalized shape that the render stage can print without further
//! decisions.
//!
//! ## What we do
//!
//! - Common-step detection: texts present in every scenario and outline
//!   move into the background
//! - Background merge: promoted texts are appended to an existing background,
//!   which ends up with every text listed once
//! - Role classification: every remaining step gets a Given/When/Then role,
//!   either the authored one or one inferred from a small rule table
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. Same feature and config in, same
//! feature out.
//!
//! ## Invariants worth knowing
//!
//! - Matching is by step text only; roles never affect commonality
//! - After normalization no background text appears in any scenario or outline
//! - Every scenario and outline step has `role: Some(_)` afterwards
//! - No scenario or outline starts with an `And` step
//! - `normalize(normalize(f)) == normalize(f)`

mod classify;
mod common;
mod config;
mod pipeline;

pub use crate::classify::{classify_role, infer_role};
pub use crate::common::{find_common_steps, CommonSteps};
pub use crate::config::{CountPolicy, NormalizeConfig, RolePolicy};
pub use crate::pipeline::{merge_background, normalize, normalize_with_config};
