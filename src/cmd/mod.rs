//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module   | Command handled                          |
//! |----------|------------------------------------------|
//! | `serve`  | `Serve` (HTTP API)                       |
//! | `triage` | `Triage` (batch analysis of a repo)      |
//! | `plan`   | `Plan` (solution plan for one issue)     |

pub mod plan;
pub mod serve;
pub mod triage;

pub use plan::cmd_plan;
pub use serve::cmd_serve;
pub use triage::cmd_triage;
