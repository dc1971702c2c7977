//! Use cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`GenerationPass`] | One complete registration pass over a build unit |
//! | [`PlanReport`] | Registrations and diagnostics of a pass, without emission |

pub mod generation_pass;
pub mod plan_report;

pub use generation_pass::{
    GenerationPass, InvalidAnnotationPolicy, PassInput, PassOptions, PassOutcome,
};
pub use plan_report::{PlanReport, PlanSummary, Reporter};
