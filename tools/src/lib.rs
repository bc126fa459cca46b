//! Inspection and editing tools for Borderlands profile files.
//!
//! The `bagpipe` binary is a thin shell over this crate:
//!
//! - [`report`] renders file structure, entry dumps and rewards tables
//! - [`edit`] applies the id-addressed edits the subcommands expose
//! - [`logging`] installs the `tracing` subscriber

pub mod edit;
pub mod logging;
pub mod report;

pub use report::{
    advisory_notice, format_dump_pretty, format_inspect_report, format_rewards, inspect_profile,
    reward_views, EntryView, InspectReport, ProfileDump, RewardView, ADVISORY_NOTICE,
};
