//! Seeding plugins: the curated builder, the Pareto filler, the record-set
//! linker and template maintenance.

pub mod curated;
pub mod curated_data;
pub mod linker;
pub mod pareto;
pub mod records;
pub mod templates;
