//! SCI Workload Common Library
//!
//! ブック読み込みに依存しない集計ロジックと型

pub mod cell;
pub mod row;
pub mod effort;
pub mod status;
pub mod types;
pub mod quality;
pub mod assignments;
pub mod dashboard;
pub mod error;

pub use cell::{CellValue, SheetGrid};
pub use row::{assignment_rows, AssignmentRow};
pub use effort::{effort_hours, EffortSize};
pub use status::StatusClass;
pub use types::{AssignmentDetail, PersonSummary, QualityReport, TeamSummary, WorkTypeTally};
pub use quality::{summarize_person, summarize_team, worst_quality};
pub use assignments::AssignmentCounts;
pub use dashboard::{CapacityBand, DashboardMember, DashboardSummary};
pub use error::{Error, Result};
