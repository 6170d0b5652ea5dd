//! Practice games: answer stats, weighted question ordering, and the
//! built-in drills.

pub mod drills;
pub mod selection;
pub mod session;
pub mod stats;
pub mod store;

pub use drills::{ChordQuestion, DrillMode, IntervalQuestion, NoteQuestion};
pub use selection::{build_weighted_queue, item_weight, Drillable};
pub use session::{Question, TrainingSession};
pub use stats::{ModeStats, StatsData, StatsEntry};
pub use store::{MemoryStatsStore, StatsStore};
