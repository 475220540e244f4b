pub mod common;
pub mod expense;
pub mod project;
pub mod time_entry;

pub use common::{Displayable, Identifiable};
pub use expense::{Expense, ExpenseCategory};
pub use project::{Lifecycle, PlannedBudget, Project};
pub use time_entry::TimeEntry;
