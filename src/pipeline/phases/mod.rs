// Detection stages, in the order the orchestrator runs them.
//
// Resolution fixes the analysis root and executable. The evidence stages each
// produce a tag set that the orchestrator unions; conflict resolution turns the
// union into the final non-empty stack. Category extraction is independent of
// the stack.

#[path = "01_resolve.rs"]
pub mod resolve;
#[path = "02_frameworks.rs"]
pub mod frameworks;
#[path = "03_resources.rs"]
pub mod resources;
#[path = "04_dependencies.rs"]
pub mod dependencies;
#[path = "05_strings.rs"]
pub mod strings;
#[path = "06_conflicts.rs"]
pub mod conflicts;
#[path = "07_category.rs"]
pub mod category;
