mod error;
mod execute;
mod io;
mod recipe;
mod report;

#[cfg(test)]
mod tests;

pub use error::{Result, WorkflowError};
pub use execute::run_recipe;
pub use io::{load_recipe, save_report};
pub use recipe::CropRecipe;
pub use report::CropReport;
