use crate::analysis::Category;
use thiserror::Error;

/// Errors that can occur while loading a workflow graph from disk or a string.
#[derive(Error, Debug, Clone)]
pub enum GraphLoadError {
    #[error("Could not read graph file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse graph JSON: {0}")]
    Json(String),
}

/// Errors that can occur when converting a custom user format into a flowstat `WorkflowGraph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while registering user-supplied categorization rules.
#[derive(Error, Debug, Clone)]
pub enum CategoryRuleError {
    #[error("Pattern '{pattern}' for category '{category}' is not a valid regular expression: {message}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        message: String,
    },

    #[error("Category '{0}' is the fallback and cannot carry patterns")]
    FallbackCategory(Category),
}
