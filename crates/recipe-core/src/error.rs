use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Unsupported data format: {0}")]
    UnsupportedFormat(String),

    #[error("Recipe #{index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("Duplicate recipe label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid quantity for '{ingredient}' in '{recipe}': {reason}")]
    InvalidQuantity {
        recipe: String,
        ingredient: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
