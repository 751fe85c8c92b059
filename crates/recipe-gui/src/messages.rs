use std::path::PathBuf;

use recipe_core::store::RecipeStore;

/// Results sent from the file-dialog thread back to the UI thread.
pub enum LoadResult {
    Loaded { path: PathBuf, store: RecipeStore },
    Error { message: String },
}
