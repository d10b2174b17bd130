use std::path::PathBuf;

use thiserror::Error;
use uismith_color::ColorError;

use crate::palette::PaletteRole;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(
        "{role} cannot reach {required}:1 contrast by changing lightness (best {achieved:.2}:1)"
    )]
    ContrastUnreachable {
        role: PaletteRole,
        achieved: f64,
        required: f64,
    },

    #[error("unknown {kind} `{name}`")]
    UnknownName { kind: &'static str, name: String },

    #[error("failed to access theme file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("theme store is unavailable: {0}")]
    Store(String),
}
