use crate::ir::ShapeType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("shield padding {shield} is not supported for {shape_type:?} shapes")]
    InvalidConfiguration { shape_type: ShapeType, shield: u32 },
    #[error("invalid shape size {width}x{height}: both dimensions must be positive")]
    InvalidSize { width: f64, height: f64 },
    #[error("internal invariant violated: {message}")]
    InternalInvariant { message: String },
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
    #[error("image for shape {uid} does not provide {capability}")]
    MissingCapability {
        uid: String,
        capability: &'static str,
    },
    #[error("shape name `{name}` is used more than once")]
    DuplicateName { name: String },
    #[error("layout output line {line}: {message}")]
    LayoutOutput { line: usize, message: String },
    #[error("document JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::InternalInvariant {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
