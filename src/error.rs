use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart rasterization failed: {0}")]
    Rasterize(String),
    #[error("chart rasterization failed: cannot allocate {width}x{height} surface")]
    Surface { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
