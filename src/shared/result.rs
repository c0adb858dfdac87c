/// Result alias used by the application and adapter layers.
///
/// Domain services return typed `VisualizerError`s; they convert into
/// `anyhow::Error` with `?` once they cross into this layer.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
