/// Renderer adapters invoking external diagram tools
mod graphviz_renderer;

pub use graphviz_renderer::GraphvizRenderer;
