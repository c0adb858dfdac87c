/// Factories for selecting adapters from application-level choices
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
