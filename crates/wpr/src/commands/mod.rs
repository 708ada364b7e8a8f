//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;
