//! Public library API for rendering templates against structured "dot" data.

/// Format readers, the unified value model, file probes and dot-data resolution.
pub mod data;
/// Engine-independent table of functions callable from templates.
pub mod funcs;
/// Template loading and rendering on top of minijinja.
pub mod render;
