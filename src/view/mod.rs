// View layer - terminal-agnostic result rendering
//
// The search results live in a retained surface model (`surface`),
// populated by the renderers (`render`), narrowed by the filter engine
// (`filter`), and orchestrated by the session controller (`controller`).
// Nothing in here knows about ratatui; the TUI draws from the surface
// model each frame and tests assert against it directly.

pub mod controller;
pub mod filter;
pub mod render;
pub mod surface;
