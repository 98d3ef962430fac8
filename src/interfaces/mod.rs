// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod render;

pub use render::{latex_unit_label, unit_label, MathRender};
