// ============================================================================
// Domain Models Module
// Hypercomplex numbers, coordinate vectors and matrices
// ============================================================================

pub mod family;
pub mod hypercomplex;
pub mod matrix;
pub mod vector;

pub use family::{Family, FamilyThresholds};
pub use hypercomplex::{DecimalHypercomplex, Hypercomplex, Hypercomplex64};
pub use matrix::{DecimalMatrix, Matrix, Matrix64};
pub use vector::{DecimalVector, Vector, Vector64};
