// ============================================================================
// Hypercomplex Families
// Named classification thresholds for real/complex/quaternion/... numbers
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Algebra family a hypercomplex value may belong to.
///
/// Families are nested: every real number is also complex, every complex
/// number is also a quaternion, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Family {
    Real,
    Complex,
    Quaternion,
    Octonion,
    Sedenion,
}

impl Family {
    /// All families, narrowest first.
    pub const ALL: [Family; 5] = [
        Family::Real,
        Family::Complex,
        Family::Quaternion,
        Family::Octonion,
        Family::Sedenion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Family::Real => "real",
            Family::Complex => "complex",
            Family::Quaternion => "quaternion",
            Family::Octonion => "octonion",
            Family::Sedenion => "sedenion",
        }
    }
}

/// First imaginary index that must be zero for a value to belong to each
/// family.
///
/// A value belongs to a family when every imaginary coefficient at or past
/// the family's index is zero. Real numbers always start at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FamilyThresholds {
    pub complex: usize,
    pub quaternion: usize,
    pub octonion: usize,
    pub sedenion: usize,
}

impl FamilyThresholds {
    /// Boundaries used by the `is_*` predicates on `Hypercomplex`.
    ///
    /// The octonion boundary admits eight imaginary coefficients (one more
    /// than the seven imaginary units of the octonion algebra).
    pub const REFERENCE: Self = Self {
        complex: 1,
        quaternion: 3,
        octonion: 8,
        sedenion: 15,
    };

    /// Boundaries matching the imaginary-unit count of each algebra
    /// (1, 3, 7 and 15).
    pub const CONVENTIONAL: Self = Self {
        complex: 1,
        quaternion: 3,
        octonion: 7,
        sedenion: 15,
    };

    /// Index from which all imaginary coefficients must be zero.
    #[inline]
    pub const fn zero_from(&self, family: Family) -> usize {
        match family {
            Family::Real => 0,
            Family::Complex => self.complex,
            Family::Quaternion => self.quaternion,
            Family::Octonion => self.octonion,
            Family::Sedenion => self.sedenion,
        }
    }
}

impl Default for FamilyThresholds {
    fn default() -> Self {
        Self::REFERENCE
    }
}
