// ============================================================================
// Rendering Interface
// Contract consumed by text and LaTeX presentation code
// ============================================================================

use std::fmt;

/// Plain-text and LaTeX forms of a numeric value.
///
/// `Display` provides the plain-text form. Rendering never alters the
/// underlying value.
pub trait MathRender: fmt::Display {
    /// LaTeX source for the value.
    fn to_latex(&self) -> String;

    /// Plain-text form, identical to `Display`.
    fn to_plain_text(&self) -> String {
        self.to_string()
    }
}

/// Label of the imaginary unit at `index` (0-based).
///
/// The first four units are `i`, `j`, `k`, `l`; later units get the
/// synthetic basis label `e{index + 1}`.
pub fn unit_label(index: usize) -> String {
    match index {
        0 => "i".to_string(),
        1 => "j".to_string(),
        2 => "k".to_string(),
        3 => "l".to_string(),
        _ => format!("e{}", index + 1),
    }
}

/// LaTeX form of the imaginary unit at `index`.
pub fn latex_unit_label(index: usize) -> String {
    if index < 4 {
        format!("\\mathbf{{{}}}", unit_label(index))
    } else {
        format!("\\mathbf{{e}}_{{{}}}", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain(i32);

    impl fmt::Display for Plain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "<{}>", self.0)
        }
    }

    impl MathRender for Plain {
        fn to_latex(&self) -> String {
            format!("\\langle {} \\rangle", self.0)
        }
    }

    #[test]
    fn test_default_plain_text_uses_display() {
        let value = Plain(3);
        assert_eq!(value.to_plain_text(), "<3>");
        assert_eq!(value.to_latex(), "\\langle 3 \\rangle");
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(0), "i");
        assert_eq!(unit_label(3), "l");
        assert_eq!(unit_label(4), "e5");
        assert_eq!(unit_label(14), "e15");
    }

    #[test]
    fn test_latex_unit_labels() {
        assert_eq!(latex_unit_label(1), "\\mathbf{j}");
        assert_eq!(latex_unit_label(4), "\\mathbf{e}_{5}");
    }
}
