use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    struct Half;

    impl Latex for Half {
        fn fmt_latex(&self, f: &mut Formatter) -> Result {
            write!(f, "\\frac{{1}}{{2}}")
        }
    }

    #[test]
    fn as_display_uses_latex() {
        assert_eq!(Half.as_display().to_string(), "\\frac{1}{2}");
        assert_eq!(format!("x = {}", Half.as_display()), "x = \\frac{1}{2}");
    }
}
