use std::fmt::{Display, Formatter};

/// Renders a slice as `[a, b, c]` using each item's [Display].
pub struct DisplaySlice<'a, D: Display> {
    items: &'a [D],
}

impl<'a, D: Display> Display for DisplaySlice<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplaySlice { items }
    }
}
