//! Indexed color palette.

/// Index of a color within a [`Palette`].
pub type ColorIndex = usize;

/// Ordered set of named colors the brush cycles through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Creates a palette from color names, in brush cycle order.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// The four default colors.
    pub fn standard() -> Self {
        Self::new(["indigo", "taupe", "veridian", "peach"])
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether `index` refers to a color in this palette.
    pub fn contains(&self, index: ColorIndex) -> bool {
        index < self.colors.len()
    }

    /// Name of the color at `index`.
    pub fn name(&self, index: ColorIndex) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    /// Iterates over the color names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }
}
