#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKinds {
    #[default]
    Tint,
    FireGradient,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Tint, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tint => "Tint",
            Self::FireGradient => "Fire gradient",
        }
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
