use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            positive: Color::Rgb(90, 190, 120),
            negative: Color::Rgb(220, 90, 90),
            error: Color::Rgb(200, 80, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 249, 250),
            text: Color::Rgb(33, 37, 41),
            dim: Color::Rgb(108, 117, 125),
            accent: Color::Rgb(13, 110, 253),
            border: Color::Rgb(206, 212, 218),
            positive: Color::Rgb(25, 135, 84),
            negative: Color::Rgb(220, 53, 69),
            error: Color::Rgb(220, 53, 69),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
