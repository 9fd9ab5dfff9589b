use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color, // Cyan
    pub accent: Color,  // Light cyan for the second title line
    pub comment: Color, // Grey
    pub badge_bg: Color,
    pub header_solid_bg: Color,
    pub section_alt_bg: Color,
    pub tag_bg: Color,
    pub button_fg: Color,
    pub nav_active: Color,
    pub nav_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(17, 24, 39),
    fg: Color::Rgb(229, 231, 235),
    primary: Color::Rgb(34, 211, 238),
    accent: Color::Rgb(103, 232, 249),
    comment: Color::Rgb(156, 163, 175),
    badge_bg: Color::Rgb(22, 78, 99),
    header_solid_bg: Color::Rgb(31, 41, 55), // gray-800 once scrolled
    section_alt_bg: Color::Rgb(24, 32, 47),
    tag_bg: Color::Rgb(55, 65, 81),
    button_fg: Color::Black,
    nav_active: Color::Rgb(34, 211, 238),
    nav_normal: Color::Rgb(209, 213, 219),
    status_bg: Color::Rgb(50, 50, 70),
};
