use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub grid_line: Color,       // Dashed cell dividers
    pub grid_line_major: Color, // Row boxes and every-4th-cell dividers
    pub address: Color,         // Address labels above the rows
    pub value: Color,           // Hex byte text inside cells
    pub marker: Color,          // Base-pointer marker and its label
    pub note: Color,            // Write-log annotations
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    grid_line: Color::Rgb(108, 112, 134),       // Grey for dashed dividers
    grid_line_major: Color::Rgb(147, 153, 178), // Lighter grey for boxes
    address: Color::Rgb(108, 112, 134),
    value: Color::Rgb(205, 214, 244),
    marker: Color::Rgb(250, 179, 135), // Orange, it should stand out
    note: Color::Rgb(148, 226, 213),   // Cyan/teal
};
