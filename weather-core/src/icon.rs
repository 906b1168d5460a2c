use serde::Serialize;

/// Icon shown next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Mist,
    Snow,
}

/// Provider condition labels with a dedicated icon. Labels are matched exactly.
const ICON_TABLE: &[(&str, Icon)] = &[
    ("Clouds", Icon::Clouds),
    ("Clear", Icon::Clear),
    ("Rain", Icon::Rain),
    ("Drizzle", Icon::Drizzle),
    ("Mist", Icon::Mist),
    ("Snow", Icon::Snow),
];

/// Used for every label missing from the table.
pub const DEFAULT_ICON: Icon = Icon::Clear;

/// Map a condition label (`weather[0].main`) to its icon.
pub fn icon_for(condition: &str) -> Icon {
    ICON_TABLE
        .iter()
        .find(|(label, _)| *label == condition)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Clear => "clear",
            Icon::Clouds => "clouds",
            Icon::Rain => "rain",
            Icon::Drizzle => "drizzle",
            Icon::Mist => "mist",
            Icon::Snow => "snow",
        }
    }

    /// Image asset file name, e.g. `rain.png`.
    pub fn asset_name(&self) -> String {
        format!("{}.png", self.as_str())
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Clear => "☀",
            Icon::Clouds => "☁",
            Icon::Rain => "🌧",
            Icon::Drizzle => "🌦",
            Icon::Mist => "🌫",
            Icon::Snow => "❄",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
