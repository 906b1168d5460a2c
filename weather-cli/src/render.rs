use weather_core::{View, WeatherSnapshot};

/// Multi-line card for a snapshot, laid out like the widget.
pub fn card(snapshot: &WeatherSnapshot) -> String {
    let icon = snapshot.icon();
    let mut out = format!(
        "{}  {}\n{}\n{}\n\nHumidity    {}\nWind Speed  {}",
        icon.glyph(),
        icon,
        snapshot.temperature_label(),
        snapshot.location_name,
        snapshot.humidity_label(),
        snapshot.wind_label(),
    );

    if let Some(at) = snapshot.observation_time {
        out.push_str(&format!("\nUpdated     {}", at.format("%Y-%m-%d %H:%M UTC")));
    }

    out
}

/// Text for the whole result area.
pub fn view(view: &View) -> String {
    match view {
        View::Empty => String::new(),
        View::Weather(snapshot) => card(snapshot),
        View::Error(msg) => msg.clone(),
    }
}

pub fn json(view: &View) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
