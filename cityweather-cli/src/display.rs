//! Terminal drawing of the widget's view model.

use cityweather_core::{ContentView, ViewModel};
use std::fmt::Write;

/// Terminal glyph for a FontAwesome icon id.
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "fa-sun" => "☀",
        "fa-cloud-sun" => "⛅",
        "fa-cloud" => "☁",
        "fa-smog" => "🌫",
        "fa-cloud-rain" => "🌦",
        "fa-cloud-showers-heavy" => "🌧",
        "fa-snowflake" => "❄",
        "fa-cloud-showers-water" => "☔",
        "fa-bolt" => "⚡",
        _ => "?",
    }
}

/// Draw whichever container is visible. Hidden containers produce nothing.
pub fn draw(vm: &ViewModel) -> String {
    let mut out = String::new();

    if !vm.loading_hidden {
        out.push_str("加载中...\n");
    }
    if !vm.error_hidden {
        let _ = writeln!(out, "错误: {}", vm.error_text);
    }
    if let (false, Some(content)) = (vm.content_hidden, &vm.content) {
        draw_content(&mut out, content);
    }

    out
}

fn draw_content(out: &mut String, c: &ContentView) {
    let _ = writeln!(out, "{}", c.location);
    let _ = writeln!(out, "{} {}°C  {}", glyph(&c.icon), c.temperature, c.description);
    let _ = writeln!(
        out,
        "湿度 {}  风速 {}  体感 {}  降水 {}",
        c.humidity, c.wind, c.feels_like, c.precipitation
    );

    if !c.forecast.is_empty() {
        out.push('\n');
    }
    for row in &c.forecast {
        let _ = writeln!(out, "{:<4} {}  {}", row.label, glyph(&row.icon), row.temperatures);
    }
}
