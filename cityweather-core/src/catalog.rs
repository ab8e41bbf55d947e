//! WMO weather code catalog.
//!
//! Maps the integer codes returned in `current.weather_code` and
//! `daily.weather_code` to a display description and a FontAwesome icon id.

/// Description and icon for a single WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeEntry {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Returned for any code that is not in the table.
pub const UNKNOWN: WeatherCodeEntry = WeatherCodeEntry { description: "未知", icon: "fa-question" };

const fn entry(description: &'static str, icon: &'static str) -> WeatherCodeEntry {
    WeatherCodeEntry { description, icon }
}

/// Sorted by code.
static TABLE: [(i64, WeatherCodeEntry); 22] = [
    (0, entry("晴朗", "fa-sun")),
    (1, entry("多云", "fa-cloud-sun")),
    (2, entry("局部多云", "fa-cloud-sun")),
    (3, entry("阴天", "fa-cloud")),
    (45, entry("雾", "fa-smog")),
    (48, entry("雾凇", "fa-smog")),
    (51, entry("小毛毛雨", "fa-cloud-rain")),
    (53, entry("中毛毛雨", "fa-cloud-rain")),
    (55, entry("大毛毛雨", "fa-cloud-rain")),
    (61, entry("小雨", "fa-cloud-showers-heavy")),
    (63, entry("中雨", "fa-cloud-showers-heavy")),
    (65, entry("大雨", "fa-cloud-showers-heavy")),
    (71, entry("小雪", "fa-snowflake")),
    (73, entry("中雪", "fa-snowflake")),
    (75, entry("大雪", "fa-snowflake")),
    (77, entry("雪粒", "fa-snowflake")),
    (80, entry("小阵雨", "fa-cloud-showers-water")),
    (81, entry("中阵雨", "fa-cloud-showers-water")),
    (82, entry("大阵雨", "fa-cloud-showers-water")),
    (95, entry("雷雨", "fa-bolt")),
    (96, entry("雷雨伴有冰雹", "fa-bolt")),
    (99, entry("雷雨伴有大冰雹", "fa-bolt")),
];

fn find(code: i64) -> Option<&'static WeatherCodeEntry> {
    TABLE.binary_search_by_key(&code, |(c, _)| *c).ok().map(|idx| &TABLE[idx].1)
}

/// Look up a weather code. Never fails: unknown codes yield [`UNKNOWN`].
pub fn lookup(code: i64) -> &'static WeatherCodeEntry {
    find(code).unwrap_or(&UNKNOWN)
}

pub fn is_known(code: i64) -> bool {
    find(code).is_some()
}

/// All known codes in ascending order.
pub fn entries() -> impl Iterator<Item = (i64, &'static WeatherCodeEntry)> {
    TABLE.iter().map(|(code, entry)| (*code, entry))
}
