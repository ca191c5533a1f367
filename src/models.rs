use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Travel,
    Energy,
    Food,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Car,
    PublicTransport,
    Flight,
    Electricity,
    Gas,
    Meat,
    Dairy,
    Vegetarian,
}

impl ActivityType {
    pub const ALL: [ActivityType; 8] = [
        ActivityType::Car,
        ActivityType::PublicTransport,
        ActivityType::Flight,
        ActivityType::Electricity,
        ActivityType::Gas,
        ActivityType::Meat,
        ActivityType::Dairy,
        ActivityType::Vegetarian,
    ];
}

/// One logged emission-producing event. Immutable after creation; the
/// collection is append/delete only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub category: ActivityCategory,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub amount: f64,
    pub unit: String,
    /// Kilograms, rounded to two decimals at creation time.
    pub co2: f64,
}

/// Full persisted snapshot. Serializes as a bare JSON array of activities,
/// insertion order preserved.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AppData {
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub travel: f64,
    pub energy: f64,
    pub food: f64,
}

impl CategoryTotals {
    pub fn add(&mut self, category: ActivityCategory, kg: f64) {
        match category {
            ActivityCategory::Travel => self.travel += kg,
            ActivityCategory::Energy => self.energy += kg,
            ActivityCategory::Food => self.food += kg,
        }
    }

    pub fn sum(&self) -> f64 {
        self.travel + self.energy + self.food
    }
}

/// Per-date aggregate, recomputed on every read. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: String,
    pub total: f64,
    pub by_category: CategoryTotals,
}

#[derive(Debug, Deserialize)]
pub struct LogActivityRequest {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub removed: String,
    pub remaining: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub date: String,
    pub today_total: f64,
    pub today_by_category: CategoryTotals,
    pub week_total: f64,
    pub month_total: f64,
    pub weekly_avg: f64,
    pub total_entries: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub daily: Vec<DailyTotal>,
    pub today_by_category: CategoryTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_wire_format_uses_snake_case_names() {
        let activity = Activity {
            id: "abc".into(),
            date: "2024-01-01".into(),
            category: ActivityCategory::Travel,
            kind: ActivityType::PublicTransport,
            amount: 12.0,
            unit: "km".into(),
            co2: 1.07,
        };

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["type"], "public_transport");
        assert_eq!(value["category"], "travel");
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["co2"], 1.07);
    }

    #[test]
    fn app_data_persists_as_bare_array() {
        let data = AppData::default();
        assert_eq!(serde_json::to_string(&data).unwrap(), "[]");

        let parsed: AppData = serde_json::from_str(
            r#"[{"id":"1","date":"2024-01-01","category":"food","type":"meat","amount":1.0,"unit":"meals","co2":7.26}]"#,
        )
        .unwrap();
        assert_eq!(parsed.activities.len(), 1);
        assert_eq!(parsed.activities[0].kind, ActivityType::Meat);
    }
}
