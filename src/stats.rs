use crate::factors;
use crate::models::{Activity, ActivityType, CategoryTotals, DailyTotal};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Emissions in kg for `amount` units of `kind`, rounded to two decimals.
pub fn calculate_co2(kind: ActivityType, amount: f64) -> f64 {
    round2(amount * factors::factor(kind).co2_per_unit)
}

/// Per-date aggregates, ascending by date. Lexicographic order on the ISO
/// date key equals chronological order. Dates with no activity are absent.
pub fn daily_totals(activities: &[Activity]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<&str, CategoryTotals> = BTreeMap::new();
    for activity in activities {
        days.entry(activity.date.as_str())
            .or_default()
            .add(activity.category, activity.co2);
    }

    days.into_iter()
        .map(|(date, by_category)| DailyTotal {
            date: date.to_string(),
            total: by_category.sum(),
            by_category,
        })
        .collect()
}

/// The last `days` entries of the ascending daily series: the N most recent
/// days that have at least one logged activity, not a trailing calendar
/// window. With gaps in logging the result can span a longer real period.
pub fn last_n_days(activities: &[Activity], days: usize) -> Vec<DailyTotal> {
    let mut totals = daily_totals(activities);
    if totals.len() > days {
        totals.drain(..totals.len() - days);
    }
    totals
}

pub fn today_total(activities: &[Activity]) -> f64 {
    today_total_at(Local::now().date_naive(), activities)
}

pub fn today_total_at(today: NaiveDate, activities: &[Activity]) -> f64 {
    let key = today.to_string();
    activities
        .iter()
        .filter(|activity| activity.date == key)
        .map(|activity| activity.co2)
        .sum()
}

pub fn today_category_totals(activities: &[Activity]) -> CategoryTotals {
    today_category_totals_at(Local::now().date_naive(), activities)
}

pub fn today_category_totals_at(today: NaiveDate, activities: &[Activity]) -> CategoryTotals {
    let key = today.to_string();
    let mut totals = CategoryTotals::default();
    for activity in activities.iter().filter(|activity| activity.date == key) {
        totals.add(activity.category, activity.co2);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, kind: ActivityType, amount: f64) -> Activity {
        let factor = factors::factor(kind);
        Activity {
            id: format!("{date}-{amount}"),
            date: date.to_string(),
            category: factor.category,
            kind,
            amount,
            unit: factor.unit.to_string(),
            co2: calculate_co2(kind, amount),
        }
    }

    #[test]
    fn calculate_co2_applies_factor_and_rounds() {
        assert_eq!(calculate_co2(ActivityType::Car, 10.0), 1.92);
        assert_eq!(calculate_co2(ActivityType::Meat, 1.0), 7.26);
        // 3.3 km by public transport: 0.2937 rounds to 0.29
        assert_eq!(calculate_co2(ActivityType::PublicTransport, 3.3), 0.29);
    }

    #[test]
    fn calculate_co2_matches_factor_table_for_every_type() {
        for kind in ActivityType::ALL {
            let expected = round2(2.5 * factors::factor(kind).co2_per_unit);
            assert_eq!(calculate_co2(kind, 2.5), expected, "{:?}", kind);
        }
    }

    #[test]
    fn daily_totals_groups_and_sums_per_category() {
        let activities = vec![
            entry("2024-01-01", ActivityType::Car, 10.0),
            entry("2024-01-01", ActivityType::Meat, 1.0),
        ];

        let totals = daily_totals(&activities);
        assert_eq!(totals.len(), 1);
        let day = &totals[0];
        assert_eq!(day.date, "2024-01-01");
        assert!((day.total - 9.18).abs() < 1e-9);
        assert!((day.by_category.travel - 1.92).abs() < 1e-9);
        assert!((day.by_category.food - 7.26).abs() < 1e-9);
        assert_eq!(day.by_category.energy, 0.0);
    }

    #[test]
    fn daily_totals_is_ascending_without_duplicates() {
        let activities = vec![
            entry("2024-03-09", ActivityType::Electricity, 4.0),
            entry("2024-01-02", ActivityType::Car, 5.0),
            entry("2024-03-09", ActivityType::Gas, 2.0),
            entry("2024-02-20", ActivityType::Dairy, 1.0),
        ];

        let totals = daily_totals(&activities);
        let dates: Vec<&str> = totals.iter().map(|day| day.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-02", "2024-02-20", "2024-03-09"]);
        for day in &totals {
            assert!((day.by_category.sum() - day.total).abs() < 1e-9);
        }
    }

    #[test]
    fn last_n_days_takes_latest_days_with_data() {
        // Logging gaps: three dates spread over two months.
        let activities = vec![
            entry("2024-01-01", ActivityType::Car, 10.0),
            entry("2024-01-15", ActivityType::Flight, 100.0),
            entry("2024-02-28", ActivityType::Vegetarian, 1.0),
        ];

        let last_two = last_n_days(&activities, 2);
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].date, "2024-01-15");
        assert_eq!(last_two[1].date, "2024-02-28");

        // Asking for more days than exist returns everything.
        assert_eq!(last_n_days(&activities, 30).len(), 3);
    }

    #[test]
    fn today_totals_filter_on_exact_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let activities = vec![
            entry("2024-01-01", ActivityType::Car, 10.0),
            entry("2024-01-01", ActivityType::Meat, 1.0),
            entry("2023-12-31", ActivityType::Flight, 500.0),
        ];

        assert!((today_total_at(today, &activities) - 9.18).abs() < 1e-9);

        let by_category = today_category_totals_at(today, &activities);
        assert!((by_category.travel - 1.92).abs() < 1e-9);
        assert!((by_category.food - 7.26).abs() < 1e-9);
        assert_eq!(by_category.energy, 0.0);
    }
}
