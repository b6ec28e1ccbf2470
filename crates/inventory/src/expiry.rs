//! Expiry classification for alerts and the graphical report.

use chrono::{Duration, NaiveDate};

use crate::item::{Item, Table};

/// Lookahead used to flag soon-to-expire items.
pub const ALERT_WINDOW_DAYS: i64 = 3;

/// Three-way expiry split plus the rows no date could be read for.
///
/// Partitions are order-preserving subsequences of the table; every row lands
/// in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpiryReport {
    /// `expiry < today`.
    pub expired: Vec<Item>,
    /// `today <= expiry <= today + ALERT_WINDOW_DAYS`.
    pub expiring_soon: Vec<Item>,
    /// `expiry > today + ALERT_WINDOW_DAYS`.
    pub valid: Vec<Item>,
    /// Rows whose stored date failed to parse.
    pub unknown: Vec<Item>,
}

/// Partition the table by expiry relative to `today`.
pub fn classify(table: &Table, today: NaiveDate) -> ExpiryReport {
    let cutoff = today + Duration::days(ALERT_WINDOW_DAYS);
    let mut report = ExpiryReport::default();

    for row in table.rows() {
        let bucket = match row.expiry {
            None => &mut report.unknown,
            Some(date) if date < today => &mut report.expired,
            Some(date) if date <= cutoff => &mut report.expiring_soon,
            Some(_) => &mut report.valid,
        };
        bucket.push(row.clone());
    }

    report
}

/// One bar of the graphical report.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub name: String,
    pub quantity: f64,
    pub expired: bool,
}

/// Two-way split used for chart color-coding, independent of the alert
/// window: a bar is expired iff `expiry < today`. A missing date counts as
/// not expired.
pub fn chart_rows(table: &Table, today: NaiveDate) -> Vec<ChartRow> {
    table
        .rows()
        .iter()
        .map(|row| ChartRow {
            name: row.name.clone(),
            quantity: row.quantity,
            expired: row.expiry.is_some_and(|date| date < today),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopstock_core::Unit;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn item(name: &str, expiry: Option<NaiveDate>) -> Item {
        Item {
            name: name.to_string(),
            quantity: 1.0,
            unit: Unit::Pcs,
            expiry,
        }
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn partitions_expired_soon_and_valid() {
        let table = Table::from_rows(vec![
            item("A", Some(today() - Duration::days(1))),
            item("B", Some(today())),
            item("C", Some(today() + Duration::days(5))),
        ]);

        let report = classify(&table, today());
        assert_eq!(names(&report.expired), vec!["A"]);
        assert_eq!(names(&report.expiring_soon), vec!["B"]);
        assert_eq!(names(&report.valid), vec!["C"]);
        assert!(report.unknown.is_empty());
    }

    #[test]
    fn window_boundaries_count_as_expiring_soon() {
        let table = Table::from_rows(vec![
            item("today", Some(today())),
            item("edge", Some(today() + Duration::days(ALERT_WINDOW_DAYS))),
            item("past_edge", Some(today() + Duration::days(ALERT_WINDOW_DAYS + 1))),
        ]);

        let report = classify(&table, today());
        assert_eq!(names(&report.expiring_soon), vec!["today", "edge"]);
        assert_eq!(names(&report.valid), vec!["past_edge"]);
    }

    #[test]
    fn rows_without_a_date_go_to_unknown() {
        let table = Table::from_rows(vec![
            item("A", None),
            item("B", Some(today())),
        ]);

        let report = classify(&table, today());
        assert_eq!(names(&report.unknown), vec!["A"]);
        assert_eq!(names(&report.expiring_soon), vec!["B"]);
    }

    #[test]
    fn partitions_preserve_table_order() {
        let table = Table::from_rows(vec![
            item("A", Some(today() - Duration::days(2))),
            item("B", Some(today() - Duration::days(1))),
            item("C", Some(today() + Duration::days(10))),
        ]);

        let report = classify(&table, today());
        assert_eq!(names(&report.expired), vec!["A", "B"]);
    }

    #[test]
    fn chart_tags_only_rows_expired_strictly_before_today() {
        let table = Table::from_rows(vec![
            item("old", Some(today() - Duration::days(1))),
            item("fresh", Some(today())),
            item("undated", None),
        ]);

        let rows = chart_rows(&table, today());
        let tags: Vec<(&str, bool)> = rows.iter().map(|r| (r.name.as_str(), r.expired)).collect();
        assert_eq!(
            tags,
            vec![("old", true), ("fresh", false), ("undated", false)]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_expiry() -> impl Strategy<Value = Option<NaiveDate>> {
            prop_oneof![
                1 => Just(None),
                9 => (-30i64..30).prop_map(|offset| Some(today() + Duration::days(offset))),
            ]
        }

        proptest! {
            /// Property: partitions are exhaustive and disjoint over the table.
            #[test]
            fn partitions_are_exhaustive_and_disjoint(
                expiries in proptest::collection::vec(arb_expiry(), 0..20)
            ) {
                let rows: Vec<Item> = expiries
                    .iter()
                    .enumerate()
                    .map(|(i, expiry)| item(&format!("item-{i}"), *expiry))
                    .collect();
                let table = Table::from_rows(rows);

                let report = classify(&table, today());
                let total = report.expired.len()
                    + report.expiring_soon.len()
                    + report.valid.len()
                    + report.unknown.len();
                prop_assert_eq!(total, table.len());

                let mut seen: Vec<&str> = Vec::new();
                for bucket in [&report.expired, &report.expiring_soon, &report.valid, &report.unknown] {
                    for row in bucket {
                        prop_assert!(!seen.contains(&row.name.as_str()));
                        seen.push(&row.name);
                    }
                }
            }

            /// Property: every expired bucket member is also chart-tagged
            /// expired, and the two splits agree on `expiry < today`.
            #[test]
            fn alert_and_chart_splits_agree_on_expired(
                expiries in proptest::collection::vec(arb_expiry(), 0..20)
            ) {
                let rows: Vec<Item> = expiries
                    .iter()
                    .enumerate()
                    .map(|(i, expiry)| item(&format!("item-{i}"), *expiry))
                    .collect();
                let table = Table::from_rows(rows);

                let report = classify(&table, today());
                let chart = chart_rows(&table, today());

                let tagged: Vec<&str> = chart
                    .iter()
                    .filter(|r| r.expired)
                    .map(|r| r.name.as_str())
                    .collect();
                let expired: Vec<&str> = report.expired.iter().map(|r| r.name.as_str()).collect();
                prop_assert_eq!(tagged, expired);
            }
        }
    }
}
