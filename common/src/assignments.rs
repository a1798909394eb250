//! 課題件数の集計（ステータス別・業務種別）

use crate::row::AssignmentRow;
use crate::status::StatusClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 担当者ごとの件数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCounts {
    pub name: String,
    pub total: usize,
    pub active: usize,
    pub complete: usize,
    pub on_hold: usize,
    pub work_types: BTreeMap<String, usize>,
}

impl AssignmentCounts {
    /// 担当者1人分の課題行を数える
    pub fn from_rows<'a, I>(name: &str, rows: I) -> Self
    where
        I: IntoIterator<Item = &'a AssignmentRow>,
    {
        let mut counts = Self {
            name: name.to_string(),
            ..Default::default()
        };

        for row in rows.into_iter().filter(|r| r.is_assignment()) {
            counts.total += 1;

            match StatusClass::classify(row.status.as_deref()) {
                StatusClass::Completed => counts.complete += 1,
                StatusClass::OnHold => counts.on_hold += 1,
                StatusClass::Active => counts.active += 1,
                StatusClass::Unclassified => {}
            }

            if let Some(work_type) = row.work_type.as_deref() {
                *counts
                    .work_types
                    .entry(work_type.trim().to_string())
                    .or_insert(0) += 1;
            }
        }

        counts
    }
}

/// チーム合計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTotals {
    pub total: usize,
    pub active: usize,
    pub complete: usize,
    pub on_hold: usize,
}

pub fn totals(people: &[AssignmentCounts]) -> AssignmentTotals {
    people.iter().fold(AssignmentTotals::default(), |mut acc, p| {
        acc.total += p.total;
        acc.active += p.active;
        acc.complete += p.complete;
        acc.on_hold += p.on_hold;
        acc
    })
}

/// 課題数の多い順に上位n人（同数は名簿順）
pub fn top_by_total(people: &[AssignmentCounts], n: usize) -> Vec<&AssignmentCounts> {
    let mut sorted: Vec<&AssignmentCounts> = people.iter().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));
    sorted.truncate(n);
    sorted
}

/// 全員分の業務種別件数（件数の多い順、同数は名前順）
pub fn work_type_distribution(people: &[AssignmentCounts]) -> Vec<(String, usize)> {
    let mut merged: BTreeMap<&str, usize> = BTreeMap::new();
    for person in people {
        for (work_type, count) in &person.work_types {
            *merged.entry(work_type.as_str()).or_insert(0) += count;
        }
    }

    let mut distribution: Vec<(String, usize)> = merged
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, work_type: Option<&str>, status: Option<&str>) -> AssignmentRow {
        AssignmentRow {
            owner: Some("Van".into()),
            title: Some(title.into()),
            work_type: work_type.map(String::from),
            status: status.map(String::from),
            ..Default::default()
        }
    }

    fn counts(name: &str, total: usize) -> AssignmentCounts {
        AssignmentCounts {
            name: name.into(),
            total,
            ..Default::default()
        }
    }

    #[test]
    fn test_status_buckets() {
        let rows = vec![
            row("1", Some("Epic"), Some("In Progress")),
            row("2", Some("Epic"), Some("Completed")),
            row("3", Some("Governance"), Some("On Hold")),
            row("4", None, Some("Planning")),
            row("5", None, None),
            AssignmentRow::default(),
        ];
        let c = AssignmentCounts::from_rows("Van", &rows);
        assert_eq!(c.total, 5);
        assert_eq!(c.active, 2);
        assert_eq!(c.complete, 1);
        assert_eq!(c.on_hold, 1);
        assert_eq!(c.work_types["Epic"], 2);
        assert_eq!(c.work_types["Governance"], 1);
    }

    #[test]
    fn test_complete_wins_in_breakdown() {
        let rows = vec![row("1", Some("Epic"), Some("Complete - was In Progress"))];
        let c = AssignmentCounts::from_rows("Van", &rows);
        assert_eq!(c.complete, 1);
        assert_eq!(c.active, 0);
    }

    #[test]
    fn test_totals() {
        let people = vec![
            AssignmentCounts { active: 2, complete: 1, ..counts("A", 4) },
            AssignmentCounts { on_hold: 3, ..counts("B", 5) },
        ];
        let t = totals(&people);
        assert_eq!(t, AssignmentTotals { total: 9, active: 2, complete: 1, on_hold: 3 });
        assert_eq!(totals(&[]), AssignmentTotals::default());
    }

    #[test]
    fn test_top_by_total_stable() {
        let people = vec![counts("A", 3), counts("B", 7), counts("C", 3), counts("D", 1)];
        let top: Vec<_> = top_by_total(&people, 3).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(top, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_work_type_distribution() {
        let mut a = counts("A", 0);
        a.work_types.insert("Epic".into(), 2);
        a.work_types.insert("Other".into(), 1);
        let mut b = counts("B", 0);
        b.work_types.insert("Epic".into(), 1);
        b.work_types.insert("Governance".into(), 1);

        let dist = work_type_distribution(&[a, b]);
        assert_eq!(dist[0], ("Epic".to_string(), 3));
        assert_eq!(dist[1], ("Governance".to_string(), 1));
        assert_eq!(dist[2], ("Other".to_string(), 1));
    }
}
