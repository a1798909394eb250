//! データ品質集計
//!
//! 個人シートの課題行から、工数入力率・進行中時間・業務種別内訳を集計する。
//! 不正なデータで処理を止めることはなく、すべて「不明」「未分類」として数える。

use crate::effort::effort_hours;
use crate::row::AssignmentRow;
use crate::status::StatusClass;
use crate::types::{AssignmentDetail, PersonSummary, TeamSummary};

/// 明細に残す課題名の最大文字数
pub const DETAIL_NAME_MAX_CHARS: usize = 50;

const MISSING_MARKER: &str = "MISSING";
const UNKNOWN_MARKER: &str = "Unknown";

/// 担当者1人分の課題行を集計
pub fn summarize_person<'a, I>(name: &str, rows: I) -> PersonSummary
where
    I: IntoIterator<Item = &'a AssignmentRow>,
{
    let mut summary = PersonSummary {
        name: name.to_string(),
        ..Default::default()
    };

    for row in rows {
        let Some(title) = row.title.as_deref().filter(|_| row.owner.is_some()) else {
            continue;
        };

        let hours = effort_hours(row.effort.as_deref());
        let has_effort = hours.is_some();
        let is_active = StatusClass::has_active_marker(row.status.as_deref());

        summary.total_assignments += 1;
        if has_effort {
            summary.has_work_effort += 1;
        } else {
            summary.missing_work_effort += 1;
        }

        let active_hours = hours.filter(|_| is_active);
        if is_active {
            summary.active_assignments += 1;
        }
        if let Some(h) = active_hours {
            summary.estimated_hours += h;
        }

        if let Some(work_type) = row.work_type.as_deref() {
            let tally = summary
                .work_types
                .entry(work_type.trim().to_string())
                .or_default();
            tally.count += 1;
            if let Some(h) = active_hours {
                tally.hours += h;
            }
            if !has_effort {
                tally.missing += 1;
            }
        }

        summary.assignments_detail.push(AssignmentDetail {
            name: title.chars().take(DETAIL_NAME_MAX_CHARS).collect(),
            work_effort: row.effort.clone().unwrap_or_else(|| MISSING_MARKER.to_string()),
            work_type: row.work_type.clone().unwrap_or_else(|| UNKNOWN_MARKER.to_string()),
            status: row.status.clone().unwrap_or_else(|| UNKNOWN_MARKER.to_string()),
            has_effort,
            is_active,
            estimated_hours: hours,
        });
    }

    if summary.total_assignments > 0 {
        summary.completion_rate =
            summary.has_work_effort as f64 / summary.total_assignments as f64;
    }

    summary
}

/// チーム全体を集計（0人なら全項目0）
pub fn summarize_team(people: &[PersonSummary]) -> TeamSummary {
    let mut team = TeamSummary::default();

    for person in people {
        team.total_assignments += person.total_assignments;
        team.has_effort += person.has_work_effort;
        team.missing_effort += person.missing_work_effort;
        team.total_active_hours += person.estimated_hours;
        team.avg_completion_rate += person.completion_rate;
    }

    if !people.is_empty() {
        team.avg_completion_rate /= people.len() as f64;
    }

    team
}

/// 工数入力率の低い順に上位n人
pub fn worst_quality(people: &[PersonSummary], n: usize) -> Vec<&PersonSummary> {
    let mut sorted: Vec<&PersonSummary> = people.iter().collect();
    sorted.sort_by(|a, b| a.completion_rate.total_cmp(&b.completion_rate));
    sorted.truncate(n);
    sorted
}
