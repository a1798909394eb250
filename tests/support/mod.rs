//! テスト用ブック生成

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

/// 個人シートのヘッダー（A〜I列）
pub const PERSON_HEADER: [&str; 9] = [
    "SCI", "Assignment ", "Short Description", "Role", "Work Effort",
    "Phase", "Work Type", "Priority", "Status",
];

/// 個人シートの1行（空文字は空セル）
pub type PersonRow = [&'static str; 9];

/// 個人シートとダッシュボードを持つブックを作成
pub fn write_fixture_workbook(
    path: &Path,
    people: &[(&str, Vec<PersonRow>)],
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    for (name, rows) in people {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name)?;

        for (col, header) in PERSON_HEADER.iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }
        for (r, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(r as u32 + 1, col as u16, *value)?;
                }
            }
        }
    }

    let dashboard = workbook.add_worksheet();
    dashboard.set_name("Dashboard")?;
    let header = ["Name", "Total", "Active", "Active Hrs", "Avail Hrs", "Capacity", "Status"];
    for (col, h) in header.iter().enumerate() {
        dashboard.write_string(0, col as u16, *h)?;
    }
    dashboard.write_string(1, 0, "Josh")?;
    dashboard.write_number(1, 1, 2.0)?;
    dashboard.write_number(1, 2, 1.0)?;
    dashboard.write_number(1, 3, 3.5)?;
    dashboard.write_number(1, 4, 40.0)?;
    dashboard.write_number(1, 5, 0.0875)?;
    dashboard.write_string(1, 6, "Available")?;

    workbook.save(path)?;
    Ok(())
}

/// 標準のテスト用ブック（Josh・Vanの2人）
pub fn standard_people() -> Vec<(&'static str, Vec<PersonRow>)> {
    vec![
        (
            "Josh",
            vec![
                ["Josh", "T1", "", "", "M", "", "Epic", "", "In Progress"],
                ["Josh", "T2", "", "", "", "", "Epic", "", "Complete"],
                ["", "", "", "", "", "", "", "", ""],
                ["Josh", "T3", "", "", "XS", "", "Governance", "", "Planning"],
            ],
        ),
        (
            "Van",
            vec![
                ["Van", "V1", "", "", "XL", "", "System Initiative", "", "On Hold"],
                ["Van", "", "", "", "L", "", "", "", "In Progress"],
            ],
        ),
    ]
}
