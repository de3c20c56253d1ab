//! # Workbook I/O Module / 工作簿读写模块
//!
//! Reads test case rows from the first sheet of an input workbook and
//! writes result rows (with a fixed header) to an output workbook.
//! All cell content is handled as text; numeric cells arrive as their
//! textual rendering, which is exactly what the text-based comparison
//! policy wants.
//!
//! 从输入工作簿的第一个工作表读取测试用例行，并将结果行（带固定表头）
//! 写入输出工作簿。所有单元格内容都按文本处理；数字单元格以其文本形式
//! 到达，这正是基于文本的比较策略所需要的。

use anyhow::{anyhow, bail, Result};
use std::path::Path;

use crate::core::models::{TestCase, TestResult};

/// The fixed header row of the output workbook, in column order.
/// 输出工作簿的固定表头行，按列顺序排列。
pub const OUTPUT_HEADERS: [&str; 10] = [
    "TestCaseID",
    "Method",
    "URL",
    "Headers",
    "Payload",
    "ExpectedStatusCode",
    "ExpectedResponse",
    "Result",
    "ActualStatusCode",
    "ActualResponse",
];

/// Loads every test case row from the first sheet of a workbook.
/// The first row is the header and is ignored; consumption starts at
/// row 2. Trailing rows whose seven cells are all empty are editing
/// artifacts and are dropped; a blank row between real rows is kept and
/// fails as its own row, so the output stays one row per input row.
///
/// A missing or unreadable file is batch-fatal and returns an `Err`.
pub fn load_cases(path: &Path) -> Result<Vec<TestCase>> {
    if !path.is_file() {
        bail!("File '{}' not found", path.display());
    }

    let book = umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|e| anyhow!("Failed to open workbook '{}': {}", path.display(), e))?;
    let sheet = book
        .get_sheet(&0)
        .ok_or_else(|| anyhow!("Workbook '{}' has no sheets", path.display()))?;

    let mut cases = Vec::new();
    let highest_row = sheet.get_highest_row();

    for row in 2..=highest_row {
        let cell = |col: u32| sheet.get_value((col, row));
        let case = TestCase {
            id: cell(1),
            method: cell(2),
            url: cell(3),
            headers: cell(4),
            payload: cell(5),
            // Trimmed here so a cell with stray spaces still compares
            // against the stringified numeric status.
            expected_status: cell(6).trim().to_string(),
            expected_response: cell(7),
        };
        cases.push(case);
    }

    while cases.last().is_some_and(|case| case.is_blank()) {
        cases.pop();
    }

    Ok(cases)
}

/// Writes the output workbook: the fixed header row first, then one data
/// row per result, in result order. The file is written once, at the end
/// of the batch; re-running overwrites it.
pub fn write_results(results: &[TestResult], path: &Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| anyhow!("Freshly created workbook has no sheet"))?;

    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        sheet.get_cell_mut(((col + 1) as u32, 1)).set_value(*header);
    }

    for (i, result) in results.iter().enumerate() {
        let row = (i + 2) as u32;
        let case = result.case();
        let actual_status = result.actual_status_string();
        let cells: [&str; 10] = [
            &case.id,
            &case.method,
            &case.url,
            &case.headers,
            result.payload_pretty(),
            &case.expected_status,
            &case.expected_response,
            result.verdict_str(),
            &actual_status,
            result.body(),
        ];
        for (col, value) in cells.iter().enumerate() {
            sheet.get_cell_mut(((col + 1) as u32, row)).set_value(*value);
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| anyhow!("Failed to write workbook '{}': {}", path.display(), e))?;
    Ok(())
}
