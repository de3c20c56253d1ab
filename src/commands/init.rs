//! # Init Command Module / 初始化命令模块
//!
//! This module provides the `init` command: a small interactive wizard
//! that writes a starter `SheetRunner.toml` configuration and a sample
//! input workbook to get a new project going.
//!
//! 此模块提供 `init` 命令：一个小型交互式向导，
//! 写出初始的 `SheetRunner.toml` 配置和一个示例输入工作簿，帮助新项目起步。

use anyhow::{anyhow, Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::fs;
use std::path::Path;

use crate::cli::DEFAULT_CONFIG_FILE;
use crate::core::config::RunnerConfig;
use crate::infra::{sheet, t};

const SAMPLE_WORKBOOK: &str = "sample_cases.xlsx";

const DEFAULT_CONFIG: &str = r#"# Sheet Runner Configuration / Sheet Runner 配置

# Language for console output / 控制台输出语言
language = "en"

# Directory where the upload interface stores workbooks / 上传界面存放工作簿的目录
upload_dir = "uploads"

# Prefix for derived output filenames / 派生输出文件名的前缀
output_prefix = "output_"

# Address for the upload interface / 上传界面的地址
bind_addr = "127.0.0.1:5000"

# Accepted upload extensions / 接受的上传扩展名
allowed_extensions = ["xlsx"]
"#;

/// Sample rows for the generated workbook: one of each supported method
/// against a public echo API, matching the input column order.
/// 生成的工作簿中的示例行：针对公共回显 API 的每种受支持方法各一行，
/// 与输入列顺序一致。
const SAMPLE_ROWS: [[&str; 7]; 4] = [
    [
        "1",
        "GET",
        "https://jsonplaceholder.typicode.com/posts/1",
        "",
        "",
        "200",
        "sunt aut facere",
    ],
    [
        "2",
        "POST",
        "https://jsonplaceholder.typicode.com/posts",
        "Accept: application/json",
        r#"{"title": "foo", "body": "bar", "userId": 2}"#,
        "201",
        "foo",
    ],
    [
        "3",
        "PUT",
        "https://jsonplaceholder.typicode.com/posts/1",
        "Accept: application/json",
        r#"{"id": 1, "title": "foo", "body": "bar", "userId": 1}"#,
        "200",
        "foo",
    ],
    [
        "4",
        "DELETE",
        "https://jsonplaceholder.typicode.com/posts/1",
        "",
        "",
        "200",
        "",
    ],
];

/// Runs the wizard that generates `SheetRunner.toml` and the sample
/// workbook. With `non_interactive` the defaults are written without any
/// prompting (and an existing configuration is left untouched).
///
/// 运行生成 `SheetRunner.toml` 和示例工作簿的向导。
/// 使用 `non_interactive` 时直接写入默认值而不提示（已存在的配置保持不变）。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init.welcome", locale = language).cyan().bold());
        println!("{}", t!("init.description", locale = language));
    }

    if config_path.exists() {
        if non_interactive {
            println!("{}", t!("init.aborted", locale = language).yellow());
            return Ok(());
        }
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(
                t!(
                    "init.overwrite_prompt",
                    locale = language,
                    path = config_path.display()
                )
                .to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init.confirm_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    if non_interactive {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    } else {
        let config = prompt_config(&theme, language)?;
        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize configuration: {e}"))?;
        fs::write(config_path, rendered)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    }
    println!(
        "{}",
        t!(
            "init.config_written",
            locale = language,
            path = config_path.display()
        )
        .green()
    );

    write_sample_workbook(Path::new(SAMPLE_WORKBOOK))?;
    println!(
        "{}",
        t!(
            "init.sample_written",
            locale = language,
            path = SAMPLE_WORKBOOK
        )
        .green()
    );

    println!("{}", t!("init.next_steps", locale = language));
    Ok(())
}

/// Asks for the handful of configurable values, with the defaults
/// pre-filled.
fn prompt_config(theme: &ColorfulTheme, language: &str) -> Result<RunnerConfig> {
    let defaults = RunnerConfig::default();

    let upload_dir: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_upload_dir", locale = language).to_string())
        .default(defaults.upload_dir.display().to_string())
        .interact_text()
        .context(t!("init.confirm_failed", locale = language).to_string())?;

    let bind_addr: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_bind_addr", locale = language).to_string())
        .default(defaults.bind_addr.clone())
        .interact_text()
        .context(t!("init.confirm_failed", locale = language).to_string())?;

    let language_value: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_language", locale = language).to_string())
        .default(language.to_string())
        .interact_text()
        .context(t!("init.confirm_failed", locale = language).to_string())?;

    Ok(RunnerConfig {
        language: language_value,
        upload_dir: upload_dir.into(),
        bind_addr,
        ..defaults
    })
}

/// Writes the sample input workbook: the seven-column header followed by
/// one example row per supported method.
fn write_sample_workbook(path: &Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    let worksheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| anyhow!("Freshly created workbook has no sheet"))?;

    for (col, header) in sheet::OUTPUT_HEADERS.iter().take(7).enumerate() {
        worksheet
            .get_cell_mut(((col + 1) as u32, 1))
            .set_value(*header);
    }
    for (i, row) in SAMPLE_ROWS.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .get_cell_mut(((col + 1) as u32, (i + 2) as u32))
                .set_value(*value);
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| anyhow!("Failed to write workbook '{}': {}", path.display(), e))?;
    Ok(())
}
