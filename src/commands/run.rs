//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: resolve the configuration,
//! run the batch for one input workbook, print the summary and optionally
//! write an HTML report.
//!
//! 此模块实现 `run` 命令：解析配置、为一个输入工作簿运行批次、
//! 打印摘要，并可选地写出 HTML 报告。

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::{
    cli::DEFAULT_CONFIG_FILE,
    core::{batch, config::RunnerConfig},
    infra::t,
    reporting::{
        console::{print_failure_details, print_summary},
        html::generate_html_report,
    },
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `input` - Path to the input workbook
/// * `output` - Optional output path; defaults to the prefixed input filename
/// * `config` - Optional path to the configuration file
/// * `html` - Optional path for an HTML report
///
/// # Returns
/// `Ok(())` when every row passed; an error when the batch was fatal or
/// any row failed (the output workbook is still written in the latter case).
pub async fn execute(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    let config = RunnerConfig::resolve(config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    rust_i18n::set_locale(&config.language);
    let locale = config.language.clone();

    let output = output.unwrap_or_else(|| config.output_path_for(&input));

    let report = batch::run_batch(&input, &output).await?;

    print_summary(&report.results, &locale);

    if let Some(report_path) = &html {
        println!(
            "{}",
            t!("run.html_report", locale = &locale, path = report_path.display())
        );
        if let Err(e) = generate_html_report(&report.results, report_path, &locale) {
            eprintln!("{} {}", t!("run.html_report_failed", locale = &locale).red(), e);
        }
    }

    if report.has_failures() {
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        print_failure_details(&failures, &locale);
        anyhow::bail!(t!(
            "run.failures_present",
            locale = &locale,
            count = report.failed_count()
        )
        .to_string());
    }

    println!("\n{}", t!("run.all_passed", locale = &locale).green().bold());
    Ok(())
}
