use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Runner configuration, loaded from a `SheetRunner.toml` file. Every
/// field has a default so a missing or partial file still yields a usable
/// configuration. The struct is passed by reference to the batch runner
/// and the upload handlers; there is no global mutable state.
///
/// 运行器配置，从 `SheetRunner.toml` 文件加载。每个字段都有默认值，
/// 因此缺失或不完整的文件仍能得到可用的配置。该结构体以引用方式传递给
/// 批次运行器和上传处理器；不存在全局可变状态。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The language for console output (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 控制台输出的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory where the upload interface stores incoming workbooks.
    /// 上传界面存放传入工作簿的目录。
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Prefix put in front of the input filename to derive the output
    /// filename (e.g. `cases.xlsx` -> `output_cases.xlsx`).
    /// 加在输入文件名前面以派生输出文件名的前缀
    /// （例如 `cases.xlsx` -> `output_cases.xlsx`）。
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Address the upload interface binds to.
    /// 上传界面绑定的地址。
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Filename extensions the upload interface accepts, lowercase.
    /// 上传界面接受的文件扩展名，小写。
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_output_prefix() -> String {
    "output_".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["xlsx".to_string()]
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            upload_dir: default_upload_dir(),
            output_prefix: default_output_prefix(),
            bind_addr: default_bind_addr(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl RunnerConfig {
    /// Loads the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
        let config: RunnerConfig = toml::from_str(&content)
            .with_context(|| t!("config.parse_failed", path = path.display()).to_string())?;
        Ok(config)
    }

    /// Resolves the configuration for a command invocation: an explicit
    /// `--config` path must exist and parse; the implicit default path is
    /// used when present and silently falls back to defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if default_path.exists() => Self::load(default_path),
            None => Ok(Self::default()),
        }
    }

    /// Derives the output path for an input workbook: same directory,
    /// filename prefixed with `output_prefix`.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{}{}", self.output_prefix, file_name))
    }
}
