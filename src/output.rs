// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/output.rs - 输出定义
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use std::io::Write;

use clap::ValueEnum;
use thiserror::Error;

use crate::predict::PredictionResult;

pub trait Render<Output>: Sized {
  type Error;
  fn render_result<W: Write>(&self, writer: &mut W, result: &Output) -> Result<(), Self::Error>;
}

mod json_report;
mod text_report;
pub use self::json_report::JsonReport;
pub use self::text_report::TextReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// 人类可读的报告
  #[default]
  Text,
  /// JSON 文档
  Json,
}

#[derive(Error, Debug)]
pub enum OutputError {
  #[error("error al escribir el informe: {0}")]
  IoError(#[from] std::io::Error),
  #[error("error al serializar el informe: {0}")]
  JsonError(#[from] serde_json::Error),
}

pub enum OutputWrapper {
  TextReport(TextReport),
  JsonReport(JsonReport),
}

impl From<OutputFormat> for OutputWrapper {
  fn from(format: OutputFormat) -> Self {
    match format {
      OutputFormat::Text => OutputWrapper::TextReport(TextReport),
      OutputFormat::Json => OutputWrapper::JsonReport(JsonReport::default()),
    }
  }
}

impl Render<PredictionResult> for OutputWrapper {
  type Error = OutputError;

  fn render_result<W: Write>(
    &self,
    writer: &mut W,
    result: &PredictionResult,
  ) -> Result<(), Self::Error> {
    match self {
      OutputWrapper::TextReport(output) => output
        .render_result(writer, result)
        .map_err(OutputError::from),
      OutputWrapper::JsonReport(output) => output.render_result(writer, result),
    }
  }
}
