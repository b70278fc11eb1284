// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/args.rs - 项目参数配置
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use clap::{ArgAction, Parser};
use iris_predict::{DEFAULT_MODEL_PATH, output::OutputFormat};
use tracing::Level;

/// Predicción de especies de Iris
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// Longitud del sépalo
  #[arg(
    long = "sepal_length",
    visible_alias = "sepal-length",
    value_name = "CM",
    allow_negative_numbers = true
  )]
  pub sepal_length: f64,

  /// Ancho del sépalo
  #[arg(
    long = "sepal_width",
    visible_alias = "sepal-width",
    value_name = "CM",
    allow_negative_numbers = true
  )]
  pub sepal_width: f64,

  /// Longitud del pétalo
  #[arg(
    long = "petal_length",
    visible_alias = "petal-length",
    value_name = "CM",
    allow_negative_numbers = true
  )]
  pub petal_length: f64,

  /// Ancho del pétalo
  #[arg(
    long = "petal_width",
    visible_alias = "petal-width",
    value_name = "CM",
    allow_negative_numbers = true
  )]
  pub petal_width: f64,

  /// Ruta al modelo
  #[arg(
    long = "model_path",
    visible_alias = "model-path",
    env = "IRIS_MODEL_PATH",
    default_value = DEFAULT_MODEL_PATH,
    value_name = "FILE"
  )]
  pub model_path: String,

  /// 输出格式
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// 日志详细程度（-v 为 info，-vv 为 debug）
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

impl Args {
  pub fn log_level(&self) -> Level {
    match self.verbose {
      0 => Level::WARN,
      1 => Level::INFO,
      _ => Level::DEBUG,
    }
  }
}
