// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/main.rs - 项目主程序
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

mod args;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use iris_predict::{
  output::{OutputWrapper, Render},
  predict_iris,
};

fn run(args: &args::Args) -> Result<()> {
  info!("模型文件路径: {}", args.model_path);
  info!(
    "输入样本: [{}, {}, {}, {}]",
    args.sepal_length, args.sepal_width, args.petal_length, args.petal_width
  );

  let result = predict_iris(
    args.sepal_length,
    args.sepal_width,
    args.petal_length,
    args.petal_width,
    &args.model_path,
  )?;

  let output = OutputWrapper::from(args.format);
  let stdout = std::io::stdout();
  let mut handle = stdout.lock();
  output.render_result(&mut handle, &result)?;
  handle.flush()?;

  Ok(())
}

fn main() -> Result<()> {
  let args = args::Args::parse();

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(args.log_level())
    .init();

  // 任何错误都只打印一行，进程仍以 0 退出
  if let Err(e) = run(&args) {
    error!("预测失败: {:#}", e);
    println!("❌ Error: {}", e);
  }

  Ok(())
}
