// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/output/text_report.rs - 文本报告输出
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

use crate::{output::Render, predict::PredictionResult};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport;

impl Render<PredictionResult> for TextReport {
  type Error = std::io::Error;

  fn render_result<W: Write>(
    &self,
    writer: &mut W,
    result: &PredictionResult,
  ) -> Result<(), Self::Error> {
    let rule = "=".repeat(RULE_WIDTH);
    let input = &result.input;

    writeln!(writer, "{}", rule)?;
    writeln!(writer, "PREDICCIÓN DE ESPECIE DE IRIS")?;
    writeln!(writer, "{}", rule)?;
    writeln!(writer, "Entrada:")?;
    // `{:?}` 保留整数值的小数点，例如 5.0
    writeln!(writer, "  Longitud sépalo: {:?}", input.sepal_length)?;
    writeln!(writer, "  Ancho sépalo:    {:?}", input.sepal_width)?;
    writeln!(writer, "  Longitud pétalo: {:?}", input.petal_length)?;
    writeln!(writer, "  Ancho pétalo:    {:?}", input.petal_width)?;
    writeln!(writer)?;
    writeln!(writer, "Predicción: {}", result.prediction)?;
    writeln!(writer, "Confianza: {:.4}", result.confidence)?;
    writeln!(writer)?;
    writeln!(writer, "Probabilidades por clase:")?;
    for p in &result.probabilities {
      writeln!(writer, "  {}: {:.4}", p.class_name, p.probability)?;
    }
    writeln!(writer, "{}", rule)?;

    Ok(())
  }
}
