// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/output/json_report.rs - JSON 报告输出
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

use crate::{
  output::{OutputError, Render},
  predict::PredictionResult,
};

#[derive(Debug, Clone, Copy)]
pub struct JsonReport {
  pub pretty: bool,
}

impl Default for JsonReport {
  fn default() -> Self {
    JsonReport { pretty: true }
  }
}

impl Render<PredictionResult> for JsonReport {
  type Error = OutputError;

  fn render_result<W: Write>(
    &self,
    writer: &mut W,
    result: &PredictionResult,
  ) -> Result<(), Self::Error> {
    if self.pretty {
      serde_json::to_writer_pretty(&mut *writer, result)?;
    } else {
      serde_json::to_writer(&mut *writer, result)?;
    }
    writeln!(writer)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{predict::ClassProbability, sample::IrisSample};

  #[test]
  fn writes_one_json_document_per_result() {
    let result = PredictionResult {
      input: IrisSample::new(6.7, 3.0, 5.2, 2.3),
      prediction: "virginica".to_string(),
      prediction_index: 1,
      probabilities: vec![
        ClassProbability {
          class_name: "versicolor".to_string(),
          probability: 0.25,
        },
        ClassProbability {
          class_name: "virginica".to_string(),
          probability: 0.75,
        },
      ],
      confidence: 0.75,
    };

    let mut out = Vec::new();
    JsonReport { pretty: false }
      .render_result(&mut out, &result)
      .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["prediction"], "virginica");
    assert_eq!(value["prediction_index"], 1);
    assert_eq!(value["confidence"], 0.75);
    assert_eq!(value["probabilities"]["versicolor"], 0.25);
    assert_eq!(value["input"]["petal_width"], 2.3);
  }

  struct ClosedPipe;

  impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
      Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn write_failures_surface_as_output_errors() {
    let result = PredictionResult {
      input: IrisSample::new(5.1, 3.5, 1.4, 0.2),
      prediction: "setosa".to_string(),
      prediction_index: 0,
      probabilities: vec![ClassProbability {
        class_name: "setosa".to_string(),
        probability: 1.0,
      }],
      confidence: 1.0,
    };

    let err = JsonReport::default()
      .render_result(&mut ClosedPipe, &result)
      .unwrap_err();
    assert!(matches!(
      err,
      OutputError::JsonError(_) | OutputError::IoError(_)
    ));
  }
}
