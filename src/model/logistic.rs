// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/model/logistic.rs - 逻辑回归分类器
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

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{
  Classifier, ModelError, ShapeMismatch, check_features, dot, ensure_finite, sigmoid, softmax,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiClass {
  Multinomial,
  Ovr,
}

/// 线性模型：`coef` 每行对应一个类别，二分类时只有一行
///
/// 未声明 `multi_class` 时，二分类按 sigmoid、多分类按 softmax 计算。
/// 二分类显式声明 `multinomial` 时概率为 `softmax([-s, s])`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
  pub coef: Vec<Vec<f64>>,
  pub intercept: Vec<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub multi_class: Option<MultiClass>,
}

impl LogisticRegression {
  pub fn decision_function(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    check_features(self.n_features(), x)?;
    Ok(
      self
        .coef
        .iter()
        .zip(&self.intercept)
        .map(|(w, b)| dot(w, x) + b)
        .collect(),
    )
  }
}

impl Classifier for LogisticRegression {
  fn kind(&self) -> &'static str {
    "logistic_regression"
  }

  fn n_features(&self) -> usize {
    self.coef.first().map(Vec::len).unwrap_or(0)
  }

  fn n_classes(&self) -> usize {
    match self.coef.len() {
      1 => 2,
      n => n,
    }
  }

  fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    let scores = self.decision_function(x)?;
    debug!("决策函数值: {:?}", scores);

    let proba = if scores.len() == 1 {
      let s = scores[0];
      match self.multi_class {
        Some(MultiClass::Multinomial) => softmax(&[-s, s]),
        None | Some(MultiClass::Ovr) => {
          let p = sigmoid(s);
          vec![1.0 - p, p]
        }
      }
    } else {
      match self.multi_class {
        None | Some(MultiClass::Multinomial) => softmax(&scores),
        Some(MultiClass::Ovr) => {
          let raw: Vec<f64> = scores.iter().map(|s| sigmoid(*s)).collect();
          let sum: f64 = raw.iter().sum();
          raw.into_iter().map(|p| p / sum).collect()
        }
      }
    };

    ensure_finite(proba)
  }

  fn check_shape(&self) -> Result<(), ShapeMismatch> {
    if self.coef.is_empty() {
      return Err(ShapeMismatch::new("coef", 1, 0));
    }
    let n_features = self.n_features();
    for row in &self.coef {
      ShapeMismatch::check("coef", n_features, row.len())?;
    }
    ShapeMismatch::check("intercept", self.coef.len(), self.intercept.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn three_class(multi_class: MultiClass) -> LogisticRegression {
    LogisticRegression {
      coef: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, -1.0]],
      intercept: vec![0.0, 0.0, 0.5],
      multi_class: Some(multi_class),
    }
  }

  #[test]
  fn multinomial_uses_softmax_of_decision_values() {
    let model = three_class(MultiClass::Multinomial);
    let x = [2.0, 1.0];
    let proba = model.predict_proba(&x).unwrap();
    let expected = softmax(&[2.0, 1.0, -2.5]);
    for (p, e) in proba.iter().zip(&expected) {
      assert!((p - e).abs() < 1e-12);
    }
    assert_eq!(model.predict(&x).unwrap(), 0);
  }

  #[test]
  fn ovr_normalizes_sigmoids() {
    let model = three_class(MultiClass::Ovr);
    let proba = model.predict_proba(&[0.0, 3.0]).unwrap();
    assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    assert_eq!(model.predict(&[0.0, 3.0]).unwrap(), 1);
  }

  fn binary(multi_class: Option<MultiClass>) -> LogisticRegression {
    LogisticRegression {
      coef: vec![vec![2.0]],
      intercept: vec![-1.0],
      multi_class,
    }
  }

  #[test]
  fn single_row_is_binary() {
    let model = binary(None);
    assert_eq!(model.n_classes(), 2);
    let proba = model.predict_proba(&[0.5]).unwrap();
    assert!((proba[0] - 0.5).abs() < 1e-12);
    assert!((proba[1] - 0.5).abs() < 1e-12);
    assert_eq!(model.predict(&[3.0]).unwrap(), 1);
  }

  #[test]
  fn binary_honors_declared_multi_class() {
    // s = 2 * 1.0 - 1 = 1
    let ovr = binary(Some(MultiClass::Ovr)).predict_proba(&[1.0]).unwrap();
    assert!((ovr[1] - sigmoid(1.0)).abs() < 1e-12);
    assert_eq!(ovr, binary(None).predict_proba(&[1.0]).unwrap());

    let multinomial = binary(Some(MultiClass::Multinomial))
      .predict_proba(&[1.0])
      .unwrap();
    assert!((multinomial[1] - sigmoid(2.0)).abs() < 1e-12);
    assert!((multinomial[0] + multinomial[1] - 1.0).abs() < 1e-12);
  }

  #[test]
  fn missing_multi_class_decodes_as_none() {
    let raw = r#"{"coef": [[1.0, 2.0]], "intercept": [0.0]}"#;
    let model: LogisticRegression = serde_json::from_str(raw).unwrap();
    assert_eq!(model.multi_class, None);
  }

  #[test]
  fn rejects_wrong_feature_count() {
    let model = three_class(MultiClass::Multinomial);
    assert_eq!(
      model.predict_proba(&[1.0, 2.0, 3.0]),
      Err(ModelError::FeatureCount {
        expected: 2,
        found: 3
      })
    );
  }

  #[test]
  fn shape_check_catches_ragged_parameters() {
    let mut model = three_class(MultiClass::Multinomial);
    assert!(model.check_shape().is_ok());
    model.intercept.pop();
    assert_eq!(
      model.check_shape(),
      Err(ShapeMismatch::new("intercept", 3, 2))
    );
    model.coef[1].push(1.0);
    assert_eq!(model.check_shape(), Err(ShapeMismatch::new("coef", 2, 3)));
  }
}
