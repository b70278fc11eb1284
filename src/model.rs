// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/model.rs - 模型
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
use thiserror::Error;

pub trait Model {
  type Input;
  type Output;
  type Error;

  fn infer(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
  #[error("se esperaban {expected} características, se recibieron {found}")]
  FeatureCount { expected: usize, found: usize },
  #[error("el clasificador produjo un valor no finito")]
  NonFinite,
}

/// 模型参数形状不一致
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("dimensiones inconsistentes en `{field}`: se esperaba {expected}, se encontró {found}")]
pub struct ShapeMismatch {
  pub field: String,
  pub expected: usize,
  pub found: usize,
}

impl ShapeMismatch {
  pub fn new(field: impl Into<String>, expected: usize, found: usize) -> Self {
    ShapeMismatch {
      field: field.into(),
      expected,
      found,
    }
  }

  /// 长度相等时返回 Ok
  pub fn check(field: &str, expected: usize, found: usize) -> Result<(), Self> {
    if expected == found {
      Ok(())
    } else {
      Err(ShapeMismatch::new(field, expected, found))
    }
  }
}

/// 已拟合的分类器
pub trait Classifier {
  fn kind(&self) -> &'static str;
  fn n_features(&self) -> usize;
  fn n_classes(&self) -> usize;

  /// 各类别的概率，顺序与类别下标一致
  fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>, ModelError>;

  fn predict(&self, x: &[f64]) -> Result<usize, ModelError> {
    let proba = self.predict_proba(x)?;
    Ok(argmax(&proba))
  }

  fn check_shape(&self) -> Result<(), ShapeMismatch>;
}

mod logistic;
mod naive_bayes;
pub use self::logistic::{LogisticRegression, MultiClass};
pub use self::naive_bayes::GaussianNb;

/// 模型包中的分类器，按 `type` 字段区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
  LogisticRegression(LogisticRegression),
  GaussianNb(GaussianNb),
}

impl Classifier for Estimator {
  fn kind(&self) -> &'static str {
    match self {
      Estimator::LogisticRegression(m) => m.kind(),
      Estimator::GaussianNb(m) => m.kind(),
    }
  }

  fn n_features(&self) -> usize {
    match self {
      Estimator::LogisticRegression(m) => m.n_features(),
      Estimator::GaussianNb(m) => m.n_features(),
    }
  }

  fn n_classes(&self) -> usize {
    match self {
      Estimator::LogisticRegression(m) => m.n_classes(),
      Estimator::GaussianNb(m) => m.n_classes(),
    }
  }

  fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    match self {
      Estimator::LogisticRegression(m) => m.predict_proba(x),
      Estimator::GaussianNb(m) => m.predict_proba(x),
    }
  }

  fn check_shape(&self) -> Result<(), ShapeMismatch> {
    match self {
      Estimator::LogisticRegression(m) => m.check_shape(),
      Estimator::GaussianNb(m) => m.check_shape(),
    }
  }
}

pub(crate) fn check_features(expected: usize, x: &[f64]) -> Result<(), ModelError> {
  if x.len() != expected {
    return Err(ModelError::FeatureCount {
      expected,
      found: x.len(),
    });
  }
  Ok(())
}

pub(crate) fn ensure_finite(proba: Vec<f64>) -> Result<Vec<f64>, ModelError> {
  if proba.iter().all(|p| p.is_finite()) {
    Ok(proba)
  } else {
    Err(ModelError::NonFinite)
  }
}

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
  a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn sigmoid(x: f64) -> f64 {
  1.0 / (1.0 + (-x).exp())
}

/// 数值稳定的 softmax（先减去最大值）
pub fn softmax(logits: &[f64]) -> Vec<f64> {
  let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
  let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
  let sum: f64 = exps.iter().sum();
  exps.into_iter().map(|e| e / sum).collect()
}

/// 最大值下标，相等时取第一个
pub fn argmax(values: &[f64]) -> usize {
  let mut best = 0usize;
  for (idx, v) in values.iter().enumerate() {
    if *v > values[best] {
      best = idx;
    }
  }
  best
}
