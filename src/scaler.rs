// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/scaler.rs - 特征缩放
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

use crate::model::{ModelError, ShapeMismatch, check_features};

/// 已拟合的特征变换
pub trait Transformer {
  fn kind(&self) -> &'static str;
  fn n_features(&self) -> usize;
  fn transform(&self, x: &[f64]) -> Result<Vec<f64>, ModelError>;
  fn check_shape(&self) -> Result<(), ShapeMismatch>;
}

/// `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
  pub mean: Vec<f64>,
  pub scale: Vec<f64>,
}

impl Transformer for StandardScaler {
  fn kind(&self) -> &'static str {
    "standard_scaler"
  }

  fn n_features(&self) -> usize {
    self.mean.len()
  }

  fn transform(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    check_features(self.n_features(), x)?;
    Ok(
      x.iter()
        .zip(&self.mean)
        .zip(&self.scale)
        // 方差为零的特征只做平移
        .map(|((xi, m), s)| if *s == 0.0 { xi - m } else { (xi - m) / s })
        .collect(),
    )
  }

  fn check_shape(&self) -> Result<(), ShapeMismatch> {
    ShapeMismatch::check("scale", self.mean.len(), self.scale.len())
  }
}

/// `x * scale + min`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
  pub min: Vec<f64>,
  pub scale: Vec<f64>,
}

impl Transformer for MinMaxScaler {
  fn kind(&self) -> &'static str {
    "min_max_scaler"
  }

  fn n_features(&self) -> usize {
    self.scale.len()
  }

  fn transform(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    check_features(self.n_features(), x)?;
    Ok(
      x.iter()
        .zip(&self.scale)
        .zip(&self.min)
        .map(|((xi, s), m)| xi * s + m)
        .collect(),
    )
  }

  fn check_shape(&self) -> Result<(), ShapeMismatch> {
    ShapeMismatch::check("min", self.scale.len(), self.min.len())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Scaler {
  StandardScaler(StandardScaler),
  MinMaxScaler(MinMaxScaler),
}

impl Transformer for Scaler {
  fn kind(&self) -> &'static str {
    match self {
      Scaler::StandardScaler(s) => s.kind(),
      Scaler::MinMaxScaler(s) => s.kind(),
    }
  }

  fn n_features(&self) -> usize {
    match self {
      Scaler::StandardScaler(s) => s.n_features(),
      Scaler::MinMaxScaler(s) => s.n_features(),
    }
  }

  fn transform(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    match self {
      Scaler::StandardScaler(s) => s.transform(x),
      Scaler::MinMaxScaler(s) => s.transform(x),
    }
  }

  fn check_shape(&self) -> Result<(), ShapeMismatch> {
    match self {
      Scaler::StandardScaler(s) => s.check_shape(),
      Scaler::MinMaxScaler(s) => s.check_shape(),
    }
  }
}
