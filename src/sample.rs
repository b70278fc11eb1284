// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/sample.rs - 单个测量样本
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

/// 特征数量
pub const IRIS_NUM_FEATURES: usize = 4;

/// 特征名称，顺序与模型训练时一致
pub const IRIS_FEATURE_NAMES: [&str; IRIS_NUM_FEATURES] =
  ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// 一朵鸢尾花的测量值（厘米）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrisSample {
  pub sepal_length: f64,
  pub sepal_width: f64,
  pub petal_length: f64,
  pub petal_width: f64,
}

impl IrisSample {
  pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
    IrisSample {
      sepal_length,
      sepal_width,
      petal_length,
      petal_width,
    }
  }

  /// 按特征顺序展开
  pub fn as_features(&self) -> [f64; IRIS_NUM_FEATURES] {
    [
      self.sepal_length,
      self.sepal_width,
      self.petal_length,
      self.petal_width,
    ]
  }

  /// 返回第一个非有限值的特征名称
  pub fn first_non_finite(&self) -> Option<&'static str> {
    IRIS_FEATURE_NAMES
      .iter()
      .zip(self.as_features())
      .find(|(_, v)| !v.is_finite())
      .map(|(name, _)| *name)
  }
}

impl From<[f64; IRIS_NUM_FEATURES]> for IrisSample {
  fn from(v: [f64; IRIS_NUM_FEATURES]) -> Self {
    IrisSample::new(v[0], v[1], v[2], v[3])
  }
}
