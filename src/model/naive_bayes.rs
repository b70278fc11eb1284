// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/model/naive_bayes.rs - 高斯朴素贝叶斯分类器
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

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{
  Classifier, ModelError, ShapeMismatch, check_features, ensure_finite, softmax,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNb {
  /// 每个类别的特征均值
  pub theta: Vec<Vec<f64>>,
  /// 每个类别的特征方差
  pub var: Vec<Vec<f64>>,
  pub class_prior: Vec<f64>,
}

impl GaussianNb {
  pub fn joint_log_likelihood(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    check_features(self.n_features(), x)?;
    Ok(
      self
        .theta
        .iter()
        .zip(&self.var)
        .zip(&self.class_prior)
        .map(|((theta, var), prior)| {
          let norm: f64 = var.iter().map(|v| (2.0 * PI * v).ln()).sum();
          let dist: f64 = x
            .iter()
            .zip(theta)
            .zip(var)
            .map(|((xi, t), v)| (xi - t).powi(2) / v)
            .sum();
          prior.ln() - 0.5 * norm - 0.5 * dist
        })
        .collect(),
    )
  }
}

impl Classifier for GaussianNb {
  fn kind(&self) -> &'static str {
    "gaussian_nb"
  }

  fn n_features(&self) -> usize {
    self.theta.first().map(Vec::len).unwrap_or(0)
  }

  fn n_classes(&self) -> usize {
    self.theta.len()
  }

  fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
    let jll = self.joint_log_likelihood(x)?;
    debug!("联合对数似然: {:?}", jll);
    ensure_finite(softmax(&jll))
  }

  fn check_shape(&self) -> Result<(), ShapeMismatch> {
    if self.theta.is_empty() {
      return Err(ShapeMismatch::new("theta", 1, 0));
    }
    let n_features = self.n_features();
    for row in &self.theta {
      ShapeMismatch::check("theta", n_features, row.len())?;
    }
    ShapeMismatch::check("var", self.theta.len(), self.var.len())?;
    for row in &self.var {
      ShapeMismatch::check("var", n_features, row.len())?;
    }
    ShapeMismatch::check("class_prior", self.theta.len(), self.class_prior.len())
  }
}
