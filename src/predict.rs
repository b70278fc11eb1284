// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/predict.rs - 单样本推理
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

use std::path::Path;

use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
  bundle::{BundleError, ModelBundle, load_model},
  model::{Classifier, Model, ModelError},
  sample::IrisSample,
  scaler::Transformer,
};

#[derive(Error, Debug)]
pub enum PredictError {
  #[error(transparent)]
  Bundle(#[from] BundleError),
  #[error("error del modelo: {0}")]
  Model(#[from] ModelError),
  #[error("valor inválido para `{0}`: debe ser un número finito")]
  InvalidInput(String),
  #[error("índice de clase {0} fuera de rango")]
  UnknownClass(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProbability {
  pub class_name: String,
  pub probability: f64,
}

/// 一次预测的完整结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
  pub input: IrisSample,
  pub prediction: String,
  pub prediction_index: usize,
  /// 按类别顺序排列，序列化为 `{类别: 概率}`
  #[serde(serialize_with = "serialize_probabilities")]
  pub probabilities: Vec<ClassProbability>,
  pub confidence: f64,
}

impl PredictionResult {
  pub fn probability_of(&self, class_name: &str) -> Option<f64> {
    self
      .probabilities
      .iter()
      .find(|p| p.class_name == class_name)
      .map(|p| p.probability)
  }
}

fn serialize_probabilities<S: Serializer>(
  probabilities: &[ClassProbability],
  serializer: S,
) -> Result<S::Ok, S::Error> {
  serializer.collect_map(
    probabilities
      .iter()
      .map(|p| (p.class_name.as_str(), p.probability)),
  )
}

pub struct IrisPredictor {
  bundle: ModelBundle,
}

impl IrisPredictor {
  pub fn from_bundle(bundle: ModelBundle) -> Result<Self, PredictError> {
    bundle.validate()?;
    Ok(IrisPredictor { bundle })
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictError> {
    Ok(IrisPredictor {
      bundle: load_model(path)?,
    })
  }
}

impl Model for IrisPredictor {
  type Input = IrisSample;
  type Output = PredictionResult;
  type Error = PredictError;

  fn infer(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
    if let Some(name) = input.first_non_finite() {
      return Err(PredictError::InvalidInput(name.to_string()));
    }

    let now = std::time::Instant::now();
    let scaled = self.bundle.scaler.transform(&input.as_features())?;
    debug!("缩放后的特征: {:?}", scaled);

    let prediction_index = self.bundle.model.predict(&scaled)?;
    let proba = self.bundle.model.predict_proba(&scaled)?;
    debug!("类别概率: {:?}", proba);

    let prediction = self
      .bundle
      .target_names
      .get(prediction_index)
      .cloned()
      .ok_or(PredictError::UnknownClass(prediction_index))?;
    let confidence = proba.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let probabilities = self
      .bundle
      .target_names
      .iter()
      .zip(proba)
      .map(|(name, probability)| ClassProbability {
        class_name: name.clone(),
        probability,
      })
      .collect();

    info!(
      "推理完成，耗时: {:.2?}, 结果: {} ({:.4})",
      now.elapsed(),
      prediction,
      confidence
    );

    Ok(PredictionResult {
      input: *input,
      prediction,
      prediction_index,
      probabilities,
      confidence,
    })
  }
}

/// 读取模型包并对单个样本做预测
pub fn predict_iris(
  sepal_length: f64,
  sepal_width: f64,
  petal_length: f64,
  petal_width: f64,
  model_path: impl AsRef<Path>,
) -> Result<PredictionResult, PredictError> {
  let predictor = IrisPredictor::load(model_path)?;
  predictor.infer(&IrisSample::new(
    sepal_length,
    sepal_width,
    petal_length,
    petal_width,
  ))
}
