// 该文件是 Iris Predict （鸢尾花预测） 项目的一部分。
// src/bundle.rs - 模型包加载
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

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
  model::{Classifier, Estimator, ShapeMismatch},
  sample::IRIS_NUM_FEATURES,
  scaler::{Scaler, Transformer},
};

pub const DEFAULT_MODEL_PATH: &str = "models/iris_model_latest.pkl";

#[derive(Error, Debug)]
pub enum BundleError {
  #[error("No se encontró el modelo en: {0}")]
  ModelNotFound(String),
  #[error("error de E/S al leer el modelo: {0}")]
  Io(#[from] std::io::Error),
  #[error("paquete de modelo inválido: {0}")]
  Decode(#[from] serde_json::Error),
  #[error("{0}")]
  Shape(#[from] ShapeMismatch),
  #[error("la lista de clases está vacía")]
  EmptyTargetNames,
}

/// 训练流程导出的模型包：分类器、特征缩放器和类别名称
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
  pub model: Estimator,
  pub scaler: Scaler,
  pub target_names: Vec<String>,
}

impl ModelBundle {
  pub fn from_reader<R: Read>(reader: R) -> Result<Self, BundleError> {
    let bundle: ModelBundle = serde_json::from_reader(reader)?;
    bundle.validate()?;
    Ok(bundle)
  }

  pub fn from_slice(data: &[u8]) -> Result<Self, BundleError> {
    let bundle: ModelBundle = serde_json::from_slice(data)?;
    bundle.validate()?;
    Ok(bundle)
  }

  /// 检查分类器、缩放器和类别名称的维度是否一致
  pub fn validate(&self) -> Result<(), BundleError> {
    if self.target_names.is_empty() {
      return Err(BundleError::EmptyTargetNames);
    }

    self.model.check_shape()?;
    self.scaler.check_shape()?;

    ShapeMismatch::check("scaler", IRIS_NUM_FEATURES, self.scaler.n_features())?;
    ShapeMismatch::check("model", IRIS_NUM_FEATURES, self.model.n_features())?;
    ShapeMismatch::check(
      "target_names",
      self.model.n_classes(),
      self.target_names.len(),
    )?;

    Ok(())
  }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BundleError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, self)?;
    writer.flush()?;
    Ok(())
  }
}

/// 从磁盘读取模型包，文件句柄在解码后立即释放
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelBundle, BundleError> {
  let path = path.as_ref();
  if !path.exists() {
    error!("模型文件不存在: {}", path.display());
    return Err(BundleError::ModelNotFound(path.display().to_string()));
  }

  info!("加载模型文件: {}", path.display());
  let bundle = {
    let file = File::open(path)?;
    if let Ok(meta) = file.metadata() {
      debug!("模型文件大小: {:.2} KB", meta.len() as f64 / 1024.0);
    }
    ModelBundle::from_reader(BufReader::new(file))?
  };

  info!(
    "模型加载完成: {} + {}, 类别: {:?}",
    bundle.model.kind(),
    bundle.scaler.kind(),
    bundle.target_names
  );
  Ok(bundle)
}

#[cfg(test)]
mod tests {
  use super::*;

  const FIXTURE: &str = include_str!("../tests/fixtures/iris_bundle.json");

  #[test]
  fn loads_fixture_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.pkl");
    std::fs::write(&path, FIXTURE).unwrap();

    let bundle = load_model(&path).unwrap();
    assert_eq!(
      bundle.target_names,
      vec!["setosa", "versicolor", "virginica"]
    );
    assert_eq!(bundle.model.kind(), "logistic_regression");
    assert_eq!(bundle.scaler.kind(), "standard_scaler");
  }

  #[test]
  fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.pkl");
    let err = load_model(&path).unwrap_err();
    assert!(matches!(err, BundleError::ModelNotFound(_)));
    assert!(err.to_string().contains(&path.display().to_string()));
  }

  #[test]
  fn missing_key_is_a_decode_error() {
    let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    value.as_object_mut().unwrap().remove("scaler");
    let err = ModelBundle::from_slice(value.to_string().as_bytes()).unwrap_err();
    assert!(matches!(err, BundleError::Decode(_)));
    assert!(err.to_string().contains("scaler"));
  }

  #[test]
  fn class_names_must_match_classifier() {
    let mut bundle = ModelBundle::from_slice(FIXTURE.as_bytes()).unwrap();
    bundle.target_names.pop();
    match bundle.validate() {
      Err(BundleError::Shape(shape)) => {
        assert_eq!(shape, ShapeMismatch::new("target_names", 3, 2));
      }
      other => panic!("unexpected: {:?}", other),
    }

    bundle.target_names.clear();
    assert!(matches!(
      bundle.validate(),
      Err(BundleError::EmptyTargetNames)
    ));
  }

  fn decode_with(edit: impl FnOnce(&mut serde_json::Value)) -> Result<ModelBundle, BundleError> {
    let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    edit(&mut value);
    ModelBundle::from_slice(value.to_string().as_bytes())
  }

  #[test]
  fn scaler_must_have_four_features() {
    let err = decode_with(|v| {
      v["scaler"]["mean"] = serde_json::json!([5.8, 3.0, 3.7]);
      v["scaler"]["scale"] = serde_json::json!([0.8, 0.4, 1.7]);
    })
    .unwrap_err();
    match err {
      BundleError::Shape(shape) => assert_eq!(shape, ShapeMismatch::new("scaler", 4, 3)),
      other => panic!("unexpected: {:?}", other),
    }
  }

  #[test]
  fn classifier_must_have_four_features() {
    let err = decode_with(|v| {
      for row in v["model"]["coef"].as_array_mut().unwrap() {
        row.as_array_mut().unwrap().push(serde_json::json!(0.5));
      }
    })
    .unwrap_err();
    match err {
      BundleError::Shape(shape) => assert_eq!(shape, ShapeMismatch::new("model", 4, 5)),
      other => panic!("unexpected: {:?}", other),
    }
  }

  #[test]
  fn save_then_load_keeps_parameters() {
    let bundle = ModelBundle::from_slice(FIXTURE.as_bytes()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.json");
    bundle.save(&path).unwrap();
    let loaded = load_model(&path).unwrap();
    assert_eq!(loaded.target_names, bundle.target_names);
    assert_eq!(loaded.model.n_classes(), 3);
  }
}
