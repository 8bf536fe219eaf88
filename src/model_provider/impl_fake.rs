use crate::config::FakeModelConfig;
use crate::error::SessionError;
use crate::image_source::interface::ImageRef;
use crate::library::logger::interface::Logger;
use crate::model_provider::interface::{Classification, ImageModel, ModelProvider};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub struct ModelProviderFake {
    logger: Arc<dyn Logger + Send + Sync>,
    config: FakeModelConfig,
}

impl ModelProviderFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, config: FakeModelConfig) -> Self {
        Self {
            logger: logger.with_namespace("model").with_namespace("fake"),
            config,
        }
    }
}

impl ModelProvider for ModelProviderFake {
    fn load(&self) -> Result<Arc<dyn ImageModel + Send + Sync>, SessionError> {
        let _ = self.logger.info("Loading model...");
        std::thread::sleep(self.config.load_delay);

        if self.config.fail_load {
            return Err(SessionError::ModelLoad(
                "fake model is configured to fail".to_string(),
            ));
        }

        let _ = self.logger.info("Model loaded");

        Ok(Arc::new(ImageModelFake {
            logger: self.logger.clone(),
            labels: self.config.labels.clone(),
            top_k: self.config.top_k,
            classify_delay: self.config.classify_delay,
        }))
    }
}

/// Produces a random ranking that is stable per image reference.
pub struct ImageModelFake {
    logger: Arc<dyn Logger + Send + Sync>,
    labels: Vec<String>,
    top_k: usize,
    classify_delay: std::time::Duration,
}

impl ImageModel for ImageModelFake {
    fn classify(&self, image_ref: &ImageRef) -> Result<Vec<Classification>, SessionError> {
        let _ = self.logger.info(&format!("Classifying {}...", image_ref));
        std::thread::sleep(self.classify_delay);

        let mut hasher = DefaultHasher::new();
        image_ref.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());

        let mut labels = self.labels.clone();
        labels.shuffle(&mut rng);

        let weight_dist = Uniform::new(0.0f32, 1.0)
            .map_err(|e| SessionError::Classification(e.to_string()))?;
        let weights: Vec<f32> = labels.iter().map(|_| weight_dist.sample(&mut rng)).collect();
        let total: f32 = weights.iter().sum();

        if total <= f32::EPSILON {
            return Err(SessionError::Classification(
                "model has no labels to rank".to_string(),
            ));
        }

        let mut classifications: Vec<Classification> = labels
            .into_iter()
            .zip(weights)
            .map(|(label, weight)| Classification {
                label,
                confidence: weight / total,
            })
            .collect();

        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        classifications.truncate(self.top_k);

        Ok(classifications)
    }
}
