use crate::error::SessionError;
use crate::image_source::interface::{ImageRef, ImageSourceResolver};
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

const OBJECT_URL_PREFIX: &str = "blob:snap-classify/";

pub struct ImageSourceObjectUrl {
    logger: Arc<dyn Logger + Send + Sync>,
    live: Mutex<HashMap<ImageRef, PathBuf>>,
}

impl ImageSourceObjectUrl {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_source"),
            live: Mutex::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn live_references(&self) -> usize {
        self.live.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl ImageSourceResolver for ImageSourceObjectUrl {
    fn resolve_file(&self, path: &Path) -> ImageRef {
        let mut live = self.live.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rng = rand::rng();

        let image_ref = loop {
            let candidate = ImageRef::new(format!("{}{:016x}", OBJECT_URL_PREFIX, rng.random::<u64>()));
            if !live.contains_key(&candidate) {
                break candidate;
            }
        };

        live.insert(image_ref.clone(), path.to_path_buf());
        let _ = self.logger.info(&format!(
            "Created {} for {}",
            image_ref,
            path.display()
        ));

        image_ref
    }

    fn resolve_text(&self, text: &str) -> ImageRef {
        ImageRef::new(text)
    }

    fn release(&self, image_ref: &ImageRef) -> Result<(), SessionError> {
        if !image_ref.as_str().starts_with(OBJECT_URL_PREFIX) {
            return Ok(());
        }

        let removed = self
            .live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(image_ref);

        match removed {
            Some(path) => {
                let _ = self.logger.info(&format!(
                    "Released {} ({})",
                    image_ref,
                    path.display()
                ));
                Ok(())
            }
            None => Err(SessionError::Release(format!(
                "{} is not a live reference",
                image_ref
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use chrono::{Offset, Utc};

    fn resolver() -> ImageSourceObjectUrl {
        ImageSourceObjectUrl::new(Arc::new(LoggerConsole::new(Utc.fix())))
    }

    #[test]
    fn test_each_file_gets_a_distinct_reference() {
        let resolver = resolver();

        let first = resolver.resolve_file(Path::new("cat.jpg"));
        let second = resolver.resolve_file(Path::new("cat.jpg"));

        assert_ne!(first, second);
        assert!(first.as_str().starts_with(OBJECT_URL_PREFIX));
        assert_eq!(resolver.live_references(), 2);
    }

    #[test]
    fn test_text_is_used_verbatim() {
        let resolver = resolver();

        let image_ref = resolver.resolve_text(" https://example.com/dog.png ");

        assert_eq!(image_ref.as_str(), " https://example.com/dog.png ");
        assert_eq!(resolver.live_references(), 0);
    }

    #[test]
    fn test_release() {
        let resolver = resolver();
        let image_ref = resolver.resolve_file(Path::new("cat.jpg"));

        assert_eq!(resolver.release(&image_ref), Ok(()));
        assert_eq!(resolver.live_references(), 0);

        // a second release of the same object reference is an error
        assert!(matches!(
            resolver.release(&image_ref),
            Err(SessionError::Release(_))
        ));

        // plain URLs were never registered
        assert_eq!(
            resolver.release(&ImageRef::new("https://example.com/dog.png")),
            Ok(())
        );
    }
}
