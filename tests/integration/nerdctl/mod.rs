//! nerdctl integration tests
//!
//! Needs a working nerdctl installation, so these only run with `--features nerdctl`.

#[cfg(all(test, feature = "nerdctl"))]
mod tests {
    use imgviz::notifier::Notifier;
    use imgviz::sources::{NerdctlSource, Source};

    #[test]
    fn test_nerdctl_source_creation() {
        let source = NerdctlSource::new().expect("Should create NerdctlSource");
        assert_eq!(source.name(), "nerdctl");
    }

    #[test]
    fn test_nerdctl_lists_images() {
        let source = NerdctlSource::new().expect("Should create NerdctlSource");
        let images = source
            .list_images(&Notifier::new(0))
            .expect("Should list nerdctl images");

        for image in &images {
            assert!(!image.id.is_empty(), "Every image should have an id");
        }
    }
}
