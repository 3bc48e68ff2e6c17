//! Docker integration tests
//!
//! Talks to a real Docker daemon, so these only run with `--features docker`.

#[cfg(all(test, feature = "docker"))]
mod tests {
    use imgviz::notifier::Notifier;
    use imgviz::sources::{DockerSource, Source};
    use imgviz::{render, RenderOptions};

    #[test]
    fn test_docker_source_creation() {
        let docker_source = DockerSource::new();
        assert!(
            docker_source.is_ok(),
            "Should be able to create DockerSource"
        );

        let source = docker_source.unwrap();
        assert_eq!(source.name(), "docker");
    }

    #[test]
    fn test_docker_lists_images() {
        let source = DockerSource::new().expect("Should create DockerSource");
        let notifier = Notifier::new(0);
        let images = source
            .list_images(&notifier)
            .expect("Should list Docker images");

        for image in &images {
            assert!(!image.id.is_empty(), "Every image should have an id");
            assert!(
                !image.repo_tags.is_empty(),
                "Untagged images should carry the <none>:<none> tag"
            );
        }

        println!("Docker reported {} images", images.len());
    }

    #[test]
    fn test_docker_images_render_as_tree() {
        let source = DockerSource::new().expect("Should create DockerSource");
        let images = source.list_images(&Notifier::new(0)).unwrap();
        let count = images.len();

        let options = RenderOptions {
            tree: true,
            ..Default::default()
        };
        let rendered = render(images, None, &options).unwrap();
        assert_eq!(rendered.lines().count(), count);
    }
}
