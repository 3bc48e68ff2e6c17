//! JSON source integration tests
//!
//! Feeds a serialized image list through the JSON source and the full rendering
//! pipeline, the same path `imgviz` takes for piped input.

#[cfg(test)]
mod tests {
    use crate::integration::common::*;
    use imgviz::notifier::Notifier;
    use imgviz::sources::{parse_images, JsonInput, JsonSource, Source};
    use imgviz::{render, Error, RenderOptions};
    use std::fs;
    use tempfile::TempDir;

    fn tree_options() -> RenderOptions {
        RenderOptions {
            tree: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_json_source_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("images.json");
        fs::copy(FIXTURE, &path).unwrap();

        let source = JsonSource::new(JsonInput::File(path));
        let images = source.list_images(&Notifier::new(1)).unwrap();

        assert_eq!(images.len(), 6);
        assert_eq!(images, fixture_images());
    }

    #[test]
    fn test_json_source_reports_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "[{\"Id\": \"abc\"").unwrap();

        let source = JsonSource::new(JsonInput::File(path));
        let err = source.list_images(&Notifier::new(1)).unwrap_err();
        assert!(matches!(err, Error::InputParse(_)));
    }

    #[test]
    fn test_full_tree() {
        let rendered = render(fixture_images(), None, &tree_options()).unwrap();
        let expected = format!(
            "\
├─{UBUNTU} Virtual Size: 188.0 MB Tags: ubuntu:14.04, ubuntu:latest
│ ├─{HIDDEN_LOWER} Virtual Size: 199.0 MB
│ │ └─{HIDDEN_UPPER} Virtual Size: 200.0 MB
│ │   └─{MYAPP} Virtual Size: 212.3 MB Tags: myapp:latest, myapp:1.2
│ └─{TOOLS} Virtual Size: 190.0 MB Tags: tools:dev
└─{BUSYBOX} Virtual Size: 2.4 MB Tags: busybox:latest
"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_only_labelled_tree() {
        let options = RenderOptions {
            only_labelled: true,
            ..tree_options()
        };
        let rendered = render(fixture_images(), None, &options).unwrap();
        let expected = format!(
            "\
├─{UBUNTU} Virtual Size: 188.0 MB Tags: ubuntu:14.04, ubuntu:latest
│ ├─{MYAPP} Virtual Size: 212.3 MB Tags: myapp:latest, myapp:1.2
│ └─{TOOLS} Virtual Size: 190.0 MB Tags: tools:dev
└─{BUSYBOX} Virtual Size: 2.4 MB Tags: busybox:latest
"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_incremental_subtree_by_name() {
        let options = RenderOptions {
            incremental: true,
            ..tree_options()
        };
        let rendered = render(fixture_images(), Some("ubuntu"), &options).unwrap();
        let expected = format!(
            "\
└─{UBUNTU} Virtual Size: 188.0 MB Tags: ubuntu:14.04, ubuntu:latest
  ├─{HIDDEN_LOWER} Virtual Size: 11.0 MB
  │ └─{HIDDEN_UPPER} Virtual Size: 1.0 MB
  │   └─{MYAPP} Virtual Size: 12.3 MB Tags: myapp:latest, myapp:1.2
  └─{TOOLS} Virtual Size: 2.0 MB Tags: tools:dev
"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_subtree_by_short_id_without_truncation() {
        let options = RenderOptions {
            no_trunc: true,
            ..tree_options()
        };
        let rendered = render(fixture_images(), Some(HIDDEN_UPPER), &options).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(
            "└─7f7d9bb1f55ae7b9c3b42b6d9d6f3b1a2c4e5f60718293a4b5c6d7e8f9a0b1c2 Virtual Size"
        ));
        assert!(lines[1].starts_with("  └─4c1b2ae1d3b2ae7d2d5f4f6a3e7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5"));
    }

    #[test]
    fn test_only_labelled_dot() {
        let options = RenderOptions {
            dot: true,
            only_labelled: true,
            ..Default::default()
        };
        let rendered = render(fixture_images(), None, &options).unwrap();

        assert!(rendered.starts_with("digraph docker {\n"));
        assert!(rendered.contains(&format!(" base -> \"{UBUNTU}\" [style=invis]\n")));
        assert!(rendered.contains(&format!(" base -> \"{BUSYBOX}\" [style=invis]\n")));
        assert!(rendered.contains(&format!(" \"{UBUNTU}\" -> \"{MYAPP}\"\n")));
        assert!(rendered.contains(&format!(" \"{UBUNTU}\" -> \"{TOOLS}\"\n")));
        assert!(!rendered.contains(HIDDEN_LOWER));
        assert!(!rendered.contains(HIDDEN_UPPER));
        assert!(rendered.contains("\\nmyapp:latest\\nmyapp:1.2\""));
    }

    #[test]
    fn test_short_summary() {
        let options = RenderOptions {
            short: true,
            ..Default::default()
        };
        let rendered = render(fixture_images(), None, &options).unwrap();
        assert_eq!(
            rendered,
            "myapp: latest, 1.2\ntools: dev\nubuntu: 14.04, latest\nbusybox: latest\n"
        );
    }

    #[test]
    fn test_unknown_start_image() {
        let err = render(fixture_images(), Some("postgres"), &tree_options()).unwrap_err();
        assert_eq!(err.to_string(), "Unable to find image postgres = postgres:latest.");
    }

    #[test]
    fn test_digest_ids_and_orphans_through_pipeline() {
        let raw = br#"[
            {"Id": "sha256:0a1b2c3d4e5f60718293", "ParentId": "sha256:ffffffffffffffff", "RepoTags": ["<none>:<none>"], "VirtualSize": 1000},
            {"Id": "sha256:9f8e7d6c5b4a39281706", "ParentId": "sha256:0a1b2c3d4e5f60718293", "RepoTags": ["web:2"], "VirtualSize": 2500}
        ]"#;
        let images = parse_images(raw).unwrap();

        let full = render(images.clone(), None, &tree_options()).unwrap();
        assert_eq!(
            full,
            "└─sha256:0a1b2 Virtual Size: 1.0 KB\n  └─sha256:9f8e7 Virtual Size: 2.5 KB Tags: web:2\n"
        );

        let options = RenderOptions {
            tree: true,
            only_labelled: true,
            ..Default::default()
        };
        let collapsed = render(images, None, &options).unwrap();
        assert_eq!(collapsed, "└─sha256:9f8e7 Virtual Size: 2.5 KB Tags: web:2\n");
    }
}
