//! Tests for KeyPathService

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use lottie_keypath::application::services::KeyPathService;
use lottie_keypath::application::ApplicationError;
use lottie_keypath::config::{RenderStyle, Settings};
use lottie_keypath::domain::DomainError;
use lottie_keypath::infrastructure::traits::{MemoryInputReader, RealInputReader};
use lottie_keypath::util::testing::{fixture_path, init_test_setup};

const PRECOMP: &str =
    r#"{"nm":"Root","assets":[{"id":"a1","nm":"Comp1","shapes":[{"nm":"Shape1"}]}],"layers":[{"refId":"a1"}]}"#;

fn service_with_stdin(body: &str, settings: Settings) -> KeyPathService {
    init_test_setup();
    let input = Arc::new(MemoryInputReader::new().with_stdin(body));
    KeyPathService::new(input, Arc::new(settings))
}

#[test]
fn given_stdin_document_when_dumping_tree_then_renders_indented() {
    // Arrange
    let service = service_with_stdin(PRECOMP, Settings::default());

    // Act
    let result = service.tree(None, None).unwrap();

    // Assert
    assert_eq!(result.rendered, "Root\n  Comp1\n    Shape1\n");
    assert_eq!(result.tree.len(), 3);
}

#[test]
fn given_tree_style_override_when_dumping_then_box_drawing() {
    let service = service_with_stdin(PRECOMP, Settings::default());

    let result = service.tree(None, Some(RenderStyle::Tree)).unwrap();

    assert_eq!(result.rendered, "Root\n└── Comp1\n    └── Shape1\n");
}

#[test]
fn given_configured_indent_when_dumping_then_used_per_level() {
    let settings = Settings {
        indent: "\t".into(),
        ..Settings::default()
    };
    let service = service_with_stdin(PRECOMP, settings);

    let result = service.tree(None, None).unwrap();

    assert_eq!(result.rendered, "Root\n\tComp1\n\t\tShape1\n");
}

#[test]
fn given_document_when_listing_paths_then_configured_separator() {
    let settings = Settings {
        separator: "/".into(),
        ..Settings::default()
    };
    let service = service_with_stdin(PRECOMP, settings);

    assert_eq!(service.paths(None, None).unwrap(), vec!["Root/Comp1/Shape1"]);
    assert_eq!(service.paths(None, Some(".")).unwrap(), vec!["Root.Comp1.Shape1"]);
}

#[test]
fn given_missing_root_name_when_dumping_then_domain_error() {
    let service = service_with_stdin(r#"{"layers": []}"#, Settings::default());

    let err = service.tree(None, None).unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::MissingRootName)));
}

#[test]
fn given_invalid_json_when_dumping_then_decode_error() {
    let service = service_with_stdin("{\"nm\": ", Settings::default());

    let err = service.tree(None, None).unwrap_err();

    assert!(matches!(err, ApplicationError::Decode { .. }));
}

#[test]
fn given_blank_input_when_dumping_then_empty_input_error() {
    let service = service_with_stdin(" \n\t", Settings::default());

    let err = service.tree(None, None).unwrap_err();

    assert!(matches!(err, ApplicationError::EmptyInput));
}

#[test]
fn given_fixture_file_when_dumping_with_real_reader_then_reads_file() {
    let service = KeyPathService::new(Arc::new(RealInputReader), Arc::new(Settings::default()));

    let result = service.tree(Some(fixture_path("flat.json").as_path()), None).unwrap();

    assert_eq!(result.rendered, "Root\n  L1\n");
}

#[test]
fn given_temp_file_when_dumping_then_reads_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("anim.json");
    std::fs::write(&path, PRECOMP).unwrap();
    let service = KeyPathService::new(Arc::new(RealInputReader), Arc::new(Settings::default()));

    let paths = service.paths(Some(path.as_path()), None).unwrap();

    assert_eq!(paths, vec!["Root.Comp1.Shape1"]);
}

#[test]
fn given_missing_file_when_dumping_then_input_error_with_path() {
    let service = KeyPathService::new(Arc::new(RealInputReader), Arc::new(Settings::default()));

    let err = service
        .tree(Some(Path::new("/nonexistent/anim.json")), None)
        .unwrap_err();

    match err {
        ApplicationError::Input { context, source } => {
            assert_eq!(context, "/nonexistent/anim.json");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected input error, got {other:?}"),
    }
}
