use flate2::write::GzEncoder;
use flate2::Compression;
use flowpack_core::error::load::LoadWorkflowError;
use flowpack_core::loader::WorkflowLoader;
use flowpack_core::model::workflow::{FloatArray, PropertyValue, WorkflowDescription};
use std::path::{Path, PathBuf};

fn write_package(dir: &Path, files: &[(&str, &[u8])]) -> PathBuf {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, name, *contents).unwrap();
    }
    let bytes = builder.into_inner().unwrap().finish().unwrap();
    let path = dir.join("package.tar.gz");
    std::fs::write(&path, bytes).unwrap();
    path
}

fn float_bytes(values: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for value in values {
        bytes.extend_from_slice(&value.to_ne_bytes());
    }
    bytes
}

fn discard_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}

#[test]
fn loads_a_package_with_scalars_and_linked_payloads() {
    let tmp = tempfile::tempdir().unwrap();
    let weights = (0..10).map(|i| i as f32 / 4.0).collect::<Vec<_>>();
    let document = "\
pipeline: mnist
Units:
  - Name: All2All
    x: hello
    outputs: 10
    link_to_weights: weights.bin
";
    let package = write_package(
        tmp.path(),
        &[
            ("workflow.yaml", document.as_bytes()),
            ("weights.bin", &float_bytes(&weights)),
        ],
    );

    let mut loader = WorkflowLoader::new(discard_logger());
    loader.load(&package).unwrap();

    let description = loader.workflow_description();
    assert_eq!(
        description.properties.get("pipeline"),
        Some(&PropertyValue::Text("mnist".to_string()))
    );
    assert_eq!(description.units.len(), 1);
    let unit = &description.units[0];
    assert_eq!(unit.name, "All2All");
    assert_eq!(
        unit.properties.get("x"),
        Some(&PropertyValue::Text("hello".to_string()))
    );
    assert_eq!(
        unit.properties.get("outputs"),
        Some(&PropertyValue::Number(10.0))
    );
    assert_eq!(
        unit.properties.get("weights"),
        Some(&PropertyValue::FloatArray(FloatArray::from(weights)))
    );
    assert!(!unit.properties.contains_key("link_to_weights"));
}

#[test]
fn loading_the_same_package_twice_yields_equal_descriptions() {
    let tmp = tempfile::tempdir().unwrap();
    let document = "\
seed: 42
Units:
  - Name: ZeroFiller
  - Name: All2All
    link_to_bias: bias.bin
";
    let package = write_package(
        tmp.path(),
        &[
            ("workflow.yaml", document.as_bytes()),
            ("bias.bin", &float_bytes(&[0.5, -0.5])),
        ],
    );

    let mut loader = WorkflowLoader::new(discard_logger());
    loader.load(&package).unwrap();
    let first = loader.workflow_description();
    loader.load(&package).unwrap();
    let second = loader.workflow_description();

    assert_eq!(first, second);
    assert_eq!(second.units.len(), 2);
}

#[test]
fn the_workspace_is_removed_after_success_and_after_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let parent = tmp.path().join("workspaces");
    let package = write_package(tmp.path(), &[("workflow.yaml", b"Units: []\n")]);

    let mut loader = WorkflowLoader::builder()
        .with_workspace_in(parent.clone())
        .build();

    loader.load(&package).unwrap();
    assert_eq!(std::fs::read_dir(&parent).unwrap().count(), 0);

    let corrupt = tmp.path().join("corrupt.tar.gz");
    std::fs::write(&corrupt, b"these bytes are not a gzip stream").unwrap();
    loader.load(&corrupt).unwrap_err();
    assert_eq!(std::fs::read_dir(&parent).unwrap().count(), 0);
}

#[test]
fn a_corrupt_package_is_an_archive_extraction_error() {
    let tmp = tempfile::tempdir().unwrap();
    let corrupt = tmp.path().join("corrupt.tar.gz");
    std::fs::write(&corrupt, b"these bytes are not a gzip stream").unwrap();

    let mut loader = WorkflowLoader::new(discard_logger());
    let err = loader.load(&corrupt).unwrap_err();

    assert!(matches!(err, LoadWorkflowError::ArchiveExtraction(_)));
    assert_eq!(loader.workflow_description(), WorkflowDescription::default());
}

#[test]
fn a_package_without_a_document_is_a_workflow_extraction_error() {
    let tmp = tempfile::tempdir().unwrap();
    let package = write_package(tmp.path(), &[("stray.bin", &float_bytes(&[1.0])[..])]);

    let mut loader = WorkflowLoader::new(discard_logger());
    let err = loader.load(&package).unwrap_err();

    assert!(matches!(err, LoadWorkflowError::WorkflowExtraction(_)));
}

#[test]
fn a_truncated_payload_is_a_workflow_extraction_error() {
    let tmp = tempfile::tempdir().unwrap();
    let document = "\
Units:
  - Name: All2All
    link_to_weights: weights.bin
";
    let package = write_package(
        tmp.path(),
        &[
            ("workflow.yaml", document.as_bytes()),
            ("weights.bin", &[0u8; 6]),
        ],
    );

    let mut loader = WorkflowLoader::new(discard_logger());
    let err = loader.load(&package).unwrap_err();

    assert!(matches!(err, LoadWorkflowError::WorkflowExtraction(_)));
    assert_eq!(loader.workflow_description(), WorkflowDescription::default());
}

#[test]
fn unit_order_follows_the_document() {
    let tmp = tempfile::tempdir().unwrap();
    let document = "\
Units:
  - Name: Loader
  - Name: Conv
  - Name: Softmax
";
    let package = write_package(tmp.path(), &[("workflow.yaml", document.as_bytes())]);

    let mut loader = WorkflowLoader::new(discard_logger());
    loader.load(&package).unwrap();

    let names = loader
        .workflow_description()
        .units
        .iter()
        .map(|unit| unit.name.clone())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Loader", "Conv", "Softmax"]);
}

#[test]
fn print_workflow_structure_renders_arrays_as_shape_only() {
    let tmp = tempfile::tempdir().unwrap();
    let document = "\
Units:
  - Name: All2All
    link_to_weights: weights.bin
";
    let package = write_package(
        tmp.path(),
        &[
            ("workflow.yaml", document.as_bytes()),
            ("weights.bin", &float_bytes(&[0.25; 16])),
        ],
    );

    let mut loader = WorkflowLoader::new(discard_logger());
    loader.load(&package).unwrap();

    let dump = loader.print_workflow_structure();
    assert!(dump.contains("Unit name: All2All"));
    assert!(dump.contains("weights: float32[16]"));
    assert!(!dump.contains("0.25"));
}
