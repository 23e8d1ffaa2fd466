//! Integration tests for scaffold generation

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use model_scaffold::config::DefaultSettings;
use model_scaffold::{
    GenerationRequest, ModelType, RequestOptions, ScaffoldError, ScaffoldGenerator, TemplateSource,
};

fn options(dir: &Path, model_type: &str) -> RequestOptions {
    RequestOptions {
        dir: dir.to_path_buf(),
        model_type: model_type.to_string(),
        base_docker_image: Some("py:3.9".to_string()),
        target_docker_image: Some("myrepo/img:1".to_string()),
        k8s_resource_name: Some("svc".to_string()),
        k8s_namespace: Some("default".to_string()),
    }
}

fn generate(dir: &Path, model_type: &str) -> Result<(), ScaffoldError> {
    let request = options(dir, model_type).resolve(&DefaultSettings::default())?;
    ScaffoldGenerator::new(TemplateSource::Embedded).generate(&request)?;
    Ok(())
}

/// Relative path -> contents (`None` for directories)
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let contents = entry
                .file_type()
                .is_file()
                .then(|| fs::read(entry.path()).unwrap());
            (relative, contents)
        })
        .collect()
}

const EXPECTED_FILES: [&str; 10] = [
    "container_util.sh",
    "deployment.yml",
    "environment.yml",
    "Dockerfile",
    "src/prediction_service.py",
    "src/utils.py",
    "requirements.txt",
    "model/metadata.yml",
    "README.md",
    "DEPLOYMENT.md",
];

/// Test the documented output layout
#[test]
fn test_python_sklearn_layout() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    generate(&out, "python_sklearn").unwrap();

    let tree = snapshot(&out);
    let files: Vec<_> = tree
        .iter()
        .filter(|(_, contents)| contents.is_some())
        .map(|(path, _)| path.clone())
        .collect();

    let mut expected: Vec<_> = EXPECTED_FILES.iter().map(PathBuf::from).collect();
    expected.sort();
    assert_eq!(files, expected);

    let dirs: Vec<_> = tree
        .iter()
        .filter(|(_, contents)| contents.is_none())
        .map(|(path, _)| path.clone())
        .collect();
    assert_eq!(dirs, vec![PathBuf::from("model"), PathBuf::from("src")]);
}

/// Test that `python` is a pure alias for `python_sklearn`
#[test]
fn test_python_alias_produces_identical_tree() {
    let temp_dir = TempDir::new().unwrap();
    let python = temp_dir.path().join("python");
    let sklearn = temp_dir.path().join("python_sklearn");

    generate(&python, "python").unwrap();
    generate(&sklearn, "python_sklearn").unwrap();

    assert_eq!(snapshot(&python), snapshot(&sklearn));
}

/// Test that h2o_mojo gets the common files plus two empty directories
#[test]
fn test_h2o_mojo_layout() {
    let temp_dir = TempDir::new().unwrap();
    let sklearn = temp_dir.path().join("sklearn");
    let h2o = temp_dir.path().join("h2o");

    generate(&sklearn, "python_sklearn").unwrap();
    generate(&h2o, "h2o_mojo").unwrap();

    let sklearn_tree = snapshot(&sklearn);
    let h2o_tree = snapshot(&h2o);

    for path in sklearn_tree.keys() {
        assert!(h2o_tree.contains_key(path), "h2o_mojo is missing {}", path.display());
    }

    let extra: Vec<_> = h2o_tree
        .keys()
        .filter(|path| !sklearn_tree.contains_key(*path))
        .cloned()
        .collect();
    assert_eq!(
        extra,
        vec![PathBuf::from("ext_packages"), PathBuf::from("license")]
    );
    assert!(h2o_tree[Path::new("ext_packages")].is_none());
    assert!(h2o_tree[Path::new("license")].is_none());

    // Shared documents, model-specific sources
    assert_eq!(
        sklearn_tree[Path::new("README.md")],
        h2o_tree[Path::new("README.md")]
    );
    assert_ne!(
        sklearn_tree[Path::new("src/utils.py")],
        h2o_tree[Path::new("src/utils.py")]
    );
}

/// Test that a second run against the same directory succeeds
#[test]
fn test_second_run_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    generate(&out, "h2o_mojo").unwrap();
    let first = snapshot(&out);

    fs::write(out.join("deployment.yml"), "edited").unwrap();
    fs::write(out.join("license").join("license.sig"), "user file").unwrap();

    generate(&out, "h2o_mojo").unwrap();
    let second = snapshot(&out);

    assert_eq!(
        first[Path::new("deployment.yml")],
        second[Path::new("deployment.yml")]
    );
    // Files the user added are left alone
    assert_eq!(
        fs::read_to_string(out.join("license").join("license.sig")).unwrap(),
        "user file"
    );
}

/// Test an invalid model type leaves the filesystem untouched
#[test]
fn test_invalid_model_type_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    let err = generate(&out, "bogus").unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("python, python_sklearn, h2o_mojo"));
    assert!(!out.exists());
}

/// Test substituted values land in the rendered files
#[test]
fn test_substituted_values() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    let request = GenerationRequest::new(
        &out,
        ModelType::H2oMojo,
        "h2oai/base:2.0",
        "registry.example.com/team/credit-model:7",
        "credit-model",
        "risk",
    );

    ScaffoldGenerator::default().generate(&request).unwrap();

    let util = fs::read_to_string(out.join("container_util.sh")).unwrap();
    assert!(util.contains("registry.example.com/team/credit-model:7"));

    let deployment = fs::read_to_string(out.join("deployment.yml")).unwrap();
    assert!(deployment.contains("name: credit-model"));
    assert!(deployment.contains("namespace: risk"));
    assert!(!deployment.contains("{{"));

    let dockerfile = fs::read_to_string(out.join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("FROM h2oai/base:2.0"));
}
