//! Mapping repository round-trip tests.

use tempfile::TempDir;
use triplify_map::{MappingEngine, MappingRepository, StoredMapping, TemplateCatalog};
use triplify_model::MappingResult;

fn sample_result() -> MappingResult {
    let engine = MappingEngine::new(TemplateCatalog::builtin());
    let headers: Vec<String> = ["name", "age", "email", "extra"]
        .iter()
        .map(|header| (*header).to_string())
        .collect();
    engine.map_headers(&headers, Some("personas"))
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let repo = MappingRepository::new(dir.path()).expect("create repo");

    let result = sample_result();
    let path = repo.save("Customer Import", &result).expect("save mapping");
    assert!(path.exists());
    assert!(path.to_string_lossy().ends_with("customer_import.json"));

    let stored = repo
        .load("Customer Import")
        .expect("load mapping")
        .expect("mapping exists");
    assert_eq!(stored.result, result);
    assert_eq!(stored.version, "1.0");
    assert!(!stored.saved_at.is_empty());
}

#[test]
fn load_is_none_for_missing_name() {
    let dir = TempDir::new().expect("temp dir");
    let repo = MappingRepository::new(dir.path()).expect("create repo");

    assert!(repo.load("missing").expect("load attempt").is_none());
    assert!(!repo.exists("missing"));
}

#[test]
fn names_normalize_to_the_same_file() {
    let dir = TempDir::new().expect("temp dir");
    let repo = MappingRepository::new(dir.path()).expect("create repo");

    repo.save("Customer Import", &sample_result()).expect("save");
    assert!(repo.exists("customer_import"));
    assert!(repo.exists("CUSTOMER--IMPORT"));
    assert!(repo.load("customer  import").expect("load").is_some());
}

#[test]
fn list_is_sorted_and_skips_foreign_files() {
    let dir = TempDir::new().expect("temp dir");
    let repo = MappingRepository::new(dir.path()).expect("create repo");

    repo.save("orders", &sample_result()).expect("save");
    repo.save("customers", &sample_result()).expect("save");
    std::fs::write(dir.path().join("notes.txt"), "not a mapping").expect("write noise");
    std::fs::write(dir.path().join("broken.json"), "{").expect("write noise");

    let list = repo.list().expect("list mappings");
    let names: Vec<&str> = list.iter().map(|meta| meta.name.as_str()).collect();
    assert_eq!(names, vec!["customers", "orders"]);
    assert_eq!(list[0].template_used, "personas");
    assert_eq!(list[0].mapped_count, 3);
}

#[test]
fn delete_reports_whether_anything_was_removed() {
    let dir = TempDir::new().expect("temp dir");
    let repo = MappingRepository::new(dir.path()).expect("create repo");

    repo.save("orders", &sample_result()).expect("save");
    assert!(repo.delete("orders").expect("delete"));
    assert!(!repo.exists("orders"));
    assert!(!repo.delete("orders").expect("second delete"));
}

#[test]
fn description_survives_the_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let repo = MappingRepository::new(dir.path()).expect("create repo");

    let stored = StoredMapping::new(sample_result()).with_description("march import");
    repo.save_stored("orders", &stored).expect("save stored");

    let loaded = repo.load("orders").expect("load").expect("exists");
    assert_eq!(loaded.description.as_deref(), Some("march import"));
}
