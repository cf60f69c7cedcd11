//! Integration tests for building namespaces from config files

use propex_config::{CONFIG_ENV, Config};
use propex_core::platform::PATH_SEPARATOR;
use propex_engine::PropertyMaps;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn test_configured_defaults_survive_duplicate_and_reset() {
    let (_temp, path) = write_config(
        r#"
[defaults."Misc.count"]
sep = ";"

[defaults."Misc.sublist"]
sep = ";"
count = "2"
"#,
    );

    let prototype = Config::load_or_default(Some(path.as_path()))
        .unwrap()
        .build_namespace()
        .unwrap();
    let mut pm = prototype.duplicate();

    pm.property_mut("Misc", "count").unwrap().set_attribute("list", "a;b;c");
    assert_eq!(pm.current("Misc", "count").unwrap(), "3");

    let sublist = pm.property_mut("Misc", "sublist").unwrap();
    sublist.set_attribute("list", "a;b;c;d");
    sublist.set_attribute("index", "1");
    assert_eq!(pm.current("Misc", "sublist").unwrap(), "b;c");

    pm.reset_all();
    assert_eq!(pm, prototype);
    assert_eq!(
        pm.property("Misc", "count").unwrap().attribute("sep"),
        Some(";")
    );

    // The shared catalog keeps its own defaults
    assert_eq!(
        PropertyMaps::template()
            .property("Misc", "count")
            .unwrap()
            .attribute("sep"),
        Some(PATH_SEPARATOR)
    );
}

#[test]
fn test_config_from_environment() {
    let (_temp, path) = write_config("[defaults.\"Misc.if\"]\nthen = \"yes\"\nelse = \"no\"\n");

    temp_env::with_var(CONFIG_ENV, Some(&path), || {
        let mut pm = Config::load_or_default(None)
            .unwrap()
            .build_namespace()
            .unwrap();
        pm.property_mut("Misc", "if").unwrap().set_attribute("cond", "TRUE");
        assert_eq!(pm.current("Misc", "if").unwrap(), "yes");
    });
}

#[test]
fn test_unknown_property_in_config_fails_build() {
    let (_temp, path) = write_config("[defaults.\"Tools.javac\"]\npath = \"/usr/bin\"\n");
    let config = Config::load(&path).unwrap();
    let err = config.build_namespace().unwrap_err();
    assert!(err.to_string().contains("Tools.javac"), "{err}");
}
