use plugsmith::validation::{
    validate_answers, validate_min_obsidian_version, validate_node_version,
    validate_plugin_id, validate_plugin_name, validate_repo_url,
};

#[test]
fn test_valid_plugin_ids() {
    for id in ["my-plugin", "my-awesome-plugin", "project123", "a", "my-plugin-123"] {
        assert!(validate_plugin_id(id).is_ok(), "expected '{id}' to be valid");
    }
}

#[test]
fn test_invalid_plugin_ids() {
    for id in [
        "123invalid",                  // starts with number
        "Plugin-Name",                 // uppercase
        "project@with#special$chars",  // special characters
        "name_with_underscore",        // underscore
    ] {
        let message = validate_plugin_id(id).unwrap_err();
        assert!(
            message.contains("must start with a letter"),
            "unexpected message for '{id}': {message}"
        );
    }
}

#[test]
fn test_empty_plugin_id_reports_emptiness_not_pattern() {
    for id in ["", "   ", "\t"] {
        assert_eq!(validate_plugin_id(id).unwrap_err(), "Plugin id cannot be empty");
    }
}

#[test]
fn test_plugin_name() {
    for name in ["My Plugin", "plugin", "Plugin 2", "spaced name-with_both"] {
        assert!(validate_plugin_name(name).is_ok(), "expected '{name}' to be valid");
    }
    for name in ["1plugin", "plugin!", "@name"] {
        assert!(validate_plugin_name(name).unwrap_err().contains("must start with a letter"));
    }
    assert_eq!(validate_plugin_name("  ").unwrap_err(), "Plugin name cannot be empty");
}

#[test]
fn test_valid_min_obsidian_versions() {
    for version in ["1.5.0", "0.16.3", "2.0.1"] {
        assert!(validate_min_obsidian_version(version).is_ok());
    }
}

#[test]
fn test_invalid_min_obsidian_versions() {
    for version in [
        "1.5",        // missing patch
        "1",          // too short
        "v1.5.0",     // prefix
        "1.5.0-beta", // pre-release
        "1.5.0.1",    // too many segments
    ] {
        let message = validate_min_obsidian_version(version).unwrap_err();
        assert!(message.contains("format X.Y.Z"), "unexpected message for '{version}'");
    }
    assert_eq!(
        validate_min_obsidian_version("").unwrap_err(),
        "Minimum Obsidian version cannot be empty"
    );
}

#[test]
fn test_repo_urls() {
    for url in ["https://github.com/user/repo", "https://github.com/user/repo-name"] {
        assert!(validate_repo_url(url).is_ok());
    }
    for url in [
        "http://github.com/user/repo",
        "https://gitlab.com/user/repo",
        "example.com/repo",
        "git@github.com:test/repo",
        "ftp://example.com/repo",
    ] {
        assert!(validate_repo_url(url).unwrap_err().contains("GitHub HTTPS URL"));
    }
    assert_eq!(validate_repo_url("").unwrap_err(), "Repository URL cannot be empty");
}

#[test]
fn test_node_versions() {
    for version in ["18", "20", "22"] {
        assert!(validate_node_version(version).is_ok());
    }
    for version in ["v20", "20.0", "twenty"] {
        assert!(validate_node_version(version).unwrap_err().contains("major version number"));
    }
    assert_eq!(validate_node_version("").unwrap_err(), "Node.js version cannot be empty");
}

#[test]
fn test_values_are_trimmed_before_matching() {
    assert!(validate_plugin_id(" my-plugin ").is_ok());
    assert!(validate_min_obsidian_version("1.5.0\n").is_ok());
    assert!(validate_node_version(" 20 ").is_ok());
}

#[test]
fn test_validate_answers_checks_fields_in_declared_order() {
    // Both the URL and the Node version are malformed; the URL is declared
    // earlier, so its message is the one reported.
    let answers = serde_json::json!({
        "plugin_id": "my-plugin",
        "plugin_name": "My Plugin",
        "min_obsidian_version": "1.5.0",
        "repo_url": "https://gitlab.com/user/repo",
        "node_version": "v20",
    });

    let message = validate_answers(&answers).unwrap_err();
    assert!(message.starts_with("Repository URL"));
}

#[test]
fn test_validate_answers_accepts_well_formed_input() {
    let answers = serde_json::json!({
        "plugin_id": "my-plugin",
        "plugin_name": "My Plugin",
        "min_obsidian_version": "1.5.0",
        "repo_url": "https://github.com/user/my-plugin",
        "node_version": "20",
    });

    assert!(validate_answers(&answers).is_ok());
}
