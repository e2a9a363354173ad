use trigrid::GridConfig;
use validator::Validate;

#[test]
fn test_config_validation() {
    let config = GridConfig {
        side_len: -1.0, // invalid
        height: 0.0,    // invalid (degenerate triangles)
    };

    let validation_errors = config.validate().unwrap_err();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["height", "side_len"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_default_config_is_valid() {
    GridConfig::default().validate().unwrap();
    GridConfig::equilateral(1.0).validate().unwrap();
}
