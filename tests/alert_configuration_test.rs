use opsmgr_config::config::{AlertConfiguration, ConfigError, LanguagePackId};

#[test]
fn test_language_pack_id_scenario() {
    let mut alert = AlertConfiguration::new();

    alert
        .set_language_pack_id("ENU")
        .expect("Failed to set a three-letter language pack");
    assert_eq!(alert.language_pack_id(), Some("ENU"));

    let result = alert.set_language_pack_id("EN");
    assert!(
        matches!(result, Err(ConfigError::InvalidArgument { .. })),
        "Two-letter language pack should be rejected"
    );
    assert_eq!(
        alert.language_pack_id(),
        Some("ENU"),
        "Rejected value must not replace the stored one"
    );
}

#[test]
fn test_every_three_character_value_round_trips() {
    let mut alert = AlertConfiguration::new();
    for code in ["ENU", "DEU", "CHS", "PTB", "   ", "a-b", "日本語", "😀a"] {
        alert
            .set_language_pack_id(code)
            .unwrap_or_else(|e| panic!("{code:?} should be accepted: {e}"));
        assert_eq!(alert.language_pack_id(), Some(code));
    }
}

#[test]
fn test_other_lengths_are_rejected_without_change() {
    let mut alert = AlertConfiguration::new();
    alert.set_language_pack_id("FRA").expect("Failed to set FRA");

    for code in ["", "F", "FR", "FRAN", "French", "😀", "😀😀😀"] {
        let err = alert
            .set_language_pack_id(code)
            .expect_err("Non-three-character value should be rejected");
        assert_eq!(err.field(), "LanguagePackID");
        assert_eq!(alert.language_pack_id(), Some("FRA"));
    }
}

#[test]
fn test_pre_validated_language_pack_is_stored() {
    let id: LanguagePackId = "ITA".parse().expect("Failed to parse ITA");
    let mut alert = AlertConfiguration::new();
    alert.set_language_pack(id.clone());
    assert_eq!(alert.language_pack(), Some(&id));

    alert.clear_language_pack_id();
    assert_eq!(alert.language_pack_id(), None);
}

#[test]
fn test_string_resource_names_alias_one_value() {
    let mut alert = AlertConfiguration::new();

    alert.set_string_resource("x");
    assert_eq!(alert.string_resource_name(), Some("x"));
    assert_eq!(alert.string_resource(), Some("x"));

    alert.set_string_resource_name("Contoso.Alert.Message");
    assert_eq!(alert.string_resource(), Some("Contoso.Alert.Message"));
}

#[test]
fn test_name_and_description_round_trip_unchanged() {
    let mut alert = AlertConfiguration::new();
    let values = ["", "Disk full", "  padded  ", "Line one\nLine two", "Échec {0} – 100%"];

    for value in values {
        alert.set_alert_name(value);
        alert.set_alert_description(value);
        assert_eq!(alert.alert_name(), Some(value));
        assert_eq!(alert.alert_description(), Some(value));
    }
}
