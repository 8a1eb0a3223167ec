use taskboard::utils::normalize_channel;

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize_channel("#general"), "general");
    assert_eq!(normalize_channel("  general  "), "general");
    assert_eq!(normalize_channel(""), "");
    assert_eq!(normalize_channel(" #dev\n"), "dev");
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "#general",
        "  general  ",
        "",
        "#",
        "  #  ",
        "##double",
        "# spaced",
        "C024BE91L",
        "team-ops",
        "\t#tabs\t",
    ];
    for raw in inputs {
        let once = normalize_channel(raw);
        assert_eq!(normalize_channel(&once), once, "not idempotent for {raw:?}");
        assert!(!once.starts_with('#'), "sigil left in {once:?}");
        assert_eq!(once.trim(), once, "whitespace left in {once:?}");
    }
}
