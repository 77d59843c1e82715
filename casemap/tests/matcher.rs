use casemap::{Format, Matcher};
use test_case::test_case;

#[test_case("twowords", "foobar22tarball", true; "flat")]
#[test_case("TWOWORDS", "FOOBAR22TARBALL", true; "upper")]
#[test_case("twoWords", "fooBar22Tarball", true; "camel")]
#[test_case("TwoWords", "FooBar22Tarball", true; "pascal")]
#[test_case("two_words", "foo_bar_22_tarball", true; "snake")]
#[test_case("TWO_WORDS", "FOO_BAR_22_TARBALL", true; "screaming_snake")]
#[test_case("two_Words", "foo_Bar_22_Tarball", true; "camel_snake")]
#[test_case("Two_Words", "Foo_Bar_22_Tarball", true; "pascal_snake")]
#[test_case("two-words", "foo-bar-22-tarball", true; "kebab")]
#[test_case("TWO-WORDS", "FOO-BAR-22-TARBALL", true; "screaming_kebab")]
#[test_case("two-Words", "foo-Bar-22-Tarball", true; "camel_kebab")]
#[test_case("Two-Words", "Foo-Bar-22-Tarball", true; "pascal_kebab")]
#[test_case("twowords", "Foo-Bar-22-Tarball", false; "wrong_notation")]
#[test_case("two_words", "foo_bar_22_tarball_", false; "no_normalization")]
fn automatic_conversion(format: &str, key: &str, want: bool) {
    let mut matcher = Matcher::builder(format).build().unwrap();
    assert_eq!(matcher.matches(key, "FooBar22Tarball"), want);
}

/// Any field name round-trips through its own format's conversion.
#[test]
fn converted_keys_always_match() {
    for format in Format::ALL {
        let mut matcher = Matcher::builder(format.as_str()).build().unwrap();
        for field in ["HTTPHeader22", "FirstName", "CNAMEs"] {
            let key = format.convert(field);
            assert!(matcher.matches(&key, field), "{format}: '{key}' vs '{field}'");
        }
    }
}

#[test]
fn override_wins_over_conversion() {
    // `Two-Words` would render `HTTPHeader` as `Http-Header`, which never equals the stored key.
    let mut plain = Matcher::builder("Two-Words").build().unwrap();
    assert!(!plain.matches("HTTP-Header", "HTTPHeader"));

    let mut matcher = Matcher::builder("Two-Words")
        .with_map([("HTTP-Header", "HTTPHeader")])
        .build()
        .unwrap();
    assert!(matcher.matches("HTTP-Header", "HTTPHeader"));
}

#[test]
fn override_for_another_field_falls_through() {
    let mut matcher = Matcher::builder("Two-Words")
        .with_map([("HTTP-Header", "HTTPHeader")])
        .build()
        .unwrap();

    // The exception does not concern `FirstName`; it still matches by conversion alone.
    assert!(!matcher.matches("HTTP-Header", "FirstName"));
    assert!(matcher.matches("First-Name", "FirstName"));
}

#[test]
fn sentinel_pins_keys_to_never_match() {
    let mut matcher = Matcher::builder("two_words")
        .with_map([("http_header", "-"), ("foo_bar", "-")])
        .build()
        .unwrap();

    // Without the sentinel both keys would match their fields by conversion.
    assert!(!matcher.matches("http_header", "HTTPHeader"));
    assert!(!matcher.matches("foo_bar", "FooBar"));
    assert!(matcher.matches("tar_ball", "TarBall"));
}

#[test]
fn unknown_format_fails_at_build() {
    let err = Matcher::builder("Invalid").build().unwrap_err();
    assert!(err.to_string().contains("Known formats:"));
}

#[test]
fn duplicate_keys_fail_at_build() {
    let err = Matcher::builder("two_words")
        .with_map([("first_name", "FirstName")])
        .with_map([("first_name", "Renamed")])
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "'first_name' is duplicated");
}

#[test]
fn duplicate_fields_fail_at_build() {
    let err = Matcher::builder("two_words")
        .with_map([("first_name", "FirstName"), ("given_name", "FirstName")])
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "'given_name' is duplicated");
}

#[test]
fn trace_writes_one_line_per_call_in_order() {
    let mut log = Vec::new();
    {
        let mut matcher = Matcher::builder("Two-Words")
            .with_map([("HTTP-Header", "HTTPHeader")])
            .with_trace(&mut log)
            .build()
            .unwrap();

        assert!(matcher.matches("HTTP-Header", "HTTPHeader"));
        assert!(!matcher.matches("HTTP-Header", "Name"));
        assert!(matcher.matches("First-Name", "FirstName"));
    }

    assert_eq!(
        String::from_utf8(log).unwrap(),
        "(key) 'HTTP-Header' == 'HTTPHeader' (struct field)\n\
         (key) 'HTTP-Header' != 'Name' (struct field)\n\
         (key) 'First-Name' == 'FirstName' (struct field)\n"
    );
}
