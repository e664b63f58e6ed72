use std::num::{ParseFloatError, ParseIntError};

use argot::{
    ArgumentConfig, Arity, CallError, CoerceError, ConversionError, Converter, RawInput, Value,
    ValueType, Values, coerce,
};

#[test]
fn fixed_arity_round_trip() {
    let size = ArgumentConfig::new()
        .name("SIZE")
        .value_type(ValueType::Int)
        .arity(2)
        .default([1, 2])
        .build()
        .unwrap();

    assert_eq!(
        coerce(&size, RawInput::Multiple(Some(&["3", "4"]))).unwrap(),
        Values::many([3, 4])
    );
    assert_eq!(
        coerce(&size, RawInput::Multiple(None)).unwrap(),
        Values::many([1, 2])
    );

    assert!(matches!(
        coerce(&size, RawInput::Multiple(Some(&["3", "4", "5"]))),
        Err(CoerceError::Shape { .. })
    ));
}

#[test]
fn choice_restriction() {
    let mode = ArgumentConfig::new()
        .long("mode")
        .choices([("a", ""), ("b", "")])
        .restrict(true)
        .build()
        .unwrap();

    let error = coerce(&mode, RawInput::Single(Some("c"))).unwrap_err();
    let CoerceError::Call(CallError { text, code }) = &error else {
        panic!("expected a call error, got {error:?}");
    };

    assert_eq!(*code, 1);
    assert_eq!(error.exit_code(), 1);
    assert_eq!(text, r#"argument --mode: invalid choice "c" (choose from a, b)"#);

    assert_eq!(
        coerce(&mode, RawInput::Single(Some("a"))).unwrap(),
        Values::one("a")
    );
}

#[test]
fn absent_input_skips_choices() {
    let mode = ArgumentConfig::new()
        .short("m")
        .choices([("fast", ""), ("slow", "")])
        .build()
        .unwrap();

    assert_eq!(
        coerce(&mode, RawInput::Single(None)).unwrap(),
        Values::Absent
    );
}

#[test]
fn first_violation_in_a_sequence() {
    let levels = ArgumentConfig::new()
        .name("LEVEL")
        .arity(Arity::OneOrMore)
        .value_type(ValueType::Int)
        .choices([("1", ""), ("2", ""), ("3", "")])
        .build()
        .unwrap();

    let error = levels
        .coerce(RawInput::Multiple(Some(&["1", "7", "9"])))
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        r#"argument LEVEL: invalid choice "7" (choose from 1, 2, 3)"#
    );

    assert_eq!(
        levels.coerce(RawInput::Multiple(Some(&["3", "1"]))).unwrap(),
        Values::many([3, 1])
    );
}

#[test]
fn flags() {
    let verbose = ArgumentConfig::new()
        .long("verbose")
        .arity(0)
        .default(false)
        .build()
        .unwrap();

    assert_eq!(
        coerce(&verbose, RawInput::Presence(true)).unwrap(),
        Values::one(true)
    );
    assert_eq!(
        coerce(&verbose, RawInput::Presence(false)).unwrap(),
        Values::one(false)
    );

    let color = ArgumentConfig::new()
        .long("no-color")
        .arity(0)
        .default(true)
        .build()
        .unwrap();

    assert_eq!(
        coerce(&color, RawInput::Presence(true)).unwrap(),
        Values::one(false)
    );
}

#[test]
fn counting_flags() {
    let verbose = ArgumentConfig::new()
        .short("v")
        .arity(0)
        .append(true)
        .build()
        .unwrap();

    assert_eq!(
        coerce(&verbose, RawInput::Count(3)).unwrap(),
        Values::one(Value::Int(3))
    );
    assert_eq!(
        coerce(&verbose, RawInput::Count(0)).unwrap(),
        Values::one(Value::Int(0))
    );
    assert!(matches!(
        coerce(&verbose, RawInput::Single(Some("3"))),
        Err(CoerceError::Shape { .. })
    ));
}

#[test]
fn conversion_failures_are_not_wrapped() {
    let jobs = ArgumentConfig::new()
        .long("jobs")
        .value_type(ValueType::Int)
        .build()
        .unwrap();

    let error = coerce(&jobs, RawInput::Single(Some("lots"))).unwrap_err();
    assert!(
        error
            .conversion_error()
            .is_some_and(|error| error.is::<ParseIntError>())
    );
    assert_eq!(error.exit_code(), 2);

    let ratio = ArgumentConfig::new()
        .long("ratio")
        .value_type(ValueType::Float)
        .build()
        .unwrap();

    let error = coerce(&ratio, RawInput::Single(Some("half"))).unwrap_err();
    assert!(
        error
            .conversion_error()
            .is_some_and(|error| error.is::<ParseFloatError>())
    );
}

#[test]
fn custom_types() {
    fn hex(raw: &str) -> Result<Value, ConversionError> {
        let digits = raw.strip_prefix("0x").unwrap_or(raw);
        Ok(Value::Int(i64::from_str_radix(digits, 16)?))
    }

    let address = ArgumentConfig::new()
        .long("address")
        .value_type(ValueType::Custom(
            Converter::new("hex", hex).accepting(|value| matches!(value, Value::Int(_))),
        ))
        .default(0)
        .build()
        .unwrap();

    assert_eq!(address.value_type().name(), "hex");
    assert_eq!(
        coerce(&address, RawInput::Single(Some("0xff"))).unwrap(),
        Values::one(255)
    );
    assert_eq!(
        coerce(&address, RawInput::Single(None)).unwrap(),
        Values::one(0)
    );
    assert!(coerce(&address, RawInput::Single(Some("0xzz"))).is_err());
}

#[test]
fn enum_types() {
    let level = ArgumentConfig::new()
        .long("log-level")
        .value_type(ValueType::enumeration(["error", "warn", "info"]))
        .default("warn")
        .build()
        .unwrap();

    assert_eq!(level.name(), "LOG-LEVEL");
    assert_eq!(
        level.coerce(RawInput::Single(Some("info"))).unwrap(),
        Values::one("info")
    );

    let error = level
        .coerce(RawInput::Single(Some("loud")))
        .unwrap_err();
    assert!(matches!(error, CoerceError::Conversion { .. }));
}

#[test]
fn paths() {
    let output = ArgumentConfig::new()
        .long("output")
        .value_type(ValueType::Path)
        .build()
        .unwrap();

    assert_eq!(
        output.coerce(RawInput::Single(Some("out/report.txt"))).unwrap(),
        Values::one(std::path::PathBuf::from("out/report.txt"))
    );
}
