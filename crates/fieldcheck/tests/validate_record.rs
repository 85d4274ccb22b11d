use std::thread;

use fieldcheck::{
    Field, FieldContext, FieldMeta, FailureSink, Record, Registry, Result, Rule, Tag,
    ValidationError, Validator,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("fieldcheck=debug")
        .try_init();
}

struct Profile {
    first_name: String,
    id: u64,
    score: f32,
    referrer: Option<Option<String>>,
}

impl Record for Profile {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new(FieldMeta::new("FirstName", "required,maxlen=20"), &self.first_name),
            Field::new(FieldMeta::new("ID", "max=1000"), self.id),
            Field::new(FieldMeta::new("Score", "min=0,max=1.5,name=Match score"), self.score),
            Field::new(FieldMeta::new("Referrer", "required"), self.referrer.clone()),
        ]
    }
}

fn profile() -> Profile {
    Profile {
        first_name: "Grace".into(),
        id: 7,
        score: 1.0,
        referrer: Some(Some("ada".into())),
    }
}

#[test]
fn test_valid_profile_passes() {
    init_tracing();
    let report = Validator::builtin().validate(&profile()).unwrap();
    assert!(report.is_valid(), "{:?}", report.messages());
}

#[test]
fn test_every_failure_is_reported() {
    init_tracing();
    let record = Profile {
        first_name: String::new(),
        id: 1001,
        score: 2.0,
        referrer: Some(None),
    };
    let report = Validator::builtin().validate(&record).unwrap();
    assert_eq!(
        report.messages(),
        [
            "First name required.",
            "Id cannot be greater than 1000.",
            "Match score cannot be greater than 1.5.",
            "Referrer required.",
        ]
    );
}

#[test]
fn test_max_on_integer_boundary() {
    struct Counter(i32);
    impl Record for Counter {
        fn fields(&self) -> Vec<Field> {
            vec![Field::new(FieldMeta::new("Count", "max=10"), self.0)]
        }
    }

    let validator = Validator::builtin();
    assert!(validator.validate(&Counter(10)).unwrap().is_valid());
    assert_eq!(
        validator.validate(&Counter(11)).unwrap().messages(),
        ["Count cannot be greater than 10."]
    );
}

#[test]
fn test_required_on_integer_is_a_config_error() {
    struct Counter(i32);
    impl Record for Counter {
        fn fields(&self) -> Vec<Field> {
            vec![Field::new(FieldMeta::new("Count", "max=10,required"), self.0)]
        }
    }

    let err = Validator::builtin().validate(&Counter(10)).unwrap_err();
    assert!(matches!(err, ValidationError::UnexpectedType { rule: "required", .. }));
}

#[test]
fn test_unknown_rule_is_not_ignored() {
    struct Contact(String);
    impl Record for Contact {
        fn fields(&self) -> Vec<Field> {
            vec![Field::new(FieldMeta::new("Email", "required,email"), &self.0)]
        }
    }

    let err = Validator::builtin()
        .validate(&Contact("a@b.c".into()))
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown rule: \"email\"");
}

#[test]
fn test_fields_without_tags_are_skipped() {
    struct Loose {
        anything: Vec<u8>,
    }
    impl Record for Loose {
        fn fields(&self) -> Vec<Field> {
            vec![Field::new(
                FieldMeta::new("Anything", ""),
                fieldcheck::FieldValue::Other(if self.anything.is_empty() { "empty" } else { "bytes" }),
            )]
        }
    }

    let report = Validator::builtin().validate(&Loose { anything: vec![] }).unwrap();
    assert!(report.is_valid());
}

struct Even;

impl Rule for Even {
    fn name(&self) -> &'static str {
        "even"
    }

    fn test(&self, ctx: &FieldContext<'_>, _tag: &Tag) -> Result<bool> {
        match ctx.value() {
            fieldcheck::FieldValue::Int(v) => Ok(v % 2 == 0),
            _ => Err(ValidationError::UnexpectedType {
                rule: self.name(),
                kind: ctx.kind(),
            }),
        }
    }

    fn failure_message(&self, ctx: &FieldContext<'_>, _tag: &Tag) -> String {
        format!("{} must be even.", ctx.display_name())
    }
}

#[test]
fn test_custom_rule_plugs_into_dispatch() {
    struct Pair(i64);
    impl Record for Pair {
        fn fields(&self) -> Vec<Field> {
            vec![Field::new(FieldMeta::new("PairSize", "even,max=4"), self.0)]
        }
    }

    let registry = Registry::builtin().with(Even).unwrap();
    let validator = Validator::new(registry, &Default::default()).unwrap();

    assert!(validator.validate(&Pair(4)).unwrap().is_valid());
    assert_eq!(
        validator.validate(&Pair(5)).unwrap().messages(),
        ["Pair size must be even.", "Pair size cannot be greater than 4."]
    );
}

#[test]
fn test_concurrent_fields_share_one_sink() {
    init_tracing();
    let fields: Vec<Field> = (0..64)
        .map(|i| Field::new(FieldMeta::new("Level", "max=10,min=5"), i as i32))
        .collect();
    let validator = Validator::builtin();
    let sink = FailureSink::new();

    let counted: usize = thread::scope(|scope| {
        let handles: Vec<_> = fields
            .chunks(8)
            .map(|chunk| {
                let (validator, sink) = (&validator, &sink);
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|f| validator.validate_field(f, sink).unwrap())
                        .sum::<usize>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    // 0..=4 fail min, 11..=63 fail max.
    let expected = 5 + 53;
    assert_eq!(counted, expected);
    assert_eq!(sink.len(), expected);
}

#[test]
fn test_parallel_validator_matches_sequential() {
    struct Many(Vec<u16>);
    impl Record for Many {
        fn fields(&self) -> Vec<Field> {
            self.0
                .iter()
                .map(|v| Field::new(FieldMeta::new("Port", "min=1024"), *v))
                .collect()
        }
    }

    let record = Many((0..2048).step_by(16).collect());
    let sequential = Validator::builtin().validate(&record).unwrap();
    let parallel = Validator::builtin()
        .with_parallel(true)
        .validate(&record)
        .unwrap();

    assert_eq!(sequential.messages().len(), 64);
    assert_eq!(parallel.messages().len(), sequential.messages().len());
}
