//! Decoding complete documents with every supported leaf type.

use chrono::{DateTime, FixedOffset, Utc};
use envtoml::toml::Value;
use envtoml::toml::value::Datetime;
use envtoml::{DecodeError, Document, decode, load, load_from_path, record};
use envtoml_test_utils::{
    EXAMPLE_SCALARS, EXAMPLE_TOML_CANONICAL, FixtureDir, SERVICE_CONFIG, init_test_logging,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

record! {
    #[derive(Debug, Clone, Default, PartialEq)]
    #[allow(non_snake_case)]
    pub struct Scalars {
        pub Int1: isize,
        pub Int2: i8,
        pub Int3: i16,
        pub Int4: i32,
        pub Int5: usize,
        pub Int6: u8,
        pub Int7: u16,
        pub Int8: u32,
        pub Int9: u64,
        pub Float1: f32,
        pub Float2: f64,
        pub String1: String,
        pub Bool1: bool,
        pub Date1: DateTime<Utc>,
        pub Array1: Vec<isize>,
        pub Array2: Vec<i64>,
    }
}

fn scalars(env: &str) -> Scalars {
    let document: Document = EXAMPLE_SCALARS.parse().expect("document");
    let mut scalars = Scalars::default();
    load(&mut scalars, &document, env).expect("load");
    scalars
}

#[test]
fn development_overrides_one_integer() {
    init_test_logging();
    let dev = scalars("development");
    assert_eq!(dev.Int1, 2);
    assert_eq!(
        (dev.Int2, dev.Int3, dev.Int4, dev.Int5, dev.Int6),
        (1, 1, 1, 1, 1)
    );
    assert_eq!((dev.Int7, dev.Int8, dev.Int9), (1, 1, 1));
    assert_eq!(dev.Float1, 0.1);
    assert_eq!(dev.Float2, 0.1);
    assert_eq!(dev.String1, "string 1");
    assert!(dev.Bool1);
    assert_eq!(dev.Date1.to_rfc3339(), "1980-01-01T00:00:00+00:00");
    assert_eq!(dev.Array1, vec![1, 2, 3]);
    assert_eq!(dev.Array2, vec![1, 2, 3]);
}

#[test]
fn production_overrides_a_float_and_an_array() {
    let prod = scalars("production");
    assert_eq!(prod.Int1, 1);
    assert_eq!(prod.Float1, 0.5);
    assert_eq!(prod.Float2, 0.1);
    assert_eq!(prod.Array1, vec![4, 5]);
    assert_eq!(prod.Array2, vec![1, 2, 3]);
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Owner {
        pub name: String,
        pub dob: DateTime<FixedOffset>,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Database {
        pub server: String,
        pub ports: Vec<i32>,
        pub connection_max: u32,
        pub enabled: bool,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    #[allow(non_snake_case)]
    pub struct Server {
        pub IP: String,
        pub DC: String,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Clients {
        pub data: Vec<Vec<Value>>,
        pub hosts: Vec<String>,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Example {
        pub title: String,
        pub owner: Owner,
        pub database: Database,
        pub servers: HashMap<String, Server>,
        pub clients: Clients,
    }
}

#[test]
fn canonical_example_document() {
    let document: Document = EXAMPLE_TOML_CANONICAL.parse().expect("document");
    let example: Example = decode(&document, "development").expect("example");

    assert_eq!(example.title, "TOML Example");
    assert_eq!(example.owner.name, "Lance Uppercut");
    assert_eq!(example.owner.dob.to_rfc3339(), "1979-05-27T07:32:00-08:00");
    assert_eq!(
        example.database,
        Database {
            server: "192.168.1.1".to_string(),
            ports: vec![8001, 8001, 8002],
            connection_max: 5000,
            enabled: true,
        }
    );
    assert_eq!(example.servers.len(), 2);
    assert_eq!(
        example.servers["alpha"],
        Server {
            IP: "10.0.0.1".to_string(),
            DC: "eqdc10".to_string(),
        }
    );
    assert_eq!(example.servers["beta"].IP, "10.0.0.2");
    assert_eq!(
        example.clients.data,
        vec![
            vec![
                Value::String("gamma".to_string()),
                Value::String("delta".to_string())
            ],
            vec![Value::Integer(1), Value::Integer(2)],
        ]
    );
    assert_eq!(example.clients.hosts, vec!["alpha", "omega"]);
}

#[test]
fn raw_datetime_keeps_its_offset() {
    record! {
        #[derive(Debug)]
        pub struct RawOwner {
            pub dob: Datetime,
        }
    }
    record! {
        #[derive(Debug)]
        pub struct Doc {
            pub owner: RawOwner,
        }
    }

    let document: Document = EXAMPLE_TOML_CANONICAL.parse().expect("document");
    let doc: Doc = decode(&document, "").expect("doc");
    assert_eq!(doc.owner.dob.to_string(), "1979-05-27T07:32:00-08:00");
}

#[test]
fn narrow_field_overflows_with_location() {
    record! {
        #[derive(Debug)]
        pub struct Narrow {
            pub database: NarrowDatabase,
        }
    }
    record! {
        #[derive(Debug)]
        pub struct NarrowDatabase {
            pub connection_max: u8,
        }
    }

    let document: Document = EXAMPLE_TOML_CANONICAL.parse().expect("document");
    let err = decode::<Narrow>(&document, "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "value out of range at database.connection_max: 5000 does not fit u8"
    );
}

record! {
    #[derive(Debug, Default)]
    pub struct Overlay {
        pub password: String,
        pub max_connection: u16,
    }
}

#[test]
fn file_based_load_for_each_environment() {
    let fixtures = FixtureDir::new()
        .with_document("config.toml", SERVICE_CONFIG)
        .with_document("nested/other.toml", "password = \"x\"\nmax_connection = -1\n");

    let mut dev = Overlay::default();
    load_from_path(&mut dev, fixtures.document("config.toml"), "development").expect("dev");
    assert_eq!((dev.password.as_str(), dev.max_connection), ("12345", 1));

    let mut other = Overlay::default();
    let err = load_from_path(&mut other, fixtures.path().join("nested/other.toml"), "")
        .unwrap_err();
    assert!(matches!(err, DecodeError::Overflow { .. }));
    assert_eq!(other.password, "x");
}
