//! End-to-end tests for the XML driver and the MusicBrainz schema.
//!
//! Parses fixture documents shaped like `/ws/2` lookup responses and checks
//! the materialized value graph.

use std::fs;
use std::path::{Path, PathBuf};

use mbxml::coerce::{Coercer, Direction, Quality};
use mbxml::registry::{ChildSpec, Construction, Expect};
use mbxml::value::DATA_FIELD;
use mbxml::{xml, Kind, MbxmlError, Parser, Registry, SingletonPolicy, Value};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn fixture_path(group: &str, name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(group)
        .join(name)
}

/// Load fixture file content.
fn load_fixture(group: &str, name: &str) -> String {
    let path = fixture_path(group, name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn parse_artist() -> Value {
    xml::from_str(&load_fixture("artist", "prokofiev.xml")).expect("Failed to parse artist")
}

fn artist_document(body: &str) -> String {
    format!(
        r#"<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#"><artist id="X" type="Person">{body}</artist></metadata>"#
    )
}

#[test]
fn test_minimal_artist() {
    let metadata = xml::from_str(&artist_document("<name>Foo</name>")).unwrap();
    let artist = &metadata["artist"];

    assert_eq!(artist["id"], "X");
    assert_eq!(artist["type"], "Person");
    assert_eq!(artist["name"], "Foo");
}

#[test]
fn test_alias_list_order() {
    let doc = artist_document("<alias-list><alias>A1</alias><alias>A2</alias></alias-list>");
    let metadata = xml::from_str(&doc).unwrap();

    let names: Vec<&str> = metadata["artist"]["alias-list"][DATA_FIELD]
        .as_list()
        .unwrap()
        .iter()
        .filter_map(Value::text)
        .collect();
    assert_eq!(names, ["A1", "A2"]);
}

#[test]
fn test_unknown_tag_yields_no_value() {
    let doc = artist_document("<name>Foo</name><bogus-field>x</bogus-field>");
    match xml::from_str(&doc) {
        Err(MbxmlError::UnexpectedTag { tag, parent }) => {
            assert_eq!(tag, "bogus-field");
            assert_eq!(parent, "artist");
        }
        other => panic!("expected UnexpectedTag, got {other:?}"),
    }
}

#[test]
fn test_relation_direction() {
    let relation = |direction: &str| {
        format!(
            r#"<metadata><url id="u"><relation-list target-type="artist"><relation type="official homepage"><direction>{direction}</direction></relation></relation-list></url></metadata>"#
        )
    };

    let metadata = xml::from_str(&relation("both")).unwrap();
    let relations = &metadata["url"]["relation-list"][0];
    assert_eq!(
        relations[DATA_FIELD][0]["direction"],
        Value::Direction(Direction::Both)
    );

    assert!(matches!(
        xml::from_str(&relation("sideways")),
        Err(MbxmlError::InvalidEnumerationValue { .. })
    ));
}

#[test]
fn test_split_text_node_is_equivalent() {
    let doc = artist_document("<name>Sergei Prokofiev</name>");
    let whole = xml::from_str(&doc).unwrap();

    // Split in the middle of "Prokofiev".
    let at = doc.find("Prokofiev").unwrap() + 4;
    let (head, tail) = doc.as_bytes().split_at(at);
    let chunked = xml::from_chunks([head, tail]).unwrap();

    assert_eq!(chunked, whole);
    assert_eq!(chunked["artist"]["name"], "Sergei Prokofiev");
}

#[test]
fn test_fixture_every_chunk_size_is_equivalent() {
    let doc = load_fixture("artist", "prokofiev.xml");
    let whole = xml::from_str(&doc).unwrap();
    for size in [1, 2, 13, 512, 4096] {
        let chunked = xml::from_chunks(doc.as_bytes().chunks(size)).unwrap();
        assert_eq!(chunked, whole, "chunk size {size}");
    }
}

#[test]
fn test_fixture_from_path() {
    let path = fixture_path("artist", "prokofiev.xml");
    let from_file = xml::from_path(&path, xml::DEFAULT_CHUNK_SIZE).unwrap();
    assert_eq!(from_file, parse_artist());
}

#[test]
fn test_artist_fields() {
    let metadata = parse_artist();
    assert!(metadata["created"].as_date_time().is_some());

    let artist = &metadata["artist"];
    assert_eq!(artist["id"], "0e43fe9d-c472-4b62-be9e-55f971a023e1");
    assert_eq!(artist["type"], "Person");
    assert_eq!(artist["name"], "Сергей Сергеевич Прокофьев");
    assert_eq!(artist["sort-name"], "Prokofiev, Sergei Sergeyevich");
    assert_eq!(artist["disambiguation"], "Russian composer");
    assert_eq!(artist["gender"][DATA_FIELD], "Male");
    assert_eq!(artist["country"], "RU");
    assert_eq!(artist["isni-list"][DATA_FIELD][0], "0000000121389711");
}

#[test]
fn test_artist_areas() {
    let metadata = parse_artist();
    let artist = &metadata["artist"];

    let area = &artist["area"];
    assert_eq!(area["id"], "1f1fc3a4-9500-39b8-9f10-f0a465557eef");
    assert_eq!(area["name"], "Russia");
    assert_eq!(area["iso-3166-1-code-list"][DATA_FIELD][0], "RU");

    assert_eq!(artist["begin-area"]["name"], "Sontsivka");
    assert_eq!(artist["end-area"]["name"], "Moscow");

    let life_span = &artist["life-span"];
    assert_eq!(life_span["begin"], "1891-04-23");
    assert_eq!(life_span["ended"], Value::Bool(true));
}

#[test]
fn test_artist_aliases() {
    let metadata = parse_artist();
    let aliases = &metadata["artist"]["alias-list"];

    assert_eq!(aliases["count"], "4");
    let data = aliases.elements().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0][DATA_FIELD], "Prokefiev");
    assert_eq!(data[1]["locale"], "en");
    assert_eq!(data[1].text(), Some("Sergei Prokofiev"));
}

#[test]
fn test_artist_relation_lists() {
    let metadata = parse_artist();
    let lists = metadata["artist"]["relation-list"].as_list().unwrap();
    assert_eq!(lists.len(), 2);

    assert_eq!(lists[0]["target-type"], "url");
    let wikidata = &lists[0][DATA_FIELD][0];
    assert_eq!(wikidata["target"], "https://www.wikidata.org/wiki/Q49481");
    assert_eq!(wikidata["direction"], Value::Direction(Direction::Forward));

    let mentor = &lists[1][DATA_FIELD][0];
    assert_eq!(mentor["type"], "teacher");
    assert_eq!(mentor["direction"], Value::Direction(Direction::Backward));
    assert_eq!(mentor["ended"], Value::Bool(true));
    assert_eq!(
        mentor["artist"]["sort-name"],
        "Rimsky-Korsakov, Nikolai Andreyevich"
    );
}

#[test]
fn test_artist_tags_and_rating() {
    let metadata = parse_artist();
    let artist = &metadata["artist"];

    let tags: Vec<&Value> = artist["tag-list"]
        .elements()
        .unwrap()
        .iter()
        .map(|tag| &tag["name"])
        .collect();
    assert_eq!(tags, [&Value::from("classical"), &Value::from("russian")]);

    let rating = &artist["rating"];
    assert_eq!(rating["votes-count"], "9");
    assert_eq!(rating[DATA_FIELD], Value::Decimal(Decimal::new(485, 2)));
}

#[test]
fn test_unrated_artist() {
    let metadata = xml::from_str(&artist_document(
        r#"<name>Foo</name><rating votes-count="0"/>"#,
    ))
    .unwrap();
    let artist = &metadata["artist"];

    assert_eq!(artist["name"], "Foo");
    assert_eq!(artist["rating"]["votes-count"], "0");
    assert!(artist["rating"].get(DATA_FIELD).is_none());
}

/// One element per declared child, with the value it must produce.
fn sample_child(tag: &str, expect: Expect) -> (String, Box<dyn Fn(&Value)>) {
    let owned = tag.to_string();
    match expect {
        Expect::Scalar(coercer) => {
            let (text, expected) = match coercer {
                Coercer::Str => (format!("value of {tag}"), Value::Str(format!("value of {tag}"))),
                Coercer::Int => ("42".to_string(), Value::Int(42)),
                Coercer::Bool => ("true".to_string(), Value::Bool(true)),
                Coercer::Direction => ("backward".to_string(), Value::Direction(Direction::Backward)),
                Coercer::Quality => ("high".to_string(), Value::Quality(Quality::High)),
            };
            let xml = format!("<{tag}>{text}</{tag}>");
            (xml, Box::new(move |value: &Value| assert_eq!(value, &expected, "<{owned}>")))
        }
        Expect::Record(kind) => {
            let shape = Registry::global().shape_for(kind).unwrap();
            let (body, expected_data) = match shape.construction() {
                Construction::Text => {
                    (format!("text of {tag}"), Some(Value::Str(format!("text of {tag}"))))
                }
                Construction::Decimal => ("4.5".to_string(), Some(Value::Decimal(Decimal::new(45, 1)))),
                Construction::List => (String::new(), Some(Value::List(Vec::new()))),
                Construction::Record | Construction::Document => (String::new(), None),
            };
            let xml = format!(r#"<{tag} marker="{tag}">{body}</{tag}>"#);
            (
                xml,
                Box::new(move |value: &Value| {
                    assert_eq!(value["marker"], owned.as_str(), "<{owned}> attribute");
                    if let Some(data) = &expected_data {
                        assert_eq!(&value[DATA_FIELD], data, "<{owned}> data");
                    }
                }),
            )
        }
    }
}

#[test]
fn test_every_artist_child_round_trips() {
    let shape = Registry::global().shape_for(Kind::Artist).unwrap();
    let mut children: Vec<(&str, &ChildSpec)> = shape.children().collect();
    children.sort_by_key(|(tag, _)| *tag);

    let mut body = String::new();
    let mut checks = Vec::new();
    for (tag, spec) in &children {
        let (xml, check) = sample_child(tag, spec.expect);
        body.push_str(&xml);
        checks.push((*tag, spec.repeatable, check));
    }

    let metadata = xml::from_str(&artist_document(&body)).unwrap();
    let artist = &metadata["artist"];
    for (tag, repeatable, check) in checks {
        let value = artist
            .get(tag)
            .unwrap_or_else(|| panic!("missing <{tag}> in artist"));
        if repeatable {
            let items = value.as_list().unwrap();
            assert_eq!(items.len(), 1, "<{tag}> occurrences");
            check(&items[0]);
        } else {
            check(value);
        }
    }
    assert_eq!(artist["id"], "X");
}

#[test]
fn test_release_fixture() {
    let metadata = xml::from_str(&load_fixture("release", "release.xml")).unwrap();
    let release = &metadata["release"];

    assert_eq!(release["title"], "Peter and the Wolf");
    assert_eq!(release["status"][DATA_FIELD], "Official");
    assert_eq!(release["quality"], Value::Quality(Quality::Normal));
    assert_eq!(release["barcode"], "");
    assert_eq!(release["text-representation"]["script"], "Latn");

    let credits = release["artist-credit"].elements().unwrap();
    assert_eq!(credits.len(), 2);
    assert_eq!(credits[0]["joinphrase"], " & ");
    assert_eq!(credits[1]["artist"]["name"], "Leonard Bernstein");

    let cover_art = &release["cover-art-archive"];
    assert_eq!(cover_art["count"], Value::Int(2));
    assert_eq!(cover_art["back"], Value::Bool(false));

    let medium = &release["medium-list"][DATA_FIELD][0];
    assert_eq!(medium["position"], Value::Int(1));
    assert_eq!(medium["format"][DATA_FIELD], "12\" Vinyl");

    let tracks = &medium["track-list"];
    assert_eq!(tracks["offset"], "0");
    let tracks = tracks.elements().unwrap();
    assert_eq!(tracks[1]["number"], "B1");
    assert_eq!(tracks[1]["length"], Value::Int(1_093_000));
    assert_eq!(tracks[0]["recording"]["video"], Value::Bool(false));

    let label = &release["label-info-list"][DATA_FIELD][0]["label"];
    assert_eq!(label["name"], "Columbia Masterworks");
}

#[test]
fn test_json_output() {
    let doc = r#"<metadata created="2021-01-02T03:04:05Z">
        <recording id="r"><title>T</title><length>1000</length><rating votes-count="2">3.5</rating></recording>
    </metadata>"#;
    let metadata = xml::from_str(doc).unwrap();
    let json = serde_json::to_value(&metadata).unwrap();

    assert_eq!(json["created"], "2021-01-02T03:04:05");
    assert_eq!(json["recording"]["length"], 1000);
    assert_eq!(json["recording"]["rating"]["data"], "3.5");
    assert_eq!(json["recording"]["rating"]["votes-count"], "2");
}

#[test]
fn test_duplicate_singleton_policies() {
    let doc = artist_document("<name>A</name><name>B</name>");

    assert!(matches!(
        xml::from_str(&doc),
        Err(MbxmlError::MultipleSingletonOccurrence { .. })
    ));

    let parser = Parser::new().with_singleton_policy(SingletonPolicy::LastWins);
    let metadata = xml::drive(doc.as_bytes(), parser).unwrap();
    assert_eq!(metadata["artist"]["name"], "B");
}

#[test]
fn test_invalid_scalars() {
    let length = r#"<metadata><recording id="r"><length>long</length></recording></metadata>"#;
    assert!(matches!(
        xml::from_str(length),
        Err(MbxmlError::InvalidScalar { .. })
    ));

    let created = r#"<metadata created="yesterday"/>"#;
    assert!(matches!(
        xml::from_str(created),
        Err(MbxmlError::InvalidDate(_))
    ));
}
