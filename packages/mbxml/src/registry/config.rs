//! Registry configuration for the MusicBrainz `mmd-2.0` schema.

use super::core::Registry;
use super::kind::Kind;
use super::shape::{Expect, Shape};
use crate::coerce::Coercer;

/// Children shared by every annotated entity.
///
/// `relation-list` repeats once per relationship target type; every other
/// entity child is a singleton.
fn annotated_entity() -> Shape {
    Shape::record()
        .child("alias-list", Kind::AliasList)
        .child("annotation", Kind::Annotation)
        .str("disambiguation")
        .child("genre-list", Kind::GenreList)
        .repeated("relation-list", Kind::RelationList)
        .child("tag-list", Kind::TagList)
        .child("user-genre-list", Kind::GenreList)
        .child("user-tag-list", Kind::TagList)
}

/// Add the community and user rating children.
fn rated(shape: Shape) -> Shape {
    shape.child("rating", Kind::Rating).int("user-rating")
}

fn records_of(tag: &'static str, kind: Kind) -> Shape {
    Shape::list_of(tag, Expect::Record(kind))
}

fn strings_of(tag: &'static str) -> Shape {
    Shape::list_of(tag, Expect::Scalar(Coercer::Str))
}

fn register_entities(registry: &mut Registry) {
    registry.register_shape(
        Kind::Area,
        annotated_entity()
            .child("iso-3166-1-code-list", Kind::Iso31661CodeList)
            .child("iso-3166-2-code-list", Kind::Iso31662CodeList)
            .child("iso-3166-3-code-list", Kind::Iso31663CodeList)
            .child("life-span", Kind::LifeSpan)
            .str("name")
            .str("sort-name"),
    );

    registry.register_shape(
        Kind::Artist,
        rated(annotated_entity())
            .child("area", Kind::Area)
            .child("begin-area", Kind::Area)
            .str("country")
            .child("end-area", Kind::Area)
            .child("gender", Kind::Gender)
            .str("ipi")
            .child("ipi-list", Kind::IpiList)
            .child("isni-list", Kind::IsniList)
            .child("life-span", Kind::LifeSpan)
            .str("name")
            .child("recording-list", Kind::RecordingList)
            .child("release-group-list", Kind::ReleaseGroupList)
            .child("release-list", Kind::ReleaseList)
            .str("sort-name")
            .child("work-list", Kind::WorkList),
    );

    registry.register_shape(
        Kind::Collection,
        Shape::record()
            .str("name")
            .str("editor")
            .child("area-list", Kind::AreaList)
            .child("artist-list", Kind::ArtistList)
            .child("event-list", Kind::EventList)
            .child("instrument-list", Kind::InstrumentList)
            .child("label-list", Kind::LabelList)
            .child("place-list", Kind::PlaceList)
            .child("recording-list", Kind::RecordingList)
            .child("release-list", Kind::ReleaseList)
            .child("release-group-list", Kind::ReleaseGroupList)
            .child("series-list", Kind::SeriesList)
            .child("work-list", Kind::WorkList),
    );

    registry.register_shape(
        Kind::Event,
        rated(annotated_entity())
            .boolean("cancelled")
            .child("life-span", Kind::LifeSpan)
            .str("name")
            .str("setlist")
            .str("time"),
    );

    registry.register_shape(
        Kind::Instrument,
        annotated_entity().str("description").str("name"),
    );

    registry.register_shape(
        Kind::Label,
        rated(annotated_entity())
            .child("area", Kind::Area)
            .str("country")
            .str("ipi")
            .child("ipi-list", Kind::IpiList)
            .child("isni-list", Kind::IsniList)
            .int("label-code")
            .child("life-span", Kind::LifeSpan)
            .str("name")
            .child("release-list", Kind::ReleaseList)
            .str("sort-name"),
    );

    registry.register_shape(
        Kind::Place,
        annotated_entity()
            .str("address")
            .child("area", Kind::Area)
            .child("coordinates", Kind::Coordinates)
            .child("life-span", Kind::LifeSpan)
            .str("name"),
    );

    registry.register_shape(
        Kind::Recording,
        rated(annotated_entity())
            .child("artist-credit", Kind::ArtistCredit)
            .child("isrc-list", Kind::IsrcList)
            .int("length")
            .child("puid-list", Kind::PuidList)
            .child("release-list", Kind::ReleaseList)
            .str("title")
            .boolean("video"),
    );

    registry.register_shape(
        Kind::Release,
        annotated_entity()
            .child("artist-credit", Kind::ArtistCredit)
            .str("asin")
            .str("barcode")
            .child("collection-list", Kind::CollectionList)
            .str("country")
            .child("cover-art-archive", Kind::CoverArtArchive)
            .str("date")
            .child("label-info-list", Kind::LabelInfoList)
            .child("medium-list", Kind::MediumList)
            .child("packaging", Kind::Packaging)
            .scalar("quality", Coercer::Quality)
            .child("release-event-list", Kind::ReleaseEventList)
            .child("release-group", Kind::ReleaseGroup)
            .child("status", Kind::Status)
            .child("text-representation", Kind::TextRepresentation)
            .str("title"),
    );

    registry.register_shape(
        Kind::ReleaseGroup,
        rated(annotated_entity())
            .child("artist-credit", Kind::ArtistCredit)
            .str("first-release-date")
            .child("primary-type", Kind::PrimaryType)
            .child("release-list", Kind::ReleaseList)
            .child("secondary-type-list", Kind::SecondaryTypeList)
            .str("title"),
    );

    registry.register_shape(
        Kind::Series,
        annotated_entity().str("name").str("ordering-attribute"),
    );

    registry.register_shape(
        Kind::Url,
        Shape::record()
            .repeated("relation-list", Kind::RelationList)
            .str("resource"),
    );

    registry.register_shape(
        Kind::Work,
        rated(annotated_entity())
            .child("artist-credit", Kind::ArtistCredit)
            .child("attribute-list", Kind::WorkAttributeList)
            .str("iswc")
            .child("iswc-list", Kind::IswcList)
            .str("language")
            .child("language-list", Kind::LanguageList)
            .str("title"),
    );
}

fn register_lists(registry: &mut Registry) {
    // Entity lists
    registry.register_shape(Kind::AreaList, records_of("area", Kind::Area));
    registry.register_shape(Kind::ArtistList, records_of("artist", Kind::Artist));
    registry.register_shape(
        Kind::CollectionList,
        records_of("collection", Kind::Collection),
    );
    registry.register_shape(Kind::EventList, records_of("event", Kind::Event));
    registry.register_shape(
        Kind::InstrumentList,
        records_of("instrument", Kind::Instrument),
    );
    registry.register_shape(Kind::LabelList, records_of("label", Kind::Label));
    registry.register_shape(Kind::PlaceList, records_of("place", Kind::Place));
    registry.register_shape(
        Kind::RecordingList,
        records_of("recording", Kind::Recording),
    );
    registry.register_shape(Kind::ReleaseList, records_of("release", Kind::Release));
    registry.register_shape(
        Kind::ReleaseGroupList,
        records_of("release-group", Kind::ReleaseGroup),
    );
    registry.register_shape(Kind::SeriesList, records_of("series", Kind::Series));
    registry.register_shape(Kind::UrlList, records_of("url", Kind::Url));
    registry.register_shape(Kind::WorkList, records_of("work", Kind::Work));

    // Lists of plain strings
    registry.register_shape(Kind::IpiList, strings_of("ipi"));
    registry.register_shape(Kind::IsniList, strings_of("isni"));
    registry.register_shape(Kind::Iso31661CodeList, strings_of("iso-3166-1-code"));
    registry.register_shape(Kind::Iso31662CodeList, strings_of("iso-3166-2-code"));
    registry.register_shape(Kind::Iso31663CodeList, strings_of("iso-3166-3-code"));
    registry.register_shape(Kind::IswcList, strings_of("iswc"));
    registry.register_shape(Kind::LanguageList, strings_of("language"));

    // Lists of records
    registry.register_shape(Kind::AliasList, records_of("alias", Kind::Alias));
    registry.register_shape(
        Kind::AnnotationList,
        records_of("annotation", Kind::Annotation),
    );
    registry.register_shape(
        Kind::ArtistCredit,
        records_of("name-credit", Kind::NameCredit),
    );
    registry.register_shape(Kind::CdStubList, records_of("cdstub", Kind::CdStub));
    registry.register_shape(
        Kind::CdStubTrackList,
        records_of("track", Kind::CdStubTrack),
    );
    registry.register_shape(Kind::DiscList, records_of("disc", Kind::Disc));
    registry.register_shape(Kind::GenreList, records_of("genre", Kind::Genre));
    registry.register_shape(Kind::IsrcList, records_of("isrc", Kind::Isrc));
    registry.register_shape(
        Kind::LabelInfoList,
        records_of("label-info", Kind::LabelInfo),
    );
    registry.register_shape(Kind::MediumList, records_of("medium", Kind::Medium));
    registry.register_shape(Kind::OffsetList, records_of("offset", Kind::Offset));
    registry.register_shape(Kind::PuidList, records_of("puid", Kind::Puid));
    registry.register_shape(
        Kind::RelationAttributeList,
        records_of("attribute", Kind::RelationAttribute),
    );
    registry.register_shape(Kind::RelationList, records_of("relation", Kind::Relation));
    registry.register_shape(
        Kind::ReleaseEventList,
        records_of("release-event", Kind::ReleaseEvent),
    );
    registry.register_shape(
        Kind::SecondaryTypeList,
        records_of("secondary-type", Kind::SecondaryType),
    );
    registry.register_shape(Kind::TagList, records_of("tag", Kind::Tag));
    registry.register_shape(Kind::TrackList, records_of("track", Kind::Track));
    registry.register_shape(
        Kind::WorkAttributeList,
        records_of("attribute", Kind::WorkAttribute),
    );
}

fn register_records(registry: &mut Registry) {
    // Attributes plus text content
    for kind in [
        Kind::Alias,
        Kind::Format,
        Kind::Gender,
        Kind::Offset,
        Kind::Packaging,
        Kind::PrimaryType,
        Kind::RelationAttribute,
        Kind::SecondaryType,
        Kind::Status,
        Kind::WorkAttribute,
    ] {
        registry.register_shape(kind, Shape::text());
    }

    registry.register_shape(Kind::Rating, Shape::decimal().int("votes-count"));

    registry.register_shape(
        Kind::Annotation,
        Shape::record().str("entity").str("name").str("text"),
    );
    registry.register_shape(
        Kind::CdStub,
        Shape::record()
            .str("title")
            .str("artist")
            .str("barcode")
            .str("disambiguation")
            .child("track-list", Kind::CdStubTrackList),
    );
    registry.register_shape(
        Kind::CdStubTrack,
        Shape::record().str("artist").int("length").str("title"),
    );
    registry.register_shape(
        Kind::Coordinates,
        Shape::record().str("latitude").str("longitude"),
    );
    registry.register_shape(
        Kind::CoverArtArchive,
        Shape::record()
            .boolean("artwork")
            .boolean("back")
            .int("count")
            .boolean("darkened")
            .boolean("front"),
    );
    registry.register_shape(
        Kind::Disc,
        Shape::record()
            .child("offset-list", Kind::OffsetList)
            .child("release-list", Kind::ReleaseList)
            .int("sectors"),
    );
    registry.register_shape(
        Kind::Genre,
        Shape::record().str("name").str("disambiguation"),
    );
    registry.register_shape(
        Kind::Isrc,
        Shape::record().child("recording-list", Kind::RecordingList),
    );
    registry.register_shape(
        Kind::LabelInfo,
        Shape::record()
            .str("catalog-number")
            .child("label", Kind::Label),
    );
    registry.register_shape(
        Kind::LifeSpan,
        Shape::record().str("begin").str("end").boolean("ended"),
    );
    registry.register_shape(
        Kind::Medium,
        Shape::record()
            .str("title")
            .int("position")
            .child("format", Kind::Format)
            .child("disc-list", Kind::DiscList)
            .child("pregap", Kind::Track)
            .child("track-list", Kind::TrackList)
            .child("data-track-list", Kind::TrackList),
    );
    registry.register_shape(
        Kind::NameCredit,
        Shape::record().child("artist", Kind::Artist).str("name"),
    );
    registry.register_shape(
        Kind::Puid,
        Shape::record().child("recording-list", Kind::RecordingList),
    );
    registry.register_shape(
        Kind::Relation,
        Shape::record()
            .child("area", Kind::Area)
            .child("artist", Kind::Artist)
            .child("attribute-list", Kind::RelationAttributeList)
            .str("begin")
            .scalar("direction", Coercer::Direction)
            .str("end")
            .boolean("ended")
            .child("event", Kind::Event)
            .child("instrument", Kind::Instrument)
            .child("label", Kind::Label)
            .int("ordering-key")
            .child("place", Kind::Place)
            .child("recording", Kind::Recording)
            .child("release", Kind::Release)
            .child("release-group", Kind::ReleaseGroup)
            .child("series", Kind::Series)
            .str("source-credit")
            .str("target")
            .str("target-credit")
            .child("work", Kind::Work),
    );
    registry.register_shape(
        Kind::ReleaseEvent,
        Shape::record().str("date").child("area", Kind::Area),
    );
    registry.register_shape(Kind::Tag, Shape::record().str("name"));
    registry.register_shape(
        Kind::TextRepresentation,
        Shape::record().str("language").str("script"),
    );
    registry.register_shape(
        Kind::Track,
        Shape::record()
            .child("artist-credit", Kind::ArtistCredit)
            .int("length")
            .str("number")
            .int("position")
            .child("recording", Kind::Recording)
            .str("title"),
    );
}

fn register_document(registry: &mut Registry) {
    registry.register_shape(
        Kind::Metadata,
        Shape::record()
            .child("annotation-list", Kind::AnnotationList)
            .child("area", Kind::Area)
            .child("area-list", Kind::AreaList)
            .child("artist", Kind::Artist)
            .child("artist-list", Kind::ArtistList)
            .child("cdstub", Kind::CdStub)
            .child("cdstub-list", Kind::CdStubList)
            .child("collection", Kind::Collection)
            .child("collection-list", Kind::CollectionList)
            .child("disc", Kind::Disc)
            .child("event", Kind::Event)
            .child("event-list", Kind::EventList)
            .child("genre", Kind::Genre)
            .child("genre-list", Kind::GenreList)
            .child("instrument", Kind::Instrument)
            .child("instrument-list", Kind::InstrumentList)
            .child("isrc", Kind::Isrc)
            .child("isrc-list", Kind::IsrcList)
            .child("label", Kind::Label)
            .child("label-list", Kind::LabelList)
            .child("place", Kind::Place)
            .child("place-list", Kind::PlaceList)
            .child("puid", Kind::Puid)
            .child("rating", Kind::Rating)
            .child("recording", Kind::Recording)
            .child("recording-list", Kind::RecordingList)
            .child("release", Kind::Release)
            .child("release-group", Kind::ReleaseGroup)
            .child("release-group-list", Kind::ReleaseGroupList)
            .child("release-list", Kind::ReleaseList)
            .child("series", Kind::Series)
            .child("series-list", Kind::SeriesList)
            .child("tag-list", Kind::TagList)
            .child("url", Kind::Url)
            .child("url-list", Kind::UrlList)
            .child("user-genre-list", Kind::GenreList)
            .int("user-rating")
            .child("user-tag-list", Kind::TagList)
            .child("work", Kind::Work)
            .child("work-list", Kind::WorkList)
            .date_field("created"),
    );
    registry.register_shape(Kind::Document, Shape::document());
}

/// Create a registry configured for MusicBrainz web service XML.
///
/// The registry holds a shape for every [`Kind`].
#[must_use]
pub fn create_musicbrainz_registry() -> Registry {
    let mut registry = Registry::new();

    register_entities(&mut registry);
    register_lists(&mut registry);
    register_records(&mut registry);
    register_document(&mut registry);

    tracing::debug!(kinds = registry.kinds().count(), "Built MusicBrainz registry");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Construction;

    #[test]
    fn test_create_musicbrainz_registry() {
        let registry = create_musicbrainz_registry();

        let artist = registry.shape_for(Kind::Artist).unwrap();
        assert_eq!(
            artist.child_spec("name").map(|s| s.expect),
            Some(Expect::Scalar(Coercer::Str))
        );
        assert_eq!(
            artist.child_spec("begin-area").map(|s| s.expect),
            Some(Expect::Record(Kind::Area))
        );
        assert!(artist.child_spec("bogus-field").is_none());
    }

    #[test]
    fn test_relation_list_repeats_under_entities_only() {
        let registry = create_musicbrainz_registry();

        for kind in Kind::ENTITIES {
            let shape = registry.shape_for(kind).unwrap();
            if let Some(spec) = shape.child_spec("relation-list") {
                assert!(spec.repeatable, "{kind} relation-list must repeat");
            }
            for (tag, spec) in shape.children() {
                if tag != "relation-list" {
                    assert!(!spec.repeatable, "{kind}/{tag} must be a singleton");
                }
            }
        }
    }

    #[test]
    fn test_list_wrappers_have_one_repeatable_element() {
        let registry = create_musicbrainz_registry();

        for kind in Kind::ALL {
            let shape = registry.shape_for(kind).unwrap();
            if shape.construction() != Construction::List {
                continue;
            }
            let tag = shape.element_tag().unwrap();
            assert_eq!(shape.children().count(), 1, "{kind} has extra children");
            assert!(shape.child_spec(tag).unwrap().repeatable);
        }
    }

    #[test]
    fn test_metadata_created_is_a_date() {
        let registry = create_musicbrainz_registry();
        let metadata = registry.shape_for(Kind::Metadata).unwrap();
        assert_eq!(metadata.date_fields(), ["created"]);
    }

    #[test]
    fn test_relation_direction_is_enumerated() {
        let registry = create_musicbrainz_registry();
        let relation = registry.shape_for(Kind::Relation).unwrap();
        assert_eq!(
            relation.child_spec("direction").map(|s| s.expect),
            Some(Expect::Scalar(Coercer::Direction))
        );
    }
}
