//! The closed set of record kinds the registry knows how to construct.

use std::fmt;

/// A record kind: one entity, list wrapper or structural child type of the
/// MusicBrainz XML schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    // Entities
    Area,
    Artist,
    Collection,
    Event,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Url,
    Work,

    // Entity lists
    AreaList,
    ArtistList,
    CollectionList,
    EventList,
    InstrumentList,
    LabelList,
    PlaceList,
    RecordingList,
    ReleaseList,
    ReleaseGroupList,
    SeriesList,
    UrlList,
    WorkList,

    // Text records (attributes plus text content)
    Alias,
    Format,
    Gender,
    Offset,
    Packaging,
    PrimaryType,
    RelationAttribute,
    SecondaryType,
    Status,
    WorkAttribute,

    // Other list wrappers
    AliasList,
    AnnotationList,
    ArtistCredit,
    CdStubList,
    CdStubTrackList,
    DiscList,
    GenreList,
    IpiList,
    IsniList,
    Iso31661CodeList,
    Iso31662CodeList,
    Iso31663CodeList,
    IsrcList,
    IswcList,
    LabelInfoList,
    LanguageList,
    MediumList,
    OffsetList,
    PuidList,
    RelationAttributeList,
    RelationList,
    ReleaseEventList,
    SecondaryTypeList,
    TagList,
    TrackList,
    WorkAttributeList,

    // Structural records
    Annotation,
    CdStub,
    CdStubTrack,
    Coordinates,
    CoverArtArchive,
    Disc,
    Genre,
    Isrc,
    LabelInfo,
    LifeSpan,
    Medium,
    NameCredit,
    Puid,
    Rating,
    Relation,
    ReleaseEvent,
    Tag,
    TextRepresentation,
    Track,

    // Document level
    Metadata,
    Document,
}

impl Kind {
    /// Every declared kind.
    pub const ALL: [Kind; 83] = [
        Kind::Area,
        Kind::Artist,
        Kind::Collection,
        Kind::Event,
        Kind::Instrument,
        Kind::Label,
        Kind::Place,
        Kind::Recording,
        Kind::Release,
        Kind::ReleaseGroup,
        Kind::Series,
        Kind::Url,
        Kind::Work,
        Kind::AreaList,
        Kind::ArtistList,
        Kind::CollectionList,
        Kind::EventList,
        Kind::InstrumentList,
        Kind::LabelList,
        Kind::PlaceList,
        Kind::RecordingList,
        Kind::ReleaseList,
        Kind::ReleaseGroupList,
        Kind::SeriesList,
        Kind::UrlList,
        Kind::WorkList,
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
        Kind::AliasList,
        Kind::AnnotationList,
        Kind::ArtistCredit,
        Kind::CdStubList,
        Kind::CdStubTrackList,
        Kind::DiscList,
        Kind::GenreList,
        Kind::IpiList,
        Kind::IsniList,
        Kind::Iso31661CodeList,
        Kind::Iso31662CodeList,
        Kind::Iso31663CodeList,
        Kind::IsrcList,
        Kind::IswcList,
        Kind::LabelInfoList,
        Kind::LanguageList,
        Kind::MediumList,
        Kind::OffsetList,
        Kind::PuidList,
        Kind::RelationAttributeList,
        Kind::RelationList,
        Kind::ReleaseEventList,
        Kind::SecondaryTypeList,
        Kind::TagList,
        Kind::TrackList,
        Kind::WorkAttributeList,
        Kind::Annotation,
        Kind::CdStub,
        Kind::CdStubTrack,
        Kind::Coordinates,
        Kind::CoverArtArchive,
        Kind::Disc,
        Kind::Genre,
        Kind::Isrc,
        Kind::LabelInfo,
        Kind::LifeSpan,
        Kind::Medium,
        Kind::NameCredit,
        Kind::Puid,
        Kind::Rating,
        Kind::Relation,
        Kind::ReleaseEvent,
        Kind::Tag,
        Kind::TextRepresentation,
        Kind::Track,
        Kind::Metadata,
        Kind::Document,
    ];

    /// The thirteen top-level entities that can be looked up directly.
    pub const ENTITIES: [Kind; 13] = [
        Kind::Area,
        Kind::Artist,
        Kind::Collection,
        Kind::Event,
        Kind::Instrument,
        Kind::Label,
        Kind::Place,
        Kind::Recording,
        Kind::Release,
        Kind::ReleaseGroup,
        Kind::Series,
        Kind::Url,
        Kind::Work,
    ];

    /// Get the schema name of this kind.
    ///
    /// For entities this is also the element name and the web service path
    /// segment (e.g. `release-group`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Artist => "artist",
            Self::Collection => "collection",
            Self::Event => "event",
            Self::Instrument => "instrument",
            Self::Label => "label",
            Self::Place => "place",
            Self::Recording => "recording",
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
            Self::Series => "series",
            Self::Url => "url",
            Self::Work => "work",
            Self::AreaList => "area-list",
            Self::ArtistList => "artist-list",
            Self::CollectionList => "collection-list",
            Self::EventList => "event-list",
            Self::InstrumentList => "instrument-list",
            Self::LabelList => "label-list",
            Self::PlaceList => "place-list",
            Self::RecordingList => "recording-list",
            Self::ReleaseList => "release-list",
            Self::ReleaseGroupList => "release-group-list",
            Self::SeriesList => "series-list",
            Self::UrlList => "url-list",
            Self::WorkList => "work-list",
            Self::Alias => "alias",
            Self::Format => "format",
            Self::Gender => "gender",
            Self::Offset => "offset",
            Self::Packaging => "packaging",
            Self::PrimaryType => "primary-type",
            Self::RelationAttribute => "relation-attribute",
            Self::SecondaryType => "secondary-type",
            Self::Status => "status",
            Self::WorkAttribute => "work-attribute",
            Self::AliasList => "alias-list",
            Self::AnnotationList => "annotation-list",
            Self::ArtistCredit => "artist-credit",
            Self::CdStubList => "cdstub-list",
            Self::CdStubTrackList => "cdstub-track-list",
            Self::DiscList => "disc-list",
            Self::GenreList => "genre-list",
            Self::IpiList => "ipi-list",
            Self::IsniList => "isni-list",
            Self::Iso31661CodeList => "iso-3166-1-code-list",
            Self::Iso31662CodeList => "iso-3166-2-code-list",
            Self::Iso31663CodeList => "iso-3166-3-code-list",
            Self::IsrcList => "isrc-list",
            Self::IswcList => "iswc-list",
            Self::LabelInfoList => "label-info-list",
            Self::LanguageList => "language-list",
            Self::MediumList => "medium-list",
            Self::OffsetList => "offset-list",
            Self::PuidList => "puid-list",
            Self::RelationAttributeList => "relation-attribute-list",
            Self::RelationList => "relation-list",
            Self::ReleaseEventList => "release-event-list",
            Self::SecondaryTypeList => "secondary-type-list",
            Self::TagList => "tag-list",
            Self::TrackList => "track-list",
            Self::WorkAttributeList => "work-attribute-list",
            Self::Annotation => "annotation",
            Self::CdStub => "cdstub",
            Self::CdStubTrack => "cdstub-track",
            Self::Coordinates => "coordinates",
            Self::CoverArtArchive => "cover-art-archive",
            Self::Disc => "disc",
            Self::Genre => "genre",
            Self::Isrc => "isrc",
            Self::LabelInfo => "label-info",
            Self::LifeSpan => "life-span",
            Self::Medium => "medium",
            Self::NameCredit => "name-credit",
            Self::Puid => "puid",
            Self::Rating => "rating",
            Self::Relation => "relation",
            Self::ReleaseEvent => "release-event",
            Self::Tag => "tag",
            Self::TextRepresentation => "text-representation",
            Self::Track => "track",
            Self::Metadata => "metadata",
            Self::Document => "document",
        }
    }

    /// Check if this kind is one of the top-level entities.
    #[must_use]
    pub fn is_entity(&self) -> bool {
        Self::ENTITIES.contains(self)
    }

    /// Resolve an entity from its web service name (e.g. `release-group`).
    ///
    /// # Examples
    /// ```
    /// use mbxml::registry::Kind;
    ///
    /// assert_eq!(Kind::entity_from_name("release-group"), Some(Kind::ReleaseGroup));
    /// assert_eq!(Kind::entity_from_name("alias"), None);
    /// ```
    #[must_use]
    pub fn entity_from_name(name: &str) -> Option<Self> {
        Self::ENTITIES.iter().copied().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_kinds_are_distinct() {
        let names: HashSet<&str> = Kind::ALL.iter().map(Kind::as_str).collect();
        assert_eq!(names.len(), Kind::ALL.len());
    }

    #[test]
    fn test_entities() {
        assert!(Kind::Artist.is_entity());
        assert!(Kind::Url.is_entity());
        assert!(!Kind::ArtistList.is_entity());
        assert!(!Kind::Metadata.is_entity());
    }

    #[test]
    fn test_entity_from_name() {
        for kind in Kind::ENTITIES {
            assert_eq!(Kind::entity_from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(Kind::entity_from_name("metadata"), None);
    }
}
