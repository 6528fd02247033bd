//! Include and link vocabularies of the top-level entities.
//!
//! These are pure lookups against static sets; request layers use them to
//! validate a lookup before sending it.

use super::kind::Kind;

/// Relationship includes accepted by every entity.
const RELATIONSHIP_INCLUDES: &[&str] = &[
    "area-rels",
    "artist-rels",
    "event-rels",
    "instrument-rels",
    "label-rels",
    "place-rels",
    "recording-rels",
    "release-group-rels",
    "release-rels",
    "series-rels",
    "url-rels",
    "work-rels",
];

const AREA_INCLUDES: &[&str] = &[
    "aliases",
    "annotation",
    "genres",
    "ratings",
    "tags",
    "user-genres",
    "user-ratings",
    "user-tags",
];

const ARTIST_INCLUDES: &[&str] = &[
    "aliases",
    "annotation",
    "genres",
    "ratings",
    "recordings",
    "release-groups",
    "releases",
    "tags",
    "user-genres",
    "user-ratings",
    "user-tags",
    "works",
];

const COLLECTION_INCLUDES: &[&str] = &["user-collections"];

const EVENT_INCLUDES: &[&str] = AREA_INCLUDES;

const INSTRUMENT_INCLUDES: &[&str] = &[
    "aliases",
    "annotation",
    "genres",
    "tags",
    "user-genres",
    "user-tags",
];

const LABEL_INCLUDES: &[&str] = &[
    "aliases",
    "annotation",
    "genres",
    "ratings",
    "releases",
    "tags",
    "user-genres",
    "user-ratings",
    "user-tags",
];

const PLACE_INCLUDES: &[&str] = INSTRUMENT_INCLUDES;

const RECORDING_INCLUDES: &[&str] = &[
    "aliases",
    "annotation",
    "artist-credits",
    "artists",
    "genres",
    "isrcs",
    "ratings",
    "releases",
    "tags",
    "user-genres",
    "user-ratings",
    "user-tags",
    "work-level-rels",
];

const RELEASE_INCLUDES: &[&str] = &[
    "aliases",
    "annotation",
    "artist-credits",
    "artists",
    "collections",
    "discids",
    "genres",
    "labels",
    "media",
    "ratings",
    "recording-level-rels",
    "recordings",
    "release-groups",
    "tags",
    "user-genres",
    "user-ratings",
    "user-tags",
    "work-level-rels",
];

const RELEASE_GROUP_INCLUDES: &[&str] = &[
    "aliases",
    "annotation",
    "artist-credits",
    "artists",
    "genres",
    "ratings",
    "releases",
    "tags",
    "user-genres",
    "user-ratings",
    "user-tags",
];

const SERIES_INCLUDES: &[&str] = INSTRUMENT_INCLUDES;

const WORK_INCLUDES: &[&str] = AREA_INCLUDES;

impl Kind {
    /// Entity-specific includes, without the shared relationship includes.
    fn own_includes(&self) -> &'static [&'static str] {
        match self {
            Self::Area => AREA_INCLUDES,
            Self::Artist => ARTIST_INCLUDES,
            Self::Collection => COLLECTION_INCLUDES,
            Self::Event => EVENT_INCLUDES,
            Self::Instrument => INSTRUMENT_INCLUDES,
            Self::Label => LABEL_INCLUDES,
            Self::Place => PLACE_INCLUDES,
            Self::Recording => RECORDING_INCLUDES,
            Self::Release => RELEASE_INCLUDES,
            Self::ReleaseGroup => RELEASE_GROUP_INCLUDES,
            Self::Series => SERIES_INCLUDES,
            Self::Work => WORK_INCLUDES,
            _ => &[],
        }
    }

    /// Entities whose browse requests may be linked to this entity.
    fn links(&self) -> &'static [&'static str] {
        match self {
            Self::Area | Self::Instrument | Self::Series => &["collection"],
            Self::Artist => &[
                "area",
                "collection",
                "recording",
                "release",
                "release-group",
                "work",
            ],
            Self::Collection => &[
                "area",
                "artist",
                "editor",
                "event",
                "label",
                "place",
                "recording",
                "release",
                "release-group",
                "work",
            ],
            Self::Event => &["area", "artist", "place", "collection"],
            Self::Label => &["area", "collection", "release"],
            Self::Place => &["area", "collection"],
            Self::Recording => &["area", "collection", "release", "work"],
            Self::Release => &[
                "area",
                "artist",
                "collection",
                "label",
                "recording",
                "release-group",
                "track",
                "track_artist",
            ],
            Self::ReleaseGroup => &["artist", "collection", "release"],
            Self::Url => &["resource"],
            Self::Work => &["artist", "collection"],
            _ => &[],
        }
    }

    /// Check if `name` is a legal include for lookups of this entity.
    ///
    /// Non-entity kinds accept no includes.
    ///
    /// # Examples
    /// ```
    /// use mbxml::registry::Kind;
    ///
    /// assert!(Kind::Artist.supports_include("aliases"));
    /// assert!(Kind::Artist.supports_include("url-rels"));
    /// assert!(!Kind::Artist.supports_include("isrcs"));
    /// ```
    #[must_use]
    pub fn supports_include(&self, name: &str) -> bool {
        if !self.is_entity() {
            return false;
        }
        self.own_includes().contains(&name) || RELATIONSHIP_INCLUDES.contains(&name)
    }

    /// Check if `name` is a legal related entity to link this entity to.
    #[must_use]
    pub fn supports_link(&self, name: &str) -> bool {
        self.links().contains(&name)
    }
}
