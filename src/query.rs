//! Filter encoder: validated search criteria to a `filter[...]` query
//! fragment.
//!
//! Invalid or inapplicable criteria never fail the request. They are dropped
//! from the fragment and, for callers that want feedback, listed in
//! [`EncodedFilters::rejected`].

use crate::constants::ranges;
use crate::domain::{FilterKind, FilterValue, Media, MediaProfile};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Caller-supplied criteria, one value list per filter kind.
///
/// # Examples
///
/// ```rust
/// use kitsu::domain::{FilterKind, Media, Season};
/// use kitsu::query::{encode, Filters};
///
/// let filters = Filters::new()
///     .with(FilterKind::Season, [Season::Fall])
///     .with(FilterKind::Year, [2019, 2021]);
///
/// assert_eq!(
///     encode(Media::Anime, &filters),
///     "filter[season]=fall&filter[year]=2019..2021&"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<FilterKind, Vec<FilterValue>>);

impl Filters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds values for `kind`, appending to any values already present.
    #[must_use]
    pub fn with<I, V>(mut self, kind: FilterKind, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue>,
    {
        self.push(kind, values);
        self
    }

    pub fn push<I, V>(&mut self, kind: FilterKind, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue>,
    {
        self.0
            .entry(kind)
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn get(&self, kind: FilterKind) -> Option<&[FilterValue]> {
        self.0.get(&kind).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKind, &[FilterValue])> {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl FromIterator<(FilterKind, Vec<FilterValue>)> for Filters {
    fn from_iter<T: IntoIterator<Item = (FilterKind, Vec<FilterValue>)>>(iter: T) -> Self {
        let mut filters = Self::new();
        for (kind, values) in iter {
            filters.push(kind, values);
        }
        filters
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The kind does not apply to this media category.
    NotApplicable(Media),
    /// The value is not a member of the kind's enumeration.
    InvalidValue(FilterValue),
    /// A numeric kind received a non-integer value.
    NotNumeric(FilterValue),
    /// A numeric kind received a value outside its bounds.
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFilter {
    pub kind: FilterKind,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectReason::NotApplicable(media) => {
                write!(f, "{} does not apply to {media}", self.kind)
            }
            RejectReason::InvalidValue(value) => write!(f, "{value} is not a valid {}", self.kind),
            RejectReason::NotNumeric(value) => {
                write!(f, "{} expects integers, got {value}", self.kind)
            }
            RejectReason::OutOfRange(n) => write!(f, "{n} is out of range for {}", self.kind),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedFilters {
    /// `filter[key]=value&...`, keys ascending; empty when nothing survived.
    pub query: String,
    pub rejected: Vec<RejectedFilter>,
}

/// Encodes `filters` for `media`, dropping anything invalid.
#[must_use]
pub fn encode(media: Media, filters: &Filters) -> String {
    let encoded = encode_with_report(media, filters);
    for rejected in &encoded.rejected {
        debug!(%media, "Dropping filter: {}", rejected);
    }
    encoded.query
}

/// Like [`encode`], also reporting what was dropped and why.
#[must_use]
pub fn encode_with_report(media: Media, filters: &Filters) -> EncodedFilters {
    let profile = media.profile();
    let mut rejected = Vec::new();
    let mut serialized: BTreeMap<&'static str, String> = BTreeMap::new();

    for (kind, values) in filters.iter() {
        if values.is_empty() {
            continue;
        }

        if !profile.applies(kind) {
            rejected.push(RejectedFilter {
                kind,
                reason: RejectReason::NotApplicable(media),
            });
            continue;
        }

        let value = match kind {
            FilterKind::AverageRating => {
                collapse_range(kind, values, ranges::AVERAGE_RATING, &mut rejected)
            }
            FilterKind::Year => collapse_range(kind, values, ranges::YEAR, &mut rejected),
            FilterKind::AgeRating
            | FilterKind::Genres
            | FilterKind::Season
            | FilterKind::Subtype => join_members(kind, values, profile, &mut rejected),
        };

        if !value.is_empty() {
            serialized.insert(kind.as_str(), value);
        }
    }

    let query = serialized
        .iter()
        .map(|(key, value)| format!("filter[{key}]={value}&"))
        .collect();

    EncodedFilters { query, rejected }
}

fn is_member(kind: FilterKind, value: &FilterValue, profile: &MediaProfile) -> bool {
    match kind {
        FilterKind::AgeRating => matches!(value, FilterValue::AgeRating(_)),
        FilterKind::Season => matches!(value, FilterValue::Season(_)),
        FilterKind::Genres => matches!(value, FilterValue::Genre(_)),
        FilterKind::Subtype => profile.accepts_subtype(value),
        FilterKind::AverageRating | FilterKind::Year => false,
    }
}

/// Keeps the enumeration members valid for `kind` and joins them with `,`.
fn join_members(
    kind: FilterKind,
    values: &[FilterValue],
    profile: &MediaProfile,
    rejected: &mut Vec<RejectedFilter>,
) -> String {
    let mut kept = Vec::with_capacity(values.len());
    for value in values {
        if is_member(kind, value, profile) {
            kept.push(value.to_string());
        } else {
            rejected.push(RejectedFilter {
                kind,
                reason: RejectReason::InvalidValue(*value),
            });
        }
    }
    kept.join(",")
}

/// `"{v}.."` for one value, `"{first}..{last}"` for several. Any non-integer
/// or out-of-range value drops the whole criterion.
fn collapse_range(
    kind: FilterKind,
    values: &[FilterValue],
    bounds: RangeInclusive<i64>,
    rejected: &mut Vec<RejectedFilter>,
) -> String {
    let mut numbers = Vec::with_capacity(values.len());
    for value in values {
        let reason = match value.as_number() {
            Some(n) if bounds.contains(&n) => {
                numbers.push(n);
                continue;
            }
            Some(n) => RejectReason::OutOfRange(n),
            None => RejectReason::NotNumeric(*value),
        };
        rejected.push(RejectedFilter { kind, reason });
        return String::new();
    }

    match numbers.as_slice() {
        [] => String::new(),
        [only] => format!("{only}.."),
        [first, .., last] => format!("{first}..{last}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgeRating, AnimeSubtype, Genre, MangaSubtype, Season};

    #[test]
    fn empty_filters_encode_to_nothing() {
        assert_eq!(encode(Media::Anime, &Filters::new()), "");
        let filters = Filters::new().with(FilterKind::Genres, Vec::<Genre>::new());
        assert!(filters.is_empty());
        assert_eq!(encode(Media::Anime, &filters), "");
    }

    #[test]
    fn average_rating_single_and_range() {
        let one = Filters::new().with(FilterKind::AverageRating, [50]);
        assert_eq!(encode(Media::Anime, &one), "filter[averageRating]=50..&");

        let two = Filters::new().with(FilterKind::AverageRating, [10, 90]);
        assert_eq!(encode(Media::Anime, &two), "filter[averageRating]=10..90&");

        let unsorted = Filters::new().with(FilterKind::AverageRating, [90, 40, 10]);
        assert_eq!(encode(Media::Manga, &unsorted), "filter[averageRating]=90..10&");
    }

    #[test]
    fn out_of_range_numbers_drop_the_criterion() {
        let low = Filters::new().with(FilterKind::AverageRating, [3]);
        let report = encode_with_report(Media::Anime, &low);
        assert_eq!(report.query, "");
        assert_eq!(
            report.rejected,
            vec![RejectedFilter {
                kind: FilterKind::AverageRating,
                reason: RejectReason::OutOfRange(3),
            }]
        );

        let partial = Filters::new().with(FilterKind::Year, [1990, 2100]);
        assert_eq!(encode(Media::Anime, &partial), "");

        let edges = Filters::new().with(FilterKind::Year, [1868, 2030]);
        assert_eq!(encode(Media::Anime, &edges), "filter[year]=1868..2030&");
    }

    #[test]
    fn numeric_kinds_reject_enum_values() {
        let filters = Filters::new().with(FilterKind::Year, [FilterValue::from(Season::Fall)]);
        let report = encode_with_report(Media::Anime, &filters);
        assert_eq!(report.query, "");
        assert!(matches!(report.rejected[0].reason, RejectReason::NotNumeric(_)));
    }

    #[test]
    fn anime_only_kinds_are_dropped_for_manga() {
        let filters = Filters::new()
            .with(FilterKind::AgeRating, [AgeRating::Pg])
            .with(FilterKind::Season, [Season::Winter]);

        let report = encode_with_report(Media::Manga, &filters);
        assert_eq!(report.query, "");
        assert_eq!(report.rejected.len(), 2);
        assert!(
            report
                .rejected
                .iter()
                .all(|r| r.reason == RejectReason::NotApplicable(Media::Manga))
        );

        assert_eq!(
            encode(Media::Anime, &filters),
            "filter[ageRating]=PG&filter[season]=winter&"
        );
    }

    #[test]
    fn members_are_filtered_individually() {
        let filters = Filters::new().with(
            FilterKind::AgeRating,
            [
                FilterValue::from(AgeRating::G),
                FilterValue::from(Season::Fall),
                FilterValue::from(AgeRating::R18),
            ],
        );
        let report = encode_with_report(Media::Anime, &filters);
        assert_eq!(report.query, "filter[ageRating]=G,R18&");
        assert_eq!(report.rejected.len(), 1);
    }

    #[test]
    fn genres_use_slugs() {
        let filters = Filters::new().with(
            FilterKind::Genres,
            [Genre::SliceOfLife, Genre::MartialArts, Genre::Comedy],
        );
        assert_eq!(
            encode(Media::Manga, &filters),
            "filter[categories]=slice-of-life,martial-arts,comedy&"
        );
    }

    #[test]
    fn subtype_set_depends_on_media() {
        let filters = Filters::new().with(
            FilterKind::Subtype,
            [
                FilterValue::from(AnimeSubtype::Tv),
                FilterValue::from(MangaSubtype::Manhwa),
            ],
        );
        assert_eq!(encode(Media::Anime, &filters), "filter[subtype]=tv&");
        assert_eq!(encode(Media::Manga, &filters), "filter[subtype]=manhwa&");
    }

    #[test]
    fn keys_are_sorted_by_wire_name() {
        let filters = Filters::new()
            .with(FilterKind::Year, [2020])
            .with(FilterKind::Subtype, [AnimeSubtype::Movie])
            .with(FilterKind::Genres, [Genre::Action])
            .with(FilterKind::AgeRating, [AgeRating::R])
            .with(FilterKind::Season, [Season::Spring])
            .with(FilterKind::AverageRating, [70]);

        assert_eq!(
            encode(Media::Anime, &filters),
            "filter[ageRating]=R&filter[averageRating]=70..&filter[categories]=action&\
             filter[season]=spring&filter[subtype]=movie&filter[year]=2020..&"
        );
    }

    #[test]
    fn with_appends_to_existing_values() {
        let filters = Filters::new()
            .with(FilterKind::Year, [2001])
            .with(FilterKind::Year, [2005]);
        assert_eq!(filters.get(FilterKind::Year).unwrap().len(), 2);
        assert_eq!(encode(Media::Anime, &filters), "filter[year]=2001..2005&");
    }

    #[test]
    fn rejection_messages() {
        let rejected = RejectedFilter {
            kind: FilterKind::Season,
            reason: RejectReason::NotApplicable(Media::Manga),
        };
        assert_eq!(rejected.to_string(), "season does not apply to manga");
    }
}
