//! Property search filters
//!
//! A search is described by [`FilterOptions`], an ordered list of
//! [`SearchFilter`]s. Each recognized option key maps to one filter kind;
//! keys outside that set are skipped.

use crate::errors::QueryError;
use crate::query_builder::clause::ClauseSet;
use crate::query_builder::params::QueryParams;
use serde_json::{Map, Value};

/// Option keys understood by the property search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    City,
    OwnerId,
    MinimumPricePerNight,
    MaximumPricePerNight,
    MinimumRating,
}

impl FilterKey {
    pub const ALL: [FilterKey; 5] = [
        FilterKey::City,
        FilterKey::OwnerId,
        FilterKey::MinimumPricePerNight,
        FilterKey::MaximumPricePerNight,
        FilterKey::MinimumRating,
    ];

    /// Look up a key by its option name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "city" => Some(FilterKey::City),
            "owner_id" => Some(FilterKey::OwnerId),
            "minimum_price_per_night" => Some(FilterKey::MinimumPricePerNight),
            "maximum_price_per_night" => Some(FilterKey::MaximumPricePerNight),
            "minimum_rating" => Some(FilterKey::MinimumRating),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::City => "city",
            FilterKey::OwnerId => "owner_id",
            FilterKey::MinimumPricePerNight => "minimum_price_per_night",
            FilterKey::MaximumPricePerNight => "maximum_price_per_night",
            FilterKey::MinimumRating => "minimum_rating",
        }
    }

    /// Read a raw option value as a filter of this kind
    ///
    /// `null` and blank strings mean the option was left empty and yield `None`.
    /// Values that cannot be read as this kind are kept verbatim and bound
    /// unchanged, so the database decides whether they compare.
    pub fn parse(self, value: &Value) -> Option<SearchFilter> {
        if is_blank(value) {
            return None;
        }

        let filter = match self {
            FilterKey::City => SearchFilter::City(text(value)),
            FilterKey::OwnerId => match integer(value) {
                Some(owner_id) => SearchFilter::OwnerId(owner_id),
                None => SearchFilter::Verbatim(self, value.clone()),
            },
            FilterKey::MinimumPricePerNight => match decimal(value) {
                Some(dollars) => SearchFilter::MinimumPricePerNight(dollars),
                None => SearchFilter::Verbatim(self, value.clone()),
            },
            FilterKey::MaximumPricePerNight => match decimal(value) {
                Some(dollars) => SearchFilter::MaximumPricePerNight(dollars),
                None => SearchFilter::Verbatim(self, value.clone()),
            },
            FilterKey::MinimumRating => match decimal(value) {
                Some(rating) => SearchFilter::MinimumRating(rating),
                None => SearchFilter::Verbatim(self, value.clone()),
            },
        };

        Some(filter)
    }

    /// Clause text for this key against the given placeholder
    fn clause(self, param: &str) -> String {
        match self {
            FilterKey::City => format!("city LIKE {}", param),
            FilterKey::OwnerId => format!("owner_id = {}", param),
            FilterKey::MinimumPricePerNight => format!("cost_per_night >= {}", param),
            FilterKey::MaximumPricePerNight => format!("cost_per_night <= {}", param),
            FilterKey::MinimumRating => format!("avg(rating) >= {}", param),
        }
    }

    /// Whether the clause filters on an aggregate and belongs in HAVING
    fn is_aggregate(self) -> bool {
        matches!(self, FilterKey::MinimumRating)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

fn decimal(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

fn whole(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT).then_some(n as i64)
}

/// A single recognized search condition
///
/// Prices are dollar amounts; they are converted to cents when bound.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilter {
    City(String),
    OwnerId(i64),
    MinimumPricePerNight(f64),
    MaximumPricePerNight(f64),
    MinimumRating(f64),
    /// A recognized key whose value is bound exactly as given
    Verbatim(FilterKey, Value),
}

impl SearchFilter {
    pub fn key(&self) -> FilterKey {
        match self {
            SearchFilter::City(_) => FilterKey::City,
            SearchFilter::OwnerId(_) => FilterKey::OwnerId,
            SearchFilter::MinimumPricePerNight(_) => FilterKey::MinimumPricePerNight,
            SearchFilter::MaximumPricePerNight(_) => FilterKey::MaximumPricePerNight,
            SearchFilter::MinimumRating(_) => FilterKey::MinimumRating,
            SearchFilter::Verbatim(key, _) => *key,
        }
    }

    fn bound_value(&self) -> Value {
        match self {
            SearchFilter::City(city) => Value::String(format!("%{}%", city)),
            SearchFilter::OwnerId(owner_id) => Value::from(*owner_id),
            SearchFilter::MinimumPricePerNight(dollars)
            | SearchFilter::MaximumPricePerNight(dollars) => {
                Value::from(dollars_to_cents(*dollars))
            }
            SearchFilter::MinimumRating(rating) => number_value(*rating),
            SearchFilter::Verbatim(_, value) => value.clone(),
        }
    }

    /// Bind this filter's value and record the clause that references it
    pub(crate) fn apply(&self, params: &mut QueryParams, clauses: &mut ClauseSet) {
        let key = self.key();
        let param = params.push(self.bound_value());
        let clause = key.clause(&param);

        if key.is_aggregate() {
            clauses.push_having(clause);
        } else {
            clauses.push_filter(clause);
        }
    }
}

/// Nearest whole cent
pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Whole numbers bind as integers, everything else as floats
fn number_value(n: f64) -> Value {
    match whole(n) {
        Some(i) => Value::from(i),
        None => Value::from(n),
    }
}

/// Ordered set of search filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    filters: Vec<SearchFilter>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a JSON object
    ///
    /// Unrecognized keys are skipped. Anything other than an object is an
    /// invalid argument.
    pub fn from_json(options: &Value) -> Result<Self, QueryError> {
        match options {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(QueryError::InvalidArgument(format!(
                "search options must be an object, got {}",
                json_type_name(other)
            ))),
        }
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut options = Self::new();
        for (key, value) in map {
            options.insert_raw(key, value);
        }
        options
    }

    /// Read options from decoded query string pairs, e.g. `city=Vancouver`
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.insert_raw(key.as_ref(), &Value::String(value.as_ref().to_string()));
        }
        options
    }

    fn insert_raw(&mut self, key: &str, value: &Value) {
        let Some(filter_key) = FilterKey::from_key(key) else {
            crate::debug_log!("Ignoring unknown search option '{}'", key);
            return;
        };

        if let Some(filter) = filter_key.parse(value) {
            self.filters.push(filter);
        }
    }

    /// Add a filter
    pub fn filter(mut self, filter: SearchFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Substring match on the property city
    pub fn city(self, city: impl Into<String>) -> Self {
        self.filter(SearchFilter::City(city.into()))
    }

    pub fn owner_id(self, owner_id: i64) -> Self {
        self.filter(SearchFilter::OwnerId(owner_id))
    }

    /// Lower price bound in dollars
    pub fn minimum_price_per_night(self, dollars: f64) -> Self {
        self.filter(SearchFilter::MinimumPricePerNight(dollars))
    }

    /// Upper price bound in dollars
    pub fn maximum_price_per_night(self, dollars: f64) -> Self {
        self.filter(SearchFilter::MaximumPricePerNight(dollars))
    }

    /// Lower bound on the average review rating
    pub fn minimum_rating(self, rating: f64) -> Self {
        self.filter(SearchFilter::MinimumRating(rating))
    }

    pub fn filters(&self) -> &[SearchFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

impl FromIterator<SearchFilter> for FilterOptions {
    fn from_iter<I: IntoIterator<Item = SearchFilter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
