//! Structured search queries against XIVAPI's game-content indexes
//!
//! [`SearchQuery`] assembles the JSON body for `POST /search`: one match
//! clause per response language against the combined-name field, optional
//! numeric-range [`Filter`]s, an optional [`Sort`] directive, and `from`/`size`
//! pagination.

use crate::{Error, Language, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::fmt;

/// Languages a search body matches names against, in wire order
const SEARCH_CLAUSE_LANGUAGES: [&str; 4] = ["en", "de", "fr", "ja"];

/// String-matching algorithms supported by XIVAPI's search endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringAlgo {
    /// Server-side custom matching
    Custom,
    /// Wildcard matching
    Wildcard,
    /// Extended wildcard matching
    WildcardPlus,
    /// Fuzzy matching
    Fuzzy,
    /// Exact term matching
    Term,
    /// Prefix matching
    Prefix,
    /// Analyzed full-text match (XIVAPI's default)
    #[default]
    Match,
    /// Phrase matching
    MatchPhrase,
    /// Phrase-prefix matching
    MatchPhrasePrefix,
    /// Multi-field matching
    MultiMatch,
    /// Query-string syntax matching
    QueryString,
}

impl StringAlgo {
    /// Get all supported algorithms
    pub fn all() -> &'static [StringAlgo] {
        &[
            StringAlgo::Custom,
            StringAlgo::Wildcard,
            StringAlgo::WildcardPlus,
            StringAlgo::Fuzzy,
            StringAlgo::Term,
            StringAlgo::Prefix,
            StringAlgo::Match,
            StringAlgo::MatchPhrase,
            StringAlgo::MatchPhrasePrefix,
            StringAlgo::MultiMatch,
            StringAlgo::QueryString,
        ]
    }

    /// Convert to the name XIVAPI expects in a search body
    pub fn as_str(&self) -> &'static str {
        match self {
            StringAlgo::Custom => "custom",
            StringAlgo::Wildcard => "wildcard",
            StringAlgo::WildcardPlus => "wildcard_plus",
            StringAlgo::Fuzzy => "fuzzy",
            StringAlgo::Term => "term",
            StringAlgo::Prefix => "prefix",
            StringAlgo::Match => "match",
            StringAlgo::MatchPhrase => "match_phrase",
            StringAlgo::MatchPhrasePrefix => "match_phrase_prefix",
            StringAlgo::MultiMatch => "multi_match",
            StringAlgo::QueryString => "query_string",
        }
    }

    /// Parse an algorithm from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        StringAlgo::all().iter().find(|a| a.as_str() == s).copied()
    }
}

impl fmt::Display for StringAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StringAlgo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StringAlgo::parse(s).ok_or_else(|| Error::invalid_algorithm(s))
    }
}

/// Numeric comparison operators accepted in a range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
}

impl Comparison {
    /// Convert to the lowercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Gt => "gt",
            Comparison::Gte => "gte",
            Comparison::Lt => "lt",
            Comparison::Lte => "lte",
        }
    }

    /// Parse a comparison operator, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gt" => Some(Comparison::Gt),
            "gte" => Some(Comparison::Gte),
            "lt" => Some(Comparison::Lt),
            "lte" => Some(Comparison::Lte),
            _ => None,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Comparison {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Comparison::parse(s).ok_or_else(|| Error::invalid_filter(s))
    }
}

/// A numeric range constraint applied to a search query
///
/// Validated on construction; serializes to a `range` clause in the search
/// body's `filter` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    comparison: Comparison,
    value: serde_json::Number,
}

impl Filter {
    /// Create a filter, validating the comparison operator
    ///
    /// The comparison is case-insensitive and must be one of `gt`, `gte`,
    /// `lt`, `lte`.
    pub fn new(
        field: impl Into<String>,
        comparison: &str,
        value: impl Into<serde_json::Number>,
    ) -> Result<Self> {
        let comparison = comparison.parse()?;
        Ok(Self::with_comparison(field, comparison, value))
    }

    /// Create a filter from an already-typed comparison operator
    pub fn with_comparison(
        field: impl Into<String>,
        comparison: Comparison,
        value: impl Into<serde_json::Number>,
    ) -> Self {
        Self {
            field: field.into(),
            comparison,
            value: value.into(),
        }
    }

    /// The field the filter constrains
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The comparison operator
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Serialize to a `range` clause
    fn to_clause(&self) -> Value {
        json!({
            "range": {
                self.field.as_str(): {
                    self.comparison.as_str(): self.value
                }
            }
        })
    }
}

/// A single-field sort directive for a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    field: String,
    ascending: bool,
}

impl Sort {
    /// Create a sort directive
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    /// Sort ascending on `field`
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    /// Sort descending on `field`
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }

    fn to_directive(&self) -> Value {
        let direction = if self.ascending { "asc" } else { "desc" };
        json!([{ self.field.as_str(): direction }])
    }
}

/// Builder for a structured search against one or more content indexes
///
/// # Example
///
/// ```
/// use xivapi_client::{Filter, SearchQuery, Sort};
///
/// # fn example() -> xivapi_client::Result<()> {
/// let query = SearchQuery::new("Grade 4 Tincture")
///     .indexes(["Item"])
///     .columns(["ID", "Name", "Icon"])
///     .filter(Filter::new("LevelItem", "gte", 100)?)
///     .sort(Sort::descending("LevelItem"))
///     .per_page(25);
/// # let _ = query;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub(crate) name: String,
    pub(crate) indexes: Vec<String>,
    pub(crate) columns: Vec<String>,
    pub(crate) filters: Vec<Filter>,
    pub(crate) sort: Option<Sort>,
    pub(crate) language: Language,
    pub(crate) string_algo: StringAlgo,
    pub(crate) page: u32,
    pub(crate) per_page: u32,
}

impl SearchQuery {
    /// Create a query matching `name`, with default language (`en`),
    /// algorithm (`match`) and pagination (page 0, 10 results)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indexes: Vec::new(),
            columns: Vec::new(),
            filters: Vec::new(),
            sort: None,
            language: Language::default(),
            string_algo: StringAlgo::default(),
            page: 0,
            per_page: 10,
        }
    }

    /// Add a single content index to search
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.indexes.push(index.into());
        self
    }

    /// Add content indexes to search, e.g. `["Item", "Recipe"]`
    pub fn indexes<I, S>(mut self, indexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indexes.extend(indexes.into_iter().map(Into::into));
        self
    }

    /// Add a single column to return
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Add columns to return, e.g. `["ID", "Name", "Icon"]`
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Add a numeric range filter
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort directive
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the response language
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the string-matching algorithm
    pub fn string_algo(mut self, string_algo: StringAlgo) -> Self {
        self.string_algo = string_algo;
        self
    }

    /// Set the zero-indexed result page
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the number of results per page
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Check the query is well-formed enough to send
    pub fn validate(&self) -> Result<()> {
        if self.indexes.is_empty() {
            return Err(Error::invalid_index(
                "specify at least one index to search, e.g. [\"Recipe\"]",
            ));
        }
        if self.columns.is_empty() {
            return Err(Error::invalid_columns(
                "specify at least one column to return",
            ));
        }
        Ok(())
    }

    /// Build the JSON request body for `POST /search`
    pub fn body(&self) -> Value {
        let should: Vec<Value> = SEARCH_CLAUSE_LANGUAGES
            .iter()
            .map(|lang| self.match_clause(lang))
            .collect();

        let mut query = json!({ "bool": { "should": should } });
        if !self.filters.is_empty() {
            let clauses: Vec<Value> = self.filters.iter().map(Filter::to_clause).collect();
            query["bool"]["filter"] = Value::Array(clauses);
        }

        let mut inner = json!({
            "query": query,
            "from": self.page,
            "size": self.per_page,
        });
        if let Some(sort) = &self.sort {
            inner["sort"] = sort.to_directive();
        }

        json!({
            "indexes": join_unique(&self.indexes),
            "columns": join_unique(&self.columns),
            "body": inner,
        })
    }

    fn match_clause(&self, lang: &str) -> Value {
        json!({
            self.string_algo.as_str(): {
                format!("NameCombined_{lang}"): {
                    "query": self.name,
                    "fuzziness": "AUTO",
                    "prefix_length": 1,
                    "max_expansions": 50,
                }
            }
        })
    }
}

/// Deduplicate and comma-join a list of values; output order is sorted,
/// which the API treats as insignificant
pub(crate) fn join_unique<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect();
    unique.into_iter().collect::<Vec<_>>().join(",")
}
