use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Page size used by the buyer console when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A fabric listing as returned by `/api/find-fabrics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fabric {
    pub id: i64,
    /// Mill reference code. Preferred identity when present.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default)]
    pub fabric_group: Option<String>,
    #[serde(default)]
    pub fabrication: Option<String>,
    #[serde(default)]
    pub gsm: Option<f64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub width: Option<String>,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub manufacturer_id: Option<i64>,
    #[serde(default)]
    pub meta_data: serde_json::Value,
}

impl Fabric {
    /// Identity used for selection membership and de-duplication:
    /// the reference code if non-empty, else the numeric id.
    pub fn key(&self) -> FabricKey {
        match self.reference.as_deref() {
            Some(r) if !r.is_empty() => FabricKey(r.to_string()),
            _ => FabricKey(self.id.to_string()),
        }
    }

    /// Heading for cards and dialogs.
    pub fn title(&self) -> String {
        match self.reference.as_deref() {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => format!("Fabric #{}", self.id),
        }
    }

    /// Weight class derived from the listed GSM, if any.
    pub fn weight_class(&self) -> Option<WeightClass> {
        self.gsm.map(WeightClass::of_gsm)
    }
}

/// Canonical identity of a [`Fabric`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FabricKey(pub String);

impl FabricKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FabricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FabricKey {
    fn from(s: &str) -> Self {
        FabricKey(s.to_string())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Weight buckets understood by the `weight` search parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightClass {
    /// Under 160 GSM.
    Light,
    /// 160 to 240 GSM inclusive.
    Medium,
    /// Over 240 GSM.
    Heavy,
}

impl WeightClass {
    pub const ALL: [WeightClass; 3] = [WeightClass::Light, WeightClass::Medium, WeightClass::Heavy];

    pub fn of_gsm(gsm: f64) -> Self {
        if gsm < 160.0 {
            WeightClass::Light
        } else if gsm <= 240.0 {
            WeightClass::Medium
        } else {
            WeightClass::Heavy
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            WeightClass::Light => "light",
            WeightClass::Medium => "medium",
            WeightClass::Heavy => "heavy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightClass::Light => "Light (< 160 GSM)",
            WeightClass::Medium => "Medium (160-240 GSM)",
            WeightClass::Heavy => "Heavy (> 240 GSM)",
        }
    }
}

/// Search box text plus the three filter selects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub fabrication: String,
    #[serde(rename = "type")]
    pub fabric_type: String,
    pub gsm_range: String,
}

impl SearchQuery {
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// True when any criterion is set. Whitespace-only search text does not count.
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
            || !self.fabrication.is_empty()
            || !self.fabric_type.is_empty()
            || !self.gsm_range.is_empty()
    }

    pub fn apply(&mut self, patch: QueryPatch) {
        if let Some(term) = patch.term {
            self.term = term;
        }
        if let Some(fabrication) = patch.fabrication {
            self.fabrication = fabrication;
        }
        if let Some(fabric_type) = patch.fabric_type {
            self.fabric_type = fabric_type;
        }
        if let Some(gsm_range) = patch.gsm_range {
            self.gsm_range = gsm_range;
        }
    }
}

/// Partial update to a [`SearchQuery`]; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPatch {
    pub term: Option<String>,
    pub fabrication: Option<String>,
    pub fabric_type: Option<String>,
    pub gsm_range: Option<String>,
}

impl QueryPatch {
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn fabrication(fabrication: impl Into<String>) -> Self {
        Self {
            fabrication: Some(fabrication.into()),
            ..Self::default()
        }
    }

    pub fn fabric_type(fabric_type: impl Into<String>) -> Self {
        Self {
            fabric_type: Some(fabric_type.into()),
            ..Self::default()
        }
    }

    pub fn gsm_range(gsm_range: impl Into<String>) -> Self {
        Self {
            gsm_range: Some(gsm_range.into()),
            ..Self::default()
        }
    }

    /// Clear every criterion.
    pub fn reset() -> Self {
        Self {
            term: Some(String::new()),
            fabrication: Some(String::new()),
            fabric_type: Some(String::new()),
            gsm_range: Some(String::new()),
        }
    }
}

/// Query string for `GET /api/find-fabrics`. Empty criteria are omitted.
///
/// The fabric `type` filter has no endpoint parameter and is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindFabricsParams {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl FindFabricsParams {
    pub fn new(query: &SearchQuery, page: u32, limit: u32) -> Self {
        fn non_empty(s: &str) -> Option<String> {
            (!s.is_empty()).then(|| s.to_string())
        }
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: non_empty(&query.term),
            group: non_empty(&query.fabrication),
            weight: non_empty(&query.gsm_range),
        }
    }

    /// Ordered `(name, value)` pairs as they appear on the wire.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(group) = &self.group {
            pairs.push(("group", group.clone()));
        }
        if let Some(weight) = &self.weight {
            pairs.push(("weight", weight.clone()));
        }
        pairs
    }
}

/// Body of a `/api/find-fabrics` response.
///
/// Also accepts the older `{results, total, page, pages}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FindFabricsResponse {
    #[serde(alias = "results", default)]
    pub data: Vec<Fabric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(default)]
    pub total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,
}

impl FindFabricsResponse {
    pub fn new(data: Vec<Fabric>, has_more: bool, total: i64) -> Self {
        Self {
            data,
            has_more: Some(has_more),
            total,
            page: None,
            pages: None,
        }
    }

    /// Whether another page exists after this one.
    pub fn more_available(&self) -> bool {
        match (self.has_more, self.page, self.pages) {
            (Some(has_more), _, _) => has_more,
            (None, Some(page), Some(pages)) => page < pages,
            _ => false,
        }
    }
}

/// Accumulated search results shown in the fabric library.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultPage {
    pub items: Vec<Fabric>,
    /// Last page merged into `items`.
    pub page: u32,
    pub has_more: bool,
    pub total: i64,
}

impl Default for SearchResultPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            has_more: false,
            total: 0,
        }
    }
}

impl SearchResultPage {
    /// Merge a response for `page`: page 1 replaces, later pages append.
    pub fn merge(&mut self, page: u32, response: FindFabricsResponse) {
        let has_more = response.more_available();
        if page <= 1 {
            self.items = response.data;
        } else {
            self.items.extend(response.data);
        }
        self.page = page.max(1);
        self.has_more = has_more;
        self.total = response.total.max(0);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
