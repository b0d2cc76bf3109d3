/// Builder for PostgREST-style query strings: `select=*`, `field=eq.value`,
/// `order=field.desc`, `limit=N`. Parameter order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestQuery {
    params: Vec<(String, String)>,
}

impl RestQuery {
    pub fn new() -> Self {
        RestQuery::default()
    }

    pub fn select_all() -> Self {
        RestQuery::new().select("*")
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    pub fn eq(mut self, field: &str, value: &str) -> Self {
        self.params.push((field.into(), format!("eq.{}", value)));
        self
    }

    pub fn neq(mut self, field: &str, value: &str) -> Self {
        self.params.push((field.into(), format!("neq.{}", value)));
        self
    }

    pub fn order_desc(mut self, field: &str) -> Self {
        self.params.push(("order".into(), format!("{}.desc", field)));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit".into(), limit.to_string()));
        self
    }

    pub fn limit_opt(self, limit: Option<u32>) -> Self {
        match limit {
            Some(n) => self.limit(n),
            None => self,
        }
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Encodes the query for appending after `?`.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), encode_value(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// `*`, `.` and `,` carry meaning in PostgREST and are left readable.
fn encode_value(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%2A", "*")
        .replace("%2C", ",")
}
