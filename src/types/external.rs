use serde::Deserialize;

// Wire shape of an api-ninjas /v1/country object. population arrives in
// thousands, gdp in millions (nominal). Absent fields decode to 0 / "".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiCountry {
    pub name: String,
    pub iso2: String,
    pub population: i64,
    pub gdp: f64,
    pub gdp_per_capita: f64,
}
