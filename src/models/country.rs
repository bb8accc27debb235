use serde::Serialize;

// Field declaration order is the serialized order the table page consumes.
#[derive(Serialize)]
pub struct CountryRow {
    pub rank: u32,
    pub name: String,
    pub flag: String,
    pub population: String,
    pub share: String,
    pub gdp_nominal: String,
    pub gdp_ppp: String,
    pub link: String,
}
