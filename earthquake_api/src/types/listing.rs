use serde::{Deserialize, Serialize};

use super::names::{Catalog, Contributor};

/// `<Catalogs><Catalog>..</Catalog></Catalogs>`, from the catalogs method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogList {
    #[serde(rename = "Catalog", default)]
    pub catalogs: Vec<Catalog>,
}

/// `<Contributors><Contributor>..</Contributor></Contributors>`, from the
/// contributors method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContributorList {
    #[serde(rename = "Contributor", default)]
    pub contributors: Vec<Contributor>,
}
