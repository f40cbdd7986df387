use serde::{Deserialize, Serialize};

use super::names::{Catalog, Contributor, EventType, MagnitudeType, ProductType};

/// Known enumerated parameter values, from `application.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApplicationInfo {
    #[serde(default)]
    pub catalogs: Vec<Catalog>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    #[serde(default, rename = "eventtypes")]
    pub event_types: Vec<EventType>,
    #[serde(default, rename = "magnitudetypes")]
    pub magnitude_types: Vec<MagnitudeType>,
    #[serde(default, rename = "producttypes")]
    pub product_types: Vec<ProductType>,
}

/// WADL description of the service, from `application.wadl`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApplicationWadl {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    pub resources: Resources,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Resources {
    #[serde(rename = "@base")]
    pub base: String,
    #[serde(rename = "resource", default)]
    pub resources: Vec<Resource>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Resource {
    #[serde(rename = "@path")]
    pub path: String,
    #[serde(rename = "method", default)]
    pub methods: Vec<Method>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Method {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(default)]
    pub request: Option<Request>,
    #[serde(default)]
    pub response: Option<MethodResponse>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Request {
    #[serde(rename = "param", default)]
    pub params: Vec<Param>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Param {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@style", default)]
    pub style: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@default", default)]
    pub default: Option<String>,
    #[serde(rename = "@mediaType", default)]
    pub media_type: Option<String>,
    #[serde(rename = "option", default)]
    pub options: Vec<ParamOption>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ParamOption {
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "@mediaType", default)]
    pub media_type: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MethodResponse {
    #[serde(rename = "@status", default)]
    pub status: Option<String>,
    #[serde(rename = "representation", default)]
    pub representations: Vec<Representation>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Representation {
    #[serde(rename = "@mediaType")]
    pub media_type: String,
    #[serde(rename = "@element", default)]
    pub element: Option<String>,
}

impl ApplicationWadl {
    /// Finds a resource by its path, e.g. `"query"`.
    pub fn resource(&self, path: &str) -> Option<&Resource> {
        self.resources.resources.iter().find(|r| r.path == path)
    }
}
