mod meta;
pub use self::meta::{CountResponse, Metadata, Version};

mod feature;
pub use self::feature::{Feature, Geometry, Properties, QueryResponse};

mod application;
pub use self::application::{
    ApplicationInfo, ApplicationWadl, Method, MethodResponse, Param, ParamOption, Representation,
    Request, Resource, Resources,
};

mod listing;
pub use self::listing::{CatalogList, ContributorList};

mod names;
pub use self::names::{Catalog, Contributor, EventType, MagnitudeType, ProductType};
