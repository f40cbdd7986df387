//! Blocking client for the FDSN event web service.

use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    paging::PagePlan,
    query::EventQuery,
    transport::{truncate_body, HttpTransport, Transport},
    types::{
        ApplicationInfo, ApplicationWadl, CatalogList, ContributorList, CountResponse,
        QueryResponse, Version,
    },
    Error,
};

/// Client for `https://earthquake.usgs.gov/fdsnws/event/1/`.
///
/// Every call blocks until the full response has been read. The client holds
/// no per-query state, so one instance can serve any number of calls.
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client pointing at the production service.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            transport: HttpTransport::new(&config)?,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn get_json<D: DeserializeOwned>(&self, path: &str, query: Option<&str>) -> Result<D, Error> {
        let body = self.transport.get(path, query)?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {} response: {} | body: {}",
                path,
                e,
                truncate_body(&body)
            );
            Error::decode("json", e)
        })
    }

    fn get_xml<D: DeserializeOwned>(&self, path: &str) -> Result<D, Error> {
        let body = self.transport.get(path, None)?;
        quick_xml::de::from_str(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {} response: {} | body: {}",
                path,
                e,
                truncate_body(&body)
            );
            Error::decode("xml", e)
        })
    }

    /// Fetches the known enumerated parameter values.
    pub fn application_info(&self) -> Result<ApplicationInfo, Error> {
        self.get_json("/application.json", None)
    }

    /// Fetches the WADL description of the service.
    pub fn application_wadl(&self) -> Result<ApplicationWadl, Error> {
        self.get_xml("/application.wadl")
    }

    /// Fetches the catalogs that can be passed as [`EventQuery::catalog`].
    pub fn catalogs(&self) -> Result<CatalogList, Error> {
        self.get_xml("/catalogs")
    }

    /// Fetches the contributors that can be passed as
    /// [`EventQuery::contributor`].
    pub fn contributors(&self) -> Result<ContributorList, Error> {
        self.get_xml("/contributors")
    }

    /// Counts the events matching `query` without fetching them.
    pub fn count(&self, query: &EventQuery) -> Result<CountResponse, Error> {
        self.get_json("/count", Some(&query.encode()))
    }

    /// Fetches one page of events matching `query`.
    pub fn query(&self, query: &EventQuery) -> Result<QueryResponse, Error> {
        self.get_json("/query", Some(&query.encode()))
    }

    /// Fetches the full service version number.
    pub fn version(&self) -> Result<Version, Error> {
        let body = self.transport.get("/version", None)?;
        Ok(Version {
            version: body.trim().to_string(),
        })
    }

    /// Fetches every event matching `query`, one page at a time.
    ///
    /// A count probe (sent without `limit`) decides how many records exist.
    /// Pages of `query.limit` records, or the service's `maxAllowed` when no
    /// limit is set, are then requested at increasing offsets until
    /// `query.total_results` (capped at the count) records have been covered.
    /// `handler` is called once per page, in order, before the next request.
    ///
    /// The first failure stops the loop: request and decode errors are
    /// converted into `E`, handler errors are returned as they are. Pages
    /// already handed to `handler` are not revisited.
    pub fn query_paged<F, E>(&self, query: &EventQuery, mut handler: F) -> Result<(), E>
    where
        F: FnMut(QueryResponse) -> Result<(), E>,
        E: From<Error>,
    {
        let mut probe_query = query.clone();
        probe_query.limit = None;
        let probe = self.count(&probe_query)?;

        let plan = PagePlan::resolve(query, &probe)?;
        tracing::debug!(
            count = probe.count,
            max_allowed = probe.max_allowed,
            page_size = plan.page_size,
            total = plan.total,
            "resolved page plan"
        );

        let mut page_query = query.clone();
        page_query.limit = Some(plan.page_size);
        for offset in plan.offsets() {
            page_query.offset = Some(offset);
            tracing::debug!(
                offset,
                page_size = plan.page_size,
                total = plan.total,
                "fetching page"
            );
            let page = self.query(&page_query)?;
            handler(page)?;
        }

        Ok(())
    }
}
