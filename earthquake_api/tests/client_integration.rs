use usgs_earthquake::types::{Catalog, QueryResponse};
use usgs_earthquake::{Client, Error, EventQuery, OrderBy};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

/// Runs a blocking client call off the async runtime.
async fn blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

async fn serve(route: &str, template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test(flavor = "multi_thread")]
async fn version_is_trimmed() {
    let mock_server = serve(
        "/version",
        ResponseTemplate::new(200).set_body_string("1.14.1\n"),
    )
    .await;

    let uri = mock_server.uri();
    let version = blocking(move || Client::with_base_url(&uri)?.version())
        .await
        .unwrap();
    assert_eq!(version.version, "1.14.1");
}

#[tokio::test(flavor = "multi_thread")]
async fn count_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/count"))
        .and(query_param("format", "geojson"))
        .and(query_param("minmagnitude", "4.5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("count.json")))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let resp = blocking(move || {
        Client::with_base_url(&uri)?.count(&EventQuery::new().with_min_magnitude(4.5))
    })
    .await
    .unwrap();
    assert_eq!(resp.count, 317);
    assert_eq!(resp.max_allowed, 20000);
}

#[tokio::test(flavor = "multi_thread")]
async fn query_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("catalog", "us"))
        .and(query_param("orderby", "magnitude"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("query.json")))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let resp = blocking(move || {
        let query = EventQuery::new()
            .with_catalog(Catalog::US)
            .with_order_by(OrderBy::Magnitude)
            .with_limit(2);
        Client::with_base_url(&uri)?.query(&query)
    })
    .await
    .unwrap();
    assert_eq!(resp.features.len(), 2);
    assert_eq!(resp.features[0].id, "uw61362166");
}

#[tokio::test(flavor = "multi_thread")]
async fn base_url_path_prefix_is_kept() {
    let mock_server = serve(
        "/fdsnws/event/1/count",
        ResponseTemplate::new(200).set_body_string(load_fixture("count.json")),
    )
    .await;

    let uri = format!("{}/fdsnws/event/1", mock_server.uri());
    let resp = blocking(move || Client::with_base_url(&uri)?.count(&EventQuery::new()))
        .await
        .unwrap();
    assert_eq!(resp.count, 317);
}

#[tokio::test(flavor = "multi_thread")]
async fn catalogs_and_contributors_from_xml() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(load_fixture("catalogs.xml"), "application/xml"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contributors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(load_fixture("contributors.xml"), "application/xml"),
        )
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let (catalogs, contributors) = blocking(move || {
        let client = Client::with_base_url(&uri)?;
        Ok::<_, Error>((client.catalogs()?, client.contributors()?))
    })
    .await
    .unwrap();
    assert_eq!(catalogs.catalogs.len(), 4);
    assert_eq!(catalogs.catalogs[3], Catalog::US);
    assert_eq!(contributors.contributors.len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn application_info_and_wadl() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/application.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("application.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/application.wadl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(load_fixture("application.wadl"), "application/xml"),
        )
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let (info, wadl) = blocking(move || {
        let client = Client::with_base_url(&uri)?;
        Ok::<_, Error>((client.application_info()?, client.application_wadl()?))
    })
    .await
    .unwrap();
    assert_eq!(info.catalogs.len(), 5);
    assert_eq!(wadl.resources.resources.len(), 3);
    let query = wadl.resource("query").unwrap();
    assert_eq!(query.methods[0].id, "query");
    assert!(wadl.resource("version").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_keeps_body() {
    let mock_server = serve(
        "/query",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let uri = mock_server.uri();
    let result = blocking(move || Client::with_base_url(&uri)?.query(&EventQuery::new())).await;
    match result {
        Err(Error::HttpStatus { code, status, body }) => {
            assert_eq!(code, 500);
            assert_eq!(status, "500 Internal Server Error");
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus, got {:?}", other.map(|r| r.features.len())),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn html_error_page_body_is_dropped() {
    let mock_server = serve(
        "/count",
        ResponseTemplate::new(400)
            .set_body_raw("<html><body>Bad Request</body></html>", "text/html"),
    )
    .await;

    let uri = mock_server.uri();
    let result = blocking(move || Client::with_base_url(&uri)?.count(&EventQuery::new())).await;
    assert!(matches!(
        result,
        Err(Error::HttpStatus { code: 400, ref body, .. }) if body.is_empty()
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn no_content_is_an_error() {
    let mock_server = serve("/query", ResponseTemplate::new(204)).await;

    let uri = mock_server.uri();
    let result = blocking(move || Client::with_base_url(&uri)?.query(&EventQuery::new())).await;
    assert!(matches!(result, Err(Error::HttpStatus { code: 204, .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_a_decode_error() {
    let mock_server = serve(
        "/query",
        ResponseTemplate::new(200).set_body_string("{not valid json}"),
    )
    .await;

    let uri = mock_server.uri();
    let result = blocking(move || Client::with_base_url(&uri)?.query(&EventQuery::new())).await;
    assert!(matches!(result, Err(Error::Decode { format: "json", .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn query_paged_end_to_end() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/count"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"count":4,"maxAllowed":20000}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("query.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let pages = blocking(move || {
        let client = Client::with_base_url(&uri)?;
        let mut pages: Vec<QueryResponse> = Vec::new();
        client.query_paged(&EventQuery::new().with_limit(2), |page| {
            pages.push(page);
            Ok::<(), Error>(())
        })?;
        Ok::<_, Error>(pages)
    })
    .await
    .unwrap();
    assert_eq!(pages.len(), 2);

    let requests = mock_server.received_requests().await.unwrap();
    let offsets: Vec<String> = requests
        .iter()
        .filter(|r| r.url.path() == "/query")
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "offset")
                .map(|(_, v)| v.into_owned())
        })
        .collect();
    assert_eq!(offsets, vec!["1", "3"]);
}
