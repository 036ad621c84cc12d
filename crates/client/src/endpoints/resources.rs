//! Paginated resource collection endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{Document, ItemsPage};

/// Fetch every document of a resource collection.
///
/// Pages are requested with `max_results`/`page` plus any extra query
/// parameters, and followed while the backend advertises `_links.next`.
/// An empty page also ends the walk.
pub async fn get_all(
    client: &Client,
    base_url: &str,
    token: &str,
    resource: &str,
    params: &[(&str, &str)],
    page_size: u32,
    max_retries: usize,
) -> Result<Vec<Document>> {
    let url = format!("{}/{}", base_url, resource);
    let mut documents = Vec::new();
    let mut page: u32 = 1;

    loop {
        debug!(resource, page, "Fetching resource page");

        let builder = client
            .get(&url)
            .basic_auth(token, Some(""))
            .query(&[("max_results", page_size), ("page", page)])
            .query(params);
        let response = send_request_with_retry(builder, max_retries).await?;

        let body: ItemsPage = response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("Malformed page of {}: {}", resource, e))
        })?;

        let received = body.items.len();
        if page == 1
            && let Some(total) = body.total()
        {
            debug!(resource, total, "Backend reports collection size");
        }
        let has_next = body.has_next();
        documents.extend(body.items);

        if received == 0 || !has_next {
            break;
        }
        page += 1;
    }

    debug!(resource, count = documents.len(), "Fetched resource collection");
    Ok(documents)
}
