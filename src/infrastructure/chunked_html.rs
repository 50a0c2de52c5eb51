// Chunked HTML streaming - flush the loading shell before the data arrives
use crate::infrastructure::http_response::HTML_CONTENT_TYPE;
use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::Stream;

/// Stream each rendered fragment as its own chunk.
///
/// The body is sent uncompressed: fragments must reach the browser as soon as
/// they are yielded, and a whole-body encoder would hold them back.
pub fn chunked_html_stream<S>(fragments: S) -> Response<Body>
where
    S: Stream<Item = String> + Send + 'static,
{
    let byte_stream = fragments.map(|fragment| Ok::<_, std::io::Error>(Bytes::from(fragment)));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from_stream(byte_stream));

    match response {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
