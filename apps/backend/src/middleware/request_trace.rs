//! Per-request tracing.
//!
//! For every request this middleware:
//! - mints a trace id and stores it in the request extensions,
//! - runs the downstream future inside a `request` span and inside
//!   [`trace_ctx::with_trace_id`], so problem responses can report the id,
//! - echoes the id as `x-request-id` (and `x-trace-id` when the handler did
//!   not set one),
//! - emits one `request_completed` event, leveled by status class.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

const X_REQUEST_ID: &str = "x-request-id";
const X_TRACE_ID: &str = "x-trace-id";

/// Trace id of a request, as stored in its extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

#[derive(Clone, Default)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let trace_id = Uuid::new_v4().to_string();
        let method = req.method().to_string();
        let path = req.path().to_string();

        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let span = info_span!("request", trace_id = %trace_id, method = %method, path = %path);
        let fut = trace_ctx::with_trace_id(trace_id.clone(), self.service.call(req));

        Box::pin(
            async move {
                let result = fut.await;

                let status = match &result {
                    Ok(res) => res.status(),
                    Err(err) => err.as_response_error().status_code(),
                };
                let status_code = status.as_u16();
                let duration_us = start.elapsed().as_micros() as u64;

                if status.is_server_error() {
                    error!(http.status_code = status_code, duration_us, "request_completed");
                } else if status.is_client_error() {
                    warn!(http.status_code = status_code, duration_us, "request_completed");
                } else {
                    info!(http.status_code = status_code, duration_us, "request_completed");
                }

                let mut res = result?;
                if let Ok(value) = HeaderValue::from_str(&trace_id) {
                    let headers = res.headers_mut();
                    headers.insert(HeaderName::from_static(X_REQUEST_ID), value.clone());
                    if !headers.contains_key(X_TRACE_ID) {
                        headers.insert(HeaderName::from_static(X_TRACE_ID), value);
                    }
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}
