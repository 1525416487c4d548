//! # Persona REST Routes
//!
//! Axum routes mapping verb + path onto a `PersonaHandler`.
//!
//! Extractor rejections (unparseable ids, unreadable bodies) are taken as
//! `Result`s and turned into `RestError` so they render as envelopes too.
//! Each path also carries a method fallback, so an unsupported verb on a
//! known path gets a 405 envelope instead of an empty body.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        OriginalUri, Path, State,
    },
    http::Method,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::model::{PersonaId, PersonaPayload};

use super::errors::RestError;
use super::handler::PersonaHandler;

/// REST API server state
pub struct RestServer<H: PersonaHandler> {
    handler: H,
}

impl<H: PersonaHandler + 'static> RestServer<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route(
                "/personas",
                get(list_handler::<H>)
                    .post(create_handler::<H>)
                    .fallback(method_not_allowed),
            )
            .route(
                "/personas/health",
                get(health_handler::<H>).fallback(method_not_allowed),
            )
            .route(
                "/personas/:id",
                get(get_handler::<H>)
                    .put(update_handler::<H>)
                    .delete(delete_handler::<H>)
                    .fallback(method_not_allowed),
            )
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

fn respond<T: IntoResponse>(result: Result<T, RestError>) -> Response {
    match result {
        Ok(reply) => reply.into_response(),
        Err(err) => err.into_response(),
    }
}

async fn list_handler<H: PersonaHandler + 'static>(
    State(server): State<ServerState<H>>,
) -> Response {
    respond(server.handler.list())
}

async fn get_handler<H: PersonaHandler + 'static>(
    State(server): State<ServerState<H>>,
    id: Result<Path<PersonaId>, PathRejection>,
) -> Response {
    respond(id.map_err(RestError::from).and_then(|Path(id)| server.handler.get(id)))
}

async fn create_handler<H: PersonaHandler + 'static>(
    State(server): State<ServerState<H>>,
    body: Result<Json<PersonaPayload>, JsonRejection>,
) -> Response {
    respond(
        body.map_err(RestError::from)
            .and_then(|Json(payload)| server.handler.create(payload)),
    )
}

async fn update_handler<H: PersonaHandler + 'static>(
    State(server): State<ServerState<H>>,
    id: Result<Path<PersonaId>, PathRejection>,
    body: Result<Json<PersonaPayload>, JsonRejection>,
) -> Response {
    let result = id.map_err(RestError::from).and_then(|Path(id)| {
        let Json(payload) = body?;
        server.handler.update(id, payload)
    });
    respond(result)
}

async fn delete_handler<H: PersonaHandler + 'static>(
    State(server): State<ServerState<H>>,
    id: Result<Path<PersonaId>, PathRejection>,
) -> Response {
    respond(id.map_err(RestError::from).and_then(|Path(id)| server.handler.delete(id)))
}

async fn health_handler<H: PersonaHandler + 'static>(
    State(server): State<ServerState<H>>,
) -> Response {
    respond(server.handler.health())
}

/// Nested routers see a stripped URI; report the path the client sent
async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> RestError {
    RestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
