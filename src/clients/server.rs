use actix_web::{
    delete,
    error::BlockingError,
    get,
    http::{header::ContentType, StatusCode},
    post, put, web, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::{
    consts::consts::{EntityId, GREETING},
    database::{
        request_manager::{RequestManager, RequestManagerError},
        table::{row::UpdatePersonData, table::ApplyErrors},
    },
    model::person::Person,
};

/// Access log format, one line per request: `GET /people HTTP/1.1 200 0.412 ms - 120`
pub const HTTP_LOG_FORMAT: &str = "%r %s %D ms - %b";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Database(#[from] RequestManagerError),
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Blocking thread pool has shut down")]
    BlockingPoolShutdown,
}

impl From<BlockingError> for ServerError {
    fn from(_: BlockingError) -> Self {
        ServerError::BlockingPoolShutdown
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Database(RequestManagerError::Rejected(
                ApplyErrors::CannotUpdateDoesNotExist(_) | ApplyErrors::CannotDeleteDoesNotExist(_),
            )) => StatusCode::NOT_FOUND,
            ServerError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ServerError::Database(RequestManagerError::DatabaseTimeout) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServerError::Database(_) | ServerError::BlockingPoolShutdown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Reads a JSON object body, a missing body or a non JSON content type reads as `{}`
fn read_body<T>(req: &HttpRequest, body: &web::Bytes) -> Result<T, ServerError>
where
    T: DeserializeOwned + Default,
{
    let content_type = req.content_type();
    let is_json = content_type == "application/json" || content_type.ends_with("+json");

    if !is_json || body.is_empty() {
        return Ok(T::default());
    }

    Ok(serde_json::from_slice(body)?)
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}

#[get("/people")]
async fn list_people(
    request_manager: web::Data<RequestManager>,
) -> Result<HttpResponse, ServerError> {
    let people = web::block(move || request_manager.send_list()).await??;

    Ok(HttpResponse::Ok().json(people))
}

/// Responds with `null` rather than a 404 when nobody has the name
#[get("/people/{name}")]
async fn find_person_by_name(
    request_manager: web::Data<RequestManager>,
    name: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let name = name.into_inner();

    let person = web::block(move || request_manager.send_find_by_name(name)).await??;

    Ok(HttpResponse::Ok().json(person))
}

#[post("/people")]
async fn create_person(
    request_manager: web::Data<RequestManager>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let person: Person = read_body(&req, &body)?;

    let people = web::block(move || request_manager.send_add(person)).await??;

    Ok(HttpResponse::Ok().json(people))
}

#[put("/people/{id}")]
async fn update_person(
    request_manager: web::Data<RequestManager>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let id = EntityId(id.into_inner());
    let update: UpdatePersonData = read_body(&req, &body)?;

    let person = web::block(move || request_manager.send_update(id, update)).await??;

    Ok(HttpResponse::Ok().json(person))
}

#[delete("/people/{id}")]
async fn delete_person(
    request_manager: web::Data<RequestManager>,
    id: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let id = EntityId(id.into_inner());

    let people = web::block(move || request_manager.send_remove(id)).await??;

    Ok(HttpResponse::Ok().json(people))
}

/// Registers every route, the `RequestManager` must be provided as app data
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(list_people)
        .service(find_person_by_name)
        .service(create_person)
        .service(update_person)
        .service(delete_person);
}
