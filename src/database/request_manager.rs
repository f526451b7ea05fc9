use std::{sync::mpsc::Sender, time::Duration};
use thiserror::Error;

use crate::{
    consts::consts::{EntityId, DATABASE_TIMEOUT_SECS},
    model::{
        action::{Action, ActionResult},
        person::Person,
    },
};

use super::table::{row::UpdatePersonData, table::ApplyErrors};

pub enum DatabaseRequestAction {
    Request(Action),
    Shutdown,
}

impl DatabaseRequestAction {
    pub fn log_format(&self) -> String {
        match self {
            DatabaseRequestAction::Request(action) => action.log_format(),
            DatabaseRequestAction::Shutdown => "Shutdown".to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DatabaseResponseAction {
    Response(ActionResult),
    Rejected(ApplyErrors),
}

pub struct DatabaseRequest {
    pub response_sender: oneshot::Sender<DatabaseResponseAction>,
    pub action: DatabaseRequestAction,
}

/// Handle for talking to the database thread, cheap to clone
#[derive(Clone)]
pub struct RequestManager {
    database_sender: Sender<DatabaseRequest>,
}

#[derive(Error, Debug)]
pub enum RequestManagerError {
    #[error("Database took too long to respond to request")]
    DatabaseTimeout,
    #[error("Database is not running")]
    DatabaseUnavailable,
    #[error("Database responded with an unexpected result type")]
    UnexpectedResult,
    #[error(transparent)]
    Rejected(#[from] ApplyErrors),
}

/// Goal of the request manager is to provide a simple interface for interacting with the database
///
/// 1. CRUD operations -- these are type safe and map straight onto the HTTP routes
/// 2. Generic Action based API -- the caller needs to know which ActionResult an Action produces
impl RequestManager {
    pub fn new(database_sender: Sender<DatabaseRequest>) -> Self {
        Self { database_sender }
    }

    pub fn send_list(&self) -> Result<Vec<Person>, RequestManagerError> {
        self.send_single_action(Action::List)?
            .list()
            .ok_or(RequestManagerError::UnexpectedResult)
    }

    pub fn send_find_by_name(&self, name: String) -> Result<Option<Person>, RequestManagerError> {
        self.send_single_action(Action::FindByName(name))?
            .get_single()
            .ok_or(RequestManagerError::UnexpectedResult)
    }

    /// Returns the whole collection after the add
    pub fn send_add(&self, person: Person) -> Result<Vec<Person>, RequestManagerError> {
        self.send_single_action(Action::Add(person))?
            .list()
            .ok_or(RequestManagerError::UnexpectedResult)
    }

    /// Returns the merged person
    pub fn send_update(
        &self,
        id: EntityId,
        person_update: UpdatePersonData,
    ) -> Result<Person, RequestManagerError> {
        self.send_single_action(Action::Update(id, person_update))?
            .single()
            .ok_or(RequestManagerError::UnexpectedResult)
    }

    /// Returns the whole collection after the removal
    pub fn send_remove(&self, id: EntityId) -> Result<Vec<Person>, RequestManagerError> {
        self.send_single_action(Action::Remove(id))?
            .list()
            .ok_or(RequestManagerError::UnexpectedResult)
    }

    /// Sends a shutdown request to the database and returns the database's response
    pub fn send_shutdown_request(&self) -> Result<String, RequestManagerError> {
        self.send_database_request(DatabaseRequestAction::Shutdown)?
            .success_status()
            .ok_or(RequestManagerError::UnexpectedResult)
    }

    pub fn send_single_action(&self, action: Action) -> Result<ActionResult, RequestManagerError> {
        self.send_database_request(DatabaseRequestAction::Request(action))
    }

    pub fn send_database_request(
        &self,
        database_request: DatabaseRequestAction,
    ) -> Result<ActionResult, RequestManagerError> {
        let (response_sender, response_receiver) = oneshot::channel::<DatabaseResponseAction>();

        let request = DatabaseRequest {
            response_sender,
            action: database_request,
        };

        // Sends the request to the database thread, the database responds
        //  on the response_receiver once it has processed the request
        self.database_sender
            .send(request)
            .map_err(|_| RequestManagerError::DatabaseUnavailable)?;

        match response_receiver.recv_timeout(Duration::from_secs(DATABASE_TIMEOUT_SECS)) {
            Ok(DatabaseResponseAction::Response(action_result)) => Ok(action_result),
            Ok(DatabaseResponseAction::Rejected(err)) => Err(RequestManagerError::Rejected(err)),
            Err(oneshot::RecvTimeoutError::Timeout) => Err(RequestManagerError::DatabaseTimeout),
            Err(oneshot::RecvTimeoutError::Disconnected) => {
                Err(RequestManagerError::DatabaseUnavailable)
            }
        }
    }
}
