use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    database::request_manager::{DatabaseRequestAction, DatabaseResponseAction},
    model::action::{Action, ActionResult},
};

use super::{
    options::DatabaseOptions,
    request_manager::{DatabaseRequest, RequestManager},
    table::table::PersonTable,
};

/// Owns the collection. Requests are processed one at a time on a single thread, so no two
/// handlers ever observe a half applied change even when the HTTP workers run in parallel.
pub struct Database {
    person_table: PersonTable,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> Self {
        Self {
            person_table: PersonTable::from_people(options.seed),
        }
    }

    /// Moves the database onto its own thread and returns a handle for sending it requests
    ///
    /// The thread exits on a shutdown request, or once every `RequestManager` has been dropped.
    pub fn run(self) -> RequestManager {
        let (database_sender, database_receiver): (
            Sender<DatabaseRequest>,
            Receiver<DatabaseRequest>,
        ) = mpsc::channel();

        let mut database = self;

        thread::spawn(move || database.process_requests(database_receiver));

        RequestManager::new(database_sender)
    }

    fn process_requests(&mut self, database_receiver: Receiver<DatabaseRequest>) {
        log::info!(
            "📀 Data               [Rows: {}]",
            self.person_table.len()
        );

        while let Ok(DatabaseRequest {
            action,
            response_sender,
        }) = database_receiver.recv()
        {
            log::debug!("Received request: {}", action.log_format());

            let action_response = match action {
                DatabaseRequestAction::Request(action) => self.process_action(action),
                DatabaseRequestAction::Shutdown => {
                    let _ = response_sender.send(DatabaseResponseAction::Response(
                        ActionResult::SuccessStatus("Successfully shutdown database".to_string()),
                    ));

                    return;
                }
            };

            // The caller may have timed out and dropped its receiver
            if response_sender.send(action_response).is_err() {
                log::warn!("Caller went away before the response was sent");
            }
        }
    }

    pub fn process_action(&mut self, action: Action) -> DatabaseResponseAction {
        let is_mutation = action.is_mutation();

        match self.person_table.apply(action) {
            Ok(action_result) => {
                if is_mutation {
                    log::debug!("✅ Applied: [Rows: {}]", self.person_table.len());
                }

                DatabaseResponseAction::Response(action_result)
            }
            Err(err) => {
                log::info!("⚠️  Rejected: {}", err);

                DatabaseResponseAction::Rejected(err)
            }
        }
    }
}

#[cfg(test)]
impl Database {
    pub fn new_test() -> Self {
        Database::new(DatabaseOptions::new_test())
    }
}
