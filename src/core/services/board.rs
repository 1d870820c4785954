//! Task board - status queries and moves on top of a [`TaskService`]

use serde_json::json;

use crate::config::DocopsConfig;
use crate::core::models::{READY_STATUS, Task};
use crate::core::ports::{StatusFilter, TaskService};
use crate::error::Result;

/// Task operations against one database
#[derive(Clone, Copy)]
pub struct TaskBoard<'a> {
    service: &'a dyn TaskService,
    config: &'a DocopsConfig,
    database_id: &'a str,
}

impl<'a> TaskBoard<'a> {
    /// Board over `database_id`, using `config` for property names
    #[must_use]
    pub fn new(service: &'a dyn TaskService, config: &'a DocopsConfig, database_id: &'a str) -> Self {
        Self {
            service,
            config,
            database_id,
        }
    }

    /// Check that the database is reachable with the current credentials
    pub fn check_connection(&self) -> Result<()> {
        self.service.retrieve_database(self.database_id)
    }

    /// Tasks whose status equals `status`
    pub fn query_by_status(&self, status: &str) -> Result<Vec<Task>> {
        let filter = StatusFilter::equals(self.config.status_property(), status);
        let pages = self.service.query_database(self.database_id, &filter)?;

        let tasks: Vec<Task> = pages
            .iter()
            .map(|page| {
                Task::from_page(page, self.config.title_property(), self.config.status_property())
            })
            .collect();

        log::debug!("Found {} task(s) in '{status}' status", tasks.len());
        Ok(tasks)
    }

    /// Tasks ready to be worked on
    pub fn query_ready(&self) -> Result<Vec<Task>> {
        self.query_by_status(READY_STATUS)
    }

    /// Move a task to `new_status`
    pub fn move_task(&self, page_id: &str, new_status: &str) -> Result<()> {
        let properties = status_update(self.config.status_property(), new_status);
        self.service.update_page(page_id, &properties)?;
        log::info!("Moved task {page_id} to '{new_status}'");
        Ok(())
    }
}

impl std::fmt::Debug for TaskBoard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskBoard")
            .field("database_id", &self.database_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Page properties setting a status property
#[must_use]
pub fn status_update(status_property: &str, new_status: &str) -> serde_json::Value {
    json!({ status_property: { "status": { "name": new_status } } })
}
