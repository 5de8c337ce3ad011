//! Composition root: resolves named loggers and builds the shared service.

use std::sync::Arc;

use tokio::sync::RwLock;
use todo_core::{Component, LoggerModule, LoggerRegistry, RegistryError, TodoItemService};

/// The single service instance both façades delegate to. The write lock
/// serializes id allocation and every store mutation.
pub type SharedService = Arc<RwLock<TodoItemService>>;

/// Owners that get a dedicated logger.
pub const LOGGER_OWNERS: &[&str] = &[TodoItemService::NAME];

pub fn loggers() -> LoggerRegistry {
    LoggerModule::for_feature(LOGGER_OWNERS)
}

pub fn todo_item_service(
    loggers: &LoggerRegistry,
    constant: &str,
) -> Result<SharedService, RegistryError> {
    let logger = loggers.inject::<TodoItemService>()?;
    Ok(Arc::new(RwLock::new(TodoItemService::new(logger, constant))))
}

#[cfg(test)]
mod tests {
    use todo_core::CreateTodoItem;

    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_consecutive_ids() {
        let service = todo_item_service(&loggers(), "test").unwrap();

        let tasks: Vec<_> = (0..32)
            .map(|n| {
                let service = service.clone();
                tokio::spawn(async move {
                    service.write().await.create(CreateTodoItem {
                        title: format!("task {n}"),
                        completed: false,
                    })
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (6..38).collect::<Vec<u32>>());

        let service = service.read().await;
        let stored: Vec<u32> = service.find_all().iter().map(|item| item.id).collect();
        assert_eq!(stored.len(), 37);
        assert!(stored[5..].windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn service_is_wired_with_its_named_logger() {
        let service = todo_item_service(&loggers(), "test").unwrap();
        let service = service.try_read().unwrap();
        assert_eq!(service.logger().name(), "TodoItemService");
        assert_eq!(service.find_all().len(), 5);
    }

    #[test]
    fn missing_owner_fails_to_wire() {
        let err = todo_item_service(&LoggerRegistry::new(), "test").unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingLogger {
                token: "TodoItemServiceLogger".to_string()
            }
        );
    }
}
