//! GraphQL façade over the todo-item service.
//!
//! # Design
//! Object and input types mirror the core DTOs field for field but live here,
//! so the core crate carries no GraphQL derives. Service errors are reported in
//! the response envelope with `extensions.code` set to `NOT_FOUND` or
//! `IDS_EXHAUSTED`.

use async_graphql::{
    http::GraphiQLSource, Context, EmptySubscription, ErrorExtensions, InputObject, Object,
    Result, Schema, SimpleObject,
};
use async_graphql_axum::GraphQL;
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use todo_core::{CreateTodoItem, TodoItem, TodoItemError, UpdateTodoItem};

use crate::bootstrap::SharedService;

pub const ENDPOINT: &str = "/graphql";

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "TodoItem")]
pub struct TodoItemObject {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl From<TodoItem> for TodoItemObject {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            completed: item.completed,
        }
    }
}

#[derive(Debug, InputObject)]
#[graphql(name = "CreateTodoItemInput")]
pub struct CreateTodoItemInput {
    pub title: String,
    pub completed: bool,
}

impl From<CreateTodoItemInput> for CreateTodoItem {
    fn from(input: CreateTodoItemInput) -> Self {
        Self {
            title: input.title,
            completed: input.completed,
        }
    }
}

#[derive(Debug, Default, InputObject)]
#[graphql(name = "UpdateTodoItemInput")]
pub struct UpdateTodoItemInput {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTodoItemInput> for UpdateTodoItem {
    fn from(input: UpdateTodoItemInput) -> Self {
        Self {
            title: input.title,
            completed: input.completed,
        }
    }
}

fn into_graphql_error(err: TodoItemError) -> async_graphql::Error {
    let code = match err {
        TodoItemError::NotFound { .. } => "NOT_FOUND",
        TodoItemError::IdsExhausted => "IDS_EXHAUSTED",
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn todo_items(&self, ctx: &Context<'_>) -> Result<Vec<TodoItemObject>> {
        let service = ctx.data::<SharedService>()?.read().await;
        Ok(service
            .find_all()
            .iter()
            .cloned()
            .map(TodoItemObject::from)
            .collect())
    }

    async fn todo_item(&self, ctx: &Context<'_>, id: u32) -> Result<TodoItemObject> {
        let service = ctx.data::<SharedService>()?.read().await;
        service
            .find_by_id(id)
            .cloned()
            .map(TodoItemObject::from)
            .ok_or_else(|| into_graphql_error(TodoItemError::NotFound { id }))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_todo_item(
        &self,
        ctx: &Context<'_>,
        input: CreateTodoItemInput,
    ) -> Result<TodoItemObject> {
        let mut service = ctx.data::<SharedService>()?.write().await;
        service
            .create(input.into())
            .map(TodoItemObject::from)
            .map_err(into_graphql_error)
    }

    async fn update_todo_item(
        &self,
        ctx: &Context<'_>,
        id: u32,
        update: UpdateTodoItemInput,
    ) -> Result<TodoItemObject> {
        let mut service = ctx.data::<SharedService>()?.write().await;
        service
            .update(id, update.into())
            .map(TodoItemObject::from)
            .map_err(into_graphql_error)
    }

    async fn delete_todo_item(&self, ctx: &Context<'_>, id: u32) -> Result<TodoItemObject> {
        let mut service = ctx.data::<SharedService>()?.write().await;
        service
            .delete(id)
            .map(TodoItemObject::from)
            .map_err(into_graphql_error)
    }
}

pub fn schema(service: SharedService) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// SDL of the schema, for writing to disk.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub fn router(service: SharedService) -> Router {
    Router::new().route(
        ENDPOINT,
        get(graphiql).post_service(GraphQL::new(schema(service))),
    )
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}
