//! Document kanban core: status projection, view models, and board grouping.
//!
//! This crate is UI-framework agnostic so the Leptos client and the terminal
//! CLI share one definition of how backend flow records become kanban cards
//! and which drag-and-drop moves are legal.

pub mod board;
pub mod document;
pub mod endpoint;
pub mod flow;
pub mod overrides;
pub mod status;
pub mod transition;

pub use board::{BoardStats, DocumentFilter, KanbanColumn, build_columns, group_by_status};
pub use document::{PREVIEW_CHARS, UnifiedDocument, build_documents};
pub use endpoint::{
    DEFAULT_FLOW_LIMIT, FlowQuery, MAX_FLOW_LIMIT, StatusUpdate, UPLOAD_FIELD, active_configs_path, configs_path,
    flow_path, flows_path, health_path, upload_path,
};
pub use flow::{
    CONFIG_STATUS_ACTIVE, CONFIG_STATUS_ARCHIVED, ConfigListResponse, ContentContext, Flow,
    FlowConfig, FlowListResponse, FlowResult, FlowSchema, ListResponse,
};
pub use overrides::StatusOverrides;
pub use status::{
    BackendStatus, KanbanStatus, ParseStatusError, StatusConfig, drop_targets,
    is_transition_allowed, kanban_status_for_code, permitted_targets, to_backend_status,
    to_kanban_status,
};
pub use transition::{MoveError, MovePlan, plan_move};
