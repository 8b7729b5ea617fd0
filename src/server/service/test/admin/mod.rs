use crate::server::{
    error::AppError,
    model::pack::PackType,
    service::admin::AdminService,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
