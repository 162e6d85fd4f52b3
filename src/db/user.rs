use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, DBUserUpdate, ListParams, SortBy},
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ItemsAndPagesNumber, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

fn map_unique_violation(e: DbErr) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("email already in use".to_string())
        }
        _ => AppError::from(e),
    }
}

impl PostgresService {
    pub async fn find_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// `exclude` skips one row, so an update keeping its own email passes.
    pub async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let mut query = User::find().filter(Column::Email.eq(email));
        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }
        Ok(query.count(&self.db).await? > 0)
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let now = Utc::now();
        UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(map_unique_violation)
    }

    pub async fn update_user(&self, payload: DBUserUpdate) -> Result<(), AppError> {
        let mut am: UserActive = self.find_user_by_id(&payload.id).await?.into();
        am.name = Set(payload.name);
        am.email = Set(payload.email);
        if let Some(hash) = payload.password_hash {
            am.password_hash = Set(hash);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db)
            .await
            .map(|_| ())
            .map_err(map_unique_violation)
    }

    pub async fn delete_user(&self, id: &Uuid) -> Result<(), AppError> {
        let result = User::delete_by_id(*id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn list_users(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<UserModel>, ItemsAndPagesNumber), AppError> {
        let mut query = User::find();
        if let Some(ref name) = params.name_contains {
            query = query.filter(Column::Name.contains(name));
        }
        if let Some(ref email) = params.email_contains {
            query = query.filter(Column::Email.contains(email));
        }

        let column = match params.sort_by {
            SortBy::Id => Column::Id,
            SortBy::Name => Column::Name,
            SortBy::Email => Column::Email,
        };
        let query = query.order_by(column, params.sort_order.clone());

        let paginator = query.paginate(&self.db, params.per_page);
        let totals = paginator.num_items_and_pages().await?;
        let items = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((items, totals))
    }
}
