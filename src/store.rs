use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, SqlErr};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new record with rating, review and ranking unset.
    pub async fn create(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            title: Set(new.title.clone()),
            year: Set(new.year),
            description: Set(new.description),
            poster_url: Set(new.poster_url),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(created) => Ok(created),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::DuplicateTitle(new.title))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("movie {id}")))
    }

    /// All records in insertion (id) order. This is the canonical store order
    /// that ranking tie-breaks fall back on.
    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn set_review(&self, id: i32, rating: f64, review: String) -> AppResult<()> {
        let mut active: movie::ActiveModel = self.get(id).await?.into();
        active.rating = Set(Some(rating));
        active.review = Set(Some(review));
        active.update(&self.db).await?;
        Ok(())
    }

    pub async fn set_ranking(&self, id: i32, ranking: i32) -> AppResult<()> {
        let mut active: movie::ActiveModel = self.get(id).await?.into();
        active.ranking = Set(Some(ranking));
        active.update(&self.db).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("movie {id}")));
        }
        Ok(())
    }
}
