use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use thiserror::Error;

use crate::entity::prelude::{Faq, FaqActiveModel, FaqModel};
use crate::ids::FaqId;

#[derive(Debug, Error)]
pub enum FaqsServiceError {
    #[error("fatal database error")]
    Db(#[from] DbErr),
    #[error("faq {0} not found")]
    NotFound(FaqId),
}

pub struct NewFaq {
    pub iso: String,
    pub primary: bool,
    pub question: String,
    pub answer: String,
    pub order: i32,
}

#[derive(Clone)]
pub struct FaqsService {
    db: DatabaseConnection,
}

impl FaqsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_faq(&self, new: NewFaq) -> Result<FaqModel, FaqsServiceError> {
        let faq = FaqActiveModel {
            id: Set(FaqId::new()),
            iso: Set(new.iso),
            primary: Set(new.primary),
            question: Set(new.question),
            answer: Set(new.answer),
            order: Set(new.order),
            last_updated: Set(Utc::now()),
        };
        Ok(faq.insert(&self.db).await?)
    }

    pub async fn get_faq(&self, id: FaqId) -> Result<Option<FaqModel>, FaqsServiceError> {
        Ok(Faq::find_by_id(id).one(&self.db).await?)
    }

    /// Bump `last_updated` and apply the edited text fields.
    pub async fn update_faq(
        &self,
        id: FaqId,
        question: Option<String>,
        answer: Option<String>,
    ) -> Result<FaqModel, FaqsServiceError> {
        let faq = Faq::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(FaqsServiceError::NotFound(id))?;

        let mut active: FaqActiveModel = faq.into();
        if let Some(question) = question {
            active.question = Set(question);
        }
        if let Some(answer) = answer {
            active.answer = Set(answer);
        }
        active.last_updated = Set(Utc::now());

        Ok(active.update(&self.db).await?)
    }
}
