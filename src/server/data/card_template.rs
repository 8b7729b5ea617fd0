use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};

use crate::server::model::card::{CardTemplate, CreateCardTemplateParam};

pub struct CardTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardTemplateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a card template; the ID is assigned by the database.
    pub async fn create(&self, param: CreateCardTemplateParam) -> Result<CardTemplate, DbErr> {
        let entity = entity::card_template::ActiveModel {
            agent_name: ActiveValue::Set(param.agent_name),
            class: ActiveValue::Set(param.class),
            element: ActiveValue::Set(param.element),
            strength: ActiveValue::Set(param.strength),
            intelligence: ActiveValue::Set(param.intelligence),
            charisma: ActiveValue::Set(param.charisma),
            wisdom: ActiveValue::Set(param.wisdom),
            dexterity: ActiveValue::Set(param.dexterity),
            karma: ActiveValue::Set(param.karma),
            special_ability: ActiveValue::Set(param.special_ability),
            ability_description: ActiveValue::Set(param.ability_description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CardTemplate::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<CardTemplate>, DbErr> {
        let entities = entity::prelude::CardTemplate::find()
            .order_by_asc(entity::card_template::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CardTemplate::from_entity).collect())
    }

    /// IDs of every template, used as the draw pool when opening packs.
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::CardTemplate::find()
            .select_only()
            .column(entity::card_template::Column::Id)
            .order_by_asc(entity::card_template::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CardTemplate::find().count(self.db).await
    }
}
