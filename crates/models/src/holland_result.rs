use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::holland_question::HollandCategory;

/// Per-category sums of a submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[allow(non_snake_case)]
pub struct Scores {
    pub R: i32,
    pub I: i32,
    pub A: i32,
    pub S: i32,
    pub E: i32,
    pub C: i32,
}

impl Scores {
    pub fn get(&self, c: HollandCategory) -> i32 {
        match c {
            HollandCategory::R => self.R,
            HollandCategory::I => self.I,
            HollandCategory::A => self.A,
            HollandCategory::S => self.S,
            HollandCategory::E => self.E,
            HollandCategory::C => self.C,
        }
    }

    pub fn add(&mut self, c: HollandCategory, v: i32) {
        let slot = match c {
            HollandCategory::R => &mut self.R,
            HollandCategory::I => &mut self.I,
            HollandCategory::A => &mut self.A,
            HollandCategory::S => &mut self.S,
            HollandCategory::E => &mut self.E,
            HollandCategory::C => &mut self.C,
        };
        *slot += v;
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "holland_result")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub account_id: Option<Uuid>,
    #[sea_orm(column_type = "JsonBinary")]
    pub scores: Scores,
    pub top_code: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
