use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// RIASEC personality dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum HollandCategory {
    #[sea_orm(string_value = "R")]
    R,
    #[sea_orm(string_value = "I")]
    I,
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "S")]
    S,
    #[sea_orm(string_value = "E")]
    E,
    #[sea_orm(string_value = "C")]
    C,
}

impl HollandCategory {
    /// Canonical order, also used to break score ties.
    pub const ORDER: [HollandCategory; 6] = [Self::R, Self::I, Self::A, Self::S, Self::E, Self::C];

    pub fn letter(self) -> char {
        match self {
            Self::R => 'R',
            Self::I => 'I',
            Self::A => 'A',
            Self::S => 'S',
            Self::E => 'E',
            Self::C => 'C',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        Self::ORDER.into_iter().find(|k| k.letter() == c.to_ascii_uppercase())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub value: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Options(pub Vec<AnswerOption>);

/// Five-point Likert scale offered when a question sets no options.
pub const LIKERT: [(&str, i32); 5] = [
    ("Rất không thích", 0),
    ("Không thích", 1),
    ("Bình thường", 2),
    ("Thích", 3),
    ("Rất thích", 4),
];

impl Default for Options {
    fn default() -> Self {
        Options(LIKERT.iter().map(|(l, v)| AnswerOption { label: (*l).to_string(), value: *v }).collect())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "holland_question")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order: i32,
    pub content: String,
    pub category: HollandCategory,
    #[sea_orm(column_type = "JsonBinary")]
    pub options: Options,
    pub deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn parse_category(raw: &str) -> Result<HollandCategory, ModelError> {
    let mut chars = raw.trim().chars();
    match (chars.next().and_then(HollandCategory::from_letter), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ModelError::Validation(format!("invalid holland category '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_likert() {
        let o = Options::default();
        assert_eq!(o.0.len(), 5);
        assert_eq!(o.0[0].label, "Rất không thích");
        assert_eq!(o.0[4].value, 4);
    }

    #[test]
    fn category_parse() {
        assert_eq!(parse_category("s").unwrap(), HollandCategory::S);
        assert!(parse_category("X").is_err());
        assert!(parse_category("RI").is_err());
        assert!(parse_category("").is_err());
    }
}
